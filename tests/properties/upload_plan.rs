//! Property tests for upload planning.

use std::collections::BTreeSet;

use proptest::prelude::*;

use fnstage::domain::entities::{Backend, Endpoint};
use fnstage::domain::services::plan_uploads;
use fnstage::Platform;

fn endpoints() -> impl Strategy<Value = Vec<Endpoint>> {
    let region = prop_oneof![
        Just("us-central1"),
        Just("us-east1"),
        Just("europe-west1"),
        Just("asia-east1"),
    ];
    let platform = prop_oneof![Just(Platform::Gcfv1), Just(Platform::Gcfv2)];
    proptest::collection::vec(("[a-z]{1,6}", region, platform), 0..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (id, region, platform))| Endpoint::new(format!("{id}-{i}"), region, platform))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: at most one generation-1 upload, one generation-2 upload
    /// per region with a generation-2 endpoint, and nothing else.
    #[test]
    fn property_plan_matches_backend(endpoints in endpoints()) {
        let backend = Backend::of(endpoints);
        let plan = plan_uploads(&backend);

        prop_assert_eq!(plan.gen1_region.is_some(), backend.has_platform(Platform::Gcfv1));

        let expected: BTreeSet<&str> = backend
            .all_endpoints()
            .filter(|e| e.platform == Platform::Gcfv2)
            .map(|e| e.region.as_str())
            .collect();
        let planned: BTreeSet<&str> = plan.gen2_regions.iter().map(String::as_str).collect();
        prop_assert_eq!(planned, expected);
        let distinct = plan.gen2_regions.iter().collect::<BTreeSet<_>>().len();
        prop_assert_eq!(plan.gen2_regions.len(), distinct);
    }

    /// PROPERTY: the generation-1 region does not depend on insertion order.
    #[test]
    fn property_gen1_region_is_order_independent(endpoints in endpoints()) {
        let forward = plan_uploads(&Backend::of(endpoints.clone()));
        let reversed = plan_uploads(&Backend::of(endpoints.into_iter().rev()));
        prop_assert_eq!(forward.gen1_region, reversed.gen1_region);
    }
}
