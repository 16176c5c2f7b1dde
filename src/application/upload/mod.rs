//! Upload Module
//!
//! Uploads a codebase's packaged source to every platform destination the
//! desired backend needs.
//!
//! ## Structure
//!
//! - `result` - Result types (`UploadReport`, `CompletedUpload`)
//! - `use_case` - Core use case logic (`UploadSourcesUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use fnstage::application::upload::UploadSourcesUseCase;
//!
//! let use_case = UploadSourcesUseCase::new(checker, gen1_api, gen2_api, uploader)
//!     .with_notifier(notifier);
//! let report = use_case.execute(&context, &config, &payload).await?;
//! ```

mod result;
mod use_case;

pub use result::{CompletedUpload, UploadReport};
pub use use_case::UploadSourcesUseCase;
