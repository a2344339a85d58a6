//! Notes QA Common Library
//!
//! Types and view-state logic shared by the web front end

pub mod error;
pub mod query;
pub mod types;
pub mod wizard;

pub use error::{Error, Result};
pub use query::{answer_question, ANSWER_DELAY_MS};
pub use types::{ImageEntry, QueryResult, SourceRef, TextChunk, UploadKind, WizardStep};
pub use wizard::{UploadWizard, EXTRACTED_PLACEHOLDER};
