//! Shared type definitions
//!
//! View-local shapes used by the question view and the upload wizard:
//! - SourceRef / QueryResult: simulated answer payload
//! - ImageEntry: a selected image file
//! - TextChunk: editable unit of text produced by the wizard

use serde::{Deserialize, Serialize};

/// A cited source returned alongside an answer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceRef {
    pub excerpt: String,
    pub image_ref: String,
}

/// Simulated answer plus its cited sources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryResult {
    pub response: String,
    pub sources: Vec<SourceRef>,
}

/// A selected image file, captured at the drop-zone boundary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageEntry {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// A user-editable unit of text produced by the upload wizard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextChunk {
    pub id: String,
    pub content: String,
}

/// Upload input kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Text,
}

/// Wizard step
///
/// Positions 2 and 4 of the step indicator are unassigned; only 1, 3 and 5
/// ever render a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Intake = 1,
    ReviewText = 3,
    ReviewChunks = 5,
}

impl WizardStep {
    /// Position on the five-valued step indicator
    pub fn number(self) -> u8 {
        self as u8
    }
}
