//! Upload wizard state
//!
//! A strictly linear wizard: choose the input kind, collect images (or raw
//! text), review the extracted texts, then review and submit the resulting
//! chunks. Extraction is simulated: every image yields the same placeholder
//! text.

use crate::error::{Error, Result};
use crate::types::{ImageEntry, TextChunk, UploadKind, WizardStep};

/// Placeholder produced per image by the simulated extraction
pub const EXTRACTED_PLACEHOLDER: &str = "Sample OCR text...";

/// In-memory wizard state, reset wholesale on final submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadWizard {
    pub kind: Option<UploadKind>,
    pub images: Vec<ImageEntry>,
    pub extracted_texts: Vec<String>,
    pub text_input: String,
    pub chunks: Vec<TextChunk>,
    pub step: WizardStep,
}

impl UploadWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose image or text input at step 1
    pub fn select_kind(&mut self, kind: UploadKind) {
        self.kind = Some(kind);
    }

    /// Replace the current image selection (each drop or pick replaces)
    pub fn set_images(&mut self, entries: Vec<ImageEntry>) {
        self.images = entries;
    }

    /// Simulated extraction: one placeholder text per image, then advance to
    /// the review step
    pub fn extract_texts(&mut self) -> Result<()> {
        if self.kind != Some(UploadKind::Image) {
            return Err(Error::Wizard("image input is not selected".to_string()));
        }
        if self.images.is_empty() {
            return Err(Error::Wizard("no images selected".to_string()));
        }

        self.extracted_texts = self
            .images
            .iter()
            .map(|_| EXTRACTED_PLACEHOLDER.to_string())
            .collect();
        self.step = WizardStep::ReviewText;
        Ok(())
    }

    /// Edit one extracted text in place
    pub fn edit_extracted(&mut self, index: usize, content: String) -> Result<()> {
        match self.extracted_texts.get_mut(index) {
            Some(text) => {
                *text = content;
                Ok(())
            }
            None => Err(Error::Wizard(format!("no extracted text at index {index}"))),
        }
    }

    /// Convert every extracted text into a chunk, then advance to chunk review
    ///
    /// Chunk ids are `chunk-{index}`, unique within the wizard run.
    pub fn confirm_texts(&mut self) -> Result<()> {
        if self.extracted_texts.is_empty() {
            return Err(Error::Wizard("no extracted texts to confirm".to_string()));
        }

        self.chunks = self
            .extracted_texts
            .iter()
            .enumerate()
            .map(|(index, text)| TextChunk {
                id: format!("chunk-{index}"),
                content: text.clone(),
            })
            .collect();
        self.step = WizardStep::ReviewChunks;
        Ok(())
    }

    /// Text path: the raw input becomes the single extracted text and its
    /// single chunk, jumping straight to chunk review
    pub fn process_text(&mut self) -> Result<()> {
        if self.kind != Some(UploadKind::Text) {
            return Err(Error::Wizard("text input is not selected".to_string()));
        }

        self.extracted_texts = vec![self.text_input.clone()];
        self.chunks = vec![TextChunk {
            id: "chunk-0".to_string(),
            content: self.text_input.clone(),
        }];
        self.step = WizardStep::ReviewChunks;
        Ok(())
    }

    /// Edit one chunk by identifier
    pub fn edit_chunk(&mut self, id: &str, content: String) -> Result<()> {
        match self.chunks.iter_mut().find(|chunk| chunk.id == id) {
            Some(chunk) => {
                chunk.content = content;
                Ok(())
            }
            None => Err(Error::Wizard(format!("unknown chunk id {id}"))),
        }
    }

    /// Final submission: hand back the confirmed chunks and reset the wizard
    /// to step 1 with no input kind selected
    pub fn submit(&mut self) -> Vec<TextChunk> {
        let chunks = std::mem::take(&mut self.chunks);
        *self = Self::default();
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> ImageEntry {
        ImageEntry {
            file_name: name.to_string(),
            mime_type: "image/jpeg".to_string(),
            size_bytes: 1024,
        }
    }

    #[test]
    fn test_new_wizard_starts_at_intake_with_no_kind() {
        let wizard = UploadWizard::new();
        assert_eq!(wizard.step, WizardStep::Intake);
        assert_eq!(wizard.kind, None);
        assert!(wizard.images.is_empty());
        assert!(wizard.chunks.is_empty());
    }

    #[test]
    fn test_set_images_replaces_selection() {
        let mut wizard = UploadWizard::new();
        wizard.select_kind(UploadKind::Image);
        wizard.set_images(vec![image("a.jpg"), image("b.jpg")]);
        wizard.set_images(vec![image("c.png")]);

        assert_eq!(wizard.images.len(), 1);
        assert_eq!(wizard.images[0].file_name, "c.png");
    }

    #[test]
    fn test_extract_texts_yields_one_placeholder_per_image() {
        let mut wizard = UploadWizard::new();
        wizard.select_kind(UploadKind::Image);
        wizard.set_images(vec![image("a.jpg"), image("b.jpg"), image("c.png")]);

        wizard.extract_texts().expect("extraction failed");

        assert_eq!(wizard.step, WizardStep::ReviewText);
        assert_eq!(wizard.extracted_texts.len(), 3);
        assert!(wizard
            .extracted_texts
            .iter()
            .all(|text| text == EXTRACTED_PLACEHOLDER));
    }

    #[test]
    fn test_extract_texts_with_no_images_fails_and_leaves_state_unchanged() {
        let mut wizard = UploadWizard::new();
        wizard.select_kind(UploadKind::Image);
        let before = wizard.clone();

        let result = wizard.extract_texts();

        assert!(matches!(result, Err(Error::Wizard(_))));
        assert_eq!(wizard, before);
    }

    #[test]
    fn test_extract_texts_requires_image_kind() {
        let mut wizard = UploadWizard::new();
        wizard.select_kind(UploadKind::Text);
        wizard.set_images(vec![image("a.jpg")]);

        assert!(wizard.extract_texts().is_err());
        assert_eq!(wizard.step, WizardStep::Intake);
    }

    #[test]
    fn test_edit_extracted_carries_into_chunks() {
        let mut wizard = UploadWizard::new();
        wizard.select_kind(UploadKind::Image);
        wizard.set_images(vec![image("a.jpg"), image("b.jpg")]);
        wizard.extract_texts().expect("extraction failed");

        wizard
            .edit_extracted(1, "edited text".to_string())
            .expect("edit failed");
        wizard.confirm_texts().expect("confirmation failed");

        assert_eq!(wizard.step, WizardStep::ReviewChunks);
        assert_eq!(wizard.chunks.len(), 2);
        assert_eq!(wizard.chunks[0].content, EXTRACTED_PLACEHOLDER);
        assert_eq!(wizard.chunks[1].content, "edited text");
    }

    #[test]
    fn test_edit_extracted_out_of_range() {
        let mut wizard = UploadWizard::new();
        wizard.select_kind(UploadKind::Image);
        wizard.set_images(vec![image("a.jpg")]);
        wizard.extract_texts().expect("extraction failed");

        assert!(wizard.edit_extracted(5, "nope".to_string()).is_err());
    }

    #[test]
    fn test_chunk_ids_are_unique() {
        let mut wizard = UploadWizard::new();
        wizard.select_kind(UploadKind::Image);
        wizard.set_images(vec![image("a.jpg"), image("b.jpg"), image("c.jpg")]);
        wizard.extract_texts().expect("extraction failed");
        wizard.confirm_texts().expect("confirmation failed");

        let mut ids: Vec<&str> = wizard.chunks.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), wizard.chunks.len());
        assert_eq!(wizard.chunks[0].id, "chunk-0");
    }

    #[test]
    fn test_confirm_texts_with_nothing_extracted_fails() {
        let mut wizard = UploadWizard::new();
        wizard.select_kind(UploadKind::Image);

        assert!(wizard.confirm_texts().is_err());
        assert_eq!(wizard.step, WizardStep::Intake);
    }

    #[test]
    fn test_text_path_yields_exactly_one_chunk() {
        let mut wizard = UploadWizard::new();
        wizard.select_kind(UploadKind::Text);
        wizard.text_input = "my raw notes".to_string();

        wizard.process_text().expect("processing failed");

        assert_eq!(wizard.step, WizardStep::ReviewChunks);
        assert_eq!(wizard.extracted_texts, vec!["my raw notes".to_string()]);
        assert_eq!(wizard.chunks.len(), 1);
        assert_eq!(wizard.chunks[0].id, "chunk-0");
        assert_eq!(wizard.chunks[0].content, "my raw notes");
    }

    #[test]
    fn test_process_text_requires_text_kind() {
        let mut wizard = UploadWizard::new();
        wizard.select_kind(UploadKind::Image);
        wizard.text_input = "notes".to_string();

        assert!(wizard.process_text().is_err());
        assert_eq!(wizard.step, WizardStep::Intake);
    }

    #[test]
    fn test_edit_chunk_by_id() {
        let mut wizard = UploadWizard::new();
        wizard.select_kind(UploadKind::Text);
        wizard.text_input = "original".to_string();
        wizard.process_text().expect("processing failed");

        wizard
            .edit_chunk("chunk-0", "revised".to_string())
            .expect("edit failed");

        assert_eq!(wizard.chunks[0].content, "revised");
        assert!(wizard.edit_chunk("chunk-9", "nope".to_string()).is_err());
    }

    #[test]
    fn test_submit_returns_chunks_and_resets_everything() {
        let mut wizard = UploadWizard::new();
        wizard.select_kind(UploadKind::Image);
        wizard.set_images(vec![image("a.jpg"), image("b.jpg")]);
        wizard.extract_texts().expect("extraction failed");
        wizard.confirm_texts().expect("confirmation failed");
        wizard
            .edit_chunk("chunk-1", "kept edit".to_string())
            .expect("edit failed");

        let submitted = wizard.submit();

        assert_eq!(submitted.len(), 2);
        assert_eq!(submitted[1].content, "kept edit");
        assert_eq!(wizard, UploadWizard::default());
        assert_eq!(wizard.step, WizardStep::Intake);
        assert_eq!(wizard.kind, None);
    }

    #[test]
    fn test_submit_resets_regardless_of_chunk_contents() {
        let mut wizard = UploadWizard::new();
        wizard.select_kind(UploadKind::Text);
        wizard.process_text().expect("processing failed");

        let submitted = wizard.submit();

        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].content, "");
        assert_eq!(wizard, UploadWizard::default());
    }
}
