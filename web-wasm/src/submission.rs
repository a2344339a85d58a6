//! Submission payload at the JS boundary
//!
//! The wizard has no backend; on final submission the confirmed chunks are
//! serialized into the JSON payload a real indexer would receive and logged
//! to the console.

use notes_qa_common::{Result, TextChunk};
use serde::Serialize;

/// Payload the final submission would post
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPayload<'a> {
    pub chunk_count: usize,
    pub chunks: &'a [TextChunk],
}

/// Serialize the confirmed chunks into the submission payload JSON
pub fn chunks_to_json(chunks: &[TextChunk]) -> Result<String> {
    let payload = UploadPayload {
        chunk_count: chunks.len(),
        chunks,
    };
    Ok(serde_json::to_string(&payload)?)
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_chunks_to_json_includes_chunk_ids() {
        let chunks = vec![TextChunk {
            id: "chunk-0".to_string(),
            content: "Sample OCR text...".to_string(),
        }];

        let json = chunks_to_json(&chunks).expect("JSON conversion failed");
        assert!(json.contains("\"id\":\"chunk-0\""));
    }
}
