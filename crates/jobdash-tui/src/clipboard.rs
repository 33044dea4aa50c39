use jobdash_core::{JobdashError, JobdashResult};

pub fn copy_text(text: &str) -> JobdashResult<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| JobdashError::Internal(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| JobdashError::Internal(e.to_string()))
}
