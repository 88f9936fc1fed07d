//! The clipboard seam.

use crate::error::ClipboardError;

/// Something that can take a piece of text for the user to paste.
pub trait Clipboard {
    /// Put `text` on the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A clipboard that only remembers the last text written to it.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text written, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
