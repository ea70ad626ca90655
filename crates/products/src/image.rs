use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// An image attached to an entry (held in memory only).
///
/// The bytes are shared so that cloning a candidate row or an entry does not
/// copy the file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Arc<[u8]>,
}

impl ImageRef {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
