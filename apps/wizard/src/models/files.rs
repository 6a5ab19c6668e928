use bytes::Bytes;
use serde::Serialize;

/// A file received from the browser, held in memory until the next reset.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn summary(&self) -> FileSummary {
        FileSummary {
            name: self.name.clone(),
            content_type: self.content_type.clone(),
            size: self.size(),
            size_label: crate::util::format_file_size(self.size() as u64),
        }
    }
}

/// What the state endpoint reports about an uploaded file (never the bytes).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FileSummary {
    pub name: String,
    pub content_type: String,
    pub size: usize,
    pub size_label: String,
}
