use bytes::Bytes;

const DEFAULT_CONTENT_TYPE: &str = "audio/wav";

/// Raw audio received from a client, guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    data: Bytes,
    file_name: Option<String>,
    content_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("uploaded file is empty")]
pub struct EmptyUpload;

impl AudioUpload {
    pub fn new(
        data: impl Into<Bytes>,
        file_name: Option<String>,
        content_type: Option<String>,
    ) -> Result<Self, EmptyUpload> {
        let data = data.into();
        if data.is_empty() {
            return Err(EmptyUpload);
        }

        Ok(Self {
            data,
            file_name: file_name.filter(|name| !name.trim().is_empty()),
            content_type: content_type.unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// File extension used when staging, taken from the client file name.
    pub fn extension(&self) -> Option<&str> {
        self.file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
    }
}
