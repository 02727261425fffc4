/// MIME type assumed when an upload carries no usable content type.
pub const DEFAULT_AUDIO_MIME: &str = "audio/webm";

/// What the `audio` form field turned out to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSubmission {
    Missing,
    /// A plain form value rather than an uploaded file.
    Text(String),
    Blob(AudioClip),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl AudioClip {
    pub fn new(data: Vec<u8>, mime_type: Option<&str>) -> Self {
        let mime_type = mime_type
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_AUDIO_MIME)
            .to_string();
        Self { data, mime_type }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
