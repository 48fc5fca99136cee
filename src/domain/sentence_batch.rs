use unicode_segmentation::UnicodeSegmentation;

use super::Transcript;

/// Ordered text fragments submitted for classification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SentenceBatch(Vec<String>);

impl SentenceBatch {
    /// Keeps a caller-supplied list as is, blank entries included.
    pub fn new(sentences: Vec<String>) -> Self {
        Self(sentences)
    }

    /// Splits a transcript on Unicode sentence boundaries, dropping blank fragments.
    pub fn from_transcript(transcript: &Transcript) -> Self {
        let sentences = transcript
            .as_str()
            .unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Self(sentences)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}
