use super::Transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedSentence {
    pub sentence: String,
    pub label: String,
}

/// A transcript together with one label per sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTranscript {
    pub transcript: Transcript,
    pub classified: Vec<ClassifiedSentence>,
}
