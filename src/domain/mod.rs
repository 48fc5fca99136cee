mod audio_upload;
mod classification;
mod sentence_batch;
mod transcript;
mod upload_id;

pub use audio_upload::{AudioUpload, EmptyUpload};
pub use classification::{ClassifiedSentence, ClassifiedTranscript};
pub use sentence_batch::SentenceBatch;
pub use transcript::Transcript;
pub use upload_id::UploadId;
