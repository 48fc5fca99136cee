mod api_error;
mod classify_audio;
mod classify_sentences;
mod classify_text;
mod heartbeat;
mod upload;

pub use api_error::{
    ApiError, BACKEND_ERROR_MESSAGE, ErrorResponse, FILE_EMPTY_MESSAGE, FILE_TOO_LARGE_MESSAGE,
    UPSTREAM_ERROR_MESSAGE,
};
pub use classify_audio::{
    ClassifiedSentenceResponse, ClassifyAudioResponse, classify_audio_handler,
};
pub use classify_sentences::classify_sentences_handler;
pub use classify_text::classify_text_handler;
pub use heartbeat::{HEARTBEAT_MESSAGE, heartbeat_handler};
pub use upload::FILE_FIELD;
