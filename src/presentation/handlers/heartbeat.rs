pub const HEARTBEAT_MESSAGE: &str = "API is up and well";

pub async fn heartbeat_handler() -> &'static str {
    HEARTBEAT_MESSAGE
}
