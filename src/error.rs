use thiserror::Error;

/// Whatever a handler reports when it cannot react to an event.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// A handler failed; handlers registered after it were not invoked.
    #[error("handler #{position} for {event_type} failed: {source}")]
    Handler {
        event_type: String,
        /// Index of the failing handler in registration order.
        position: usize,
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    /// The event type whose dispatch failed.
    pub fn event_type(&self) -> &str {
        match self {
            DispatchError::Handler { event_type, .. } => event_type,
        }
    }
}
