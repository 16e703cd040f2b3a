use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrumboardError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not logged in: {0}")]
    NotLoggedIn(String),

    #[error("Malformed session data: {0}")]
    MalformedSession(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ScrumboardError {
    /// Failures of the remote store, as opposed to local setup problems
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
