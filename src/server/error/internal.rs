use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A task on the blocking thread pool panicked or was cancelled.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),

    /// A generated complaint ID stayed taken after repeated attempts.
    #[error("Could not allocate a unique complaint ID after {attempts} attempts")]
    ComplaintIdExhausted {
        /// Number of candidate IDs tried
        attempts: u32,
    },
}
