//! Failures of the concurrent driver.
//!
//! Malformed input is not an error here: it arrives as an error-kind token in
//! the stream. These are failures of the machinery around the scan.

/// Error starting or finishing a concurrent scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The producer thread could not be started.
    #[error("failed to start the scanner thread for `{name}`")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },
    /// A scanning step panicked.
    #[error("a scanning step panicked while scanning `{name}`")]
    ProducerPanicked { name: String },
}
