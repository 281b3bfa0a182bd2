use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Input closed while waiting for '{prompt}'.")]
    InputClosed { prompt: String },
    #[error("Failed to read input: {source}")]
    ReadFailed {
        #[source]
        source: std::io::Error,
    },
}
