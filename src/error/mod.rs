mod app;
mod config;
mod http;
mod prompt;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use prompt::PromptError;
pub use validation::ValidationError;
