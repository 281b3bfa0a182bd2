//! Single POST attempts against capture endpoints and their classification.
mod client;
mod outcome;
mod port;

#[cfg(test)]
pub(crate) mod test_server;
#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;

pub use client::{CaptureClientConfig, ReqwestCaptureAdapter};
pub use outcome::{AttemptOutcome, AttemptResult, CaptureReply, CapturedJob, ResponseBody};
pub use port::CapturePort;
