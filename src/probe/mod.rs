//! Endpoint test orchestration: the sample sweep and the custom probe.
mod report;
mod tester;


pub use tester::Tester;
