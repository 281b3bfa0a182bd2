//! Job application payloads posted to the capture endpoints.
mod builder;
mod linkedin;


pub use builder::{CustomJobInput, JobPayload, custom_job, sample_job};
pub use linkedin::external_id_from_url;

/// Status every captured application is recorded with.
pub const APPLIED_STATUS: &str = "applied";
/// Location sent when the custom prompt is left blank.
pub const LOCATION_FALLBACK: &str = "Não informado";
