use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

/// Status code treated as an accepted capture. Other 2xx codes are failures.
pub(crate) const ACCEPTED_STATUS: u16 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str::<Value>(raw).map_or_else(|_| Self::Text(raw.to_owned()), Self::Json)
    }

    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

/// How a single endpoint attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// HTTP 200. The body may or may not be JSON.
    Accepted { status: u16, body: ResponseBody },
    /// Any other status code.
    Rejected { status: u16, body: ResponseBody },
    /// DNS failure, refused or unreachable connection.
    ConnectionFailed,
    /// No complete response within the attempt timeout.
    TimedOut { timeout: Duration },
    /// Anything else that went wrong while sending or reading.
    Unexpected { detail: String },
}

impl AttemptOutcome {
    #[must_use]
    pub fn from_response(status: u16, raw_body: &str) -> Self {
        let body = ResponseBody::parse(raw_body);
        if status == ACCEPTED_STATUS {
            Self::Accepted { status, body }
        } else {
            Self::Rejected { status, body }
        }
    }

    /// Connect errors win over timeouts so a connect timeout reads as an
    /// unreachable endpoint.
    #[must_use]
    pub fn from_transport_error(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_connect() {
            Self::ConnectionFailed
        } else if err.is_timeout() {
            Self::TimedOut { timeout }
        } else {
            Self::Unexpected {
                detail: err.to_string(),
            }
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Accepted { status, .. } | Self::Rejected { status, .. } => Some(*status),
            Self::ConnectionFailed | Self::TimedOut { .. } | Self::Unexpected { .. } => None,
        }
    }

    /// Decodes an accepted body shaped like the capture API reply.
    #[must_use]
    pub fn capture_reply(&self) -> Option<CaptureReply> {
        match self {
            Self::Accepted {
                body: ResponseBody::Json(value),
                ..
            } => CaptureReply::deserialize(value).ok(),
            Self::Accepted { .. }
            | Self::Rejected { .. }
            | Self::ConnectionFailed
            | Self::TimedOut { .. }
            | Self::Unexpected { .. } => None,
        }
    }

    /// The `error` field of a rejected JSON body, if the API sent one.
    #[must_use]
    pub fn api_error(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                body: ResponseBody::Json(value),
                ..
            } => value.get("error").and_then(Value::as_str),
            Self::Accepted { .. }
            | Self::Rejected { .. }
            | Self::ConnectionFailed
            | Self::TimedOut { .. }
            | Self::Unexpected { .. } => None,
        }
    }
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted {
                body: ResponseBody::Json(value),
                ..
            } => write!(f, "✅ Success! Response: {:#}", value),
            Self::Accepted {
                status,
                body: ResponseBody::Text(_),
            } => write!(f, "✅ Success! Status: {}", status),
            Self::Rejected {
                status,
                body: ResponseBody::Json(value),
            } => write!(f, "❌ Error {}: {}", status, value),
            Self::Rejected {
                status,
                body: ResponseBody::Text(text),
            } => write!(f, "❌ Error {}: {}", status, text),
            Self::ConnectionFailed => {
                write!(f, "❌ Connection error: could not connect to the endpoint")
            }
            Self::TimedOut { timeout } => write!(
                f,
                "❌ Timeout: the endpoint took longer than {} to respond",
                format_timeout(*timeout)
            ),
            Self::Unexpected { detail } => write!(f, "❌ Unexpected error: {}", detail),
        }
    }
}

fn format_timeout(timeout: Duration) -> String {
    if timeout.subsec_millis() == 0 {
        format!("{}s", timeout.as_secs())
    } else {
        format!("{}ms", timeout.as_millis())
    }
}

/// The (success, message) pair reported for every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptResult {
    pub success: bool,
    pub message: String,
}

impl From<&AttemptOutcome> for AttemptResult {
    fn from(outcome: &AttemptOutcome) -> Self {
        Self {
            success: outcome.is_success(),
            message: outcome.to_string(),
        }
    }
}

/// Reply body of the capture route on success.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureReply {
    pub success: Option<bool>,
    pub job: Option<CapturedJob>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CapturedJob {
    pub id: Option<Value>,
}
