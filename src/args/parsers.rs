use std::time::Duration;

use url::Url;

use crate::error::ValidationError;

pub(crate) fn parse_header(s: &str) -> Result<(String, String), ValidationError> {
    match s.split_once(':') {
        Some((key, value)) => {
            let key = key.trim();
            if key.is_empty() {
                return Err(ValidationError::HeaderNameEmpty {
                    value: s.to_owned(),
                });
            }
            Ok((key.to_owned(), value.trim().to_owned()))
        }
        None => Err(ValidationError::InvalidHeaderFormat {
            value: s.to_owned(),
        }),
    }
}

pub(crate) fn parse_endpoint(s: &str) -> Result<String, ValidationError> {
    let value = s.trim();
    let url = Url::parse(value).map_err(|err| ValidationError::InvalidEndpointUrl {
        url: value.to_owned(),
        source: err,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ValidationError::UnsupportedEndpointScheme {
            url: value.to_owned(),
        });
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::EndpointMissingHost {
            url: value.to_owned(),
        });
    }
    Ok(value.to_owned())
}

pub(crate) fn parse_duration_arg(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let mut digits_len = 0usize;
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits_len = digits_len.saturating_add(1);
        } else {
            break;
        }
    }
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        _ => {
            return Err(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            });
        }
    };

    if duration.is_zero() {
        return Err(ValidationError::DurationZero);
    }

    Ok(duration)
}
