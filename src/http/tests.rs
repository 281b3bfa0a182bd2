use std::future::Future;
use std::time::Duration;

use chrono::Local;

use super::test_server::{ScriptedResponse, closed_endpoint, spawn_server};
use super::*;
use crate::payload::sample_job;

fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

fn adapter_with_timeout(timeout: Duration) -> Result<ReqwestCaptureAdapter, String> {
    ReqwestCaptureAdapter::new(&CaptureClientConfig {
        timeout,
        ..CaptureClientConfig::default()
    })
    .map_err(|err| err.to_string())
}

async fn submit_sample(adapter: &ReqwestCaptureAdapter, endpoint: &str) -> AttemptOutcome {
    let payload = sample_job("U123", &Local::now());
    adapter.submit(endpoint, &payload).await
}

#[test]
fn ok_with_json_body_is_success_with_pretty_body() -> Result<(), String> {
    run_async_test(async {
        let server = spawn_server(ScriptedResponse::new(200, r#"{"id": 42}"#))?;
        let adapter = adapter_with_timeout(Duration::from_secs(5))?;
        let outcome = submit_sample(&adapter, &server.url).await;
        let result = AttemptResult::from(&outcome);
        if !result.success {
            return Err(format!("Expected success, got {}", result.message));
        }
        if !result.message.starts_with("✅ Success! Response:") {
            return Err(format!("Unexpected message: {}", result.message));
        }
        if !result.message.contains("\"id\": 42") {
            return Err(format!("Expected pretty body: {}", result.message));
        }
        if server.hits() != 1 {
            return Err(format!("Expected one request, got {}", server.hits()));
        }
        Ok(())
    })
}

#[test]
fn ok_with_text_body_reports_status_only() -> Result<(), String> {
    run_async_test(async {
        let server = spawn_server(ScriptedResponse::new(200, "OK"))?;
        let adapter = adapter_with_timeout(Duration::from_secs(5))?;
        let outcome = submit_sample(&adapter, &server.url).await;
        if outcome.to_string() != "✅ Success! Status: 200" {
            return Err(format!("Unexpected message: {}", outcome));
        }
        if !outcome.is_success() {
            return Err("Expected success".to_owned());
        }
        Ok(())
    })
}

#[test]
fn rejected_json_body_is_failure_with_status_and_body() -> Result<(), String> {
    run_async_test(async {
        let server = spawn_server(ScriptedResponse::new(
            400,
            r#"{"error": "Invalid user ID"}"#,
        ))?;
        let adapter = adapter_with_timeout(Duration::from_secs(5))?;
        let outcome = submit_sample(&adapter, &server.url).await;
        if outcome.is_success() {
            return Err("Expected failure".to_owned());
        }
        if outcome.status() != Some(400) {
            return Err(format!("Unexpected status: {:?}", outcome.status()));
        }
        if outcome.api_error() != Some("Invalid user ID") {
            return Err(format!("Unexpected api error: {:?}", outcome.api_error()));
        }
        let message = outcome.to_string();
        if !message.starts_with("❌ Error 400:") || !message.contains("Invalid user ID") {
            return Err(format!("Unexpected message: {}", message));
        }
        Ok(())
    })
}

#[test]
fn rejected_text_body_keeps_raw_text() -> Result<(), String> {
    run_async_test(async {
        let server = spawn_server(ScriptedResponse::new(500, "upstream exploded"))?;
        let adapter = adapter_with_timeout(Duration::from_secs(5))?;
        let outcome = submit_sample(&adapter, &server.url).await;
        if outcome.to_string() != "❌ Error 500: upstream exploded" {
            return Err(format!("Unexpected message: {}", outcome));
        }
        Ok(())
    })
}

#[test]
fn unreachable_endpoint_is_connection_error() -> Result<(), String> {
    run_async_test(async {
        let endpoint = closed_endpoint()?;
        let adapter = adapter_with_timeout(Duration::from_secs(5))?;
        let outcome = submit_sample(&adapter, &endpoint).await;
        if outcome != AttemptOutcome::ConnectionFailed {
            return Err(format!("Expected connection error, got {:?}", outcome));
        }
        if !outcome.to_string().starts_with("❌ Connection error") {
            return Err(format!("Unexpected message: {}", outcome));
        }
        Ok(())
    })
}

#[test]
fn slow_endpoint_times_out() -> Result<(), String> {
    run_async_test(async {
        let server = spawn_server(
            ScriptedResponse::new(200, r#"{"id": 1}"#).delayed(Duration::from_secs(3)),
        )?;
        let timeout = Duration::from_millis(300);
        let adapter = adapter_with_timeout(timeout)?;
        let outcome = submit_sample(&adapter, &server.url).await;
        if outcome != (AttemptOutcome::TimedOut { timeout }) {
            return Err(format!("Expected timeout, got {:?}", outcome));
        }
        if outcome.to_string() != "❌ Timeout: the endpoint took longer than 300ms to respond" {
            return Err(format!("Unexpected message: {}", outcome));
        }
        Ok(())
    })
}

#[test]
fn request_carries_fixed_headers_and_json_payload() -> Result<(), String> {
    run_async_test(async {
        let server = spawn_server(ScriptedResponse::new(200, "{}"))?;
        let adapter = ReqwestCaptureAdapter::new(&CaptureClientConfig {
            headers: vec![("X-Probe-Run".to_owned(), "nightly".to_owned())],
            ..CaptureClientConfig::default()
        })
        .map_err(|err| err.to_string())?;
        let outcome = submit_sample(&adapter, &server.url).await;
        if !outcome.is_success() {
            return Err(format!("Expected success, got {}", outcome));
        }
        let requests = server.requests();
        let raw = requests
            .first()
            .ok_or_else(|| "Expected a recorded request".to_owned())?;
        let lower = raw.to_ascii_lowercase();
        if !lower.starts_with("post /api/jobs/capture") {
            return Err(format!("Unexpected request line: {}", raw));
        }
        for expected in [
            "content-type: application/json",
            "user-agent: job tracker extension tester/1.0",
            "x-probe-run: nightly",
        ] {
            if !lower.contains(expected) {
                return Err(format!("Missing header {:?} in {}", expected, raw));
            }
        }
        if !raw.contains("\"user_id\":\"U123\"") || !raw.contains("\"status\":\"applied\"") {
            return Err(format!("Unexpected body: {}", raw));
        }
        Ok(())
    })
}

#[test]
fn invalid_extra_header_fails_client_build() -> Result<(), String> {
    let built = ReqwestCaptureAdapter::new(&CaptureClientConfig {
        headers: vec![("Bad Header".to_owned(), "value".to_owned())],
        ..CaptureClientConfig::default()
    });
    match built {
        Err(crate::error::AppError::Http(crate::error::HttpError::InvalidHeaderName {
            header,
            ..
        })) if header == "Bad Header" => Ok(()),
        Err(err) => Err(format!("Expected an HTTP setup error, got {}", err)),
        Ok(_) => Err("Expected Err for invalid header name".to_owned()),
    }
}

#[test]
fn only_status_200_counts_as_success() -> Result<(), String> {
    let created = AttemptOutcome::from_response(201, r#"{"id": 7}"#);
    if created.is_success() {
        return Err("201 must not count as success".to_owned());
    }
    let empty_ok = AttemptOutcome::from_response(200, "");
    if empty_ok.to_string() != "✅ Success! Status: 200" {
        return Err(format!("Unexpected message: {}", empty_ok));
    }
    Ok(())
}

#[test]
fn capture_reply_is_decoded_from_accepted_body() -> Result<(), String> {
    let outcome = AttemptOutcome::from_response(
        200,
        r#"{"success": true, "job": {"id": "b5f1"}, "message": "Job captured successfully"}"#,
    );
    let reply = outcome
        .capture_reply()
        .ok_or_else(|| "Expected a capture reply".to_owned())?;
    if reply.success != Some(true) {
        return Err("Expected success flag".to_owned());
    }
    let job_id = reply.job.and_then(|job| job.id);
    if job_id != Some(serde_json::Value::String("b5f1".to_owned())) {
        return Err(format!("Unexpected job id: {:?}", job_id));
    }
    if reply.message.as_deref() != Some("Job captured successfully") {
        return Err("Unexpected reply message".to_owned());
    }
    Ok(())
}

#[test]
fn response_body_parsing() -> Result<(), String> {
    if ResponseBody::parse("[1, 2]").as_json().is_none() {
        return Err("Expected JSON array".to_owned());
    }
    if ResponseBody::parse("<html>").as_json().is_some() {
        return Err("HTML must stay text".to_owned());
    }
    Ok(())
}
