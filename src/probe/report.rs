use std::io::Write;

use crate::payload::JobPayload;
use crate::system::banner::SEPARATOR;

const TROUBLESHOOTING_HINTS: [&str; 4] = [
    "the application is deployed and running",
    "the API URL is correct",
    "there are no CORS problems",
    "the API accepts POST requests on /api/jobs/capture",
];

pub(super) fn write_sample_header<W: Write>(
    out: &mut W,
    user_id: &str,
    payload: &JobPayload,
) -> std::io::Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "🚀 TESTING JOB TRACKER EXTENSION API")?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "👤 User ID: {}", user_id)?;
    writeln!(out, "📝 Test job: {} - {}", payload.title, payload.company)?;
    writeln!(out, "{}", SEPARATOR)
}

pub(super) fn write_sample_summary<W: Write>(
    out: &mut W,
    succeeded: usize,
    total: usize,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "📊 TEST SUMMARY")?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "✅ Working endpoints: {}/{}", succeeded, total)?;
    if succeeded > 0 {
        writeln!(out, "🎉 The extension should work correctly!")
    } else {
        writeln!(out, "⚠️  No endpoint is working. Check that:")?;
        for hint in TROUBLESHOOTING_HINTS {
            writeln!(out, "   • {}", hint)?;
        }
        Ok(())
    }
}

pub(super) fn write_custom_header<W: Write>(out: &mut W, payload_json: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🔧 CUSTOM DATA TEST")?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "📋 Payload sent:")?;
    writeln!(out, "{}", payload_json)
}
