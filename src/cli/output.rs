/// Output formatting: plain path line or JSON, plus error reporting.
use std::io::Write;

use crate::types::{ErrorOutput, FetchOutput};

/// Output context passed to the command and writers.
pub struct OutputCtx {
    pub json: bool,
    /// When true, log stage timings.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(json: bool, debug: bool) -> Self {
        Self { json, debug }
    }

    /// Start a named debug timer. Logs elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Write the fetch result to `out` (stdout in `main`): exactly one line.
pub fn write_fetched<W: Write>(out: &mut W, result: &FetchOutput, ctx: &OutputCtx) {
    if ctx.json {
        match serde_json::to_string(result) {
            Ok(s) => {
                let _ = writeln!(out, "{s}");
            }
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    } else {
        let _ = writeln!(out, "{}", result.path);
    }
}

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, json: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    if json {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
        if let Some(tool_output) = &err.error.tool_output {
            let _ = writeln!(out, "{tool_output}");
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            tracing::debug!(stage = self.label, "{ms:.2}ms");
        }
    }
}
