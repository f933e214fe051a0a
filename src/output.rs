use std::io::{self, Write};

use serde::Serialize;

use crate::app::{ProgressEvent, ProgressSink, RunReport};
use crate::bibtex::SkipReason;

#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    Text,
    Json,
}

pub struct JsonOutput;

impl JsonOutput {
    pub fn print_report(result: &RunReport) -> io::Result<()> {
        Self::print_json(result)
    }

    fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        let mut stdout = io::stdout();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}

// JSON mode keeps stdout clean for the report.
impl ProgressSink for JsonOutput {
    fn event(&self, _event: ProgressEvent) {}
}

/// Human-readable output. On a dry run stdout carries only the
/// bibliography, so progress and the summary go to stderr.
pub struct TextOutput {
    dry_run: bool,
}

impl TextOutput {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Missing titles are ordinary skips and are not listed; only malformed
    /// records are reported.
    pub fn format_summary(result: &RunReport) -> String {
        let green = "\x1b[32m";
        let yellow = "\x1b[33m";
        let reset = "\x1b[0m";

        let mut out = String::new();
        match &result.output {
            Some(path) => out.push_str(&format!(
                "\n{green}✓ Successfully wrote {} entries to {path}{reset}\n",
                result.written
            )),
            None => out.push_str(&format!(
                "\n{yellow}Dry run: {} entries, nothing written{reset}\n",
                result.written
            )),
        }

        let malformed = result
            .skipped
            .iter()
            .filter(|skipped| matches!(skipped.reason, SkipReason::Malformed(_)))
            .collect::<Vec<_>>();
        if !malformed.is_empty() {
            out.push_str(&format!("{yellow}Skipped {} works:{reset}\n", malformed.len()));
            for skipped in malformed {
                match skipped.put_code {
                    Some(code) => out.push_str(&format!(
                        "{yellow}  - put-code {code}: {}{reset}\n",
                        skipped.reason
                    )),
                    None => out.push_str(&format!("{yellow}  - {}{reset}\n", skipped.reason)),
                }
            }
        }

        out.push_str("\nNote: You may need to manually add:\n");
        out.push_str("  - selected={true} for featured papers\n");
        out.push_str("  - abstracts\n");
        out.push_str("  - citation counts\n");
        out
    }

    pub fn print_summary(&self, result: &RunReport) -> io::Result<()> {
        self.write_status(&Self::format_summary(result))
    }

    pub fn print_bibliography(result: &RunReport) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(result.bibliography.as_bytes())?;
        stdout.flush()
    }

    fn write_status(&self, text: &str) -> io::Result<()> {
        if self.dry_run {
            io::stderr().write_all(text.as_bytes())
        } else {
            io::stdout().write_all(text.as_bytes())
        }
    }
}

impl ProgressSink for TextOutput {
    fn event(&self, event: ProgressEvent) {
        let line = match event.elapsed {
            Some(elapsed) => format!("{} ({:.1}s)\n", event.message, elapsed.as_secs_f64()),
            None => format!("{}\n", event.message),
        };
        let _ = self.write_status(&line);
    }
}
