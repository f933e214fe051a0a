use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info, warn};

use crate::bibtex::{BibEntry, SkipReason, convert_work};
use crate::config::PipelineConfig;
use crate::error::BibError;
use crate::orcid::{OrcidClient, fetch_works};
use crate::writer::{render_bibliography, write_bibliography};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedWork {
    pub put_code: Option<u64>,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub orcid_id: String,
    pub fetched: usize,
    pub written: usize,
    pub skipped: Vec<SkippedWork>,
    /// `None` on a dry run.
    pub output: Option<String>,
    #[serde(skip)]
    pub bibliography: String,
}

#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub message: String,
    pub elapsed: Option<Duration>,
}

pub trait ProgressSink {
    fn event(&self, event: ProgressEvent);
}

#[derive(Clone)]
pub struct App<C: OrcidClient> {
    client: C,
}

impl<C: OrcidClient> App<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetches, converts and writes in one pass. Nothing is written unless
    /// every fetch succeeded.
    pub fn run(
        &self,
        config: &PipelineConfig,
        options: RunOptions,
        sink: &dyn ProgressSink,
    ) -> Result<RunReport, BibError> {
        let started = Instant::now();
        sink.event(ProgressEvent {
            message: format!("Fetching publications for ORCID: {}", config.orcid_id),
            elapsed: None,
        });
        info!(orcid = %config.orcid_id, "fetching works");
        let works = fetch_works(&self.client, &config.orcid_id)?;
        sink.event(ProgressEvent {
            message: format!("Found {} publications", works.len()),
            elapsed: Some(started.elapsed()),
        });

        let mut entries: Vec<BibEntry> = Vec::with_capacity(works.len());
        let mut skipped = Vec::new();
        for raw in &works {
            let put_code = raw.get("put-code").and_then(|value| value.as_u64());
            match convert_work(raw) {
                Ok(entry) => entries.push(entry),
                Err(reason) => {
                    if let SkipReason::Malformed(detail) = &reason {
                        warn!(?put_code, %detail, "skipping work");
                        sink.event(ProgressEvent {
                            message: format!("Error converting work: {detail}"),
                            elapsed: None,
                        });
                    }
                    skipped.push(SkippedWork { put_code, reason });
                }
            }
        }

        let bibliography = render_bibliography(&entries);
        let output = if options.dry_run {
            None
        } else {
            write_bibliography(&config.output, &bibliography)?;
            info!(path = %config.output, entries = entries.len(), "bibliography written");
            sink.event(ProgressEvent {
                message: format!(
                    "Successfully wrote {} entries to {}",
                    entries.len(),
                    config.output
                ),
                elapsed: Some(started.elapsed()),
            });
            Some(config.output.to_string())
        };

        Ok(RunReport {
            orcid_id: config.orcid_id.to_string(),
            fetched: works.len(),
            written: entries.len(),
            skipped,
            output,
            bibliography,
        })
    }
}
