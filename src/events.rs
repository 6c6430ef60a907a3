// src/events.rs
//! Machine-readable session journal.
//!
//! Events are appended to `.seeker/events.jsonl`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    SessionStarted,
    SessionEnded {
        viewed: usize,
    },
    SearchPerformed {
        query: String,
        total: usize,
    },
    ViewChanged {
        view: String,
    },
    ResourceSelected {
        id: String,
    },
    RecommendationsServed {
        focal: String,
        ids: Vec<String>,
    },
    ComparisonChanged {
        slots: Vec<String>,
    },
    ComparisonRejected {
        id: String,
    },
    LayoutCooled {
        steps: usize,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeekerEvent {
    pub timestamp: u64,
    pub kind: EventKind,
}

#[derive(Debug, Clone)]
pub struct EventLogger {
    log_path: PathBuf,
}

impl EventLogger {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        let log_path = root.join(".seeker").join("events.jsonl");
        Self { log_path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.log_path
    }

    pub fn log(&self, kind: EventKind) {
        // Journal is best-effort; a failed write never reaches the caller.
        match Self::serialize_event(kind) {
            Ok(json) => {
                if let Err(e) = self.append_to_file(&json) {
                    tracing::debug!(error = %e, "event journal write failed");
                }
            }
            Err(e) => tracing::debug!(error = %e, "event serialization failed"),
        }
    }

    fn serialize_event(kind: EventKind) -> Result<String> {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let event = SeekerEvent { timestamp, kind };
        Ok(serde_json::to_string(&event)?)
    }

    fn append_to_file(&self, line: &str) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
