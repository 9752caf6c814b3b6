use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::{info, warn};

pub mod demo;
pub mod roster;

use crate::model::record::StudentRecord;
use demo::demo_roster;
use roster::parse_roster;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("roster parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Anything that can hand the pipeline a roster. Derivation never looks
/// behind this seam, so a fetched roster can replace the file or demo one.
pub trait RosterSource {
    fn describe(&self) -> String;
    fn load_roster(&self) -> Result<Vec<StudentRecord>, InputError>;
}

#[derive(Debug, Clone)]
pub struct JsonRosterFile {
    pub path: PathBuf,
}

impl JsonRosterFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterSource for JsonRosterFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load_roster(&self) -> Result<Vec<StudentRecord>, InputError> {
        if !self.path.exists() {
            return Err(InputError::MissingInput(format!(
                "roster file {} not found",
                self.path.display()
            )));
        }
        let reader = open_maybe_gz(&self.path)?;
        let records = parse_roster(reader)?;
        info!(
            "loaded {} student records from {}",
            records.len(),
            self.path.display()
        );
        warn_on_mixed_max_total(&records);
        Ok(records)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DemoRoster;

impl RosterSource for DemoRoster {
    fn describe(&self) -> String {
        "built-in demo roster".to_string()
    }

    fn load_roster(&self) -> Result<Vec<StudentRecord>, InputError> {
        let records = demo_roster();
        info!("using built-in demo roster ({} students)", records.len());
        Ok(records)
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn warn_on_mixed_max_total(records: &[StudentRecord]) {
    let Some(first) = records.first() else {
        return;
    };
    if let Some(other) = records.iter().find(|r| r.max_total != first.max_total) {
        warn!(
            "max_total differs across roster ({} for {}, {} for {}); percentages stay per-record",
            first.max_total, first.name, other.max_total, other.name
        );
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
