//! Output layer: CSV rows to a file or standard output.
//!
//! Append mode opens the file for appending and skips the header so that
//! repeated runs build up a single table.

pub mod csv;

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::GoalsError;

pub use self::csv::{CsvRecord, write_records, write_row};

/// Where CSV output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output (`-`).
    Stdout,
    /// A file path.
    File(PathBuf),
}

impl FromStr for OutputTarget {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s.is_empty() || s == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(s))
        })
    }
}

impl OutputTarget {
    /// Opens the target for writing. Files are truncated unless `append`
    /// is set; missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`GoalsError::Io`] if the file or its directory cannot be
    /// created or opened.
    pub fn open(&self, append: bool) -> Result<Box<dyn Write>, GoalsError> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout().lock())),
            Self::File(path) => {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    std::fs::create_dir_all(parent)?;
                }
                let file: File = if append {
                    OpenOptions::new().create(true).append(true).open(path)?
                } else {
                    File::create(path)?
                };
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }

    /// Writes `records` to the target. The header row is written unless
    /// `append` is set.
    ///
    /// # Errors
    ///
    /// Returns [`GoalsError::Io`] if opening or writing fails.
    pub fn write<R: CsvRecord>(&self, records: &[R], append: bool) -> Result<(), GoalsError> {
        let mut writer = self.open(append)?;
        write_records(&mut *writer, records, !append)?;
        tracing::debug!(output = ?self, rows = records.len(), append, "wrote csv");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{GameId, GameSummary};
    use chrono::NaiveDate;

    fn games() -> Vec<GameSummary> {
        let Some(date) = NaiveDate::from_ymd_opt(2024, 1, 21) else {
            panic!("valid date");
        };
        vec![GameSummary {
            game_id: GameId::new(2023020718),
            date,
        }]
    }

    #[test]
    fn dash_means_stdout() {
        assert_eq!("-".parse::<OutputTarget>().ok(), Some(OutputTarget::Stdout));
        assert_eq!(
            "out/goals.csv".parse::<OutputTarget>().ok(),
            Some(OutputTarget::File(PathBuf::from("out/goals.csv")))
        );
    }

    #[test]
    fn append_writes_header_once() {
        let path = std::env::temp_dir()
            .join(format!("nhl-goals-test-{}", std::process::id()))
            .join("games.csv");
        let target = OutputTarget::File(path.clone());

        assert!(target.write(&games(), false).is_ok());
        assert!(target.write(&games(), true).is_ok());

        let Ok(contents) = std::fs::read_to_string(&path) else {
            panic!("output file missing");
        };
        assert_eq!(contents, "game_id,date\n2023020718,2024-01-21\n2023020718,2024-01-21\n");

        assert!(target.write(&games(), false).is_ok());
        let Ok(contents) = std::fs::read_to_string(&path) else {
            panic!("output file missing");
        };
        assert_eq!(contents.lines().count(), 2);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
