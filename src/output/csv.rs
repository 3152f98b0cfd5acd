//! Minimal CSV writer for goal and game rows.

use std::io::{self, Write};

use crate::domain::{GameSummary, Goal};
use crate::domain::date_window::fmt_date;

/// Field separator.
pub const SEPARATOR: char = ',';

/// A record that can be written as one CSV row.
pub trait CsvRecord {
    /// Column names, in the order [`CsvRecord::fields`] yields values.
    const HEADER: &'static [&'static str];

    /// Field values of this record.
    fn fields(&self) -> Vec<String>;
}

impl CsvRecord for Goal {
    const HEADER: &'static [&'static str] = &[
        "season",
        "game_id",
        "game_date",
        "period",
        "time_in_period",
        "player_name",
        "player_team",
        "home_team",
        "away_team",
        "home_score",
        "away_score",
        "strength",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.season.to_string(),
            self.game_id.to_string(),
            fmt_date(self.game_date),
            self.period.to_string(),
            self.time_in_period.format("%H:%M:%S").to_string(),
            self.player_name.clone(),
            self.player_team.clone(),
            self.home_team.clone(),
            self.away_team.clone(),
            self.home_score.to_string(),
            self.away_score.to_string(),
            self.strength.clone(),
        ]
    }
}

impl CsvRecord for GameSummary {
    const HEADER: &'static [&'static str] = &["game_id", "date"];

    fn fields(&self) -> Vec<String> {
        vec![self.game_id.to_string(), fmt_date(self.date)]
    }
}

fn needs_quotes(field: &str) -> bool {
    field.contains(SEPARATOR) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Writes a single row, quoting fields that contain the separator,
/// quotes or line breaks.
///
/// # Errors
///
/// Propagates write failures from `w`.
pub fn write_row<W, F>(w: &mut W, row: &[F]) -> io::Result<()>
where
    W: Write + ?Sized,
    F: AsRef<str>,
{
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{SEPARATOR}")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    writeln!(w)
}

/// Writes `records` as CSV, preceded by the header row if requested.
///
/// # Errors
///
/// Propagates write failures from `w`.
pub fn write_records<W, R>(w: &mut W, records: &[R], include_header: bool) -> io::Result<()>
where
    W: Write + ?Sized,
    R: CsvRecord,
{
    if include_header {
        write_row(w, R::HEADER)?;
    }
    for record in records {
        write_row(w, &record.fields())?;
    }
    w.flush()
}
