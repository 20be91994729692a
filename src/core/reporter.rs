// src/core/reporter.rs

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::config::OutputFormat;
use crate::core::database::WitnessDatabase;
use crate::core::error::Result;

/// JSON shape of a report. Integers are base-10 strings so any modulus size round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub modulus: String,
    pub selected_qrs: Vec<String>,
    pub selected_qnr: String,
    pub qr_count: usize,
    pub qnr_count: usize,
    pub seed: u64,
    /// Selection re-checked with Euler's criterion
    pub verified: bool,
}

impl From<&WitnessDatabase> for Report {
    fn from(db: &WitnessDatabase) -> Self {
        Report {
            modulus: db.modulus().to_string(),
            selected_qrs: db.selection.selected_qrs().iter().map(|v| v.to_string()).collect(),
            selected_qnr: db.selection.selected_qnr().to_string(),
            qr_count: db.classes.qr().len(),
            qnr_count: db.classes.qnr().len(),
            seed: db.seed,
            verified: db.selection.is_valid_for(db.modulus()),
        }
    }
}

pub struct Reporter;

impl Reporter {
    pub fn render_text(db: &WitnessDatabase) -> String {
        let qrs: Vec<String> = db.selection.selected_qrs().iter().map(|v| v.to_string()).collect();
        format!(
            "Prime number P: {}\nSelected QRs: \n{}\nSelected QNR: {}\n",
            db.modulus(),
            qrs.join(" "),
            db.selection.selected_qnr()
        )
    }

    pub fn render_json(db: &WitnessDatabase) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Report::from(db))?)
    }

    pub fn render(db: &WitnessDatabase, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::render_text(db)),
            OutputFormat::Json => Self::render_json(db),
        }
    }

    /// Renders fully before writing, so a serialization failure writes nothing.
    pub fn write<W: Write>(
        out: &mut W,
        db: &WitnessDatabase,
        format: OutputFormat,
    ) -> Result<()> {
        let rendered = Self::render(db, format)?;
        out.write_all(rendered.as_bytes())?;
        if format == OutputFormat::Json {
            writeln!(out)?;
        }
        Ok(())
    }
}
