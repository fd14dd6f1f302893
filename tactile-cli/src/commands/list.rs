//! List command implementation

use super::convert::OutputFormat;
use super::ListCommands;
use anyhow::Result;
use clap::ValueEnum;
use std::io::{self, Write};
use tactile_api::braille_info;

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self {
            ListCommands::Grades => write_grades(&mut out)?,
            ListCommands::Formats => write_formats(&mut out)?,
        }
        out.flush()?;
        Ok(())
    }
}

fn write_grades(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Supported grades:")?;
    for grade in braille_info().supported_grades {
        writeln!(out, "  {:<8} {}", grade.grade.as_str(), grade.name)?;
        writeln!(out, "           {}", grade.description)?;
        writeln!(out, "           Recommended for: {}", grade.recommended)?;
    }
    Ok(())
}

fn write_formats(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Output formats:")?;
    for format in OutputFormat::value_variants() {
        if let Some(value) = format.to_possible_value() {
            writeln!(
                out,
                "  {:<8} {}",
                value.get_name(),
                value.get_help().map(|h| h.to_string()).unwrap_or_default()
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "File formats:")?;
    for format in braille_info().file_formats {
        writeln!(out, "  {:<8} {}", format.extension, format.description)?;
    }
    Ok(())
}
