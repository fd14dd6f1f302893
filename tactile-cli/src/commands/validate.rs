//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tactile_core::BrailleTables;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the Braille table file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub table_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating Braille tables: {}", self.table_config.display());

        match BrailleTables::from_file(&self.table_config) {
            Ok(tables) => {
                let contractions = tables.contractions();
                println!("✓ Tables are valid!");
                println!("  Code: {}", tables.code());
                println!("  Name: {}", tables.name());
                println!("  Characters: {}", tables.characters().len());
                println!(
                    "  Contractions: {} ({} whole-word, {} letter-group)",
                    contractions.len(),
                    contractions.whole_words().count(),
                    contractions.letter_groups().count()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Tables are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
