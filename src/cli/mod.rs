// CLI Layer
// ユーザー入力の受付とコマンドルーティング

pub mod command_context;
pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bqcheck - BigQuery Schema Validation CLI
///
/// Declarative schema checking for BigQuery tables.
/// Compare column definition files against live table schemas.
#[derive(Parser, Debug)]
#[command(name = "bqcheck")]
#[command(author = "Bqcheck Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "BigQuery schema validation CLI tool")]
#[command(long_about = "Bqcheck - BigQuery Schema Validation CLI

Declarative schema checking for BigQuery tables.
Describe the expected columns of a table in a plain text file and
verify the live table against it.

Bqcheck helps you:
  • Define expected columns, types and constraints in one file
  • Detect drift between the definition and the live table schema
  • Verify PK / FK / UNIQUE / RANGE constraints with warehouse queries
  • Generate CREATE TABLE DDL from the definitions")]
#[command(propagate_version = true)]
#[command(after_help = "GETTING STARTED:
  1. Initialize a new project:      bqcheck init
  2. Describe your table:           Edit schema/columns.def
  3. Point at the target table:     Edit .bqcheck.yaml
  4. Validate the definitions:      bqcheck validate
  5. Check against the live table:  bqcheck check

For detailed help on each command, use: bqcheck <command> --help")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new schema checking project
    ///
    /// Creates the configuration file and a sample column definition
    /// file for checking a BigQuery table with Bqcheck.
    ///
    /// EXAMPLES:
    ///   # Initialize in the current directory
    ///   bqcheck init
    ///
    ///   # Force re-initialization
    ///   bqcheck init --force
    Init {
        /// Force initialization even if config exists
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the column definition file
    ///
    /// Parses the definition file and checks it for duplicate column
    /// names and unknown types. Does not contact the warehouse.
    ///
    /// EXAMPLES:
    ///   # Validate the definitions from the config
    ///   bqcheck validate
    ///
    ///   # Validate a specific file
    ///   bqcheck validate --definitions ./other/columns.def
    Validate {
        /// Path to the column definition file
        #[arg(short, long, value_name = "FILE")]
        definitions: Option<PathBuf>,
    },

    /// Check definitions against the live table schema
    ///
    /// Fetches the table schema from BigQuery, compares every defined
    /// column property by property, probes declared constraints with
    /// warehouse queries, and prints a report with the generated DDL.
    ///
    /// EXAMPLES:
    ///   # Check the table configured in .bqcheck.yaml
    ///   bqcheck check
    ///
    ///   # Check with a specific definition file
    ///   bqcheck check --definitions ./other/columns.def
    Check {
        /// Path to the column definition file
        #[arg(short, long, value_name = "FILE")]
        definitions: Option<PathBuf>,
    },

    /// Print CREATE TABLE DDL for the definitions
    ///
    /// Generates the DDL from the definition file without contacting
    /// the warehouse. The declared types are used verbatim.
    ///
    /// EXAMPLES:
    ///   # Print DDL for the configured definitions
    ///   bqcheck ddl
    ///
    ///   # Print DDL for a specific file
    ///   bqcheck ddl --definitions ./other/columns.def
    Ddl {
        /// Path to the column definition file
        #[arg(short, long, value_name = "FILE")]
        definitions: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
