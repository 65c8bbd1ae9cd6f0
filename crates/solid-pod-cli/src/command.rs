//! Command-line arguments and output rendering.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "solid-pod")]
#[command(about = "Create containers and read or write text resources in a Solid pod")]
pub struct Args {
    /// Root URL of the pod
    #[arg(long, env = "SOLID_POD_URL")]
    pub pod_url: String,

    /// Turtle file sent as the body when creating containers
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create an LDP basic container at the pod root
    CreateContainer { name: String },

    /// Replace or create a resource with the given values, one per line
    Publish {
        container: String,
        file: String,
        values: Vec<String>,
    },

    /// Print the values stored in a resource
    Read {
        container: String,
        file: String,
        /// Print the values as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Append values to an existing resource
    Update {
        container: String,
        file: String,
        values: Vec<String>,
    },
}

/// Render read records for stdout, one per line or as a JSON array.
pub fn render_records(records: &[String], json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(records)
    } else {
        Ok(records.join("\n"))
    }
}
