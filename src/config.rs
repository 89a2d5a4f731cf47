//! Command line configuration for the `coursedb` binary.
//!
//! Every option can also come from a `COURSEDB_*` environment variable.

use std::path::PathBuf;

use clap::Parser;

use crate::store::DEFAULT_ESTIMATED_COURSES;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "coursedb",
    about = "Load course files into an in-memory course database and query it",
    version
)]
pub struct Config {
    /// Course files to load, in order
    pub files: Vec<PathBuf>,

    /// Estimated number of courses, used to size the table
    #[arg(
        long,
        env = "COURSEDB_CAPACITY",
        default_value_t = DEFAULT_ESTIMATED_COURSES
    )]
    pub capacity: usize,

    /// Print only these CRNs instead of the full listing
    #[arg(
        long = "crn",
        env = "COURSEDB_CRN",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub crns: Vec<i32>,

    /// Read files through the async chunked reader
    #[arg(long, env = "COURSEDB_ASYNC_READ")]
    pub async_read: bool,
}

impl Config {
    pub fn from_args() -> Self {
        Self::parse()
    }
}
