// Clap definitions in derive style

use std::path::PathBuf;

#[derive(clap::Parser)]
#[command(name = "mucat", version, about)]
pub struct Cli {
    /// Increase verbosity (-v = info, -vv = debug)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Albums CSV file (headers: Album Name, Year)
    #[arg(short = 'a', long = "albums", required = true)]
    pub albums_csv: PathBuf,

    /// Songs CSV file (headers: Track Name, Album Name, Duration)
    #[arg(short = 's', long = "songs", required = true)]
    pub songs_csv: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// List all song names in alphabetical order
    Songs,

    /// List album names
    Albums {
        /// Only albums released in this year
        #[arg(short = 'y', long = "year")]
        year: Option<i32>,
    },

    /// Print catalog statistics
    Stats {
        /// Also report on a single album (song count, average duration)
        #[arg(short = 'A', long = "album")]
        album: Option<String>,

        /// Emit the report as JSON
        #[arg(long = "json", default_value_t = false)]
        json: bool,
    },
}
