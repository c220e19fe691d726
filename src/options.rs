use std::path::PathBuf;

use log::LevelFilter;
use panepack::parse_page_size;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Lays out panel and cut sizes onto fixed-size sheets")]
pub struct Options {
    #[structopt(flatten)]
    pub global: GlobalOptions,

    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub struct GlobalOptions {
    /// Sets verbosity level. Can be specified multiple times.
    #[structopt(long = "verbose", short, global = true, parse(from_occurrences))]
    pub verbosity: u8,
}

impl GlobalOptions {
    /// The log level implied by the number of `-v` flags. `RUST_LOG` still
    /// takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Pack the pieces of a project onto pages. Prints a summary of the
    /// layout, or writes it as JSON with --output.
    Pack(PackOptions),

    /// Check that a project is valid and that every piece fits on a page,
    /// without producing a layout.
    Check(CheckOptions),
}

#[derive(Debug, StructOpt)]
pub struct PackOptions {
    /// The path to a panecut.toml file, or a folder containing one. Defaults
    /// to the current directory.
    pub project_path: Option<PathBuf>,

    /// The page size to use instead of the one in the project, written as
    /// WIDTHxHEIGHT.
    #[structopt(long, parse(try_from_str = parse_page_size))]
    pub page_size: Option<(u32, u32)>,

    /// Where to write the layout as JSON. If not given, a text summary is
    /// printed instead.
    #[structopt(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct CheckOptions {
    /// The path to a panecut.toml file, or a folder containing one. Defaults
    /// to the current directory.
    pub project_path: Option<PathBuf>,

    /// The page size to use instead of the one in the project, written as
    /// WIDTHxHEIGHT.
    #[structopt(long, parse(try_from_str = parse_page_size))]
    pub page_size: Option<(u32, u32)>,
}
