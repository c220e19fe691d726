mod commands;
mod data;
mod label;
mod options;
mod summary;

use std::process;

use env_logger::Env;
use structopt::StructOpt;

use crate::options::{GlobalOptions, Options, Subcommand};

fn main() {
    let options = Options::from_args();

    init_logger(&options.global);

    match run(options) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {:?}", err);
            process::exit(1);
        }
    }
}

fn init_logger(global: &GlobalOptions) {
    let default_filter = global.log_level().to_string().to_lowercase();

    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

fn run(options: Options) -> anyhow::Result<()> {
    match options.command {
        Subcommand::Pack(pack_options) => commands::pack(pack_options)?,
        Subcommand::Check(check_options) => commands::check(check_options)?,
    }

    Ok(())
}
