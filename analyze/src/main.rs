use analyze::Args;
use anyhow::Result;
use log::error;
use std::process;
use structopt::StructOpt;

pub fn main() -> Result<()> {
    pretty_env_logger::init();

    // parse arguments
    let args = Args::from_args();

    // analyze and print the report on stdout
    match analyze::start(&args) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(err) => {
            error!("{:?}", err);
            let report = args.failure_report(&err);
            println!("{}", serde_json::to_string_pretty(&report)?);
            process::exit(1);
        }
    }
}
