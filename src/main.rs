use bike_lanes_lib::{cli::parse_args, commands::run_cli, config::Config};
use dotenv::dotenv;
use std::process;

fn main() {
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            process::exit(2);
        }
    };
    let args = parse_args();

    process::exit(run_cli(args, config));
}
