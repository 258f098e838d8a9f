use clap::Parser;
use symb_regr_gp::config::{Cli, RunConfig};
use symb_regr_gp::driver::{self, RunOutcome};
use symb_regr_gp::error::Error;
use symb_regr_gp::stats::CSV_HEADER;

fn run() -> Result<(), Error> {
    let cli = Cli::parse();
    let config = RunConfig::try_from(cli)?;

    match driver::run(&config)? {
        RunOutcome::Single { rows, best } => {
            println!("{}", CSV_HEADER);
            for row in &rows {
                println!("{}", row.to_csv_row());
            }
            match best {
                Some(best) => println!("{}  {:.6}", best.format(), best.fitness()),
                None => log::error!("no individual with valid fitness was found"),
            }
        }
        RunOutcome::Sweep { rows } => {
            log::info!("wrote {} averaged generation rows to analysis/data.csv", rows.len());
        }
    }
    return Ok(());
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
