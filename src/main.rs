use anyhow::Result;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use tokio::task;

use shodan_runner::constants::CONNECTIVITY_HOST;
use shodan_runner::http::{ShodanClient, build_http_client};
use shodan_runner::output::format_error;
use shodan_runner::utils::check_connectivity;
use shodan_runner::{Cli, Config, run_batch};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // No arguments at all shows the banner and help instead of an error
    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let cli = Cli::parse();
    let color = !cli.no_color;

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            println!("{}", format_error(&err.to_string(), color));
            std::process::exit(1);
        }
    };

    let client = ShodanClient::new(build_http_client(&cli)?);

    // The DNS check races the batch instead of gating it
    let mut connectivity = task::spawn(check_connectivity(CONNECTIVITY_HOST));
    let batch = run_batch(&config, &client);
    tokio::pin!(batch);

    tokio::select! {
        checked = &mut connectivity => {
            match checked {
                Ok(Err(err)) => {
                    eprintln!("\n{}\n", format_error(&err.to_string(), color));
                    std::process::exit(1);
                }
                Ok(Ok(())) => {}
                Err(err) => log::debug!("connectivity check did not complete: {}", err),
            }
            batch.await?;
        }
        summary = &mut batch => {
            summary?;
        }
    }

    Ok(())
}
