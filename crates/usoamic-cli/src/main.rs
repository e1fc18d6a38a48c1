//! Usoamic CLI entry point

use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use usoamic_cli::{commands, Cli, CliErrorHandler, CliResult, Output};
use usoamic_contract::UsoamicContract;

//-----------------------------------------------------------------------------
// Main Function
//-----------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let error_handler = CliErrorHandler::new(cli.verbose, cli.json);
    let json = cli.json;

    match run(cli).await.and_then(|output| print_output(&output, json)) {
        Ok(()) => {}
        Err(err) => {
            error_handler.handle_error(&err);
            process::exit(1);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` or the verbosity flag
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "usoamic=debug" } else { "usoamic=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> CliResult<Output> {
    let config = cli.load_config()?;
    debug!(node = %config.node_url, contract = %config.contract_address, "loaded configuration");

    let contract = UsoamicContract::from_config(&config)?;
    commands::execute(&contract, cli.command, cli.password.as_deref()).await
}

fn print_output(output: &Output, json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&output.to_json()?)?);
    } else {
        println!("{}", output.render_text());
    }
    Ok(())
}
