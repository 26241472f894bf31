//
//  webmate-sdk
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use webmate_sdk::api::ApiError;
use webmate_sdk::cli::{Cli, Commands, NotFound};
use webmate_sdk::config::MissingCredential;
use webmate_sdk::exit_codes;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let writer = cli.global.writer();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            writer.write_error(&format!("{e:#}"));
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging from `WM_DEBUG`, e.g. `WM_DEBUG=webmate_sdk=debug`
fn init_logging() {
    let filter = EnvFilter::try_from_env("WM_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<NotFound>().is_some() {
        return exit_codes::NOT_FOUND;
    }
    if error.downcast_ref::<MissingCredential>().is_some() {
        return exit_codes::AUTH_ERROR;
    }
    match error.downcast_ref::<ApiError>() {
        Some(ApiError::Status { status, .. })
            if status.as_u16() == 401 || status.as_u16() == 403 =>
        {
            exit_codes::AUTH_ERROR
        }
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Test(cmd) => cmd.run(&cli.global).await,
        Commands::Session(cmd) => cmd.run(&cli.global).await,
        Commands::Artifact(cmd) => cmd.run(&cli.global).await,
        Commands::Device(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("wm version {}", webmate_sdk::VERSION);
            Ok(())
        }
    }
}
