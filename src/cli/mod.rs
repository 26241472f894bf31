//
//  webmate-sdk
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod artifact;
mod config;
mod device;
mod session;
mod test;

pub use artifact::ArtifactCommand;
pub use config::ConfigCommand;
pub use device::DeviceCommand;
pub use session::SessionCommand;
pub use test::TestCommand;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::common::ProjectId;
use crate::config::{Config, SessionOverrides};
use crate::output::OutputWriter;
use crate::session::WebmateApiSession;

/// wm - Work with webmate from the command line
#[derive(Parser, Debug)]
#[command(
    name = "wm",
    version,
    about = "Work with webmate from the command line",
    long_about = "wm is a CLI for the webmate test automation platform.\n\n\
                  It lists tests and artifacts, finishes test runs and manages devices.",
    propagate_version = true,
    after_help = "Use 'wm <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Account email address
    #[arg(long, global = true, env = "WEBMATE_USER")]
    pub user: Option<String>,

    /// API token of the account
    #[arg(long, global = true, env = "WEBMATE_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the webmate API
    #[arg(long, global = true, env = "WEBMATE_URL")]
    pub url: Option<String>,

    /// Project id for project-scoped commands
    #[arg(long, short = 'p', global = true, env = "WEBMATE_PROJECT")]
    pub project: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Builds the API session from the config file and these options.
    pub fn session(&self) -> Result<Arc<WebmateApiSession>> {
        let config = Config::load()?;
        let overrides = SessionOverrides {
            user: self.user.clone(),
            api_token: self.token.clone(),
            base_url: self.url.clone(),
            project: self.project.clone(),
        };
        Ok(Arc::new(config.session(&overrides)?))
    }

    pub fn writer(&self) -> OutputWriter {
        if self.json {
            OutputWriter::json()
        } else {
            OutputWriter::table()
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect tests and finish test runs
    Test(TestCommand),

    /// Manage test sessions
    Session(SessionCommand),

    /// Inspect artifacts
    Artifact(ArtifactCommand),

    /// Manage devices
    #[command(visible_alias = "dev")]
    Device(DeviceCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}

/// A requested resource does not exist.
///
/// `main` maps this to [`crate::exit_codes::NOT_FOUND`].
#[derive(Debug, thiserror::Error)]
#[error("{kind} {id} not found")]
pub struct NotFound {
    pub kind: &'static str,
    pub id: String,
}

impl NotFound {
    pub fn new(kind: &'static str, id: impl ToString) -> Self {
        Self {
            kind,
            id: id.to_string(),
        }
    }
}

/// The session's current project.
pub(crate) fn require_project(session: &WebmateApiSession) -> Result<ProjectId> {
    session.project_id().context(
        "No project selected. Pass --project, set WEBMATE_PROJECT or run `wm config set project <id>`",
    )
}

/// Parses an id argument, naming the argument in the error.
pub(crate) fn parse_id<T>(kind: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr<Err = crate::api::ApiError>,
{
    value
        .parse()
        .with_context(|| format!("Invalid {} '{}'", kind, value))
}
