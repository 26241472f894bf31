//
//  webmate-sdk
//  cli/artifact.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Artifact commands
//!
//! ## Examples
//!
//! ```bash
//! # List the artifacts of a test run
//! wm artifact list --run <run-id>
//!
//! # Only screenshots and logs
//! wm artifact list --run <run-id> --type Page.FullpageScreenshot --type Log
//!
//! # Show an artifact including its data
//! wm artifact view <artifact-id> --json
//! ```

use std::collections::BTreeSet;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::artifacts::{Artifact, ArtifactInfo, ArtifactType};
use crate::api::common::{ArtifactId, TestRunId};
use crate::facade::ArtifactClient;
use crate::output::{format_time, print_field, TableOutput, TableRow};

use super::{parse_id, require_project, GlobalOptions, NotFound};

/// Inspect artifacts
#[derive(Args, Debug)]
pub struct ArtifactCommand {
    #[command(subcommand)]
    pub command: ArtifactSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ArtifactSubcommand {
    /// List the artifacts of a test run
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show an artifact
    View(ViewArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Test run the artifacts are associated with
    #[arg(long, short = 'r')]
    pub run: String,

    /// Only artifacts of this type (repeatable)
    #[arg(long = "type", short = 't')]
    pub types: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Artifact id
    pub id: String,
}

impl TableRow for ArtifactInfo {
    fn headers() -> &'static [&'static str] {
        &["ID", "TYPE", "CREATED", "TEST RUNS"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.type_name.to_string(),
            format_time(&self.creation_time),
            self.associated_test_runs.len().to_string(),
        ]
    }
}

impl TableOutput for Artifact {
    fn print_table(&self, color: bool) {
        let info = &self.info;
        print_field("Id", &info.id.to_string(), color);
        print_field("Type", info.type_name.type_name(), color);
        print_field("Project", &info.project_id.to_string(), color);
        print_field("Created", &format_time(&info.creation_time), color);
        for run in &info.associated_test_runs {
            print_field("Test run", &run.to_string(), color);
        }
        for browser_session in &info.associated_browser_sessions {
            print_field("Browser session", &browser_session.to_string(), color);
        }
        if !self.data.is_null() {
            println!();
            match serde_json::to_string_pretty(&self.data) {
                Ok(data) => println!("{}", data),
                Err(_) => println!("{}", self.data),
            }
        }
    }
}

/// Collects `--type` values into a filter set, skipping blanks.
fn type_filter(types: &[String]) -> BTreeSet<ArtifactType> {
    types
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(ArtifactType::from)
        .collect()
}

impl ArtifactCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ArtifactSubcommand::List(args) => self.list(args, global).await,
            ArtifactSubcommand::View(args) => self.view(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let run: TestRunId = parse_id("test run id", &args.run)?;
        let session = global.session()?;
        let project_id = require_project(&session)?;
        let client = ArtifactClient::new(session)?;

        let artifacts = client
            .query_artifacts(project_id, run, &type_filter(&args.types))
            .await?;

        global
            .writer()
            .write_list(&artifacts, "No artifacts found for this test run.")
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let id: ArtifactId = parse_id("artifact id", &args.id)?;
        let client = ArtifactClient::new(global.session()?)?;

        let artifact = client
            .get_artifact(id)
            .await?
            .ok_or_else(|| NotFound::new("Artifact", id))?;

        global.writer().write(&artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_filter_dedups_and_skips_blanks() {
        let filter = type_filter(&[
            "Log".to_string(),
            " ".to_string(),
            "Log".to_string(),
            "Page.FullpageScreenshot".to_string(),
        ]);
        let names: Vec<&str> = filter.iter().map(ArtifactType::type_name).collect();
        assert_eq!(names, vec!["Log", "Page.FullpageScreenshot"]);
    }
}
