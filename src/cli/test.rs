//
//  webmate-sdk
//  cli/test.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Test management commands
//!
//! ## Examples
//!
//! ```bash
//! # List the tests of the current project
//! wm test list --project <project-id>
//!
//! # Show a test and its parameters
//! wm test view <test-id>
//!
//! # Show the results of a test run
//! wm test results <run-id>
//!
//! # Finish a test run
//! wm test finish <run-id> --status failed --message "timeout"
//! ```

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use console::style;

use crate::api::common::{TestId, TestRunId};
use crate::api::testmgmt::{Test, TestInfo, TestResult, TestRunEvaluationStatus};
use crate::facade::TestMgmtClient;
use crate::output::{
    format_status, format_time, print_field, print_header, truncate, TableOutput, TableRow,
};

use super::{parse_id, require_project, GlobalOptions, NotFound};

/// Inspect tests and finish test runs
#[derive(Args, Debug)]
pub struct TestCommand {
    #[command(subcommand)]
    pub command: TestSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TestSubcommand {
    /// List the tests of a project
    #[command(visible_alias = "ls")]
    List,

    /// Show a test
    View(ViewArgs),

    /// Show the results of a test run
    Results(ResultsArgs),

    /// Finish a running test run
    Finish(FinishArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Test id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct ResultsArgs {
    /// Test run id
    pub run_id: String,
}

#[derive(Args, Debug)]
pub struct FinishArgs {
    /// Test run id
    pub run_id: String,

    /// Verdict of the run
    #[arg(long, short = 's', value_enum)]
    pub status: StatusArg,

    /// Short message explaining the verdict
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Additional detail, e.g. a stack trace
    #[arg(long, short = 'd', requires = "message")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Passed,
    Failed,
    Skipped,
}

impl From<StatusArg> for TestRunEvaluationStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Passed => Self::Passed,
            StatusArg::Failed => Self::Failed,
            StatusArg::Skipped => Self::Skipped,
        }
    }
}

impl TableRow for TestInfo {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "VERSION", "CREATED", "DESCRIPTION"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.version.to_string(),
            format_time(&self.creation_time),
            truncate(&self.description, 40),
        ]
    }
}

impl TableOutput for Test {
    fn print_table(&self, color: bool) {
        let title = if color {
            style(&self.name).bold().to_string()
        } else {
            self.name.clone()
        };
        println!("{}", title);
        println!();
        print_field("Id", &self.id.to_string(), color);
        print_field("Version", &self.version.to_string(), color);
        print_field("Created", &format_time(&self.creation_time), color);
        if !self.description.is_empty() {
            print_field("Description", &self.description, color);
        }

        if !self.parameters.is_empty() {
            println!();
            print_header("Parameters");
            for parameter in &self.parameters {
                let description = parameter.description.as_deref().unwrap_or("");
                println!(
                    "  {:<24} {:<10} {}",
                    parameter.name,
                    format!("{:?}", parameter.data_type),
                    description
                );
            }
        }
    }
}

impl TableRow for TestResult {
    fn headers() -> &'static [&'static str] {
        &["TYPE", "MESSAGE"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            format_status(&self.kind, color),
            self.message.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }
}

impl TestCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            TestSubcommand::List => self.list(global).await,
            TestSubcommand::View(args) => self.view(args, global).await,
            TestSubcommand::Results(args) => self.results(args, global).await,
            TestSubcommand::Finish(args) => self.finish(args, global).await,
        }
    }

    fn client(&self, global: &GlobalOptions) -> Result<TestMgmtClient> {
        Ok(TestMgmtClient::new(global.session()?)?)
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let client = self.client(global)?;
        let project_id = require_project(client.session())?;

        let tests = client
            .get_tests_in_project(project_id)
            .await?
            .ok_or_else(|| NotFound::new("Project", project_id))?;

        global
            .writer()
            .write_list(&tests, "No tests found in this project.")
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let id: TestId = parse_id("test id", &args.id)?;
        let client = self.client(global)?;

        let test = client
            .get_test(id)
            .await?
            .ok_or_else(|| NotFound::new("Test", id))?;

        global.writer().write(&test)
    }

    async fn results(&self, args: &ResultsArgs, global: &GlobalOptions) -> Result<()> {
        let id: TestRunId = parse_id("test run id", &args.run_id)?;
        let client = self.client(global)?;

        let results = client
            .get_test_results(id)
            .await?
            .ok_or_else(|| NotFound::new("TestRun", id))?;

        global
            .writer()
            .write_list(&results, "No results yet for this test run.")
    }

    async fn finish(&self, args: &FinishArgs, global: &GlobalOptions) -> Result<()> {
        let id: TestRunId = parse_id("test run id", &args.run_id)?;
        let status = TestRunEvaluationStatus::from(args.status);
        let client = self.client(global)?;

        match (&args.message, &args.detail) {
            (Some(message), Some(detail)) => {
                client
                    .finish_test_run_with_detail(id, status, message, detail)
                    .await?
            }
            (Some(message), None) => {
                client
                    .finish_test_run_with_message(id, status, message)
                    .await?
            }
            _ => client.finish_test_run(id, status).await?,
        }

        let writer = global.writer();
        if writer.is_json() {
            crate::output::write_json(&serde_json::json!({
                "testRunId": id,
                "status": status,
            }))?;
        } else {
            writer.write_success(&format!(
                "Finished test run {} as {}",
                style(id).cyan(),
                format_status(&status.to_string(), writer.color_enabled())
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_arg_maps_to_wire_status() {
        assert_eq!(
            TestRunEvaluationStatus::from(StatusArg::Failed).to_string(),
            "FAILED"
        );
        assert_eq!(
            TestRunEvaluationStatus::from(StatusArg::Skipped),
            TestRunEvaluationStatus::Skipped
        );
    }

    #[test]
    fn test_result_row_defaults_missing_message() {
        let result = TestResult {
            kind: "FAILURE".to_string(),
            message: None,
            data: serde_json::Value::Null,
        };
        assert_eq!(result.row(false), vec!["FAILURE".to_string(), "-".to_string()]);
    }
}
