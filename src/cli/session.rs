//
//  webmate-sdk
//  cli/session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Test session commands

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::facade::TestMgmtClient;

use super::{require_project, GlobalOptions};

/// Manage test sessions
#[derive(Args, Debug)]
pub struct SessionCommand {
    #[command(subcommand)]
    pub command: SessionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionSubcommand {
    /// Create a test session in the current project
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the test session
    pub name: String,
}

impl SessionCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            SessionSubcommand::Create(args) => self.create(args, global).await,
        }
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let project_id = require_project(&session)?;
        let client = TestMgmtClient::new(session)?;

        let test_session = client.create_test_session(&args.name).await?;

        let writer = global.writer();
        if writer.is_json() {
            crate::output::write_json(&serde_json::json!({
                "id": test_session.id(),
                "name": args.name,
                "projectId": project_id,
            }))?;
        } else {
            writer.write_success(&format!(
                "Created test session '{}' with id {}",
                args.name,
                style(test_session.id()).cyan()
            ));
        }
        Ok(())
    }
}
