//
//  webmate-sdk
//  cli/device.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Device commands

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;

use crate::api::common::DeviceId;
use crate::facade::DeviceClient;
use crate::output::TableRow;

use super::{parse_id, require_project, GlobalOptions};

/// Manage devices
#[derive(Args, Debug)]
pub struct DeviceCommand {
    #[command(subcommand)]
    pub command: DeviceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DeviceSubcommand {
    /// List the device ids of the current project
    #[command(visible_alias = "ls")]
    List,

    /// Synchronize webmate with a device
    Sync(DeviceArgs),

    /// Release a device
    Release(DeviceArgs),
}

#[derive(Args, Debug)]
pub struct DeviceArgs {
    /// Device id
    pub id: String,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct DeviceRow(DeviceId);

impl TableRow for DeviceRow {
    fn headers() -> &'static [&'static str] {
        &["DEVICE ID"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![self.0.to_string()]
    }
}

impl DeviceCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            DeviceSubcommand::List => self.list(global).await,
            DeviceSubcommand::Sync(args) => self.sync(args, global).await,
            DeviceSubcommand::Release(args) => self.release(args, global).await,
        }
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let project_id = require_project(&session)?;
        let client = DeviceClient::new(session)?;

        let rows: Vec<DeviceRow> = client
            .get_device_ids_for_project(project_id)
            .await?
            .into_iter()
            .map(DeviceRow)
            .collect();

        global
            .writer()
            .write_list(&rows, "No devices in this project.")
    }

    async fn sync(&self, args: &DeviceArgs, global: &GlobalOptions) -> Result<()> {
        let id: DeviceId = parse_id("device id", &args.id)?;
        let client = DeviceClient::new(global.session()?)?;

        client.synchronize_device(id).await?;
        report(global, "synchronized", id)
    }

    async fn release(&self, args: &DeviceArgs, global: &GlobalOptions) -> Result<()> {
        let id: DeviceId = parse_id("device id", &args.id)?;
        let client = DeviceClient::new(global.session()?)?;

        client.release_device(id).await?;
        report(global, "released", id)
    }
}

fn report(global: &GlobalOptions, action: &str, id: DeviceId) -> Result<()> {
    let writer = global.writer();
    if writer.is_json() {
        crate::output::write_json(&serde_json::json!({
            "deviceId": id,
            "action": action,
        }))
    } else {
        writer.write_success(&format!("Device {} {}", style(id).cyan(), action));
        Ok(())
    }
}
