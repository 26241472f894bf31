//
//  webmate-sdk
//  api/devices.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Device API resource client.
//!
//! Devices are the browsers, emulators and phones deployed for a project.

use std::sync::Arc;

use super::client::ApiTransport;
use super::common::{DeviceId, ProjectId, Result};
use super::template::UriTemplate;

pub const GET_DEVICE_IDS_FOR_PROJECT: UriTemplate =
    UriTemplate::new("/project/${projectId}/device/devices");

pub const SYNCHRONIZE_DEVICE: UriTemplate = UriTemplate::new("/device/devices/${deviceId}/sync");

pub const RELEASE_DEVICE: UriTemplate = UriTemplate::new("/device/devices/${deviceId}");

/// Every template used by [`DeviceApiClient`].
pub const TEMPLATES: &[UriTemplate] = &[
    GET_DEVICE_IDS_FOR_PROJECT,
    SYNCHRONIZE_DEVICE,
    RELEASE_DEVICE,
];

/// Resource client for the device endpoints.
pub struct DeviceApiClient {
    transport: Arc<dyn ApiTransport>,
}

impl DeviceApiClient {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Lists the ids of all devices in a project.
    ///
    /// An empty list is a valid answer; no answer at all is an error.
    pub async fn get_device_ids_for_project(&self, project_id: ProjectId) -> Result<Vec<DeviceId>> {
        self.transport
            .send_get(
                &GET_DEVICE_IDS_FOR_PROJECT,
                &[("projectId", project_id.to_string())],
                &[],
            )
            .await?
            .require("get device list")?
            .json("DeviceId")
    }

    /// Asks webmate to synchronize its state with the device.
    pub async fn synchronize_device(&self, device_id: DeviceId) -> Result<()> {
        self.transport
            .send_post(&SYNCHRONIZE_DEVICE, &[("deviceId", device_id.to_string())], None)
            .await?;
        Ok(())
    }

    /// Releases the device. It will not be deployed afterwards.
    pub async fn release_device(&self, device_id: DeviceId) -> Result<()> {
        self.transport
            .send_delete(&RELEASE_DEVICE, &[("deviceId", device_id.to_string())])
            .await?;
        Ok(())
    }
}
