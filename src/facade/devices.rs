//
//  webmate-sdk
//  facade/devices.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Facade to the webmate device subsystem.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::api::common::{DeviceId, ProjectId, Result};
use crate::api::devices::DeviceApiClient;
use crate::api::{ApiTransport, WebmateApiClient};
use crate::session::WebmateApiSession;

#[derive(Clone)]
pub struct DeviceClient {
    session: Arc<WebmateApiSession>,
    api: Arc<DeviceApiClient>,
}

impl DeviceClient {
    pub fn new(session: Arc<WebmateApiSession>) -> Result<Self> {
        let transport = WebmateApiClient::for_session(&session)?;
        Ok(Self::with_transport(session, Arc::new(transport)))
    }

    pub fn with_client_builder(
        session: Arc<WebmateApiSession>,
        builder: ClientBuilder,
    ) -> Result<Self> {
        let transport = WebmateApiClient::for_session_with_builder(&session, builder)?;
        Ok(Self::with_transport(session, Arc::new(transport)))
    }

    pub fn with_transport(
        session: Arc<WebmateApiSession>,
        transport: Arc<dyn ApiTransport>,
    ) -> Self {
        Self {
            session,
            api: Arc::new(DeviceApiClient::new(transport)),
        }
    }

    pub fn session(&self) -> &Arc<WebmateApiSession> {
        &self.session
    }

    /// Gets all device ids of a project.
    pub async fn get_device_ids_for_project(&self, project_id: ProjectId) -> Result<Vec<DeviceId>> {
        self.api.get_device_ids_for_project(project_id).await
    }

    /// Synchronizes webmate with the device. Usually not necessary.
    pub async fn synchronize_device(&self, device_id: DeviceId) -> Result<()> {
        self.api.synchronize_device(device_id).await
    }

    /// Releases the device. It will not be deployed afterwards.
    pub async fn release_device(&self, device_id: DeviceId) -> Result<()> {
        self.api.release_device(device_id).await
    }
}
