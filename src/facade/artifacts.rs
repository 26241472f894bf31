//
//  webmate-sdk
//  facade/artifacts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Facade of the artifact subsystem.

use std::collections::BTreeSet;
use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::api::artifacts::{Artifact, ArtifactApiClient, ArtifactInfo, ArtifactType};
use crate::api::common::{ApiError, ArtifactId, ProjectId, Result, TestRunId};
use crate::api::{ApiTransport, WebmateApiClient};
use crate::session::WebmateApiSession;

/// Artifacts recorded by webmate.
#[derive(Clone)]
pub struct ArtifactClient {
    session: Arc<WebmateApiSession>,
    api: Arc<ArtifactApiClient>,
}

impl ArtifactClient {
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
            api: Arc::new(ArtifactApiClient::new(transport)),
        }
    }

    pub fn session(&self) -> &Arc<WebmateApiSession> {
        &self.session
    }

    /// Retrieves the infos of artifacts associated with a TestRun.
    ///
    /// An empty `types` set means no type filter.
    ///
    /// # Errors
    ///
    /// Unlike [`get_artifact`](Self::get_artifact), a missing answer is an
    /// error here: [`ApiError::NoResponse`].
    pub async fn query_artifacts(
        &self,
        project_id: ProjectId,
        associated_test_run: TestRunId,
        types: &BTreeSet<ArtifactType>,
    ) -> Result<Vec<ArtifactInfo>> {
        self.api
            .query_artifacts(project_id, associated_test_run, types)
            .await?
            .ok_or_else(|| ApiError::NoResponse("query Artifacts".to_string()))
    }

    /// Retrieves an artifact. `None` if there is no such artifact.
    pub async fn get_artifact(&self, id: ArtifactId) -> Result<Option<Artifact>> {
        self.api.get_artifact(id).await
    }
}
