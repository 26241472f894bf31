//
//  webmate-sdk
//  api/artifacts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Artifact API types and resource client.
//!
//! Artifacts are the data webmate records while tests run: screenshots,
//! logs, timelines and so on. Each artifact has a type name such as
//! `Page.FullpageScreenshot` and is associated with a project and usually
//! with one or more TestRuns.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::ApiTransport;
use super::common::{ArtifactId, BrowserSessionId, ProjectId, Result, TestRunId};
use super::template::UriTemplate;

pub const QUERY_ARTIFACTS: UriTemplate = UriTemplate::new("/projects/${projectId}/artifacts");

pub const GET_ARTIFACT: UriTemplate = UriTemplate::new("/artifact/artifacts/${artifactId}");

/// Every template used by [`ArtifactApiClient`].
pub const TEMPLATES: &[UriTemplate] = &[QUERY_ARTIFACTS, GET_ARTIFACT];

/// Type name of an artifact, e.g. `Page.FullpageScreenshot`.
///
/// The set of types grows with the platform, so this is an open name rather
/// than a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactType(String);

impl ArtifactType {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self(type_name.into())
    }

    pub fn type_name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArtifactType {
    fn from(type_name: &str) -> Self {
        Self::new(type_name)
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata of an artifact, as returned by artifact queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactInfo {
    pub id: ArtifactId,
    pub project_id: ProjectId,
    pub type_name: ArtifactType,
    pub creation_time: DateTime<Utc>,
    #[serde(default)]
    pub associated_test_runs: Vec<TestRunId>,
    #[serde(default)]
    pub associated_browser_sessions: Vec<BrowserSessionId>,
}

/// A full artifact including its payload.
///
/// The shape of `data` depends on the artifact type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(flatten)]
    pub info: ArtifactInfo,
    #[serde(default)]
    pub data: Value,
}

/// Builds the query string for an artifact query.
///
/// `types` is only added when the filter is non-empty; names are joined
/// with `,` in set order.
pub fn artifact_query(
    test_run: TestRunId,
    types: &BTreeSet<ArtifactType>,
) -> Vec<(&'static str, String)> {
    let mut query = vec![("testRunId", test_run.to_string())];
    if !types.is_empty() {
        let names: Vec<&str> = types.iter().map(ArtifactType::type_name).collect();
        query.push(("types", names.join(",")));
    }
    query
}

/// Resource client for the artifact endpoints.
pub struct ArtifactApiClient {
    transport: Arc<dyn ApiTransport>,
}

impl ArtifactApiClient {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Queries artifacts of a project associated with a TestRun.
    ///
    /// `None` if the project does not exist.
    pub async fn query_artifacts(
        &self,
        project_id: ProjectId,
        associated_test_run: TestRunId,
        types: &BTreeSet<ArtifactType>,
    ) -> Result<Option<Vec<ArtifactInfo>>> {
        let query = artifact_query(associated_test_run, types);
        self.transport
            .send_get(&QUERY_ARTIFACTS, &[("projectId", project_id.to_string())], &query)
            .await?
            .into_option()
            .map(|response| response.json("ArtifactInfo"))
            .transpose()
    }

    /// Fetches an artifact. `None` if there is no such artifact.
    pub async fn get_artifact(&self, id: ArtifactId) -> Result<Option<Artifact>> {
        self.transport
            .send_get(&GET_ARTIFACT, &[("artifactId", id.to_string())], &[])
            .await?
            .into_option()
            .map(|response| response.json("Artifact"))
            .transpose()
    }
}
