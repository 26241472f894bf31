//
//  webmate-sdk
//  api/testmgmt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Test management API types and resource client.
//!
//! # Test Lifecycle
//!
//! ```text
//! TestExecution (created) -> started -> TestRun -> finished (PASSED/FAILED/SKIPPED)
//! ```
//!
//! A [`TestExecutionSpec`] describes what to run. Creating it yields a
//! [`TestExecutionId`], starting that execution yields the [`TestRunId`] of
//! the new run, and the run is closed with a [`TestRunFinishData`] payload.
//!
//! # Endpoints
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | Tests in project | GET | `/projects/${projectId}/testmgmt/tests` |
//! | Single test | GET | `/testmgmt/tests/${testId}` |
//! | Results of a run | GET | `/testmgmt/testruns/${testRunId}/results` |
//! | Create execution | POST | `/projects/${projectId}/testexecutions` |
//! | Create test session | POST | `/projects/${projectId}/testsessions` |
//! | Start execution | POST | `/testmgmt/testexecutions/${testExecutionId}` |
//! | Finish run | POST | `/testmgmt/testruns/${testRunId}/finish` |

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::client::ApiTransport;
use super::codec;
use super::common::{
    ApiResult, ProjectId, Result, TestExecutionId, TestId, TestRunId, TestSessionId,
};
use super::template::UriTemplate;

pub const GET_TESTS_IN_PROJECT: UriTemplate =
    UriTemplate::new("/projects/${projectId}/testmgmt/tests");

pub const GET_TEST: UriTemplate = UriTemplate::new("/testmgmt/tests/${testId}");

pub const GET_TEST_RESULTS: UriTemplate =
    UriTemplate::new("/testmgmt/testruns/${testRunId}/results");

pub const CREATE_TEST_EXECUTION: UriTemplate =
    UriTemplate::new("/projects/${projectId}/testexecutions");

pub const CREATE_TEST_SESSION: UriTemplate =
    UriTemplate::new("/projects/${projectId}/testsessions");

pub const START_TEST_EXECUTION: UriTemplate =
    UriTemplate::new("/testmgmt/testexecutions/${testExecutionId}");

pub const FINISH_TEST_RUN: UriTemplate =
    UriTemplate::new("/testmgmt/testruns/${testRunId}/finish");

/// Every template used by [`TestMgmtApiClient`].
pub const TEMPLATES: &[UriTemplate] = &[
    GET_TESTS_IN_PROJECT,
    GET_TEST,
    GET_TEST_RESULTS,
    CREATE_TEST_EXECUTION,
    CREATE_TEST_SESSION,
    START_TEST_EXECUTION,
    FINISH_TEST_RUN,
];

/// Summary information about a Test, as listed per project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestInfo {
    /// Id of the Test.
    pub id: TestId,
    /// Name of the Test.
    pub name: String,
    /// Time when the Test was created.
    pub creation_time: DateTime<Utc>,
    /// Human readable description.
    #[serde(default)]
    pub description: String,
    /// Version of the Test document.
    pub version: i32,
}

/// A parameter a Test expects when a run is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: WmDataType,
    #[serde(default)]
    pub description: Option<String>,
}

/// A full Test document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    pub id: TestId,
    pub name: String,
    pub creation_time: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    pub version: i32,
    #[serde(default)]
    pub parameters: Vec<TestParameter>,
}

/// One result entry produced by a TestRun.
///
/// The shape of `data` depends on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// Final verdict of a TestRun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestRunEvaluationStatus {
    Passed,
    Failed,
    Skipped,
}

impl fmt::Display for TestRunEvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::Skipped => "SKIPPED",
        };
        f.write_str(name)
    }
}

/// Payload sent when finishing a TestRun.
///
/// `msg` and `detail` are omitted from the JSON when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRunFinishData {
    pub status: TestRunEvaluationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl TestRunFinishData {
    pub fn new(status: TestRunEvaluationStatus) -> Self {
        Self {
            status,
            msg: None,
            detail: None,
        }
    }

    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.msg = Some(msg.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Data type tag of a [`WmValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WmDataType {
    String,
    Integer,
    Double,
    Boolean,
    Json,
}

/// A typed parameter value as understood by webmate.
///
/// Serialized as `{"type": "<WmDataType>", "value": <json>}`.
///
/// ```rust
/// use webmate_sdk::api::testmgmt::WmValue;
///
/// let value = serde_json::to_value(WmValue::string("https://example.com")).unwrap();
/// assert_eq!(value["type"], "String");
/// assert_eq!(value["value"], "https://example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmValue {
    #[serde(rename = "type")]
    pub data_type: WmDataType,
    pub value: Value,
}

impl WmValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            data_type: WmDataType::String,
            value: Value::String(value.into()),
        }
    }

    pub fn integer(value: i64) -> Self {
        Self {
            data_type: WmDataType::Integer,
            value: json!(value),
        }
    }

    pub fn double(value: f64) -> Self {
        Self {
            data_type: WmDataType::Double,
            value: json!(value),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            data_type: WmDataType::Boolean,
            value: Value::Bool(value),
        }
    }

    pub fn json(value: Value) -> Self {
        Self {
            data_type: WmDataType::Json,
            value,
        }
    }
}

/// Creates a single TestRun with the given parameter assignments.
///
/// Serialized as
/// `{"type": "SingleTestRunCreationSpec", "assignmentSpec": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "SingleTestRunCreationSpec")]
pub struct SingleTestRunCreationSpec {
    #[serde(rename = "assignmentSpec")]
    pub parameter_assignments: BTreeMap<String, WmValue>,
}

impl SingleTestRunCreationSpec {
    pub fn new(parameter_assignments: BTreeMap<String, WmValue>) -> Self {
        Self {
            parameter_assignments,
        }
    }
}

/// Description of a TestExecution to create.
///
/// # Example
///
/// ```rust
/// use webmate_sdk::api::common::TestId;
/// use webmate_sdk::api::testmgmt::{TestExecutionSpec, WmValue};
///
/// let spec = TestExecutionSpec::new("Nightly smoke", TestId::random())
///     .with_parameter("url", WmValue::string("https://example.com"));
///
/// let json = serde_json::to_value(&spec).unwrap();
/// assert_eq!(json["executionName"], "Nightly smoke");
/// assert_eq!(json["testRunCreationSpec"]["type"], "SingleTestRunCreationSpec");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestExecutionSpec {
    pub execution_name: String,
    pub test_template_id: TestId,
    pub test_run_creation_spec: SingleTestRunCreationSpec,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associated_test_sessions: Vec<TestSessionId>,
}

impl TestExecutionSpec {
    pub fn new(execution_name: impl Into<String>, test_template_id: TestId) -> Self {
        Self {
            execution_name: execution_name.into(),
            test_template_id,
            test_run_creation_spec: SingleTestRunCreationSpec::default(),
            associated_test_sessions: Vec::new(),
        }
    }

    /// Assigns a value to a Test parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, value: WmValue) -> Self {
        self.test_run_creation_spec
            .parameter_assignments
            .insert(name.into(), value);
        self
    }

    /// Associates the execution with a TestSession.
    pub fn with_test_session(mut self, id: TestSessionId) -> Self {
        self.associated_test_sessions.push(id);
        self
    }
}

/// Resource client for the test management endpoints.
pub struct TestMgmtApiClient {
    transport: Arc<dyn ApiTransport>,
}

impl TestMgmtApiClient {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Lists the Tests of a project. `None` if there is no such project.
    pub async fn get_tests_in_project(&self, id: ProjectId) -> Result<Option<Vec<TestInfo>>> {
        self.transport
            .send_get(&GET_TESTS_IN_PROJECT, &[("projectId", id.to_string())], &[])
            .await?
            .into_option()
            .map(|response| response.json("TestInfo"))
            .transpose()
    }

    /// Fetches a Test. `None` if there is no such Test.
    pub async fn get_test(&self, id: TestId) -> Result<Option<Test>> {
        self.transport
            .send_get(&GET_TEST, &[("testId", id.to_string())], &[])
            .await?
            .into_option()
            .map(|response| response.json("Test"))
            .transpose()
    }

    /// Fetches the results of a TestRun.
    ///
    /// `None` if there is no such TestRun. A run without results yields
    /// `Some` of an empty list.
    pub async fn get_test_results(&self, id: TestRunId) -> Result<Option<Vec<TestResult>>> {
        let Some(response) = self
            .transport
            .send_get(&GET_TEST_RESULTS, &[("testRunId", id.to_string())], &[])
            .await?
            .into_option()
        else {
            return Ok(None);
        };

        let results: ApiResult<Vec<TestResult>> = response.json("TestResult")?;
        Ok(Some(results.value))
    }

    pub async fn create_test_execution(
        &self,
        project_id: ProjectId,
        spec: &TestExecutionSpec,
    ) -> Result<TestExecutionId> {
        let body = codec::encode(spec)?;
        self.transport
            .send_post(
                &CREATE_TEST_EXECUTION,
                &[("projectId", project_id.to_string())],
                Some(&body),
            )
            .await?
            .require("create TestExecution")?
            .json("TestExecutionId")
    }

    pub async fn create_test_session(
        &self,
        project_id: ProjectId,
        name: &str,
    ) -> Result<TestSessionId> {
        let body = json!({ "name": name });
        self.transport
            .send_post(
                &CREATE_TEST_SESSION,
                &[("projectId", project_id.to_string())],
                Some(&body),
            )
            .await?
            .require("create TestSession")?
            .json("TestSessionId")
    }

    /// Starts a created TestExecution and returns the id of the new run.
    pub async fn start_test_execution(&self, id: TestExecutionId) -> Result<TestRunId> {
        self.transport
            .send_post(
                &START_TEST_EXECUTION,
                &[("testExecutionId", id.to_string())],
                None,
            )
            .await?
            .require("start TestExecution")?
            .json("TestRunId")
    }

    pub async fn finish_test_run(&self, id: TestRunId, data: &TestRunFinishData) -> Result<()> {
        let body = codec::encode(data)?;
        self.transport
            .send_post(&FINISH_TEST_RUN, &[("testRunId", id.to_string())], Some(&body))
            .await?
            .ensure_found("finish TestRun")
    }
}
