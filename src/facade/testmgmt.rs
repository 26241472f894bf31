//
//  webmate-sdk
//  facade/testmgmt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Facade of the test management subsystem.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::api::common::{ApiError, ProjectId, Result, TestId, TestRunId, TestSessionId};
use crate::api::testmgmt::{
    Test, TestExecutionSpec, TestInfo, TestMgmtApiClient, TestResult, TestRunEvaluationStatus,
    TestRunFinishData,
};
use crate::api::{ApiTransport, WebmateApiClient};
use crate::session::WebmateApiSession;

/// Tests, test runs and test sessions.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use webmate_sdk::api::testmgmt::TestRunEvaluationStatus;
/// use webmate_sdk::auth::WebmateAuthInfo;
/// use webmate_sdk::facade::TestMgmtClient;
/// use webmate_sdk::session::{WebmateApiSession, WebmateEnvironment};
///
/// # async fn example() -> webmate_sdk::api::Result<()> {
/// let session = Arc::new(WebmateApiSession::new(
///     WebmateAuthInfo::new("jane@example.com", "token"),
///     WebmateEnvironment::default(),
/// ));
/// let client = TestMgmtClient::new(session)?;
///
/// let run_id = "4a0b3c1e-2a8b-4c2e-9f9e-1b2c3d4e5f60".parse()?;
/// client
///     .finish_test_run_with_message(run_id, TestRunEvaluationStatus::Failed, "timeout")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TestMgmtClient {
    session: Arc<WebmateApiSession>,
    api: Arc<TestMgmtApiClient>,
}

impl TestMgmtClient {
    /// Creates a client for the session with default transport settings.
    pub fn new(session: Arc<WebmateApiSession>) -> Result<Self> {
        let transport = WebmateApiClient::for_session(&session)?;
        Ok(Self::with_transport(session, Arc::new(transport)))
    }

    /// Creates a client whose HTTP connection is built from `builder`.
    pub fn with_client_builder(
        session: Arc<WebmateApiSession>,
        builder: ClientBuilder,
    ) -> Result<Self> {
        let transport = WebmateApiClient::for_session_with_builder(&session, builder)?;
        Ok(Self::with_transport(session, Arc::new(transport)))
    }

    /// Creates a client on top of an existing transport.
    pub fn with_transport(
        session: Arc<WebmateApiSession>,
        transport: Arc<dyn ApiTransport>,
    ) -> Self {
        Self {
            session,
            api: Arc::new(TestMgmtApiClient::new(transport)),
        }
    }

    pub fn session(&self) -> &Arc<WebmateApiSession> {
        &self.session
    }

    /// Lists the Tests in a project. `None` if there is no such project.
    pub async fn get_tests_in_project(&self, id: ProjectId) -> Result<Option<Vec<TestInfo>>> {
        self.api.get_tests_in_project(id).await
    }

    /// Fetches a Test. `None` if there is no such Test.
    pub async fn get_test(&self, id: TestId) -> Result<Option<Test>> {
        self.api.get_test(id).await
    }

    /// Fetches the results of a TestRun.
    ///
    /// `None` if there is no such TestRun; `Some` of an empty list if the run
    /// has no results yet.
    pub async fn get_test_results(&self, id: TestRunId) -> Result<Option<Vec<TestResult>>> {
        self.api.get_test_results(id).await
    }

    /// Creates a TestExecution in the given project and starts it.
    pub async fn start_execution_in_project(
        &self,
        spec: &TestExecutionSpec,
        project_id: ProjectId,
    ) -> Result<TestRunId> {
        let execution_id = self.api.create_test_execution(project_id, spec).await?;
        self.api.start_test_execution(execution_id).await
    }

    /// Creates and starts a TestExecution in the session's current project.
    ///
    /// # Errors
    ///
    /// [`ApiError::Precondition`] if the session has no current project. No
    /// request is sent in that case.
    pub async fn start_execution(&self, spec: &TestExecutionSpec) -> Result<TestRun> {
        let project_id = self.require_project(
            "A TestExecution must be associated with a project and none is provided or associated with the API session",
        )?;
        let id = self.start_execution_in_project(spec, project_id).await?;
        Ok(TestRun::new(id, self.clone()))
    }

    /// Creates a TestSession with the given name in the session's current
    /// project.
    ///
    /// # Errors
    ///
    /// [`ApiError::Precondition`] if the session has no current project. No
    /// request is sent in that case.
    pub async fn create_test_session(&self, name: &str) -> Result<TestSession> {
        let project_id = self.require_project(
            "A TestSession must be associated with a project and none is provided or associated with the API session",
        )?;
        let id = self.api.create_test_session(project_id, name).await?;
        Ok(TestSession::new(id, Arc::clone(&self.session)))
    }

    /// Finishes a running TestRun.
    pub async fn finish_test_run(
        &self,
        id: TestRunId,
        status: TestRunEvaluationStatus,
    ) -> Result<()> {
        self.api
            .finish_test_run(id, &TestRunFinishData::new(status))
            .await
    }

    /// Finishes a running TestRun with a message.
    pub async fn finish_test_run_with_message(
        &self,
        id: TestRunId,
        status: TestRunEvaluationStatus,
        msg: &str,
    ) -> Result<()> {
        self.api
            .finish_test_run(id, &TestRunFinishData::new(status).with_message(msg))
            .await
    }

    /// Finishes a running TestRun with a message and detail information.
    pub async fn finish_test_run_with_detail(
        &self,
        id: TestRunId,
        status: TestRunEvaluationStatus,
        msg: &str,
        detail: &str,
    ) -> Result<()> {
        let data = TestRunFinishData::new(status)
            .with_message(msg)
            .with_detail(detail);
        self.api.finish_test_run(id, &data).await
    }

    fn require_project(&self, message: &str) -> Result<ProjectId> {
        self.session
            .project_id()
            .ok_or_else(|| ApiError::Precondition(message.to_string()))
    }
}

/// Handle to a started TestRun.
#[derive(Clone)]
pub struct TestRun {
    id: TestRunId,
    client: TestMgmtClient,
}

impl TestRun {
    pub fn new(id: TestRunId, client: TestMgmtClient) -> Self {
        Self { id, client }
    }

    pub fn id(&self) -> TestRunId {
        self.id
    }

    /// Results so far. `None` if webmate does not know the run.
    pub async fn results(&self) -> Result<Option<Vec<TestResult>>> {
        self.client.get_test_results(self.id).await
    }

    pub async fn finish(&self, status: TestRunEvaluationStatus) -> Result<()> {
        self.client.finish_test_run(self.id, status).await
    }

    pub async fn finish_with_message(
        &self,
        status: TestRunEvaluationStatus,
        msg: &str,
    ) -> Result<()> {
        self.client
            .finish_test_run_with_message(self.id, status, msg)
            .await
    }
}

impl std::fmt::Debug for TestRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestRun").field("id", &self.id).finish()
    }
}

/// Handle to a created TestSession.
#[derive(Debug, Clone)]
pub struct TestSession {
    id: TestSessionId,
    session: Arc<WebmateApiSession>,
}

impl TestSession {
    pub fn new(id: TestSessionId, session: Arc<WebmateApiSession>) -> Self {
        Self { id, session }
    }

    pub fn id(&self) -> TestSessionId {
        self.id
    }

    /// The API session the TestSession was created with.
    pub fn session(&self) -> &Arc<WebmateApiSession> {
        &self.session
    }
}
