//
//  webmate-sdk
//  facade/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Facades
//!
//! The public entry points of the SDK. Each facade holds the shared
//! [`WebmateApiSession`](crate::session::WebmateApiSession) and forwards every
//! method to one operation of its resource client in [`crate::api`].
//!
//! | Facade | Resource family |
//! |--------|-----------------|
//! | [`TestMgmtClient`] | Tests, runs, executions, test sessions |
//! | [`ArtifactClient`] | Artifacts |
//! | [`DeviceClient`] | Devices |
//!
//! Every facade can be built three ways:
//!
//! - `new(session)` with default transport settings
//! - `with_client_builder(session, builder)` for proxies or TLS overrides
//! - `with_transport(session, transport)` with any [`ApiTransport`](crate::api::ApiTransport)

mod artifacts;
mod devices;
mod testmgmt;

pub use artifacts::ArtifactClient;
pub use devices::DeviceClient;
pub use testmgmt::{TestMgmtClient, TestRun, TestSession};
