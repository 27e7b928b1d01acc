/*
 *  Copyright 2025 Colliery Software
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! Domain types for the metadata store.
//!
//! These are the backend-independent records returned by
//! [`crate::ModelDbService`] and the `New*` payloads it accepts. The diesel row
//! structs they are converted from live in [`crate::dal::models`].

pub mod dependency;
pub mod deployment;
pub mod flow;
pub mod model;
pub mod project;

pub use dependency::{DependencyType, DeploymentDependency, NewDependency};
pub use deployment::{Deployment, NewDeployment};
pub use flow::{Flow, NewFlow};
pub use model::{Model, NewModel};
pub use project::{NewProject, Project};
