// SPDX-FileCopyrightText: The submarine-operator Authors
//
// SPDX-License-Identifier: MIT

use kube::CustomResource;
use kube::core::ObjectList;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod state;

/// Desired state of a Submarine deployment. Every sub-spec is optional;
/// a missing entry means the component was not requested and the controller
/// applies its defaults.
#[derive(CustomResource, Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "submarine.apache.org",
    version = "v1alpha1",
    kind = "Submarine",
    namespaced,
    plural = "submarines",
    status = "SubmarineStatus",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct SubmarineSpec {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<SubmarineServer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<SubmarineDatabase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tensorboard: Option<SubmarineTensorboard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mlflow: Option<SubmarineMlflow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minio: Option<SubmarineMinio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<SubmarineStorage>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmarineServer {
    pub image: String,
    /// Unset means the controller picks the default replica count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmarineDatabase {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    pub storage_size: String,
    pub mysql_root_password_secret: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmarineTensorboard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub storage_size: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmarineMlflow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub storage_size: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmarineMinio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub storage_size: String,
}

/// Backing storage for the deployment. The host-path and NFS fields are only
/// meaningful for their respective `storage_type` values; the schema does not
/// enforce that.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmarineStorage {
    pub storage_type: String,
    pub host_path: String,
    pub nfs_path: String,
    #[serde(rename = "nfsIP")]
    pub nfs_ip: String,
}

/// Lifecycle state recorded by the controller. The empty string is the state
/// of a freshly created resource that no controller has observed yet.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum SubmarineStateType {
    #[default]
    #[serde(rename = "")]
    New,
    #[serde(rename = "CREATING")]
    Creating,
    #[serde(rename = "RUNNING")]
    Running,
    #[serde(rename = "FAILED")]
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmarineState {
    #[serde(default)]
    pub state: SubmarineStateType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmarineStatus {
    #[serde(default)]
    pub available_server_replicas: i32,
    #[serde(default)]
    pub available_database_replicas: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submarine_state: Option<SubmarineState>,
}

/// List form returned by the apiserver for bulk reads.
pub type SubmarineList = ObjectList<Submarine>;
