use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::NodeAddress;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::{
    AdditionalBlockDevice, Condition, OpenStackIdentityReference, PortOpts, RootVolume, SecurityGroupFilter,
};

/*
 * ============================================================================
 * Custom Resource Definition
 * ============================================================================
 */
/// # OpenStack Machine
///
/// Deprecated, use `v1beta1`.
#[allow(clippy::module_name_repetitions)]
#[derive(CustomResource, JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[kube(
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1alpha7",
    kind = "OpenStackMachine",
    namespaced,
    derive = "PartialEq",
    deprecated = "infrastructure.cluster.x-k8s.io/v1alpha7 OpenStackMachine is deprecated, use v1beta1",
    printcolumn = r#"{"name":"Cluster", "type":"string", "description":"Cluster to which this OpenStackMachine belongs", "jsonPath":".metadata.labels['cluster\\.x-k8s\\.io/cluster-name']"}"#,
    printcolumn = r#"{"name":"InstanceState", "type":"string", "description":"OpenStack instance state", "jsonPath":".status.instanceState"}"#,
    printcolumn = r#"{"name":"Ready", "type":"string", "description":"OpenStack instance ready status", "jsonPath":".status.ready"}"#,
    printcolumn = r#"{"name":"ProviderID", "type":"string", "description":"OpenStack instance ID", "jsonPath":".spec.providerID"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#,
    status = "OpenStackMachineStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackMachineSpec {
    #[serde(default, rename = "providerID", skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,

    /// The id of the server once it has been created.
    #[serde(default, rename = "instanceID", skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    /// The name of the cloud in the clouds.yaml of the identity secret.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cloud_name: String,

    #[serde(default)]
    pub flavor: String,

    /// The name of the image. Ignored when `imageUUID` is set.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,

    #[serde(default, rename = "imageUUID", skip_serializing_if = "String::is_empty")]
    pub image_uuid: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssh_key_name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortOpts>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<SecurityGroupFilter>,

    #[serde(default)]
    pub trunk: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub server_metadata: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_drive: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_volume: Option<RootVolume>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_block_devices: Vec<AdditionalBlockDevice>,

    #[serde(default, rename = "serverGroupID", skip_serializing_if = "String::is_empty")]
    pub server_group_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_ref: Option<OpenStackIdentityReference>,
}

#[allow(clippy::module_name_repetitions)]
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackMachineStatus {
    #[serde(default)]
    pub ready: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<NodeAddress>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}
