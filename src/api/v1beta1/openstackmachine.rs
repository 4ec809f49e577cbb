use k8s_openapi::api::core::v1::{NodeAddress, TypedLocalObjectReference};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::{
    AdditionalBlockDevice, Condition, ImageParam, OpenStackIdentityReference, PortOpts, RootVolume,
    SchedulerHintAdditionalProperty, SecurityGroupParam, ServerGroupParam, ServerMetadata,
};

/*
 * ============================================================================
 * Custom Resource Definition
 * ============================================================================
 */
/// # OpenStack Machine
///
/// The infrastructure of a single Cluster API machine: one Nova server and
/// the ports and volumes attached to it.
#[allow(clippy::module_name_repetitions)]
#[derive(CustomResource, JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[kube(
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1beta1",
    kind = "OpenStackMachine",
    namespaced,
    derive = "PartialEq",
    printcolumn = r#"{"name":"Cluster", "type":"string", "description":"Cluster to which this OpenStackMachine belongs", "jsonPath":".metadata.labels['cluster\\.x-k8s\\.io/cluster-name']"}"#,
    printcolumn = r#"{"name":"InstanceState", "type":"string", "description":"OpenStack instance state", "jsonPath":".status.instanceState"}"#,
    printcolumn = r#"{"name":"Ready", "type":"string", "description":"OpenStack instance ready status", "jsonPath":".status.ready"}"#,
    printcolumn = r#"{"name":"ProviderID", "type":"string", "description":"OpenStack instance ID", "jsonPath":".spec.providerID"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#,
    status = "OpenStackMachineStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackMachineSpec {
    /// The unique identifier as specified by the cloud provider.
    #[serde(default, rename = "providerID", skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,

    /// The flavor reference for the flavor of the server instance.
    #[serde(default)]
    pub flavor: String,

    /// The image to use for the server instance.
    #[serde(default)]
    pub image: ImageParam,

    /// The ssh key to inject in the instance.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssh_key_name: String,

    /// Ports to be attached to the server instance. A single port on the
    /// cluster network is created when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortOpts>,

    /// Security groups applied to every port without its own security
    /// groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<SecurityGroupParam>,

    /// Whether a trunk is created for the server's ports.
    #[serde(default)]
    pub trunk: bool,

    /// Tags applied to the server and every resource created for it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Metadata set on the server.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub server_metadata: Vec<ServerMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_drive: Option<bool>,

    /// Boot the server from a volume instead of the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_volume: Option<RootVolume>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_block_devices: Vec<AdditionalBlockDevice>,

    /// The server group to assign the machine to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_group: Option<ServerGroupParam>,

    /// The credentials used to create the server. The cluster's credentials
    /// when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_ref: Option<OpenStackIdentityReference>,

    /// An `OpenStackFloatingIPPool` to allocate a floating ip for the server
    /// from.
    #[serde(default, rename = "floatingIPPoolRef", skip_serializing_if = "Option::is_none")]
    pub floating_ip_pool_ref: Option<TypedLocalObjectReference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scheduler_hint_additional_properties: Vec<SchedulerHintAdditionalProperty>,
}

#[allow(clippy::module_name_repetitions)]
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackMachineStatus {
    /// The id of the server once it has been created.
    #[serde(default, rename = "instanceID", skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    /// Whether the server is ready.
    #[serde(default)]
    pub ready: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<NodeAddress>,

    /// The spec with every reference resolved to an OpenStack id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<ResolvedMachineSpec>,

    /// The OpenStack resources created for the machine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<MachineResources>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMachineSpec {
    #[serde(default, rename = "serverGroupID", skip_serializing_if = "String::is_empty")]
    pub server_group_id: String,

    #[serde(default, rename = "imageID", skip_serializing_if = "String::is_empty")]
    pub image_id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<ResolvedPortSpec>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPortSpec {
    pub name: String,

    pub description: String,

    #[serde(rename = "networkID")]
    pub network_id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trunk: Option<bool>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct MachineResources {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortStatus>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PortStatus {
    pub id: String,
}
