use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/*
 * ============================================================================
 * Filters
 * ============================================================================
 */
/// Neutron tag filters shared by every neutron resource filter.
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterByNeutronTags {
    /// Resources must have all of these tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Resources must have at least one of these tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags_any: Vec<String>,

    /// Resources must not have all of these tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_tags: Vec<String>,

    /// Resources must not have any of these tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_tags_any: Vec<String>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, rename = "projectID", skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    #[serde(flatten)]
    pub neutron_tags: FilterByNeutronTags,
}

/// Specifies a network by id or by filter. Exactly one must be set.
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct NetworkParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<NetworkFilter>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, rename = "projectID", skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    #[serde(default, skip_serializing_if = "crate::api::is_zero")]
    pub ip_version: i32,

    #[serde(default, rename = "gatewayIP", skip_serializing_if = "String::is_empty")]
    pub gateway_ip: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cidr: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipv6_address_mode: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipv6_ra_mode: String,

    #[serde(flatten)]
    pub neutron_tags: FilterByNeutronTags,
}

/// Specifies a subnet by id or by filter. Exactly one must be set.
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SubnetParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<SubnetFilter>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouterFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, rename = "projectID", skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    #[serde(flatten)]
    pub neutron_tags: FilterByNeutronTags,
}

/// Specifies a router by id or by filter. Exactly one must be set.
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RouterParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<RouterFilter>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroupFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, rename = "projectID", skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    #[serde(flatten)]
    pub neutron_tags: FilterByNeutronTags,
}

/// Specifies a security group by id or by filter. Exactly one must be set.
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SecurityGroupParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<SecurityGroupFilter>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ImageFilter {
    /// The name of the desired image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The tags associated with the desired image.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Specifies an image by id or by filter. Exactly one must be set.
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ImageParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ImageFilter>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ServerGroupFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Specifies a server group by id or by filter. Exactly one must be set.
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ServerGroupParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ServerGroupFilter>,
}

/*
 * ============================================================================
 * Ports
 * ============================================================================
 */
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixedIP {
    /// The subnet the fixed ip is allocated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<SubnetParam>,

    /// A specific ip address to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressPair {
    pub ip_address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct BindingProfile {
    /// Enables or disables the hardware offload for the port.
    #[serde(default, rename = "ovsHWOffload", skip_serializing_if = "Option::is_none")]
    pub ovs_hw_offload: Option<bool>,

    /// Marks the port as trusted.
    #[serde(default, rename = "trustedVF", skip_serializing_if = "Option::is_none")]
    pub trusted_vf: Option<bool>,
}

/// Extra neutron port create options passed through verbatim.
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ValueSpec {
    pub name: String,
    pub key: String,
    pub value: String,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortOpts {
    /// The network the port is created on. The cluster network when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkParam>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Appended to the machine name to form the port name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_suffix: Option<String>,

    #[serde(default, rename = "fixedIPs", skip_serializing_if = "Vec::is_empty")]
    pub fixed_ips: Vec<FixedIP>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<SecurityGroupParam>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trunk: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state_up: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_address_pairs: Vec<AddressPair>,

    #[serde(default, rename = "hostID", skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnic_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<BindingProfile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_port_security: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propagate_uplink_status: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value_specs: Vec<ValueSpec>,
}

/*
 * ============================================================================
 * Volumes
 * ============================================================================
 */
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeAZSource {
    Name,
    Machine,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct VolumeAvailabilityZone {
    /// Where the availability zone comes from. `Name` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<VolumeAZSource>,

    /// The availability zone when `from` is `Name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockDeviceVolume {
    /// The cinder volume type.
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,

    /// The volume availability zone. The default cinder availability zone
    /// when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<VolumeAvailabilityZone>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RootVolume {
    #[serde(rename = "sizeGiB")]
    pub size_gib: i32,

    #[serde(flatten)]
    pub block_device_volume: BlockDeviceVolume,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockDeviceType {
    #[default]
    Local,
    Volume,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct BlockDeviceStorage {
    #[serde(rename = "type")]
    pub type_: BlockDeviceType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<BlockDeviceVolume>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AdditionalBlockDevice {
    pub name: String,

    #[serde(rename = "sizeGiB")]
    pub size_gib: i32,

    pub storage: BlockDeviceStorage,
}

/*
 * ============================================================================
 * Miscellaneous
 * ============================================================================
 */
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ServerMetadata {
    pub key: String,
    pub value: String,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchedulerHintValueType {
    #[default]
    Bool,
    String,
    Number,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SchedulerHintAdditionalValue {
    #[serde(rename = "type")]
    pub type_: SchedulerHintValueType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
}

/// An additional scheduler hint passed to nova when creating the server.
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SchedulerHintAdditionalProperty {
    pub name: String,
    pub value: SchedulerHintAdditionalValue,
}

/// The cloud credentials used by a machine or cluster.
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackIdentityReference {
    /// The name of a secret in the same namespace containing a clouds.yaml.
    pub name: String,

    /// The name of the cloud in the clouds.yaml.
    pub cloud_name: String,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct APIEndpoint {
    pub host: String,
    pub port: i32,
}

/// A Cluster API condition.
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,

    /// One of `True`, `False` or `Unknown`.
    pub status: String,

    /// `Error`, `Warning` or `Info`, set only when `status` is `False`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub severity: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<Time>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}
