use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use crate::api::v1beta1::{APIEndpoint, BlockDeviceType, Condition, ValueSpec};

/*
 * ============================================================================
 * Filters
 * ============================================================================
 */
/// Neutron tag filters. Each is a comma separated list of tags.
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterByNeutronTags {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tags: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tags_any: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub not_tags: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub not_tags_any: String,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(flatten)]
    pub neutron_tags: FilterByNeutronTags,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    #[serde(default, skip_serializing_if = "crate::api::is_zero")]
    pub ip_version: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gateway_ip: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cidr: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipv6_address_mode: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipv6_ra_mode: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(flatten)]
    pub neutron_tags: FilterByNeutronTags,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouterFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    #[serde(flatten)]
    pub neutron_tags: FilterByNeutronTags,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroupFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    #[serde(flatten)]
    pub neutron_tags: FilterByNeutronTags,
}

/*
 * ============================================================================
 * Ports
 * ============================================================================
 */
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixedIP {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<SubnetFilter>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ip_address: String,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressPair {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ip_address: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mac_address: String,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortOpts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkFilter>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name_suffix: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state_up: Option<bool>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mac_address: String,

    #[serde(default, rename = "fixedIPs", skip_serializing_if = "Vec::is_empty")]
    pub fixed_ips: Vec<FixedIP>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<SecurityGroupFilter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_address_pairs: Vec<AddressPair>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trunk: Option<bool>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vnic_type: String,

    /// Free form binding profile. Only `capabilities` and `trusted` are
    /// understood.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub profile: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_port_security: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propagate_uplink_status: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value_specs: Vec<ValueSpec>,
}

/*
 * ============================================================================
 * Volumes
 * ============================================================================
 */
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RootVolume {
    #[serde(default)]
    pub disk_size: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub volume_type: String,

    /// The volume availability zone. The machine's availability zone when
    /// empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub availability_zone: String,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockDeviceVolume {
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,

    /// The machine's availability zone when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub availability_zone: String,
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
 * Identity
 * ============================================================================
 */
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct OpenStackIdentityReference {
    /// Only `Secret` is supported.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    pub name: String,
}
