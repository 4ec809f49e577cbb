use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use crate::api::v1beta1::{
    FailureDomainSpec, LoadBalancer, NetworkStatus, NetworkStatusWithSubnets, Router, Subnet,
};

use super::{
    openstackmachine::OpenStackMachineSpec,
    types::{APIEndpoint, NetworkFilter, OpenStackIdentityReference, RouterFilter, SubnetFilter},
};

/*
 * ============================================================================
 * Custom Resource Definition
 * ============================================================================
 */
/// # OpenStack Cluster
///
/// Deprecated, use `v1beta1`.
#[allow(clippy::module_name_repetitions, clippy::struct_excessive_bools)]
#[derive(CustomResource, JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[kube(
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1alpha7",
    kind = "OpenStackCluster",
    namespaced,
    derive = "PartialEq",
    deprecated = "infrastructure.cluster.x-k8s.io/v1alpha7 OpenStackCluster is deprecated, use v1beta1",
    printcolumn = r#"{"name":"Cluster", "type":"string", "description":"Cluster to which this OpenStackCluster belongs", "jsonPath":".metadata.labels['cluster\\.x-k8s\\.io/cluster-name']"}"#,
    printcolumn = r#"{"name":"Ready", "type":"string", "description":"Cluster infrastructure is ready for OpenStack instances", "jsonPath":".status.ready"}"#,
    printcolumn = r#"{"name":"Network", "type":"string", "description":"Network the cluster is using", "jsonPath":".status.network.id"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#,
    status = "OpenStackClusterStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackClusterSpec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cloud_name: String,

    /// The cidr of the subnet created for the cluster.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub node_cidr: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router: Option<RouterFilter>,

    #[serde(default)]
    pub network: NetworkFilter,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<SubnetFilter>,

    #[serde(default, skip_serializing_if = "crate::api::is_zero")]
    pub network_mtu: i32,

    /// Name servers of the subnet created for the cluster.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_nameservers: Vec<String>,

    #[serde(default, rename = "externalRouterIPs", skip_serializing_if = "Vec::is_empty")]
    pub external_router_ips: Vec<ExternalRouterIPParam>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub external_network_id: String,

    #[serde(default, rename = "apiServerLoadBalancer")]
    pub api_server_load_balancer: APIServerLoadBalancer,

    #[serde(default, rename = "disableAPIServerFloatingIP")]
    pub disable_api_server_floating_ip: bool,

    #[serde(default, rename = "apiServerFloatingIP", skip_serializing_if = "String::is_empty")]
    pub api_server_floating_ip: String,

    #[serde(default, rename = "apiServerFixedIP", skip_serializing_if = "String::is_empty")]
    pub api_server_fixed_ip: String,

    #[serde(default, rename = "apiServerPort", skip_serializing_if = "crate::api::is_zero")]
    pub api_server_port: i32,

    #[serde(default)]
    pub managed_security_groups: bool,

    #[serde(default)]
    pub allow_all_in_cluster_traffic: bool,

    #[serde(default)]
    pub disable_port_security: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub control_plane_endpoint: APIEndpoint,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub control_plane_availability_zones: Vec<String>,

    #[serde(default)]
    pub control_plane_omit_availability_zone: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bastion: Option<Bastion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_ref: Option<OpenStackIdentityReference>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ExternalRouterIPParam {
    #[serde(default, rename = "fixedIP", skip_serializing_if = "String::is_empty")]
    pub fixed_ip: String,

    #[serde(default)]
    pub subnet: SubnetFilter,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct APIServerLoadBalancer {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_ports: Vec<i32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_cidrs: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub provider: String,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bastion {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub instance: OpenStackMachineSpec,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub availability_zone: String,
}

/*
 * ============================================================================
 * Status
 * ============================================================================
 */
#[allow(clippy::module_name_repetitions)]
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackClusterStatus {
    #[serde(default)]
    pub ready: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkStatusWithSubnets>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_network: Option<NetworkStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router: Option<Router>,

    #[serde(default, rename = "apiServerLoadBalancer", skip_serializing_if = "Option::is_none")]
    pub api_server_load_balancer: Option<LoadBalancer>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub failure_domains: BTreeMap<String, FailureDomainSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane_security_group: Option<SecurityGroupStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_security_group: Option<SecurityGroupStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bastion_security_group: Option<SecurityGroupStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bastion: Option<BastionStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SecurityGroupStatus {
    pub name: String,

    pub id: String,

    /// The rules of the security group as observed in OpenStack.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<SecurityGroupRuleStatus>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroupRuleStatus {
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub direction: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ether_type: String,

    #[serde(default, rename = "securityGroupID", skip_serializing_if = "String::is_empty")]
    pub security_group_id: String,

    #[serde(default, skip_serializing_if = "crate::api::is_zero")]
    pub port_range_min: i32,

    #[serde(default, skip_serializing_if = "crate::api::is_zero")]
    pub port_range_max: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub protocol: String,

    #[serde(default, rename = "remoteGroupID", skip_serializing_if = "String::is_empty")]
    pub remote_group_id: String,

    #[serde(default, rename = "remoteIPPrefix", skip_serializing_if = "String::is_empty")]
    pub remote_ip_prefix: String,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BastionStatus {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssh_key_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,

    #[serde(default, rename = "ip", skip_serializing_if = "String::is_empty")]
    pub ip: String,

    #[serde(default, rename = "floatingIP", skip_serializing_if = "String::is_empty")]
    pub floating_ip: String,
}
