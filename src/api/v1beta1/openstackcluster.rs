use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    openstackmachine::{MachineResources, OpenStackMachineSpec, ResolvedMachineSpec},
    types::{APIEndpoint, NetworkParam, OpenStackIdentityReference, RouterParam, SubnetParam},
};

/*
 * ============================================================================
 * Custom Resource Definition
 * ============================================================================
 */
/// # OpenStack Cluster
///
/// The infrastructure of a Cluster API cluster: its network, router, API
/// server load balancer, security groups and bastion host.
#[allow(clippy::module_name_repetitions)]
#[derive(CustomResource, JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[kube(
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1beta1",
    kind = "OpenStackCluster",
    namespaced,
    derive = "PartialEq",
    printcolumn = r#"{"name":"Cluster", "type":"string", "description":"Cluster to which this OpenStackCluster belongs", "jsonPath":".metadata.labels['cluster\\.x-k8s\\.io/cluster-name']"}"#,
    printcolumn = r#"{"name":"Ready", "type":"string", "description":"Cluster infrastructure is ready for OpenStack instances", "jsonPath":".status.ready"}"#,
    printcolumn = r#"{"name":"Network", "type":"string", "description":"Network the cluster is using", "jsonPath":".status.network.id"}"#,
    printcolumn = r#"{"name":"Endpoint", "type":"string", "description":"API Endpoint", "jsonPath":".spec.controlPlaneEndpoint.host", "priority":1}"#,
    printcolumn = r#"{"name":"Bastion IP", "type":"string", "description":"Bastion address for breakglass access", "jsonPath":".status.bastion.floatingIP"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#,
    status = "OpenStackClusterStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackClusterSpec {
    /// Subnets created for the cluster when no existing subnets are given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub managed_subnets: Vec<SubnetSpec>,

    /// An existing router for the cluster network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router: Option<RouterParam>,

    /// An existing network for the cluster. Created when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkParam>,

    /// Existing subnets of the cluster network.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<SubnetParam>,

    #[serde(default, rename = "networkMTU", skip_serializing_if = "Option::is_none")]
    pub network_mtu: Option<i32>,

    /// Fixed ips for the router on the external network.
    #[serde(default, rename = "externalRouterIPs", skip_serializing_if = "Vec::is_empty")]
    pub external_router_ips: Vec<ExternalRouterIPParam>,

    /// The external network providing floating ips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_network: Option<NetworkParam>,

    /// Disables every use of an external network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_external_network: Option<bool>,

    #[serde(default, rename = "apiServerLoadBalancer", skip_serializing_if = "Option::is_none")]
    pub api_server_load_balancer: Option<APIServerLoadBalancer>,

    #[serde(default, rename = "disableAPIServerFloatingIP", skip_serializing_if = "Option::is_none")]
    pub disable_api_server_floating_ip: Option<bool>,

    #[serde(default, rename = "apiServerFloatingIP", skip_serializing_if = "Option::is_none")]
    pub api_server_floating_ip: Option<String>,

    #[serde(default, rename = "apiServerFixedIP", skip_serializing_if = "Option::is_none")]
    pub api_server_fixed_ip: Option<String>,

    #[serde(default, rename = "apiServerPort", skip_serializing_if = "Option::is_none")]
    pub api_server_port: Option<i32>,

    /// Security groups managed for the control plane and worker nodes. No
    /// security groups are managed when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_security_groups: Option<ManagedSecurityGroups>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_port_security: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane_endpoint: Option<APIEndpoint>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub control_plane_availability_zones: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane_omit_availability_zone: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bastion: Option<Bastion>,

    /// The credentials of the cluster.
    #[serde(default)]
    pub identity_ref: OpenStackIdentityReference,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetSpec {
    pub cidr: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_nameservers: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allocation_pools: Vec<AllocationPool>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AllocationPool {
    pub start: String,
    pub end: String,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ExternalRouterIPParam {
    #[serde(default, rename = "fixedIP", skip_serializing_if = "String::is_empty")]
    pub fixed_ip: String,

    pub subnet: SubnetParam,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct APIServerLoadBalancer {
    /// Whether a load balancer is created for the API server. `true` when
    /// unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_ports: Vec<i32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_cidrs: Vec<String>,

    /// The Octavia provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManagedSecurityGroups {
    /// Rules applied to the control plane and worker security groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_nodes_security_group_rules: Vec<SecurityGroupRuleSpec>,

    /// Allows all traffic between cluster nodes.
    #[serde(default)]
    pub allow_all_in_cluster_traffic: bool,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroupRuleSpec {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub direction: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ether_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_range_min: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_range_max: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    #[serde(default, rename = "remoteGroupID", skip_serializing_if = "Option::is_none")]
    pub remote_group_id: Option<String>,

    #[serde(default, rename = "remoteIPPrefix", skip_serializing_if = "Option::is_none")]
    pub remote_ip_prefix: Option<String>,

    /// Managed security groups (`control-plane`, `worker`, `bastion`) the
    /// rule allows traffic from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remote_managed_groups: Vec<String>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bastion {
    /// Whether the bastion is created. `true` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// The machine spec of the bastion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<OpenStackMachineSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,

    #[serde(default, rename = "floatingIP", skip_serializing_if = "Option::is_none")]
    pub floating_ip: Option<String>,
}

impl APIServerLoadBalancer {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

impl Bastion {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
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
pub struct NetworkStatus {
    pub name: String,

    pub id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct NetworkStatusWithSubnets {
    #[serde(flatten)]
    pub network: NetworkStatus,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<Subnet>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Subnet {
    pub name: String,

    pub id: String,

    pub cidr: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Router {
    pub name: String,

    pub id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ips: Vec<String>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancer {
    pub name: String,

    pub id: String,

    #[serde(default, rename = "ip", skip_serializing_if = "String::is_empty")]
    pub ip: String,

    #[serde(default, rename = "internalIP", skip_serializing_if = "String::is_empty")]
    pub internal_ip: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_cidrs: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A Cluster API failure domain.
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FailureDomainSpec {
    #[serde(default)]
    pub control_plane: bool,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SecurityGroupStatus {
    pub name: String,

    pub id: String,
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

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<ResolvedMachineSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<MachineResources>,
}
