use std::collections::BTreeMap;

use crate::api::{v1alpha7, v1beta1};

const SECRET: &str = "Secret";

const CAPABILITIES: &str = "capabilities";

const SWITCHDEV: &str = "switchdev";

const TRUSTED: &str = "trusted";

fn optional_string(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn optional_i32(value: i32) -> Option<i32> {
    (value != 0).then_some(value)
}

fn optional_bool(value: bool) -> Option<bool> {
    value.then_some(true)
}

/*
 * ============================================================================
 * Filters
 * ============================================================================
 */
fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

impl From<&v1alpha7::FilterByNeutronTags> for v1beta1::FilterByNeutronTags {
    fn from(tags: &v1alpha7::FilterByNeutronTags) -> Self {
        Self {
            tags: split_tags(&tags.tags),
            tags_any: split_tags(&tags.tags_any),
            not_tags: split_tags(&tags.not_tags),
            not_tags_any: split_tags(&tags.not_tags_any),
        }
    }
}

impl From<&v1beta1::FilterByNeutronTags> for v1alpha7::FilterByNeutronTags {
    fn from(tags: &v1beta1::FilterByNeutronTags) -> Self {
        Self {
            tags: tags.tags.join(","),
            tags_any: tags.tags_any.join(","),
            not_tags: tags.not_tags.join(","),
            not_tags_any: tags.not_tags_any.join(","),
        }
    }
}

pub(super) fn network_param(filter: &v1alpha7::NetworkFilter) -> Option<v1beta1::NetworkParam> {
    if !filter.id.is_empty() {
        return Some(v1beta1::NetworkParam {
            id: Some(filter.id.clone()),
            filter: None,
        });
    }

    let filter = v1beta1::NetworkFilter {
        name: filter.name.clone(),
        description: filter.description.clone(),
        project_id: filter.project_id.clone(),
        neutron_tags: (&filter.neutron_tags).into(),
    };
    (filter != v1beta1::NetworkFilter::default()).then(|| v1beta1::NetworkParam {
        id: None,
        filter: Some(filter),
    })
}

pub(super) fn network_filter(param: &v1beta1::NetworkParam) -> v1alpha7::NetworkFilter {
    let filter = param.filter.clone().unwrap_or_default();
    v1alpha7::NetworkFilter {
        name: filter.name,
        description: filter.description,
        project_id: filter.project_id,
        id: param.id.clone().unwrap_or_default(),
        neutron_tags: (&filter.neutron_tags).into(),
    }
}

pub(super) fn subnet_param(filter: &v1alpha7::SubnetFilter) -> Option<v1beta1::SubnetParam> {
    if !filter.id.is_empty() {
        return Some(v1beta1::SubnetParam {
            id: Some(filter.id.clone()),
            filter: None,
        });
    }

    let filter = v1beta1::SubnetFilter {
        name: filter.name.clone(),
        description: filter.description.clone(),
        project_id: filter.project_id.clone(),
        ip_version: filter.ip_version,
        gateway_ip: filter.gateway_ip.clone(),
        cidr: filter.cidr.clone(),
        ipv6_address_mode: filter.ipv6_address_mode.clone(),
        ipv6_ra_mode: filter.ipv6_ra_mode.clone(),
        neutron_tags: (&filter.neutron_tags).into(),
    };
    (filter != v1beta1::SubnetFilter::default()).then(|| v1beta1::SubnetParam {
        id: None,
        filter: Some(filter),
    })
}

pub(super) fn subnet_filter(param: &v1beta1::SubnetParam) -> v1alpha7::SubnetFilter {
    let filter = param.filter.clone().unwrap_or_default();
    v1alpha7::SubnetFilter {
        name: filter.name,
        description: filter.description,
        project_id: filter.project_id,
        ip_version: filter.ip_version,
        gateway_ip: filter.gateway_ip,
        cidr: filter.cidr,
        ipv6_address_mode: filter.ipv6_address_mode,
        ipv6_ra_mode: filter.ipv6_ra_mode,
        id: param.id.clone().unwrap_or_default(),
        neutron_tags: (&filter.neutron_tags).into(),
    }
}

pub(super) fn router_param(filter: &v1alpha7::RouterFilter) -> Option<v1beta1::RouterParam> {
    if !filter.id.is_empty() {
        return Some(v1beta1::RouterParam {
            id: Some(filter.id.clone()),
            filter: None,
        });
    }

    let filter = v1beta1::RouterFilter {
        name: filter.name.clone(),
        description: filter.description.clone(),
        project_id: filter.project_id.clone(),
        neutron_tags: (&filter.neutron_tags).into(),
    };
    (filter != v1beta1::RouterFilter::default()).then(|| v1beta1::RouterParam {
        id: None,
        filter: Some(filter),
    })
}

pub(super) fn router_filter(param: &v1beta1::RouterParam) -> v1alpha7::RouterFilter {
    let filter = param.filter.clone().unwrap_or_default();
    v1alpha7::RouterFilter {
        id: param.id.clone().unwrap_or_default(),
        name: filter.name,
        description: filter.description,
        project_id: filter.project_id,
        neutron_tags: (&filter.neutron_tags).into(),
    }
}

/// An empty filter converts to an empty param, which keeps the position of
/// every security group in a list.
pub(super) fn security_group_param(
    filter: &v1alpha7::SecurityGroupFilter,
) -> v1beta1::SecurityGroupParam {
    if !filter.id.is_empty() {
        return v1beta1::SecurityGroupParam {
            id: Some(filter.id.clone()),
            filter: None,
        };
    }

    let filter = v1beta1::SecurityGroupFilter {
        name: filter.name.clone(),
        description: filter.description.clone(),
        project_id: filter.project_id.clone(),
        neutron_tags: (&filter.neutron_tags).into(),
    };
    v1beta1::SecurityGroupParam {
        id: None,
        filter: (filter != v1beta1::SecurityGroupFilter::default()).then_some(filter),
    }
}

pub(super) fn security_group_filter(
    param: &v1beta1::SecurityGroupParam,
) -> v1alpha7::SecurityGroupFilter {
    let filter = param.filter.clone().unwrap_or_default();
    v1alpha7::SecurityGroupFilter {
        id: param.id.clone().unwrap_or_default(),
        name: filter.name,
        description: filter.description,
        project_id: filter.project_id,
        neutron_tags: (&filter.neutron_tags).into(),
    }
}

/// `image_uuid` takes precedence over `image`.
pub(super) fn image_param(image: &str, image_uuid: &str) -> v1beta1::ImageParam {
    if !image_uuid.is_empty() {
        return v1beta1::ImageParam {
            id: Some(image_uuid.to_string()),
            filter: None,
        };
    }

    v1beta1::ImageParam {
        id: None,
        filter: optional_string(image).map(|name| v1beta1::ImageFilter {
            name: Some(name),
            tags: Vec::new(),
        }),
    }
}

/// Returns the image name and uuid of an image param.
pub(super) fn image_name_and_uuid(param: &v1beta1::ImageParam) -> (String, String) {
    let name = param
        .filter
        .as_ref()
        .and_then(|filter| filter.name.clone())
        .unwrap_or_default();
    (name, param.id.clone().unwrap_or_default())
}

/*
 * ============================================================================
 * Ports
 * ============================================================================
 */
fn binding_profile(profile: &BTreeMap<String, String>) -> Option<v1beta1::BindingProfile> {
    let ovs_hw_offload = profile
        .get(CAPABILITIES)
        .is_some_and(|capabilities| capabilities.contains(SWITCHDEV))
        .then_some(true);
    let trusted_vf = profile
        .get(TRUSTED)
        .is_some_and(|trusted| trusted == "true")
        .then_some(true);

    (ovs_hw_offload.is_some() || trusted_vf.is_some()).then_some(v1beta1::BindingProfile {
        ovs_hw_offload,
        trusted_vf,
    })
}

fn profile(binding_profile: Option<&v1beta1::BindingProfile>) -> BTreeMap<String, String> {
    let mut profile = BTreeMap::new();
    if let Some(binding_profile) = binding_profile {
        if binding_profile.ovs_hw_offload == Some(true) {
            profile.insert(CAPABILITIES.into(), format!("[\"{SWITCHDEV}\"]"));
        }
        if binding_profile.trusted_vf == Some(true) {
            profile.insert(TRUSTED.into(), "true".into());
        }
    }
    profile
}

impl From<&v1alpha7::FixedIP> for v1beta1::FixedIP {
    fn from(fixed_ip: &v1alpha7::FixedIP) -> Self {
        Self {
            subnet: fixed_ip.subnet.as_ref().and_then(subnet_param),
            ip_address: optional_string(&fixed_ip.ip_address),
        }
    }
}

impl From<&v1beta1::FixedIP> for v1alpha7::FixedIP {
    fn from(fixed_ip: &v1beta1::FixedIP) -> Self {
        Self {
            subnet: fixed_ip.subnet.as_ref().map(subnet_filter),
            ip_address: fixed_ip.ip_address.clone().unwrap_or_default(),
        }
    }
}

impl From<&v1alpha7::AddressPair> for v1beta1::AddressPair {
    fn from(pair: &v1alpha7::AddressPair) -> Self {
        Self {
            ip_address: pair.ip_address.clone(),
            mac_address: optional_string(&pair.mac_address),
        }
    }
}

impl From<&v1beta1::AddressPair> for v1alpha7::AddressPair {
    fn from(pair: &v1beta1::AddressPair) -> Self {
        Self {
            ip_address: pair.ip_address.clone(),
            mac_address: pair.mac_address.clone().unwrap_or_default(),
        }
    }
}

impl From<&v1alpha7::PortOpts> for v1beta1::PortOpts {
    fn from(port: &v1alpha7::PortOpts) -> Self {
        Self {
            network: port.network.as_ref().and_then(network_param),
            description: optional_string(&port.description),
            name_suffix: optional_string(&port.name_suffix),
            fixed_ips: port.fixed_ips.iter().map(Into::into).collect(),
            security_groups: port
                .security_groups
                .iter()
                .map(security_group_param)
                .collect(),
            tags: port.tags.clone(),
            trunk: port.trunk,
            admin_state_up: port.admin_state_up,
            mac_address: optional_string(&port.mac_address),
            allowed_address_pairs: port.allowed_address_pairs.iter().map(Into::into).collect(),
            host_id: optional_string(&port.host_id),
            vnic_type: optional_string(&port.vnic_type),
            profile: binding_profile(&port.profile),
            disable_port_security: port.disable_port_security,
            propagate_uplink_status: port.propagate_uplink_status,
            value_specs: port.value_specs.clone(),
        }
    }
}

impl From<&v1beta1::PortOpts> for v1alpha7::PortOpts {
    fn from(port: &v1beta1::PortOpts) -> Self {
        Self {
            network: port.network.as_ref().map(network_filter),
            name_suffix: port.name_suffix.clone().unwrap_or_default(),
            description: port.description.clone().unwrap_or_default(),
            admin_state_up: port.admin_state_up,
            mac_address: port.mac_address.clone().unwrap_or_default(),
            fixed_ips: port.fixed_ips.iter().map(Into::into).collect(),
            security_groups: port
                .security_groups
                .iter()
                .map(security_group_filter)
                .collect(),
            allowed_address_pairs: port.allowed_address_pairs.iter().map(Into::into).collect(),
            trunk: port.trunk,
            host_id: port.host_id.clone().unwrap_or_default(),
            vnic_type: port.vnic_type.clone().unwrap_or_default(),
            profile: profile(port.profile.as_ref()),
            disable_port_security: port.disable_port_security,
            propagate_uplink_status: port.propagate_uplink_status,
            tags: port.tags.clone(),
            value_specs: port.value_specs.clone(),
        }
    }
}

/*
 * ============================================================================
 * Volumes
 * ============================================================================
 */
/// An empty availability zone means the availability zone of the machine.
fn volume_availability_zone(availability_zone: &str) -> v1beta1::VolumeAvailabilityZone {
    if availability_zone.is_empty() {
        v1beta1::VolumeAvailabilityZone {
            from: Some(v1beta1::VolumeAZSource::Machine),
            name: None,
        }
    } else {
        v1beta1::VolumeAvailabilityZone {
            from: Some(v1beta1::VolumeAZSource::Name),
            name: Some(availability_zone.to_string()),
        }
    }
}

fn availability_zone(availability_zone: Option<&v1beta1::VolumeAvailabilityZone>) -> String {
    match availability_zone {
        None
        | Some(v1beta1::VolumeAvailabilityZone {
            from: Some(v1beta1::VolumeAZSource::Machine),
            ..
        }) => String::new(),
        Some(v1beta1::VolumeAvailabilityZone { name, .. }) => name.clone().unwrap_or_default(),
    }
}

impl From<&v1alpha7::RootVolume> for v1beta1::RootVolume {
    fn from(root_volume: &v1alpha7::RootVolume) -> Self {
        Self {
            size_gib: root_volume.disk_size,
            block_device_volume: v1beta1::BlockDeviceVolume {
                type_: root_volume.volume_type.clone(),
                availability_zone: Some(volume_availability_zone(
                    &root_volume.availability_zone,
                )),
            },
        }
    }
}

impl From<&v1beta1::RootVolume> for v1alpha7::RootVolume {
    fn from(root_volume: &v1beta1::RootVolume) -> Self {
        Self {
            disk_size: root_volume.size_gib,
            volume_type: root_volume.block_device_volume.type_.clone(),
            availability_zone: availability_zone(
                root_volume.block_device_volume.availability_zone.as_ref(),
            ),
        }
    }
}

impl From<&v1alpha7::BlockDeviceVolume> for v1beta1::BlockDeviceVolume {
    fn from(volume: &v1alpha7::BlockDeviceVolume) -> Self {
        Self {
            type_: volume.type_.clone(),
            availability_zone: Some(volume_availability_zone(&volume.availability_zone)),
        }
    }
}

impl From<&v1beta1::BlockDeviceVolume> for v1alpha7::BlockDeviceVolume {
    fn from(volume: &v1beta1::BlockDeviceVolume) -> Self {
        Self {
            type_: volume.type_.clone(),
            availability_zone: availability_zone(volume.availability_zone.as_ref()),
        }
    }
}

impl From<&v1alpha7::AdditionalBlockDevice> for v1beta1::AdditionalBlockDevice {
    fn from(device: &v1alpha7::AdditionalBlockDevice) -> Self {
        Self {
            name: device.name.clone(),
            size_gib: device.size_gib,
            storage: v1beta1::BlockDeviceStorage {
                type_: device.storage.type_,
                volume: device.storage.volume.as_ref().map(Into::into),
            },
        }
    }
}

impl From<&v1beta1::AdditionalBlockDevice> for v1alpha7::AdditionalBlockDevice {
    fn from(device: &v1beta1::AdditionalBlockDevice) -> Self {
        Self {
            name: device.name.clone(),
            size_gib: device.size_gib,
            storage: v1alpha7::BlockDeviceStorage {
                type_: device.storage.type_,
                volume: device.storage.volume.as_ref().map(Into::into),
            },
        }
    }
}

/*
 * ============================================================================
 * Identity
 * ============================================================================
 */
/// A machine without identity reference or cloud name uses the identity of
/// its cluster.
fn machine_identity_ref(
    identity_ref: Option<&v1alpha7::OpenStackIdentityReference>,
    cloud_name: &str,
) -> Option<v1beta1::OpenStackIdentityReference> {
    if identity_ref.is_none() && cloud_name.is_empty() {
        return None;
    }

    Some(cluster_identity_ref(identity_ref, cloud_name))
}

fn cluster_identity_ref(
    identity_ref: Option<&v1alpha7::OpenStackIdentityReference>,
    cloud_name: &str,
) -> v1beta1::OpenStackIdentityReference {
    v1beta1::OpenStackIdentityReference {
        name: identity_ref
            .map(|identity_ref| identity_ref.name.clone())
            .unwrap_or_default(),
        cloud_name: cloud_name.to_string(),
    }
}

/// Returns the identity reference and cloud name of a `v1beta1` identity
/// reference.
fn identity_ref_and_cloud_name(
    identity_ref: &v1beta1::OpenStackIdentityReference,
) -> (Option<v1alpha7::OpenStackIdentityReference>, String) {
    let spoke = (!identity_ref.name.is_empty()).then(|| v1alpha7::OpenStackIdentityReference {
        kind: SECRET.into(),
        name: identity_ref.name.clone(),
    });
    (spoke, identity_ref.cloud_name.clone())
}

/*
 * ============================================================================
 * Machine
 * ============================================================================
 */
impl From<&v1alpha7::OpenStackMachineSpec> for v1beta1::OpenStackMachineSpec {
    fn from(spec: &v1alpha7::OpenStackMachineSpec) -> Self {
        Self {
            provider_id: spec.provider_id.clone(),
            flavor: spec.flavor.clone(),
            image: image_param(&spec.image, &spec.image_uuid),
            ssh_key_name: spec.ssh_key_name.clone(),
            ports: spec.ports.iter().map(Into::into).collect(),
            security_groups: spec
                .security_groups
                .iter()
                .map(security_group_param)
                .collect(),
            trunk: spec.trunk,
            tags: spec.tags.clone(),
            server_metadata: spec
                .server_metadata
                .iter()
                .map(|(key, value)| v1beta1::ServerMetadata {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect(),
            config_drive: spec.config_drive,
            root_volume: spec.root_volume.as_ref().map(Into::into),
            additional_block_devices: spec.additional_block_devices.iter().map(Into::into).collect(),
            server_group: optional_string(&spec.server_group_id).map(|id| {
                v1beta1::ServerGroupParam {
                    id: Some(id),
                    filter: None,
                }
            }),
            identity_ref: machine_identity_ref(spec.identity_ref.as_ref(), &spec.cloud_name),
            floating_ip_pool_ref: None,
            scheduler_hint_additional_properties: Vec::new(),
        }
    }
}

impl From<&v1beta1::OpenStackMachineSpec> for v1alpha7::OpenStackMachineSpec {
    fn from(spec: &v1beta1::OpenStackMachineSpec) -> Self {
        let (image, image_uuid) = image_name_and_uuid(&spec.image);
        let (identity_ref, cloud_name) = spec
            .identity_ref
            .as_ref()
            .map(identity_ref_and_cloud_name)
            .unwrap_or_default();

        Self {
            provider_id: spec.provider_id.clone(),
            instance_id: None,
            cloud_name,
            flavor: spec.flavor.clone(),
            image,
            image_uuid,
            ssh_key_name: spec.ssh_key_name.clone(),
            ports: spec.ports.iter().map(Into::into).collect(),
            security_groups: spec
                .security_groups
                .iter()
                .map(security_group_filter)
                .collect(),
            trunk: spec.trunk,
            tags: spec.tags.clone(),
            server_metadata: spec
                .server_metadata
                .iter()
                .map(|metadata| (metadata.key.clone(), metadata.value.clone()))
                .collect(),
            config_drive: spec.config_drive,
            root_volume: spec.root_volume.as_ref().map(Into::into),
            additional_block_devices: spec.additional_block_devices.iter().map(Into::into).collect(),
            server_group_id: spec
                .server_group
                .as_ref()
                .and_then(|server_group| server_group.id.clone())
                .unwrap_or_default(),
            identity_ref,
        }
    }
}

impl From<&v1alpha7::OpenStackMachineStatus> for v1beta1::OpenStackMachineStatus {
    fn from(status: &v1alpha7::OpenStackMachineStatus) -> Self {
        Self {
            instance_id: None,
            ready: status.ready,
            addresses: status.addresses.clone(),
            resolved: None,
            resources: None,
            instance_state: status.instance_state.clone(),
            failure_reason: status.failure_reason.clone(),
            failure_message: status.failure_message.clone(),
            conditions: status.conditions.clone(),
        }
    }
}

impl From<&v1beta1::OpenStackMachineStatus> for v1alpha7::OpenStackMachineStatus {
    fn from(status: &v1beta1::OpenStackMachineStatus) -> Self {
        Self {
            ready: status.ready,
            addresses: status.addresses.clone(),
            instance_state: status.instance_state.clone(),
            failure_reason: status.failure_reason.clone(),
            failure_message: status.failure_message.clone(),
            conditions: status.conditions.clone(),
        }
    }
}

/*
 * ============================================================================
 * Cluster
 * ============================================================================
 */
impl From<&v1alpha7::ExternalRouterIPParam> for v1beta1::ExternalRouterIPParam {
    fn from(param: &v1alpha7::ExternalRouterIPParam) -> Self {
        Self {
            fixed_ip: param.fixed_ip.clone(),
            subnet: subnet_param(&param.subnet).unwrap_or_default(),
        }
    }
}

impl From<&v1beta1::ExternalRouterIPParam> for v1alpha7::ExternalRouterIPParam {
    fn from(param: &v1beta1::ExternalRouterIPParam) -> Self {
        Self {
            fixed_ip: param.fixed_ip.clone(),
            subnet: subnet_filter(&param.subnet),
        }
    }
}

/// A load balancer with every field at its default is no load balancer.
fn api_server_load_balancer(
    load_balancer: &v1alpha7::APIServerLoadBalancer,
) -> Option<v1beta1::APIServerLoadBalancer> {
    (*load_balancer != v1alpha7::APIServerLoadBalancer::default()).then(|| {
        v1beta1::APIServerLoadBalancer {
            enabled: Some(load_balancer.enabled),
            additional_ports: load_balancer.additional_ports.clone(),
            allowed_cidrs: load_balancer.allowed_cidrs.clone(),
            provider: optional_string(&load_balancer.provider),
        }
    })
}

impl From<&v1beta1::APIServerLoadBalancer> for v1alpha7::APIServerLoadBalancer {
    fn from(load_balancer: &v1beta1::APIServerLoadBalancer) -> Self {
        Self {
            enabled: load_balancer.is_enabled(),
            additional_ports: load_balancer.additional_ports.clone(),
            allowed_cidrs: load_balancer.allowed_cidrs.clone(),
            provider: load_balancer.provider.clone().unwrap_or_default(),
        }
    }
}

impl From<&v1alpha7::Bastion> for v1beta1::Bastion {
    fn from(bastion: &v1alpha7::Bastion) -> Self {
        Self {
            enabled: Some(bastion.enabled),
            spec: (bastion.instance != v1alpha7::OpenStackMachineSpec::default())
                .then(|| (&bastion.instance).into()),
            availability_zone: optional_string(&bastion.availability_zone),
            floating_ip: None,
        }
    }
}

impl From<&v1beta1::Bastion> for v1alpha7::Bastion {
    fn from(bastion: &v1beta1::Bastion) -> Self {
        Self {
            enabled: bastion.is_enabled(),
            instance: bastion.spec.as_ref().map(Into::into).unwrap_or_default(),
            availability_zone: bastion.availability_zone.clone().unwrap_or_default(),
        }
    }
}

impl From<&v1alpha7::OpenStackClusterSpec> for v1beta1::OpenStackClusterSpec {
    fn from(spec: &v1alpha7::OpenStackClusterSpec) -> Self {
        let managed_subnets = if spec.node_cidr.is_empty() {
            Vec::new()
        } else {
            vec![v1beta1::SubnetSpec {
                cidr: spec.node_cidr.clone(),
                dns_nameservers: spec.dns_nameservers.clone(),
                allocation_pools: Vec::new(),
            }]
        };

        Self {
            managed_subnets,
            router: spec.router.as_ref().and_then(router_param),
            network: network_param(&spec.network),
            subnets: spec
                .subnets
                .iter()
                .map(|subnet| subnet_param(subnet).unwrap_or_default())
                .collect(),
            network_mtu: optional_i32(spec.network_mtu),
            external_router_ips: spec.external_router_ips.iter().map(Into::into).collect(),
            external_network: optional_string(&spec.external_network_id).map(|id| {
                v1beta1::NetworkParam {
                    id: Some(id),
                    filter: None,
                }
            }),
            disable_external_network: None,
            api_server_load_balancer: api_server_load_balancer(&spec.api_server_load_balancer),
            disable_api_server_floating_ip: optional_bool(spec.disable_api_server_floating_ip),
            api_server_floating_ip: optional_string(&spec.api_server_floating_ip),
            api_server_fixed_ip: optional_string(&spec.api_server_fixed_ip),
            api_server_port: optional_i32(spec.api_server_port),
            managed_security_groups: spec.managed_security_groups.then(|| {
                v1beta1::ManagedSecurityGroups {
                    all_nodes_security_group_rules: Vec::new(),
                    allow_all_in_cluster_traffic: spec.allow_all_in_cluster_traffic,
                }
            }),
            disable_port_security: optional_bool(spec.disable_port_security),
            tags: spec.tags.clone(),
            control_plane_endpoint: (spec.control_plane_endpoint
                != v1alpha7::APIEndpoint::default())
            .then(|| spec.control_plane_endpoint.clone()),
            control_plane_availability_zones: spec.control_plane_availability_zones.clone(),
            control_plane_omit_availability_zone: optional_bool(
                spec.control_plane_omit_availability_zone,
            ),
            bastion: spec.bastion.as_ref().map(Into::into),
            identity_ref: cluster_identity_ref(spec.identity_ref.as_ref(), &spec.cloud_name),
        }
    }
}

impl From<&v1beta1::OpenStackClusterSpec> for v1alpha7::OpenStackClusterSpec {
    fn from(spec: &v1beta1::OpenStackClusterSpec) -> Self {
        let managed_subnet = spec.managed_subnets.first();
        let (identity_ref, cloud_name) = identity_ref_and_cloud_name(&spec.identity_ref);

        Self {
            cloud_name,
            node_cidr: managed_subnet
                .map(|subnet| subnet.cidr.clone())
                .unwrap_or_default(),
            router: spec.router.as_ref().map(router_filter),
            network: spec.network.as_ref().map(network_filter).unwrap_or_default(),
            subnets: spec.subnets.iter().map(subnet_filter).collect(),
            network_mtu: spec.network_mtu.unwrap_or_default(),
            dns_nameservers: managed_subnet
                .map(|subnet| subnet.dns_nameservers.clone())
                .unwrap_or_default(),
            external_router_ips: spec.external_router_ips.iter().map(Into::into).collect(),
            external_network_id: spec
                .external_network
                .as_ref()
                .and_then(|network| network.id.clone())
                .unwrap_or_default(),
            api_server_load_balancer: spec
                .api_server_load_balancer
                .as_ref()
                .map(Into::into)
                .unwrap_or_default(),
            disable_api_server_floating_ip: spec.disable_api_server_floating_ip.unwrap_or_default(),
            api_server_floating_ip: spec.api_server_floating_ip.clone().unwrap_or_default(),
            api_server_fixed_ip: spec.api_server_fixed_ip.clone().unwrap_or_default(),
            api_server_port: spec.api_server_port.unwrap_or_default(),
            managed_security_groups: spec.managed_security_groups.is_some(),
            allow_all_in_cluster_traffic: spec
                .managed_security_groups
                .as_ref()
                .is_some_and(|groups| groups.allow_all_in_cluster_traffic),
            disable_port_security: spec.disable_port_security.unwrap_or_default(),
            tags: spec.tags.clone(),
            control_plane_endpoint: spec.control_plane_endpoint.clone().unwrap_or_default(),
            control_plane_availability_zones: spec.control_plane_availability_zones.clone(),
            control_plane_omit_availability_zone: spec
                .control_plane_omit_availability_zone
                .unwrap_or_default(),
            bastion: spec.bastion.as_ref().map(Into::into),
            identity_ref,
        }
    }
}

impl From<&v1alpha7::SecurityGroupStatus> for v1beta1::SecurityGroupStatus {
    fn from(security_group: &v1alpha7::SecurityGroupStatus) -> Self {
        Self {
            name: security_group.name.clone(),
            id: security_group.id.clone(),
        }
    }
}

impl From<&v1beta1::SecurityGroupStatus> for v1alpha7::SecurityGroupStatus {
    fn from(security_group: &v1beta1::SecurityGroupStatus) -> Self {
        Self {
            name: security_group.name.clone(),
            id: security_group.id.clone(),
            rules: Vec::new(),
        }
    }
}

impl From<&v1alpha7::BastionStatus> for v1beta1::BastionStatus {
    fn from(bastion: &v1alpha7::BastionStatus) -> Self {
        Self {
            id: bastion.id.clone(),
            name: bastion.name.clone(),
            ssh_key_name: bastion.ssh_key_name.clone(),
            state: bastion.state.clone(),
            ip: bastion.ip.clone(),
            floating_ip: bastion.floating_ip.clone(),
            resolved: None,
            resources: None,
        }
    }
}

impl From<&v1beta1::BastionStatus> for v1alpha7::BastionStatus {
    fn from(bastion: &v1beta1::BastionStatus) -> Self {
        Self {
            id: bastion.id.clone(),
            name: bastion.name.clone(),
            ssh_key_name: bastion.ssh_key_name.clone(),
            state: bastion.state.clone(),
            ip: bastion.ip.clone(),
            floating_ip: bastion.floating_ip.clone(),
        }
    }
}

impl From<&v1alpha7::OpenStackClusterStatus> for v1beta1::OpenStackClusterStatus {
    fn from(status: &v1alpha7::OpenStackClusterStatus) -> Self {
        Self {
            ready: status.ready,
            network: status.network.clone(),
            external_network: status.external_network.clone(),
            router: status.router.clone(),
            api_server_load_balancer: status.api_server_load_balancer.clone(),
            failure_domains: status.failure_domains.clone(),
            control_plane_security_group: status.control_plane_security_group.as_ref().map(Into::into),
            worker_security_group: status.worker_security_group.as_ref().map(Into::into),
            bastion_security_group: status.bastion_security_group.as_ref().map(Into::into),
            bastion: status.bastion.as_ref().map(Into::into),
            failure_reason: status.failure_reason.clone(),
            failure_message: status.failure_message.clone(),
        }
    }
}

impl From<&v1beta1::OpenStackClusterStatus> for v1alpha7::OpenStackClusterStatus {
    fn from(status: &v1beta1::OpenStackClusterStatus) -> Self {
        Self {
            ready: status.ready,
            network: status.network.clone(),
            external_network: status.external_network.clone(),
            router: status.router.clone(),
            api_server_load_balancer: status.api_server_load_balancer.clone(),
            failure_domains: status.failure_domains.clone(),
            control_plane_security_group: status.control_plane_security_group.as_ref().map(Into::into),
            worker_security_group: status.worker_security_group.as_ref().map(Into::into),
            bastion_security_group: status.bastion_security_group.as_ref().map(Into::into),
            bastion: status.bastion.as_ref().map(Into::into),
            failure_reason: status.failure_reason.clone(),
            failure_message: status.failure_message.clone(),
        }
    }
}
