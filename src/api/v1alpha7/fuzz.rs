//! Property tests: converting any object to the other version and back
//! returns the object unchanged.

use std::collections::BTreeMap;

use k8s_openapi::{
    api::core::v1::{NodeAddress, TypedLocalObjectReference},
    apimachinery::pkg::apis::meta::v1::Time,
};
use kube::core::ObjectMeta;
use proptest::{
    collection::{btree_map, vec},
    option::of,
    prelude::*,
};

use crate::{
    api::{v1alpha7, v1beta1},
    conversion::Convertible,
};

/*
 * ============================================================================
 * Common
 * ============================================================================
 */
/// A small alphabet including the tag separator, so that values collide and
/// comma separated lists are exercised.
fn string() -> BoxedStrategy<String> {
    "[ab,]{0,3}".boxed()
}

fn strings() -> BoxedStrategy<Vec<String>> {
    vec(string(), 0..3).boxed()
}

fn small_i32() -> BoxedStrategy<i32> {
    (0..3i32).boxed()
}

fn string_map() -> BoxedStrategy<BTreeMap<String, String>> {
    btree_map(string(), string(), 0..3).boxed()
}

prop_compose! {
    /// Annotation maps are never empty, an empty map and no map are the same
    /// to the API server.
    fn object_meta()(
        name in "[a-z]{1,5}",
        namespace in of("[a-z]{1,5}"),
        labels in of(btree_map("[a-c]{1,2}", string(), 1..3)),
        annotations in of(btree_map("[a-c]{1,2}", string(), 1..3)),
    ) -> ObjectMeta {
        ObjectMeta {
            name: Some(name),
            namespace,
            labels,
            annotations,
            ..Default::default()
        }
    }
}

prop_compose! {
    fn node_address()(address in string(), type_ in "(InternalIP|ExternalIP)") -> NodeAddress {
        NodeAddress { address, type_ }
    }
}

fn time() -> BoxedStrategy<Time> {
    (1..10u32)
        .prop_map(|day| {
            serde_json::from_value(serde_json::json!(format!("2024-01-0{day}T00:00:00Z"))).unwrap()
        })
        .boxed()
}

prop_compose! {
    fn condition()(
        type_ in "(Ready|InstanceReady)",
        status in "(True|False|Unknown)",
        severity in "(Error|Warning|Info)?",
        last_transition_time in of(time()),
        reason in string(),
        message in string(),
    ) -> v1beta1::Condition {
        v1beta1::Condition { type_, status, severity, last_transition_time, reason, message }
    }
}

prop_compose! {
    fn typed_local_object_reference()(
        api_group in of(string()),
        kind in string(),
        name in string(),
    ) -> TypedLocalObjectReference {
        TypedLocalObjectReference { api_group, kind, name }
    }
}

prop_compose! {
    fn value_spec()(name in string(), key in string(), value in string()) -> v1beta1::ValueSpec {
        v1beta1::ValueSpec { name, key, value }
    }
}

prop_compose! {
    fn api_endpoint()(host in string(), port in small_i32()) -> v1beta1::APIEndpoint {
        v1beta1::APIEndpoint { host, port }
    }
}

fn block_device_type() -> BoxedStrategy<v1beta1::BlockDeviceType> {
    prop_oneof![
        Just(v1beta1::BlockDeviceType::Local),
        Just(v1beta1::BlockDeviceType::Volume),
    ]
    .boxed()
}

prop_compose! {
    fn network_status()(name in string(), id in string(), tags in strings()) -> v1beta1::NetworkStatus {
        v1beta1::NetworkStatus { name, id, tags }
    }
}

prop_compose! {
    fn subnet()(name in string(), id in string(), cidr in string(), tags in strings()) -> v1beta1::Subnet {
        v1beta1::Subnet { name, id, cidr, tags }
    }
}

prop_compose! {
    fn network_status_with_subnets()(
        network in network_status(),
        subnets in vec(subnet(), 0..2),
    ) -> v1beta1::NetworkStatusWithSubnets {
        v1beta1::NetworkStatusWithSubnets { network, subnets }
    }
}

prop_compose! {
    fn router()(name in string(), id in string(), tags in strings(), ips in strings()) -> v1beta1::Router {
        v1beta1::Router { name, id, tags, ips }
    }
}

prop_compose! {
    fn load_balancer()(
        name in string(),
        id in string(),
        ip in string(),
        internal_ip in string(),
        allowed_cidrs in strings(),
        tags in strings(),
    ) -> v1beta1::LoadBalancer {
        v1beta1::LoadBalancer { name, id, ip, internal_ip, allowed_cidrs, tags }
    }
}

prop_compose! {
    fn failure_domain()(control_plane in any::<bool>(), attributes in string_map()) -> v1beta1::FailureDomainSpec {
        v1beta1::FailureDomainSpec { control_plane, attributes }
    }
}

/*
 * ============================================================================
 * v1beta1
 * ============================================================================
 */
mod hub {
    use super::{
        api_endpoint, block_device_type, condition, failure_domain, load_balancer,
        network_status, network_status_with_subnets, node_address, object_meta, router,
        small_i32, string, strings, typed_local_object_reference, value_spec,
    };

    use proptest::{
        collection::{btree_map, vec},
        option::of,
        prelude::*,
    };

    use crate::api::v1beta1::{
        APIServerLoadBalancer, AdditionalBlockDevice, AddressPair, AllocationPool, Bastion,
        BastionStatus, BindingProfile, BlockDeviceStorage, BlockDeviceVolume,
        ExternalRouterIPParam, FilterByNeutronTags, FixedIP, ImageFilter, ImageParam,
        MachineResources, ManagedSecurityGroups, NetworkFilter, NetworkParam, OpenStackCluster,
        OpenStackClusterSpec, OpenStackClusterStatus, OpenStackClusterTemplate,
        OpenStackClusterTemplateResource, OpenStackClusterTemplateSpec, OpenStackIdentityReference,
        OpenStackMachine, OpenStackMachineSpec, OpenStackMachineStatus, OpenStackMachineTemplate,
        OpenStackMachineTemplateResource, OpenStackMachineTemplateSpec, PortOpts, PortStatus,
        ResolvedMachineSpec, ResolvedPortSpec, RootVolume, RouterFilter, RouterParam,
        SchedulerHintAdditionalProperty, SchedulerHintAdditionalValue, SchedulerHintValueType,
        SecurityGroupFilter, SecurityGroupParam, SecurityGroupRuleSpec, SecurityGroupStatus,
        ServerGroupFilter, ServerGroupParam, ServerMetadata, SubnetFilter, SubnetParam,
        SubnetSpec, VolumeAZSource, VolumeAvailabilityZone,
    };

    prop_compose! {
        fn neutron_tags()(
            tags in strings(),
            tags_any in strings(),
            not_tags in strings(),
            not_tags_any in strings(),
        ) -> FilterByNeutronTags {
            FilterByNeutronTags { tags, tags_any, not_tags, not_tags_any }
        }
    }

    prop_compose! {
        fn network_filter()(
            name in string(),
            description in string(),
            project_id in string(),
            neutron_tags in neutron_tags(),
        ) -> NetworkFilter {
            NetworkFilter { name, description, project_id, neutron_tags }
        }
    }

    prop_compose! {
        fn network_param()(id in of(string()), filter in of(network_filter())) -> NetworkParam {
            NetworkParam { id, filter }
        }
    }

    prop_compose! {
        fn subnet_filter()(
            (name, description, project_id) in (string(), string(), string()),
            ip_version in small_i32(),
            gateway_ip in string(),
            cidr in string(),
            ipv6_address_mode in string(),
            ipv6_ra_mode in string(),
            neutron_tags in neutron_tags(),
        ) -> SubnetFilter {
            SubnetFilter {
                name,
                description,
                project_id,
                ip_version,
                gateway_ip,
                cidr,
                ipv6_address_mode,
                ipv6_ra_mode,
                neutron_tags,
            }
        }
    }

    prop_compose! {
        fn subnet_param()(id in of(string()), filter in of(subnet_filter())) -> SubnetParam {
            SubnetParam { id, filter }
        }
    }

    prop_compose! {
        fn router_filter()(
            name in string(),
            description in string(),
            project_id in string(),
            neutron_tags in neutron_tags(),
        ) -> RouterFilter {
            RouterFilter { name, description, project_id, neutron_tags }
        }
    }

    prop_compose! {
        fn router_param()(id in of(string()), filter in of(router_filter())) -> RouterParam {
            RouterParam { id, filter }
        }
    }

    prop_compose! {
        fn security_group_filter()(
            name in string(),
            description in string(),
            project_id in string(),
            neutron_tags in neutron_tags(),
        ) -> SecurityGroupFilter {
            SecurityGroupFilter { name, description, project_id, neutron_tags }
        }
    }

    prop_compose! {
        fn security_group_param()(
            id in of(string()),
            filter in of(security_group_filter()),
        ) -> SecurityGroupParam {
            SecurityGroupParam { id, filter }
        }
    }

    prop_compose! {
        fn image_param()(
            id in of(string()),
            filter in of((of(string()), strings()).prop_map(|(name, tags)| ImageFilter { name, tags })),
        ) -> ImageParam {
            ImageParam { id, filter }
        }
    }

    prop_compose! {
        fn server_group_param()(
            id in of(string()),
            filter in of(of(string()).prop_map(|name| ServerGroupFilter { name })),
        ) -> ServerGroupParam {
            ServerGroupParam { id, filter }
        }
    }

    prop_compose! {
        fn fixed_ip()(subnet in of(subnet_param()), ip_address in of(string())) -> FixedIP {
            FixedIP { subnet, ip_address }
        }
    }

    prop_compose! {
        fn address_pair()(ip_address in string(), mac_address in of(string())) -> AddressPair {
            AddressPair { ip_address, mac_address }
        }
    }

    prop_compose! {
        fn binding_profile()(
            ovs_hw_offload in of(any::<bool>()),
            trusted_vf in of(any::<bool>()),
        ) -> BindingProfile {
            BindingProfile { ovs_hw_offload, trusted_vf }
        }
    }

    prop_compose! {
        fn port_opts()(
            (network, description, name_suffix) in (of(network_param()), of(string()), of(string())),
            (fixed_ips, security_groups, tags) in (
                vec(fixed_ip(), 0..2),
                vec(security_group_param(), 0..2),
                strings(),
            ),
            (trunk, admin_state_up, mac_address) in (of(any::<bool>()), of(any::<bool>()), of(string())),
            allowed_address_pairs in vec(address_pair(), 0..2),
            (host_id, vnic_type, profile) in (of(string()), of(string()), of(binding_profile())),
            (disable_port_security, propagate_uplink_status) in (of(any::<bool>()), of(any::<bool>())),
            value_specs in vec(value_spec(), 0..2),
        ) -> PortOpts {
            PortOpts {
                network,
                description,
                name_suffix,
                fixed_ips,
                security_groups,
                tags,
                trunk,
                admin_state_up,
                mac_address,
                allowed_address_pairs,
                host_id,
                vnic_type,
                profile,
                disable_port_security,
                propagate_uplink_status,
                value_specs,
            }
        }
    }

    fn volume_az_source() -> BoxedStrategy<VolumeAZSource> {
        prop_oneof![Just(VolumeAZSource::Name), Just(VolumeAZSource::Machine)].boxed()
    }

    prop_compose! {
        fn block_device_volume()(
            type_ in string(),
            availability_zone in of(
                (of(volume_az_source()), of(string()))
                    .prop_map(|(from, name)| VolumeAvailabilityZone { from, name }),
            ),
        ) -> BlockDeviceVolume {
            BlockDeviceVolume { type_, availability_zone }
        }
    }

    prop_compose! {
        fn root_volume()(size_gib in small_i32(), block_device_volume in block_device_volume()) -> RootVolume {
            RootVolume { size_gib, block_device_volume }
        }
    }

    prop_compose! {
        fn additional_block_device()(
            name in string(),
            size_gib in small_i32(),
            type_ in block_device_type(),
            volume in of(block_device_volume()),
        ) -> AdditionalBlockDevice {
            AdditionalBlockDevice { name, size_gib, storage: BlockDeviceStorage { type_, volume } }
        }
    }

    fn scheduler_hint_value_type() -> BoxedStrategy<SchedulerHintValueType> {
        prop_oneof![
            Just(SchedulerHintValueType::Bool),
            Just(SchedulerHintValueType::String),
            Just(SchedulerHintValueType::Number),
        ]
        .boxed()
    }

    prop_compose! {
        fn scheduler_hint()(
            name in string(),
            type_ in scheduler_hint_value_type(),
            flag in of(any::<bool>()),
            number in of(small_i32()),
            text in of(string()),
        ) -> SchedulerHintAdditionalProperty {
            SchedulerHintAdditionalProperty {
                name,
                value: SchedulerHintAdditionalValue { type_, bool: flag, number, string: text },
            }
        }
    }

    prop_compose! {
        fn identity_ref()(name in string(), cloud_name in string()) -> OpenStackIdentityReference {
            OpenStackIdentityReference { name, cloud_name }
        }
    }

    prop_compose! {
        pub(super) fn machine_spec()(
            (provider_id, flavor, image) in (of(string()), string(), image_param()),
            (ssh_key_name, ports, security_groups) in (
                string(),
                vec(port_opts(), 0..2),
                vec(security_group_param(), 0..2),
            ),
            (trunk, tags, config_drive) in (any::<bool>(), strings(), of(any::<bool>())),
            server_metadata in vec(
                (string(), string()).prop_map(|(key, value)| ServerMetadata { key, value }),
                0..3,
            ),
            root_volume in of(root_volume()),
            additional_block_devices in vec(additional_block_device(), 0..2),
            server_group in of(server_group_param()),
            identity_ref in of(identity_ref()),
            floating_ip_pool_ref in of(typed_local_object_reference()),
            scheduler_hint_additional_properties in vec(scheduler_hint(), 0..2),
        ) -> OpenStackMachineSpec {
            OpenStackMachineSpec {
                provider_id,
                flavor,
                image,
                ssh_key_name,
                ports,
                security_groups,
                trunk,
                tags,
                server_metadata,
                config_drive,
                root_volume,
                additional_block_devices,
                server_group,
                identity_ref,
                floating_ip_pool_ref,
                scheduler_hint_additional_properties,
            }
        }
    }

    prop_compose! {
        fn resolved_machine_spec()(
            server_group_id in string(),
            image_id in string(),
            ports in vec(
                (string(), string(), string(), strings(), of(any::<bool>())).prop_map(
                    |(name, description, network_id, tags, trunk)| ResolvedPortSpec {
                        name,
                        description,
                        network_id,
                        tags,
                        trunk,
                    },
                ),
                0..2,
            ),
        ) -> ResolvedMachineSpec {
            ResolvedMachineSpec { server_group_id, image_id, ports }
        }
    }

    prop_compose! {
        fn machine_resources()(ports in vec(string().prop_map(|id| PortStatus { id }), 0..2)) -> MachineResources {
            MachineResources { ports }
        }
    }

    prop_compose! {
        fn machine_status()(
            instance_id in of(string()),
            ready in any::<bool>(),
            addresses in vec(node_address(), 0..2),
            resolved in of(resolved_machine_spec()),
            resources in of(machine_resources()),
            instance_state in of(string()),
            failure_reason in of(string()),
            failure_message in of(string()),
            conditions in vec(condition(), 0..2),
        ) -> OpenStackMachineStatus {
            OpenStackMachineStatus {
                instance_id,
                ready,
                addresses,
                resolved,
                resources,
                instance_state,
                failure_reason,
                failure_message,
                conditions,
            }
        }
    }

    prop_compose! {
        pub(super) fn machine()(
            metadata in object_meta(),
            spec in machine_spec(),
            status in of(machine_status()),
        ) -> OpenStackMachine {
            OpenStackMachine { metadata, spec, status }
        }
    }

    prop_compose! {
        pub(super) fn machine_template()(
            metadata in object_meta(),
            spec in machine_spec(),
        ) -> OpenStackMachineTemplate {
            OpenStackMachineTemplate {
                metadata,
                spec: OpenStackMachineTemplateSpec {
                    template: OpenStackMachineTemplateResource { spec },
                },
            }
        }
    }

    prop_compose! {
        fn subnet_spec()(
            cidr in string(),
            dns_nameservers in strings(),
            allocation_pools in vec(
                (string(), string()).prop_map(|(start, end)| AllocationPool { start, end }),
                0..2,
            ),
        ) -> SubnetSpec {
            SubnetSpec { cidr, dns_nameservers, allocation_pools }
        }
    }

    prop_compose! {
        fn api_server_load_balancer()(
            enabled in of(any::<bool>()),
            additional_ports in vec(small_i32(), 0..2),
            allowed_cidrs in strings(),
            provider in of(string()),
        ) -> APIServerLoadBalancer {
            APIServerLoadBalancer { enabled, additional_ports, allowed_cidrs, provider }
        }
    }

    prop_compose! {
        fn security_group_rule()(
            (name, description, direction) in (string(), of(string()), string()),
            (ether_type, port_range_min, port_range_max) in (of(string()), of(small_i32()), of(small_i32())),
            (protocol, remote_group_id, remote_ip_prefix) in (of(string()), of(string()), of(string())),
            remote_managed_groups in strings(),
        ) -> SecurityGroupRuleSpec {
            SecurityGroupRuleSpec {
                name,
                description,
                direction,
                ether_type,
                port_range_min,
                port_range_max,
                protocol,
                remote_group_id,
                remote_ip_prefix,
                remote_managed_groups,
            }
        }
    }

    prop_compose! {
        fn bastion()(
            enabled in of(any::<bool>()),
            spec in of(machine_spec()),
            availability_zone in of(string()),
            floating_ip in of(string()),
        ) -> Bastion {
            Bastion { enabled, spec, availability_zone, floating_ip }
        }
    }

    prop_compose! {
        fn cluster_spec()(
            (managed_subnets, router, network, subnets) in (
                vec(subnet_spec(), 0..3),
                of(router_param()),
                of(network_param()),
                vec(subnet_param(), 0..2),
            ),
            (network_mtu, external_router_ips, external_network, disable_external_network) in (
                of(small_i32()),
                vec(
                    (string(), subnet_param())
                        .prop_map(|(fixed_ip, subnet)| ExternalRouterIPParam { fixed_ip, subnet }),
                    0..2,
                ),
                of(network_param()),
                of(any::<bool>()),
            ),
            (api_server_load_balancer, disable_api_server_floating_ip, api_server_floating_ip) in (
                of(api_server_load_balancer()),
                of(any::<bool>()),
                of(string()),
            ),
            (api_server_fixed_ip, api_server_port) in (of(string()), of(small_i32())),
            managed_security_groups in of(
                (vec(security_group_rule(), 0..2), any::<bool>()).prop_map(
                    |(all_nodes_security_group_rules, allow_all_in_cluster_traffic)| {
                        ManagedSecurityGroups {
                            all_nodes_security_group_rules,
                            allow_all_in_cluster_traffic,
                        }
                    },
                ),
            ),
            (disable_port_security, tags, control_plane_endpoint) in (
                of(any::<bool>()),
                strings(),
                of(api_endpoint()),
            ),
            (control_plane_availability_zones, control_plane_omit_availability_zone) in (
                strings(),
                of(any::<bool>()),
            ),
            bastion in of(bastion()),
            identity_ref in identity_ref(),
        ) -> OpenStackClusterSpec {
            OpenStackClusterSpec {
                managed_subnets,
                router,
                network,
                subnets,
                network_mtu,
                external_router_ips,
                external_network,
                disable_external_network,
                api_server_load_balancer,
                disable_api_server_floating_ip,
                api_server_floating_ip,
                api_server_fixed_ip,
                api_server_port,
                managed_security_groups,
                disable_port_security,
                tags,
                control_plane_endpoint,
                control_plane_availability_zones,
                control_plane_omit_availability_zone,
                bastion,
                identity_ref,
            }
        }
    }

    fn security_group_status() -> BoxedStrategy<SecurityGroupStatus> {
        (string(), string())
            .prop_map(|(name, id)| SecurityGroupStatus { name, id })
            .boxed()
    }

    prop_compose! {
        fn bastion_status()(
            (id, name, ssh_key_name) in (string(), string(), string()),
            (state, ip, floating_ip) in (string(), string(), string()),
            resolved in of(resolved_machine_spec()),
            resources in of(machine_resources()),
        ) -> BastionStatus {
            BastionStatus { id, name, ssh_key_name, state, ip, floating_ip, resolved, resources }
        }
    }

    prop_compose! {
        fn cluster_status()(
            (ready, network, external_network, router) in (
                any::<bool>(),
                of(network_status_with_subnets()),
                of(network_status()),
                of(router()),
            ),
            (api_server_load_balancer, failure_domains) in (
                of(load_balancer()),
                btree_map(string(), failure_domain(), 0..2),
            ),
            (control_plane_security_group, worker_security_group, bastion_security_group) in (
                of(security_group_status()),
                of(security_group_status()),
                of(security_group_status()),
            ),
            bastion in of(bastion_status()),
            (failure_reason, failure_message) in (of(string()), of(string())),
        ) -> OpenStackClusterStatus {
            OpenStackClusterStatus {
                ready,
                network,
                external_network,
                router,
                api_server_load_balancer,
                failure_domains,
                control_plane_security_group,
                worker_security_group,
                bastion_security_group,
                bastion,
                failure_reason,
                failure_message,
            }
        }
    }

    prop_compose! {
        pub(super) fn cluster()(
            metadata in object_meta(),
            spec in cluster_spec(),
            status in of(cluster_status()),
        ) -> OpenStackCluster {
            OpenStackCluster { metadata, spec, status }
        }
    }

    prop_compose! {
        pub(super) fn cluster_template()(
            metadata in object_meta(),
            spec in cluster_spec(),
        ) -> OpenStackClusterTemplate {
            OpenStackClusterTemplate {
                metadata,
                spec: OpenStackClusterTemplateSpec {
                    template: OpenStackClusterTemplateResource { spec },
                },
            }
        }
    }
}

/*
 * ============================================================================
 * v1alpha7
 * ============================================================================
 */
mod spoke {
    use super::{
        api_endpoint, block_device_type, condition, failure_domain, load_balancer,
        network_status, network_status_with_subnets, node_address, object_meta, router,
        small_i32, string, string_map, strings, value_spec,
    };

    use proptest::{
        collection::{btree_map, vec},
        option::of,
        prelude::*,
    };

    use crate::api::v1alpha7::{
        APIServerLoadBalancer, AdditionalBlockDevice, AddressPair, Bastion, BastionStatus,
        BlockDeviceStorage, BlockDeviceVolume, ExternalRouterIPParam, FilterByNeutronTags,
        FixedIP, NetworkFilter, OpenStackCluster, OpenStackClusterSpec, OpenStackClusterStatus,
        OpenStackClusterTemplate, OpenStackClusterTemplateResource, OpenStackClusterTemplateSpec,
        OpenStackIdentityReference, OpenStackMachine, OpenStackMachineSpec,
        OpenStackMachineStatus, OpenStackMachineTemplate, OpenStackMachineTemplateResource,
        OpenStackMachineTemplateSpec, PortOpts, RootVolume, RouterFilter, SecurityGroupFilter,
        SecurityGroupRuleStatus, SecurityGroupStatus, SubnetFilter,
    };

    prop_compose! {
        fn neutron_tags()(
            tags in string(),
            tags_any in string(),
            not_tags in string(),
            not_tags_any in string(),
        ) -> FilterByNeutronTags {
            FilterByNeutronTags { tags, tags_any, not_tags, not_tags_any }
        }
    }

    prop_compose! {
        fn network_filter()(
            name in string(),
            description in string(),
            project_id in string(),
            id in string(),
            neutron_tags in neutron_tags(),
        ) -> NetworkFilter {
            NetworkFilter { name, description, project_id, id, neutron_tags }
        }
    }

    prop_compose! {
        fn subnet_filter()(
            (name, description, project_id) in (string(), string(), string()),
            ip_version in small_i32(),
            gateway_ip in string(),
            cidr in string(),
            (ipv6_address_mode, ipv6_ra_mode) in (string(), string()),
            id in string(),
            neutron_tags in neutron_tags(),
        ) -> SubnetFilter {
            SubnetFilter {
                name,
                description,
                project_id,
                ip_version,
                gateway_ip,
                cidr,
                ipv6_address_mode,
                ipv6_ra_mode,
                id,
                neutron_tags,
            }
        }
    }

    prop_compose! {
        fn router_filter()(
            id in string(),
            name in string(),
            description in string(),
            project_id in string(),
            neutron_tags in neutron_tags(),
        ) -> RouterFilter {
            RouterFilter { id, name, description, project_id, neutron_tags }
        }
    }

    prop_compose! {
        fn security_group_filter()(
            id in string(),
            name in string(),
            description in string(),
            project_id in string(),
            neutron_tags in neutron_tags(),
        ) -> SecurityGroupFilter {
            SecurityGroupFilter { id, name, description, project_id, neutron_tags }
        }
    }

    prop_compose! {
        fn fixed_ip()(subnet in of(subnet_filter()), ip_address in string()) -> FixedIP {
            FixedIP { subnet, ip_address }
        }
    }

    prop_compose! {
        fn address_pair()(ip_address in string(), mac_address in string()) -> AddressPair {
            AddressPair { ip_address, mac_address }
        }
    }

    /// Binding profiles mix the keys with a typed counterpart and arbitrary
    /// ones.
    fn profile() -> BoxedStrategy<std::collections::BTreeMap<String, String>> {
        btree_map(
            "(capabilities|trusted|[ab]{1,2})",
            prop_oneof![
                Just(r#"["switchdev"]"#.to_string()),
                Just("true".to_string()),
                string(),
            ],
            0..3,
        )
        .boxed()
    }

    prop_compose! {
        fn port_opts()(
            (network, name_suffix, description) in (of(network_filter()), string(), string()),
            (admin_state_up, mac_address) in (of(any::<bool>()), string()),
            (fixed_ips, security_groups, allowed_address_pairs) in (
                vec(fixed_ip(), 0..2),
                vec(security_group_filter(), 0..2),
                vec(address_pair(), 0..2),
            ),
            (trunk, host_id, vnic_type) in (of(any::<bool>()), string(), string()),
            profile in profile(),
            (disable_port_security, propagate_uplink_status) in (of(any::<bool>()), of(any::<bool>())),
            (tags, value_specs) in (strings(), vec(value_spec(), 0..2)),
        ) -> PortOpts {
            PortOpts {
                network,
                name_suffix,
                description,
                admin_state_up,
                mac_address,
                fixed_ips,
                security_groups,
                allowed_address_pairs,
                trunk,
                host_id,
                vnic_type,
                profile,
                disable_port_security,
                propagate_uplink_status,
                tags,
                value_specs,
            }
        }
    }

    prop_compose! {
        fn root_volume()(
            disk_size in small_i32(),
            volume_type in string(),
            availability_zone in string(),
        ) -> RootVolume {
            RootVolume { disk_size, volume_type, availability_zone }
        }
    }

    prop_compose! {
        fn additional_block_device()(
            name in string(),
            size_gib in small_i32(),
            type_ in block_device_type(),
            volume in of(
                (string(), string()).prop_map(|(type_, availability_zone)| BlockDeviceVolume {
                    type_,
                    availability_zone,
                }),
            ),
        ) -> AdditionalBlockDevice {
            AdditionalBlockDevice { name, size_gib, storage: BlockDeviceStorage { type_, volume } }
        }
    }

    prop_compose! {
        fn identity_ref()(kind in "(Secret|)", name in string()) -> OpenStackIdentityReference {
            OpenStackIdentityReference { kind, name }
        }
    }

    prop_compose! {
        pub(super) fn machine_spec()(
            (provider_id, instance_id, cloud_name) in (of(string()), of(string()), string()),
            (flavor, image, image_uuid) in (string(), string(), string()),
            (ssh_key_name, ports, security_groups) in (
                string(),
                vec(port_opts(), 0..2),
                vec(security_group_filter(), 0..2),
            ),
            (trunk, tags, server_metadata) in (any::<bool>(), strings(), string_map()),
            config_drive in of(any::<bool>()),
            root_volume in of(root_volume()),
            additional_block_devices in vec(additional_block_device(), 0..2),
            server_group_id in string(),
            identity_ref in of(identity_ref()),
        ) -> OpenStackMachineSpec {
            OpenStackMachineSpec {
                provider_id,
                instance_id,
                cloud_name,
                flavor,
                image,
                image_uuid,
                ssh_key_name,
                ports,
                security_groups,
                trunk,
                tags,
                server_metadata,
                config_drive,
                root_volume,
                additional_block_devices,
                server_group_id,
                identity_ref,
            }
        }
    }

    prop_compose! {
        fn machine_status()(
            ready in any::<bool>(),
            addresses in vec(node_address(), 0..2),
            instance_state in of(string()),
            failure_reason in of(string()),
            failure_message in of(string()),
            conditions in vec(condition(), 0..2),
        ) -> OpenStackMachineStatus {
            OpenStackMachineStatus {
                ready,
                addresses,
                instance_state,
                failure_reason,
                failure_message,
                conditions,
            }
        }
    }

    prop_compose! {
        pub(super) fn machine()(
            metadata in object_meta(),
            spec in machine_spec(),
            status in of(machine_status()),
        ) -> OpenStackMachine {
            OpenStackMachine { metadata, spec, status }
        }
    }

    prop_compose! {
        pub(super) fn machine_template()(
            metadata in object_meta(),
            spec in machine_spec(),
        ) -> OpenStackMachineTemplate {
            OpenStackMachineTemplate {
                metadata,
                spec: OpenStackMachineTemplateSpec {
                    template: OpenStackMachineTemplateResource { spec },
                },
            }
        }
    }

    prop_compose! {
        fn api_server_load_balancer()(
            enabled in any::<bool>(),
            additional_ports in vec(small_i32(), 0..2),
            allowed_cidrs in strings(),
            provider in string(),
        ) -> APIServerLoadBalancer {
            APIServerLoadBalancer { enabled, additional_ports, allowed_cidrs, provider }
        }
    }

    prop_compose! {
        fn bastion()(
            enabled in any::<bool>(),
            instance in machine_spec(),
            availability_zone in string(),
        ) -> Bastion {
            Bastion { enabled, instance, availability_zone }
        }
    }

    prop_compose! {
        fn cluster_spec()(
            (cloud_name, node_cidr, router, network) in (
                string(),
                string(),
                of(router_filter()),
                network_filter(),
            ),
            (subnets, network_mtu, dns_nameservers) in (
                vec(subnet_filter(), 0..2),
                small_i32(),
                strings(),
            ),
            (external_router_ips, external_network_id) in (
                vec(
                    (string(), subnet_filter())
                        .prop_map(|(fixed_ip, subnet)| ExternalRouterIPParam { fixed_ip, subnet }),
                    0..2,
                ),
                string(),
            ),
            (api_server_load_balancer, disable_api_server_floating_ip) in (
                api_server_load_balancer(),
                any::<bool>(),
            ),
            (api_server_floating_ip, api_server_fixed_ip, api_server_port) in (
                string(),
                string(),
                small_i32(),
            ),
            (managed_security_groups, allow_all_in_cluster_traffic, disable_port_security) in (
                any::<bool>(),
                any::<bool>(),
                any::<bool>(),
            ),
            (tags, control_plane_endpoint, control_plane_availability_zones) in (
                strings(),
                api_endpoint(),
                strings(),
            ),
            control_plane_omit_availability_zone in any::<bool>(),
            (bastion, identity_ref) in (of(bastion()), of(identity_ref())),
        ) -> OpenStackClusterSpec {
            OpenStackClusterSpec {
                cloud_name,
                node_cidr,
                router,
                network,
                subnets,
                network_mtu,
                dns_nameservers,
                external_router_ips,
                external_network_id,
                api_server_load_balancer,
                disable_api_server_floating_ip,
                api_server_floating_ip,
                api_server_fixed_ip,
                api_server_port,
                managed_security_groups,
                allow_all_in_cluster_traffic,
                disable_port_security,
                tags,
                control_plane_endpoint,
                control_plane_availability_zones,
                control_plane_omit_availability_zone,
                bastion,
                identity_ref,
            }
        }
    }

    prop_compose! {
        fn security_group_rule()(
            (id, name, description) in (string(), string(), string()),
            (direction, ether_type, security_group_id) in (string(), string(), string()),
            (port_range_min, port_range_max, protocol) in (small_i32(), small_i32(), string()),
            (remote_group_id, remote_ip_prefix) in (string(), string()),
        ) -> SecurityGroupRuleStatus {
            SecurityGroupRuleStatus {
                id,
                name,
                description,
                direction,
                ether_type,
                security_group_id,
                port_range_min,
                port_range_max,
                protocol,
                remote_group_id,
                remote_ip_prefix,
            }
        }
    }

    prop_compose! {
        fn security_group_status()(
            name in string(),
            id in string(),
            rules in vec(security_group_rule(), 0..2),
        ) -> SecurityGroupStatus {
            SecurityGroupStatus { name, id, rules }
        }
    }

    prop_compose! {
        fn bastion_status()(
            (id, name, ssh_key_name) in (string(), string(), string()),
            (state, ip, floating_ip) in (string(), string(), string()),
        ) -> BastionStatus {
            BastionStatus { id, name, ssh_key_name, state, ip, floating_ip }
        }
    }

    prop_compose! {
        fn cluster_status()(
            (ready, network, external_network, router) in (
                any::<bool>(),
                of(network_status_with_subnets()),
                of(network_status()),
                of(router()),
            ),
            (api_server_load_balancer, failure_domains) in (
                of(load_balancer()),
                btree_map(string(), failure_domain(), 0..2),
            ),
            (control_plane_security_group, worker_security_group, bastion_security_group) in (
                of(security_group_status()),
                of(security_group_status()),
                of(security_group_status()),
            ),
            bastion in of(bastion_status()),
            (failure_reason, failure_message) in (of(string()), of(string())),
        ) -> OpenStackClusterStatus {
            OpenStackClusterStatus {
                ready,
                network,
                external_network,
                router,
                api_server_load_balancer,
                failure_domains,
                control_plane_security_group,
                worker_security_group,
                bastion_security_group,
                bastion,
                failure_reason,
                failure_message,
            }
        }
    }

    prop_compose! {
        pub(super) fn cluster()(
            metadata in object_meta(),
            spec in cluster_spec(),
            status in of(cluster_status()),
        ) -> OpenStackCluster {
            OpenStackCluster { metadata, spec, status }
        }
    }

    prop_compose! {
        pub(super) fn cluster_template()(
            metadata in object_meta(),
            spec in cluster_spec(),
        ) -> OpenStackClusterTemplate {
            OpenStackClusterTemplate {
                metadata,
                spec: OpenStackClusterTemplateSpec {
                    template: OpenStackClusterTemplateResource { spec },
                },
            }
        }
    }
}

/*
 * ============================================================================
 * Round trips
 * ============================================================================
 */
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn openstack_machine_hub_spoke_hub(hub in hub::machine()) {
        // act
        let spoke = v1alpha7::OpenStackMachine::convert_from(&hub).unwrap();
        let round_trip = spoke.convert_to().unwrap();

        // assert
        prop_assert_eq!(hub, round_trip);
    }

    #[test]
    fn openstack_machine_spoke_hub_spoke(spoke in spoke::machine()) {
        // act
        let hub: v1beta1::OpenStackMachine = spoke.convert_to().unwrap();
        let round_trip = v1alpha7::OpenStackMachine::convert_from(&hub).unwrap();

        // assert
        prop_assert_eq!(spoke, round_trip);
    }

    #[test]
    fn openstack_machine_template_hub_spoke_hub(hub in hub::machine_template()) {
        // act
        let spoke = v1alpha7::OpenStackMachineTemplate::convert_from(&hub).unwrap();
        let round_trip = spoke.convert_to().unwrap();

        // assert
        prop_assert_eq!(hub, round_trip);
    }

    #[test]
    fn openstack_machine_template_spoke_hub_spoke(spoke in spoke::machine_template()) {
        // act
        let hub: v1beta1::OpenStackMachineTemplate = spoke.convert_to().unwrap();
        let round_trip = v1alpha7::OpenStackMachineTemplate::convert_from(&hub).unwrap();

        // assert
        prop_assert_eq!(spoke, round_trip);
    }

    #[test]
    fn openstack_cluster_hub_spoke_hub(hub in hub::cluster()) {
        // act
        let spoke = v1alpha7::OpenStackCluster::convert_from(&hub).unwrap();
        let round_trip = spoke.convert_to().unwrap();

        // assert
        prop_assert_eq!(hub, round_trip);
    }

    #[test]
    fn openstack_cluster_spoke_hub_spoke(spoke in spoke::cluster()) {
        // act
        let hub: v1beta1::OpenStackCluster = spoke.convert_to().unwrap();
        let round_trip = v1alpha7::OpenStackCluster::convert_from(&hub).unwrap();

        // assert
        prop_assert_eq!(spoke, round_trip);
    }

    #[test]
    fn openstack_cluster_template_hub_spoke_hub(hub in hub::cluster_template()) {
        // act
        let spoke = v1alpha7::OpenStackClusterTemplate::convert_from(&hub).unwrap();
        let round_trip = spoke.convert_to().unwrap();

        // assert
        prop_assert_eq!(hub, round_trip);
    }

    #[test]
    fn openstack_cluster_template_spoke_hub_spoke(spoke in spoke::cluster_template()) {
        // act
        let hub: v1beta1::OpenStackClusterTemplate = spoke.convert_to().unwrap();
        let round_trip = v1alpha7::OpenStackClusterTemplate::convert_from(&hub).unwrap();

        // assert
        prop_assert_eq!(spoke, round_trip);
    }
}
