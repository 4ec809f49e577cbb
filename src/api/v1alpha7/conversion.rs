use std::sync::LazyLock;

use crate::{
    Result,
    api::v1beta1,
    conversion::{
        Convertible, HashedFieldRestorer, Restorers, UnconditionalFieldRestorer,
        convert_and_restore, hashed_field, lift,
    },
};

use super::{
    OpenStackCluster, OpenStackClusterSpec, OpenStackClusterTemplate,
    OpenStackClusterTemplateResource, OpenStackClusterTemplateSpec, OpenStackMachine,
    OpenStackMachineSpec, OpenStackMachineTemplate, OpenStackMachineTemplateResource,
    OpenStackMachineTemplateSpec,
};

/*
 * ============================================================================
 * Machine Spec
 * ============================================================================
 */
fn machine_spec_restorers() -> Restorers<OpenStackMachineSpec> {
    vec![
        hashed_field!("identityRef", OpenStackMachineSpec, identity_ref),
        HashedFieldRestorer::new(
            "image",
            |spec: &OpenStackMachineSpec| (spec.image.clone(), spec.image_uuid.clone()),
            |spec: &mut OpenStackMachineSpec, (image, image_uuid): (String, String)| {
                spec.image = image;
                spec.image_uuid = image_uuid;
            },
        )
        .boxed(),
        hashed_field!("ports", OpenStackMachineSpec, ports),
        hashed_field!("securityGroups", OpenStackMachineSpec, security_groups),
        hashed_field!("instanceID", OpenStackMachineSpec, instance_id),
    ]
}

fn hub_machine_spec_restorers() -> Restorers<v1beta1::OpenStackMachineSpec> {
    vec![
        hashed_field!("identityRef", v1beta1::OpenStackMachineSpec, identity_ref),
        hashed_field!("image", v1beta1::OpenStackMachineSpec, image),
        hashed_field!("ports", v1beta1::OpenStackMachineSpec, ports),
        hashed_field!("securityGroups", v1beta1::OpenStackMachineSpec, security_groups),
        hashed_field!("serverMetadata", v1beta1::OpenStackMachineSpec, server_metadata),
        hashed_field!("rootVolume", v1beta1::OpenStackMachineSpec, root_volume),
        hashed_field!(
            "additionalBlockDevices",
            v1beta1::OpenStackMachineSpec,
            additional_block_devices
        ),
        hashed_field!("serverGroup", v1beta1::OpenStackMachineSpec, server_group),
        hashed_field!(
            "floatingIPPoolRef",
            v1beta1::OpenStackMachineSpec,
            floating_ip_pool_ref
        ),
        hashed_field!(
            "schedulerHintAdditionalProperties",
            v1beta1::OpenStackMachineSpec,
            scheduler_hint_additional_properties
        ),
    ]
}

/*
 * ============================================================================
 * Machine
 * ============================================================================
 */
static MACHINE_RESTORERS: LazyLock<Restorers<OpenStackMachine>> = LazyLock::new(|| {
    let mut restorers = lift(
        machine_spec_restorers(),
        |machine: &OpenStackMachine| &machine.spec,
        |machine: &mut OpenStackMachine| &mut machine.spec,
    );
    restorers.push(hashed_field!("status", OpenStackMachine, status));
    restorers
});

static HUB_MACHINE_RESTORERS: LazyLock<Restorers<v1beta1::OpenStackMachine>> =
    LazyLock::new(|| {
        let mut restorers = lift(
            hub_machine_spec_restorers(),
            |machine: &v1beta1::OpenStackMachine| &machine.spec,
            |machine: &mut v1beta1::OpenStackMachine| &mut machine.spec,
        );
        restorers.push(
            UnconditionalFieldRestorer::new(
                "status.resolved",
                |machine: &v1beta1::OpenStackMachine| {
                    machine
                        .status
                        .as_ref()
                        .and_then(|status| status.resolved.clone())
                },
                |machine: &mut v1beta1::OpenStackMachine, resolved| {
                    if let Some(status) = machine.status.as_mut() {
                        status.resolved = resolved;
                    }
                },
            )
            .boxed(),
        );
        restorers.push(
            UnconditionalFieldRestorer::new(
                "status.resources",
                |machine: &v1beta1::OpenStackMachine| {
                    machine
                        .status
                        .as_ref()
                        .and_then(|status| status.resources.clone())
                },
                |machine: &mut v1beta1::OpenStackMachine, resources| {
                    if let Some(status) = machine.status.as_mut() {
                        status.resources = resources;
                    }
                },
            )
            .boxed(),
        );
        restorers
    });

/// The instance id moves from the spec to the status.
fn machine_to_hub(machine: &OpenStackMachine) -> v1beta1::OpenStackMachine {
    let instance_id = machine.spec.instance_id.clone();
    let status = match &machine.status {
        Some(status) => Some(v1beta1::OpenStackMachineStatus {
            instance_id,
            ..v1beta1::OpenStackMachineStatus::from(status)
        }),
        None => instance_id.map(|instance_id| v1beta1::OpenStackMachineStatus {
            instance_id: Some(instance_id),
            ..Default::default()
        }),
    };

    v1beta1::OpenStackMachine {
        metadata: machine.metadata.clone(),
        spec: (&machine.spec).into(),
        status,
    }
}

fn machine_from_hub(machine: &v1beta1::OpenStackMachine) -> OpenStackMachine {
    let mut spec = OpenStackMachineSpec::from(&machine.spec);
    spec.instance_id = machine
        .status
        .as_ref()
        .and_then(|status| status.instance_id.clone());

    OpenStackMachine {
        metadata: machine.metadata.clone(),
        spec,
        status: machine.status.as_ref().map(Into::into),
    }
}

impl Convertible<v1beta1::OpenStackMachine> for OpenStackMachine {
    fn convert_to(&self) -> Result<v1beta1::OpenStackMachine> {
        convert_and_restore(
            self,
            machine_to_hub,
            machine_from_hub,
            &MACHINE_RESTORERS,
            &HUB_MACHINE_RESTORERS,
        )
    }

    fn convert_from(hub: &v1beta1::OpenStackMachine) -> Result<Self> {
        convert_and_restore(
            hub,
            machine_from_hub,
            machine_to_hub,
            &HUB_MACHINE_RESTORERS,
            &MACHINE_RESTORERS,
        )
    }
}

/*
 * ============================================================================
 * Machine Template
 * ============================================================================
 */
static MACHINE_TEMPLATE_RESTORERS: LazyLock<Restorers<OpenStackMachineTemplate>> =
    LazyLock::new(|| {
        lift(
            machine_spec_restorers(),
            |template: &OpenStackMachineTemplate| &template.spec.template.spec,
            |template: &mut OpenStackMachineTemplate| &mut template.spec.template.spec,
        )
    });

static HUB_MACHINE_TEMPLATE_RESTORERS: LazyLock<Restorers<v1beta1::OpenStackMachineTemplate>> =
    LazyLock::new(|| {
        lift(
            hub_machine_spec_restorers(),
            |template: &v1beta1::OpenStackMachineTemplate| &template.spec.template.spec,
            |template: &mut v1beta1::OpenStackMachineTemplate| &mut template.spec.template.spec,
        )
    });

fn machine_template_to_hub(template: &OpenStackMachineTemplate) -> v1beta1::OpenStackMachineTemplate {
    v1beta1::OpenStackMachineTemplate {
        metadata: template.metadata.clone(),
        spec: v1beta1::OpenStackMachineTemplateSpec {
            template: v1beta1::OpenStackMachineTemplateResource {
                spec: (&template.spec.template.spec).into(),
            },
        },
    }
}

fn machine_template_from_hub(
    template: &v1beta1::OpenStackMachineTemplate,
) -> OpenStackMachineTemplate {
    OpenStackMachineTemplate {
        metadata: template.metadata.clone(),
        spec: OpenStackMachineTemplateSpec {
            template: OpenStackMachineTemplateResource {
                spec: (&template.spec.template.spec).into(),
            },
        },
    }
}

impl Convertible<v1beta1::OpenStackMachineTemplate> for OpenStackMachineTemplate {
    fn convert_to(&self) -> Result<v1beta1::OpenStackMachineTemplate> {
        convert_and_restore(
            self,
            machine_template_to_hub,
            machine_template_from_hub,
            &MACHINE_TEMPLATE_RESTORERS,
            &HUB_MACHINE_TEMPLATE_RESTORERS,
        )
    }

    fn convert_from(hub: &v1beta1::OpenStackMachineTemplate) -> Result<Self> {
        convert_and_restore(
            hub,
            machine_template_from_hub,
            machine_template_to_hub,
            &HUB_MACHINE_TEMPLATE_RESTORERS,
            &MACHINE_TEMPLATE_RESTORERS,
        )
    }
}

/*
 * ============================================================================
 * Cluster
 * ============================================================================
 */
/// Restores the rules of a security group in the status. `v1beta1` does not
/// report rules, so they can never be edited there.
macro_rules! security_group_rules {
    ($name:literal, $group:ident) => {
        UnconditionalFieldRestorer::new(
            $name,
            |cluster: &OpenStackCluster| {
                cluster
                    .status
                    .as_ref()
                    .and_then(|status| status.$group.as_ref())
                    .map(|group| group.rules.clone())
            },
            |cluster: &mut OpenStackCluster, rules| {
                let group = cluster
                    .status
                    .as_mut()
                    .and_then(|status| status.$group.as_mut());
                if let (Some(group), Some(rules)) = (group, rules) {
                    group.rules = rules;
                }
            },
        )
        .boxed()
    };
}

fn cluster_spec_restorers() -> Restorers<OpenStackClusterSpec> {
    vec![
        hashed_field!("identityRef", OpenStackClusterSpec, identity_ref),
        hashed_field!("dnsNameservers", OpenStackClusterSpec, dns_nameservers),
        hashed_field!("router", OpenStackClusterSpec, router),
        hashed_field!("network", OpenStackClusterSpec, network),
        hashed_field!("subnets", OpenStackClusterSpec, subnets),
        hashed_field!("externalRouterIPs", OpenStackClusterSpec, external_router_ips),
        hashed_field!(
            "allowAllInClusterTraffic",
            OpenStackClusterSpec,
            allow_all_in_cluster_traffic
        ),
        hashed_field!("bastion", OpenStackClusterSpec, bastion),
    ]
}

static CLUSTER_RESTORERS: LazyLock<Restorers<OpenStackCluster>> = LazyLock::new(|| {
    let mut restorers = lift(
        cluster_spec_restorers(),
        |cluster: &OpenStackCluster| &cluster.spec,
        |cluster: &mut OpenStackCluster| &mut cluster.spec,
    );
    restorers.extend([
        security_group_rules!(
            "status.controlPlaneSecurityGroup.rules",
            control_plane_security_group
        ),
        security_group_rules!("status.workerSecurityGroup.rules", worker_security_group),
        security_group_rules!("status.bastionSecurityGroup.rules", bastion_security_group),
    ]);
    restorers
});

/// Restores the bastion but keeps an effective change of `enabled`, which
/// `v1alpha7` can express.
fn restore_bastion(
    previous: Option<v1beta1::Bastion>,
    current: Option<v1beta1::Bastion>,
) -> Option<v1beta1::Bastion> {
    match (previous, current) {
        (Some(previous), Some(current)) if previous.is_enabled() != current.is_enabled() => {
            Some(v1beta1::Bastion {
                enabled: current.enabled,
                ..previous
            })
        }
        (previous, _) => previous,
    }
}

fn hub_cluster_spec_restorers() -> Restorers<v1beta1::OpenStackClusterSpec> {
    vec![
        hashed_field!("managedSubnets", v1beta1::OpenStackClusterSpec, managed_subnets),
        hashed_field!("router", v1beta1::OpenStackClusterSpec, router),
        hashed_field!("network", v1beta1::OpenStackClusterSpec, network),
        hashed_field!("subnets", v1beta1::OpenStackClusterSpec, subnets),
        hashed_field!("networkMTU", v1beta1::OpenStackClusterSpec, network_mtu),
        hashed_field!(
            "externalRouterIPs",
            v1beta1::OpenStackClusterSpec,
            external_router_ips
        ),
        hashed_field!(
            "externalNetwork",
            v1beta1::OpenStackClusterSpec,
            external_network
        ),
        hashed_field!(
            "disableExternalNetwork",
            v1beta1::OpenStackClusterSpec,
            disable_external_network
        ),
        hashed_field!(
            "apiServerLoadBalancer",
            v1beta1::OpenStackClusterSpec,
            api_server_load_balancer
        ),
        hashed_field!(
            "disableAPIServerFloatingIP",
            v1beta1::OpenStackClusterSpec,
            disable_api_server_floating_ip
        ),
        hashed_field!(
            "apiServerFloatingIP",
            v1beta1::OpenStackClusterSpec,
            api_server_floating_ip
        ),
        hashed_field!(
            "apiServerFixedIP",
            v1beta1::OpenStackClusterSpec,
            api_server_fixed_ip
        ),
        hashed_field!("apiServerPort", v1beta1::OpenStackClusterSpec, api_server_port),
        hashed_field!(
            "managedSecurityGroups",
            v1beta1::OpenStackClusterSpec,
            managed_security_groups
        ),
        hashed_field!(
            "disablePortSecurity",
            v1beta1::OpenStackClusterSpec,
            disable_port_security
        ),
        hashed_field!(
            "controlPlaneEndpoint",
            v1beta1::OpenStackClusterSpec,
            control_plane_endpoint
        ),
        hashed_field!(
            "controlPlaneOmitAvailabilityZone",
            v1beta1::OpenStackClusterSpec,
            control_plane_omit_availability_zone
        ),
        HashedFieldRestorer::new(
            "bastion",
            |spec: &v1beta1::OpenStackClusterSpec| spec.bastion.clone(),
            |spec: &mut v1beta1::OpenStackClusterSpec, bastion| spec.bastion = bastion,
        )
        .with_hash_filter(|bastion| {
            bastion.as_ref().map(|bastion| v1beta1::Bastion {
                enabled: None,
                ..bastion.clone()
            })
        })
        .with_restore(restore_bastion)
        .boxed(),
    ]
}

static HUB_CLUSTER_RESTORERS: LazyLock<Restorers<v1beta1::OpenStackCluster>> =
    LazyLock::new(|| {
        let mut restorers = lift(
            hub_cluster_spec_restorers(),
            |cluster: &v1beta1::OpenStackCluster| &cluster.spec,
            |cluster: &mut v1beta1::OpenStackCluster| &mut cluster.spec,
        );
        restorers.extend([
            UnconditionalFieldRestorer::new(
                "status.bastion.resolved",
                |cluster: &v1beta1::OpenStackCluster| {
                    cluster
                        .status
                        .as_ref()
                        .and_then(|status| status.bastion.as_ref())
                        .and_then(|bastion| bastion.resolved.clone())
                },
                |cluster: &mut v1beta1::OpenStackCluster, resolved| {
                    if let Some(bastion) = cluster
                        .status
                        .as_mut()
                        .and_then(|status| status.bastion.as_mut())
                    {
                        bastion.resolved = resolved;
                    }
                },
            )
            .boxed(),
            UnconditionalFieldRestorer::new(
                "status.bastion.resources",
                |cluster: &v1beta1::OpenStackCluster| {
                    cluster
                        .status
                        .as_ref()
                        .and_then(|status| status.bastion.as_ref())
                        .and_then(|bastion| bastion.resources.clone())
                },
                |cluster: &mut v1beta1::OpenStackCluster, resources| {
                    if let Some(bastion) = cluster
                        .status
                        .as_mut()
                        .and_then(|status| status.bastion.as_mut())
                    {
                        bastion.resources = resources;
                    }
                },
            )
            .boxed(),
        ]);
        restorers
    });

fn cluster_to_hub(cluster: &OpenStackCluster) -> v1beta1::OpenStackCluster {
    v1beta1::OpenStackCluster {
        metadata: cluster.metadata.clone(),
        spec: (&cluster.spec).into(),
        status: cluster.status.as_ref().map(Into::into),
    }
}

fn cluster_from_hub(cluster: &v1beta1::OpenStackCluster) -> OpenStackCluster {
    OpenStackCluster {
        metadata: cluster.metadata.clone(),
        spec: (&cluster.spec).into(),
        status: cluster.status.as_ref().map(Into::into),
    }
}

impl Convertible<v1beta1::OpenStackCluster> for OpenStackCluster {
    fn convert_to(&self) -> Result<v1beta1::OpenStackCluster> {
        convert_and_restore(
            self,
            cluster_to_hub,
            cluster_from_hub,
            &CLUSTER_RESTORERS,
            &HUB_CLUSTER_RESTORERS,
        )
    }

    fn convert_from(hub: &v1beta1::OpenStackCluster) -> Result<Self> {
        convert_and_restore(
            hub,
            cluster_from_hub,
            cluster_to_hub,
            &HUB_CLUSTER_RESTORERS,
            &CLUSTER_RESTORERS,
        )
    }
}

/*
 * ============================================================================
 * Cluster Template
 * ============================================================================
 */
static CLUSTER_TEMPLATE_RESTORERS: LazyLock<Restorers<OpenStackClusterTemplate>> =
    LazyLock::new(|| {
        lift(
            cluster_spec_restorers(),
            |template: &OpenStackClusterTemplate| &template.spec.template.spec,
            |template: &mut OpenStackClusterTemplate| &mut template.spec.template.spec,
        )
    });

static HUB_CLUSTER_TEMPLATE_RESTORERS: LazyLock<Restorers<v1beta1::OpenStackClusterTemplate>> =
    LazyLock::new(|| {
        lift(
            hub_cluster_spec_restorers(),
            |template: &v1beta1::OpenStackClusterTemplate| &template.spec.template.spec,
            |template: &mut v1beta1::OpenStackClusterTemplate| &mut template.spec.template.spec,
        )
    });

fn cluster_template_to_hub(template: &OpenStackClusterTemplate) -> v1beta1::OpenStackClusterTemplate {
    v1beta1::OpenStackClusterTemplate {
        metadata: template.metadata.clone(),
        spec: v1beta1::OpenStackClusterTemplateSpec {
            template: v1beta1::OpenStackClusterTemplateResource {
                spec: (&template.spec.template.spec).into(),
            },
        },
    }
}

fn cluster_template_from_hub(
    template: &v1beta1::OpenStackClusterTemplate,
) -> OpenStackClusterTemplate {
    OpenStackClusterTemplate {
        metadata: template.metadata.clone(),
        spec: OpenStackClusterTemplateSpec {
            template: OpenStackClusterTemplateResource {
                spec: (&template.spec.template.spec).into(),
            },
        },
    }
}

impl Convertible<v1beta1::OpenStackClusterTemplate> for OpenStackClusterTemplate {
    fn convert_to(&self) -> Result<v1beta1::OpenStackClusterTemplate> {
        convert_and_restore(
            self,
            cluster_template_to_hub,
            cluster_template_from_hub,
            &CLUSTER_TEMPLATE_RESTORERS,
            &HUB_CLUSTER_TEMPLATE_RESTORERS,
        )
    }

    fn convert_from(hub: &v1beta1::OpenStackClusterTemplate) -> Result<Self> {
        convert_and_restore(
            hub,
            cluster_template_from_hub,
            cluster_template_to_hub,
            &HUB_CLUSTER_TEMPLATE_RESTORERS,
            &CLUSTER_TEMPLATE_RESTORERS,
        )
    }
}
