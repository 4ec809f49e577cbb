use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::openstackmachine::OpenStackMachineSpec;

/*
 * ============================================================================
 * Custom Resource Definition
 * ============================================================================
 */
/// # OpenStack Machine Template
///
/// Deprecated, use `v1beta1`.
#[allow(clippy::module_name_repetitions)]
#[derive(CustomResource, JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[kube(
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1alpha7",
    kind = "OpenStackMachineTemplate",
    namespaced,
    derive = "PartialEq",
    deprecated = "infrastructure.cluster.x-k8s.io/v1alpha7 OpenStackMachineTemplate is deprecated, use v1beta1"
)]
pub struct OpenStackMachineTemplateSpec {
    pub template: OpenStackMachineTemplateResource,
}

#[allow(clippy::module_name_repetitions)]
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct OpenStackMachineTemplateResource {
    pub spec: OpenStackMachineSpec,
}
