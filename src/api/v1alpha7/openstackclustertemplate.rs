use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::openstackcluster::OpenStackClusterSpec;

/*
 * ============================================================================
 * Custom Resource Definition
 * ============================================================================
 */
/// # OpenStack Cluster Template
///
/// Deprecated, use `v1beta1`.
#[allow(clippy::module_name_repetitions)]
#[derive(CustomResource, JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[kube(
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1alpha7",
    kind = "OpenStackClusterTemplate",
    namespaced,
    derive = "PartialEq",
    deprecated = "infrastructure.cluster.x-k8s.io/v1alpha7 OpenStackClusterTemplate is deprecated, use v1beta1"
)]
pub struct OpenStackClusterTemplateSpec {
    pub template: OpenStackClusterTemplateResource,
}

#[allow(clippy::module_name_repetitions)]
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct OpenStackClusterTemplateResource {
    pub spec: OpenStackClusterSpec,
}
