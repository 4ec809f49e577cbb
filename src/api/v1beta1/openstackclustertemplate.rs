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
/// The template of an OpenStack Cluster for clusters created from a
/// Cluster API cluster class.
#[allow(clippy::module_name_repetitions)]
#[derive(CustomResource, JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[kube(
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1beta1",
    kind = "OpenStackClusterTemplate",
    namespaced,
    derive = "PartialEq"
)]
pub struct OpenStackClusterTemplateSpec {
    pub template: OpenStackClusterTemplateResource,
}

#[allow(clippy::module_name_repetitions)]
#[derive(JsonSchema, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct OpenStackClusterTemplateResource {
    /// The spec of every cluster created from the template.
    pub spec: OpenStackClusterSpec,
}
