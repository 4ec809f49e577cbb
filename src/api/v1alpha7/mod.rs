//! `infrastructure.cluster.x-k8s.io/v1alpha7`, a deprecated version converted
//! to and from `v1beta1`.

mod conversion;
#[cfg(test)]
mod fuzz;
mod openstackcluster;
mod openstackclustertemplate;
mod openstackmachine;
mod openstackmachinetemplate;
mod types;
mod types_conversion;

pub use openstackcluster::*;
pub use openstackclustertemplate::*;
pub use openstackmachine::*;
pub use openstackmachinetemplate::*;
pub use types::*;

pub const API_VERSION: &str = "infrastructure.cluster.x-k8s.io/v1alpha7";
