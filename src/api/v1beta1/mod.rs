//! `infrastructure.cluster.x-k8s.io/v1beta1`, the storage version.

mod openstackcluster;
mod openstackclustertemplate;
mod openstackmachine;
mod openstackmachinetemplate;
mod types;

pub use openstackcluster::*;
pub use openstackclustertemplate::*;
pub use openstackmachine::*;
pub use openstackmachinetemplate::*;
pub use types::*;

use crate::conversion::Hub;

pub const API_VERSION: &str = "infrastructure.cluster.x-k8s.io/v1beta1";

impl Hub for OpenStackCluster {}

impl Hub for OpenStackClusterTemplate {}

impl Hub for OpenStackMachine {}

impl Hub for OpenStackMachineTemplate {}
