mod annotations;
mod constants;

pub use annotations::ObjectMetaExt;
pub use constants::{
    CLUSTER_X_K8S_IO_CONTRACT_KEY, CLUSTER_X_K8S_IO_CONTRACT_VALUE,
    CONVERSION_INFRASTRUCTURE_CLUSTER_X_K8S_IO_RESTORE_DATA_KEY,
};
