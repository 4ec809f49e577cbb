pub const CONVERSION_INFRASTRUCTURE_CLUSTER_X_K8S_IO_RESTORE_DATA_KEY: &str =
    "conversion.infrastructure.cluster.x-k8s.io/restore-data";

/// Cluster API discovers which infrastructure API version satisfies its
/// contract through this CRD label.
pub const CLUSTER_X_K8S_IO_CONTRACT_KEY: &str = "cluster.x-k8s.io/v1beta1";
pub const CLUSTER_X_K8S_IO_CONTRACT_VALUE: &str = "v1alpha7_v1beta1";
