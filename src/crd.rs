use k8s_openapi::{
    ByteString,
    apiextensions_apiserver::pkg::apis::apiextensions::v1::{
        CustomResourceConversion, CustomResourceDefinition, ServiceReference,
        WebhookClientConfig, WebhookConversion,
    },
};
use kube::{
    CustomResourceExt,
    core::crd::merge_crds,
};

use crate::{
    Error, Result,
    api::{v1alpha7, v1beta1},
    kubernetes::{CLUSTER_X_K8S_IO_CONTRACT_KEY, CLUSTER_X_K8S_IO_CONTRACT_VALUE},
};

/// The service the API server sends `ConversionReview`s to.
#[derive(Debug, Clone)]
pub struct WebhookService {
    pub name: String,
    pub namespace: String,
    pub port: i32,
    pub ca_bundle: Option<Vec<u8>>,
}

/// Generates the custom resource definitions of every served kind, with all
/// versions merged and `v1beta1` stored.
///
/// # Errors
///
/// Will return `Err` if the versions of a kind could not be merged.
pub fn generate(service: &WebhookService) -> Result<Vec<CustomResourceDefinition>> {
    Ok(vec![
        generate_crd(
            vec![
                v1alpha7::OpenStackCluster::crd(),
                v1beta1::OpenStackCluster::crd(),
            ],
            service,
        )?,
        generate_crd(
            vec![
                v1alpha7::OpenStackClusterTemplate::crd(),
                v1beta1::OpenStackClusterTemplate::crd(),
            ],
            service,
        )?,
        generate_crd(
            vec![
                v1alpha7::OpenStackMachine::crd(),
                v1beta1::OpenStackMachine::crd(),
            ],
            service,
        )?,
        generate_crd(
            vec![
                v1alpha7::OpenStackMachineTemplate::crd(),
                v1beta1::OpenStackMachineTemplate::crd(),
            ],
            service,
        )?,
    ])
}

fn generate_crd(
    crds: Vec<CustomResourceDefinition>,
    service: &WebhookService,
) -> Result<CustomResourceDefinition> {
    let mut crd = merge_crds(crds, "v1beta1").map_err(Error::Crd)?;

    crd.metadata.labels.get_or_insert_with(Default::default).insert(
        CLUSTER_X_K8S_IO_CONTRACT_KEY.to_string(),
        CLUSTER_X_K8S_IO_CONTRACT_VALUE.to_string(),
    );

    crd.spec.conversion = Some(CustomResourceConversion {
        strategy: "Webhook".to_string(),
        webhook: Some(WebhookConversion {
            client_config: Some(WebhookClientConfig {
                ca_bundle: service.ca_bundle.clone().map(ByteString),
                service: Some(ServiceReference {
                    name: service.name.clone(),
                    namespace: service.namespace.clone(),
                    path: Some("/convert".to_string()),
                    port: Some(service.port),
                }),
                url: None,
            }),
            conversion_review_versions: vec!["v1".to_string()],
        }),
    });

    Ok(crd)
}
