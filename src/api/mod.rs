use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    Error, Result,
    conversion::{Convertible, Hub},
};

pub mod v1alpha7;
pub mod v1beta1;

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_zero(value: &i32) -> bool {
    *value == 0
}

/*
 * ============================================================================
 * Dispatch
 * ============================================================================
 */
/// Converts a serialized object to `desired_api_version`.
///
/// # Errors
///
/// Will return `Err` if the object has no `apiVersion` or `kind`, does not
/// deserialize as its kind, carries malformed restore data, or if the
/// conversion is not served.
pub fn convert_object(object: Value, desired_api_version: &str) -> Result<Value> {
    let api_version = object_key(&object, "apiVersion")?;
    let kind = object_key(&object, "kind")?;

    if api_version == desired_api_version {
        return Ok(object);
    }

    match (kind.as_str(), api_version.as_str(), desired_api_version) {
        ("OpenStackCluster", v1alpha7::API_VERSION, v1beta1::API_VERSION) => {
            to_hub::<v1alpha7::OpenStackCluster, v1beta1::OpenStackCluster>(object)
        }
        ("OpenStackCluster", v1beta1::API_VERSION, v1alpha7::API_VERSION) => {
            from_hub::<v1alpha7::OpenStackCluster, v1beta1::OpenStackCluster>(object)
        }
        ("OpenStackClusterTemplate", v1alpha7::API_VERSION, v1beta1::API_VERSION) => {
            to_hub::<v1alpha7::OpenStackClusterTemplate, v1beta1::OpenStackClusterTemplate>(object)
        }
        ("OpenStackClusterTemplate", v1beta1::API_VERSION, v1alpha7::API_VERSION) => {
            from_hub::<v1alpha7::OpenStackClusterTemplate, v1beta1::OpenStackClusterTemplate>(
                object,
            )
        }
        ("OpenStackMachine", v1alpha7::API_VERSION, v1beta1::API_VERSION) => {
            to_hub::<v1alpha7::OpenStackMachine, v1beta1::OpenStackMachine>(object)
        }
        ("OpenStackMachine", v1beta1::API_VERSION, v1alpha7::API_VERSION) => {
            from_hub::<v1alpha7::OpenStackMachine, v1beta1::OpenStackMachine>(object)
        }
        ("OpenStackMachineTemplate", v1alpha7::API_VERSION, v1beta1::API_VERSION) => {
            to_hub::<v1alpha7::OpenStackMachineTemplate, v1beta1::OpenStackMachineTemplate>(object)
        }
        ("OpenStackMachineTemplate", v1beta1::API_VERSION, v1alpha7::API_VERSION) => {
            from_hub::<v1alpha7::OpenStackMachineTemplate, v1beta1::OpenStackMachineTemplate>(
                object,
            )
        }
        _ => Err(Error::UnsupportedConversion {
            kind,
            from: api_version,
            to: desired_api_version.to_string(),
        }),
    }
}

fn object_key(object: &Value, key: &'static str) -> Result<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or(Error::MissingObjectKey(key))
}

fn to_hub<S, H>(object: Value) -> Result<Value>
where
    S: Convertible<H> + DeserializeOwned,
    H: Hub + Serialize,
{
    let spoke: S = serde_json::from_value(object).map_err(Error::Serde)?;
    serde_json::to_value(spoke.convert_to()?).map_err(Error::Serde)
}

fn from_hub<S, H>(object: Value) -> Result<Value>
where
    S: Convertible<H> + Serialize,
    H: Hub + DeserializeOwned,
{
    let hub: H = serde_json::from_value(object).map_err(Error::Serde)?;
    serde_json::to_value(S::convert_from(&hub)?).map_err(Error::Serde)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::Error;

    use super::{convert_object, v1alpha7, v1beta1};

    fn spoke_cluster() -> serde_json::Value {
        json!({
            "apiVersion": v1alpha7::API_VERSION,
            "kind": "OpenStackCluster",
            "metadata": {
                "name": "cluster",
                "namespace": "default",
            },
            "spec": {
                "cloudName": "openstack",
                "nodeCidr": "10.0.0.0/24",
                "dnsNameservers": ["8.8.8.8"],
                "externalNetworkId": "external",
                "identityRef": {
                    "kind": "Secret",
                    "name": "cloud-config",
                },
            },
        })
    }

    #[test]
    fn same_version_passes_through() {
        // arrange
        let object = json!({
            "apiVersion": v1beta1::API_VERSION,
            "kind": "Unknown",
            "spec": { "field": true },
        });

        // act
        let converted = convert_object(object.clone(), v1beta1::API_VERSION).unwrap();

        // assert
        assert_eq!(converted, object);
    }

    #[test]
    fn cluster_converts_to_hub() {
        // arrange
        let object = spoke_cluster();

        // act
        let hub = convert_object(object, v1beta1::API_VERSION).unwrap();

        // assert
        assert_eq!(hub["apiVersion"], v1beta1::API_VERSION);
        assert_eq!(hub["kind"], "OpenStackCluster");
        assert_eq!(hub["metadata"]["name"], "cluster");
        assert_eq!(hub["spec"]["managedSubnets"][0]["cidr"], "10.0.0.0/24");
        assert_eq!(hub["spec"]["managedSubnets"][0]["dnsNameservers"][0], "8.8.8.8");
        assert_eq!(hub["spec"]["externalNetwork"]["id"], "external");
        assert_eq!(hub["spec"]["identityRef"]["name"], "cloud-config");
        assert_eq!(hub["spec"]["identityRef"]["cloudName"], "openstack");
    }

    #[test]
    fn cluster_survives_round_trip() {
        // arrange
        let object = spoke_cluster();

        // act
        let hub = convert_object(object.clone(), v1beta1::API_VERSION).unwrap();
        let spoke = convert_object(hub, v1alpha7::API_VERSION).unwrap();

        // assert
        let expected: v1alpha7::OpenStackCluster = serde_json::from_value(object).unwrap();
        let actual: v1alpha7::OpenStackCluster = serde_json::from_value(spoke).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn cluster_template_converts_to_hub() {
        // arrange
        let object = json!({
            "apiVersion": v1alpha7::API_VERSION,
            "kind": "OpenStackClusterTemplate",
            "metadata": { "name": "template" },
            "spec": {
                "template": {
                    "spec": {
                        "cloudName": "openstack",
                        "nodeCidr": "10.0.0.0/24",
                        "identityRef": { "kind": "Secret", "name": "cloud-config" },
                    },
                },
            },
        });

        // act
        let hub = convert_object(object, v1beta1::API_VERSION).unwrap();

        // assert
        assert_eq!(hub["kind"], "OpenStackClusterTemplate");
        let spec = &hub["spec"]["template"]["spec"];
        assert_eq!(spec["managedSubnets"][0]["cidr"], "10.0.0.0/24");
        assert_eq!(spec["identityRef"]["cloudName"], "openstack");
    }

    #[test]
    fn machine_conditions_survive_round_trip() {
        // arrange
        let object = json!({
            "apiVersion": v1beta1::API_VERSION,
            "kind": "OpenStackMachine",
            "metadata": { "name": "machine" },
            "spec": {
                "flavor": "m1.small",
                "image": { "id": "ce96e584-7ebc-46d6-9e55-987d72e3806c" },
                "floatingIPPoolRef": {
                    "apiGroup": "infrastructure.cluster.x-k8s.io",
                    "kind": "OpenStackFloatingIPPool",
                    "name": "pool",
                },
            },
            "status": {
                "ready": true,
                "conditions": [{
                    "type": "Ready",
                    "status": "False",
                    "severity": "Warning",
                    "reason": "InstanceCreateFailed",
                    "message": "quota exceeded",
                    "lastTransitionTime": "2024-01-01T00:00:00Z",
                }],
            },
        });

        // act
        let spoke = convert_object(object.clone(), v1alpha7::API_VERSION).unwrap();
        let hub = convert_object(spoke.clone(), v1beta1::API_VERSION).unwrap();

        // assert
        assert_eq!(spoke["status"]["conditions"], object["status"]["conditions"]);
        assert_eq!(hub["status"], object["status"]);
        assert_eq!(hub["spec"]["floatingIPPoolRef"], object["spec"]["floatingIPPoolRef"]);
    }

    #[test]
    fn machine_template_converts_from_hub() {
        // arrange
        let object = json!({
            "apiVersion": v1beta1::API_VERSION,
            "kind": "OpenStackMachineTemplate",
            "metadata": { "name": "template" },
            "spec": {
                "template": {
                    "spec": {
                        "flavor": "m1.small",
                        "image": { "id": "ce96e584-7ebc-46d6-9e55-987d72e3806c" },
                    },
                },
            },
        });

        // act
        let spoke = convert_object(object, v1alpha7::API_VERSION).unwrap();

        // assert
        assert_eq!(spoke["apiVersion"], v1alpha7::API_VERSION);
        assert_eq!(spoke["spec"]["template"]["spec"]["flavor"], "m1.small");
        assert_eq!(
            spoke["spec"]["template"]["spec"]["imageUUID"],
            "ce96e584-7ebc-46d6-9e55-987d72e3806c"
        );
    }

    #[test]
    fn unknown_kind_is_unsupported() {
        // arrange
        let object = json!({
            "apiVersion": v1alpha7::API_VERSION,
            "kind": "OpenStackFloatingIPPool",
            "metadata": { "name": "pool" },
        });

        // act
        let result = convert_object(object, v1beta1::API_VERSION);

        // assert
        assert!(matches!(
            result,
            Err(Error::UnsupportedConversion { kind, .. }) if kind == "OpenStackFloatingIPPool"
        ));
    }

    #[test]
    fn unknown_version_is_unsupported() {
        // arrange
        let object = spoke_cluster();

        // act
        let result = convert_object(object, "infrastructure.cluster.x-k8s.io/v1alpha6");

        // assert
        assert!(matches!(result, Err(Error::UnsupportedConversion { .. })));
    }

    #[test]
    fn missing_kind() {
        // arrange
        let object = json!({ "apiVersion": v1alpha7::API_VERSION });

        // act
        let result = convert_object(object, v1beta1::API_VERSION);

        // assert
        assert!(matches!(result, Err(Error::MissingObjectKey("kind"))));
    }
}
