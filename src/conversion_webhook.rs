use kube::core::{
    conversion::{ConversionRequest, ConversionResponse, ConversionReview},
    response::Status,
};
use serde_json::Value;

use crate::{Result, api, metrics::Metrics};

/// Answers a `ConversionReview`.
///
/// Objects are converted in order. The first object that fails to convert
/// fails the whole review.
#[must_use]
pub fn review(metrics: &Metrics, review: ConversionReview) -> ConversionReview {
    let mut request = match ConversionRequest::from_review(review) {
        Ok(request) => request,
        Err(error) => {
            tracing::warn!(error =% error, "invalid conversion review");
            return ConversionResponse::invalid(Status::failure(
                &error.to_string(),
                "InvalidRequest",
            ))
            .into_review();
        }
    };

    let objects = std::mem::take(&mut request.objects);
    let desired_api_version = request.desired_api_version.clone();

    match convert_objects(metrics, objects, &desired_api_version) {
        Ok(objects) => ConversionResponse::for_request(request)
            .success(objects)
            .into_review(),
        Err(message) => ConversionResponse::for_request(request)
            .failure(Status::failure(&message, "ConversionFailed"))
            .into_review(),
    }
}

#[tracing::instrument(skip(metrics, objects), fields(objects = objects.len()))]
fn convert_objects(
    metrics: &Metrics,
    objects: Vec<Value>,
    desired_api_version: &str,
) -> Result<Vec<Value>, String> {
    objects
        .into_iter()
        .enumerate()
        .map(|(index, object)| {
            convert_object(metrics, object, desired_api_version)
                .map_err(|error| format!("conversion of object {index} failed: {error}"))
        })
        .collect()
}

fn convert_object(metrics: &Metrics, object: Value, desired_api_version: &str) -> Result<Value> {
    let kind = object_str(&object, "kind").to_string();
    let api_version = object_str(&object, "apiVersion").to_string();
    let name = object
        .pointer("/metadata/name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let _timer = metrics.count_and_measure(&kind, &api_version, desired_api_version);

    match api::convert_object(object, desired_api_version) {
        Ok(object) => {
            tracing::debug!(
                kind =% kind,
                name =% name,
                from =% api_version,
                to =% desired_api_version,
                "converted"
            );
            Ok(object)
        }
        Err(error) => {
            tracing::warn!(
                kind =% kind,
                name =% name,
                from =% api_version,
                to =% desired_api_version,
                error =% error,
                "conversion failed"
            );
            metrics.conversion_failure(&kind, &api_version, desired_api_version, &error);
            Err(error)
        }
    }
}

fn object_str<'a>(object: &'a Value, key: &str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or_default()
}
