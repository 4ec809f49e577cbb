use std::collections::BTreeMap;

use kube::core::ObjectMeta;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    kubernetes::{CONVERSION_INFRASTRUCTURE_CLUSTER_X_K8S_IO_RESTORE_DATA_KEY, ObjectMetaExt},
};

/// Data recorded for a single restorer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FieldData {
    /// Hash of the field as the other version will convert it back.
    ///
    /// Absent for unconditional restorers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// The field as it was before the lossy conversion.
    pub value: serde_json::Value,
}

/// Restore data of an object, keyed by restorer name.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct RestoreData(BTreeMap<String, FieldData>);

impl RestoreData {
    /// # Errors
    ///
    /// Will return `Err` if the annotation is present but is not valid
    /// restore data.
    pub fn from_meta(meta: &ObjectMeta) -> Result<Option<Self>> {
        meta.annotation(CONVERSION_INFRASTRUCTURE_CLUSTER_X_K8S_IO_RESTORE_DATA_KEY)
            .map(|value| {
                serde_json::from_str(value)
                    .map_err(|e| Error::MalformedRestoreData(e.to_string()))
            })
            .transpose()
    }

    /// Stores the restore data on the object, or removes any previous restore
    /// data when there is nothing to restore.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the restore data could not be serialized.
    pub fn write_to(&self, meta: &mut ObjectMeta) -> Result<()> {
        if self.0.is_empty() {
            meta.remove_annotation(CONVERSION_INFRASTRUCTURE_CLUSTER_X_K8S_IO_RESTORE_DATA_KEY);
            return Ok(());
        }

        meta.insert_annotation(
            CONVERSION_INFRASTRUCTURE_CLUSTER_X_K8S_IO_RESTORE_DATA_KEY,
            serde_json::to_string(self).map_err(Error::Serde)?,
        );
        Ok(())
    }

    pub fn insert(&mut self, name: &str, data: FieldData) {
        self.0.insert(name.into(), data);
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldData> {
        self.0.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
