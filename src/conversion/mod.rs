//! Lossless conversion between API versions.
//!
//! Every kind has one hub version, the storage version, and any number of
//! spoke versions that convert to and from the hub. Versions are not
//! isomorphic, so converting an object to another version and back can lose
//! information. [`convert_and_restore`] records the lost information on the
//! converted object and restores it when the object is converted back.

mod hash;
mod restore_data;
mod restorer;

use kube::Resource;

pub use hash::sha_256;
pub use restore_data::{FieldData, RestoreData};
pub use restorer::{
    HashedFieldRestorer, LiftedRestorer, Restorer, Restorers, UnconditionalFieldRestorer, lift,
};

use crate::{
    Result,
    kubernetes::{CONVERSION_INFRASTRUCTURE_CLUSTER_X_K8S_IO_RESTORE_DATA_KEY, ObjectMetaExt},
};

/// Marks the version a kind is stored in.
pub trait Hub: Resource {}

/// A spoke version of a kind.
pub trait Convertible<H: Hub>: Sized {
    /// # Errors
    ///
    /// Will return `Err` if restore data on the object is malformed.
    fn convert_to(&self) -> Result<H>;

    /// # Errors
    ///
    /// Will return `Err` if restore data on the hub is malformed.
    fn convert_from(hub: &H) -> Result<Self>;
}

/// Restorer for a field reachable through plain field access.
macro_rules! hashed_field {
    ($name:literal, $ty:ty, $($field:ident).+) => {
        $crate::conversion::HashedFieldRestorer::new(
            $name,
            |object: &$ty| object.$($field).+.clone(),
            |object: &mut $ty, value| object.$($field).+ = value,
        )
        .boxed()
    };
}

pub(crate) use hashed_field;

/// Converts `src` with `convert`, restores what an earlier conversion in the
/// opposite direction recorded on `src`, and records on the result what
/// `convert` loses of `src`.
///
/// `convert_back` must be the conversion in the opposite direction; it is used
/// to find out which fields of `src` do not survive the round trip.
///
/// # Errors
///
/// Will return `Err` if restore data on `src` is malformed.
pub fn convert_and_restore<S, D>(
    src: &S,
    convert: fn(&S) -> D,
    convert_back: fn(&D) -> S,
    src_restorers: &[Box<dyn Restorer<S>>],
    dst_restorers: &[Box<dyn Restorer<D>>],
) -> Result<D>
where
    S: Resource,
    D: Resource,
{
    let mut dst = convert(src);
    dst.meta_mut()
        .remove_annotation(CONVERSION_INFRASTRUCTURE_CLUSTER_X_K8S_IO_RESTORE_DATA_KEY);

    if let Some(mut data) = RestoreData::from_meta(src.meta())? {
        for restorer in dst_restorers {
            let Some(field) = data.remove(restorer.name()) else {
                continue;
            };

            if restorer.restore(&mut dst, field)? {
                tracing::debug!(field = restorer.name(), "restored");
            } else {
                tracing::debug!(field = restorer.name(), "changed since conversion, not restored");
            }
        }

        for name in data.names() {
            tracing::debug!(field = name, "no restorer, ignoring restore data");
        }
    }

    let round_trip = convert_back(&dst);

    let mut data = RestoreData::default();
    for restorer in src_restorers {
        if let Some(field) = restorer.restore_data(src, &round_trip)? {
            data.insert(restorer.name(), field);
        }
    }
    data.write_to(dst.meta_mut())?;

    Ok(dst)
}
