use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::{Error, Result};

/// Hashes the JSON representation of `value`.
///
/// Struct fields serialize in declaration order and every map in the API
/// types is a `BTreeMap`, so equal values always produce equal hashes.
pub fn sha_256<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_vec(value).map_err(Error::Serde)?;
    let mut sha = Sha256::new();
    sha.update(&json);
    Ok(format!("sha256:{:x}", sha.finalize()))
}
