use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result};

use super::{hash::sha_256, restore_data::FieldData};

/// Recovers one piece of information that a lossy conversion drops.
///
/// A restorer is defined on the type that owns the information. When an
/// object of that type is converted away, `restore_data` records what the
/// conversion would lose. When the converted object comes back, `restore`
/// puts it back.
pub trait Restorer<T>: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns the data needed to restore `original`, where `round_trip` is
    /// `original` converted to the other version and back. Returns `None`
    /// when the round trip is lossless for this field.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the field could not be serialized.
    fn restore_data(&self, original: &T, round_trip: &T) -> Result<Option<FieldData>>;

    /// Restores the field of `object` from `data`. Returns whether the field
    /// was restored.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `data` does not describe a value of the field.
    fn restore(&self, object: &mut T, data: FieldData) -> Result<bool>;
}

pub type Restorers<T> = Vec<Box<dyn Restorer<T>>>;

fn to_value<F: Serialize>(value: &F) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(Error::Serde)
}

fn from_value<F: DeserializeOwned>(name: &str, value: serde_json::Value) -> Result<F> {
    serde_json::from_value(value).map_err(|e| Error::MalformedRestoreData(format!("{name}: {e}")))
}

/*
 * ============================================================================
 * Hashed Field Restorer
 * ============================================================================
 */
/// Restores a field to its previous value if the field of the converted
/// object still hashes to what the conversion produced when the restore data
/// was recorded. A different hash means a client of the other version changed
/// the field, and that change is kept.
pub struct HashedFieldRestorer<T, F> {
    name: &'static str,
    get: fn(&T) -> F,
    set: fn(&mut T, F),
    hash_filter: Option<fn(&F) -> F>,
    restore: Option<fn(F, F) -> F>,
}

impl<T, F> HashedFieldRestorer<T, F>
where
    F: PartialEq + Serialize + DeserializeOwned,
{
    #[must_use]
    pub fn new(name: &'static str, get: fn(&T) -> F, set: fn(&mut T, F)) -> Self {
        Self {
            name,
            get,
            set,
            hash_filter: None,
            restore: None,
        }
    }

    /// Hashes only the projection of the field returned by `filter`, so that
    /// changes outside of the projection do not prevent a restore.
    #[must_use]
    pub fn with_hash_filter(mut self, filter: fn(&F) -> F) -> Self {
        self.hash_filter = Some(filter);
        self
    }

    /// Combines the previous and current value on a hash match instead of
    /// overwriting the current value.
    #[must_use]
    pub fn with_restore(mut self, restore: fn(previous: F, current: F) -> F) -> Self {
        self.restore = Some(restore);
        self
    }

    fn hash(&self, value: &F) -> Result<String> {
        match self.hash_filter {
            Some(filter) => sha_256(&filter(value)),
            None => sha_256(value),
        }
    }
}

impl<T, F> HashedFieldRestorer<T, F>
where
    T: 'static,
    F: PartialEq + Serialize + DeserializeOwned + 'static,
{
    #[must_use]
    pub fn boxed(self) -> Box<dyn Restorer<T>> {
        Box::new(self)
    }
}

impl<T, F> Restorer<T> for HashedFieldRestorer<T, F>
where
    F: PartialEq + Serialize + DeserializeOwned,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn restore_data(&self, original: &T, round_trip: &T) -> Result<Option<FieldData>> {
        let original = (self.get)(original);
        let round_trip = (self.get)(round_trip);

        if original == round_trip {
            return Ok(None);
        }

        Ok(Some(FieldData {
            hash: Some(self.hash(&round_trip)?),
            value: to_value(&original)?,
        }))
    }

    fn restore(&self, object: &mut T, data: FieldData) -> Result<bool> {
        let Some(hash) = data.hash else {
            return Err(Error::MalformedRestoreData(format!(
                "{}: missing hash",
                self.name
            )));
        };

        let current = (self.get)(object);
        if self.hash(&current)? != hash {
            return Ok(false);
        }

        let previous: F = from_value(self.name, data.value)?;
        let value = match self.restore {
            Some(restore) => restore(previous, current),
            None => previous,
        };
        (self.set)(object, value);

        Ok(true)
    }
}

/*
 * ============================================================================
 * Unconditional Field Restorer
 * ============================================================================
 */
/// Restores a field to its previous value whenever restore data exists.
///
/// Only suitable for information the other version can neither express nor
/// edit.
pub struct UnconditionalFieldRestorer<T, F> {
    name: &'static str,
    get: fn(&T) -> F,
    set: fn(&mut T, F),
}

impl<T, F> UnconditionalFieldRestorer<T, F>
where
    F: PartialEq + Serialize + DeserializeOwned,
{
    #[must_use]
    pub fn new(name: &'static str, get: fn(&T) -> F, set: fn(&mut T, F)) -> Self {
        Self { name, get, set }
    }
}

impl<T, F> UnconditionalFieldRestorer<T, F>
where
    T: 'static,
    F: PartialEq + Serialize + DeserializeOwned + 'static,
{
    #[must_use]
    pub fn boxed(self) -> Box<dyn Restorer<T>> {
        Box::new(self)
    }
}

impl<T, F> Restorer<T> for UnconditionalFieldRestorer<T, F>
where
    F: PartialEq + Serialize + DeserializeOwned,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn restore_data(&self, original: &T, round_trip: &T) -> Result<Option<FieldData>> {
        let original = (self.get)(original);

        if original == (self.get)(round_trip) {
            return Ok(None);
        }

        Ok(Some(FieldData {
            hash: None,
            value: to_value(&original)?,
        }))
    }

    fn restore(&self, object: &mut T, data: FieldData) -> Result<bool> {
        (self.set)(object, from_value(self.name, data.value)?);
        Ok(true)
    }
}

/*
 * ============================================================================
 * Lifted Restorer
 * ============================================================================
 */
/// Applies a restorer of a nested value to the enclosing object.
pub struct LiftedRestorer<T, U> {
    inner: Box<dyn Restorer<U>>,
    get: fn(&T) -> &U,
    get_mut: fn(&mut T) -> &mut U,
}

impl<T, U> Restorer<T> for LiftedRestorer<T, U> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn restore_data(&self, original: &T, round_trip: &T) -> Result<Option<FieldData>> {
        self.inner
            .restore_data((self.get)(original), (self.get)(round_trip))
    }

    fn restore(&self, object: &mut T, data: FieldData) -> Result<bool> {
        self.inner.restore((self.get_mut)(object), data)
    }
}

#[must_use]
pub fn lift<T, U>(
    restorers: Restorers<U>,
    get: fn(&T) -> &U,
    get_mut: fn(&mut T) -> &mut U,
) -> Restorers<T>
where
    T: 'static,
    U: 'static,
{
    restorers
        .into_iter()
        .map(|inner| Box::new(LiftedRestorer { inner, get, get_mut }) as Box<dyn Restorer<T>>)
        .collect()
}
