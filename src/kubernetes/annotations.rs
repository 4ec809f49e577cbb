use kube::core::ObjectMeta;

pub trait ObjectMetaExt {
    fn annotation(&self, key: &str) -> Option<&str>;

    fn insert_annotation(&mut self, key: &str, value: String);

    /// Removes the annotation, dropping the annotation map entirely when it
    /// is left empty.
    fn remove_annotation(&mut self, key: &str) -> Option<String>;
}

impl ObjectMetaExt for ObjectMeta {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations
            .as_ref()
            .and_then(|annotations| annotations.get(key))
            .map(String::as_str)
    }

    fn insert_annotation(&mut self, key: &str, value: String) {
        self.annotations
            .get_or_insert_with(Default::default)
            .insert(key.into(), value);
    }

    fn remove_annotation(&mut self, key: &str) -> Option<String> {
        let annotations = self.annotations.as_mut()?;
        let value = annotations.remove(key)?;
        if annotations.is_empty() {
            self.annotations = None;
        }
        Some(value)
    }
}
