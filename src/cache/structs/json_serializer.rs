use std::marker::PhantomData;

/// Text encoding through `serde_json`.
pub struct JsonSerializer<V> {
    pub(crate) _marker: PhantomData<fn() -> V>,
}
