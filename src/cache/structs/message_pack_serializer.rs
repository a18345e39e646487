use std::marker::PhantomData;

/// Binary encoding through `rmp-serde`.
pub struct MessagePackSerializer<V> {
    pub(crate) _marker: PhantomData<fn() -> V>,
}
