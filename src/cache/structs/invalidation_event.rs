/// Channel the store publishes tracking invalidations on.
pub const INVALIDATION_CHANNEL: &str = "__redis__:invalidate";

/// One invalidation notification.
///
/// `keys` holds physical keys; `None` is the store's "flush everything" signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationEvent {
    pub keys: Option<Vec<String>>,
}
