use crate::cache::structs::invalidation_event::InvalidationEvent;

impl InvalidationEvent {
    pub fn keys(keys: Vec<String>) -> Self {
        Self { keys: Some(keys) }
    }

    pub fn flush() -> Self {
        Self { keys: None }
    }

    pub fn is_flush(&self) -> bool {
        self.keys.is_none()
    }
}
