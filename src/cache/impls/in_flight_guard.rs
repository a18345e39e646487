use log::debug;
use crate::cache::enums::cache_slot::CacheSlot;
use crate::cache::structs::cache_client::CacheClientInner;
use crate::cache::structs::in_flight_guard::InFlightGuard;

impl<'a, V> InFlightGuard<'a, V> {
    pub(crate) fn new(client: &'a CacheClientInner<V>, owner: u64) -> Self {
        Self {
            client,
            owner,
            keys: Vec::new(),
        }
    }

    /// Whether `slot` is the marker this guard placed.
    pub(crate) fn owns(&self, slot: Option<&CacheSlot<V>>) -> bool {
        matches!(slot, Some(CacheSlot::InFlight(id)) if *id == self.owner)
    }
}

impl<V> Drop for InFlightGuard<'_, V> {
    fn drop(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        let client = self.client;
        let _guard = client.local_guard.lock();
        let mut released = 0;
        for key in &self.keys {
            if self.owns(client.local.get(key).as_ref()) {
                client.local.delete(key);
                released += 1;
            }
        }
        if released > 0 {
            debug!("[CACHE] Released {} in-flight markers of fetch {}", released, self.owner);
        }
    }
}
