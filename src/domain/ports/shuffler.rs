use crate::domain::entities::discovery_item::DiscoveryItem;

/// Random source for discovery ordering. Injected so tests can pin the order.
pub trait Shuffler: Send + Sync {
    fn shuffle(&self, items: &mut [DiscoveryItem]);
}
