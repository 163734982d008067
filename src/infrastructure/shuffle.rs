use crate::domain::entities::discovery_item::DiscoveryItem;
use crate::domain::ports::shuffler::Shuffler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

/// Uniform shuffle from the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomShuffler;

impl Shuffler for RandomShuffler {
    fn shuffle(&self, items: &mut [DiscoveryItem]) {
        items.shuffle(&mut rand::thread_rng());
    }
}

/// Reproducible shuffle: the same seed and call sequence give the same order.
#[derive(Debug)]
pub struct SeededShuffler {
    rng: Mutex<StdRng>,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&self, items: &mut [DiscoveryItem]) {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        items.shuffle(&mut *rng);
    }
}
