//! Seeded random streams split by sampling domain
use hmac::{Hmac, Mac};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::cell::{RefCell, RefMut};

type HmacSha256 = Hmac<Sha256>;

/// Deterministic bundle of RNG streams segregated by itinerary domain.
///
/// Each stream is derived from the same user seed, so drawing more
/// activities never shifts the weather a seed produces.
#[derive(Debug, Clone)]
pub struct RngBundle {
    seed: u64,
    activities: RefCell<CountingRng<SmallRng>>,
    lodging: RefCell<CountingRng<SmallRng>>,
    amenities: RefCell<CountingRng<SmallRng>>,
    weather: RefCell<CountingRng<SmallRng>>,
}

impl RngBundle {
    /// Construct the bundle from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        Self {
            seed,
            activities: RefCell::new(CountingRng::new(derive_stream_seed(seed, b"activities"))),
            lodging: RefCell::new(CountingRng::new(derive_stream_seed(seed, b"lodging"))),
            amenities: RefCell::new(CountingRng::new(derive_stream_seed(seed, b"amenities"))),
            weather: RefCell::new(CountingRng::new(derive_stream_seed(seed, b"weather"))),
        }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Access the activity shuffle stream.
    #[must_use]
    pub fn activities(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.activities.borrow_mut()
    }

    /// Access the accommodation pick stream.
    #[must_use]
    pub fn lodging(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.lodging.borrow_mut()
    }

    /// Access the amenity sampling stream.
    #[must_use]
    pub fn amenities(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.amenities.borrow_mut()
    }

    /// Access the weather stream.
    #[must_use]
    pub fn weather(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.weather.borrow_mut()
    }

    /// Snapshot of how many draws each stream has served.
    #[must_use]
    pub fn draw_counts(&self) -> StreamDraws {
        StreamDraws {
            activities: self.activities.borrow().draws(),
            lodging: self.lodging.borrow().draws(),
            amenities: self.amenities.borrow().draws(),
            weather: self.weather.borrow().draws(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamDraws {
    pub activities: u64,
    pub lodging: u64,
    pub amenities: u64,
    pub weather: u64,
}

impl StreamDraws {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.activities
            .saturating_add(self.lodging)
            .saturating_add(self.amenities)
            .saturating_add(self.weather)
    }
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<SmallRng> {
    fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl<R: rand::RngCore> CountingRng<R> {
    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: rand::RngCore> rand::RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    // HMAC accepts keys of any length; the error arm is unreachable.
    let Ok(mut mac) = HmacSha256::new_from_slice(&user_seed.to_le_bytes()) else {
        return user_seed;
    };
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0_u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}
