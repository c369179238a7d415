//! Engine construction: maps catalog names to concrete generators.
//!
//! Every engine seeds from OS entropy at construction unless an explicit
//! seed is given; `badrandom` is the deliberate exception and derives
//! from a wall-clock seed shared across the process.

use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{SmallRng, StdRng};
use rand::{RngCore, SeedableRng};
use rand_chacha::{ChaCha8Rng, ChaCha12Rng, ChaCha20Rng};
use rand_pcg::{Pcg32, Pcg64, Pcg64Mcg};
use rand_xoshiro::{SplitMix64, Xoshiro128PlusPlus, Xoshiro256PlusPlus};

use rollcast_core::EngineKind;

/// Builds the engine for `kind`.
pub fn build_engine(kind: EngineKind, seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => seeded_engine(kind, seed),
        None => entropy_engine(kind),
    }
}

fn seeded_engine(kind: EngineKind, seed: u64) -> Box<dyn RngCore> {
    match kind {
        EngineKind::Std => Box::new(StdRng::seed_from_u64(seed)),
        EngineKind::Small => Box::new(SmallRng::seed_from_u64(seed)),
        EngineKind::Pcg32 => Box::new(Pcg32::seed_from_u64(seed)),
        EngineKind::Pcg64 => Box::new(Pcg64::seed_from_u64(seed)),
        EngineKind::Pcg64Mcg => Box::new(Pcg64Mcg::seed_from_u64(seed)),
        EngineKind::Xoshiro128 => Box::new(Xoshiro128PlusPlus::seed_from_u64(seed)),
        EngineKind::Xoshiro256 => Box::new(Xoshiro256PlusPlus::seed_from_u64(seed)),
        EngineKind::SplitMix64 => Box::new(SplitMix64::seed_from_u64(seed)),
        EngineKind::ChaCha8 => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        EngineKind::ChaCha12 => Box::new(ChaCha12Rng::seed_from_u64(seed)),
        EngineKind::ChaCha20 => Box::new(ChaCha20Rng::seed_from_u64(seed)),
        EngineKind::BadRandom => Box::new(BadRandom::with_seed(seed)),
    }
}

fn entropy_engine(kind: EngineKind) -> Box<dyn RngCore> {
    match kind {
        EngineKind::Std => Box::new(StdRng::from_os_rng()),
        EngineKind::Small => Box::new(SmallRng::from_os_rng()),
        EngineKind::Pcg32 => Box::new(Pcg32::from_os_rng()),
        EngineKind::Pcg64 => Box::new(Pcg64::from_os_rng()),
        EngineKind::Pcg64Mcg => Box::new(Pcg64Mcg::from_os_rng()),
        EngineKind::Xoshiro128 => Box::new(Xoshiro128PlusPlus::from_os_rng()),
        EngineKind::Xoshiro256 => Box::new(Xoshiro256PlusPlus::from_os_rng()),
        EngineKind::SplitMix64 => Box::new(SplitMix64::from_os_rng()),
        EngineKind::ChaCha8 => Box::new(ChaCha8Rng::from_os_rng()),
        EngineKind::ChaCha12 => Box::new(ChaCha12Rng::from_os_rng()),
        EngineKind::ChaCha20 => Box::new(ChaCha20Rng::from_os_rng()),
        EngineKind::BadRandom => Box::new(BadRandom::from_clock()),
    }
}

/// Wall-clock seed for `badrandom`, captured once per process and shared
/// by every instance.
static CLOCK_SEED: OnceLock<u64> = OnceLock::new();

fn clock_seed() -> u64 {
    *CLOCK_SEED.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    })
}

const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

/// The weakest catalog entry, as the name warns: a bare 64-bit
/// linear-congruential generator emitting its high half, seeded from
/// whole wall-clock seconds. Two instances built in the same process (or
/// the same second) produce identical streams.
pub struct BadRandom {
    state: u64,
}

impl BadRandom {
    /// Builds from the shared coarse clock seed.
    pub fn from_clock() -> BadRandom {
        BadRandom::with_seed(clock_seed())
    }

    /// Builds from an explicit seed.
    pub fn with_seed(seed: u64) -> BadRandom {
        BadRandom { state: seed }
    }

    fn step(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }
}

impl RngCore for BadRandom {
    fn next_u32(&mut self) -> u32 {
        // The low bits of an LCG are the worst bits; hand out the high half.
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }
}
