use std::fmt;

use serde::Serialize;

/// A pseudo-random engine from the catalog, selected with `--generator`.
///
/// The catalog only knows names; constructing the underlying generator is
/// the generation crate's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// The stdlib-quality default (currently ChaCha12-based).
    Std,
    /// Small, fast, non-portable engine.
    Small,
    /// PCG XSH-RR, 64-bit state, 32-bit output.
    Pcg32,
    /// PCG XSL-RR, 128-bit state, 64-bit output.
    Pcg64,
    /// PCG multiplicative-congruential variant.
    Pcg64Mcg,
    /// xoshiro128++.
    Xoshiro128,
    /// xoshiro256++.
    Xoshiro256,
    /// SplitMix64, mainly useful as a seeder but valid on its own.
    SplitMix64,
    /// ChaCha stream cipher, 8 rounds.
    ChaCha8,
    /// ChaCha stream cipher, 12 rounds.
    ChaCha12,
    /// ChaCha stream cipher, 20 rounds.
    ChaCha20,
    /// Deliberately weak linear-congruential engine with a coarse
    /// wall-clock seed shared across the process.
    BadRandom,
}

/// Every engine name accepted by `--generator`, in menu order.
pub const ENGINE_CATALOG: [EngineKind; 12] = [
    EngineKind::Std,
    EngineKind::Small,
    EngineKind::Pcg32,
    EngineKind::Pcg64,
    EngineKind::Pcg64Mcg,
    EngineKind::Xoshiro128,
    EngineKind::Xoshiro256,
    EngineKind::SplitMix64,
    EngineKind::ChaCha8,
    EngineKind::ChaCha12,
    EngineKind::ChaCha20,
    EngineKind::BadRandom,
];

impl EngineKind {
    /// Canonical lowercase name used on the command line and in dumps.
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Std => "std",
            EngineKind::Small => "small",
            EngineKind::Pcg32 => "pcg32",
            EngineKind::Pcg64 => "pcg64",
            EngineKind::Pcg64Mcg => "pcg64mcg",
            EngineKind::Xoshiro128 => "xoshiro128",
            EngineKind::Xoshiro256 => "xoshiro256",
            EngineKind::SplitMix64 => "splitmix64",
            EngineKind::ChaCha8 => "chacha8",
            EngineKind::ChaCha12 => "chacha12",
            EngineKind::ChaCha20 => "chacha20",
            EngineKind::BadRandom => "badrandom",
        }
    }

    /// Looks up a catalog entry by its canonical name.
    pub fn from_name(name: &str) -> Option<EngineKind> {
        ENGINE_CATALOG.iter().copied().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
