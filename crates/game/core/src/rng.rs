//! Seedable random number generation for combat rolls.
//!
//! Every random decision in an encounter (initiative, damage variance,
//! ability gates, drop rolls) is drawn from the encounter's own generator so
//! that a given seed replays the same fight. The generator state serializes
//! with the encounter, which is what makes a restored snapshot behave
//! identically to the original.

use crate::config::CombatConfig;

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output. Small, fast, and
/// statistically solid, which is all combat rolls need.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        // Advance once so that low-entropy seeds (0, 1, ...) diverge
        // immediately instead of sharing their first outputs.
        let mut rng = Self { state: seed };
        rng.next_u32();
        rng
    }

    /// Advance the LCG state and produce the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        Self::pcg_output(self.state)
    }

    /// XSH-RR output function (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform float in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Roll a die with N sides (1..=N).
    pub fn roll_die(&mut self, sides: u32) -> u32 {
        (self.next_u32() % sides) + 1
    }

    /// Initiative roll: a d20.
    pub fn roll_initiative(&mut self) -> u32 {
        self.roll_die(CombatConfig::INITIATIVE_DIE)
    }

    /// Bernoulli trial. Probabilities outside `[0, 1]` are clamped, so a
    /// guaranteed success or failure is expressible without special cases.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability.clamp(0.0, 1.0)
    }

    /// Uniform index into a collection of `len` elements.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero; callers pick from non-empty candidate lists.
    pub fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty collection");
        (self.next_u32() as usize) % len
    }

    /// Damage variance multiplier, uniform in `[VARIANCE_MIN, VARIANCE_MAX)`.
    pub fn damage_variance(&mut self) -> f64 {
        let span = CombatConfig::VARIANCE_MAX - CombatConfig::VARIANCE_MIN;
        CombatConfig::VARIANCE_MIN + self.next_f64() * span
    }
}
