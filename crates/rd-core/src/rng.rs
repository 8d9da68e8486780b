//! Seeded randomness for agents and drivers.
//!
//! Agent `i` of a run seeded with `s` draws from `SmallRng(s ^ i·φ64)`, where
//! φ64 is the golden-ratio constant below.  Adjacent ids land far apart in
//! seed space and no agent touches another's stream, so stepping order and
//! thread count never change what an agent sees.
//!
//! Agents only ever draw blink delays.  Network initialisation and obstacle
//! streams use [`SimRng`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

const PHI64: u64 = 0x9e37_79b9_7f4a_7c15;

#[inline]
fn mix(seed: u64, n: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed ^ n.wrapping_mul(PHI64))
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// An agent's private random stream.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(run_seed: u64, agent: AgentId) -> Self {
        AgentRng(mix(run_seed, agent.0 as u64))
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// Whole milliseconds in `[0, max_ms]`, as the waiting blink wants them.
    pub fn blink_delay(&mut self, max_ms: f64) -> f64 {
        (self.unit() * max_ms).ceil()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level stream for everything outside the agents.  Hand independent
/// streams to sub-tasks with [`SimRng::child`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A new stream derived from this one and `offset`.  Advances `self`.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let base: u64 = self.0.r#gen();
        SimRng(mix(base, offset))
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `p` is clamped into `[0, 1]`.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
