//! The `Population` struct and its lockstep frame loop.

use rd_agent::{AgentSnapshot, AgentState};
use rd_brain::DecisionController;
use rd_core::{AgentId, Frame, FrameClock, RdError, SimConfig};
use tracing::{debug, info, warn};

use crate::{
    EpochSummary, FrameReport, NoopObserver, PopulationObserver, SimError, SimResult, World,
    WorldFrame,
};

// ── Population ────────────────────────────────────────────────────────────────

/// All agents of a run, each paired with its decision controller.
///
/// Agent `i` has `AgentId(i)`; insertion order is id order and is the
/// tie-break of [`ranked`](Self::ranked).
///
/// Create via [`PopulationBuilder`][crate::PopulationBuilder].
pub struct Population {
    config:      SimConfig,
    agents:      Vec<AgentState>,
    controllers: Vec<DecisionController>,
    clock:       FrameClock,
    epoch:       u32,
    game_over:   bool,
}

impl Population {
    pub(crate) fn new(
        config:      SimConfig,
        agents:      Vec<AgentState>,
        controllers: Vec<DecisionController>,
    ) -> Self {
        Self {
            config,
            agents,
            controllers,
            clock: FrameClock::new(),
            epoch: 0,
            game_over: false,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn agents(&self) -> &[AgentState] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> SimResult<&AgentState> {
        self.agents
            .get(id.index())
            .ok_or(SimError::Core(RdError::AgentNotFound(id)))
    }

    pub fn controller(&self, id: AgentId) -> SimResult<&DecisionController> {
        self.controllers
            .get(id.index())
            .ok_or(SimError::Core(RdError::AgentNotFound(id)))
    }

    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|a| !a.is_crashed()).count()
    }

    /// `true` once every agent has crashed.
    #[inline]
    pub fn all_crashed(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Number of completed [`revive`](Self::revive) calls.
    #[inline]
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// The next frame to be simulated in this epoch.
    #[inline]
    pub fn frame(&self) -> Frame {
        self.clock.current_frame
    }

    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn snapshots(&self) -> Vec<AgentSnapshot> {
        self.agents.iter().map(AgentState::snapshot).collect()
    }

    /// Agent ids by obstacles passed, most first; ties keep id order.
    pub fn ranked(&self) -> Vec<AgentId> {
        self.ranking().into_iter().map(|(id, _)| id).collect()
    }

    /// Like [`ranked`](Self::ranked), paired with each agent's score.
    pub fn ranking(&self) -> Vec<(AgentId, u32)> {
        let mut scores: Vec<(AgentId, u32)> =
            self.agents.iter().map(|a| (a.id(), a.obstacles_passed())).collect();
        // `sort_by` is stable.
        scores.sort_by(|a, b| b.1.cmp(&a.1));
        scores
    }

    // ── Whole-population commands ─────────────────────────────────────────

    /// Move every waiting agent to `Running`.
    pub fn start(&mut self) {
        for agent in &mut self.agents {
            agent.start();
        }
    }

    pub fn set_jump_velocity(&mut self, setting: f64) {
        for agent in &mut self.agents {
            agent.set_jump_velocity(setting);
        }
    }

    /// Start a new epoch: every agent `Running` at the start position with
    /// cleared counters, frame counter back to 0.
    pub fn revive(&mut self) {
        for agent in &mut self.agents {
            agent.revive();
        }
        self.clock.reset();
        self.game_over = false;
        self.epoch += 1;
        info!(epoch = self.epoch, agents = self.agents.len(), "epoch started");
    }

    /// Alias of [`revive`](Self::revive).
    pub fn reset(&mut self) {
        self.revive();
    }

    /// Swap in new controllers, e.g. after selecting the best networks.
    /// Must be length `agent_count`.
    pub fn replace_controllers(&mut self, controllers: Vec<DecisionController>) -> SimResult<()> {
        if controllers.len() != self.agents.len() {
            return Err(SimError::AgentCountMismatch {
                expected: self.agents.len(),
                got:      controllers.len(),
                what:     "controllers",
            });
        }
        self.controllers = controllers;
        Ok(())
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Simulate one frame.  See the crate docs for the phase order.
    pub fn step(&mut self, world: &WorldFrame<'_>) -> FrameReport {
        self.step_with(world, &mut NoopObserver)
    }

    /// [`step`](Self::step) with observer callbacks.
    pub fn step_with<O: PopulationObserver>(
        &mut self,
        world:    &WorldFrame<'_>,
        observer: &mut O,
    ) -> FrameReport {
        let frame = self.clock.current_frame;

        let valid = world.delta_ms.is_finite() && world.delta_ms >= 0.0;
        let crashed: Vec<AgentId> = if valid {
            self.step_agents(world)
                .iter()
                .enumerate()
                .filter(|&(_, &c)| c)
                .map(|(i, _)| AgentId(i as u32))
                .collect()
        } else {
            warn!(frame = %frame, delta_ms = world.delta_ms, "invalid frame delta; agents not stepped");
            Vec::new()
        };

        // Flags are per agent, so each crash is tallied at most once.
        for &id in &crashed {
            let agent = &self.agents[id.index()];
            debug!(agent = %id, frame = %frame, obstacles = agent.obstacles_passed(), "agent crashed");
            observer.on_crash(agent, frame);
        }
        self.finish_frame(frame, crashed, if valid { world.delta_ms } else { 0.0 }, observer)
    }

    fn finish_frame<O: PopulationObserver>(
        &mut self,
        frame:    Frame,
        crashed:  Vec<AgentId>,
        delta_ms: f64,
        observer: &mut O,
    ) -> FrameReport {
        let alive = self.alive_count();
        let game_over = alive == 0 && !self.game_over;
        if game_over {
            self.game_over = true;
            let best = self.ranking().first().copied();
            info!(
                epoch = self.epoch,
                frame = %frame,
                best_agent = ?best.map(|(id, _)| id),
                best_score = best.map_or(0, |(_, s)| s),
                "game over"
            );
        }

        let report = FrameReport { frame, crashed, alive, game_over };
        observer.on_frame_end(&report);
        let interval = self.config.output_interval_frames;
        if interval > 0 && frame.0.is_multiple_of(interval) {
            observer.on_snapshot(frame, self);
        }
        self.clock.advance(delta_ms);
        report
    }

    /// Per-agent phase.  Returns one "crashed this frame" flag per agent.
    fn step_agents(&mut self, world: &WorldFrame<'_>) -> Vec<bool> {
        #[cfg(not(feature = "parallel"))]
        {
            self.agents
                .iter_mut()
                .zip(&self.controllers)
                .map(|(agent, controller)| step_agent(agent, controller, world))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.agents
                .par_iter_mut()
                .zip(self.controllers.par_iter())
                .map(|(agent, controller)| step_agent(agent, controller, world))
                .collect()
        }
    }

    /// Revive, then step frames from `world` until every agent crashed or
    /// `config.max_frames` is reached.
    ///
    /// With `max_frames == 0` the epoch only ends by game over.
    pub fn run_epoch<W: World, O: PopulationObserver>(
        &mut self,
        world:    &mut W,
        observer: &mut O,
    ) -> EpochSummary {
        self.revive();
        world.reset();
        observer.on_epoch_start(self.epoch);

        let max_frames = self.config.max_frames;
        while !self.game_over && (max_frames == 0 || self.clock.current_frame.0 < max_frames) {
            let frame = world.next_frame();
            self.step_with(&frame, observer);
        }

        let summary = EpochSummary {
            epoch:     self.epoch,
            frames:    self.clock.current_frame.0,
            game_over: self.game_over,
            ranking:   self.ranking(),
        };
        observer.on_epoch_end(&summary);
        summary
    }
}

/// Advance one agent by one frame.  Returns `true` if it crashed this frame.
fn step_agent(agent: &mut AgentState, controller: &DecisionController, world: &WorldFrame<'_>) -> bool {
    if agent.is_crashed() {
        return false;
    }
    agent.advance(world.delta_ms, world.speed, world.playing_intro);

    let Some(leading) = world.leading_obstacle() else {
        return false;
    };
    if agent.check_collision(leading).is_hit() {
        return agent.crash();
    }
    if world.playing {
        let action = controller.decide_for(leading, agent.y(), world.speed);
        agent.act(action, world.speed);
    }
    false
}
