//! Population observer trait for progress reporting and data collection.

use rd_agent::AgentState;
use rd_core::Frame;

use crate::{EpochSummary, FrameReport, Population};

/// Callbacks invoked by [`Population::step_with`] and
/// [`Population::run_epoch`].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: crash printer
///
/// ```rust,ignore
/// struct CrashPrinter;
///
/// impl PopulationObserver for CrashPrinter {
///     fn on_crash(&mut self, agent: &AgentState, frame: Frame) {
///         println!("{frame}: {} crashed after {} obstacles", agent.id(), agent.obstacles_passed());
///     }
/// }
/// ```
pub trait PopulationObserver {
    /// Called once when an epoch starts, after every agent was revived.
    fn on_epoch_start(&mut self, _epoch: u32) {}

    /// Called for every agent that crashed during a frame.
    fn on_crash(&mut self, _agent: &AgentState, _frame: Frame) {}

    /// Called at the end of every frame.
    fn on_frame_end(&mut self, _report: &FrameReport) {}

    /// Called at snapshot intervals (every `config.output_interval_frames`
    /// frames) with read access to the whole population.
    fn on_snapshot(&mut self, _frame: Frame, _population: &Population) {}

    /// Called once when an epoch ends, by game over or by the frame cap.
    fn on_epoch_end(&mut self, _summary: &EpochSummary) {}
}

/// A [`PopulationObserver`] that does nothing.
pub struct NoopObserver;

impl PopulationObserver for NoopObserver {}
