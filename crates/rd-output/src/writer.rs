//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, FrameSummaryRow, OutputResult, RankingRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`PopulationOutputObserver::take_error`][crate::PopulationOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one frame summary row.
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Write the ranking of one finished epoch, best first.
    fn write_ranking(&mut self, rows: &[RankingRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
