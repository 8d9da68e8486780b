//! `PopulationOutputObserver<W>` — bridges `PopulationObserver` to an
//! `OutputWriter`.

use rd_core::Frame;
use rd_sim::{EpochSummary, FrameReport, Population, PopulationObserver};

use crate::row::{AgentSnapshotRow, FrameSummaryRow, RankingRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`PopulationObserver`] that writes snapshots, frame summaries and
/// epoch rankings to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  Check them with [`take_error`][Self::take_error]
/// or [`finish`][Self::finish].
pub struct PopulationOutputObserver<W: OutputWriter> {
    writer:     W,
    epoch:      u32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> PopulationOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, epoch: 0, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Returns the first stored error, if any, otherwise
    /// the result of flushing.
    pub fn finish(&mut self) -> OutputResult<()> {
        let result = self.writer.finish();
        match self.last_error.take() {
            Some(e) => Err(e),
            None => result,
        }
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PopulationObserver for PopulationOutputObserver<W> {
    fn on_epoch_start(&mut self, epoch: u32) {
        self.epoch = epoch;
    }

    fn on_frame_end(&mut self, report: &FrameReport) {
        let row = FrameSummaryRow {
            epoch:     self.epoch,
            frame:     report.frame.0,
            alive:     report.alive as u64,
            crashed:   report.crash_count() as u64,
            game_over: report.game_over,
        };
        let result = self.writer.write_frame_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, frame: Frame, population: &Population) {
        let rows: Vec<AgentSnapshotRow> = population
            .snapshots()
            .into_iter()
            .map(|s| AgentSnapshotRow {
                epoch:            self.epoch,
                frame:            frame.0,
                agent_id:         s.id.0,
                status:           s.status,
                x:                s.x,
                y:                s.y,
                jumping:          s.jumping,
                ducking:          s.ducking,
                obstacles_passed: s.obstacles_passed,
                jump_count:       s.jump_count,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_epoch_end(&mut self, summary: &EpochSummary) {
        let rows: Vec<RankingRow> = summary
            .ranking
            .iter()
            .enumerate()
            .map(|(i, &(agent, passed))| RankingRow {
                epoch:            summary.epoch,
                rank:             i as u32 + 1,
                agent_id:         agent.0,
                obstacles_passed: passed,
                frames:           summary.frames,
            })
            .collect();
        let result = self.writer.write_ranking(&rows);
        self.store_err(result);
    }
}
