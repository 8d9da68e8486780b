//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `frame_summaries.csv`
//! - `epoch_rankings.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, FrameSummaryRow, OutputResult, RankingRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    rankings:  Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record([
            "epoch", "frame", "agent_id", "status", "x", "y",
            "jumping", "ducking", "obstacles_passed", "jump_count",
        ])?;

        let mut summaries = Writer::from_path(dir.join("frame_summaries.csv"))?;
        summaries.write_record(["epoch", "frame", "alive", "crashed", "game_over"])?;

        let mut rankings = Writer::from_path(dir.join("epoch_rankings.csv"))?;
        rankings.write_record(["epoch", "rank", "agent_id", "obstacles_passed", "frames"])?;

        Ok(Self {
            snapshots,
            summaries,
            rankings,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.epoch.to_string(),
                row.frame.to_string(),
                row.agent_id.to_string(),
                row.status.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                (row.jumping as u8).to_string(),
                (row.ducking as u8).to_string(),
                row.obstacles_passed.to_string(),
                row.jump_count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.epoch.to_string(),
            row.frame.to_string(),
            row.alive.to_string(),
            row.crashed.to_string(),
            (row.game_over as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_ranking(&mut self, rows: &[RankingRow]) -> OutputResult<()> {
        for row in rows {
            self.rankings.write_record(&[
                row.epoch.to_string(),
                row.rank.to_string(),
                row.agent_id.to_string(),
                row.obstacles_passed.to_string(),
                row.frames.to_string(),
            ])?;
        }
        self.rankings.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.rankings.flush()?;
        Ok(())
    }
}
