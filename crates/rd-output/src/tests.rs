//! Integration tests for rd-output.

#[cfg(test)]
mod csv_tests {
    use rd_agent::Status;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, FrameSummaryRow, RankingRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, frame: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            epoch:            1,
            frame,
            agent_id,
            status:           Status::Jumping,
            x:                50.0,
            y:                72.0,
            jumping:          true,
            ducking:          false,
            obstacles_passed: agent_id,
            jump_count:       0,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("frame_summaries.csv").exists());
        assert!(dir.path().join("epoch_rankings.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("agent_snapshots.csv")),
            ["epoch", "frame", "agent_id", "status", "x", "y", "jumping", "ducking", "obstacles_passed", "jump_count"]
        );
        assert_eq!(
            headers(dir.path().join("frame_summaries.csv")),
            ["epoch", "frame", "alive", "crashed", "game_over"]
        );
        assert_eq!(
            headers(dir.path().join("epoch_rankings.csv")),
            ["epoch", "rank", "agent_id", "obstacles_passed", "frames"]
        );
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "5");       // frame
        assert_eq!(&rows[1][2], "1");       // agent_id
        assert_eq!(&rows[0][3], "JUMPING"); // status
        assert_eq!(&rows[0][5], "72");      // y
        assert_eq!(&rows[0][6], "1");       // jumping
    }

    #[test]
    fn csv_summary_and_ranking_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_frame_summary(&FrameSummaryRow { epoch: 2, frame: 9, alive: 0, crashed: 3, game_over: true })
            .unwrap();
        w.write_ranking(&[
            RankingRow { epoch: 2, rank: 1, agent_id: 4, obstacles_passed: 7, frames: 10 },
            RankingRow { epoch: 2, rank: 2, agent_id: 0, obstacles_passed: 5, frames: 10 },
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][3], "3");
        assert_eq!(&rows[0][4], "1");

        let mut rdr = csv::Reader::from_path(dir.path().join("epoch_rankings.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "4");
        assert_eq!(&rows[1][1], "2");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("absent")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use std::sync::Arc;

    use rd_brain::FixedClassifier;
    use rd_core::{Action, Obstacle, ObstacleId, ObstacleKind, SimConfig};
    use rd_sim::{PopulationBuilder, PopulationObserver, World, WorldFrame};
    use tempfile::TempDir;

    use crate::row::{AgentSnapshotRow, FrameSummaryRow, RankingRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, PopulationOutputObserver};

    struct Conveyor {
        obstacles: Vec<Obstacle>,
    }

    impl World for Conveyor {
        fn next_frame(&mut self) -> WorldFrame<'_> {
            self.obstacles[0].x -= 6.0;
            WorldFrame::playing(1000.0 / 60.0, 6.0, &self.obstacles)
        }

        fn reset(&mut self) {
            self.obstacles =
                vec![Obstacle::new(ObstacleId(0), &ObstacleKind::solid(20.0, 35.0), 1, 200.0, 105.0)];
        }
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn integration_csv() {
        let config = SimConfig {
            agent_count:            2,
            seed:                   1,
            output_interval_frames: 5,
            ..SimConfig::default()
        };
        let mut population = PopulationBuilder::new(config)
            .shared_classifier(Arc::new(FixedClassifier(Action::Neutral)))
            .build()
            .unwrap();
        let mut world = Conveyor { obstacles: Vec::new() };

        let dir = tempfile::tempdir().unwrap();
        let mut obs = PopulationOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let summary = population.run_epoch(&mut world, &mut obs);
        assert!(summary.game_over);
        obs.finish().unwrap();

        // Both runners hit the block on frame 18.
        let summaries = records(&dir, "frame_summaries.csv");
        assert_eq!(summaries.len(), 19);
        assert_eq!(&summaries[18][0], "1");
        assert_eq!(&summaries[18][3], "2");
        assert_eq!(&summaries[18][4], "1");

        // output_interval = 5 → frames 0, 5, 10, 15 × 2 agents.
        assert_eq!(records(&dir, "agent_snapshots.csv").len(), 8);

        let rankings = records(&dir, "epoch_rankings.csv");
        assert_eq!(rankings.len(), 2);
        assert_eq!(&rankings[0][2], "0");
        assert_eq!(&rankings[0][4], "19");
    }

    /// Fails every write after the first `ok_writes`.
    struct FlakyWriter {
        ok_writes: usize,
        finished:  bool,
    }

    impl FlakyWriter {
        fn write(&mut self) -> OutputResult<()> {
            if self.ok_writes == 0 {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.ok_writes -= 1;
            Ok(())
        }
    }

    impl OutputWriter for FlakyWriter {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            self.write()
        }
        fn write_frame_summary(&mut self, _row: &FrameSummaryRow) -> OutputResult<()> {
            self.write()
        }
        fn write_ranking(&mut self, _rows: &[RankingRow]) -> OutputResult<()> {
            self.write()
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = PopulationOutputObserver::new(FlakyWriter { ok_writes: 1, finished: false });
        let report = rd_sim::FrameReport::default();
        obs.on_frame_end(&report);
        assert!(obs.take_error().is_none());
        obs.on_frame_end(&report);
        obs.on_frame_end(&report);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn finish_reports_stored_error_and_still_flushes() {
        let mut obs = PopulationOutputObserver::new(FlakyWriter { ok_writes: 0, finished: false });
        obs.on_frame_end(&rd_sim::FrameReport::default());
        assert!(obs.finish().is_err());
        assert!(obs.into_writer().finished);
    }

    #[test]
    fn epoch_number_is_tracked() {
        let mut obs = PopulationOutputObserver::new(FlakyWriter { ok_writes: 10, finished: false });
        obs.on_epoch_start(3);
        obs.on_epoch_end(&rd_sim::EpochSummary {
            epoch:     3,
            frames:    12,
            game_over: true,
            ranking:   vec![(rd_core::AgentId(0), 4)],
        });
        assert!(obs.finish().is_ok());
    }
}
