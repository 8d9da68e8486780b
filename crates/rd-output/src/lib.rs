//! `rd-output` — simulation output writers for the rust_rd runner.
//!
//! | Writer      | Files created                                                        |
//! |-------------|----------------------------------------------------------------------|
//! | `CsvWriter` | `agent_snapshots.csv`, `frame_summaries.csv`, `epoch_rankings.csv`   |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`PopulationOutputObserver`], which implements
//! `rd_sim::PopulationObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rd_output::{CsvWriter, PopulationOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = PopulationOutputObserver::new(writer);
//! population.run_epoch(&mut world, &mut obs);
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PopulationOutputObserver;
pub use row::{AgentSnapshotRow, FrameSummaryRow, RankingRow};
pub use writer::OutputWriter;
