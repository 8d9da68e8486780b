//! headless: a population of runners trained by nothing but luck.
//!
//! Spawns AGENT_COUNT runners, each driven by its own randomly initialised
//! feed-forward network, and plays EPOCHS rounds against a procedurally
//! generated obstacle stream.  Pass a weights JSON file as the first argument
//! to drive every runner with that one network instead.
//!
//! Output lands in `output/headless/`: per-frame CSVs, per-epoch rankings,
//! the best network of the final epoch, and a `run_summary.json`.

mod field;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rd_brain::{Classifier, FeedForward, NetworkWeights};
use rd_core::{SimConfig, SimRng};
use rd_output::{CsvWriter, PopulationOutputObserver};
use rd_sim::{EpochSummary, PopulationBuilder};

use field::ObstacleField;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:     usize = 64;
const SEED:            u64   = 42;
const EPOCHS:          u32   = 5;
const MAX_FRAMES:      u64   = 60 * 60 * 3; // three minutes of game time
const OUTPUT_INTERVAL: u64   = 30;
const OUTPUT_DIR:      &str  = "output/headless";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== headless: rust_rd runner population ===");
    println!("Agents: {AGENT_COUNT}  |  Epochs: {EPOCHS}  |  Seed: {SEED}");
    println!();

    let config = SimConfig {
        agent_count:            AGENT_COUNT,
        seed:                   SEED,
        max_frames:             MAX_FRAMES,
        output_interval_frames: OUTPUT_INTERVAL,
        ..SimConfig::default()
    };

    if let Some(n) = config.num_threads {
        rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
    }

    // 1. Networks: one loaded from disk for everybody, or one random per agent.
    let weights_path = std::env::args().nth(1).map(PathBuf::from);
    let networks: Vec<Arc<FeedForward>> = match &weights_path {
        Some(path) => {
            let net = NetworkWeights::from_path(path)
                .and_then(NetworkWeights::into_network)
                .with_context(|| format!("loading weights from {}", path.display()))?;
            println!("Loaded network from {}", path.display());
            vec![Arc::new(net)]
        }
        None => {
            let mut rng = SimRng::new(SEED);
            (0..AGENT_COUNT)
                .map(|i| {
                    let mut child = rng.child(i as u64);
                    FeedForward::random_default(&mut child).map(Arc::new)
                })
                .collect::<Result<_, _>>()?
        }
    };

    // 2. Population.
    let builder = PopulationBuilder::new(config);
    let builder = if networks.len() == 1 {
        builder.shared_classifier(networks[0].clone())
    } else {
        builder.classifiers(
            networks.iter().map(|n| n.clone() as Arc<dyn Classifier>).collect(),
        )
    };
    let mut population = builder.build()?;

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut observer = PopulationOutputObserver::new(CsvWriter::new(Path::new(OUTPUT_DIR))?);
    let mut world = ObstacleField::new(SEED);

    // 4. Run.
    let t0 = Instant::now();
    let mut summaries: Vec<EpochSummary> = Vec::with_capacity(EPOCHS as usize);
    for _ in 0..EPOCHS {
        let summary = population.run_epoch(&mut world, &mut observer);
        if let Some(e) = observer.take_error() {
            anyhow::bail!("output error in epoch {}: {e}", summary.epoch);
        }

        println!(
            "Epoch {:>3}: {:>6} frames, final speed {:>5.2}{}",
            summary.epoch,
            summary.frames,
            world.speed(),
            if summary.game_over { "" } else { "  (frame cap)" },
        );
        for (rank, (id, passed)) in summary.ranking.iter().take(3).enumerate() {
            println!("    #{} agent {:>3}  {:>4} obstacles", rank + 1, id.0, passed);
        }
        summaries.push(summary);
    }
    let elapsed = t0.elapsed();
    observer.finish()?;
    println!();
    println!("Completed in {:.2?}", elapsed);

    // 5. Keep the best network of the last epoch.
    let best = summaries.last().and_then(EpochSummary::best);
    if let Some((id, passed)) = best {
        let net = if networks.len() == 1 { &networks[0] } else { &networks[id.index()] };
        let path = Path::new(OUTPUT_DIR).join("best_network.json");
        NetworkWeights::from(net.as_ref()).to_path(&path)?;
        info!(agent = id.0, passed, path = %path.display(), "saved best network");
    }

    let summary = serde_json::json!({
        "agents":  AGENT_COUNT,
        "seed":    SEED,
        "weights": weights_path.as_ref().map(|p| p.display().to_string()),
        "elapsed_secs": elapsed.as_secs_f64(),
        "epochs":  summaries.iter().map(|s| serde_json::json!({
            "epoch":     s.epoch,
            "frames":    s.frames,
            "game_over": s.game_over,
            "best":      s.best().map(|(id, passed)| serde_json::json!({
                "agent_id": id.0,
                "obstacles_passed": passed,
            })),
        })).collect::<Vec<_>>(),
    });
    let file = std::fs::File::create(Path::new(OUTPUT_DIR).join("run_summary.json"))?;
    serde_json::to_writer_pretty(file, &summary)?;

    println!("Output written to {OUTPUT_DIR}/");
    Ok(())
}
