//! # ecs_app
//!
//! Host application for the entity store. Builds a scene of moving entities,
//! drives the registered systems for a fixed number of ticks, and prints
//! where everything ended up.

mod scene;
mod tick;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ecs_core::Manager;
use ecs_system::{MovementSystem, SystemConfig, TickReport};
use scene::MoverSummary;
use tick::{TickConfig, TickLoop};

#[derive(Parser)]
#[command(name = "ecs_app", about = "Run movement ticks over a demo scene")]
struct Args {
    /// Number of ticks to run
    #[arg(short, long, default_value_t = 10)]
    ticks: u64,

    /// Simulated seconds per tick
    #[arg(long, default_value_t = 1.0)]
    dt: f64,

    /// Number of moving entities to spawn (at least one)
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u64).range(1..))]
    entities: u64,

    /// Abort the tick on the first per-entity failure instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RunSummary {
    ticks: u64,
    report: TickReport,
    movers: Vec<MoverSummary>,
}

fn main() -> Result<()> {
    // Initialise structured logging. Logs go to stderr, stdout carries the summary.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ecs_app=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut manager = Manager::new();
    let movers = scene::spawn_movers(&mut manager, args.entities);
    info!(entities = movers.len(), "scene ready");

    let mut movement = SystemConfig::new("movement");
    if args.strict {
        movement = movement.strict();
    }

    let config = TickConfig {
        dt: args.dt,
        max_ticks: args.ticks,
    };
    let mut tick_loop = TickLoop::new(config, manager);
    tick_loop.add_system(MovementSystem::new(movement));
    let report = tick_loop.run()?;

    let summary = RunSummary {
        ticks: tick_loop.tick_id(),
        report,
        movers: scene::summarize(tick_loop.manager(), &movers)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for mover in &summary.movers {
            println!(
                "{}: ({:.3}, {:.3}) distance {:.3}",
                mover.entity, mover.position.x, mover.position.y, mover.distance_from_origin
            );
        }
    }

    info!(
        ticks = summary.ticks,
        processed = summary.report.processed,
        skipped = summary.report.failures.len(),
        "done"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entities_must_be_positive() {
        assert!(Args::try_parse_from(["ecs_app", "--entities", "0"]).is_err());

        let args = Args::try_parse_from(["ecs_app", "--entities", "1"]).unwrap();
        assert_eq!(args.entities, 1);
        assert_eq!(Args::try_parse_from(["ecs_app"]).unwrap().entities, 4);
    }

    #[test]
    fn test_run_summary_json_shape() {
        let summary = RunSummary {
            ticks: 2,
            report: TickReport {
                processed: 3,
                failures: vec![],
            },
            movers: vec![],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ticks": 2,
                "report": { "processed": 3, "failures": [] },
                "movers": []
            })
        );
    }
}
