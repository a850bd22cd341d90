//! Headless journey runner: plays seeded Mahomet Trail journeys to their
//! terminal outcome and reports aggregate balance numbers.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use mahomet_game::{Ending, JourneySession, JourneyState};

#[derive(Debug, Parser)]
#[command(name = "mahomet-sim", version)]
#[command(about = "Headless balance simulator for the Mahomet Trail journey engine")]
struct Args {
    /// First seed of the run; journeys use consecutive seeds from here.
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Number of journeys to simulate.
    #[arg(long, default_value_t = 1000)]
    journeys: u64,

    /// Safety bound on steps per journey.
    #[arg(long, default_value_t = 500)]
    max_steps: u32,

    /// Print a per-journey line in addition to the summary.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Default)]
struct Aggregate {
    victories: u64,
    defeats: BTreeMap<String, u64>,
    total_steps: u64,
    total_distance: f64,
    gallery_rewards: u64,
    gallery_runs: u64,
}

impl Aggregate {
    fn record(&mut self, state: &JourneyState) {
        match &state.ending {
            Some(Ending::Victory) => self.victories += 1,
            Some(Ending::Defeat { event_id }) => {
                *self.defeats.entry(event_id.clone()).or_default() += 1;
            }
            None => {}
        }
        self.total_steps += u64::from(state.steps);
        self.total_distance += f64::from(state.distance_traveled);
        if let Some(reward) = state.minigame_reward {
            self.gallery_rewards += u64::from(reward);
            self.gallery_runs += 1;
        }
    }
}

fn run_journey(seed: u64, max_steps: u32) -> Result<JourneyState> {
    let mut session = JourneySession::with_default_data(seed)
        .with_context(|| format!("starting journey for seed {seed}"))?;
    let ending = session.run_to_end(max_steps);
    anyhow::ensure!(
        ending.is_some(),
        "seed {seed} did not terminate within {max_steps} steps"
    );
    Ok(session.into_state())
}

fn describe(state: &JourneyState) -> String {
    match &state.ending {
        Some(Ending::Victory) => format!(
            "{} after {:.1} miles in {} steps",
            "victory".green(),
            state.distance_traveled,
            state.steps
        ),
        Some(Ending::Defeat { event_id }) => format!(
            "{} ({event_id}) at {:.1} miles in {} steps",
            "defeat".red(),
            state.distance_traveled,
            state.steps
        ),
        None => String::from("unterminated"),
    }
}

fn print_summary(args: &Args, aggregate: &Aggregate) {
    let journeys = args.journeys.max(1);
    #[allow(clippy::cast_precision_loss)]
    let journeys_f = journeys as f64;
    #[allow(clippy::cast_precision_loss)]
    let victory_rate = aggregate.victories as f64 / journeys_f * 100.0;

    println!();
    println!("{}", "Mahomet Trail balance summary".bold());
    println!(
        "  journeys: {} (seeds {}..{})",
        journeys,
        args.seed,
        args.seed + journeys - 1
    );
    println!(
        "  victories: {} ({victory_rate:.1}%)",
        aggregate.victories.to_string().green()
    );
    for (cause, count) in &aggregate.defeats {
        println!("  defeats via {}: {}", cause.red(), count);
    }
    #[allow(clippy::cast_precision_loss)]
    {
        println!(
            "  avg steps: {:.1}, avg distance: {:.1} miles",
            aggregate.total_steps as f64 / journeys_f,
            aggregate.total_distance / journeys_f
        );
        if aggregate.gallery_runs > 0 {
            println!(
                "  gallery runs: {}, avg payout: {:.1} snacks",
                aggregate.gallery_runs,
                aggregate.gallery_rewards as f64 / aggregate.gallery_runs as f64
            );
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut aggregate = Aggregate::default();
    for offset in 0..args.journeys {
        let seed = args.seed + offset;
        let state = run_journey(seed, args.max_steps)?;
        if args.verbose {
            println!("seed {seed}: {}", describe(&state));
        }
        aggregate.record(&state);
    }

    print_summary(&args, &aggregate);
    Ok(())
}
