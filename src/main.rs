//! Penguin Dive headless runner
//!
//! Drives the simulation from a scripted or seeded-random button stream,
//! optionally paced to wall-clock time, and prints a JSON run summary.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use penguin_dive::Settings;
use penguin_dive::platform::{FixedStep, InputSource, RandomInput, ScriptedInput};
use penguin_dive::renderer::{Framebuffer, draw_scene};
use penguin_dive::sim::{GameEvent, GamePhase, TickInput, World, tick};

#[derive(Parser, Debug)]
#[command(name = "penguin-dive", about = "Run the Penguin Dive simulation headless")]
struct Args {
    /// JSON settings file (tuning, frame rate, tick budget)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Number of ticks to run (overrides the settings budget)
    #[arg(long)]
    ticks: Option<u64>,

    /// Seed for the random button stream
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Button script instead of random input, e.g. "1100..##"; loops
    #[arg(long)]
    script: Option<String>,

    /// Pace ticks to the target frame rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Write the final frame as raw little-endian RGB565
    #[arg(long)]
    frame_out: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize)]
struct RunSummary {
    ticks: u64,
    final_phase: String,
    score: u32,
    high_score: u32,
    runs: u32,
    pillars_passed: u32,
    crashes: u32,
}

impl RunSummary {
    fn record(&mut self, event: GameEvent) {
        match event {
            GameEvent::Started | GameEvent::Restarted { .. } => self.runs += 1,
            GameEvent::PillarPassed { .. } => self.pillars_passed += 1,
            GameEvent::Crashed { .. } => self.crashes += 1,
        }
    }
}

fn load_settings(args: &Args) -> Result<Settings> {
    let settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    Ok(settings)
}

fn make_input(args: &Args) -> Result<Box<dyn InputSource>> {
    match &args.script {
        Some(pattern) => {
            let Some(script) = ScriptedInput::parse(pattern) else {
                bail!("invalid button script {:?}: use 1/# for pressed, 0/./_ for released", pattern);
            };
            if script.is_empty() {
                bail!("button script is empty");
            }
            Ok(Box::new(script.looping()))
        }
        None => Ok(Box::new(RandomInput::new(args.seed))),
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = load_settings(args)?;
    let budget = args.ticks.unwrap_or(settings.max_ticks);
    let mut input = make_input(args)?;
    let mut world = World::new(&settings.tuning);
    let mut summary = RunSummary::default();

    log::info!(
        "Running {} ticks ({})",
        budget,
        if args.realtime { "realtime" } else { "flat out" }
    );

    let mut clock = FixedStep::new(settings.target_fps);
    let mut last = Instant::now();
    let mut done = 0;
    while done < budget {
        let due = if args.realtime {
            std::thread::sleep(Duration::from_secs_f32(clock.step() / 4.0));
            let now = Instant::now();
            let due = clock.advance((now - last).as_secs_f32());
            last = now;
            due as u64
        } else {
            budget - done
        };

        for _ in 0..due.min(budget - done) {
            let pressed = input.poll();
            let report = tick(&mut world, &TickInput { pressed });
            for event in report.events() {
                summary.record(event);
            }
            done += 1;
        }
    }

    if world.phase() == GamePhase::Playing {
        log::info!("Tick budget spent mid-run at score {}", world.state.score());
    }

    summary.ticks = world.time_ticks;
    summary.final_phase = format!("{:?}", world.phase());
    summary.score = world.state.score();
    summary.high_score = world.state.high_score();

    if let Some(path) = &args.frame_out {
        let mut fb = Framebuffer::default();
        draw_scene(&mut fb, &world);
        std::fs::write(path, fb.to_le_bytes())
            .with_context(|| format!("writing frame to {}", path.display()))?;
        log::info!(
            "Wrote {}x{} RGB565 frame to {}",
            fb.width(),
            fb.height(),
            path.display()
        );
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Penguin Dive (headless) starting...");
    let args = Args::parse();
    run(&args)
}
