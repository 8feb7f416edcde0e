//! autopilot: headless SCRAPLINE session driver and balance probe.
//!
//! Usage:
//!   autopilot run --seed 7 --realtime
//!   autopilot sweep --seeds 50 --start 1

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use scrapline_core::constants::FRAME_RATE;
use scrapline_core::enums::{EnemyKind, SessionOutcome, SessionPhase, ShotOwner};
use scrapline_core::events::SessionEvent;
use scrapline_core::input::FrameInput;
use scrapline_core::state::FrameSnapshot;
use scrapline_sim::engine::{SessionConfig, SessionEngine};

/// Wall-clock duration of one frame when pacing in real time.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Default cap: five simulated minutes.
const DEFAULT_FRAME_CAP: u64 = 36_000;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "sweep" => cmd_sweep(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "autopilot: headless SCRAPLINE session driver\n\
         \n\
         Commands:\n\
         \n\
         run       Play one session with the built-in pilot\n\
         \n\
           --seed <N>           Session seed (default: 42)\n\
           --frames <N>         Frame cap (default: 36000 = 5 minutes)\n\
           --realtime           Pace frames at 120 Hz wall clock\n\
           --snapshot-out <path> Write the final frame snapshot as JSON\n\
         \n\
         sweep     Play many seeds back to back and summarize outcomes\n\
         \n\
           --seeds <N>          Number of seeds to play (default: 20)\n\
           --start <N>          First seed (default: 1)\n\
           --frames <N>         Frame cap per session (default: 36000)\n\
         \n\
         Examples:\n\
         \n\
           autopilot run --seed 7 --realtime\n\
           autopilot sweep --seeds 100 --start 1000\n"
    );
}

fn parse_u64(args: &[String], flag: &str, default: u64) -> u64 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u64>() {
                return n;
            }
            eprintln!("Error: {flag} expects a number, got '{}'", args[i + 1]);
            process::exit(1);
        }
    }
    default
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

// --- Pilot policy ---

/// Decide one frame of input from the last snapshot.
///
/// The pilot holds its ground and holds fire down, confirms round breaks
/// immediately, and jumps when a shot or a walker is about to arrive.
/// It is deliberately fallible: it measures the tuning, it does not beat it.
fn pilot_input(snap: &FrameSnapshot) -> FrameInput {
    if matches!(snap.phase, SessionPhase::RoundBreak { .. }) {
        return FrameInput {
            confirm: true,
            ..FrameInput::default()
        };
    }

    let px = snap.player.position.x;
    let incoming_shot = snap.shots.iter().any(|shot| {
        shot.owner == ShotOwner::Enemy
            && shot.position.x > px + 70.0
            && shot.position.x < px + 130.0
    });
    let incoming_walker = snap.enemies.iter().any(|enemy| {
        enemy.kind == EnemyKind::Walker
            && enemy.position.x > px + 70.0
            && enemy.position.x < px + 150.0
    });

    FrameInput {
        fire: true,
        jump: snap.player.grounded && (incoming_shot || incoming_walker),
        ..FrameInput::default()
    }
}

// --- Session driver ---

struct SessionReport {
    outcome: &'static str,
    round_reached: u8,
    frames: u64,
    score: u32,
    kills: u32,
    shots_fired: u32,
    lives_left: u32,
    final_snapshot: FrameSnapshot,
}

fn play_session(seed: u64, frame_cap: u64, realtime: bool, verbose: bool) -> SessionReport {
    let mut engine = SessionEngine::new(SessionConfig { seed });
    let mut next_frame_time = Instant::now();
    let mut last = FrameSnapshot::default();
    let mut round_reached = 1u8;

    loop {
        let input = pilot_input(&last);
        last = engine.tick(input);

        if let SessionPhase::Playing { round } = last.phase {
            round_reached = round.number();
        }

        if verbose {
            for event in &last.events {
                report_event(event, last.time.elapsed_ms);
            }
        }

        if last.phase.is_terminal() || last.time.frame >= frame_cap {
            break;
        }

        if realtime {
            next_frame_time += FRAME_DURATION;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > FRAME_DURATION * 2 {
                // Too far behind — reset to avoid a catch-up spiral
                next_frame_time = now;
            }
        }
    }

    let outcome = match last.phase {
        SessionPhase::Victory => "victory",
        SessionPhase::GameOver => "defeat",
        _ => "timeout",
    };

    SessionReport {
        outcome,
        round_reached,
        frames: last.time.frame,
        score: last.hud.score,
        kills: engine.stats().kills,
        shots_fired: engine.stats().shots_fired,
        lives_left: last.hud.hearts,
        final_snapshot: last,
    }
}

/// Print milestone events with a virtual-clock timestamp. Per-frame noise
/// (individual shots and walker kills) is left out.
fn report_event(event: &SessionEvent, elapsed_ms: f64) {
    let secs = elapsed_ms / 1000.0;
    match event {
        SessionEvent::RoundCleared { round } => {
            eprintln!("[{secs:6.2}s] round {} cleared", round.number());
        }
        SessionEvent::RoundStarted { round } => {
            eprintln!("[{secs:6.2}s] round {} started", round.number());
        }
        SessionEvent::BossSpawned => {
            eprintln!("[{secs:6.2}s] boss inbound");
        }
        SessionEvent::BossHit { hit_points_left } => {
            eprintln!("[{secs:6.2}s] boss hit, {hit_points_left} hp left");
        }
        SessionEvent::BossDown => {
            eprintln!("[{secs:6.2}s] boss down");
        }
        SessionEvent::PlayerHit { lives_left } => {
            eprintln!("[{secs:6.2}s] player hit, {lives_left} lives left");
        }
        SessionEvent::SessionEnded { outcome } => match outcome {
            SessionOutcome::Victory => eprintln!("[{secs:6.2}s] session won"),
            SessionOutcome::Defeat => eprintln!("[{secs:6.2}s] session lost"),
        },
        _ => {}
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let seed = parse_u64(args, "--seed", 42);
    let frame_cap = parse_u64(args, "--frames", DEFAULT_FRAME_CAP);
    let realtime = has_flag(args, "--realtime");
    let snapshot_out = parse_path(args, "--snapshot-out");

    eprintln!("Playing seed {seed} (cap {frame_cap} frames)...");
    let report = play_session(seed, frame_cap, realtime, true);

    eprintln!();
    eprintln!("Session over: {}", report.outcome);
    eprintln!(
        "  round {} reached, {} frames ({:.1}s), score {}, kills {}, shots fired {}, lives left {}",
        report.round_reached,
        report.frames,
        report.frames as f64 / FRAME_RATE as f64,
        report.score,
        report.kills,
        report.shots_fired,
        report.lives_left,
    );

    if let Some(path) = snapshot_out {
        let json = match serde_json::to_string_pretty(&report.final_snapshot) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        };
        match std::fs::write(&path, json) {
            Ok(()) => eprintln!("Final snapshot written to {}", path.display()),
            Err(e) => {
                eprintln!("Error writing {}: {e}", path.display());
                process::exit(1);
            }
        }
    }
}

// --- Sweep command ---

fn cmd_sweep(args: &[String]) {
    let count = parse_u64(args, "--seeds", 20);
    let start = parse_u64(args, "--start", 1);
    let frame_cap = parse_u64(args, "--frames", DEFAULT_FRAME_CAP);

    if count == 0 {
        eprintln!("Error: --seeds must be at least 1");
        process::exit(1);
    }

    eprintln!("Sweeping {count} seed(s) from {start} (cap {frame_cap} frames per session)...");
    eprintln!();

    let mut victories = 0u64;
    let mut defeats = 0u64;
    let mut timeouts = 0u64;
    let mut total_score = 0u64;
    let mut total_frames = 0u64;

    for seed in start..start + count {
        let report = play_session(seed, frame_cap, false, false);
        match report.outcome {
            "victory" => victories += 1,
            "defeat" => defeats += 1,
            _ => timeouts += 1,
        }
        total_score += u64::from(report.score);
        total_frames += report.frames;

        eprintln!(
            "  seed {seed:>6}  {:<8} round {}  {:>7} frames  score {:>3}  kills {:>3}  lives {}",
            report.outcome,
            report.round_reached,
            report.frames,
            report.score,
            report.kills,
            report.lives_left,
        );
    }

    eprintln!();
    eprintln!("{victories} victories, {defeats} defeats, {timeouts} timeouts over {count} session(s)");
    eprintln!(
        "Average score {:.1}, average length {:.1}s",
        total_score as f64 / count as f64,
        total_frames as f64 / count as f64 / FRAME_RATE as f64,
    );
}
