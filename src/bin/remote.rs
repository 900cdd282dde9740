// Remote-control preset mode on simulated motors.
// U/I are the front buttons, J/K the back ones; chords combine
// (U+I forward, J+K backward, U+J rotate left, I+K rotate right).

use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tokio::time::interval;
use tracing::info;
use tracing_subscriber::EnvFilter;

use omnibase_teleop::config::LOOP_HZ;
use omnibase_teleop::motor;
use omnibase_teleop::remote::{Buttons, Maneuver};
use omnibase_teleop::sim::SimMotor;

#[derive(Parser)]
struct Args {
    /// How long a key press counts as held, in milliseconds
    #[arg(long, default_value_t = 200)]
    hold_ms: u64,
}

/// Most recent press time per button; a button is "held" while its
/// press is younger than the hold window. Lets key repeat stand in for
/// the remote's level-triggered buttons.
#[derive(Default)]
struct Held {
    left_up: Option<Instant>,
    right_up: Option<Instant>,
    left_down: Option<Instant>,
    right_down: Option<Instant>,
}

impl Held {
    fn snapshot(&self, hold: Duration) -> Buttons {
        let active = |t: &Option<Instant>| t.is_some_and(|t| t.elapsed() <= hold);
        Buttons {
            left_up: active(&self.left_up),
            right_up: active(&self.right_up),
            left_down: active(&self.left_down),
            right_down: active(&self.right_down),
        }
    }
}

#[tokio::main]
async fn main() {
    // Setup logging (set RUST_LOG=info or debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("Remote error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Controls: U/I=front buttons, J/K=back buttons, Q=quit");
    enable_raw_mode()?;
    let result = poll_loop(Duration::from_millis(args.hold_ms)).await;
    disable_raw_mode()?;
    result
}

async fn poll_loop(hold: Duration) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut motors = [SimMotor::default(); 3];
    let mut held = Held::default();
    let mut last = Maneuver::Stop;
    let mut tick = interval(Duration::from_millis(1000 / LOOP_HZ));

    'poll: loop {
        // Drain pending key events without blocking the tick
        while event::poll(Duration::ZERO)? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind != KeyEventKind::Press && kind != KeyEventKind::Repeat {
                    continue;
                }
                let now = Instant::now();
                match code {
                    KeyCode::Char('u') => held.left_up = Some(now),
                    KeyCode::Char('i') => held.right_up = Some(now),
                    KeyCode::Char('j') => held.left_down = Some(now),
                    KeyCode::Char('k') => held.right_down = Some(now),
                    KeyCode::Char('q') | KeyCode::Esc => break 'poll,
                    _ => {}
                }
            }
        }

        let maneuver = Maneuver::from_buttons(held.snapshot(hold));
        if maneuver != last {
            info!(?maneuver, "Maneuver");
            last = maneuver;
        }
        motor::apply(&mut motors, maneuver.wheel_speeds());

        tick.tick().await;
    }

    motor::apply(&mut motors, Maneuver::Stop.wheel_speeds());
    Ok(())
}
