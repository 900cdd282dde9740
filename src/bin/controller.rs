// Joystick controller with simulated axes fed from the keyboard:
// A/D rotate, arrow keys translate, Space recenters, Q quits.

use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::info;
use tracing_subscriber::EnvFilter;

use omnibase_teleop::config::DEFAULT_ADDR;
use omnibase_teleop::controller::{self, Controller};
use omnibase_teleop::link::CommandSender;
use omnibase_teleop::motion::axis::calibrate_all;
use omnibase_teleop::sim::{SharedAxis, SimAxis};

#[derive(Parser)]
struct Args {
    /// Drive-unit address to connect to
    #[arg(long, default_value = DEFAULT_ADDR)]
    addr: String,

    /// Simulated axis travel in degrees on each side of the start position
    #[arg(long, default_value_t = 450)]
    travel: i32,

    /// Degrees each key press turns an axis
    #[arg(long, default_value_t = 45)]
    step: i32,
}

#[tokio::main]
async fn main() {
    // Setup logging (set RUST_LOG=info or debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("Controller error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let angular = SharedAxis::new(SimAxis::with_travel(-args.travel, args.travel));
    let x = SharedAxis::new(SimAxis::with_travel(-args.travel, args.travel));
    let y = SharedAxis::new(SimAxis::with_travel(-args.travel, args.travel));
    let handles = (angular.clone(), x.clone(), y.clone());

    let controller = Controller::new(calibrate_all(angular, x, y)?);
    let sender = CommandSender::connect(&args.addr).await?;

    info!("Controls: A/D=rotate, arrows=drive, Space=center, Q=quit");
    enable_raw_mode()?;

    // Keyboard thread nudges the shared axes while the loop reads them
    let keys =
        tokio::task::spawn_blocking(move || keyboard_loop(handles.0, handles.1, handles.2, args.step));

    let result = tokio::select! {
        res = controller::run(controller, sender) => res.map_err(Into::into),
        _ = keys => {
            info!("Quit");
            Ok(())
        }
    };

    disable_raw_mode()?;
    result
}

fn keyboard_loop(angular: SharedAxis, x: SharedAxis, y: SharedAxis, step: i32) {
    loop {
        if !event::poll(Duration::from_millis(50)).unwrap_or(false) {
            continue;
        }
        let Ok(Event::Key(KeyEvent { code, kind, .. })) = event::read() else {
            continue;
        };
        if kind != KeyEventKind::Press && kind != KeyEventKind::Repeat {
            continue;
        }

        match code {
            KeyCode::Char('a') => angular.nudge(-step),
            KeyCode::Char('d') => angular.nudge(step),
            KeyCode::Up => y.nudge(step),
            KeyCode::Down => y.nudge(-step),
            KeyCode::Right => x.nudge(step),
            KeyCode::Left => x.nudge(-step),
            KeyCode::Char(' ') => {
                angular.center();
                x.center();
                y.center();
            }
            KeyCode::Char('q') | KeyCode::Esc => break,
            _ => {}
        }
    }
}
