// Drive unit on simulated motors: accepts the controller and applies
// every decoded wheel-speed line. Run with RUST_LOG=debug to watch the
// per-cycle commands.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use omnibase_teleop::config::DEFAULT_ADDR;
use omnibase_teleop::drive;
use omnibase_teleop::link::{CommandListener, LinkError};
use omnibase_teleop::sim::SimMotor;

#[derive(Parser)]
struct Args {
    /// Address to listen on for the controller
    #[arg(long, default_value = DEFAULT_ADDR)]
    listen: String,
}

#[tokio::main]
async fn main() {
    // Setup logging (set RUST_LOG=info or debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("Drive unit error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = CommandListener::bind(&args.listen).await?;
    info!("Listening on {}", listener.local_addr()?);

    let receiver = listener.accept().await?;
    let mut motors = [SimMotor::default(); 3];
    match drive::run(receiver, &mut motors).await {
        Err(LinkError::Closed) => {
            info!("Controller disconnected");
            Ok(())
        }
        other => other.map_err(Into::into),
    }
}
