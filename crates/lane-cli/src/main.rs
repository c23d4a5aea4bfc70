use lane_core::{Lane, LaneContext, SharedValue};
use lane_pubspec::GetBuildNumberFromPubspec;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let ctx = match LaneContext::from_current_dir() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Cannot determine working directory: {}", e);
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let lane = Lane::new("get_build_number").action(GetBuildNumberFromPubspec::new());

    match lane.run(&ctx) {
        Ok(_) => {
            let key = SharedValue::PubspecBuildNumber;
            if let Some(value) = ctx.get(&key) {
                println!("{key}={value}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
