//! Interactive figure evaluator.
//!
//! ```text
//! cargo run                        # permissive, 5 decimals
//! cargo run -- --strict            # reject degenerate figures
//! RUST_LOG=figura=debug cargo run  # trace registry activity
//! ```

use clap::Parser;
use figura::driver::Session;
use figura::{EvalParams, Validation};

#[derive(Parser)]
#[command(name = "figura")]
#[command(about = "Build 3D figures from points and report their area and perimeter")]
struct Args {
    /// Reject collinear, coincident or non-rectangular figures
    #[arg(long)]
    strict: bool,

    /// Decimal places in printed results
    #[arg(long, default_value_t = figura::params::DEFAULT_PRECISION)]
    precision: usize,
}

fn main() -> figura::Result<()> {
    // Default: WARN for everything, INFO for figura.
    // Override with RUST_LOG env var (e.g. RUST_LOG=figura=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("figura=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let validation = if args.strict {
        Validation::Strict
    } else {
        Validation::Permissive
    };
    let params = EvalParams::default()
        .with_validation(validation)
        .with_precision(args.precision);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), params);
    session.run()?;
    Ok(())
}
