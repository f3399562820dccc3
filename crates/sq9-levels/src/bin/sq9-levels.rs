//! Square of 9 levels from the command line.
//!
//! Usage: `sq9-levels <price> <reference-angle> [level-count]`
//!
//! Grid size, level count and tolerance defaults come from `SQ9_GRID_SIZE`,
//! `SQ9_LEVEL_COUNT` and `SQ9_TOLERANCE`. Levels are printed as JSON.

use std::env;

use sq9_levels::{Error, LevelCalculator, LevelConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: sq9-levels <price> <reference-angle> [level-count]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sq9_levels=info,sq9_grid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 3 {
        return Err(USAGE.into());
    }

    let price: f64 = parse_arg(&args[0], "price")?;
    let reference_angle: f64 = parse_arg(&args[1], "reference-angle")?;

    let mut config = LevelConfig::from_env()?;
    if let Some(raw) = args.get(2) {
        config.level_count = parse_arg(raw, "level-count")?;
    }

    tracing::debug!(?config, price, reference_angle, "computing levels");

    let calculator = LevelCalculator::new(config)?;
    let levels = calculator.compute(price, reference_angle)?;

    println!("{}", serde_json::to_string_pretty(&levels)?);

    Ok(())
}

fn parse_arg<T>(raw: &str, name: &str) -> Result<T, Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e| Error::Config(format!("invalid {} {:?}: {}\n{}", name, raw, e, USAGE)))
}
