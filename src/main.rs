mod cli_args;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::debug;
use std::time::Instant;

use cli_args::CommandLineArgs;
use zh_datefmt::{current_timestamp, parse_instant, DateFormatter, Selector, Settings};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let start_time = Instant::now();
    debug!("zh-datefmt v{} starting up...", env!("CARGO_PKG_VERSION"));

    let cli_args = CommandLineArgs::parse_args();

    if cli_args.list_formats {
        for selector in Selector::ALL {
            println!("{}", selector);
        }
        return Ok(());
    }

    let settings = Settings::resolve(cli_args.settings.as_deref())?;
    let format = settings.resolve_format(cli_args.format.as_deref(), cli_args.strict)?;
    let instants = collect_instants(&cli_args.at)?;

    let formatter = DateFormatter::zh_cn();
    for at in &instants {
        println!("{}", formatter.format(at, &format));
    }

    debug!(
        "Formatted {} timestamp(s) in {:.2}ms",
        instants.len(),
        start_time.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}

fn collect_instants(raw: &[String]) -> Result<Vec<DateTime<Local>>> {
    if raw.is_empty() {
        debug!("No --at given, formatting the current time");
        return Ok(vec![current_timestamp()]);
    }

    raw.iter()
        .map(|value| {
            parse_instant(value).with_context(|| format!("Invalid --at value: '{}'", value))
        })
        .collect()
}
