use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use urania::{
    natal_chart, BirthMoment, ChartResponse, HouseSystem, NodeRetrogradePolicy,
    OppositeAngleMethod,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OppositeAngles {
    /// Descendant/IC exactly opposite Ascendant/MC
    OppositePoint,
    /// Descendant/IC at the start of whole-sign houses 7 and 4
    WholeSignHouse,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum NodePolicy {
    FromMotion,
    Always,
    Never,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a whole-sign natal chart as JSON")]
struct Args {
    /// Birth date: YYYY-MM-DD, DD/MM/YYYY or DD-MM-YYYY.
    #[arg(long)]
    date: String,

    /// Local clock time, 24-hour HH:MM.
    #[arg(long)]
    time: String,

    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Place label used for historical timezone lookup ("Adelaide, SA, Australia").
    #[arg(long)]
    place: Option<String>,

    /// Known UTC offset in hours ("9.5", "-5"); skips the timezone lookup.
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<f64>,

    /// Config file (defaults to configs/urania.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Swiss Ephemeris data directory; overrides the config file.
    #[arg(long)]
    ephemeris_path: Option<PathBuf>,

    /// House system for the Ascendant/Midheaven query (name or letter).
    #[arg(long)]
    angle_house_system: Option<String>,

    #[arg(long, value_enum)]
    opposite_angles: Option<OppositeAngles>,

    #[arg(long, value_enum)]
    node_retrograde: Option<NodePolicy>,

    /// Single-line JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut settings = urania_config::load_settings(args.config.as_deref())?;
    if let Some(path) = args.ephemeris_path {
        settings.ephemeris_path = Some(path);
    }
    if let Some(system) = &args.angle_house_system {
        settings.chart.angle_house_system = system
            .parse::<HouseSystem>()
            .with_context(|| format!("Invalid --angle-house-system {system}"))?;
    }
    if let Some(method) = args.opposite_angles {
        settings.chart.opposite_angles = match method {
            OppositeAngles::OppositePoint => OppositeAngleMethod::OppositePoint,
            OppositeAngles::WholeSignHouse => OppositeAngleMethod::WholeSignHouse,
        };
    }
    if let Some(policy) = args.node_retrograde {
        settings.chart.node_retrograde = match policy {
            NodePolicy::FromMotion => NodeRetrogradePolicy::FromMotion,
            NodePolicy::Always => NodeRetrogradePolicy::Always,
            NodePolicy::Never => NodeRetrogradePolicy::Never,
        };
    }

    let mut moment = BirthMoment::parse(
        &args.date,
        &args.time,
        args.lat,
        args.lon,
        args.place.as_deref(),
    )?;
    if let Some(offset) = args.utc_offset {
        moment = moment.with_utc_offset(offset)?;
    }
    log::info!(
        "Computing chart for {} {:02}:{:02} at ({:.4}, {:.4})",
        moment.date(),
        moment.hour(),
        moment.minute(),
        moment.latitude(),
        moment.longitude()
    );

    let chart = natal_chart(&moment, settings.ephemeris_path, settings.chart)?;

    for warning in &chart.warnings {
        log::warn!("{warning}");
    }

    let response = ChartResponse::from(&chart);
    let json = if args.compact {
        response.to_json()
    } else {
        response.to_json_pretty()
    }
    .context("Failed to serialize chart")?;
    println!("{json}");
    Ok(())
}
