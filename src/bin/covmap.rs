use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use covmap_rs::{Client, MapSettings, Snapshot};
use covmap_rs::{config, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "covmap",
    version,
    about = "Fetch live COVID-19 statistics and export map-ready GeoJSON"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch data (and optionally save an export and print aggregates).
    Get(GetArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Geojson,
    Json,
    Csv,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (geojson, json or csv). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Initial map center latitude passed through to the rendering layer.
    #[arg(long, default_value_t = config::DEFAULT_CENTER.0)]
    lat: f64,
    /// Initial map center longitude.
    #[arg(long, default_value_t = config::DEFAULT_CENTER.1)]
    lng: f64,
    /// Initial map zoom level.
    #[arg(long, default_value_t = config::DEFAULT_ZOOM)]
    zoom: u32,
    /// Print worldwide aggregate statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => cmd_get(args),
    }
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let client = Client::default();
    let settings = MapSettings {
        center_lat: args.lat,
        center_lng: args.lng,
        zoom: args.zoom,
    };

    // One attempt per endpoint; a failed fetch degrades to an empty map or
    // placeholder aggregates instead of aborting the command.
    let countries = match client.fetch_countries() {
        Ok(list) => list,
        Err(err) => {
            log::warn!("country fetch failed: {err}");
            Vec::new()
        }
    };
    let global = match client.fetch_global() {
        Ok(stats) => Some(stats),
        Err(err) => {
            log::warn!("aggregate fetch failed: {err}");
            None
        }
    };
    let snapshot = Snapshot::assemble(settings, &countries, global.as_ref());

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Geojson) => "geojson",
            Some(OutFormat::Json) => "json",
            Some(OutFormat::Csv) => "csv",
            None => path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("geojson"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "geojson" => storage::save_geojson(&snapshot.features, path)?,
            "json" => storage::save_json(&snapshot, path)?,
            "csv" => storage::save_csv(&countries, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!(
            "Saved {} markers to {}",
            snapshot.features.features.len(),
            path.display()
        );
    }

    if args.stats {
        for entry in &snapshot.aggregates {
            println!(
                "{}: {}  ({} per 1M)",
                entry.metric.title(),
                entry.primary_value,
                entry.secondary_value
            );
        }
    }

    Ok(())
}
