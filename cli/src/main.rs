//! Command-line front end for the optical setup planner.
//!
//! Resolves catalog records by name, runs the calculation engine, and
//! prints a formatted report with any warnings. The process exit code is 2
//! when the configuration is physically invalid (error status), 0 otherwise.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use optics::calc;
use optics::catalog;
use optics::config::{CalculationResult, Severity};
use optics::lens::Lens;
use optics::sensor::Sensor;
use optics::target::Target;
use optics::units;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no sensor matching `{0}` in the catalog")]
    UnknownSensor(String),
    #[error("no lens matching `{0}` in the catalog")]
    UnknownLens(String),
    #[error("no target matching `{0}` in the catalog")]
    UnknownTarget(String),
    #[error("aperture f/{aperture} is outside the lens range f/{min}\u{2013}f/{max}")]
    ApertureOutOfRange { aperture: f64, min: f64, max: f64 },
    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "optics-cli", about = "Machine-vision optical setup planner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute and print a report for a sensor/lens/target setup.
    Report(ReportArgs),
    /// List built-in catalog records.
    List(ListArgs),
    /// Print the f-stops usable by a lens.
    Fstops {
        /// Lens name (case-insensitive substring match).
        lens: String,
    },
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Sensor name (case-insensitive substring match).
    #[arg(long, default_value = "IMX250")]
    sensor: String,

    /// Lens name (case-insensitive substring match).
    #[arg(long, default_value = "M112FM25")]
    lens: String,

    /// Target name (case-insensitive substring match).
    #[arg(long, default_value = "48-Well")]
    target: String,

    /// Working distance in millimeters (object to lens front).
    #[arg(long, default_value_t = 300.0)]
    distance: f64,

    /// Aperture as an f-number.
    #[arg(long, default_value_t = 4.0)]
    aperture: f64,
}

#[derive(Args, Debug)]
struct ListArgs {
    #[command(subcommand)]
    kind: ListKind,

    /// Emit the records as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum ListKind {
    Sensors,
    Lenses,
    Targets,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    match cli.command {
        Command::Report(args) => report(&args),
        Command::List(args) => {
            list(&args)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Fstops { lens } => {
            fstops(&lens)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn find_by_name<'a, T>(items: &'a [T], name: &str, get: impl Fn(&T) -> &str) -> Option<&'a T> {
    let needle = name.to_lowercase();
    items.iter().find(|item| get(item).to_lowercase().contains(&needle))
}

fn resolve(args: &ReportArgs) -> Result<(Sensor, Lens, Target), CliError> {
    let sensors = catalog::default_sensors();
    let lenses = catalog::default_lenses();
    let targets = catalog::default_targets();

    let sensor = find_by_name(&sensors, &args.sensor, |s| &s.name)
        .ok_or_else(|| CliError::UnknownSensor(args.sensor.clone()))?;
    let lens = find_by_name(&lenses, &args.lens, |l| &l.name)
        .ok_or_else(|| CliError::UnknownLens(args.lens.clone()))?;
    let target = find_by_name(&targets, &args.target, |t| &t.name)
        .ok_or_else(|| CliError::UnknownTarget(args.target.clone()))?;

    Ok((sensor.clone(), lens.clone(), target.clone()))
}

fn report(args: &ReportArgs) -> Result<ExitCode, CliError> {
    let (sensor, lens, target) = resolve(args)?;

    if args.aperture < lens.aperture_min || args.aperture > lens.aperture_max {
        return Err(CliError::ApertureOutOfRange {
            aperture: args.aperture,
            min: lens.aperture_min,
            max: lens.aperture_max,
        });
    }

    tracing::debug!(sensor = %sensor.name, lens = %lens.name, target = %target.name, "computing report");
    let result = calc::evaluate(&sensor, &lens, &target, args.distance, args.aperture);
    print_report(&sensor, &lens, &target, args, &result);

    match result.status() {
        Some(Severity::Error) => Ok(ExitCode::from(2)),
        _ => Ok(ExitCode::SUCCESS),
    }
}

fn print_report(sensor: &Sensor, lens: &Lens, target: &Target, args: &ReportArgs, result: &CalculationResult) {
    println!("Setup");
    println!(
        "  Sensor             {} ({}, {} MP, {} µm, {})",
        sensor.name,
        sensor.sensor_size_inch,
        sensor.resolution_mp,
        sensor.pixel_size_micron,
        sensor.aspect_ratio_label
    );
    println!("  Lens               {}", lens.name);
    println!(
        "  Target             {} ({} × {} × {} mm)",
        target.name, target.width_mm, target.height_mm, target.depth_mm
    );
    println!("  Working distance   {}", units::format_mm(args.distance, 1));
    println!("  Aperture           {}", units::format_aperture(args.aperture));
    println!();
    println!("Geometry");
    println!("  Magnification      {}", units::format_ratio(result.magnification, 4));
    println!("  Image distance     {}", units::format_mm(result.image_distance_mm, 1));
    println!(
        "  FOV (H × V)        {} × {}",
        units::format_mm(result.fov_horizontal_mm, 1),
        units::format_mm(result.fov_vertical_mm, 1)
    );
    println!("  FOV diagonal       {}", units::format_mm(result.fov_diagonal_mm, 1));
    println!();
    println!("Resolution");
    println!(
        "  Pixel density      {} × {}",
        units::format_px_per_mm(result.pixels_per_mm_h, 1),
        units::format_px_per_mm(result.pixels_per_mm_v, 1)
    );
    println!("  Object resolution  {} /px", units::format_mm(result.object_resolution_mm_per_px, 4));
    println!();
    println!("Depth of field");
    println!("  Near               {}", units::format_mm(result.dof_near_mm, 1));
    println!("  Far                {}", units::format_mm(result.dof_far_mm, 1));
    println!("  Total              {}", units::format_mm(result.dof_total_mm, 1));
    println!();
    println!("Angles");
    println!(
        "  Half angle (H/V/D) {} / {} / {}",
        units::format_deg(result.half_angle_horizontal_deg, 1),
        units::format_deg(result.half_angle_vertical_deg, 1),
        units::format_deg(result.half_angle_diagonal_deg, 1)
    );
    println!("  Effective aperture {}", units::format_aperture(result.effective_aperture));

    if result.warnings.is_empty() {
        println!();
        println!("No warnings.");
    } else {
        println!();
        println!("Warnings");
        for warning in &result.warnings {
            let label = match warning.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Info => "info",
            };
            println!("  [{label}] {}: {}", warning.code, warning.message);
        }
    }
}

fn list(args: &ListArgs) -> Result<(), CliError> {
    match args.kind {
        ListKind::Sensors => {
            let sensors = catalog::default_sensors();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&sensors)?);
                return Ok(());
            }
            for s in &sensors {
                println!(
                    "{}  {} MP, {} µm, {} diagonal, {}",
                    s.name,
                    s.resolution_mp,
                    s.pixel_size_micron,
                    units::format_mm(s.sensor_diagonal_mm, 1),
                    s.aspect_ratio_label
                );
            }
        }
        ListKind::Lenses => {
            let lenses = catalog::default_lenses();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&lenses)?);
                return Ok(());
            }
            for l in &lenses {
                println!(
                    "{}  {} focal, {}\u{2013}{}, min WD {}, image circle {}",
                    l.name,
                    units::format_mm(l.focal_length_mm, 0),
                    units::format_aperture(l.aperture_min),
                    units::format_aperture(l.aperture_max),
                    units::format_mm(l.min_working_distance_mm, 0),
                    units::format_mm(l.max_image_circle_mm, 1)
                );
            }
        }
        ListKind::Targets => {
            let targets = catalog::default_targets();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&targets)?);
                return Ok(());
            }
            for t in &targets {
                println!(
                    "{}  {} × {} × {} mm",
                    t.name, t.width_mm, t.height_mm, t.depth_mm
                );
            }
        }
    }
    Ok(())
}

fn fstops(name: &str) -> Result<(), CliError> {
    let lenses = catalog::default_lenses();
    let lens = find_by_name(&lenses, name, |l| &l.name)
        .ok_or_else(|| CliError::UnknownLens(name.to_string()))?;
    let stops: Vec<String> = units::available_f_stops(lens.aperture_min, lens.aperture_max)
        .into_iter()
        .map(units::format_aperture)
        .collect();
    println!("{}: {}", lens.name, stops.join(", "));
    Ok(())
}
