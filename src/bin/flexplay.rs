use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "flexplay", version)]
struct Cli {
    /// Log engine events to stderr.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the generated level catalog.
    Levels(LevelsArgs),
    /// Print the starter CSS of one level.
    Starter(StarterArgs),
    /// Print the target point for an anchor inside a stage box.
    Target(TargetArgs),
    /// Validate a captured stage/crate snapshot against one level.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct LevelsArgs {
    /// Number of levels to generate.
    #[arg(long, default_value_t = flexplay::CANONICAL_LEVEL_COUNT)]
    count: usize,

    /// Emit the catalog as pretty JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct StarterArgs {
    /// Level id (1-based).
    #[arg(long)]
    level: u32,
}

#[derive(Parser, Debug)]
struct TargetArgs {
    /// Stage box as `x0,y0,x1,y1`.
    #[arg(long, allow_hyphen_values = true)]
    stage: String,

    /// Anchor name, e.g. `top-left`.
    #[arg(long)]
    position: String,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Level id (1-based).
    #[arg(long)]
    level: u32,

    /// Snapshot JSON with `stage` and `crate` elements.
    #[arg(long)]
    snapshot: PathBuf,

    /// Print the full verdict as JSON instead of the status line.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
    match cli.cmd {
        Command::Levels(args) => cmd_levels(args),
        Command::Starter(args) => cmd_starter(args),
        Command::Target(args) => cmd_target(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_levels(args: LevelsArgs) -> anyhow::Result<ExitCode> {
    let catalog = flexplay::LevelCatalog::generate(args.count);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(ExitCode::SUCCESS);
    }
    for level in catalog.levels() {
        println!(
            "{:>3}  {:<13} {:<8} ±{:>2}px  {}",
            level.id, level.position, level.method, level.tolerance, level.description
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_starter(args: StarterArgs) -> anyhow::Result<ExitCode> {
    let catalog = flexplay::LevelCatalog::canonical();
    let level = catalog
        .by_id(args.level)
        .with_context(|| format!("no level with id {}", args.level))?;
    println!("{}", level.starter_css);
    Ok(ExitCode::SUCCESS)
}

fn cmd_target(args: TargetArgs) -> anyhow::Result<ExitCode> {
    let stage = flexplay::parse_rect(&args.stage)?;
    let position: flexplay::Position = args.position.parse()?;
    let p = flexplay::target_point(stage, position);
    println!("{} {}", p.x, p.y);
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    let catalog = flexplay::LevelCatalog::canonical();
    let level = catalog
        .by_id(args.level)
        .with_context(|| format!("no level with id {}", args.level))?;

    let file = File::open(&args.snapshot)
        .with_context(|| format!("open snapshot '{}'", args.snapshot.display()))?;
    let snapshot: flexplay::SurfaceSnapshot = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse snapshot '{}'", args.snapshot.display()))?;

    let Some(result) = flexplay::validate_surface(level, &snapshot) else {
        println!("no verdict");
        return Ok(ExitCode::from(2));
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.message);
    }
    Ok(if result.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
