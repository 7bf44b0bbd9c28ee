use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use persona_avatar::{
    ACCESSORY_TYPES, BatchOpts, HAIR_STYLES, MASK_STYLES, OUTFIT_TYPES, PersonaConfig,
    ThemeRegistry, compose_avatar, compose_batch,
};

#[derive(Parser, Debug)]
#[command(name = "persona-avatar", version)]
struct Cli {
    /// Print composition logs (degradations, timings) to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose one persona into its layered JSON description.
    Compose(ComposeArgs),
    /// Compose a JSON array of personas.
    Batch(BatchArgs),
    /// Print style catalog metadata as JSON.
    Catalog(CatalogArgs),
    /// Print the default persona.
    DefaultConfig,
    /// Strictly validate a persona; exits non-zero when anything would be substituted.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Input persona JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output edge length.
    #[arg(long, default_value_t = 200.0)]
    size: f64,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Input JSON array of personas.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output edge length.
    #[arg(long, default_value_t = 200.0)]
    size: f64,

    /// Compose on a worker pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Only print one category.
    #[arg(long, value_enum)]
    category: Option<CatalogCategory>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input persona JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CatalogCategory {
    Mask,
    Hair,
    Outfit,
    Accessory,
    Theme,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Catalog(args) => cmd_catalog(args),
        Command::DefaultConfig => emit(&PersonaConfig::default().to_json_pretty()?, None),
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let persona = PersonaConfig::from_path(&args.in_path)?;
    let avatar = compose_avatar(&persona, ThemeRegistry::builtin(), args.size);
    for d in &avatar.degradations {
        eprintln!("degraded {}: {}", d.slot, d.detail);
    }
    emit(&avatar.to_json_pretty()?, args.out.as_deref())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let f = std::fs::File::open(&args.in_path)
        .with_context(|| format!("open persona list '{}'", args.in_path.display()))?;
    let personas: Vec<PersonaConfig> = serde_json::from_reader(std::io::BufReader::new(f))
        .with_context(|| format!("parse persona list '{}'", args.in_path.display()))?;

    let avatars = compose_batch(
        &personas,
        ThemeRegistry::builtin(),
        args.size,
        BatchOpts {
            parallel: args.parallel,
            threads: args.threads,
        },
    )?;
    let json = serde_json::to_string_pretty(&avatars).context("serialize composed avatars")?;
    emit(&json, args.out.as_deref())
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let themes: Vec<_> = ThemeRegistry::builtin().iter().collect();
    let value = match args.category {
        Some(CatalogCategory::Mask) => serde_json::to_value(MASK_STYLES)?,
        Some(CatalogCategory::Hair) => serde_json::to_value(HAIR_STYLES)?,
        Some(CatalogCategory::Outfit) => serde_json::to_value(OUTFIT_TYPES)?,
        Some(CatalogCategory::Accessory) => serde_json::to_value(ACCESSORY_TYPES)?,
        Some(CatalogCategory::Theme) => serde_json::to_value(&themes)?,
        None => serde_json::json!({
            "mask": MASK_STYLES,
            "hair": HAIR_STYLES,
            "outfit": OUTFIT_TYPES,
            "accessory": ACCESSORY_TYPES,
            "theme": themes,
        }),
    };
    emit(&serde_json::to_string_pretty(&value)?, None)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let persona = PersonaConfig::from_path(&args.in_path)?;
    persona
        .validate()
        .with_context(|| format!("check '{}'", args.in_path.display()))?;
    eprintln!("ok {}", args.in_path.display());
    Ok(())
}

fn emit(json: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("write json '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
