//! `ptu` - derive actor sheets from the command line.
//!
//! ```bash
//! # Derive a trainer exported from the host and print the sheet
//! ptu derive actors/ace.json --lang lang/en.json
//!
//! # Same, as JSON with every derived field
//! ptu derive actors/ace.json --format json
//!
//! # Print the default creature record
//! ptu defaults creature
//! ```

mod config;
mod logging;
mod render;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use config::CliConfig;
use ptu_content::{
    ActorLoader, ActorSchema, ConfigLoader, ContentFactory, LocaleLoader, LocaleTable,
    TemplateManifest,
};
use ptu_core::{ActorKind, DerivationEngine, SystemConfig};

/// Derive PTU actor sheets
#[derive(Parser)]
#[command(name = "ptu")]
#[command(about = "Derive PTU trainer and creature sheets", long_about = None)]
#[command(version)]
struct Cli {
    /// Log derivation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load an actor record, derive it, and print the result
    Derive(DeriveArgs),

    /// Print the default record of an actor type as JSON
    Defaults {
        #[arg(value_enum)]
        kind: KindArg,
    },

    /// List the sheet templates the host should preload
    Templates,
}

#[derive(clap::Args)]
struct DeriveArgs {
    /// Actor file (.json or .toml)
    file: PathBuf,

    /// Data directory with config.toml and lang/ [env: PTU_DATA_DIR]
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Language JSON file [env: PTU_LANG_FILE]
    #[arg(long)]
    lang: Option<PathBuf>,

    /// System config TOML file [env: PTU_CONFIG_FILE]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Trainer,
    Creature,
}

impl From<KindArg> for ActorKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Trainer => ActorKind::Trainer,
            KindArg::Creature => ActorKind::Creature,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let env_config = CliConfig::from_env();

    match cli.command {
        Command::Derive(args) => run_derive(args, env_config),
        Command::Defaults { kind } => run_defaults(kind.into()),
        Command::Templates => {
            for path in TemplateManifest.paths() {
                println!("{path}");
            }
            Ok(())
        }
    }
}

fn run_derive(args: DeriveArgs, env_config: CliConfig) -> Result<()> {
    let data_dir = args.data_dir.or(env_config.data_dir);
    let factory = data_dir.map(|dir| {
        let factory = ContentFactory::new(dir);
        match env_config.language {
            Some(language) => factory.with_language(language),
            None => factory,
        }
    });

    let system_config = match args.config.or(env_config.config_file) {
        Some(path) => load_config(&path)?,
        None => match &factory {
            Some(factory) => factory.load_config()?,
            None => SystemConfig::default(),
        },
    };

    let locale = match args.lang.or(env_config.lang_file) {
        Some(path) => LocaleLoader::load(&path)?,
        None => match &factory {
            Some(factory) => factory.load_locale()?,
            None => LocaleTable::new(),
        },
    };
    tracing::info!(entries = locale.len(), "Language table ready");

    let record = ActorLoader::load(&args.file)?;
    let engine = DerivationEngine::new(&system_config, &locale);
    let mut actor = record.actor;
    engine.derive(&mut actor);

    match args.format {
        Format::Text => {
            let sheet = render::render_sheet(&record.name, &actor, &locale)?;
            print!("{sheet}");
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&actor)?),
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<SystemConfig> {
    tracing::debug!("Loading system config from {}", path.display());
    ConfigLoader::load(path)
}

fn run_defaults(kind: ActorKind) -> Result<()> {
    let schema = ActorSchema::new(kind)?;
    println!("{}", serde_json::to_string_pretty(schema.defaults())?);
    Ok(())
}
