use super::toml_config::{LogFormat, TomlConfig};
use crate::domain::model::PlanRequest;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "bizplan.toml";

#[derive(Debug, Clone, Parser)]
#[command(name = "bizplan")]
#[command(about = "Match a profile against a business model catalog and draft a plan")]
pub struct CliConfig {
    /// Path to TOML configuration file (bizplan.toml is used when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the catalog and plan endpoints over HTTP
    Serve(ServeArgs),
    /// Generate a plan from the command line
    Generate(GenerateArgs),
    /// Print the parsed catalog as JSON
    Catalog(CatalogArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Catalog file, overrides catalog.path
    #[arg(long)]
    pub catalog: Option<String>,

    /// Reject malformed catalog lines instead of skipping them
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Listen address, overrides server.bind
    #[arg(long)]
    pub bind: Option<String>,

    /// Log as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[arg(long)]
    pub budget: String,

    /// Comma separated skills
    #[arg(long)]
    pub skills: String,

    /// A few words about yourself (at least 10 characters)
    #[arg(long)]
    pub description: String,

    /// Fetch the catalog from a running server instead of a file
    #[arg(long)]
    pub catalog_url: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the trend series as CSV to this path
    #[arg(long)]
    pub trends_csv: Option<String>,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl GenerateArgs {
    pub fn to_request(&self) -> PlanRequest {
        PlanRequest {
            budget: self.budget.clone(),
            skills: self.skills.clone(),
            description: self.description.clone(),
        }
    }
}

impl CliConfig {
    /// 讀取設定檔並套用命令列覆蓋
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                TomlConfig::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => TomlConfig::default(),
        };

        let catalog = match &self.command {
            Command::Serve(args) => {
                if let Some(bind) = &args.bind {
                    settings.server.bind = bind.clone();
                }
                if args.json_logs {
                    settings.logging.format = LogFormat::Json;
                }
                &args.catalog
            }
            Command::Generate(args) => &args.catalog,
            Command::Catalog(args) => args,
        };

        if let Some(path) = &catalog.catalog {
            settings.catalog.path = path.clone();
        }
        if catalog.strict {
            settings.catalog.strict = true;
        }

        Ok(settings)
    }
}
