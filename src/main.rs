use bizplan::app::server;
use bizplan::config::{CliConfig, Command, GenerateArgs, OutputFormat};
use bizplan::core::render::render_text;
use bizplan::core::trends::trends_to_csv;
use bizplan::core::{CatalogSource, ConfigProvider, Storage};
use bizplan::utils::error::{ErrorSeverity, PlannerError};
use bizplan::utils::{logger, validation::Validate};
use bizplan::{FileCatalogSource, HttpCatalogSource, LocalStorage, PlanEngine, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    match &cli.command {
        Command::Serve(_) => logger::init_logger(settings.logging.format, cli.verbose),
        _ => logger::init_cli_logger(cli.verbose),
    }

    tracing::info!("Starting bizplan");
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", settings);
    }

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let outcome = match &cli.command {
        Command::Serve(_) => server::serve(&settings).await,
        Command::Generate(args) => run_generate(&settings, args).await,
        Command::Catalog(_) => run_catalog(&settings).await,
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    Ok(())
}

fn exit_code(e: &PlannerError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn file_source(settings: &TomlConfig) -> FileCatalogSource<LocalStorage> {
    FileCatalogSource::new(
        LocalStorage::default(),
        settings.catalog_path(),
        settings.strict_catalog(),
    )
}

async fn run_generate(settings: &TomlConfig, args: &GenerateArgs) -> bizplan::Result<()> {
    let report = match &args.catalog_url {
        Some(url) => {
            bizplan::utils::validation::validate_url("catalog_url", url)?;
            generate_with(HttpCatalogSource::new(url.clone()), args).await?
        }
        None => generate_with(file_source(settings), args).await?,
    };

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(path) = &args.trends_csv {
        let csv = trends_to_csv(&report.market_trends)?;
        LocalStorage::default().write_file(path, csv.as_bytes()).await?;
        tracing::info!("📁 Trend series saved to: {}", path);
    }

    Ok(())
}

async fn generate_with<C: CatalogSource>(
    source: C,
    args: &GenerateArgs,
) -> bizplan::Result<bizplan::core::PlanReport> {
    let engine = PlanEngine::load(source).await?;
    engine.generate(&args.to_request())
}

async fn run_catalog(settings: &TomlConfig) -> bizplan::Result<()> {
    let models = file_source(settings).load().await?;
    println!("{}", serde_json::to_string_pretty(&models)?);
    Ok(())
}
