use clap::Parser;
use rainwater_engine::core::ConfigProvider;
use rainwater_engine::utils::error::{ErrorSeverity, HarvestError};
use rainwater_engine::utils::{logger, validation::Validate};
use rainwater_engine::{CalculationContext, HarvestEngine, LocalStorage, ReportWriter, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-harvest")]
#[command(about = "Rainwater harvesting calculator driven by a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "harvest.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Validate the configuration and print the forecast without writing results
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    let verbose = args.verbose || config.verbose();
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting TOML-based harvest calculation");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    let context = CalculationContext::now()
        .with_current_level(config.current_level())
        .with_leak_threshold(config.leak_threshold());

    let outcome = if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No results will be written");
        perform_dry_run(&config, &context)
    } else {
        run(&config, &context)
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Harvest calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(config: &TomlConfig, context: &CalculationContext) -> Result<(), HarvestError> {
    let engine = HarvestEngine::new(config.forecast_provider(context.today));
    let results = engine.run(&config.system_inputs(), context)?;

    let storage = LocalStorage::new(config.output_path().to_string());
    let writer = ReportWriter::new(storage, config.output_formats().to_vec());

    for file in writer.write(&results)? {
        tracing::info!("📁 Output saved to: {}/{}", config.output_path(), file);
        println!("📁 {}/{}", config.output_path(), file);
    }
    println!("✅ Harvest calculation completed");
    Ok(())
}

fn perform_dry_run(config: &TomlConfig, context: &CalculationContext) -> Result<(), HarvestError> {
    let engine = HarvestEngine::new(config.forecast_provider(context.today));
    let weather = engine.forecast(&config.system_inputs(), context)?;

    println!("🔍 Forecast ({} days, average {:.2} mm):", weather.forecast.len(), weather.average_rainfall);
    for day in &weather.forecast {
        println!("   {} {:>6.1} mm", day.date, day.rainfall);
    }
    if let Some(note) = &weather.note {
        println!("   note: {}", note);
    }
    println!("📂 Would write {:?} to {}", config.output_formats(), config.output_path());
    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    let inputs = config.system_inputs();
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("   Location: {}", inputs.location);
    tracing::info!("   Roof area: {} m²", inputs.roof_area);
    tracing::info!("   Outflow: {} L/day", inputs.outflow);
    tracing::info!("   Tank capacity: {} L", inputs.tank_capacity);
    tracing::info!("   Forecast source: {:?}", config.forecast_source());
    tracing::info!("   Output formats: {:?}", config.output_formats());
}
