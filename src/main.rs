use clap::Parser;
use rainwater_engine::core::ConfigProvider;
use rainwater_engine::utils::error::{ErrorSeverity, HarvestError};
use rainwater_engine::utils::{logger, validation::Validate};
use rainwater_engine::{CalculationContext, CliConfig, HarvestEngine, LocalStorage, ReportWriter};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting rainwater CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Harvest calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = exit_code(&e);
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(config: &CliConfig) -> Result<(), HarvestError> {
    let context = CalculationContext::now()
        .with_current_level(config.current_level())
        .with_leak_threshold(config.leak_threshold());

    let engine = HarvestEngine::new(config.forecast_provider(context.today));
    let results = engine.run(&config.system_inputs(), &context)?;

    let storage = LocalStorage::new(config.output_path().to_string());
    let writer = ReportWriter::new(storage, config.output_formats().to_vec());
    let written = writer.write(&results)?;

    println!("✅ Harvest calculation completed");
    println!(
        "💧 Daily inflow: {:.1} L | Recommended tank: {} L",
        results.inflow.daily_inflow, results.tank_recommendation.recommended_size
    );
    for file in written {
        println!("📁 {}/{}", config.output_path(), file);
    }
    Ok(())
}

fn exit_code(e: &HarvestError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
