use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use mute_bot::application::commands;
use mute_bot::application::errors::BotError;
use mute_bot::application::services::BotService;
use mute_bot::domain::entities::{CommandRegistry, CommandRegistryBuilder};
use mute_bot::infrastructure::adapters::ConsoleAdapter;
use mute_bot::infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "mute-bot")]
#[command(about = "A chat bot that dispatches prefixed or mentioned commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
    /// List registered commands
    Commands,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_bot(&cli.config),
        Commands::Version => {
            println!("mute-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
        Commands::Commands => list_commands(&cli.config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(config_path: &str) -> Result<Config, BotError> {
    if std::path::Path::new(config_path).exists() {
        Ok(Config::load(config_path)?)
    } else {
        tracing::warn!("Config file {} not found, using defaults", config_path);
        let config = Config::load_env();
        config.validate()?;
        Ok(config)
    }
}

fn build_registry(config: &Config) -> Result<CommandRegistry, BotError> {
    let mut builder = CommandRegistryBuilder::new(config.bot.case_sensitive_commands);
    commands::register_defaults(&mut builder)?;
    let registry = builder.build();

    tracing::info!("Loaded Modules ({}):", registry.modules().len());
    for (module, cmds) in registry.modules() {
        tracing::info!(" - {} ({} commands)", module, cmds.len());
    }

    Ok(registry)
}

fn run_bot(config_path: &str) -> Result<(), BotError> {
    let config = load_config(config_path)?;
    tracing::info!("Starting mute-bot: {}", config.bot.name);

    let registry = Arc::new(build_registry(&config)?);

    let console = config
        .console()
        .ok_or_else(|| BotError::Internal("No gateway adapter enabled".to_string()))?;
    let gateway = Arc::new(ConsoleAdapter::new(config.bot.name.clone(), console));
    let service = BotService::new(config.bot.prefix, registry, gateway);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(service.run())?;

    tracing::info!("Exiting");
    Ok(())
}

fn list_commands(config_path: &str) -> Result<(), BotError> {
    let config = load_config(config_path)?;
    let registry = build_registry(&config)?;

    for (module, cmds) in registry.modules() {
        println!("{}:", module);
        for cmd in cmds {
            println!(
                "  {:<24} {}",
                cmd.usage(config.bot.prefix),
                cmd.summary.as_deref().unwrap_or("")
            );
        }
    }
    Ok(())
}

fn init_config() -> Result<(), BotError> {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config)
        .map_err(|e| BotError::Internal(format!("Failed to render config: {}", e)))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
