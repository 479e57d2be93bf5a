use clap::Parser;

use pix_gateway::services;
use pix_gateway::settings::Settings;

/// HTTP adapter exposing Asaas PIX charges to the Telegram bot.
#[derive(Parser, Debug)]
#[command(name = "pix-gateway", version)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    log4rs::init_file("log4rs.yaml", Default::default()).expect("Could not initialize logging.");

    let args = Args::parse();
    let settings = Settings::new(&args.config).expect("Could not load config file.");
    let api_key = std::env::var("ASAAS_API_KEY").expect("ASAAS_API_KEY must be set.");

    log::info!("Starting services.");
    services::start_services(settings, api_key)
        .await
        .expect("Could not start services.");
}
