use clap::Parser;
use whois_proxy::utils::{logger, validation::Validate};
use whois_proxy::{CliConfig, ErrorEnvelope, FailureClass, HttpFetcher, LookupService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting whois-proxy CLI");
    if config.verbose {
        tracing::debug!(
            "CLI config: endpoint={}, timeout={}s, type={}",
            config.endpoint,
            config.timeout_seconds,
            config.kind
        );
    }

    if let Err(e) = config.apply_file().and_then(|_| config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let fetcher = HttpFetcher::new(&config.user_agent)?;
    let service = LookupService::from_config(fetcher, &config);

    match service.lookup(config.lookup_request()).await {
        Ok(envelope) => {
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Err(e) => {
            tracing::error!("❌ Lookup failed: {} (Category: {:?})", e, e.category());
            eprintln!("{}", serde_json::to_string_pretty(&ErrorEnvelope::from(&e))?);

            let code = match e.failure_class() {
                FailureClass::Client => 1,
                FailureClass::Server => 2,
            };
            std::process::exit(code);
        }
    }

    Ok(())
}
