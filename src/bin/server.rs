use std::sync::Arc;
use whois_proxy::core::ConfigProvider;
use whois_proxy::utils::{logger, validation::Validate};
use whois_proxy::{HttpFetcher, LookupService, ProxyConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ProxyConfig::from_env()?;

    logger::init_server_logger(config.server.json_logs);

    config.validate()?;
    tracing::info!(
        "Provider endpoint: {} (timeout {:?})",
        config.provider_endpoint(),
        config.request_timeout()
    );

    let fetcher = HttpFetcher::new(&config.user_agent())?;
    let service = Arc::new(LookupService::from_config(fetcher, &config));

    whois_proxy::server::serve(&config.bind_address(), service).await
}
