use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use foliotrack_core::holdings;
use foliotrack_market_data::{QuoteProvider, RapidApiYahooProvider};

use crate::config::Config;
use crate::state::PortfolioState;

pub fn init_tracing() {
    let log_format = std::env::var("FT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<PortfolioState>> {
    let holdings = holdings::load_holdings(&config.holdings_path)?;
    tracing::info!(
        "Loaded {} holdings from {}",
        holdings.len(),
        config.holdings_path
    );

    if config.rapidapi_key.is_none() {
        // Fatal for the quote collaborator only; the tracker keeps serving
        // holdings with default quote fields
        tracing::error!("RAPIDAPI_KEY is not set; quote fetches will fail");
    }
    let provider: Arc<dyn QuoteProvider> =
        Arc::new(RapidApiYahooProvider::new(config.rapidapi_key.clone()));

    let state = PortfolioState::new(holdings, provider)?;
    Ok(Arc::new(state))
}
