use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub holdings_path: String,
    pub rapidapi_key: Option<String>,
    pub refresh_interval: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("FT_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid FT_LISTEN_ADDR");
        let holdings_path =
            std::env::var("FT_HOLDINGS_PATH").unwrap_or_else(|_| "./data/holdings.json".into());
        let rapidapi_key = std::env::var("RAPIDAPI_KEY").ok().filter(|k| !k.is_empty());
        let refresh_secs: u64 = std::env::var("FT_REFRESH_INTERVAL_SECS")
            .unwrap_or_else(|_| "15".into())
            .parse()
            .unwrap_or(15);
        Self {
            listen_addr,
            holdings_path,
            rapidapi_key,
            refresh_interval: Duration::from_secs(refresh_secs),
        }
    }
}
