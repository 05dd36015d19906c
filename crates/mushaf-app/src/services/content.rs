//! Content service wrapping the equran.id client.

use mushaf_api::EquranClient;
use mushaf_core::{Result, SurahDetail, SurahSummary};
use tracing::{error, info};

use crate::config::ReaderConfig;

/// Surah lists and chapters, fetched and cached by [`EquranClient`].
#[derive(Clone)]
pub struct ContentService {
    client: EquranClient,
}

impl ContentService {
    pub fn new(config: &ReaderConfig) -> Result<Self> {
        let client = EquranClient::with_timeout(config.request_timeout())?
            .with_base_url(&config.api_base_url)?
            .with_cache_ttl(config.cache_ttl());
        info!("Content service using {}", client.base_url());
        Ok(Self { client })
    }

    pub async fn list_surahs(&self) -> Result<Vec<SurahSummary>> {
        self.client.list_surahs().await.inspect_err(|e| {
            error!("Failed to load surah list: {e}");
        })
    }

    pub async fn surah(&self, number: u32) -> Result<SurahDetail> {
        self.client.get_surah(number).await.inspect_err(|e| {
            error!("Failed to load surah {number}: {e}");
        })
    }
}
