//! Chapter list and chapter detail endpoints.

use mushaf_core::{types::validate_surah_number, Result, SurahDetail, SurahSummary};
use tracing::{debug, info};

use crate::{
    parser::{parse_surah, parse_surah_detail},
    types::{RawSurah, RawSurahDetail},
    EquranClient,
};

impl EquranClient {
    /// Fetch the list of all chapters, in canonical order.
    pub async fn list_surahs(&self) -> Result<Vec<SurahSummary>> {
        let raw: Vec<RawSurah> = self.get("surat").await?;

        let mut surahs = raw
            .into_iter()
            .map(parse_surah)
            .collect::<Result<Vec<_>>>()?;
        surahs.sort_by_key(|s| s.number);

        info!("Loaded {} surahs", surahs.len());
        Ok(surahs)
    }

    /// Fetch one chapter with its verses.
    ///
    /// # Arguments
    /// * `number` - Chapter number, 1 through 114
    pub async fn get_surah(&self, number: u32) -> Result<SurahDetail> {
        let number = validate_surah_number(number)?;

        let raw: RawSurahDetail = self.get(&format!("surat/{number}")).await?;
        let detail = parse_surah_detail(raw)?;

        debug!(
            "Loaded surah {} ({}) with {} ayahs",
            detail.number(),
            detail.summary.latin_name,
            detail.ayahs.len()
        );
        Ok(detail)
    }
}
