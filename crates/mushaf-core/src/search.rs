//! Chapter search.

use crate::types::SurahSummary;

/// Filter chapters whose Latin name contains `query`, keeping list order.
pub fn filter_surahs<'a>(surahs: &'a [SurahSummary], query: &str) -> Vec<&'a SurahSummary> {
    surahs.iter().filter(|s| s.matches(query)).collect()
}
