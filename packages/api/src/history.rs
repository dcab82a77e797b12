//! Paged prediction history.

use crate::backend::{Backend, HistoryPage};
use crate::error::ApiError;
use crate::models::PredictionRecord;
use crate::session::SessionToken;

/// How many of the loaded records were classified each way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub healthy: usize,
    pub diabetic: usize,
}

impl OutcomeCounts {
    pub fn from_records(records: &[PredictionRecord]) -> Self {
        let diabetic = records
            .iter()
            .filter(|r| r.outcome().is_diabetes())
            .count();
        Self {
            healthy: records.len() - diabetic,
            diabetic,
        }
    }
}

/// Records loaded so far plus the cursor for the next page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryList {
    pub records: Vec<PredictionRecord>,
    pub next: HistoryPage,
    /// `false` once a page came back short.
    pub has_more: bool,
}

impl HistoryList {
    pub fn counts(&self) -> OutcomeCounts {
        OutcomeCounts::from_records(&self.records)
    }
}

pub async fn load_first_page<B: Backend>(
    backend: &B,
    token: &SessionToken,
) -> Result<HistoryList, ApiError> {
    load_more(backend, token, HistoryList::default()).await
}

/// Append the next page to `list`.
pub async fn load_more<B: Backend>(
    backend: &B,
    token: &SessionToken,
    mut list: HistoryList,
) -> Result<HistoryList, ApiError> {
    let page = list.next;
    let records = backend.history(token, page).await?;
    list.has_more = records.len() as u32 >= page.limit;
    list.records.extend(records);
    list.next = page.next();
    Ok(list)
}
