use api::{ApiError, Disposition};

use crate::auth::ErrorReporter;

/// Outcome of a screen's data load, after the error has been reported.
#[derive(Clone, Debug, PartialEq)]
pub enum Fetched<T> {
    Ready(T),
    /// 404: nothing recorded yet.
    NoData,
    Failed(String),
}

impl<T> Fetched<T> {
    pub fn from_result(result: Result<T, ApiError>, reporter: ErrorReporter) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => match reporter.report(&e) {
                Disposition::NoData => Self::NoData,
                _ => Self::Failed(e.user_message()),
            },
        }
    }
}
