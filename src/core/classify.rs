use crate::domain::model::{DirectorySearchResponse, MotorVehicleSearchResponse};
use crate::utils::error::Result;

/// Search envelopes that have a natural "nothing found" value.
pub trait EmptyResult {
    fn empty() -> Self;
}

impl EmptyResult for DirectorySearchResponse {
    fn empty() -> Self {
        Self::default()
    }
}

impl EmptyResult for MotorVehicleSearchResponse {
    fn empty() -> Self {
        Self::default()
    }
}

/// Turns an upstream "no results" failure into an empty successful envelope.
/// Every other error is passed through untouched.
pub fn recover_no_results<T: EmptyResult>(result: Result<T>) -> Result<T> {
    match result {
        Err(e) if e.is_no_results() => {
            tracing::info!("upstream reported no results, returning empty envelope: {}", e);
            Ok(T::empty())
        }
        other => other,
    }
}
