use serde::Deserialize;

/// Envelope of every voeventdb `apiv1` JSON response
///
/// Only `result` is read; `querystring`, `url` and `endpoint` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub result: T,
}
