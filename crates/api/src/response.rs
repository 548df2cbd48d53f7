//! Success envelope for API handlers.

use serde::Serialize;

/// Every successful body is `{ "data": T }`; errors use `{ "error", "code" }`
/// (see [`crate::error::AppError`]).
///
/// ```ignore
/// Ok(Json(DataResponse { data: tutor }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
