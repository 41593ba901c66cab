//! Shared response envelope types.

use serde::Serialize;

/// Standard `{ "data": ... }` wrapper for every successful JSON body.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
