//! Wire models and the row scan for the tracking endpoint.

use serde::Serialize;

/// Successful lookup payload.
///
/// Cells missing from a short sheet row are omitted from the JSON body.
#[derive(Debug, Serialize)]
pub struct TrackResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TrackResponse {
    /// Build the payload from a matched sheet row.
    pub fn from_row(row: &[String]) -> Self {
        Self {
            status: row.get(1).cloned(),
            location: row.get(2).cloned(),
        }
    }
}

/// Error payload for the not-found and server-error responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn not_found() -> Self {
        Self {
            error: "Not found".to_string(),
        }
    }

    pub fn server_error() -> Self {
        Self {
            error: "Server error".to_string(),
        }
    }
}

/// First row whose tracking-number cell equals `number`, in sheet order.
///
/// Plain equality scan: case-sensitive, no trimming. An absent `number` only
/// matches a row that has no first cell.
pub fn find_row<'a>(rows: &'a [Vec<String>], number: Option<&str>) -> Option<&'a [String]> {
    rows.iter()
        .find(|row| row.first().map(String::as_str) == number)
        .map(Vec::as_slice)
}
