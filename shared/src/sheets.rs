//! Google Sheets values API client.

use serde::Deserialize;

use crate::{Config, Error, Result};

/// `values.get` response body.
///
/// Rows are arrays of cell strings. Trailing empty cells are absent, and an
/// empty sheet has no `values` key at all.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Read the configured range, returning rows in sheet order.
pub async fn read_range(
    http: &reqwest::Client,
    config: &Config,
    token: &str,
) -> Result<Vec<Vec<String>>> {
    let url = format!(
        "{}/v4/spreadsheets/{}/values/{}",
        config.sheets_api_base,
        config.sheet_id,
        urlencoding::encode(&config.range)
    );

    let response = http.get(&url).bearer_auth(token).send().await?;
    if !response.status().is_success() {
        return Err(Error::Api(response.status().as_u16()));
    }

    let range: ValueRange = response.json().await?;
    Ok(range.values)
}
