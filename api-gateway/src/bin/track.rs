//! Tracking Lambda - Handles GET /track lookups.
//!
//! Looks up a shipment by its tracking number in the backing spreadsheet and
//! returns its status and location. A miss is a 200 with an error payload;
//! any credential or upstream failure is a generic 500.

use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use shared::{auth, find_row, json_response, sheets, Config, ErrorResponse, TrackResponse};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Fetch the sheet and scan it for the requested tracking number.
///
/// Everything here is request-scoped: the credential and the HTTP client are
/// built per invocation and dropped with it.
async fn lookup(config: &Config, number: Option<&str>) -> shared::Result<Option<TrackResponse>> {
    let http = reqwest::Client::new();
    let token = auth::fetch_access_token(&http, config).await?;
    let rows = sheets::read_range(&http, config, &token).await?;

    Ok(find_row(&rows, number).map(TrackResponse::from_row))
}

async fn handler(config: shared::Result<Config>, event: Request) -> Result<Response<Body>, Error> {
    let params = event.query_string_parameters();
    let number = params.first("number");

    let result = match config {
        Ok(config) => lookup(&config, number).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(Some(found)) => json_response(200, &found),
        Ok(None) => json_response(200, &ErrorResponse::not_found()),
        Err(e) => {
            error!("Tracking lookup failed: {}", e);
            json_response(500, &ErrorResponse::server_error())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    run(service_fn(|event| handler(Config::from_env(), event))).await
}
