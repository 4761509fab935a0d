//! Search endpoint.

use reqwest::Client;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::request::{decode_json, send_request};
use crate::error::Result;
use crate::models::{SearchRequest, SearchResponse};

/// Run `request` against every index matching `index_pattern`.
pub async fn search(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    index_pattern: &str,
    request: &SearchRequest,
) -> Result<SearchResponse> {
    let url = format!("{}/{}/_search", base_url, index_pattern);
    debug!("Searching {} (size={})", url, request.size);

    let builder = credentials.apply(client.post(&url)).json(request);
    let response = send_request(builder).await?;

    let results: SearchResponse = decode_json(response, "/_search").await?;
    debug!("Search returned {} hits", results.hits.hits.len());
    Ok(results)
}
