//! Cat indices endpoint.

use reqwest::Client;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::request::send_request;
use crate::error::Result;
use crate::models::CatIndices;

/// List indices matching `pattern`, sorted by name, with a header row.
///
/// Returns `Ok(None)` when the response holds no data rows. A 404 (no index
/// matches a concrete name) is returned as an error for the caller to judge.
pub async fn cat_indices(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    pattern: &str,
) -> Result<Option<CatIndices>> {
    let url = format!("{}/_cat/indices/{}?v&s=index", base_url, pattern);
    debug!("Listing indices from {}", url);

    let builder = credentials.apply(client.get(&url));
    let response = send_request(builder).await?;

    let body = response.text().await?;
    Ok(CatIndices::parse(&body))
}
