//! Index template endpoint.

use reqwest::Client;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::request::{decode_json, send_request};
use crate::error::Result;
use crate::models::IndexTemplateListResponse;

/// List all composable index templates, built-in ones included.
pub async fn list_index_templates(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<IndexTemplateListResponse> {
    let url = format!("{}/_index_template", base_url);
    debug!("Listing index templates from {}", url);

    let builder = credentials.apply(client.get(&url));
    let response = send_request(builder).await?;

    let templates: IndexTemplateListResponse = decode_json(response, "/_index_template").await?;
    debug!("Received {} index templates", templates.index_templates.len());
    Ok(templates)
}
