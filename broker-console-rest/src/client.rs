//! reqwest-backed [`ManagementApi`]

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{RestError, Result};
use crate::http_client::HttpUtils;
use crate::traits::ManagementApi;
use crate::types::{ClientOptions, ObjectAttributes};

/// HTTP client for the broker management console
pub struct HttpManagementClient {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl HttpManagementClient {
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(options.connect_timeout())
            .timeout(options.request_timeout())
            .build()
            .map_err(|e| RestError::ClientConfig(e.to_string()))?;

        Ok(Self::with_client(client, options))
    }

    /// Use a preconfigured `reqwest::Client` (custom TLS roots, proxies, ...).
    pub fn with_client(client: Client, options: &ClientOptions) -> Self {
        Self {
            client,
            base_url: normalize_base_url(&options.base_url),
            max_retries: options.max_retries,
        }
    }

    /// Absolute URL for a management path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ManagementApi for HttpManagementClient {
    async fn get_objects(&self, path: &str) -> Result<Vec<ObjectAttributes>> {
        let request = self
            .client
            .get(self.endpoint(path))
            .header("Accept", "application/json");
        let body =
            HttpUtils::execute_request_with_retry(request, "GET", path, self.max_retries).await?;
        HttpUtils::parse_json(&body, path)
    }

    async fn delete_object(&self, path: &str) -> Result<()> {
        // DELETE is not retried: a lost response after a successful delete
        // would turn into a spurious 404 on the second attempt.
        let request = self.client.delete(self.endpoint(path));
        HttpUtils::execute_request(request, "DELETE", path).await?;
        Ok(())
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    format!("{trimmed}/")
}
