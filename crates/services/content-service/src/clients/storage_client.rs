//! Object storage client for uploaded images.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use common::{AppError, AppResult, StorageConfig};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Object storage keyed by flat object names
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store an object and return its public URL
    async fn put_object(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> AppResult<String>;

    async fn delete_object(&self, key: &str) -> AppResult<()>;
}

/// Storage reached over plain HTTP: `PUT {endpoint}/{key}` and `DELETE {endpoint}/{key}`
pub struct HttpObjectStorage {
    client: Client,
    endpoint: String,
    token: Option<String>,
    public_url: String,
}

impl HttpObjectStorage {
    /// Build from config, or `None` when storage is not configured.
    pub fn from_config(config: &StorageConfig, client: Client) -> Option<Self> {
        let endpoint = config.endpoint.as_deref()?;
        let public_url = config.public_url.as_deref()?;

        Some(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            public_url: public_url.trim_end_matches('/').to_string(),
        })
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.endpoint, key)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    async fn put_object(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> AppResult<String> {
        tracing::debug!(key, size = bytes.len(), "Uploading object");

        let request = self
            .client
            .put(self.object_url(key))
            .header(CONTENT_TYPE, content_type)
            .body(bytes);

        self.authorize(request)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AppError::upstream(format!("storage upload failed: {}", e)))?;

        Ok(format!("{}/{}", self.public_url, key))
    }

    async fn delete_object(&self, key: &str) -> AppResult<()> {
        tracing::debug!(key, "Deleting object");

        let request = self.client.delete(self.object_url(key));

        self.authorize(request)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AppError::upstream(format!("storage delete failed: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_both_urls() {
        let config = StorageConfig {
            endpoint: Some("https://storage.example.com/upload/".into()),
            token: None,
            public_url: None,
        };
        assert!(HttpObjectStorage::from_config(&config, Client::new()).is_none());
    }

    #[test]
    fn test_object_url_trims_trailing_slash() {
        let config = StorageConfig {
            endpoint: Some("https://storage.example.com/upload/".into()),
            token: Some("secret".into()),
            public_url: Some("https://cdn.example.com/".into()),
        };
        let storage = HttpObjectStorage::from_config(&config, Client::new()).unwrap();

        assert_eq!(
            storage.object_url("1700000000000-abc123-lake.jpg"),
            "https://storage.example.com/upload/1700000000000-abc123-lake.jpg"
        );
        assert_eq!(storage.public_url, "https://cdn.example.com");
    }
}
