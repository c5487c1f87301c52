use crate::core::{BusinessModel, CatalogSource};
use crate::utils::error::{PlannerError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the catalog JSON from a running catalog endpoint.
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn load(&self) -> Result<Vec<BusinessModel>> {
        tracing::debug!("Fetching catalog from: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);
        if !status.is_success() {
            return Err(PlannerError::CatalogReadError {
                location: self.url.clone(),
                reason: format!("server responded with {}", status),
            });
        }

        let models: Vec<BusinessModel> = response.json().await?;
        Ok(models)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_load_parses_catalog_json() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/business-models");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"name": "Consulting", "description": "Advise", "requiredSkills": ["Strategy"]},
                    {"name": "Blogging", "description": "Write", "requiredSkills": ["Writing", "SEO"]}
                ]));
        });

        let source = HttpCatalogSource::new(server.url("/api/business-models"));
        let models = source.load().await.unwrap();

        api_mock.assert();
        assert_eq!(models.len(), 2);
        assert_eq!(models[1].required_skills, vec!["Writing", "SEO"]);
    }

    #[tokio::test]
    async fn test_server_error_is_catalog_read_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/business-models");
            then.status(500);
        });

        let source = HttpCatalogSource::new(server.url("/api/business-models"));
        let err = source.load().await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, PlannerError::CatalogReadError { .. }));
    }
}
