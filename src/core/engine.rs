use crate::core::planner::generate_plan;
use crate::core::trends::mock_trends;
use crate::core::{BusinessModel, CatalogSource, PlanReport, PlanRequest};
use crate::utils::error::Result;
use crate::utils::validation::{parse_budget, Validate};

/// Holds a catalog loaded once and answers plan requests against it.
pub struct PlanEngine<C: CatalogSource> {
    source: C,
    models: Vec<BusinessModel>,
}

impl<C: CatalogSource> PlanEngine<C> {
    pub async fn load(source: C) -> Result<Self> {
        tracing::info!("📚 Loading catalog from {}", source.describe());
        let models = source.load().await?;
        tracing::info!("✅ Loaded {} business models", models.len());
        Ok(Self { source, models })
    }

    pub fn models(&self) -> &[BusinessModel] {
        &self.models
    }

    /// Re-reads the catalog from its source. The old list is kept on failure.
    pub async fn reload(&mut self) -> Result<usize> {
        let models = self.source.load().await?;
        tracing::info!(
            "🔄 Reloaded catalog from {} ({} -> {} models)",
            self.source.describe(),
            self.models.len(),
            models.len()
        );
        self.models = models;
        Ok(self.models.len())
    }

    pub fn generate(&self, request: &PlanRequest) -> Result<PlanReport> {
        request.validate()?;
        let budget = parse_budget(&request.budget)?;

        let plan = generate_plan(&self.models, budget, &request.skills, &request.description)?;
        tracing::info!("🧭 Matched business model: {}", plan.business_model);

        Ok(PlanReport {
            plan,
            market_trends: mock_trends(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PlannerError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct MemorySource {
        models: Arc<Mutex<Vec<BusinessModel>>>,
        fail: Arc<Mutex<bool>>,
    }

    impl MemorySource {
        fn new(models: Vec<BusinessModel>) -> Self {
            Self {
                models: Arc::new(Mutex::new(models)),
                fail: Arc::new(Mutex::new(false)),
            }
        }
    }

    #[async_trait]
    impl CatalogSource for MemorySource {
        async fn load(&self) -> Result<Vec<BusinessModel>> {
            if *self.fail.lock().unwrap() {
                return Err(PlannerError::CatalogReadError {
                    location: "memory".to_string(),
                    reason: "unavailable".to_string(),
                });
            }
            Ok(self.models.lock().unwrap().clone())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    fn model(name: &str, skills: &[&str]) -> BusinessModel {
        BusinessModel {
            name: name.to_string(),
            description: format!("About {}", name),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn request(budget: &str, skills: &str, description: &str) -> PlanRequest {
        PlanRequest {
            budget: budget.to_string(),
            skills: skills.to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_generate_returns_plan_and_trends() {
        let source = MemorySource::new(vec![
            model("Freelance Writing", &["Writing", "Editing"]),
            model("App Development", &["Coding", "Design", "UX"]),
        ]);
        let engine = PlanEngine::load(source).await.unwrap();

        let report = engine
            .generate(&request("5000", "coding, design", "I love building mobile apps for people"))
            .unwrap();

        assert_eq!(report.plan.business_model, "App Development");
        assert_eq!(report.market_trends.len(), 12);
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid_form() {
        let engine = PlanEngine::load(MemorySource::new(vec![model("A", &["x"])]))
            .await
            .unwrap();

        let err = engine.generate(&request("abc", "x", "long enough text")).unwrap_err();
        assert!(matches!(err, PlannerError::ValidationError { ref field, .. } if field == "budget"));
    }

    #[tokio::test]
    async fn test_empty_catalog_surfaces_error() {
        let engine = PlanEngine::load(MemorySource::new(vec![])).await.unwrap();

        let err = engine.generate(&request("10", "x", "long enough text")).unwrap_err();
        assert!(matches!(err, PlannerError::EmptyCatalogError));
    }

    #[tokio::test]
    async fn test_catalog_is_only_read_again_on_reload() {
        let source = MemorySource::new(vec![model("A", &["x"])]);
        let mut engine = PlanEngine::load(source.clone()).await.unwrap();

        source.models.lock().unwrap().push(model("B", &["y"]));
        assert_eq!(engine.models().len(), 1);

        assert_eq!(engine.reload().await.unwrap(), 2);
        assert_eq!(engine.models()[1].name, "B");
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_catalog() {
        let source = MemorySource::new(vec![model("A", &["x"])]);
        let mut engine = PlanEngine::load(source.clone()).await.unwrap();

        *source.fail.lock().unwrap() = true;
        assert!(engine.reload().await.is_err());
        assert_eq!(engine.models().len(), 1);
    }
}
