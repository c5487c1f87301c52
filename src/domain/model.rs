use serde::{Deserialize, Serialize};

/// One entry of the catalog. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessModel {
    pub name: String,
    pub description: String,
    pub required_skills: Vec<String>,
}

/// Normalized form of a single submission.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInput {
    pub budget: f64,
    /// Lowercased, trimmed skill tokens in input order.
    pub skills: Vec<String>,
    /// Description as typed, used for display.
    pub description: String,
    /// Lowercased description, used for matching.
    pub normalized_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPlan {
    pub business_model: String,
    pub business_model_description: String,
    pub required_skills: Vec<String>,
    pub budget: f64,
    pub skills: Vec<String>,
    pub description: String,
    pub key_steps: Vec<String>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrendPoint {
    pub month: String,
    pub market_size: u32,
    pub competitors: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub plan: BusinessPlan,
    pub market_trends: Vec<MarketTrendPoint>,
}

/// 表單原始欄位，尚未驗證
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub budget: String,
    pub skills: String,
    pub description: String,
}
