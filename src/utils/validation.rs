use crate::domain::model::PlanRequest;
use crate::utils::error::{PlannerError, Result};
use std::net::SocketAddr;
use url::Url;

/// Minimum length of the free-text self-description.
pub const MIN_DESCRIPTION_LEN: usize = 10;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PlannerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_socket_addr(field_name: &str, value: &str) -> Result<SocketAddr> {
    value
        .parse::<SocketAddr>()
        .map_err(|e| PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

/// 解析預算欄位，必須是有限數字
pub fn parse_budget(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PlannerError::validation("budget", "Budget is required"));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PlannerError::validation("budget", "Budget must be a number")),
    }
}

impl Validate for PlanRequest {
    fn validate(&self) -> Result<()> {
        parse_budget(&self.budget)?;

        if self.skills.trim().is_empty() {
            return Err(PlannerError::validation("skills", "Skills are required"));
        }

        if self.description.chars().count() < MIN_DESCRIPTION_LEN {
            return Err(PlannerError::validation(
                "description",
                format!(
                    "Description must be at least {} characters long",
                    MIN_DESCRIPTION_LEN
                ),
            ));
        }

        Ok(())
    }
}
