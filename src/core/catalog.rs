use crate::core::{BusinessModel, CatalogSource, Storage};
use crate::utils::error::{PlannerError, Result};
use async_trait::async_trait;

const FIELD_DELIMITER: char = '|';
const SKILL_DELIMITER: char = ',';
const FIELD_COUNT: usize = 3;

/// Parses `name|description|skill1, skill2` records in file order.
///
/// Blank lines are ignored. A line that does not have exactly three fields
/// is skipped with a warning, or rejected when `strict` is set.
pub fn parse_catalog(text: &str, strict: bool) -> Result<Vec<BusinessModel>> {
    let mut models = Vec::new();

    for (index, raw_line) in text.split('\n').enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if line.trim().is_empty() {
            continue;
        }

        match parse_record(line) {
            Some(model) => models.push(model),
            None => {
                let fields = line.split(FIELD_DELIMITER).count();
                if strict {
                    return Err(PlannerError::MalformedRecordError {
                        line: index + 1,
                        fields,
                    });
                }
                tracing::warn!(
                    "⚠️ Skipping malformed catalog line {} ({} fields)",
                    index + 1,
                    fields
                );
            }
        }
    }

    tracing::debug!("Parsed {} business models", models.len());
    Ok(models)
}

fn parse_record(line: &str) -> Option<BusinessModel> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }

    Some(BusinessModel {
        name: fields[0].to_string(),
        description: fields[1].to_string(),
        required_skills: fields[2]
            .split(SKILL_DELIMITER)
            .map(|skill| skill.trim().to_string())
            .collect(),
    })
}

/// 將模型寫回目錄檔格式，每筆一行
pub fn to_catalog_text(models: &[BusinessModel]) -> String {
    let mut out = String::new();
    for model in models {
        out.push_str(&model.name);
        out.push(FIELD_DELIMITER);
        out.push_str(&model.description);
        out.push(FIELD_DELIMITER);
        out.push_str(&model.required_skills.join(", "));
        out.push('\n');
    }
    out
}

/// Reads the catalog file through a [`Storage`] on every `load`.
#[derive(Debug, Clone)]
pub struct FileCatalogSource<S: Storage> {
    storage: S,
    path: String,
    strict: bool,
}

impl<S: Storage> FileCatalogSource<S> {
    pub fn new(storage: S, path: impl Into<String>, strict: bool) -> Self {
        Self {
            storage,
            path: path.into(),
            strict,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl<S: Storage> CatalogSource for FileCatalogSource<S> {
    async fn load(&self) -> Result<Vec<BusinessModel>> {
        let bytes = self
            .storage
            .read_file(&self.path)
            .await
            .map_err(|e| PlannerError::CatalogReadError {
                location: self.path.clone(),
                reason: e.to_string(),
            })?;

        let text = String::from_utf8(bytes).map_err(|e| PlannerError::CatalogReadError {
            location: self.path.clone(),
            reason: format!("catalog is not valid UTF-8: {}", e),
        })?;

        parse_catalog(&text, self.strict)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path)
    }
}
