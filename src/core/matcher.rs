use crate::core::{BusinessModel, UserInput};
use crate::utils::error::{PlannerError, Result};

/// Result of scoring the catalog against one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Position of the selected model in the catalog.
    pub index: usize,
    pub score: u32,
    pub skill_match: u32,
    pub description_match: bool,
}

/// Lowercases the comma-separated skill string and trims every token.
pub fn normalize_skills(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(',')
        .map(|token| token.trim().to_string())
        .collect()
}

/// Counts required skills that contain at least one of the user's tokens.
pub fn skill_match(model: &BusinessModel, skills: &[String]) -> u32 {
    model
        .required_skills
        .iter()
        .filter(|required| {
            let required = required.to_lowercase();
            skills
                .iter()
                .any(|token| !token.is_empty() && required.contains(token.as_str()))
        })
        .count() as u32
}

/// True when any word of the model name appears in the description.
pub fn description_match(model: &BusinessModel, normalized_description: &str) -> bool {
    model
        .name
        .to_lowercase()
        .split(' ')
        .any(|word| !word.is_empty() && normalized_description.contains(word))
}

pub fn score(model: &BusinessModel, input: &UserInput) -> (u32, u32, bool) {
    let skills = skill_match(model, &input.skills);
    let described = description_match(model, &input.normalized_description);
    (skills + u32::from(described), skills, described)
}

/// Picks the highest scoring model; on ties the earliest one wins.
pub fn select_best(models: &[BusinessModel], input: &UserInput) -> Result<MatchOutcome> {
    models
        .iter()
        .enumerate()
        .fold(None::<MatchOutcome>, |best, (index, model)| {
            let (total, skill_match, description_match) = score(model, input);
            match best {
                Some(current) if current.score >= total => Some(current),
                _ => Some(MatchOutcome {
                    index,
                    score: total,
                    skill_match,
                    description_match,
                }),
            }
        })
        .ok_or(PlannerError::EmptyCatalogError)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, skills: &[&str]) -> BusinessModel {
        BusinessModel {
            name: name.to_string(),
            description: format!("{} description", name),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn input(skills: &str, description: &str) -> UserInput {
        UserInput::new(1000.0, skills, description)
    }

    #[test]
    fn test_normalize_skills() {
        assert_eq!(
            normalize_skills(" JavaScript ,Marketing,  UX Design"),
            vec!["javascript", "marketing", "ux design"]
        );
        assert_eq!(normalize_skills("coding,"), vec!["coding", ""]);
    }

    #[test]
    fn test_skill_match_is_case_insensitive_substring() {
        let m = model("Web Agency", &["JavaScript", "Sales"]);
        let skills = normalize_skills("javascript, marketing");
        assert_eq!(skill_match(&m, &skills), 1);

        // "design" 是 "Web Design" 的子字串
        let m = model("Studio", &["Web Design", "Photography"]);
        assert_eq!(skill_match(&m, &normalize_skills("design")), 1);
    }

    #[test]
    fn test_empty_tokens_never_match() {
        let m = model("Studio", &["Web Design", "Photography"]);
        assert_eq!(skill_match(&m, &normalize_skills("cooking, ,")), 0);
    }

    #[test]
    fn test_description_match_uses_name_words() {
        let m = model("App Development", &[]);
        assert!(description_match(&m, "i love building mobile apps for people"));
        assert!(!description_match(&m, "i like gardening"));
    }

    #[test]
    fn test_ties_keep_first_model() {
        let models = vec![
            model("Alpha", &["Writing"]),
            model("Beta", &["Writing"]),
        ];
        let outcome = select_best(&models, &input("writing", "nothing relevant here")).unwrap();
        assert_eq!(outcome.index, 0);
        assert_eq!(outcome.score, 1);
    }

    #[test]
    fn test_first_model_kept_when_nothing_scores() {
        let models = vec![model("Alpha", &["Writing"]), model("Beta", &["Sales"])];
        let outcome = select_best(&models, &input("cooking", "nothing relevant here")).unwrap();
        assert_eq!(outcome.index, 0);
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn test_strictly_higher_score_wins() {
        let models = vec![
            model("Alpha", &["Writing"]),
            model("Beta", &["Writing", "Sales"]),
            model("Gamma", &["Sales"]),
        ];
        let outcome = select_best(&models, &input("writing, sales", "a short bio here")).unwrap();
        assert_eq!(outcome.index, 1);
        assert_eq!(outcome.skill_match, 2);
        assert!(!outcome.description_match);
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let err = select_best(&[], &input("coding", "anything at all")).unwrap_err();
        assert!(matches!(err, PlannerError::EmptyCatalogError));
    }
}
