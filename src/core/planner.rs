use crate::core::matcher::{normalize_skills, select_best};
use crate::core::{BusinessModel, BusinessPlan, UserInput};
use crate::utils::error::Result;

impl UserInput {
    pub fn new(budget: f64, raw_skills: &str, raw_description: &str) -> Self {
        Self {
            budget,
            skills: normalize_skills(raw_skills),
            description: raw_description.to_string(),
            normalized_description: raw_description.to_lowercase(),
        }
    }
}

/// Scores the catalog and builds the plan for the best match.
pub fn generate_plan(
    models: &[BusinessModel],
    budget: f64,
    raw_skills: &str,
    raw_description: &str,
) -> Result<BusinessPlan> {
    let input = UserInput::new(budget, raw_skills, raw_description);
    let outcome = select_best(models, &input)?;
    let selected = &models[outcome.index];

    tracing::debug!(
        "Selected '{}' (score {}, skills {}, description {})",
        selected.name,
        outcome.score,
        outcome.skill_match,
        outcome.description_match
    );

    Ok(build_plan(selected, input))
}

pub fn build_plan(model: &BusinessModel, input: UserInput) -> BusinessPlan {
    let name = &model.name;
    let required = model.required_skills.join(", ");
    let budget = format_budget(input.budget);
    let user_skills = input.skills.join(", ");

    let key_steps = vec![
        format!("Market Research: Conduct thorough research on the {name} market, focusing on areas that align with your personal background."),
        format!("Skill Development: Focus on improving your skills in {required}, which are crucial for this business model."),
        "MVP Development: Create a Minimum Viable Product that leverages your unique skills and experiences.".to_string(),
        "Marketing Strategy: Develop a marketing plan that highlights your personal strengths and targets your ideal audience.".to_string(),
        format!("Financial Planning: Create a detailed financial plan, including projections for the first year, considering your initial budget of {budget}."),
        format!("Personal Brand: Incorporate your personal story and skills into your business brand to stand out in the {name} space."),
    ];

    let next_steps = vec![
        format!("Refine your business concept based on the {name} approach and your personal strengths."),
        format!("Seek mentorship or advice from experts in the {name} field who have similar backgrounds."),
        format!("Start building your MVP, leveraging your skills in {user_skills}, and gather early feedback from potential customers."),
        format!("Consider taking courses or workshops to enhance your skills in {required}."),
    ];

    BusinessPlan {
        business_model: model.name.clone(),
        business_model_description: model.description.clone(),
        required_skills: model.required_skills.clone(),
        budget: input.budget,
        skills: input.skills,
        description: input.description,
        key_steps,
        next_steps,
    }
}

/// Prints a budget like a JavaScript number: no trailing `.0`, no `-0`.
pub fn format_budget(budget: f64) -> String {
    if budget == 0.0 {
        return "0".to_string();
    }
    budget.to_string()
}
