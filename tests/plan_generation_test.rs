use bizplan::core::matcher::{select_best, skill_match};
use bizplan::core::{BusinessModel, UserInput};
use bizplan::{generate_plan, parse_catalog, to_catalog_text, PlannerError};
use std::path::Path;

fn model(name: &str, skills: &[&str]) -> BusinessModel {
    BusinessModel {
        name: name.to_string(),
        description: format!("{} description", name),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn bundled_catalog() -> Vec<BusinessModel> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("lib/business-models.txt");
    let text = std::fs::read_to_string(path).unwrap();
    parse_catalog(&text, true).unwrap()
}

#[test]
fn test_bundled_catalog_is_well_formed() {
    let models = bundled_catalog();
    assert!(!models.is_empty());
    for m in &models {
        assert!(!m.name.is_empty());
        assert!(m.required_skills.iter().all(|s| !s.is_empty() && s.trim() == s));
    }
}

#[test]
fn test_case_insensitive_substring_skill_match() {
    let m = model("Web Shop", &["JavaScript", "Sales"]);
    let input = UserInput::new(0.0, "javascript, marketing", "anything");
    assert_eq!(skill_match(&m, &input.skills), 1);
}

#[test]
fn test_single_model_end_to_end_scores() {
    let models = vec![BusinessModel {
        name: "App Development".to_string(),
        description: "Build apps".to_string(),
        required_skills: vec!["Coding".to_string(), "Design".to_string(), "UX".to_string()],
    }];
    let input = UserInput::new(5000.0, "coding, design", "I love building mobile apps for people");

    let outcome = select_best(&models, &input).unwrap();
    assert_eq!(outcome.skill_match, 2);
    assert!(outcome.description_match);
    assert_eq!(outcome.score, 3);

    let plan = generate_plan(&models, 5000.0, "coding, design", "I love building mobile apps for people")
        .unwrap();
    assert_eq!(plan.business_model, "App Development");
}

#[test]
fn test_bundled_catalog_picks_expected_models() {
    let models = bundled_catalog();

    let plan = generate_plan(
        &models,
        5000.0,
        "coding, design, ux",
        "I love building mobile apps for people",
    )
    .unwrap();
    assert_eq!(plan.business_model, "App Development");

    let plan = generate_plan(
        &models,
        800.0,
        "cooking, budgeting",
        "I want to run a food truck at local festivals",
    )
    .unwrap();
    assert_eq!(plan.business_model, "Food Truck");
}

#[test]
fn test_tie_prefers_catalog_order() {
    let models = vec![model("Zeta", &["Writing"]), model("Alpha", &["Writing"])];
    let plan = generate_plan(&models, 10.0, "writing", "no name words in here").unwrap();
    assert_eq!(plan.business_model, "Zeta");
}

#[test]
fn test_empty_catalog_is_explicit_error() {
    let models = parse_catalog("", false).unwrap();
    let err = generate_plan(&models, 10.0, "writing", "no models to match").unwrap_err();
    assert!(matches!(err, PlannerError::EmptyCatalogError));
}

#[test]
fn test_bundled_catalog_survives_text_round_trip() {
    let models = bundled_catalog();
    let text = to_catalog_text(&models);
    assert_eq!(parse_catalog(&text, true).unwrap(), models);
}
