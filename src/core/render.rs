use crate::core::planner::format_budget;
use crate::core::PlanReport;
use std::fmt::Write;

pub fn render_text(report: &PlanReport) -> String {
    let plan = &report.plan;
    let mut out = String::new();

    // write! 到 String 不會失敗
    let _ = writeln!(out, "Business Model: {}", plan.business_model);
    let _ = writeln!(out, "  {}", plan.business_model_description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Required Skills: {}", plan.required_skills.join(", "));
    let _ = writeln!(out);
    let _ = writeln!(out, "Your Profile");
    let _ = writeln!(out, "  Budget: ${}", format_budget(plan.budget));
    let _ = writeln!(out, "  Skills: {}", plan.skills.join(", "));
    let _ = writeln!(out, "  About You: {}", plan.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Key Steps");
    for step in &plan.key_steps {
        let _ = writeln!(out, "  - {}", step);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Next Steps");
    for step in &plan.next_steps {
        let _ = writeln!(out, "  ✓ {}", step);
    }

    if !report.market_trends.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Market Trends");
        let _ = writeln!(out, "  {:<10} {:>11} {:>11}", "Month", "Market Size", "Competitors");
        for point in &report.market_trends {
            let _ = writeln!(
                out,
                "  {:<10} {:>11} {:>11}",
                point.month, point.market_size, point.competitors
            );
        }
    }

    out
}
