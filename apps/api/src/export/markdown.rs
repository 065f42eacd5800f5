//! Markdown report for an idea analysis.
//!
//! Section order is fixed: Overview, Market Demand, Target Customers, Competition,
//! Risks, Improvements, MVP Recommendation, Execution Plan, Growth Strategy,
//! Verdict, footer. Missing fields render as `N/A` or as an empty body.

use crate::export::format::{format_score, or_empty, or_na};
use crate::models::idea::IdeaAnalysis;

pub const ATTRIBUTION: &str = "*Generated by KBIT AI Business Idea Validator*";

pub fn idea_to_markdown(title: &str, analysis: &IdeaAnalysis) -> String {
    let mut md = format!("# Business Idea Analysis: {title}\n\n");

    md.push_str("## Overview\n");
    md.push_str(&format!(
        "**Viability Score:** {}/10\n\n",
        format_score(analysis.viability_score)
    ));
    md.push_str(&format!("{}\n\n", or_empty(analysis.idea_summary.as_deref())));

    let demand = analysis.market_demand.as_ref();
    md.push_str("## Market Demand\n");
    md.push_str(&format!(
        "**Score:** {}/10\n\n",
        format_score(demand.and_then(|d| d.score))
    ));
    md.push_str(&format!(
        "{}\n\n",
        or_empty(demand.and_then(|d| d.analysis.as_deref()))
    ));

    let customers = analysis.target_customers.as_ref();
    md.push_str("## Target Customers\n");
    md.push_str(&format!(
        "**Primary:** {}\n\n",
        or_na(customers.and_then(|c| c.primary.as_deref()))
    ));
    md.push_str(&format!(
        "**Secondary:** {}\n\n",
        or_na(customers.and_then(|c| c.secondary.as_deref()))
    ));

    let competition = analysis.competition.as_ref();
    md.push_str("## Competition\n");
    md.push_str(&format!(
        "**Level:** {}\n\n",
        or_na(competition.and_then(|c| c.level.as_deref()))
    ));
    md.push_str(&format!(
        "{}\n\n",
        or_empty(competition.and_then(|c| c.differentiation.as_deref()))
    ));

    md.push_str("## Risks\n");
    for risk in analysis.risks.iter().flatten() {
        md.push_str(&format!(
            "- **{}** ({}): {}\n",
            or_na(risk.kind.as_deref()),
            or_na(risk.severity.as_deref()),
            or_na(risk.description.as_deref())
        ));
        md.push_str(&format!(
            "  - Mitigation: {}\n",
            or_na(risk.mitigation.as_deref())
        ));
    }
    md.push('\n');

    md.push_str("## Improvements\n");
    for improvement in analysis.improvements.iter().flatten() {
        md.push_str(&format!("- {improvement}\n"));
    }
    md.push('\n');

    md.push_str("## MVP Recommendation\n");
    if let Some(mvp) = &analysis.mvp_recommendation {
        md.push_str(&format!("**Timeline:** {}\n", or_na(mvp.timeline.as_deref())));
        md.push_str(&format!(
            "**Budget:** {}\n\n",
            or_na(mvp.budget_range.as_deref())
        ));
        md.push_str("### Core Features\n");
        for feature in mvp.core_features.iter().flatten() {
            md.push_str(&format!("- {feature}\n"));
        }
    }
    md.push('\n');

    md.push_str("## Execution Plan\n");
    for phase in analysis.execution_plan.iter().flatten() {
        md.push_str(&format!("### {}\n", phase.phase));
        for (i, step) in phase.steps.iter().enumerate() {
            md.push_str(&format!("{}. {step}\n", i + 1));
        }
        md.push('\n');
    }
    md.push('\n');

    md.push_str("## Growth Strategy\n");
    if let Some(growth) = &analysis.growth_strategy {
        md.push_str(&format!(
            "**Short Term:** {}\n",
            or_na(growth.short_term.as_deref())
        ));
        md.push_str(&format!(
            "**Medium Term:** {}\n",
            or_na(growth.medium_term.as_deref())
        ));
        md.push_str(&format!(
            "**Long Term:** {}\n",
            or_na(growth.long_term.as_deref())
        ));
        if let Some(metrics) = &growth.key_metrics {
            md.push_str(&format!("**Key Metrics:** {}\n", metrics.join(", ")));
        }
    }
    md.push('\n');

    md.push_str("## Verdict\n");
    md.push_str(&format!("{}\n\n", or_empty(analysis.verdict.as_deref())));

    md.push_str("---\n");
    md.push_str(ATTRIBUTION);
    md.push('\n');

    md
}
