use serde::Serialize;

use crate::export::format::{score_label, score_percent};
use crate::models::idea::IdeaAnalysis;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreDimension {
    pub label: &'static str,
    pub score: f64,
    pub percent: f64,
}

/// Display-ready view of an analysis' scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    /// Missing viability scores count as 0.
    pub viability_score: f64,
    pub label: &'static str,
    pub percent: f64,
    pub breakdown: Vec<ScoreDimension>,
}

pub fn scorecard(analysis: &IdeaAnalysis) -> Scorecard {
    let viability_score = analysis.viability_score.map(|s| s.value()).unwrap_or(0.0);

    let breakdown = analysis
        .score_breakdown
        .as_ref()
        .map(|b| {
            b.dimensions()
                .into_iter()
                .map(|(label, score)| ScoreDimension {
                    label,
                    score: score.value(),
                    percent: score_percent(score.value()),
                })
                .collect()
        })
        .unwrap_or_default();

    Scorecard {
        viability_score,
        label: score_label(viability_score),
        percent: score_percent(viability_score),
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::idea::sample_analysis_json;

    #[test]
    fn test_scorecard_from_full_analysis() {
        let analysis = IdeaAnalysis::from_value(sample_analysis_json()).unwrap();
        let card = scorecard(&analysis);
        assert_eq!(card.viability_score, 7.0);
        assert_eq!(card.label, "Good");
        assert_eq!(card.percent, 70.0);
        assert_eq!(card.breakdown.len(), 2);
        assert_eq!(card.breakdown[0].label, "Market Opportunity");
        assert_eq!(card.breakdown[0].percent, 80.0);
    }

    #[test]
    fn test_scorecard_for_empty_analysis() {
        let card = scorecard(&IdeaAnalysis::default());
        assert_eq!(card.viability_score, 0.0);
        assert_eq!(card.label, "Needs Work");
        assert!(card.breakdown.is_empty());
    }
}
