//! Idea-validation report shapes.
//!
//! The validator backend returns loosely shaped JSON; every field here is optional
//! so a partial report still deserializes and renders.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// A 1–10 score. Accepts JSON numbers and numeric strings ("7", "7.5").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score(pub f64);

impl Score {
    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawScore::deserialize(deserializer)? {
            RawScore::Number(n) => Ok(Score(n)),
            RawScore::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Score)
                .map_err(|_| serde::de::Error::custom(format!("score '{s}' is not a number"))),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Whole scores stay integers on the wire, as the backend sends them.
        if self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Reads a free-text field that the backend sometimes sends as a number, bool
/// or list. Lists join with `,` and objects fall back to compact JSON.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(text_of))
}

fn lenient_phase<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(text_of)
                .collect::<Vec<_>>()
                .join(","),
        ),
        object @ Value::Object(_) => Some(object.to_string()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketDemand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trends: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub market_size: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetCustomers {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_points: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub buying_behavior: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    /// "low" | "medium" | "high"
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_competitors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indirect_competitors: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub differentiation: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub competitive_advantage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    /// market / technical / financial / regulatory
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonetizationModel {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub potential: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub considerations: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MvpRecommendation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nice_to_have: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanPhase {
    #[serde(default, deserialize_with = "lenient_phase")]
    pub phase: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthStrategy {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub short_term: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub medium_term: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub long_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_metrics: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_opportunity: Option<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_feasibility: Option<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniqueness: Option<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_potential: Option<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalability: Option<Score>,
}

impl ScoreBreakdown {
    /// Labelled dimensions in display order, skipping absent ones.
    pub fn dimensions(&self) -> Vec<(&'static str, Score)> {
        [
            ("Market Opportunity", self.market_opportunity),
            ("Execution Feasibility", self.execution_feasibility),
            ("Uniqueness", self.uniqueness),
            ("Revenue Potential", self.revenue_potential),
            ("Scalability", self.scalability),
        ]
        .into_iter()
        .filter_map(|(label, score)| score.map(|s| (label, s)))
        .collect()
    }
}

/// Full viability report for one business idea.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdeaAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viability_score: Option<Score>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub idea_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_demand: Option<MarketDemand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_customers: Option<TargetCustomers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition: Option<Competition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risks: Option<Vec<Risk>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monetization: Option<Vec<MonetizationModel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mvp_recommendation: Option<MvpRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_plan: Option<Vec<PlanPhase>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_strategy: Option<GrowthStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_breakdown: Option<ScoreBreakdown>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    /// Keys this model doesn't know about, kept so exports don't lose data.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdeaAnalysis {
    /// Builds an analysis from an untyped JSON body.
    ///
    /// Non-objects are rejected as invalid input; objects whose known keys have
    /// the wrong shape are reported as unprocessable.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        if !value.is_object() {
            return Err(AppError::Validation(
                "analysis must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value)
            .map_err(|e| AppError::UnprocessableEntity(format!("analysis has an unexpected shape: {e}")))
    }
}

/// Complete report as the validator backend returns it.
#[cfg(test)]
pub(crate) fn sample_analysis_json() -> Value {
    use serde_json::json;

    json!({
        "idea_summary": "A marketplace for local tutors.",
        "market_demand": {
            "score": 8,
            "analysis": "Strong demand in urban areas.",
            "trends": ["Remote learning"],
            "market_size": "$5B"
        },
        "target_customers": {
            "primary": "Parents of K-12 students",
            "secondary": "Adult learners",
            "pain_points": ["Finding vetted tutors"]
        },
        "competition": {"level": "medium", "differentiation": "Hyper-local vetting"},
        "risks": [{
            "type": "market",
            "description": "Low retention",
            "severity": "high",
            "mitigation": "Subscription bundles"
        }],
        "improvements": ["Add group sessions"],
        "monetization": [{"model": "Commission", "description": "15% per booking", "potential": "high"}],
        "mvp_recommendation": {
            "core_features": ["Search", "Booking"],
            "timeline": "3 months",
            "budget_range": "$20k - $40k"
        },
        "execution_plan": [{"phase": "Validation", "steps": ["Interview 20 parents", "Landing page"]}],
        "growth_strategy": {
            "short_term": "One city",
            "medium_term": "Three cities",
            "long_term": "National",
            "key_metrics": ["Bookings", "Retention"]
        },
        "viability_score": 7,
        "score_breakdown": {"market_opportunity": 8, "uniqueness": "6"},
        "verdict": "Promising with focus."
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_analysis_deserializes() {
        let analysis = IdeaAnalysis::from_value(sample_analysis_json()).unwrap();
        assert_eq!(analysis.viability_score, Some(Score(7.0)));
        assert_eq!(
            analysis.market_demand.as_ref().and_then(|m| m.score),
            Some(Score(8.0))
        );
        let risks = analysis.risks.as_ref().unwrap();
        assert_eq!(risks[0].kind.as_deref(), Some("market"));
        assert_eq!(analysis.execution_plan.as_ref().unwrap()[0].steps.len(), 2);
        assert!(analysis.extra.is_empty());
    }

    #[test]
    fn test_empty_object_is_valid() {
        let analysis = IdeaAnalysis::from_value(json!({})).unwrap();
        assert_eq!(analysis, IdeaAnalysis::default());
    }

    #[test]
    fn test_non_object_rejected() {
        let err = IdeaAnalysis::from_value(json!("not an analysis")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let err = IdeaAnalysis::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_wrong_nested_shape_is_unprocessable() {
        let err = IdeaAnalysis::from_value(json!({"risks": "none"})).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_score_accepts_numeric_strings() {
        let analysis = IdeaAnalysis::from_value(json!({"viability_score": " 6.5 "})).unwrap();
        assert_eq!(analysis.viability_score, Some(Score(6.5)));
    }

    #[test]
    fn test_score_rejects_non_numeric_string() {
        let err = IdeaAnalysis::from_value(json!({"viability_score": "high"})).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_whole_scores_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&Score(7.0)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&Score(7.5)).unwrap(), "7.5");
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let analysis =
            IdeaAnalysis::from_value(json!({"verdict": "ok", "investor_notes": {"a": 1}})).unwrap();
        assert_eq!(analysis.extra["investor_notes"], json!({"a": 1}));
        let back = serde_json::to_value(&analysis).unwrap();
        assert_eq!(back, json!({"verdict": "ok", "investor_notes": {"a": 1}}));
    }

    #[test]
    fn test_loose_text_fields_are_accepted() {
        let analysis = IdeaAnalysis::from_value(json!({
            "market_demand": {"score": 8, "market_size": 5000000000u64},
            "mvp_recommendation": {"tech_stack": ["React", "Node"], "timeline": 12},
            "competition": {"level": null},
            "verdict": true
        }))
        .unwrap();

        let demand = analysis.market_demand.unwrap();
        assert_eq!(demand.market_size.as_deref(), Some("5000000000"));
        let mvp = analysis.mvp_recommendation.unwrap();
        assert_eq!(mvp.tech_stack.as_deref(), Some("React,Node"));
        assert_eq!(mvp.timeline.as_deref(), Some("12"));
        assert_eq!(analysis.competition.unwrap().level, None);
        assert_eq!(analysis.verdict.as_deref(), Some("true"));
    }

    #[test]
    fn test_plan_phase_accepts_null_or_missing_name() {
        let analysis = IdeaAnalysis::from_value(json!({
            "execution_plan": [
                {"phase": null, "steps": ["Interview users"]},
                {"steps": []},
                {"phase": 2, "steps": []}
            ]
        }))
        .unwrap();

        let plan = analysis.execution_plan.unwrap();
        assert_eq!(plan[0].phase, "");
        assert_eq!(plan[0].steps, vec!["Interview users".to_string()]);
        assert_eq!(plan[1].phase, "");
        assert_eq!(plan[2].phase, "2");
    }

    #[test]
    fn test_score_breakdown_dimensions_skip_missing() {
        let analysis = IdeaAnalysis::from_value(sample_analysis_json()).unwrap();
        let dims = analysis.score_breakdown.unwrap().dimensions();
        assert_eq!(
            dims,
            vec![("Market Opportunity", Score(8.0)), ("Uniqueness", Score(6.0))]
        );
    }
}
