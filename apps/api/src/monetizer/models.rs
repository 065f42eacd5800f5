use serde::{Deserialize, Serialize};

/// Which opportunity bundle a skill list maps to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Tech,
    Design,
    Writing,
    /// Fallback when no keyword matches.
    #[default]
    General,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Tech => "tech",
            SkillCategory::Design => "design",
            SkillCategory::Writing => "writing",
            SkillCategory::General => "general",
        }
    }
}

/// One actionable step inside an execution phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPhase {
    /// e.g. "Week 1: Foundation"
    pub phase: String,
    pub steps: Vec<ExecutionStep>,
}

/// A single monetization path (freelance, product or service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityPath {
    pub title: String,
    pub description: String,
    /// Human-readable range, never parsed as currency.
    pub earnings: String,
    pub first_step: String,
    pub execution_plan: Vec<ExecutionPhase>,
}

/// The freelance / product / service triple returned for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityBundle {
    pub freelance: OpportunityPath,
    pub product: OpportunityPath,
    pub service: OpportunityPath,
}

impl OpportunityBundle {
    /// Paths in card display order, labelled.
    pub fn paths(&self) -> [(&'static str, &OpportunityPath); 3] {
        [
            ("freelance", &self.freelance),
            ("product", &self.product),
            ("service", &self.service),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_snake_case() {
        let json = serde_json::to_string(&SkillCategory::Tech).unwrap();
        assert_eq!(json, r#""tech""#);
        let parsed: SkillCategory = serde_json::from_str(r#""general""#).unwrap();
        assert_eq!(parsed, SkillCategory::General);
    }

    #[test]
    fn test_category_default_is_general() {
        assert_eq!(SkillCategory::default(), SkillCategory::General);
    }

    #[test]
    fn test_path_uses_camel_case_keys() {
        let path = OpportunityPath {
            title: "t".to_string(),
            description: "d".to_string(),
            earnings: "$1".to_string(),
            first_step: "go".to_string(),
            execution_plan: vec![ExecutionPhase {
                phase: "Week 1".to_string(),
                steps: vec![ExecutionStep {
                    action: "a".to_string(),
                    tip: None,
                }],
            }],
        };
        let value = serde_json::to_value(&path).unwrap();
        assert_eq!(value["firstStep"], "go");
        assert_eq!(value["executionPlan"][0]["phase"], "Week 1");
        assert!(value["executionPlan"][0]["steps"][0].get("tip").is_none());
    }
}
