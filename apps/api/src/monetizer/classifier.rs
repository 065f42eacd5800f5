//! Opportunity classifier — maps a skill list to one opportunity bundle.
//!
//! Algorithm:
//! 1. Trim and lower-case every skill.
//! 2. Walk `rules` top to bottom; the first rule with a keyword contained in any
//!    skill (substring, not whole word) wins.
//! 3. No match → `SkillCategory::General`.
//!
//! Priority is the order of the rule table: tech > design > writing > general.

use serde::Serialize;

use crate::errors::AppError;
use crate::monetizer::catalog::bundle_for;
use crate::monetizer::models::{OpportunityBundle, SkillCategory};

/// One row of the ordered rule table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationRule {
    pub category: SkillCategory,
    pub keywords: &'static [&'static str],
}

impl ClassificationRule {
    fn matches(&self, normalized_skill: &str) -> bool {
        self.keywords.iter().any(|kw| normalized_skill.contains(kw))
    }
}

const TECH_KEYWORDS: &[&str] = &["react", "python", "javascript", "node", "code", "web", "dev"];
const DESIGN_KEYWORDS: &[&str] = &["design", "figma", "ui", "ux", "logo", "photoshop"];
const WRITING_KEYWORDS: &[&str] = &["writing", "content", "copy", "blog", "seo"];

/// Ordered keyword classifier. Held in `AppState` behind an `Arc`.
#[derive(Debug, Clone)]
pub struct OpportunityClassifier {
    rules: Vec<ClassificationRule>,
}

impl Default for OpportunityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl OpportunityClassifier {
    pub fn new() -> Self {
        Self {
            rules: vec![
                ClassificationRule {
                    category: SkillCategory::Tech,
                    keywords: TECH_KEYWORDS,
                },
                ClassificationRule {
                    category: SkillCategory::Design,
                    keywords: DESIGN_KEYWORDS,
                },
                ClassificationRule {
                    category: SkillCategory::Writing,
                    keywords: WRITING_KEYWORDS,
                },
            ],
        }
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Picks the category for a skill list. Empty (or all-blank) input is rejected.
    pub fn categorize<S: AsRef<str>>(&self, skills: &[S]) -> Result<SkillCategory, AppError> {
        let normalized: Vec<String> = skills
            .iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        if normalized.is_empty() {
            return Err(AppError::Validation("skills cannot be empty".to_string()));
        }

        let category = self
            .rules
            .iter()
            .find(|rule| normalized.iter().any(|skill| rule.matches(skill)))
            .map(|rule| rule.category)
            .unwrap_or_default();

        Ok(category)
    }

    /// Classifies a skill list and returns a fresh copy of the matching bundle.
    ///
    /// Handlers that also report the category call `categorize` and `bundle_for`.
    #[allow(dead_code)]
    pub fn classify<S: AsRef<str>>(&self, skills: &[S]) -> Result<OpportunityBundle, AppError> {
        let category = self.categorize(skills)?;
        Ok(bundle_for(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorize(skills: &[&str]) -> SkillCategory {
        OpportunityClassifier::new().categorize(skills).unwrap()
    }

    #[test]
    fn test_table_driven_categories() {
        let cases: &[(&[&str], SkillCategory)] = &[
            (&["React"], SkillCategory::Tech),
            (&["python scripting"], SkillCategory::Tech),
            (&["Web scraping"], SkillCategory::Tech),
            (&["DevOps"], SkillCategory::Tech),
            (&["Photoshop"], SkillCategory::Design),
            (&["Figma"], SkillCategory::Design),
            (&["UX research"], SkillCategory::Design),
            (&["Logo sketching"], SkillCategory::Design),
            (&["Copywriting and SEO"], SkillCategory::Writing),
            (&["Blogging"], SkillCategory::Writing),
            (&["Content strategy"], SkillCategory::Writing),
            (&["Welding"], SkillCategory::General),
            (&["Accounting", "Public speaking"], SkillCategory::General),
        ];

        for (skills, expected) in cases {
            assert_eq!(categorize(skills), *expected, "skills: {skills:?}");
        }
    }

    #[test]
    fn test_tech_beats_design() {
        assert_eq!(categorize(&["React", "Figma"]), SkillCategory::Tech);
        assert_eq!(categorize(&["Figma", "React"]), SkillCategory::Tech);
    }

    #[test]
    fn test_design_beats_writing() {
        assert_eq!(categorize(&["Blog writing", "Figma"]), SkillCategory::Design);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // "build" contains "ui"; "copywriting" contains "copy" and "writing".
        assert_eq!(categorize(&["Building furniture"]), SkillCategory::Design);
        assert_eq!(categorize(&["copywriting"]), SkillCategory::Writing);
        // one skill can hit several rules; the earliest rule wins
        assert_eq!(categorize(&["uix-design-copy-editing"]), SkillCategory::Design);
    }

    #[test]
    fn test_matching_is_case_insensitive_and_trimmed() {
        assert_eq!(categorize(&["  PHOTOSHOP  "]), SkillCategory::Design);
        assert_eq!(categorize(&["JavaScript"]), SkillCategory::Tech);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let classifier = OpportunityClassifier::new();
        let empty: [&str; 0] = [];
        assert!(matches!(
            classifier.categorize(&empty),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            classifier.classify(&["   ", ""]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_entries_are_ignored_next_to_real_ones() {
        assert_eq!(categorize(&["", "Figma"]), SkillCategory::Design);
    }

    #[test]
    fn test_classify_returns_expected_titles() {
        let classifier = OpportunityClassifier::new();
        let design = classifier.classify(&["Photoshop"]).unwrap();
        assert_eq!(design.freelance.title, "Social Media Asset Designer");

        let writing = classifier.classify(&["Copywriting and SEO"]).unwrap();
        assert_eq!(writing.product.title, "Cold Email Templates Pack");

        let general = classifier.classify(&["Welding"]).unwrap();
        assert_eq!(general.freelance.title, "Virtual Technical Assistant");
    }

    #[test]
    fn test_categorize_then_bundle_for_matches_classify() {
        let classifier = OpportunityClassifier::new();
        for skills in [&["Figma", "Python"][..], &["Blogging"], &["Pottery"]] {
            let category = classifier.categorize(skills).unwrap();
            assert_eq!(bundle_for(category), classifier.classify(skills).unwrap());
        }
    }

    #[test]
    fn test_classify_is_deterministic_and_order_independent() {
        let classifier = OpportunityClassifier::new();
        let a = classifier.classify(&["Node", "Logo design", "Baking"]).unwrap();
        let b = classifier.classify(&["Node", "Logo design", "Baking"]).unwrap();
        let c = classifier.classify(&["Baking", "Logo design", "Node"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_classify_accepts_owned_strings() {
        let skills = vec!["Figma".to_string()];
        let bundle = OpportunityClassifier::default().classify(&skills).unwrap();
        assert_eq!(bundle.service.title, "Landing Page Redesign Audit");
    }

    #[test]
    fn test_rule_table_order() {
        let classifier = OpportunityClassifier::new();
        let order: Vec<SkillCategory> = classifier.rules().iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![SkillCategory::Tech, SkillCategory::Design, SkillCategory::Writing]
        );
        assert!(classifier.rules()[2].keywords.contains(&"seo"));
    }
}
