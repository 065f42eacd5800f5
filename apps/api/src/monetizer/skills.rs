use serde::{Deserialize, Serialize};

/// A transition on the skill list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "skill", rename_all = "snake_case")]
pub enum SkillAction {
    Add(String),
    Remove(String),
    Clear,
}

/// Ordered, case-preserved skill list, only mutated through `apply`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    skills: Vec<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `Add` over raw inputs: trims, drops blanks and exact duplicates.
    pub fn from_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for input in inputs {
            set.apply(SkillAction::Add(input.into()));
        }
        set
    }

    /// Applies one action; returns whether the list changed.
    pub fn apply(&mut self, action: SkillAction) -> bool {
        match action {
            SkillAction::Add(raw) => {
                let skill = raw.trim();
                // duplicates are exact, case-sensitive matches
                if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
                    return false;
                }
                self.skills.push(skill.to_string());
                true
            }
            SkillAction::Remove(skill) => {
                let before = self.skills.len();
                self.skills.retain(|s| *s != skill);
                self.skills.len() != before
            }
            SkillAction::Clear => {
                let changed = !self.skills.is_empty();
                self.skills.clear();
                changed
            }
        }
    }

    /// True once there is something to classify.
    pub fn is_ready(&self) -> bool {
        !self.skills.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }
}
