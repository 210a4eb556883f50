//! Configuration for the quiz skill.

use crate::templates::TemplateRegistry;

/// Smallest quiz a player may ask for.
pub const MIN_PROBLEMS: usize = 1;

/// Largest quiz a player may ask for.
pub const MAX_PROBLEMS: usize = 20;

/// Configuration for a [`MathQuizSkill`](crate::MathQuizSkill).
#[derive(Debug, Clone)]
pub struct SkillConfig {
    /// RNG seed for reproducible problems and exclamations. `None` seeds
    /// from the operating system.
    pub seed: Option<u64>,
    /// Prompt text used for every response.
    pub templates: TemplateRegistry,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            seed: None,
            templates: TemplateRegistry::english(),
        }
    }
}

impl SkillConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the prompt templates.
    pub fn with_templates(mut self, templates: TemplateRegistry) -> Self {
        self.templates = templates;
        self
    }
}
