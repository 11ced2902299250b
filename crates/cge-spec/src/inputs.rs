//! File-level description of a run's data inputs.

use cge_core::{ClosureSpec, Mappings, ScenarioSpec, Sets, Symbol};
use serde::{Deserialize, Serialize};

use crate::section::{RunSpecTemplate, SectionRules};

/// Everything a run needs except its blocks.
///
/// Blocks are code, not data; they are attached as sections on a
/// [`crate::RunSpecBuilder`] seeded with [`crate::RunSpecBuilder::from_inputs`].
///
/// ```yaml
/// name: standard
/// sets:
///   commodities: [agr, man]
///   activities: [a-agr, a-man]
///   factors: [lab, cap]
///   institutions: [hh]
/// mappings:
///   activity_output: { a-agr: agr, a-man: man }
/// closure:
///   numeraire: lab
/// rules:
///   required: [production]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunInputs {
    pub name: Symbol,
    pub sets: Sets,
    #[serde(default)]
    pub mappings: Mappings,
    pub closure: ClosureSpec,
    #[serde(default)]
    pub scenario: ScenarioSpec,
    #[serde(default)]
    pub rules: SectionRules,
}

impl RunInputs {
    /// Inputs named after `template` and requiring its sections.
    pub fn from_template(
        template: &RunSpecTemplate,
        sets: Sets,
        mappings: Mappings,
        closure: ClosureSpec,
    ) -> Self {
        Self {
            name: template.name.clone(),
            sets,
            mappings,
            closure,
            scenario: ScenarioSpec::baseline(),
            rules: SectionRules::from_template(template),
        }
    }
}
