//! RunSpec assembly.
//!
//! Sections are checked against [`SectionRules`] in a fixed order, then
//! flattened and wrapped into a strictly validated [`RunSpec`]:
//! 1. duplicate section names
//! 2. allowed list (skipped when empty)
//! 3. required sections present
//! 4. required-nonempty sections present and non-empty
//! 5. flatten blocks in section order
//! 6. wrap into `ModelSpec` / `RunSpec`
//! 7. strict validation

use std::collections::HashSet;

use cge_core::{ClosureSpec, Mappings, ScenarioSpec, Sets, Symbol};
use tracing::debug;

use crate::block::Block;
use crate::error::{AssemblyError, AssemblyResult};
use crate::inputs::RunInputs;
use crate::section::{RunSpecTemplate, SectionRules, SectionSpec};
use crate::spec::{ModelSpec, RunSpec};

/// Assemble a [`RunSpec`] from named sections.
///
/// Fails with the first violated rule; no partial `RunSpec` is ever returned.
pub fn build_run_spec(
    name: impl Into<Symbol>,
    sets: Sets,
    mappings: Mappings,
    sections: Vec<SectionSpec>,
    closure: ClosureSpec,
    scenario: ScenarioSpec,
    rules: &SectionRules,
) -> AssemblyResult<RunSpec> {
    let name = name.into();
    debug!(run = %name, sections = sections.len(), "assembling run spec");

    check_sections(&sections, rules).inspect_err(|e| {
        debug!(run = %name, error = %e, "section checks failed");
    })?;

    let blocks = flatten_sections(sections);
    debug!(run = %name, blocks = blocks.len(), "flattened sections");

    let model = ModelSpec::new(blocks, sets, mappings);
    let spec = RunSpec::new(name, model, closure, scenario)?;
    Ok(spec)
}

/// Template form of [`build_run_spec`]: the template supplies the run name and
/// the required-section list; `allowed` and `required_nonempty` pass through.
#[allow(clippy::too_many_arguments)]
pub fn build_run_spec_from_template(
    template: &RunSpecTemplate,
    sets: Sets,
    mappings: Mappings,
    sections: Vec<SectionSpec>,
    closure: ClosureSpec,
    scenario: ScenarioSpec,
    allowed: Vec<Symbol>,
    required_nonempty: Vec<Symbol>,
) -> AssemblyResult<RunSpec> {
    let rules = SectionRules {
        allowed,
        required_nonempty,
        ..SectionRules::from_template(template)
    };
    build_run_spec(
        template.name.clone(),
        sets,
        mappings,
        sections,
        closure,
        scenario,
        &rules,
    )
}

/// Run checks 1-4 in order.
pub fn check_sections(sections: &[SectionSpec], rules: &SectionRules) -> AssemblyResult<()> {
    check_unique(sections)?;
    check_allowed(sections, &rules.allowed)?;
    check_required(sections, &rules.required)?;
    check_required_nonempty(sections, &rules.required_nonempty)?;
    Ok(())
}

/// Every section name appears once; reports the first repeat in list order.
pub fn check_unique(sections: &[SectionSpec]) -> AssemblyResult<()> {
    let mut seen = HashSet::new();
    for section in sections {
        if !seen.insert(&section.name) {
            return Err(AssemblyError::DuplicateSection {
                section: section.name.clone(),
            });
        }
    }
    Ok(())
}

/// Every section name is in `allowed`. An empty `allowed` admits any name.
pub fn check_allowed(sections: &[SectionSpec], allowed: &[Symbol]) -> AssemblyResult<()> {
    if allowed.is_empty() {
        return Ok(());
    }
    let allowed: HashSet<&Symbol> = allowed.iter().collect();
    for section in sections {
        if !allowed.contains(&section.name) {
            return Err(AssemblyError::UnknownSection {
                section: section.name.clone(),
            });
        }
    }
    Ok(())
}

/// Every name in `required` is present among the sections.
pub fn check_required(sections: &[SectionSpec], required: &[Symbol]) -> AssemblyResult<()> {
    let present: HashSet<&Symbol> = sections.iter().map(|s| &s.name).collect();
    for name in required {
        if !present.contains(name) {
            return Err(AssemblyError::MissingRequiredSection {
                section: name.clone(),
            });
        }
    }
    Ok(())
}

/// Every name in `required_nonempty` names exactly one section, and that
/// section holds at least one block.
///
/// Does not rely on [`check_unique`] having run: more than one section with
/// the name is reported as [`AssemblyError::AmbiguousSection`].
pub fn check_required_nonempty(
    sections: &[SectionSpec],
    required_nonempty: &[Symbol],
) -> AssemblyResult<()> {
    for name in required_nonempty {
        let matching: Vec<&SectionSpec> = sections.iter().filter(|s| &s.name == name).collect();
        match matching.as_slice() {
            [] => {
                return Err(AssemblyError::MissingRequiredSection {
                    section: name.clone(),
                });
            }
            [section] => {
                if section.is_empty() {
                    return Err(AssemblyError::EmptyRequiredSection {
                        section: name.clone(),
                    });
                }
            }
            many => {
                return Err(AssemblyError::AmbiguousSection {
                    section: name.clone(),
                    count: many.len(),
                });
            }
        }
    }
    Ok(())
}

/// Concatenate section blocks in section order.
pub fn flatten_sections(sections: Vec<SectionSpec>) -> Vec<Box<dyn Block>> {
    sections.into_iter().flat_map(|s| s.blocks).collect()
}

/// Incremental builder over [`build_run_spec`].
///
/// Add sections with `section`, tighten the rules as needed, then call
/// `build()` to check, flatten and validate.
#[derive(Debug)]
pub struct RunSpecBuilder {
    name: Symbol,
    sets: Sets,
    mappings: Mappings,
    closure: ClosureSpec,
    scenario: ScenarioSpec,
    sections: Vec<SectionSpec>,
    rules: SectionRules,
}

impl RunSpecBuilder {
    /// Start an unrestricted builder for a baseline run.
    pub fn new(name: impl Into<Symbol>, sets: Sets, mappings: Mappings, closure: ClosureSpec) -> Self {
        Self {
            name: name.into(),
            sets,
            mappings,
            closure,
            scenario: ScenarioSpec::baseline(),
            sections: Vec::new(),
            rules: SectionRules::default(),
        }
    }

    /// Start from a template: its name becomes the run name and its required
    /// sections the required list.
    pub fn from_template(
        template: &RunSpecTemplate,
        sets: Sets,
        mappings: Mappings,
        closure: ClosureSpec,
    ) -> Self {
        let mut builder = Self::new(template.name.clone(), sets, mappings, closure);
        builder.rules = SectionRules::from_template(template);
        builder
    }

    /// Start from a loaded input document.
    pub fn from_inputs(inputs: RunInputs) -> Self {
        Self {
            name: inputs.name,
            sets: inputs.sets,
            mappings: inputs.mappings,
            closure: inputs.closure,
            scenario: inputs.scenario,
            sections: Vec::new(),
            rules: inputs.rules,
        }
    }

    pub fn scenario(mut self, scenario: ScenarioSpec) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn section(mut self, section: SectionSpec) -> Self {
        self.sections.push(section);
        self
    }

    pub fn sections(mut self, sections: impl IntoIterator<Item = SectionSpec>) -> Self {
        self.sections.extend(sections);
        self
    }

    pub fn rules(mut self, rules: SectionRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn required_sections<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.rules.required = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn allowed_sections<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.rules.allowed = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn required_nonempty<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.rules.required_nonempty = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> AssemblyResult<RunSpec> {
        build_run_spec(
            self.name,
            self.sets,
            self.mappings,
            self.sections,
            self.closure,
            self.scenario,
            &self.rules,
        )
    }
}
