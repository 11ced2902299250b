//! Sections, templates and the rules a section list is checked against.

use core::fmt;
use core::str::FromStr;

use cge_core::{CoreError, Symbol};
use serde::{Deserialize, Serialize};

use crate::block::Block;

/// Named, ordered bucket of blocks handed to the builder.
///
/// Transient: sections exist only to feed assembly and are flattened away.
#[derive(Debug)]
pub struct SectionSpec {
    pub name: Symbol,
    pub blocks: Vec<Box<dyn Block>>,
}

impl SectionSpec {
    pub fn new(name: impl Into<Symbol>, blocks: Vec<Box<dyn Block>>) -> Self {
        Self {
            name: name.into(),
            blocks,
        }
    }

    pub fn empty(name: impl Into<Symbol>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn with_block(mut self, block: impl Block + 'static) -> Self {
        self.blocks.push(Box::new(block));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// The shared section vocabulary model-family templates draw from.
///
/// The builder itself accepts any section name unless an allowed list is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalSection {
    Production,
    Factors,
    Government,
    Savings,
    Households,
    Prices,
    External,
    Trade,
    Markets,
    Objective,
    Init,
    Closure,
}

impl CanonicalSection {
    pub const ALL: [CanonicalSection; 12] = [
        CanonicalSection::Production,
        CanonicalSection::Factors,
        CanonicalSection::Government,
        CanonicalSection::Savings,
        CanonicalSection::Households,
        CanonicalSection::Prices,
        CanonicalSection::External,
        CanonicalSection::Trade,
        CanonicalSection::Markets,
        CanonicalSection::Objective,
        CanonicalSection::Init,
        CanonicalSection::Closure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalSection::Production => "production",
            CanonicalSection::Factors => "factors",
            CanonicalSection::Government => "government",
            CanonicalSection::Savings => "savings",
            CanonicalSection::Households => "households",
            CanonicalSection::Prices => "prices",
            CanonicalSection::External => "external",
            CanonicalSection::Trade => "trade",
            CanonicalSection::Markets => "markets",
            CanonicalSection::Objective => "objective",
            CanonicalSection::Init => "init",
            CanonicalSection::Closure => "closure",
        }
    }

    pub fn symbol(self) -> Symbol {
        Symbol::from(self.as_str())
    }

    /// All canonical names as symbols, in vocabulary order.
    pub fn symbols() -> Vec<Symbol> {
        Self::ALL.into_iter().map(Self::symbol).collect()
    }
}

impl fmt::Display for CanonicalSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalSection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSection { name: s.to_string() })
    }
}

impl From<CanonicalSection> for Symbol {
    fn from(c: CanonicalSection) -> Self {
        c.symbol()
    }
}

/// A model family's structural contract: its name and required sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSpecTemplate {
    pub name: Symbol,
    #[serde(default)]
    pub required_sections: Vec<Symbol>,
}

impl RunSpecTemplate {
    pub fn new<I, S>(name: impl Into<Symbol>, required_sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Self {
            name: name.into(),
            required_sections: required_sections.into_iter().map(Into::into).collect(),
        }
    }
}

/// Section-list constraints applied during assembly.
///
/// An empty `allowed` list means "no restriction", not "nothing allowed".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRules {
    #[serde(default)]
    pub required: Vec<Symbol>,
    #[serde(default)]
    pub allowed: Vec<Symbol>,
    #[serde(default)]
    pub required_nonempty: Vec<Symbol>,
}

impl SectionRules {
    /// Rules that require the template's sections and nothing else.
    pub fn from_template(template: &RunSpecTemplate) -> Self {
        Self {
            required: template.required_sections.clone(),
            ..Self::default()
        }
    }

    /// Rules that restrict section names to the canonical vocabulary.
    pub fn canonical() -> Self {
        Self {
            allowed: CanonicalSection::symbols(),
            ..Self::default()
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.allowed.is_empty()
    }
}
