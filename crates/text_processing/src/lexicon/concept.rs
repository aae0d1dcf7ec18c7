//! Closed set of concept tags
//!
//! Each enum lists its variants in definition order. The extractor scans
//! concepts in exactly this order and the first hit wins, so reordering
//! variants changes classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Command verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionKind {
    Search,
    Show,
    Create,
    Update,
    Delete,
    Call,
    Send,
}

impl ActionKind {
    pub const ALL: [ActionKind; 7] = [
        Self::Search,
        Self::Show,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Call,
        Self::Send,
    ];

    /// Concept name (`SEARCH`)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Search => "SEARCH",
            Self::Show => "SHOW",
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Call => "CALL",
            Self::Send => "SEND",
        }
    }

    /// Value placed in the intent payload (`search`)
    pub fn payload_value(&self) -> String {
        self.name().to_lowercase()
    }

    /// Intent name (`SEARCH_COMMAND`)
    pub fn intent_name(&self) -> String {
        format!("{}_COMMAND", self.name())
    }
}

/// Business entities a command can address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetKind {
    Leads,
    Payments,
    Customers,
    Orders,
    Inventory,
    Analytics,
    Dashboard,
}

impl TargetKind {
    pub const ALL: [TargetKind; 7] = [
        Self::Leads,
        Self::Payments,
        Self::Customers,
        Self::Orders,
        Self::Inventory,
        Self::Analytics,
        Self::Dashboard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Leads => "LEADS",
            Self::Payments => "PAYMENTS",
            Self::Customers => "CUSTOMERS",
            Self::Orders => "ORDERS",
            Self::Inventory => "INVENTORY",
            Self::Analytics => "ANALYTICS",
            Self::Dashboard => "DASHBOARD",
        }
    }

    /// Value placed in the intent payload (`leads`)
    pub fn payload_value(&self) -> String {
        self.name().to_lowercase()
    }
}

/// Filter keyword groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterKind {
    Priority,
    Status,
    Location,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] = [Self::Priority, Self::Status, Self::Location];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Priority => "PRIORITY",
            Self::Status => "STATUS",
            Self::Location => "LOCATION",
        }
    }
}

/// Words that carry no command meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NoiseKind {
    /// Possessive and connective markers (ka, ki, of, for)
    Connective,
    /// Conversational fillers (please, zara, okay)
    Filler,
}

impl NoiseKind {
    pub const ALL: [NoiseKind; 2] = [Self::Connective, Self::Filler];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Connective => "CONNECTIVE",
            Self::Filler => "FILLER",
        }
    }
}

/// Concept category; word-forms must be disjoint within one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Action,
    Target,
    Filter,
    Noise,
}

/// Any lexicon concept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Concept {
    Action(ActionKind),
    Target(TargetKind),
    Filter(FilterKind),
    Noise(NoiseKind),
}

impl Concept {
    /// Every concept, category by category, in definition order
    pub fn all() -> impl Iterator<Item = Concept> {
        ActionKind::ALL
            .into_iter()
            .map(Concept::Action)
            .chain(TargetKind::ALL.into_iter().map(Concept::Target))
            .chain(FilterKind::ALL.into_iter().map(Concept::Filter))
            .chain(NoiseKind::ALL.into_iter().map(Concept::Noise))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Action(k) => k.name(),
            Self::Target(k) => k.name(),
            Self::Filter(k) => k.name(),
            Self::Noise(k) => k.name(),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Action(_) => Category::Action,
            Self::Target(_) => Category::Target,
            Self::Filter(_) => Category::Filter,
            Self::Noise(_) => Category::Noise,
        }
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Concept {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Concept::all()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| format!("unknown concept '{}'", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_order() {
        assert_eq!(ActionKind::ALL[0], ActionKind::Search);
        assert_eq!(ActionKind::ALL[1], ActionKind::Show);
        assert_eq!(ActionKind::ALL[2], ActionKind::Create);
        assert_eq!(TargetKind::ALL[0], TargetKind::Leads);
    }

    #[test]
    fn test_names() {
        assert_eq!(ActionKind::Search.intent_name(), "SEARCH_COMMAND");
        assert_eq!(ActionKind::Show.payload_value(), "show");
        assert_eq!(TargetKind::Leads.payload_value(), "leads");
        assert_eq!(Concept::Filter(FilterKind::Location).to_string(), "LOCATION");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("search".parse::<Concept>(), Ok(Concept::Action(ActionKind::Search)));
        assert_eq!(" Leads ".parse::<Concept>(), Ok(Concept::Target(TargetKind::Leads)));
        assert_eq!("FILLER".parse::<Concept>(), Ok(Concept::Noise(NoiseKind::Filler)));
        assert!("MUSIC".parse::<Concept>().is_err());
    }

    #[test]
    fn test_all_is_unique() {
        let all: Vec<Concept> = Concept::all().collect();
        assert_eq!(all.len(), 7 + 7 + 3 + 2);
        let mut names: Vec<&str> = all.iter().map(|c| c.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }
}
