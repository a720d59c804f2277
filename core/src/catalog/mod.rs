//! Static catalog of Gremlin traversal steps and predicates.
//!
//! The catalog is process-wide, read-only data: every step/predicate name
//! maps to an ordered list of overloads ([`Signature`]) consulted by the
//! tokenizer and the signature resolver. The tables themselves live in
//! [`steps`] and [`predicates`]; lookups go through lazily built hash
//! indices.

use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Serialize;

mod predicates;
mod steps;

/// The closed set of value kinds shared between the catalog's parameter
/// declarations and the tokenizer's literal classifier. Adding a literal
/// kind requires updating both in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Any,
    String,
    Integer,
    Long,
    Double,
    Boolean,
    Comparator,
    Traversal,
    Predicate,
    Scope,
    Token,
    Accessor,
    Direction,
    Function,
    Cardinality,
    Pop,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Any => "any",
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Long => "long",
            Kind::Double => "double",
            Kind::Boolean => "boolean",
            Kind::Comparator => "comparator",
            Kind::Traversal => "traversal",
            Kind::Predicate => "predicate",
            Kind::Scope => "scope",
            Kind::Token => "token",
            Kind::Accessor => "accessor",
            Kind::Direction => "direction",
            Kind::Function => "function",
            Kind::Cardinality => "cardinality",
            Kind::Pop => "pop",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared parameter of a step/predicate overload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub kind: Kind,
    /// Varargs marker: the parameter absorbs any number of trailing values.
    pub multiple: bool,
    pub description: Option<&'static str>,
}

/// One declared call shape for a step or predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// TinkerPop release that introduced the overload, e.g. `3.4.0`.
    pub since: &'static str,
    pub description: &'static str,
    pub returns: Option<&'static str>,
    pub parameters: &'static [Parameter],
}

impl Signature {
    pub fn is_nullary(&self) -> bool {
        self.parameters.is_empty()
    }
}

// Shorthand constructors for the data tables.

pub(crate) const fn p(kind: Kind, name: &'static str) -> Parameter {
    Parameter {
        name,
        kind,
        multiple: false,
        description: None,
    }
}

pub(crate) const fn pd(kind: Kind, name: &'static str, description: &'static str) -> Parameter {
    Parameter {
        name,
        kind,
        multiple: false,
        description: Some(description),
    }
}

pub(crate) const fn pm(kind: Kind, name: &'static str, description: &'static str) -> Parameter {
    Parameter {
        name,
        kind,
        multiple: true,
        description: Some(description),
    }
}

pub(crate) const fn pn(kind: Kind, name: &'static str) -> Parameter {
    Parameter {
        name,
        kind,
        multiple: true,
        description: None,
    }
}

pub(crate) const fn sig(
    since: &'static str,
    returns: Option<&'static str>,
    description: &'static str,
    parameters: &'static [Parameter],
) -> Signature {
    Signature {
        since,
        description,
        returns,
        parameters,
    }
}

static STEP_INDEX: Lazy<FxHashMap<&'static str, &'static [Signature]>> =
    Lazy::new(|| steps::STEPS.iter().copied().collect());

static PREDICATE_INDEX: Lazy<FxHashMap<&'static str, &'static [Signature]>> =
    Lazy::new(|| predicates::PREDICATES.iter().copied().collect());

/// Overloads of a traversal step, if the name is a known step.
pub fn step(name: &str) -> Option<&'static [Signature]> {
    STEP_INDEX.get(name).copied()
}

/// Overloads of a predicate, if the name is a known predicate.
pub fn predicate(name: &str) -> Option<&'static [Signature]> {
    PREDICATE_INDEX.get(name).copied()
}

/// All steps in catalog order.
pub fn steps() -> impl Iterator<Item = (&'static str, &'static [Signature])> {
    steps::STEPS.iter().copied()
}

/// All predicates in catalog order.
pub fn predicates() -> impl Iterator<Item = (&'static str, &'static [Signature])> {
    predicates::PREDICATES.iter().copied()
}

#[cfg(test)]
mod catalog_test;
