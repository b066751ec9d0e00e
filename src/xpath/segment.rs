//! One step of a compiled path

use std::fmt;

use tracing::trace;

use crate::error::{XPathError, XPathErrorKind};
use crate::xpath::predicate::{Predicate, PREDICATE_END, PREDICATE_START};

/// The step that selects text nodes
pub const TEXT_STEP: &str = "text()";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Element name test plus predicates, all evaluated on the same node
    Named {
        name: String,
        predicates: Vec<Predicate>,
    },
    /// `text()`
    Text,
}

impl Segment {
    pub fn named(name: impl Into<String>, predicates: Vec<Predicate>) -> Self {
        Self::Named {
            name: name.into(),
            predicates,
        }
    }

    /// Compile one `/`-separated part of a path
    ///
    /// Everything before the first `[` is the element name; the remainder must
    /// be a run of `[...]` groups separated only by whitespace.
    pub fn parse(s: &str) -> Result<Self, XPathError> {
        let (name, mut rest) = match s.find(PREDICATE_START) {
            Some(0) => ("", s),
            Some(start) => {
                let (name, tail) = s.split_at(start);
                (check_name(name)?, tail.trim())
            }
            None => (check_name(s)?, ""),
        };

        let mut predicates = Vec::new();
        while !rest.is_empty() {
            let Some(group) = rest.strip_prefix(PREDICATE_START) else {
                return Err(XPathError::new(XPathErrorKind::PredicateStart));
            };
            let (inside, tail) = group
                .split_once(PREDICATE_END)
                .ok_or_else(|| XPathError::new(XPathErrorKind::PredicateEnd))?;
            predicates.push(Predicate::parse(inside.trim())?);
            rest = tail.trim();
        }

        if name == TEXT_STEP {
            trace!("compiled text step");
            return Ok(Self::Text);
        }
        trace!(element = name, predicates = predicates.len(), "compiled segment");
        Ok(Self::named(name, predicates))
    }

    /// Element name tested by this step; `None` for `text()`
    pub fn element_name(&self) -> Option<&str> {
        match self {
            Self::Named { name, .. } => Some(name.as_str()),
            Self::Text => None,
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        match self {
            Self::Named { predicates, .. } => predicates.as_slice(),
            Self::Text => &[],
        }
    }
}

fn check_name(name: &str) -> Result<&str, XPathError> {
    if name.contains(PREDICATE_END) {
        return Err(XPathError::new(XPathErrorKind::BracketInName {
            name: name.to_string(),
        }));
    }
    Ok(name)
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, predicates } => {
                f.write_str(name)?;
                for predicate in predicates {
                    write!(f, "{predicate}")?;
                }
                Ok(())
            }
            Self::Text => f.write_str(TEXT_STEP),
        }
    }
}
