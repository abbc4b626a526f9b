//! Version constraint expressions.
//!
//! An expression is a conjunction of whitespace-separated atoms:
//! `*`, `1.2.0`, `1.*`, `^1.2.0`, `~1.2.0`, `~1.2`, `>=1.0`, `<2`, ...
//! A bare operator binds to the following token, so `1.* < 1.3` reads as the
//! two atoms `1.*` and `<1.3`. Intersection concatenates atom lists; nothing is
//! simplified, satisfiability only shows when candidates are filtered.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use catalyst_util::errors::CatalystError;

use crate::version::{compare_components, Version};

const OPERATORS: [&str; 8] = [">=", "<=", ">", "<", "==", "=", "^", "~"];

/// A conjunction of constraint atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    atoms: Vec<Atom>,
}

/// A single version requirement inside a [`Constraint`].
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    /// `*`: any fully-numeric version.
    Any,
    /// `V` or `=V`: the same normalized version, or the same literal tag.
    Exact(Version),
    /// `X.*`, `X.Y.*`: leading components equal the prefix.
    Wildcard(Vec<u64>),
    /// `^X.Y.Z`: at least the operand, below the next major.
    Caret(Vec<u64>),
    /// `~X.Y.Z` below the next minor; `~X.Y` below the next major.
    Tilde(Vec<u64>),
    /// `>=V`, `<=V`, `>V`, `<V`.
    Compare(Comparator, Vec<u64>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Greater,
    GreaterEq,
    Less,
    LessEq,
}

impl Comparator {
    fn symbol(self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::Less => "<",
            Self::LessEq => "<=",
        }
    }

    fn holds(self, ord: Ordering) -> bool {
        match self {
            Self::Greater => ord == Ordering::Greater,
            Self::GreaterEq => ord != Ordering::Less,
            Self::Less => ord == Ordering::Less,
            Self::LessEq => ord != Ordering::Greater,
        }
    }
}

impl Constraint {
    /// Parse a constraint expression. Malformed syntax is always an error.
    pub fn parse(text: &str) -> Result<Self, CatalystError> {
        let syntax = |message: String| CatalystError::ConstraintSyntax {
            constraint: text.to_string(),
            message,
        };

        let mut atoms = Vec::new();
        let mut tokens = text.split_whitespace();
        while let Some(token) = tokens.next() {
            let joined;
            let token = if OPERATORS.contains(&token) {
                let operand = tokens
                    .next()
                    .ok_or_else(|| syntax(format!("operator `{token}` is missing a version")))?;
                joined = format!("{token}{operand}");
                joined.as_str()
            } else {
                token
            };
            atoms.push(Atom::parse(token).map_err(syntax)?);
        }

        if atoms.is_empty() {
            return Err(syntax("empty constraint".to_string()));
        }
        Ok(Self { atoms })
    }

    /// The unconstrained expression `*`.
    pub fn any() -> Self {
        Self {
            atoms: vec![Atom::Any],
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Whether `version` satisfies every atom.
    pub fn is_satisfied_by(&self, version: &Version) -> bool {
        self.atoms.iter().all(|atom| atom.matches(version))
    }

    /// The conjunction of both expressions.
    pub fn intersect(&self, other: &Constraint) -> Constraint {
        let mut atoms = self.atoms.clone();
        atoms.extend(other.atoms.iter().cloned());
        Constraint { atoms }
    }

    /// Intersect a sequence of expressions; `None` when the sequence is empty.
    pub fn intersect_all<'a>(constraints: impl IntoIterator<Item = &'a Constraint>) -> Option<Self> {
        constraints.into_iter().fold(None, |acc, c| match acc {
            None => Some(c.clone()),
            Some(acc) => Some(acc.intersect(c)),
        })
    }
}

impl FromStr for Constraint {
    type Err = CatalystError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, atom) in self.atoms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}

impl Atom {
    fn parse(token: &str) -> Result<Self, String> {
        if token == "*" {
            return Ok(Self::Any);
        }
        for (symbol, comparator) in [
            (">=", Comparator::GreaterEq),
            ("<=", Comparator::LessEq),
            (">", Comparator::Greater),
            ("<", Comparator::Less),
        ] {
            if let Some(rest) = token.strip_prefix(symbol) {
                return Ok(Self::Compare(comparator, numeric_operand(rest)?));
            }
        }
        if let Some(rest) = token.strip_prefix('^') {
            return Ok(Self::Caret(numeric_operand(rest)?));
        }
        if let Some(rest) = token.strip_prefix('~') {
            return Ok(Self::Tilde(numeric_operand(rest)?));
        }
        if let Some(rest) = token.strip_prefix("==").or_else(|| token.strip_prefix('=')) {
            return exact_operand(rest).map(Self::Exact);
        }
        if let Some(prefix) = token.strip_suffix(".*") {
            return Ok(Self::Wildcard(numeric_operand(prefix)?));
        }
        exact_operand(token).map(Self::Exact)
    }

    /// Whether a single version satisfies this atom.
    ///
    /// Only [`Atom::Exact`] can match a non-numeric label.
    pub fn matches(&self, version: &Version) -> bool {
        match (self, version.components()) {
            (Self::Exact(expected), components) => match (expected.components(), components) {
                (Some(a), Some(b)) => compare_components(a, b) == Ordering::Equal,
                (None, None) => expected.stripped() == version.stripped(),
                _ => false,
            },
            (_, None) => false,
            (Self::Any, Some(_)) => true,
            (Self::Wildcard(prefix), Some(components)) => prefix
                .iter()
                .enumerate()
                .all(|(i, p)| component(components, i) == *p),
            (Self::Caret(operand), Some(components)) => {
                let upper = [component(operand, 0).saturating_add(1)];
                in_half_open(components, operand, &upper)
            }
            (Self::Tilde(operand), Some(components)) => {
                let upper = if operand.len() >= 3 {
                    vec![component(operand, 0), component(operand, 1).saturating_add(1)]
                } else {
                    vec![component(operand, 0).saturating_add(1)]
                };
                in_half_open(components, operand, &upper)
            }
            (Self::Compare(comparator, operand), Some(components)) => {
                comparator.holds(compare_components(components, operand))
            }
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Exact(version) => f.write_str(version.as_str()),
            Self::Wildcard(prefix) => write!(f, "{}.*", dotted(prefix)),
            Self::Caret(operand) => write!(f, "^{}", dotted(operand)),
            Self::Tilde(operand) => write!(f, "~{}", dotted(operand)),
            Self::Compare(comparator, operand) => {
                write!(f, "{}{}", comparator.symbol(), dotted(operand))
            }
        }
    }
}

fn component(components: &[u64], index: usize) -> u64 {
    components.get(index).copied().unwrap_or(0)
}

fn in_half_open(version: &[u64], lower: &[u64], upper: &[u64]) -> bool {
    compare_components(version, lower) != Ordering::Less
        && compare_components(version, upper) == Ordering::Less
}

fn dotted(components: &[u64]) -> String {
    components
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

fn check_charset(operand: &str) -> Result<(), String> {
    if operand.is_empty() {
        return Err("missing version".to_string());
    }
    match operand
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '+')))
    {
        Some('*') => Err(format!("wildcard must be the last segment in `{operand}`")),
        Some(c) => Err(format!("unexpected character `{c}` in `{operand}`")),
        None => Ok(()),
    }
}

fn numeric_operand(operand: &str) -> Result<Vec<u64>, String> {
    check_charset(operand)?;
    Version::parse(operand)
        .components()
        .map(<[u64]>::to_vec)
        .ok_or_else(|| format!("`{operand}` is not a numeric version"))
}

fn exact_operand(operand: &str) -> Result<Version, String> {
    check_charset(operand)?;
    Ok(Version::parse(operand))
}
