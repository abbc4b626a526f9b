//! Version label normalization and ordering.
//!
//! Repositories publish versions as free-form labels. Ordering is numeric:
//! - A single leading non-digit marker is ignored (`v1.0.2` ranks as `1.0.2`)
//! - The rest is split on `.` and every segment compares as an integer
//! - Missing trailing segments count as `0`, so `1.0` equals `1.0.0`
//! - Labels with a non-numeric segment (`dev`, `1.0-beta`) rank below every
//!   numeric label and never satisfy range atoms

use std::cmp::Ordering;
use std::fmt;

/// A published version label with its numeric components, if it has any.
#[derive(Debug, Clone)]
pub struct Version {
    original: String,
    components: Option<Vec<u64>>,
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Version {
    pub fn parse(label: &str) -> Self {
        Self {
            original: label.to_string(),
            components: normalize(label),
        }
    }

    /// The label exactly as published.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn components(&self) -> Option<&[u64]> {
        self.components.as_deref()
    }

    pub fn is_numeric(&self) -> bool {
        self.components.is_some()
    }

    /// The label without its leading marker character.
    pub fn stripped(&self) -> &str {
        strip_marker(&self.original)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.components, &other.components) {
            (Some(a), Some(b)) => compare_components(a, b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => self.stripped().cmp(other.stripped()),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric components of a label, or `None` if any segment is not an integer.
pub fn normalize(label: &str) -> Option<Vec<u64>> {
    let rest = strip_marker(label.trim());
    if rest.is_empty() {
        return None;
    }
    rest.split('.')
        .map(|segment| {
            if segment.bytes().all(|b| b.is_ascii_digit()) {
                segment.parse::<u64>().ok()
            } else {
                None
            }
        })
        .collect()
}

/// Compare two labels by their normalized form.
pub fn compare(a: &str, b: &str) -> Ordering {
    Version::parse(a).cmp(&Version::parse(b))
}

/// Segment-wise numeric comparison, padding the shorter side with zeros.
pub fn compare_components(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

fn strip_marker(label: &str) -> &str {
    match label.chars().next() {
        Some(c) if !c.is_ascii_digit() => &label[c.len_utf8()..],
        _ => label,
    }
}
