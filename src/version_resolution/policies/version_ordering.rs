use std::cmp::Ordering;

/// Ordering applied to version labels such as `6.0`, `6.0u1` or `6.7u3`.
///
/// `Lexicographic` compares the labels as plain strings, which misorders
/// labels once a component reaches two digits (`6.10` sorts before `6.2`,
/// `6.0u10` before `6.0u2`). `Numeric` parses `MAJOR.MINOR[uUPDATE]` into integers instead;
/// a label without an update sorts before any `uN` of the same release, and
/// labels that do not parse sort after every label that does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionOrdering {
    #[default]
    Numeric,
    Lexicographic,
}

impl VersionOrdering {
    /// Compares two version labels.
    pub fn compare_labels(self, a: &str, b: &str) -> Ordering {
        match self {
            VersionOrdering::Lexicographic => a.cmp(b),
            VersionOrdering::Numeric => match (numeric_key(a), numeric_key(b)) {
                (Some(ka), Some(kb)) => ka.cmp(&kb).then_with(|| a.cmp(b)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.cmp(b),
            },
        }
    }

    /// Compares two build numbers.
    pub fn compare_builds(self, a: &str, b: &str) -> Ordering {
        match self {
            VersionOrdering::Lexicographic => a.cmp(b),
            VersionOrdering::Numeric => match (a.parse::<u64>(), b.parse::<u64>()) {
                (Ok(na), Ok(nb)) => na.cmp(&nb).then_with(|| a.cmp(b)),
                (Ok(_), Err(_)) => Ordering::Less,
                (Err(_), Ok(_)) => Ordering::Greater,
                (Err(_), Err(_)) => a.cmp(b),
            },
        }
    }

    /// Sorts labels in place, smallest first.
    pub fn sort_labels(self, labels: &mut [String]) {
        labels.sort_by(|a, b| self.compare_labels(a, b));
    }
}

impl std::str::FromStr for VersionOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numeric" => Ok(VersionOrdering::Numeric),
            "lexicographic" | "lexical" | "string" => Ok(VersionOrdering::Lexicographic),
            _ => Err(format!(
                "Invalid version ordering: {}. Please specify 'numeric' or 'lexicographic'",
                s
            )),
        }
    }
}

impl std::fmt::Display for VersionOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionOrdering::Numeric => write!(f, "numeric"),
            VersionOrdering::Lexicographic => write!(f, "lexicographic"),
        }
    }
}

/// `6.7u3` -> `(6, 7, Some(3))`, `6.0` -> `(6, 0, None)`.
fn numeric_key(label: &str) -> Option<(u64, u64, Option<u64>)> {
    let (release, update) = match label.split_once('u') {
        Some((release, update)) => (release, Some(update.parse::<u64>().ok()?)),
        None => (label, None),
    };
    let (major, minor) = release.split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?, update))
}
