/// Normalizes a distribution name for comparison (PEP 503).
///
/// Lowercases the input, collapses every run of characters outside
/// `[a-z0-9]` into a single `-`, and trims leading/trailing `-`.
pub fn normalize_name(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for c in raw.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !normalized.is_empty() {
                normalized.push('-');
            }
            pending_separator = false;
            normalized.push(c);
        } else {
            pending_separator = true;
        }
    }

    normalized
}

/// NewType wrapper for a normalized package name
///
/// Two specifiers that name the same distribution (`Foo_Bar`, `foo.bar`,
/// `FOO-BAR`) produce equal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    /// Normalizes `raw`; returns `None` when nothing alphanumeric remains.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = normalize_name(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
