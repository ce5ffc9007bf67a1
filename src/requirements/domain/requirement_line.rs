use super::PackageName;
use regex::Regex;
use std::sync::LazyLock;

static EGG_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#&]egg=([A-Za-z0-9_.+-]+)").unwrap());

static DIRECT_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z0-9_.+-]+)\s*@\s*\S+").unwrap());

static LEADING_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z0-9_.+-]+)").unwrap());

/// Classification of a single line of a requirements file
///
/// Only the variants carrying a [`PackageName`] can ever be matched
/// against a base list; everything else is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementLine {
    /// Empty or whitespace-only line
    Blank,
    /// `# ...`
    Comment,
    /// Option flag such as `-r other.txt` or `--index-url ...`
    Option,
    /// `-e <url>`; named only when the URL carries an `egg=` fragment
    Editable(Option<PackageName>),
    /// VCS or archive URL with an `egg=` fragment
    EggReference(PackageName),
    /// `name @ url`
    DirectReference(PackageName),
    /// `name[extras]<specifiers>; <markers>`
    Specifier(PackageName),
    /// Nothing recognizable as a package name
    Unparsable,
}

impl RequirementLine {
    /// Classifies a raw line; trailing newlines and surrounding
    /// whitespace are ignored.
    pub fn classify(line: &str) -> Self {
        let s = line.trim();

        if s.is_empty() {
            return RequirementLine::Blank;
        }
        if s.starts_with('#') {
            return RequirementLine::Comment;
        }
        if s.starts_with('-') {
            if s.starts_with("-e ") {
                return RequirementLine::Editable(egg_name(s));
            }
            return RequirementLine::Option;
        }

        if let Some(name) = egg_name(s) {
            return RequirementLine::EggReference(name);
        }

        if let Some(name) = capture_name(&DIRECT_REFERENCE, s) {
            return RequirementLine::DirectReference(name);
        }

        let without_markers = s.split(';').next().unwrap_or_default().trim();
        match LEADING_NAME.captures(without_markers) {
            Some(caps) => {
                let token = &caps[1];
                let name = token.split('[').next().unwrap_or(token);
                PackageName::new(name)
                    .map(RequirementLine::Specifier)
                    .unwrap_or(RequirementLine::Unparsable)
            }
            None => RequirementLine::Unparsable,
        }
    }

    /// The normalized package name this line refers to, if any
    pub fn package_name(&self) -> Option<&PackageName> {
        match self {
            RequirementLine::Editable(name) => name.as_ref(),
            RequirementLine::EggReference(name)
            | RequirementLine::DirectReference(name)
            | RequirementLine::Specifier(name) => Some(name),
            RequirementLine::Blank
            | RequirementLine::Comment
            | RequirementLine::Option
            | RequirementLine::Unparsable => None,
        }
    }
}

fn egg_name(s: &str) -> Option<PackageName> {
    capture_name(&EGG_FRAGMENT, s)
}

fn capture_name(pattern: &Regex, s: &str) -> Option<PackageName> {
    pattern
        .captures(s)
        .and_then(|caps| PackageName::new(&caps[1]))
}
