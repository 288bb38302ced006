//! Line classification for the single-pass scan.
//!
//! All matching is deliberately shallow: literal prefixes and one substring
//! token, checked one line at a time. Nothing here understands Python
//! structure beyond that.

use regex::Regex;
use std::sync::LazyLock;

/// Method signature: `def ` plus at least one more character.
static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^def .").unwrap());

/// Special/dunder method: the name right after `def ` starts with `__`.
static RE_SPECIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^def __").unwrap());

/// Documentation delimiter token, anywhere in the line.
static RE_DOC_DELIM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"""""#).unwrap());

/// A new top-level statement or declaration: line starts with a letter.
static RE_TOP_LEVEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]").unwrap());

/// True if the trimmed line declares a public (non-dunder) method.
///
/// Single-underscore names count as public; only a `__` prefix is excluded.
pub fn is_public_method(trimmed: &str) -> bool {
    RE_METHOD.is_match(trimmed) && !RE_SPECIAL.is_match(trimmed)
}

/// True if the trimmed line contains the `"""` delimiter token.
pub fn is_doc_delimiter(trimmed: &str) -> bool {
    RE_DOC_DELIM.is_match(trimmed)
}

/// True if the (untrimmed) line ends the class body: an empty line, or a
/// new top-level statement/declaration starting with a letter.
pub fn is_class_body_end(line: &str) -> bool {
    line.is_empty() || RE_TOP_LEVEL.is_match(line)
}

/// Matches the line that opens the target class definition.
///
/// The line must start with the literal `class <name>` and be strictly
/// longer than that prefix, so a bare `class Foo` line with nothing after
/// the name is not matched. Prefix matching only: searching for `Foo` also
/// stops at `class FooBar` — first match wins, no disambiguation.
pub struct ClassMatcher {
    re: Regex,
}

impl ClassMatcher {
    pub fn new(class_name: &str) -> Self {
        // The trailing `.` enforces the strictly-longer rule; input lines
        // carry no newline, so it can only match real content.
        let re = Regex::new(&format!("^class {}.", regex::escape(class_name))).unwrap();
        Self { re }
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.re.is_match(line)
    }
}
