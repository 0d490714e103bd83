//! Restricted XPath expressions of identity constraints
//!
//! `selector` and `field` accept the XPath subset defined in XML Schema Part 1
//! section 3.11.6:
//!
//! ```text
//! Selector ::= Path ( '|' Path )*
//! Path     ::= ('.//')? Step ( '/' Step )*
//! Field    ::= Path ( '|' Path )*
//! Path     ::= ('.//')? ( Step '/' )* ( Step | '@' NameTest )
//! Step     ::= '.' | ('child::')? NameTest
//! NameTest ::= QName | '*' | NCName ':' '*'
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use super::collapse;
use crate::error::LexicalError;
use crate::names::is_ncname;
use crate::namespaces::QName;

/// The kind of a path step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PathStepKind {
    /// `.`
    Self_,
    /// child element step
    Child,
    /// attribute step (fields only, last step only)
    Attribute,
}

/// Node test of a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NameTest {
    /// `*`
    Any,
    /// `prefix:*`
    AnyInNamespace(String),
    /// A qualified name
    Name(QName),
}

impl fmt::Display for NameTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "*"),
            Self::AnyInNamespace(prefix) => write!(f, "{}:*", prefix),
            Self::Name(qname) => write!(f, "{}", qname),
        }
    }
}

/// A single step in a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStep {
    /// The kind of step
    pub kind: PathStepKind,
    /// Node test (None for `.`)
    pub test: Option<NameTest>,
}

impl PathStep {
    /// `.`
    pub fn self_node() -> Self {
        Self {
            kind: PathStepKind::Self_,
            test: None,
        }
    }

    /// Child step
    pub fn child(test: NameTest) -> Self {
        Self {
            kind: PathStepKind::Child,
            test: Some(test),
        }
    }

    /// Attribute step
    pub fn attribute(test: NameTest) -> Self {
        Self {
            kind: PathStepKind::Attribute,
            test: Some(test),
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.test) {
            (PathStepKind::Attribute, Some(test)) => write!(f, "@{}", test),
            (_, Some(test)) => write!(f, "{}", test),
            (_, None) => write!(f, "."),
        }
    }
}

/// One alternative of a selector/field expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XPathPath {
    /// Starts with `.//`
    pub descendant: bool,
    /// Path steps
    pub steps: Vec<PathStep>,
}

impl fmt::Display for XPathPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descendant {
            write!(f, ".//")?;
        }
        let steps = self
            .steps
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("/");
        write!(f, "{}", steps)
    }
}

/// Parsed selector or field expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPathExpr {
    /// The whitespace-collapsed source text
    pub source: String,
    /// `|`-separated alternatives
    pub paths: Vec<XPathPath>,
}

impl XPathExpr {
    /// Parse a `selector` xpath
    pub fn parse_selector(raw: &str) -> Result<Self, LexicalError> {
        Self::parse(raw, false, "selector XPath")
    }

    /// Parse a `field` xpath
    pub fn parse_field(raw: &str) -> Result<Self, LexicalError> {
        Self::parse(raw, true, "field XPath")
    }

    fn parse(raw: &str, field: bool, datatype: &str) -> Result<Self, LexicalError> {
        let source = collapse(raw);
        let paths = tokenize(&source)
            .and_then(|tokens| Parser::new(tokens, field).parse_expr())
            .ok_or_else(|| LexicalError::invalid(source.clone(), datatype))?;
        Ok(Self { source, paths })
    }

    /// Check if any alternative selects attributes
    pub fn selects_attribute(&self) -> bool {
        self.paths.iter().any(|p| {
            p.steps
                .last()
                .map(|s| s.kind == PathStepKind::Attribute)
                .unwrap_or(false)
        })
    }
}

impl fmt::Display for XPathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl Serialize for XPathExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Pipe,
    Slash,
    DoubleSlash,
    Dot,
    At,
    Star,
    Colon,
    DoubleColon,
    Name(String),
}

/// Tokens paired with whether whitespace preceded them
fn tokenize(source: &str) -> Option<Vec<(Token, bool)>> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    let mut spaced = false;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        let token = match c {
            ' ' => {
                spaced = true;
                i += 1;
                continue;
            }
            '|' => Token::Pipe,
            '/' if next == Some('/') => {
                i += 1;
                Token::DoubleSlash
            }
            '/' => Token::Slash,
            '.' => Token::Dot,
            '@' => Token::At,
            '*' => Token::Star,
            ':' if next == Some(':') => {
                i += 1;
                Token::DoubleColon
            }
            ':' => Token::Colon,
            _ => {
                let start = i;
                while i < chars.len() && !" |/@*:".contains(chars[i]) {
                    i += 1;
                }
                let name: String = chars[start..i].iter().collect();
                if !is_ncname(&name) {
                    return None;
                }
                tokens.push((Token::Name(name), spaced));
                spaced = false;
                continue;
            }
        };
        tokens.push((token, spaced));
        spaced = false;
        i += 1;
    }
    Some(tokens)
}

struct Parser {
    tokens: Vec<(Token, bool)>,
    pos: usize,
    field: bool,
}

impl Parser {
    fn new(tokens: Vec<(Token, bool)>, field: bool) -> Self {
        Self {
            tokens,
            pos: 0,
            field,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|(t, _)| t)
    }

    fn spaced_at(&self, offset: usize) -> bool {
        self.tokens
            .get(self.pos + offset)
            .map(|(_, s)| *s)
            .unwrap_or(false)
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_expr(mut self) -> Option<Vec<XPathPath>> {
        let mut paths = vec![self.parse_path()?];
        while self.eat(&Token::Pipe) {
            paths.push(self.parse_path()?);
        }
        if self.pos == self.tokens.len() {
            Some(paths)
        } else {
            None
        }
    }

    fn parse_path(&mut self) -> Option<XPathPath> {
        let descendant =
            self.peek() == Some(&Token::Dot) && self.peek_at(1) == Some(&Token::DoubleSlash);
        if descendant {
            self.pos += 2;
        }

        let mut steps = Vec::new();
        loop {
            let step = self.parse_step()?;
            let is_attribute = step.kind == PathStepKind::Attribute;
            steps.push(step);
            if is_attribute || !self.eat(&Token::Slash) {
                break;
            }
        }
        Some(XPathPath { descendant, steps })
    }

    fn parse_step(&mut self) -> Option<PathStep> {
        match self.peek()? {
            Token::Dot => {
                self.pos += 1;
                Some(PathStep::self_node())
            }
            Token::At if self.field => {
                self.pos += 1;
                Some(PathStep::attribute(self.parse_name_test()?))
            }
            Token::Name(axis) if self.peek_at(1) == Some(&Token::DoubleColon) => {
                let attribute = match axis.as_str() {
                    "child" => false,
                    "attribute" if self.field => true,
                    _ => return None,
                };
                self.pos += 2;
                let test = self.parse_name_test()?;
                Some(if attribute {
                    PathStep::attribute(test)
                } else {
                    PathStep::child(test)
                })
            }
            _ => Some(PathStep::child(self.parse_name_test()?)),
        }
    }

    fn parse_name_test(&mut self) -> Option<NameTest> {
        match self.peek()?.clone() {
            Token::Star => {
                self.pos += 1;
                Some(NameTest::Any)
            }
            Token::Name(first) => {
                self.pos += 1;
                if self.peek() != Some(&Token::Colon) || self.spaced_at(0) {
                    return Some(NameTest::Name(QName::local(first)));
                }
                if self.spaced_at(1) {
                    return None;
                }
                self.pos += 1;
                match self.peek()?.clone() {
                    Token::Star => {
                        self.pos += 1;
                        Some(NameTest::AnyInNamespace(first))
                    }
                    Token::Name(local) => {
                        self.pos += 1;
                        Some(NameTest::Name(QName::prefixed(first, local)))
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_valid() {
        for raw in [
            ".",
            "foo",
            "./foo",
            "foo/bar",
            ".//foo",
            "xs:foo/xs:bar",
            "*",
            "xs:*",
            "child::foo",
            "foo | .//bar",
            " .// foo / bar ",
        ] {
            assert!(XPathExpr::parse_selector(raw).is_ok(), "{:?}", raw);
        }
    }

    #[test]
    fn test_selector_invalid() {
        for raw in [
            "",
            "@foo",
            "foo/@bar",
            "//foo",
            "foo//bar",
            "..",
            "foo[1]",
            "foo/",
            "|foo",
            "parent::foo",
            "attribute::foo",
            "xs :foo",
            "1foo",
        ] {
            let err = XPathExpr::parse_selector(raw).unwrap_err();
            assert_eq!(err.datatype, "selector XPath", "{:?}", raw);
        }
    }

    #[test]
    fn test_field_valid() {
        for raw in ["@id", "foo/@id", ".//foo/@xs:id", "attribute::id", "@*", "foo | @bar", "."] {
            assert!(XPathExpr::parse_field(raw).is_ok(), "{:?}", raw);
        }
    }

    #[test]
    fn test_field_invalid() {
        for raw in ["@id/foo", "@", "foo/@id/@bar", "//@id"] {
            assert!(XPathExpr::parse_field(raw).is_err(), "{:?}", raw);
        }
    }

    #[test]
    fn test_parsed_structure() {
        let expr = XPathExpr::parse_field(".//xs:item/@code").unwrap();
        assert_eq!(expr.paths.len(), 1);
        let path = &expr.paths[0];
        assert!(path.descendant);
        assert_eq!(path.steps.len(), 2);
        assert_eq!(
            path.steps[0],
            PathStep::child(NameTest::Name(QName::prefixed("xs", "item")))
        );
        assert_eq!(
            path.steps[1],
            PathStep::attribute(NameTest::Name(QName::local("code")))
        );
        assert!(expr.selects_attribute());
        assert_eq!(path.to_string(), ".//xs:item/@code");
    }

    #[test]
    fn test_source_is_collapsed() {
        let expr = XPathExpr::parse_selector("  foo \n | bar ").unwrap();
        assert_eq!(expr.source, "foo | bar");
        assert_eq!(expr.paths.len(), 2);
        assert!(!expr.selects_attribute());
    }
}
