//! The textual request: `{ [alias:] field[(arg: value)] [{ sub fields }] ... }`.

mod lexer;
mod parser;
mod root_field;

use std::fmt;

pub use root_field::RootField;

/// The parsed form of a request.
///
/// Parsing never fails. Clauses that cannot be understood are dropped and
/// reported in [`ParsedRequest::diagnostics`], their siblings are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRequest {
    invocations: Vec<Invocation>,
    diagnostics: Vec<SyntaxError>,
}

impl ParsedRequest {
    pub fn parse(source: &str) -> Self {
        parser::parse(source)
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    pub fn diagnostics(&self) -> &[SyntaxError] {
        &self.diagnostics
    }
}

/// A top-level field of the request.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    kind: Option<RootField>,
    selection: Selection,
}

impl Invocation {
    /// `None` when the field name matches no root field.
    pub fn kind(&self) -> Option<RootField> {
        self.kind
    }

    pub fn field_name(&self) -> &str {
        self.selection.name()
    }

    pub fn alias(&self) -> Option<&str> {
        self.selection.alias()
    }

    /// The alias, or the field name when there is none.
    pub fn response_key(&self) -> &str {
        self.selection.response_key()
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.selection.argument(name)
    }

    /// The identifier argument the field kind looks entities up with, if it takes one.
    pub fn lookup_argument(&self) -> Option<&Argument> {
        self.kind
            .and_then(RootField::lookup_argument)
            .and_then(|name| self.argument(name))
    }

    /// Requested sub-fields. Empty when the invocation had no braced block.
    pub fn selection_set(&self) -> &SelectionSet {
        self.selection.sub_fields()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn location(&self) -> Location {
        self.selection.location()
    }
}

impl From<Selection> for Invocation {
    fn from(selection: Selection) -> Self {
        Invocation {
            kind: RootField::from_field_name(selection.name()),
            selection,
        }
    }
}

/// One requested field at any depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    alias: Option<String>,
    name: String,
    arguments: Vec<Argument>,
    selection_set: Option<SelectionSet>,
    location: Location,
}

impl Selection {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|argument| argument.name == name)
    }

    /// `None` for leaf fields.
    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }

    /// Requested sub-fields, empty for leaf fields.
    pub fn sub_fields(&self) -> &SelectionSet {
        self.selection_set.as_ref().unwrap_or(&EMPTY_SELECTION_SET)
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

static EMPTY_SELECTION_SET: SelectionSet = SelectionSet(Vec::new());

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet(Vec<Selection>);

impl SelectionSet {
    pub fn iter(&self) -> std::slice::Iter<'_, Selection> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a field with this name (not alias) was requested.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|selection| selection.name == name)
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a Selection;
    type IntoIter = std::slice::Iter<'a, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    name: String,
    value: ArgumentValue,
    location: Location,
}

impl Argument {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value with its quotes stripped, `None` if it could not be read.
    pub fn value(&self) -> Option<&str> {
        match &self.value {
            ArgumentValue::Value(value) => Some(value),
            ArgumentValue::Malformed => None,
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ArgumentValue {
    Value(String),
    Malformed,
}

// 65 KB for a request without any new lines is pretty huge. Positions past
// u16::MAX saturate.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, serde::Serialize)]
pub struct Location {
    /// One-based line number.
    line: u16,
    /// One-based column number.
    column: u16,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line: u16::try_from(line).unwrap_or(u16::MAX),
            column: u16::try_from(column).unwrap_or(u16::MAX),
        }
    }

    pub fn line(&self) -> u16 {
        self.line
    }

    pub fn column(&self) -> u16 {
        self.column
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line(), self.column())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {location}")]
pub struct SyntaxError {
    pub message: String,
    pub location: Location,
}
