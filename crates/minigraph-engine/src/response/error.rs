use std::borrow::Cow;

use serde::ser::SerializeMap;

use crate::request::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The request text could not be read at this position.
    SyntaxError,
    /// The field does not exist at this position.
    UnknownField,
    /// The field requires an argument that was not given.
    MissingArgument,
    /// Nothing matches the given identifier.
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphqlError {
    pub message: Cow<'static, str>,
    pub code: ErrorCode,
    pub locations: Vec<Location>,
    pub path: Option<ErrorPath>,
}

impl GraphqlError {
    pub fn new(message: impl Into<Cow<'static, str>>, code: ErrorCode) -> Self {
        GraphqlError {
            message: message.into(),
            code,
            locations: Vec::new(),
            path: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<ErrorPath>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl serde::Serialize for GraphqlError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(serde::Serialize)]
        struct Extensions {
            code: ErrorCode,
        }

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("message", &self.message)?;

        if !self.locations.is_empty() {
            map.serialize_entry("locations", &self.locations)?;
        }

        if let Some(path) = &self.path {
            map.serialize_entry("path", path)?;
        }

        map.serialize_entry("extensions", &Extensions { code: self.code })?;
        map.end()
    }
}

/// Position of an error in the response, from the top-level response key down.
#[derive(Debug, PartialEq, Eq, Clone, Default, serde::Serialize)]
#[serde(transparent)]
pub struct ErrorPath(Vec<ErrorPathSegment>);

#[derive(Debug, PartialEq, Eq, Clone, serde::Serialize)]
#[serde(untagged)]
pub enum ErrorPathSegment {
    Field(String),
    Index(usize),
}

impl ErrorPath {
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        self.with(ErrorPathSegment::Field(key.to_string()))
    }

    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.with(ErrorPathSegment::Index(index))
    }

    fn with(&self, segment: ErrorPathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend(self.0.iter().cloned());
        segments.push(segment);
        Self(segments)
    }
}

impl std::ops::Deref for ErrorPath {
    type Target = [ErrorPathSegment];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for ErrorPath {
    fn from(key: &str) -> Self {
        Self(vec![ErrorPathSegment::Field(key.to_string())])
    }
}
