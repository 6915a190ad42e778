mod error;
mod value;

pub use error::{ErrorCode, ErrorPath, ErrorPathSegment, GraphqlError};
pub use value::{ResponseObject, ResponseValue};

/// The outcome of one request.
///
/// `data` always holds every invocation that resolved. `errors` is only ever
/// filled in strict mode.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Response {
    pub data: ResponseObject,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphqlError>,
}

impl Response {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Collects resolved `(response key, value)` pairs into a single response.
#[derive(Debug, Default)]
pub struct ResponseAssembler {
    data: ResponseObject,
    errors: Vec<GraphqlError>,
}

impl ResponseAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys keep the position of their first insertion, a repeated key replaces
    /// the earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: ResponseValue) {
        let key = key.into();

        if self.data.insert(key.clone(), value).is_some() {
            tracing::debug!(%key, "response key resolved twice, keeping the latest value");
        }
    }

    pub fn push_errors(&mut self, errors: impl IntoIterator<Item = GraphqlError>) {
        self.errors.extend(errors);
    }

    pub fn finish(self) -> Response {
        Response {
            data: self.data,
            errors: self.errors,
        }
    }
}
