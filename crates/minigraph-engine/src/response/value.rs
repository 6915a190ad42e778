use indexmap::IndexMap;

/// Ordered mapping from response key to value.
///
/// Keys keep the position of their first insertion. Inserting an existing key
/// replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct ResponseObject(IndexMap<String, ResponseValue>);

impl ResponseObject {
    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Returns the value previously stored under `key`, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ResponseValue>) -> Option<ResponseValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ResponseValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &ResponseValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<ResponseValue>> FromIterator<(K, V)> for ResponseObject {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut object = ResponseObject::default();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

/// A resolved value: a scalar, a list or a nested object.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Boolean(bool),
    Float(f64),
    String(String),
    List(Vec<ResponseValue>),
    Object(ResponseObject),
}

impl ResponseValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResponseValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ResponseValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ResponseValue]> {
        match self {
            ResponseValue::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ResponseObject> {
        match self {
            ResponseValue::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<bool> for ResponseValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for ResponseValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ResponseValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<ResponseValue>> for ResponseValue {
    fn from(values: Vec<ResponseValue>) -> Self {
        Self::List(values)
    }
}

impl From<ResponseObject> for ResponseValue {
    fn from(object: ResponseObject) -> Self {
        Self::Object(object)
    }
}
