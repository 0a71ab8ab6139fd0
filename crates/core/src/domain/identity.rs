// Identity Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque value naming one queued unit of work.
///
/// The queue only compares identities for equality; `Display` is used for
/// error messages and log fields.
pub trait Identity: Clone + Eq + fmt::Display + Send + Sync + 'static {}

impl<T> Identity for T where T: Clone + Eq + fmt::Display + Send + Sync + 'static {}

/// Simulation group identifier (the launch request identity)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GroupId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
