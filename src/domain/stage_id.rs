use serde::Serialize;

use super::AppError;

/// A validated stage identifier, as named in chain declaration files.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - Not `.` or `..`
///
/// Identity is plain string equality: `auth` and `Auth` are different stages.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StageId(String);

impl StageId {
    /// Validate and create a new `StageId`.
    pub fn new(id: &str) -> Result<Self, AppError> {
        if is_valid_stage_name(id) {
            Ok(Self(id.to_string()))
        } else {
            Err(AppError::InvalidStageId(id.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_stage_name(id: &str) -> bool {
    if id.is_empty() || id == "." || id == ".." {
        return false;
    }
    id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
