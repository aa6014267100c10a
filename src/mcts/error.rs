use crate::gameplay::*;

/// Why a determinization was abandoned.
///
/// Any of these inside the search loop is a defect in the simulation rather
/// than bad luck, so the iteration is dropped from the statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    Invalid(InvalidAction),
    Illegal(IllegalAction),
    Inconsistent(String),
    Terminal,
    Stateless,
}

impl From<InvalidAction> for SearchError {
    fn from(e: InvalidAction) -> Self {
        Self::Invalid(e)
    }
}
impl From<IllegalAction> for SearchError {
    fn from(e: IllegalAction) -> Self {
        Self::Illegal(e)
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "invalid action: {}", e),
            Self::Illegal(e) => write!(f, "illegal action: {}", e),
            Self::Inconsistent(s) => write!(f, "inconsistent view: {}", s),
            Self::Terminal => write!(f, "terminal nodes are not expanded"),
            Self::Stateless => write!(f, "node holds no state"),
        }
    }
}

impl std::error::Error for SearchError {}
