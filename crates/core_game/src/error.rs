use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid entity `{name}`: {reason}")]
    InvalidEntity { name: String, reason: &'static str },
    #[error("turn budget must be a positive number of turns")]
    InvalidTurnBudget,
}

impl GameError {
    pub(crate) fn invalid_entity(name: &str, reason: &'static str) -> Self {
        Self::InvalidEntity {
            name: name.to_owned(),
            reason,
        }
    }
}
