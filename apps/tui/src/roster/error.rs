use crate::domain::UserId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Name, age or address is blank after trimming.
    #[error("please fill in all fields")]
    MissingFields,
    /// Age is not a whole number greater than zero.
    #[error("please enter a valid age")]
    InvalidAge,
    #[error("another add or edit is already in progress")]
    Busy,
    #[error("no add or edit is in progress")]
    NotDrafting,
    #[error("no user with id {0}")]
    UnknownUser(UserId),
    #[error("no user ids left to assign")]
    IdsExhausted,
}

