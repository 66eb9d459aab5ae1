use mongodb::bson::oid::ObjectId;
use thiserror::Error;

/// Errors surfaced by the data layer. Validation, normalization, and
/// referential failures all abort the save before anything is written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} must contain at least one entry")]
    EmptyList(&'static str),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid event id: {0}")]
    InvalidEventId(String),

    #[error("could not parse date: {0}")]
    InvalidDate(String),

    #[error("could not parse time: {0}")]
    InvalidTime(String),

    #[error("referenced event does not exist")]
    MissingReference,

    #[error("no event with id {0}")]
    NoSuchEvent(ObjectId),

    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
}
