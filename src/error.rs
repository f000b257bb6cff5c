use std::error;
use std::fmt;




/**
 * Error to represent invalid record data, structural misuse of the
 * collection, or census rows that violate the dataset's fixed schema.
 */
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    InvalidArgument(String),
    EmptyCollection,
    SchemaViolation(String),
    IntegrityViolation { id: u32, stored: String, offered: String },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;

        match self {
            InvalidArgument(what) => write!(fmt, "invalid argument: {}", what),
            EmptyCollection => write!(fmt, "the collection holds no records"),
            SchemaViolation(what) => write!(fmt, "schema violation: {}", what),
            IntegrityViolation { id, stored, offered } => write!(
                fmt,
                "tree id {} is already recorded as species '{}', cannot be species '{}'",
                id, stored, offered
            ),
        }
    }
}

impl error::Error for Error {}
