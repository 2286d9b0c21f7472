use std::{
    fmt::Display,
    io::{Error as IoError, ErrorKind},
};

#[derive(Debug)]
pub enum ToprankError {
    BadPriority(usize, String),
    BadRecord(usize, String),
    EmptyQueue(&'static str),
    InvariantViolation(usize, f64, f64),
}

impl Display for ToprankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToprankError::BadPriority(line, text) => {
                write!(f, "Badly formed priority on line {}: '{}'", line, text)
            }
            ToprankError::BadRecord(line, text) => {
                write!(f, "Badly formed record on line {}: '{}'", line, text)
            }
            ToprankError::EmptyQueue(op) => {
                write!(f, "Cannot {} - the queue is empty", op)
            }
            ToprankError::InvariantViolation(pos, child, parent) => {
                write!(
                    f,
                    "Heap out of order at position {} - priority {} is smaller than its parent's {}",
                    pos, child, parent
                )
            }
        }
    }
}

impl std::error::Error for ToprankError {}

pub fn as_io_error(error: ToprankError) -> std::io::Error {
    IoError::new(ErrorKind::Other, error)
}
