use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    InvalidArgument { name: &'static str },
    OutOfRange { length: usize, max: usize },
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::InvalidArgument { name } =>
                write!(f, "{} can not be empty or blank", name),
            TagError::OutOfRange { length, max } =>
                write!(f, "prefix length {} exceeds maximum of {} characters", length, max),
        }
    }
}

impl std::error::Error for TagError {}
