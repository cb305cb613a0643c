use crate::{
    args,
    io,
};

/// Error-type enum for the `mymath` crate.
/// Shape and angle outcomes are not errors at this level; they are shown to the user as messages.
#[derive(Debug)]
pub enum MyMathError {
    ArgError(args::ArgError),
    IoError(io::IoError),
}
impl std::fmt::Display for MyMathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MyMathError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            MyMathError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
        }
    }
}
impl From<args::ArgError> for MyMathError {
    fn from(error: args::ArgError) -> Self {
        MyMathError::ArgError(error)
    }
}
impl From<io::IoError> for MyMathError {
    fn from(error: io::IoError) -> Self {
        MyMathError::IoError(error)
    }
}

/// Result type for the `mymath` crate.
pub type MyMathResult<T> = std::result::Result<T, MyMathError>;
