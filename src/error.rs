use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoxoverError {
    #[error("Invalid integer for {field}: '{token}'")]
    InvalidInteger {
        field: &'static str,
        token: String,
        source: std::num::ParseIntError,
    },

    #[error("Input ended before {field} was read")]
    InputExhausted { field: &'static str },

    #[error("Failed to read input: {source}")]
    InputRead { source: std::io::Error },

    #[error("Failed to write output: {source}")]
    OutputWrite { source: std::io::Error },
}
