use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::BoxoverError;

/// Whitespace-delimited token scanner over a buffered input stream.
///
/// Input is consumed line by line; leftover tokens from a line are handed
/// out before the next line is read, so several values may share one line.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Read the next token, pulling more lines as needed.
    ///
    /// `field` names the value being read and is carried into the error
    /// when the stream ends first.
    pub fn next_token(&mut self, field: &'static str) -> Result<String, BoxoverError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|source| BoxoverError::InputRead { source })?;
            if read == 0 {
                return Err(BoxoverError::InputExhausted { field });
            }

            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Read the next token and parse it as a signed integer.
    pub fn next_int(&mut self, field: &'static str) -> Result<i64, BoxoverError> {
        let token = self.next_token(field)?;
        token
            .parse()
            .map_err(|source| BoxoverError::InvalidInteger {
                field,
                token,
                source,
            })
    }
}
