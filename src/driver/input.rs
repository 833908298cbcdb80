use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::InputError;

/// Whitespace-separated token stream over a line reader.
///
/// Tokens may be spread over any number of lines, so `1 2 3` and three
/// separate lines read the same way.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, reading more lines as needed.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnexpectedEof`] once the reader is exhausted, or
    /// [`InputError::Io`] if reading fails.
    pub fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Reads the next token and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidNumber`] if the token does not parse; the
    /// token is consumed either way.
    pub fn next_parsed<T: FromStr>(&mut self) -> Result<T, InputError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| InputError::InvalidNumber(token))
    }

    /// Reads the next token as a finite `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidNumber`] for anything else, including
    /// `nan`, `inf` and `infinity`, which `f64::from_str` would accept.
    pub fn next_finite(&mut self) -> Result<f64, InputError> {
        let token = self.next_token()?;
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(InputError::InvalidNumber(token)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines() {
        let mut tokens = Tokens::new("1 2\n\n  3\tname\n".as_bytes());
        assert_eq!(tokens.next_parsed::<f64>().unwrap(), 1.0);
        assert_eq!(tokens.next_parsed::<usize>().unwrap(), 2);
        assert_eq!(tokens.next_token().unwrap(), "3");
        assert_eq!(tokens.next_token().unwrap(), "name");
        assert!(matches!(
            tokens.next_token(),
            Err(InputError::UnexpectedEof)
        ));
    }

    #[test]
    fn bad_number_is_consumed() {
        let mut tokens = Tokens::new("x 4".as_bytes());
        assert!(matches!(
            tokens.next_parsed::<f64>(),
            Err(InputError::InvalidNumber(t)) if t == "x"
        ));
        assert_eq!(tokens.next_parsed::<f64>().unwrap(), 4.0);
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let mut tokens = Tokens::new("nan inf -infinity 1e400 -2.5".as_bytes());
        for rejected in ["nan", "inf", "-infinity", "1e400"] {
            assert!(matches!(
                tokens.next_finite(),
                Err(InputError::InvalidNumber(t)) if t == rejected
            ));
        }
        assert_eq!(tokens.next_finite().unwrap(), -2.5);
    }
}
