use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::rut::{self, RawText};
use crate::utils::group_thousands;

// A Chilean RUT split into its body and check digit. The check digit is
// always stored uppercase, whichever way the value was built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RutFields")]
pub struct Rut {
    body: String,
    check_digit: char,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RutError {
    #[error("RUT body must not be empty")]
    EmptyBody,

    #[error("RUT body may only hold digits and 'K', got {0:?}")]
    InvalidBody(String),

    #[error("Invalid check digit {0:?}")]
    InvalidCheckDigit(char),
}

// Wire shape of a `Rut`, checked before it becomes one.
#[derive(Deserialize)]
struct RutFields {
    body: String,
    check_digit: char,
}

impl TryFrom<RutFields> for Rut {
    type Error = RutError;

    fn try_from(fields: RutFields) -> Result<Self, Self::Error> {
        if fields.body.is_empty() {
            return Err(RutError::EmptyBody);
        }
        // Same alphabet `clean` keeps, so anything `parse` builds round-trips.
        if rut::clean(fields.body.as_str()) != fields.body {
            return Err(RutError::InvalidBody(fields.body));
        }
        let check_digit = fields.check_digit.to_ascii_uppercase();
        if !(check_digit.is_ascii_digit() || check_digit == 'K') {
            return Err(RutError::InvalidCheckDigit(fields.check_digit));
        }
        Ok(Self {
            body: fields.body,
            check_digit,
        })
    }
}

impl Rut {
    // `None` when fewer than two significant characters remain after
    // cleaning.
    pub fn parse(raw: impl RawText) -> Option<Self> {
        let cleaned = rut::clean(raw);
        if cleaned.len() < 2 {
            return None;
        }
        let (body, last) = cleaned.split_at(cleaned.len() - 1);
        Some(Self {
            body: body.to_string(),
            check_digit: last.chars().next()?.to_ascii_uppercase(),
        })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn check_digit(&self) -> char {
        self.check_digit
    }

    pub fn expected_check_digit(&self) -> Option<char> {
        rut::check_digit(&self.body)
    }

    pub fn is_valid(&self) -> bool {
        self.expected_check_digit() == Some(self.check_digit)
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", group_thousands(&self.body, '.'), self.check_digit)
    }
}
