//! Classifies a raw input line as an in-range non-negative integer.
//!
//! The scan is a single pass over the trimmed bytes. A non-digit anywhere
//! wins over a range failure, so `"99999999999x"` reports the `x`. Once the
//! magnitude passes the bound the accumulator is dropped and the remaining
//! bytes are only checked for digit-ness, which keeps arbitrarily long input
//! linear and allocation-free.

use crate::domain::constants::BOUND;
use crate::error::TableError;

/// A value that passed validation. Only `Validator` constructs one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accepted(i32);

impl Accepted {
    pub fn value(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Validator {
    bound: i32,
    max_digits: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::with_bound(BOUND)
    }
}

impl Validator {
    /// Negative bounds are clamped to zero.
    pub fn with_bound(bound: i32) -> Self {
        let bound = bound.max(0);
        Self {
            bound,
            max_digits: decimal_digits(bound),
        }
    }

    pub fn validate(&self, raw: &[u8]) -> Result<Accepted, TableError> {
        let digits = raw.trim_ascii();
        if digits.is_empty() {
            return Err(TableError::EmptyInput);
        }

        let mut value = Some(0i32);
        for (position, &byte) in digits.iter().enumerate() {
            if !byte.is_ascii_digit() {
                return Err(TableError::NonDigitCharacter {
                    position,
                    found: byte,
                });
            }
            if position >= self.max_digits {
                value = None;
            }
            value = value
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(i32::from(byte - b'0')))
                .filter(|v| *v <= self.bound);
        }

        value.map(Accepted).ok_or(TableError::OutOfRange { bound: self.bound })
    }
}

fn decimal_digits(mut n: i32) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
