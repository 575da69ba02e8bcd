use thiserror::Error;

/// Every way a run can fail. All variants end the run; nothing is retried.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("empty input: expected a non-negative integer")]
    EmptyInput,
    #[error(
        "invalid character '{}' at position {position}: only digits 0-9 are accepted",
        .found.escape_ascii()
    )]
    NonDigitCharacter { position: usize, found: u8 },
    #[error("number out of range: the largest accepted value is {bound}")]
    OutOfRange { bound: i32 },
    #[error("input line is longer than {limit} bytes")]
    InputTooLong { limit: u64 },
    #[error("arithmetic overflow computing {value} times {multiplier}")]
    ArithmeticOverflow { value: i32, multiplier: i32 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    /// Stable identifier used in JSON output and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            TableError::EmptyInput => "empty_input",
            TableError::NonDigitCharacter { .. } => "non_digit_character",
            TableError::OutOfRange { .. } => "out_of_range",
            TableError::InputTooLong { .. } => "input_too_long",
            TableError::ArithmeticOverflow { .. } => "arithmetic_overflow",
            TableError::Io(_) => "io",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            TableError::EmptyInput
            | TableError::NonDigitCharacter { .. }
            | TableError::OutOfRange { .. }
            | TableError::InputTooLong { .. } => 1,
            TableError::ArithmeticOverflow { .. } => 4,
            TableError::Io(_) => 3,
        }
    }

    /// True for rejections of the input itself, as opposed to faults while
    /// computing or writing.
    pub fn is_rejection(&self) -> bool {
        self.exit_code() == 1
    }
}
