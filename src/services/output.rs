use crate::domain::models::{ErrorBody, JsonErr, JsonOut, Table};
use crate::error::TableError;
use std::io::{self, Write};

/// Renders the whole table before writing so stdout receives it in one
/// `write_all`.
pub fn write_table<W: Write>(out: &mut W, table: &Table, json: bool) -> io::Result<()> {
    let mut text = if json {
        serde_json::to_string_pretty(&JsonOut {
            ok: true,
            data: table,
        })?
    } else {
        table.lines().collect::<Vec<_>>().join("\n")
    };
    text.push('\n');
    out.write_all(text.as_bytes())?;
    out.flush()
}

pub fn write_failure<W: Write>(err: &mut W, error: &TableError, json: bool) -> io::Result<()> {
    if json {
        let body = JsonErr {
            ok: false,
            error: ErrorBody {
                kind: error.kind(),
                message: error.to_string(),
            },
        };
        writeln!(err, "{}", serde_json::to_string_pretty(&body)?)?;
    } else {
        writeln!(err, "Error: {error}")?;
    }
    err.flush()
}
