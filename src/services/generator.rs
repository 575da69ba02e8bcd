use crate::domain::constants::MULTIPLIERS;
use crate::domain::models::{Table, TableRow};
use crate::error::TableError;
use crate::services::validator::Accepted;

/// Builds all ten rows or none: the first product that does not fit an
/// `i32` aborts the whole table.
pub fn generate(accepted: Accepted) -> Result<Table, TableError> {
    let value = accepted.value();
    let rows = MULTIPLIERS
        .map(|multiplier| {
            value
                .checked_mul(multiplier)
                .map(|product| TableRow {
                    multiplier,
                    product,
                })
                .ok_or(TableError::ArithmeticOverflow { value, multiplier })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Table { value, rows })
}
