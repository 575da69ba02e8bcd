use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub multiplier: i32,
    pub product: i32,
}

/// A complete multiplication table. Always holds one row per multiplier;
/// the generator never hands out a partial one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub value: i32,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Text lines in the `"<value> times <multiplier> is <product>"` format.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows
            .iter()
            .map(move |r| format!("{} times {} is {}", self.value, r.multiplier, r.product))
    }
}
