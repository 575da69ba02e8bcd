//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — table rows, the finished table and the JSON envelopes.
//! - `constants.rs` — the accepted bound, multiplier range and reader cap.
//!
//! Domain types are data-only: no stdin/stdout side effects here.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` output.
//! Keep them synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
