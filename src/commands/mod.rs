//! Command handler layer.
//!
//! Owns the pipeline orchestration and the success/failure terminals.
//! Business logic lives in `services/*`.

pub mod table;

pub use table::handle_table;
