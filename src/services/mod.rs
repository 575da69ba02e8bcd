//! Service layer: the four pipeline stages.
//!
//! ## Service map
//! - `reader.rs` — one capped line from stdin.
//! - `validator.rs` — trimmed bytes to an in-range integer, or a rejection.
//! - `generator.rs` — ten overflow-checked products.
//! - `output.rs` — text/JSON rendering to stdout and stderr.
//!
//! ## Conventions
//! - Stages are pure over their inputs; only `reader` and `output` touch
//!   streams, and both take them as generic parameters.
//! - Keep command handlers thin; delegate to services.

pub mod generator;
pub mod output;
pub mod reader;
pub mod validator;
