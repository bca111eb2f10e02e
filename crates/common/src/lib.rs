//! Pieces shared by the server crate and the binary: response types and logging setup.

pub mod types;
pub mod utils;
