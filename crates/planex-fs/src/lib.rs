//! Filesystem primitives for planex-init
//!
//! Whole-file reads split into terminator-preserving lines, exclusive
//! creation of new files, and atomic replacement of existing ones.

pub mod error;
pub mod io;
pub mod lines;

pub use error::{Error, Result};
pub use io::{create_new, read_lines, resolve_target, write_atomic};
pub use lines::{join_lines, split_lines};
