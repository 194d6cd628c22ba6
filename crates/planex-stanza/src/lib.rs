//! Generated include stanza management for planex Makefiles.
//!
//! A planex Makefile carries one stanza owned by `planex-init`:
//!
//! ```text
//! # Start generated by planex-init
//! include $(shell planex-init --rules)
//! # End generated by planex-init
//! ```
//!
//! Everything outside the two marker lines belongs to the user and is never
//! touched. [`ManagedFile::ensure`] creates the Makefile with a default
//! preamble when it is missing, or rewrites the stanza payload in place when
//! it exists. Files without a recognisable stanza are reported and left alone.

pub mod context;
pub mod error;
pub mod managed;
pub mod stanza;
pub mod template;
pub mod writer;

pub use context::{CancellationToken, RunContext};
pub use error::{Error, Result};
pub use managed::{DEFAULT_FILE_NAME, ManagedFile, Outcome};
pub use stanza::{Stanza, StanzaError};
pub use template::{DEFAULT_PREAMBLE, END_MARKER, INCLUDE_LINE, START_MARKER, StanzaTemplate};
pub use writer::{render_new, splice, update_lines};
