//! Command implementations for planex-init

pub mod init;
pub mod rules;

pub use init::run_init;
pub use rules::run_rules;
