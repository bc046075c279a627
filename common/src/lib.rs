//! Shared models and contracts for `wsl-host-set`.
//!
//! * [`config`]: runtime paths and the guest query command.
//! * [`domain`]: the deduplicated set of target domains.
//! * [`error`]: the error kinds every stage can fail with.
//! * [`guest`] and [`hosts`]: traits the sync pipeline is driven through.

pub mod config;
pub mod domain;
pub mod error;
pub mod guest;
pub mod hosts;
