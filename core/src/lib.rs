//! # wslhost-core
//!
//! The stages of a sync run and the service that chains them:
//!
//! * [`sources`]: merge arguments and the sidecar domain file into a [`DomainSet`].
//! * [`guest`]: ask the WSL guest for its address.
//! * [`hosts`]: filter stale lines out of the hosts file and append fresh entries.
//! * [`sync`]: domains → address → reconcile → write.
//!
//! [`DomainSet`]: wslhost_common::domain::DomainSet

pub mod guest;
pub mod hosts;
pub mod sources;
pub mod sync;
