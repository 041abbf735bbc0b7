//! Background Tasks Module
//!
//! Contains the deferred work the cache schedules for itself.
//!
//! # Tasks
//! - Expiry Sweep: batched reclamation of expired entries, armed lazily by
//!   `set` and re-armed only while TTL'd entries remain

mod sweep;

pub(crate) use sweep::SweepState;
