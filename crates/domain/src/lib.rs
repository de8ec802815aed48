//! # mockfleet-domain
//!
//! Pure domain model for the mockfleet IoT teaching API.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **Devices** (catalog records: id, owning client, device kind)
//! - Define the **device kind → metric** table that decides which metrics a
//!   device reports
//! - Define **Readings** and **History points** (ephemeral synthetic samples)
//! - Contain all invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Randomness and the device catalog are expressed as traits in the `app`
//! crate (ports).

pub mod error;
pub mod time;

pub mod device;
pub mod metric;
pub mod reading;
