//! # mockfleet-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceCatalog` — read-only access to the device records
//!   - `RandomSource` — uniform draws for synthetic metric values
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceService` — list devices, get one, filter by client
//!   - `TelemetryService` — live readings and recent history
//! - Turn a device kind into synthetic metric values (`sampler`)
//!
//! ## Dependency rule
//! Depends on `mockfleet-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod sampler;
pub mod services;
