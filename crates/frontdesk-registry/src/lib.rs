//! Room registry for Frontdesk.
//!
//! Holds the fixed set of rooms for one hotel property and enforces the
//! booking lifecycle of each room.
//!
//! # Key types
//!
//! - [`Registry`]: owns every [`Room`], exposes booking and query operations
//! - [`Room`]: read-only view of one room
//! - [`RoomStatus`]: per-room lifecycle state machine
//! - [`RegistryConfig`]: room count and guest field limits
//! - [`RegistryError`]: why an operation was rejected
//!
//! # Lifecycle
//!
//! ```text
//! Available ──book──→ Booked ──check_in──→ CheckedIn
//!     ↑                                        │
//!     └──────────────check_out─────────────────┘
//! ```

mod config;
mod error;
mod registry;
mod room;
mod types;

pub use config::{RegistryConfig, RoomStatus};
pub use error::{GuestField, RegistryError};
pub use registry::Registry;
pub use room::Room;
pub use types::{RoomNumber, RoomType};
