//! # Frontdesk
//!
//! Console front desk for a single hotel property.
//!
//! The room inventory lives in [`frontdesk_registry`]. This crate puts it
//! behind a lock ([`SharedRegistry`]) and drives it from a text menu
//! ([`Console`]).
//!
//! ```text
//! stdin ─→ Console ─→ SharedRegistry ─→ Registry
//!            │
//!            └─→ stdout (menu, room listings, outcome messages)
//! ```

mod console;
mod error;
pub mod menu;
mod shared;

pub use console::Console;
pub use error::FrontdeskError;
pub use shared::SharedRegistry;

pub mod prelude {
    pub use crate::{Console, FrontdeskError, SharedRegistry};
    pub use frontdesk_registry::{
        Registry, RegistryConfig, RegistryError, Room, RoomNumber, RoomStatus, RoomType,
    };
}
