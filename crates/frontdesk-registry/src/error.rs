//! Error types for the registry.

use std::fmt;

use crate::{RoomNumber, RoomStatus};

/// Which guest detail failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestField {
    Name,
    Phone,
}

impl fmt::Display for GuestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "Guest name"),
            Self::Phone => write!(f, "Guest phone number"),
        }
    }
}

/// Reasons a registry operation was rejected.
///
/// A rejected operation never changes any room, so every variant is
/// recoverable. Each variant prints a distinct message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No room carries this number.
    #[error("Room {0} not found.")]
    RoomNotFound(RoomNumber),

    /// Booking requires an Available room.
    #[error("Room {room} is not available. Status: {status}")]
    RoomNotAvailable { room: RoomNumber, status: RoomStatus },

    /// Guest name is empty or longer than the configured limit.
    #[error("{}", length_message(GuestField::Name, .len, .max))]
    InvalidGuestName { len: usize, max: usize },

    /// Guest phone is empty or longer than the configured limit.
    #[error("{}", length_message(GuestField::Phone, .len, .max))]
    InvalidGuestPhone { len: usize, max: usize },

    /// Check-in on a room with no reservation.
    #[error("Room {0} is available, cannot check in.")]
    RoomNotBooked(RoomNumber),

    /// Check-in on a room whose guest has already arrived.
    #[error("Guest already checked in to room {0}.")]
    AlreadyCheckedIn(RoomNumber),

    /// Check-out requires a CheckedIn room.
    #[error("Room {room} is not checked in. Status: {status}")]
    RoomNotCheckedIn { room: RoomNumber, status: RoomStatus },
}

impl RegistryError {
    /// Returns `true` for malformed guest input, `false` for lifecycle
    /// rule violations.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidGuestName { .. } | Self::InvalidGuestPhone { .. }
        )
    }
}

fn length_message(field: GuestField, len: &usize, max: &usize) -> String {
    if *len == 0 {
        format!("{field} must not be empty.")
    } else {
        format!("{field} is too long ({len} characters, max {max}).")
    }
}
