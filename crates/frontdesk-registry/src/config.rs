//! Registry configuration and room state machine.

use std::env;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RegistryConfig
// ---------------------------------------------------------------------------

/// Configuration for a registry instance.
///
/// The guest field limits are character counts. The defaults match a
/// 50-byte name field and a 15-byte phone field, each minus a terminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Number of rooms created at startup, numbered `1..=room_count`.
    pub room_count: u32,

    /// Longest accepted guest name, in characters.
    pub max_guest_name_len: usize,

    /// Longest accepted guest phone number, in characters.
    pub max_guest_phone_len: usize,
}

impl RegistryConfig {
    /// Default number of rooms in the property.
    pub const DEFAULT_ROOM_COUNT: u32 = 100;
    /// Largest property the registry will create from configuration.
    pub const MAX_ROOM_COUNT: u32 = 1_000;
    pub const DEFAULT_MAX_GUEST_NAME_LEN: usize = 49;
    pub const DEFAULT_MAX_GUEST_PHONE_LEN: usize = 14;

    /// Builds a configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FRONTDESK_ROOMS` - Number of rooms, 1 to 1000 (default: 100)
    /// - `FRONTDESK_MAX_NAME_LEN` - Guest name limit (default: 49)
    /// - `FRONTDESK_MAX_PHONE_LEN` - Guest phone limit (default: 14)
    ///
    /// Missing, unparseable or out-of-range values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from any key/value source, with the same
    /// rules as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(count) = read_var::<u32, _>(&lookup, "FRONTDESK_ROOMS") {
            if (1..=Self::MAX_ROOM_COUNT).contains(&count) {
                config.room_count = count;
            } else {
                tracing::warn!(
                    count,
                    max = Self::MAX_ROOM_COUNT,
                    "FRONTDESK_ROOMS out of range, using default"
                );
            }
        }
        if let Some(len) = read_var::<usize, _>(&lookup, "FRONTDESK_MAX_NAME_LEN") {
            config.max_guest_name_len = len.max(1);
        }
        if let Some(len) = read_var::<usize, _>(&lookup, "FRONTDESK_MAX_PHONE_LEN") {
            config.max_guest_phone_len = len.max(1);
        }

        config
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            room_count: Self::DEFAULT_ROOM_COUNT,
            max_guest_name_len: Self::DEFAULT_MAX_GUEST_NAME_LEN,
            max_guest_phone_len: Self::DEFAULT_MAX_GUEST_PHONE_LEN,
        }
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// The occupancy state of a room.
///
/// Transitions form a strict cycle, no skipping states:
///
/// ```text
/// Available → Booked → CheckedIn → Available
/// ```
///
/// - **Available**: No guest. The only state that accepts a booking.
/// - **Booked**: A guest holds a reservation but has not arrived.
/// - **CheckedIn**: The guest is in the room. Checking out clears the
///   guest details and frees the room.
///
/// There is no `Booked → Available` edge: a reservation cannot be
/// cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RoomStatus {
    Available,
    Booked,
    CheckedIn,
}

impl RoomStatus {
    /// Returns `true` if a guest is attached to the room.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Booked | Self::CheckedIn)
    }

    /// Returns the only state reachable from this one.
    pub fn next(self) -> Self {
        match self {
            Self::Available => Self::Booked,
            Self::Booked => Self::CheckedIn,
            Self::CheckedIn => Self::Available,
        }
    }

    /// Returns `true` if moving to `target` is a legal transition.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == target
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Booked => write!(f, "Booked"),
            Self::CheckedIn => write!(f, "Checked-in"),
        }
    }
}
