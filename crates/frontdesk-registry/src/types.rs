//! Identity and classification types for rooms.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RoomNumber
// ---------------------------------------------------------------------------

/// The number painted on a room door.
///
/// Numbers are assigned sequentially from 1 when the registry is
/// initialized and never change afterwards. Serialized as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(pub u32);

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoomNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

// ---------------------------------------------------------------------------
// RoomType
// ---------------------------------------------------------------------------

/// The kind of room. Fixed when the registry is initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    /// Round-robin order used when rooms are created.
    pub const ROTATION: [RoomType; 3] = [Self::Single, Self::Double, Self::Suite];

    /// Returns the type assigned to the room at `index` (zero-based).
    pub fn for_index(index: usize) -> Self {
        Self::ROTATION[index % Self::ROTATION.len()]
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "Single"),
            Self::Double => write!(f, "Double"),
            Self::Suite => write!(f, "Suite"),
        }
    }
}
