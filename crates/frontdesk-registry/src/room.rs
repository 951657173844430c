//! A single hotel room record.

use serde::{Deserialize, Serialize};

use crate::{RoomNumber, RoomStatus, RoomType};

/// One room in the property.
///
/// Fields are private: only the [`Registry`](crate::Registry) mutates a
/// room, and only through the lifecycle transitions. Guest details are
/// non-empty exactly when the status is occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    number: RoomNumber,
    room_type: RoomType,
    status: RoomStatus,
    guest_name: String,
    guest_phone: String,
}

impl Room {
    pub(crate) fn new(number: RoomNumber, room_type: RoomType) -> Self {
        Self {
            number,
            room_type,
            status: RoomStatus::Available,
            guest_name: String::new(),
            guest_phone: String::new(),
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn status(&self) -> RoomStatus {
        self.status
    }

    /// Guest name, empty while the room is Available.
    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    /// Guest phone, empty while the room is Available.
    pub fn guest_phone(&self) -> &str {
        &self.guest_phone
    }

    pub fn is_occupied(&self) -> bool {
        self.status.is_occupied()
    }

    /// Returns `true` if the guest name or phone contains `needle`.
    ///
    /// Plain case-sensitive substring match. Available rooms never match.
    pub fn guest_matches(&self, needle: &str) -> bool {
        self.is_occupied()
            && (self.guest_name.contains(needle) || self.guest_phone.contains(needle))
    }

    pub(crate) fn reserve(&mut self, guest_name: String, guest_phone: String) {
        debug_assert!(self.status.can_transition_to(RoomStatus::Booked));
        self.status = RoomStatus::Booked;
        self.guest_name = guest_name;
        self.guest_phone = guest_phone;
    }

    pub(crate) fn arrive(&mut self) {
        debug_assert!(self.status.can_transition_to(RoomStatus::CheckedIn));
        self.status = RoomStatus::CheckedIn;
    }

    pub(crate) fn release(&mut self) {
        debug_assert!(self.status.can_transition_to(RoomStatus::Available));
        self.status = RoomStatus::Available;
        self.guest_name.clear();
        self.guest_phone.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booked_room() -> Room {
        let mut room = Room::new(RoomNumber(4), RoomType::Single);
        room.reserve("Ada Lovelace".into(), "555-0101".into());
        room
    }

    #[test]
    fn test_new_room_is_available_without_guest() {
        let room = Room::new(RoomNumber(1), RoomType::Double);
        assert_eq!(room.status(), RoomStatus::Available);
        assert!(room.guest_name().is_empty());
        assert!(room.guest_phone().is_empty());
    }

    #[test]
    fn test_guest_matches_name_or_phone() {
        let room = booked_room();
        assert!(room.guest_matches("Ada"));
        assert!(room.guest_matches("0101"));
        assert!(!room.guest_matches("ada"));
        assert!(room.guest_matches(""));
    }

    #[test]
    fn test_available_room_never_matches() {
        let room = Room::new(RoomNumber(1), RoomType::Suite);
        assert!(!room.guest_matches(""));
    }

    #[test]
    fn test_release_clears_guest() {
        let mut room = booked_room();
        room.arrive();
        room.release();
        assert_eq!(room.status(), RoomStatus::Available);
        assert_eq!(room.guest_name(), "");
        assert_eq!(room.guest_phone(), "");
    }
}
