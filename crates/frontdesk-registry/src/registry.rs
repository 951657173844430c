//! Room registry: owns every room and routes lifecycle operations.

use crate::{RegistryConfig, RegistryError, Room, RoomNumber, RoomStatus, RoomType};

/// Holds all rooms of the property in room-number order.
///
/// The registry is the only owner of [`Room`] records. Every operation
/// validates first and mutates last, so a rejected call leaves all rooms
/// exactly as they were.
///
/// Not thread-safe by itself. Callers that share it put a single lock
/// around the whole registry.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Rooms in assignment order, so index `i` holds room `i + 1`.
    rooms: Vec<Room>,
    config: RegistryConfig,
}

impl Registry {
    /// Creates a registry with `config.room_count` rooms.
    pub fn new(config: RegistryConfig) -> Self {
        let count = config.room_count;
        let mut registry = Self {
            rooms: Vec::new(),
            config,
        };
        registry.initialize(count);
        registry
    }

    /// Creates a registry with `count` rooms and default guest limits.
    pub fn with_rooms(count: u32) -> Self {
        Self::new(RegistryConfig {
            room_count: count,
            ..RegistryConfig::default()
        })
    }

    /// Replaces every room with `count` fresh Available rooms.
    ///
    /// Rooms are numbered from 1 and typed Single, Double, Suite in
    /// rotation. Any bookings held before the call are discarded.
    pub fn initialize(&mut self, count: u32) {
        self.rooms = (1..=count)
            .zip(0usize..)
            .map(|(number, index)| Room::new(RoomNumber(number), RoomType::for_index(index)))
            .collect();
        self.config.room_count = count;
        tracing::info!(rooms = count, "registry initialized");
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Number of rooms in the property.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Returns the position of the room with this number, if any.
    pub fn find_by_number(&self, number: RoomNumber) -> Option<usize> {
        self.rooms.iter().position(|room| room.number() == number)
    }

    /// Returns the room with this number, if any.
    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.find_by_number(number).map(|index| &self.rooms[index])
    }

    /// All rooms in room-number order.
    pub fn list_all(&self) -> Vec<&Room> {
        self.rooms.iter().collect()
    }

    /// Rooms with the given status, in room-number order.
    pub fn list_by_status(&self, status: RoomStatus) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| room.status() == status)
            .collect()
    }

    /// Rooms that can be booked right now.
    pub fn list_available(&self) -> Vec<&Room> {
        self.list_by_status(RoomStatus::Available)
    }

    /// Occupied rooms whose guest name or phone contains `text`.
    ///
    /// Matching is a case-sensitive substring test, so an empty `text`
    /// returns every occupied room.
    pub fn search_guest(&self, text: &str) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| room.guest_matches(text))
            .collect()
    }

    /// Checks that `number` names an Available room, without changing it.
    ///
    /// Lets a caller reject a booking before collecting guest details.
    pub fn ensure_bookable(&self, number: RoomNumber) -> Result<(), RegistryError> {
        self.bookable_index(number).map(|_| ())
    }

    /// Reserves an Available room for a guest.
    ///
    /// Name and phone are stored exactly as given.
    ///
    /// # Errors
    /// - [`RegistryError::RoomNotFound`] if no room has this number.
    /// - [`RegistryError::RoomNotAvailable`] if the room is not Available.
    /// - [`RegistryError::InvalidGuestName`] / [`RegistryError::InvalidGuestPhone`]
    ///   if a guest field is empty or over its configured limit.
    pub fn book(
        &mut self,
        number: RoomNumber,
        guest_name: &str,
        guest_phone: &str,
    ) -> Result<(), RegistryError> {
        let index = self.bookable_index(number)?;

        let max_name = self.config.max_guest_name_len;
        let max_phone = self.config.max_guest_phone_len;
        let name_len = checked_len(guest_name, max_name)
            .map_err(|len| RegistryError::InvalidGuestName { len, max: max_name })?;
        checked_len(guest_phone, max_phone)
            .map_err(|len| RegistryError::InvalidGuestPhone { len, max: max_phone })?;

        self.rooms[index].reserve(guest_name.to_owned(), guest_phone.to_owned());
        tracing::info!(room = %number, name_len, "room booked");
        Ok(())
    }

    /// Marks the guest of a Booked room as arrived.
    ///
    /// # Errors
    /// - [`RegistryError::RoomNotFound`] if no room has this number.
    /// - [`RegistryError::RoomNotBooked`] if the room has no reservation.
    /// - [`RegistryError::AlreadyCheckedIn`] if the guest already arrived.
    pub fn check_in(&mut self, number: RoomNumber) -> Result<(), RegistryError> {
        let index = self.index_of(number)?;
        match self.rooms[index].status() {
            RoomStatus::Available => {
                tracing::debug!(room = %number, "check-in rejected: no reservation");
                Err(RegistryError::RoomNotBooked(number))
            }
            RoomStatus::CheckedIn => {
                tracing::debug!(room = %number, "check-in rejected: already checked in");
                Err(RegistryError::AlreadyCheckedIn(number))
            }
            RoomStatus::Booked => {
                self.rooms[index].arrive();
                tracing::info!(room = %number, "guest checked in");
                Ok(())
            }
        }
    }

    /// Checks the guest out and frees the room.
    ///
    /// # Errors
    /// - [`RegistryError::RoomNotFound`] if no room has this number.
    /// - [`RegistryError::RoomNotCheckedIn`] if the room is Available or
    ///   only Booked.
    pub fn check_out(&mut self, number: RoomNumber) -> Result<(), RegistryError> {
        let index = self.index_of(number)?;
        let status = self.rooms[index].status();
        if status != RoomStatus::CheckedIn {
            tracing::debug!(room = %number, %status, "check-out rejected");
            return Err(RegistryError::RoomNotCheckedIn {
                room: number,
                status,
            });
        }

        self.rooms[index].release();
        tracing::info!(room = %number, "guest checked out");
        Ok(())
    }

    fn bookable_index(&self, number: RoomNumber) -> Result<usize, RegistryError> {
        let index = self.index_of(number)?;
        let status = self.rooms[index].status();
        if status != RoomStatus::Available {
            tracing::debug!(room = %number, %status, "booking rejected");
            return Err(RegistryError::RoomNotAvailable {
                room: number,
                status,
            });
        }
        Ok(index)
    }

    fn index_of(&self, number: RoomNumber) -> Result<usize, RegistryError> {
        self.find_by_number(number).ok_or_else(|| {
            tracing::debug!(room = %number, "room not found");
            RegistryError::RoomNotFound(number)
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

/// Returns the character count of `value` if it is non-empty and within
/// `max`, otherwise the offending count.
fn checked_len(value: &str, max: usize) -> Result<usize, usize> {
    let len = value.chars().count();
    if len == 0 || len > max {
        Err(len)
    } else {
        Ok(len)
    }
}
