//! Menu choices, input parsing and room rendering for the console.

use frontdesk_registry::{Room, RoomNumber};

/// Printed before every prompt for a choice.
pub const MENU: &str = "\n--- Hotel Management System Menu ---\n\
1. Display All Rooms\n\
2. Display Available Rooms\n\
3. Book a Room\n\
4. Check in a Guest\n\
5. Check out a Guest\n\
6. Exit\n\
7. Search Guest by Name or Phone Number\n\
Enter your choice: ";

/// Separator printed after each room block.
pub const ROOM_SEPARATOR: &str = "--------------------";

/// One entry of the main menu.
///
/// The numbering follows the printed [`MENU`], where Exit sits at 6 and
/// guest search was appended as 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayAll,
    DisplayAvailable,
    Book,
    CheckIn,
    CheckOut,
    Exit,
    SearchGuest,
}

impl MenuChoice {
    /// Parses the operator's menu selection.
    ///
    /// # Errors
    /// [`MenuInputError::NotANumber`] for non-numeric input,
    /// [`MenuInputError::UnknownChoice`] for numbers outside the menu.
    pub fn parse(line: &str) -> Result<Self, MenuInputError> {
        let number: i64 = line
            .trim()
            .parse()
            .map_err(|_| MenuInputError::NotANumber)?;
        match number {
            1 => Ok(Self::DisplayAll),
            2 => Ok(Self::DisplayAvailable),
            3 => Ok(Self::Book),
            4 => Ok(Self::CheckIn),
            5 => Ok(Self::CheckOut),
            6 => Ok(Self::Exit),
            7 => Ok(Self::SearchGuest),
            other => Err(MenuInputError::UnknownChoice(other)),
        }
    }
}

/// Input the console rejects before it reaches the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuInputError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    #[error("Invalid choice. Please try again.")]
    UnknownChoice(i64),

    #[error("Invalid input for room number.")]
    InvalidRoomNumber,

    #[error("Invalid input: text must be UTF-8.")]
    InvalidEncoding,
}

/// Parses a room number typed at a prompt.
///
/// Anything that is not a non-negative integer fitting a [`RoomNumber`]
/// is rejected here, so the registry only ever sees numeric input.
pub fn parse_room_number(line: &str) -> Result<RoomNumber, MenuInputError> {
    line.trim()
        .parse::<u32>()
        .map(RoomNumber)
        .map_err(|_| MenuInputError::InvalidRoomNumber)
}

/// Removes the line terminator from a line read from the terminal.
///
/// Everything else, including leading and inner spaces, is kept.
pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line)
}

/// Renders one room as the block shown in listings and search results.
pub fn render_room(room: &Room) -> String {
    let mut out = format!(
        "Room Number: {}\nRoom Type: {}\nStatus: {}\n",
        room.number(),
        room.room_type(),
        room.status()
    );
    if room.is_occupied() {
        out.push_str(&format!(
            "Guest Name: {}\nGuest Phone: {}\n",
            room.guest_name(),
            room.guest_phone()
        ));
    }
    out.push_str(ROOM_SEPARATOR);
    out.push('\n');
    out
}

/// Renders a titled listing; `empty` is printed when there are no rooms.
pub fn render_listing(title: &str, rooms: &[Room], empty: &str) -> String {
    let mut out = format!("\n--- {title} ---\n");
    if rooms.is_empty() {
        out.push_str(empty);
        out.push('\n');
    }
    for room in rooms {
        out.push_str(&render_room(room));
    }
    out
}

/// Renders guest search results, one `Guest found!` header per match.
pub fn render_search(rooms: &[Room]) -> String {
    if rooms.is_empty() {
        return "Guest not found.\n".to_string();
    }
    rooms
        .iter()
        .map(|room| format!("\nGuest found!\n{}", render_room(room)))
        .collect()
}
