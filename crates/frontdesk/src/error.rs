//! Unified error type for the front desk.

use frontdesk_registry::RegistryError;

use crate::menu::MenuInputError;

/// Top-level error for console operations.
///
/// Registry rejections and malformed input are recoverable: the console
/// prints them and shows the menu again. I/O failures end the session.
#[derive(Debug, thiserror::Error)]
pub enum FrontdeskError {
    /// The registry refused the operation.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The operator typed something the menu could not parse.
    #[error(transparent)]
    Input(#[from] MenuInputError),

    /// Input ended while the console was waiting for a line.
    #[error("input closed")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl FrontdeskError {
    /// Returns `true` if the console should report the error and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Registry(_) | Self::Input(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_registry::RoomNumber;

    #[test]
    fn test_from_registry_error() {
        let err: FrontdeskError = RegistryError::RoomNotFound(RoomNumber(9)).into();
        assert!(matches!(err, FrontdeskError::Registry(_)));
        assert_eq!(err.to_string(), "Room 9 not found.");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_from_input_error() {
        let err: FrontdeskError = MenuInputError::InvalidRoomNumber.into();
        assert!(matches!(err, FrontdeskError::Input(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_io_error_is_fatal() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: FrontdeskError = io.into();
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("gone"));
        assert!(!FrontdeskError::InputClosed.is_recoverable());
    }
}
