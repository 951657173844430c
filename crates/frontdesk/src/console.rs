//! The request/response menu loop.
//!
//! One iteration of the loop:
//!   1. Print the menu and read a choice
//!   2. Prompt for whatever the choice needs (room number, guest details)
//!   3. Call the registry and print the outcome
//!
//! Recoverable failures are printed and the loop continues. End of input
//! ends the session like choosing Exit; I/O errors end it with an error.

use frontdesk_registry::RoomNumber;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::menu::{self, MenuChoice, MenuInputError};
use crate::{FrontdeskError, SharedRegistry};

/// What the loop should do after handling a choice.
enum Flow {
    Continue,
    Exit,
}

/// A console session bound to one input and one output stream.
pub struct Console<R, W> {
    registry: SharedRegistry,
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(registry: SharedRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Runs the menu loop until Exit, end of input, or an I/O error.
    pub async fn run(mut self) -> Result<(), FrontdeskError> {
        tracing::info!("console session started");

        loop {
            match self.step().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(FrontdeskError::InputClosed) => {
                    tracing::info!("input closed");
                    break;
                }
                Err(FrontdeskError::Registry(e)) if e.is_input_error() => {
                    tracing::debug!(error = %e, "guest details rejected");
                    self.say(&e.to_string()).await?;
                }
                Err(e) if e.is_recoverable() => {
                    tracing::info!(error = %e, "request rejected");
                    self.say(&e.to_string()).await?;
                }
                Err(e) => {
                    tracing::error!(error = %e, "console failed");
                    return Err(e);
                }
            }
        }

        self.output.flush().await?;
        tracing::info!("console session ended");
        Ok(())
    }

    async fn step(&mut self) -> Result<Flow, FrontdeskError> {
        let line = self.prompt(menu::MENU).await?;
        let choice = MenuChoice::parse(&line)?;
        tracing::debug!(?choice, "menu choice");

        match choice {
            MenuChoice::DisplayAll => {
                let rooms = self.registry.list_all().await;
                let text = menu::render_listing("All Rooms", &rooms, "No rooms.");
                self.write(&text).await?;
            }
            MenuChoice::DisplayAvailable => {
                let rooms = self.registry.list_available().await;
                let text =
                    menu::render_listing("Available Rooms", &rooms, "No available rooms.");
                self.write(&text).await?;
            }
            MenuChoice::Book => self.book().await?,
            MenuChoice::CheckIn => {
                let number = self.prompt_room("Enter room number to check in: ").await?;
                self.registry.check_in(number).await?;
                self.say("Guest checked in successfully.").await?;
            }
            MenuChoice::CheckOut => {
                let number = self.prompt_room("Enter room number to check out: ").await?;
                self.registry.check_out(number).await?;
                self.say("Guest checked out successfully.").await?;
            }
            MenuChoice::SearchGuest => {
                let text = self
                    .prompt("Enter guest name or phone number to search: ")
                    .await?;
                let rooms = self.registry.search_guest(&text).await;
                self.write(&menu::render_search(&rooms)).await?;
            }
            MenuChoice::Exit => {
                self.say("Exiting the system.").await?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    /// Collects booking details, rejecting an unusable room before asking
    /// for the guest.
    async fn book(&mut self) -> Result<(), FrontdeskError> {
        let number = self.prompt_room("Enter room number to book: ").await?;
        self.registry.ensure_bookable(number).await?;

        let guest_name = self.prompt("Enter guest name: ").await?;
        let guest_phone = self.prompt("Enter guest phone number: ").await?;
        self.registry.book(number, &guest_name, &guest_phone).await?;

        self.say("Room booked successfully.").await
    }

    async fn prompt_room(&mut self, text: &str) -> Result<RoomNumber, FrontdeskError> {
        let line = self.prompt(text).await?;
        Ok(menu::parse_room_number(&line)?)
    }

    /// Prints `text` and reads one line, without its line terminator.
    ///
    /// A line that is not valid UTF-8 is an input error, not an I/O one.
    async fn prompt(&mut self, text: &str) -> Result<String, FrontdeskError> {
        self.write(text).await?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Err(FrontdeskError::InputClosed);
        }
        let line = String::from_utf8(buf).map_err(|_| MenuInputError::InvalidEncoding)?;
        Ok(menu::strip_line_ending(&line).to_owned())
    }

    async fn say(&mut self, message: &str) -> Result<(), FrontdeskError> {
        self.write(message).await?;
        self.write("\n").await
    }

    async fn write(&mut self, text: &str) -> Result<(), FrontdeskError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
