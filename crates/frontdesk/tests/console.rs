//! Integration tests for the console loop, driven with scripted input.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use frontdesk::prelude::*;
use tokio::io::AsyncWrite;

// =========================================================================
// Helpers
// =========================================================================

/// Runs a console over `script` and returns everything it printed.
async fn run_script(registry: &SharedRegistry, script: &str) -> String {
    let mut output = Vec::new();
    Console::new(registry.clone(), script.as_bytes(), &mut output)
        .run()
        .await
        .unwrap();
    String::from_utf8(output).unwrap()
}

fn registry(rooms: u32) -> SharedRegistry {
    SharedRegistry::new(Registry::with_rooms(rooms))
}

/// A writer whose every write fails, standing in for a closed terminal.
struct BrokenTerminal;

impl AsyncWrite for BrokenTerminal {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone")))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

// =========================================================================
// Menu handling
// =========================================================================

#[tokio::test]
async fn test_exit_prints_goodbye() {
    let out = run_script(&registry(3), "6\n").await;
    assert!(out.contains("--- Hotel Management System Menu ---"));
    assert!(out.contains("7. Search Guest by Name or Phone Number"));
    assert!(out.ends_with("Exiting the system.\n"));
}

#[tokio::test]
async fn test_end_of_input_stops_cleanly() {
    let out = run_script(&registry(3), "1\n").await;
    assert!(out.contains("--- All Rooms ---"));
    assert!(!out.contains("Exiting the system."));
}

#[tokio::test]
async fn test_invalid_menu_input() {
    let out = run_script(&registry(3), "hello\n9\n6\n").await;
    assert!(out.contains("Invalid input. Please enter a number.\n"));
    assert!(out.contains("Invalid choice. Please try again.\n"));
    assert!(out.ends_with("Exiting the system.\n"));
}

#[tokio::test]
async fn test_display_all_rooms() {
    let out = run_script(&registry(3), "1\n6\n").await;
    assert!(out.contains(
        "\n--- All Rooms ---\n\
         Room Number: 1\nRoom Type: Single\nStatus: Available\n--------------------\n\
         Room Number: 2\nRoom Type: Double\nStatus: Available\n--------------------\n\
         Room Number: 3\nRoom Type: Suite\nStatus: Available\n--------------------\n"
    ));
}

#[tokio::test]
async fn test_non_utf8_line_is_rejected_and_session_continues() {
    let shared = registry(2);
    let mut script = b"7\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(&[0xff, b'\n']);
    script.extend_from_slice(b"6\n");

    let mut output = Vec::new();
    Console::new(shared.clone(), script.as_slice(), &mut output)
        .run()
        .await
        .unwrap();
    let out = String::from_utf8(output).unwrap();

    assert_eq!(out.matches("Invalid input: text must be UTF-8.\n").count(), 2);
    assert!(out.ends_with("Exiting the system.\n"));
    assert_eq!(shared.list_available().await.len(), 2);
}

// =========================================================================
// Booking flow
// =========================================================================

#[tokio::test]
async fn test_book_check_in_check_out() {
    let shared = registry(3);
    let out = run_script(
        &shared,
        "3\n2\nAlice Smith\n555-1234\n4\n2\n5\n2\n6\n",
    )
    .await;

    assert!(out.contains("Room booked successfully.\n"));
    assert!(out.contains("Guest checked in successfully.\n"));
    assert!(out.contains("Guest checked out successfully.\n"));

    let room = shared.room(RoomNumber(2)).await.unwrap();
    assert_eq!(room.status(), RoomStatus::Available);
    assert_eq!(room.guest_name(), "");
}

#[tokio::test]
async fn test_book_keeps_name_as_typed() {
    let shared = registry(2);
    run_script(&shared, "3\n1\n  Mary  Ann \n555\n6\n").await;

    let room = shared.room(RoomNumber(1)).await.unwrap();
    assert_eq!(room.status(), RoomStatus::Booked);
    assert_eq!(room.guest_name(), "  Mary  Ann ");
}

#[tokio::test]
async fn test_book_unknown_room_skips_guest_prompts() {
    let out = run_script(&registry(3), "3\n9\n6\n").await;
    assert!(out.contains("Room 9 not found.\n"));
    assert!(!out.contains("Enter guest name: "));
    assert!(out.ends_with("Exiting the system.\n"));
}

#[tokio::test]
async fn test_book_taken_room_reports_status() {
    let shared = registry(3);
    shared.book(RoomNumber(1), "Alice", "555").await.unwrap();

    let out = run_script(&shared, "3\n1\n6\n").await;
    assert!(out.contains("Room 1 is not available. Status: Booked\n"));
}

#[tokio::test]
async fn test_book_name_too_long_leaves_room_available() {
    let shared = registry(1);
    let long_name = "x".repeat(50);
    let script = format!("3\n1\n{long_name}\n555\n6\n");

    let out = run_script(&shared, &script).await;

    assert!(out.contains("Guest name is too long (50 characters, max 49).\n"));
    assert_eq!(shared.list_available().await.len(), 1);
}

#[tokio::test]
async fn test_non_numeric_room_number_never_reaches_registry() {
    let shared = registry(3);
    let out = run_script(&shared, "4\nabc\n5\n\n6\n").await;
    assert_eq!(out.matches("Invalid input for room number.\n").count(), 2);
    assert_eq!(shared.list_available().await.len(), 3);
}

#[tokio::test]
async fn test_transition_failures_are_distinct() {
    let shared = registry(3);
    shared.book(RoomNumber(2), "Bob", "000").await.unwrap();

    let out = run_script(&shared, "4\n1\n5\n2\n4\n2\n4\n2\n6\n").await;
    assert!(out.contains("Room 1 is available, cannot check in.\n"));
    assert!(out.contains("Room 2 is not checked in. Status: Booked\n"));
    assert!(out.contains("Guest checked in successfully.\n"));
    assert!(out.contains("Guest already checked in to room 2.\n"));
}

// =========================================================================
// Listings and search
// =========================================================================

#[tokio::test]
async fn test_no_available_rooms() {
    let shared = registry(1);
    shared.book(RoomNumber(1), "Carol", "123").await.unwrap();

    let out = run_script(&shared, "2\n6\n").await;
    assert!(out.contains("\n--- Available Rooms ---\nNo available rooms.\n"));
}

#[tokio::test]
async fn test_search_guest() {
    let shared = registry(4);
    shared.book(RoomNumber(1), "Alice", "555-1234").await.unwrap();
    shared.book(RoomNumber(3), "Dave", "020-555").await.unwrap();
    shared.book(RoomNumber(4), "Erin", "999").await.unwrap();

    let out = run_script(&shared, "7\n555\n7\nZed\n6\n").await;

    assert_eq!(out.matches("Guest found!").count(), 2);
    assert!(out.contains("Guest Name: Alice\n"));
    assert!(out.contains("Guest Name: Dave\n"));
    assert!(!out.contains("Guest Name: Erin\n"));
    assert!(out.contains("Guest not found.\n"));
}

// =========================================================================
// Failure and sharing
// =========================================================================

#[tokio::test]
async fn test_io_error_ends_session() {
    let result = Console::new(registry(1), "1\n".as_bytes(), BrokenTerminal)
        .run()
        .await;
    assert!(matches!(result, Err(FrontdeskError::Io(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_bookings_of_one_room() {
    let shared = registry(1);

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let shared = shared.clone();
            tokio::spawn(async move {
                shared
                    .book(RoomNumber(1), &format!("Guest {i}"), "555")
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(()) => successes += 1,
            Err(err) => assert!(matches!(err, RegistryError::RoomNotAvailable { .. })),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(shared.list_by_status(RoomStatus::Booked).await.len(), 1);
}
