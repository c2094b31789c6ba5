//! # Booking Walkthrough
//!
//! Runs a scripted guest session against the estimation engine and the
//! in-memory submitter, for development and demos.
//!
//! ## Usage
//! ```bash
//! cargo run -p lodge-booking --bin walkthrough
//!
//! # With debug logging
//! RUST_LOG=debug cargo run -p lodge-booking --bin walkthrough
//! ```

use chrono::NaiveDate;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lodge_booking::{BookingForm, InMemorySubmitter};
use lodge_core::{BedConfiguration, RoomCategory};

fn main() {
    init_tracing();

    info!("Starting booking walkthrough");

    let mut form = BookingForm::with_lodge_rates();
    println!("Initial estimate:  {}", form.summary().summary_line());

    // The guest browses the options
    form.select_room(RoomCategory::Executive);
    form.select_bed(BedConfiguration::Double);
    form.set_nights(3);
    println!("After selection:   {}", form.summary().summary_line());

    // Picking dates overrides the night counter
    form.set_check_in(NaiveDate::from_ymd_opt(2024, 6, 10));
    form.set_check_out(NaiveDate::from_ymd_opt(2024, 6, 14));
    println!("After dates:       {}", form.summary().summary_line());

    // Contact details and submission
    form.set_guest_name("Chimwemwe Banda");
    form.set_email("chimwemwe@example.com");
    form.set_phone(Some("+265 999 123 456".to_string()));
    form.set_guests(2);
    form.set_message(Some("Arriving after dark, please hold the room.".to_string()));

    let mut submitter = InMemorySubmitter::new();
    match form.submit(&mut submitter) {
        Ok(receipt) => {
            println!("Inquiry accepted:  {} at {}", receipt.id, receipt.received_at);
        }
        Err(err) => {
            eprintln!("Submission failed: {}", err);
            std::process::exit(1);
        }
    }

    println!("Inbox now holds {} inquiry(ies)", submitter.accepted().len());
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
