//! Walks the quill-core API: banner, one line per channel, then muting.

use quill_core::{log_debug, log_error, Logger};

fn main() {
    // Fake application state to make the output interesting.
    let app_version = "1.10.4";
    let debug_mode = true;
    let thing = "user did this, for reals";

    let mut logger = Logger::with_defaults();

    let mut message = format!("Starting MyApp, version {app_version}.");
    if debug_mode {
        message.push_str("\nRunning in Debug Mode");
    }
    logger.print_banner(&message);

    log_debug!(logger, "Can you believe a debugging {thing}.");
    logger.info.println("Just a normal thing is happening.");
    log_error!(logger, "Alert! An unexpected {thing}.");

    // Mute debug messages for the rest of the run.
    logger.debug_off();
    logger.debug.println("This line won't print now.");

    // Mute info messages too.
    logger.info_off();
    logger.debug.println("This line still won't print.");
    logger.info.println("This line won't print now.");
    logger.error.println("This is all that shows up!");
}
