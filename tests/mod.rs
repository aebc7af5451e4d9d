//! Integration tests for apod-gallery
//!
//! Tests are organized by component:
//! - feed_test: Feed client against a mock server (schema, status, transport)
//! - controller_test: Fetch, modal and theme flows through the controller
//! - ui_test: Full-screen rendering and click resolution
//! - cli_test: Argument parsing, JSON output, command handlers, the binary

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
