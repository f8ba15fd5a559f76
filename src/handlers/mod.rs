//! Event Handling Module
//!
//! Sits between raw terminal events and `App` state changes.
//!
//! # Module Organization
//!
//! - **`keys`**: Keyboard input processing for the list, the form and dialogs
//!

pub mod keys;
