//! User Interface Module
//!
//! Rendering for the terminal front end. Nothing in here mutates the store;
//! every frame is drawn from scratch out of the current `App` state.

pub mod articles;
pub mod colors;
pub mod components;
pub mod form;
