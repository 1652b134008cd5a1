//! Event types and observers.
//!
//! Submodules:
//! - [`frame`] – announces every frame index the clock advances to
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod frame;
pub mod switchdebug;
