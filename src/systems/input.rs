//! Keyboard input.
//!
//! The animation takes no input; the only key is the debug overlay toggle,
//! which emits [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;

/// Key that toggles the debug overlay.
pub const DEBUG_KEY: KeyboardKey = KeyboardKey::KEY_F11;

/// Poll Raylib for the debug key and toggle the overlay when it is pressed.
pub fn poll_debug_key(rl: NonSend<raylib::RaylibHandle>, mut commands: Commands) {
    if rl.is_key_pressed(DEBUG_KEY) {
        commands.trigger(SwitchDebugEvent {});
    }
}
