//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

/// Held direction keys as an axis. `y` only steers attack direction.
pub(crate) fn keyboard_axis(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }
    Vec2::new(x, y)
}

/// Sample the keyboard every frame. Edge flags are OR-ed in so they survive
/// until the next fixed step consumes them.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.axis = keyboard_axis(&keyboard);
    input.jump_pressed |=
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);
    input.dash_pressed |=
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);
}

/// Last link of the fixed chain: presses seen this step are spent.
pub(crate) fn consume_movement_input(mut input: ResMut<MovementInput>) {
    input.consume_edges();
}
