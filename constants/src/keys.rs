use bevy::input::keyboard::KeyCode;

/// Ring motion toggles, index-aligned with ring order (innermost first).
pub const RING_KEYS: [KeyCode; 3] = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3];

/// Shading presets in palette order.
pub const SHADING_KEYS: [KeyCode; 5] = [
    KeyCode::KeyQ,
    KeyCode::KeyW,
    KeyCode::KeyE,
    KeyCode::KeyR,
    KeyCode::KeyT,
];

/// Shows/hides the global directional light.
pub const DIRECTIONAL_LIGHT_KEY: KeyCode = KeyCode::KeyD;

/// Shows/hides every decoration spotlight.
pub const SPOTLIGHT_KEY: KeyCode = KeyCode::KeyS;

/// Shows/hides the point lights along the Möbius strip.
pub const STRIP_LIGHT_KEY: KeyCode = KeyCode::KeyP;

/// Shows/hides the world-axes gizmo.
pub const AXES_KEY: KeyCode = KeyCode::KeyX;
