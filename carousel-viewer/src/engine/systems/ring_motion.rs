/// Vertical ring oscillation and its per-ring pause toggle.
use bevy::prelude::*;

use constants::keys::RING_KEYS;
use constants::motion::{MAXIMUM_HEIGHT, RING_PHASE_SPEED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingMotion {
    Moving,
    Paused,
}

/// One concentric ring of the carousel. The phase accumulator drives a
/// sine law, so the ring reverses smoothly at the band limits instead of
/// bouncing off them.
#[derive(Component)]
pub struct CarouselRing {
    pub index: usize,
    pub motion: RingMotion,
    pub phase: f32,
}

impl CarouselRing {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            motion: RingMotion::Moving,
            phase: 0.0,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.motion == RingMotion::Moving
    }

    pub fn toggle(&mut self) {
        self.motion = match self.motion {
            RingMotion::Moving => RingMotion::Paused,
            RingMotion::Paused => RingMotion::Moving,
        };
    }

    /// Advances the phase by `delta` seconds. Paused rings hold their
    /// phase, so motion resumes exactly where it stopped.
    pub fn advance(&mut self, delta: f32) {
        if self.motion == RingMotion::Paused {
            return;
        }
        self.phase += RING_PHASE_SPEED * delta;
    }

    pub fn vertical_offset(&self) -> f32 {
        MAXIMUM_HEIGHT * self.phase.sin()
    }
}

/// Flips ring motion on the digit key matching the ring index. Runs on the
/// key-press edge only, so holding a key toggles once.
pub fn toggle_ring_motion(
    keys: Res<ButtonInput<KeyCode>>,
    mut rings: Query<&mut CarouselRing>,
) {
    for mut ring in &mut rings {
        let Some(&key) = RING_KEYS.get(ring.index) else {
            continue;
        };
        if keys.just_pressed(key) {
            ring.toggle();
            info!("Ring {} is now {:?}", ring.index, ring.motion);
        }
    }
}

pub fn animate_rings(
    time: Res<Time>,
    mut rings: Query<(&mut CarouselRing, &mut Transform)>,
) {
    for (mut ring, mut transform) in &mut rings {
        ring.advance(time.delta_secs());
        transform.translation.y = ring.vertical_offset();
    }
}
