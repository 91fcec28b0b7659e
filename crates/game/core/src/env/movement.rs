use glam::Vec2;

use crate::state::UnitId;

/// Carries out submitted movement intents.
///
/// Called once per frame for every unit with a pending move. Implementations
/// return the unit's new position; arrival is detected by the caller.
pub trait MovementExecutor {
    fn step(&mut self, unit: UnitId, from: Vec2, destination: Vec2, dt: f32) -> Vec2;
}

/// Straight-line movement at a constant speed, with no obstacles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectMovement {
    speed: f32,
}

impl DirectMovement {
    pub const DEFAULT_SPEED: f32 = 6.0;

    pub fn new(speed: f32) -> Self {
        Self {
            speed: speed.max(0.0),
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl Default for DirectMovement {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED)
    }
}

impl MovementExecutor for DirectMovement {
    fn step(&mut self, _unit: UnitId, from: Vec2, destination: Vec2, dt: f32) -> Vec2 {
        let budget = self.speed * dt.max(0.0);
        let remaining = destination - from;
        if remaining.length() <= budget {
            destination
        } else {
            from + remaining.normalize_or_zero() * budget
        }
    }
}
