use glam::Vec3;

use crate::combat::ShotTrace;

/// Receives a request to draw a shot from `origin` to `impact`.
pub trait ShotVisualizer {
    fn place_shot(&mut self, origin: Vec3, impact: Vec3);
}

/// Visualizer that keeps every shot for later inspection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShotRecorder {
    shots: Vec<ShotTrace>,
}

impl ShotRecorder {
    pub fn shots(&self) -> &[ShotTrace] {
        &self.shots
    }

    /// Hands over the recorded shots, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<ShotTrace> {
        std::mem::take(&mut self.shots)
    }
}

impl ShotVisualizer for ShotRecorder {
    fn place_shot(&mut self, origin: Vec3, impact: Vec3) {
        self.shots.push(ShotTrace { origin, impact });
    }
}
