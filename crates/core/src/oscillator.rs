//! Oscillator module - the swinging layer
//!
//! The active piece slides horizontally by `speed * direction` every frame and
//! turns around when its edge comes within `margin` of either world edge.

/// Horizontal travel direction of the swinging layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The layer currently swinging above the tower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    pub center_x: f32,
    pub width: f32,
    pub direction: Direction,
    pub speed: f32,
}

impl ActivePiece {
    pub fn new(center_x: f32, width: f32, direction: Direction, speed: f32) -> Self {
        Self {
            center_x,
            width,
            direction,
            speed,
        }
    }

    /// Advance one frame inside `[0, world_width]`.
    pub fn step(&mut self, world_width: f32, margin: f32) {
        self.center_x += self.speed * self.direction.sign();

        let half = self.width / 2.0;
        if self.center_x > world_width - half - margin {
            self.direction = Direction::Left;
        } else if self.center_x < half + margin {
            self.direction = Direction::Right;
        }
    }

    /// Advance `frames` frames.
    pub fn advance(&mut self, frames: u32, world_width: f32, margin: f32) {
        for _ in 0..frames {
            self.step(world_width, margin);
        }
    }
}
