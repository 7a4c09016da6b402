//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (pixels) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const PITCH_DARK: [f32; 4] = rgb(15, 110, 15);
    pub const PITCH_LIGHT: [f32; 4] = rgb(25, 140, 25);
    pub const WHITE: [f32; 4] = rgb(255, 255, 255);
    pub const BLACK: [f32; 4] = rgb(0, 0, 0);
    /// Red cards
    pub const HAZARD: [f32; 4] = rgb(210, 40, 40);
    /// Trophies
    pub const GOLD: [f32; 4] = rgb(255, 215, 60);
    /// Banner backdrop (black at ~170/255 alpha)
    pub const BANNER_BACKDROP: [f32; 4] = [0.0, 0.0, 0.0, 170.0 / 255.0];
}
