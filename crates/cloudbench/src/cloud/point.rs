use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Geometry-only point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointXyz {
    pub position: Vec3,
}

/// Point with an RGB color attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointXyzRgb {
    pub position: Vec3,
    /// Color as 8-bit RGB channels.
    pub rgb: [u8; 3],
}

/// Point with a surface normal attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointXyzNormal {
    pub position: Vec3,
    /// Unit surface normal.
    pub normal: Vec3,
}

/// Point carrying both a color and a surface normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointXyzRgbNormal {
    pub position: Vec3,
    pub rgb: [u8; 3],
    pub normal: Vec3,
}

impl PointXyz {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
        }
    }
}

impl PointXyzRgb {
    pub fn new(x: f32, y: f32, z: f32, rgb: [u8; 3]) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            rgb,
        }
    }
}

impl PointXyzNormal {
    pub fn new(x: f32, y: f32, z: f32, normal: Vec3) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            normal,
        }
    }
}

impl PointXyzRgbNormal {
    pub fn new(x: f32, y: f32, z: f32, rgb: [u8; 3], normal: Vec3) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            rgb,
            normal,
        }
    }
}
