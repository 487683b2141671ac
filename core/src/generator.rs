// Analytic generators that need no lattice noise
use crate::config::{DEFAULT_CONST_VALUE, DEFAULT_FREQUENCY};
use crate::graph::Sources;
use crate::NoiseModule;

/// Outputs the same value everywhere.
#[derive(Debug, Clone)]
pub struct Const {
    value: f64,
}

impl Default for Const {
    fn default() -> Self {
        Self::new(DEFAULT_CONST_VALUE)
    }
}

impl Const {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl NoiseModule for Const {
    fn source_count(&self) -> usize {
        0
    }

    fn get_value(&self, _sources: &Sources<'_>, _x: f64, _y: f64, _z: f64) -> f64 {
        self.value
    }
}

// Maps a radial distance onto concentric shells one unit apart:
// +1 on a shell, -1 halfway between two shells
#[inline]
fn shell_value(dist_from_center: f64) -> f64 {
    let dist_from_smaller = dist_from_center - dist_from_center.floor();
    let dist_from_larger = 1.0 - dist_from_smaller;
    let nearest = dist_from_smaller.min(dist_from_larger);
    1.0 - (nearest * 4.0)
}

/// Concentric spheres centred on the origin.
///
/// The first sphere has radius 1 and each following sphere is one unit
/// larger; the frequency scales the input so higher values pack the spheres
/// closer together.
#[derive(Debug, Clone)]
pub struct Spheres {
    frequency: f64,
}

impl Default for Spheres {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl Spheres {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }
}

impl NoiseModule for Spheres {
    fn source_count(&self) -> usize {
        0
    }

    fn get_value(&self, _sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        let x = x * self.frequency;
        let y = y * self.frequency;
        let z = z * self.frequency;
        shell_value((x * x + y * y + z * z).sqrt())
    }
}

/// Concentric cylinders around the y axis, spaced like [`Spheres`].
#[derive(Debug, Clone)]
pub struct Cylinders {
    frequency: f64,
}

impl Default for Cylinders {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl Cylinders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }
}

impl NoiseModule for Cylinders {
    fn source_count(&self) -> usize {
        0
    }

    fn get_value(&self, _sources: &Sources<'_>, x: f64, _y: f64, z: f64) -> f64 {
        let x = x * self.frequency;
        let z = z * self.frequency;
        shell_value((x * x + z * z).sqrt())
    }
}
