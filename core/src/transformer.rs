// Modules that move the input point before sampling their source
use crate::config::{
    DEFAULT_POINT_SCALE, DEFAULT_ROTATION, DEFAULT_TRANSLATION, FractalParams, TurbulenceParams,
};
use crate::error::NoiseResult;
use crate::fractal::Perlin;
use crate::graph::Sources;
use crate::NoiseModule;

/// Multiplies each coordinate of the input point by a per-axis factor.
#[derive(Debug, Clone)]
pub struct ScalePoint {
    x_scale: f64,
    y_scale: f64,
    z_scale: f64,
}

impl Default for ScalePoint {
    fn default() -> Self {
        Self::uniform(DEFAULT_POINT_SCALE)
    }
}

impl ScalePoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uniform(scale: f64) -> Self {
        Self {
            x_scale: scale,
            y_scale: scale,
            z_scale: scale,
        }
    }

    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    pub fn z_scale(&self) -> f64 {
        self.z_scale
    }

    /// Same factor on all three axes.
    pub fn set_scale(&mut self, scale: f64) {
        self.set_scale_xyz(scale, scale, scale);
    }

    pub fn set_scale_xyz(&mut self, x_scale: f64, y_scale: f64, z_scale: f64) {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self.z_scale = z_scale;
    }

    pub fn set_x_scale(&mut self, scale: f64) {
        self.x_scale = scale;
    }

    pub fn set_y_scale(&mut self, scale: f64) {
        self.y_scale = scale;
    }

    pub fn set_z_scale(&mut self, scale: f64) {
        self.z_scale = scale;
    }
}

impl NoiseModule for ScalePoint {
    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        sources.get_value(0, x * self.x_scale, y * self.y_scale, z * self.z_scale)
    }
}

/// Offsets the input point by a per-axis translation.
#[derive(Debug, Clone)]
pub struct TranslatePoint {
    x_translation: f64,
    y_translation: f64,
    z_translation: f64,
}

impl Default for TranslatePoint {
    fn default() -> Self {
        Self::uniform(DEFAULT_TRANSLATION)
    }
}

impl TranslatePoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uniform(translation: f64) -> Self {
        Self {
            x_translation: translation,
            y_translation: translation,
            z_translation: translation,
        }
    }

    pub fn x_translation(&self) -> f64 {
        self.x_translation
    }

    pub fn y_translation(&self) -> f64 {
        self.y_translation
    }

    pub fn z_translation(&self) -> f64 {
        self.z_translation
    }

    pub fn set_translation(&mut self, translation: f64) {
        self.set_translation_xyz(translation, translation, translation);
    }

    pub fn set_translation_xyz(&mut self, x: f64, y: f64, z: f64) {
        self.x_translation = x;
        self.y_translation = y;
        self.z_translation = z;
    }

    pub fn set_x_translation(&mut self, translation: f64) {
        self.x_translation = translation;
    }

    pub fn set_y_translation(&mut self, translation: f64) {
        self.y_translation = translation;
    }

    pub fn set_z_translation(&mut self, translation: f64) {
        self.z_translation = translation;
    }
}

impl NoiseModule for TranslatePoint {
    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        sources.get_value(
            0,
            x + self.x_translation,
            y + self.y_translation,
            z + self.z_translation,
        )
    }
}

/// Rotates the input point around the origin before sampling the source.
///
/// Angles are in degrees. The rotation matrix is rebuilt whenever an angle
/// changes, so evaluation is a plain matrix product.
#[derive(Debug, Clone)]
pub struct RotatePoint {
    x_angle: f64,
    y_angle: f64,
    z_angle: f64,
    // Row i produces output coordinate i
    matrix: [[f64; 3]; 3],
}

impl Default for RotatePoint {
    fn default() -> Self {
        Self::with_angles(DEFAULT_ROTATION, DEFAULT_ROTATION, DEFAULT_ROTATION)
    }
}

impl RotatePoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_angles(x_angle: f64, y_angle: f64, z_angle: f64) -> Self {
        let mut rotate = Self {
            x_angle,
            y_angle,
            z_angle,
            matrix: [[0.0; 3]; 3],
        };
        rotate.set_angles(x_angle, y_angle, z_angle);
        rotate
    }

    pub fn x_angle(&self) -> f64 {
        self.x_angle
    }

    pub fn y_angle(&self) -> f64 {
        self.y_angle
    }

    pub fn z_angle(&self) -> f64 {
        self.z_angle
    }

    pub fn set_angles(&mut self, x_angle: f64, y_angle: f64, z_angle: f64) {
        let (x_sin, x_cos) = x_angle.to_radians().sin_cos();
        let (y_sin, y_cos) = y_angle.to_radians().sin_cos();
        let (z_sin, z_cos) = z_angle.to_radians().sin_cos();

        self.matrix = [
            [
                y_sin * x_sin * z_sin + y_cos * z_cos,
                x_cos * z_sin,
                y_sin * z_cos - y_cos * x_sin * z_sin,
            ],
            [
                y_sin * x_sin * z_cos - y_cos * z_sin,
                x_cos * z_cos,
                -y_cos * x_sin * z_cos - y_sin * z_sin,
            ],
            [-y_sin * x_cos, x_sin, y_cos * x_cos],
        ];

        self.x_angle = x_angle;
        self.y_angle = y_angle;
        self.z_angle = z_angle;
    }

    pub fn set_x_angle(&mut self, x_angle: f64) {
        self.set_angles(x_angle, self.y_angle, self.z_angle);
    }

    pub fn set_y_angle(&mut self, y_angle: f64) {
        self.set_angles(self.x_angle, y_angle, self.z_angle);
    }

    pub fn set_z_angle(&mut self, z_angle: f64) {
        self.set_angles(self.x_angle, self.y_angle, z_angle);
    }
}

impl NoiseModule for RotatePoint {
    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        let [r0, r1, r2] = &self.matrix;
        let nx = r0[0] * x + r0[1] * y + r0[2] * z;
        let ny = r1[0] * x + r1[1] * y + r1[2] * z;
        let nz = r2[0] * x + r2[1] * y + r2[2] * z;
        sources.get_value(0, nx, ny, nz)
    }
}

/// Displaces the input point by the values of three displacement sources,
/// then samples source 0 at the displaced point.
///
/// The displacement sources are all sampled at the original point.
#[derive(Debug, Clone, Default)]
pub struct Displace;

impl Displace {
    /// Slot of the x displacement source.
    pub const X: usize = 1;
    /// Slot of the y displacement source.
    pub const Y: usize = 2;
    /// Slot of the z displacement source.
    pub const Z: usize = 3;

    pub fn new() -> Self {
        Self
    }
}

impl NoiseModule for Displace {
    fn source_count(&self) -> usize {
        4
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        let dx = x + sources.get_value(Self::X, x, y, z);
        let dy = y + sources.get_value(Self::Y, x, y, z);
        let dz = z + sources.get_value(Self::Z, x, y, z);
        sources.get_value(0, dx, dy, dz)
    }
}

/// Randomly displaces the input point before sampling the source.
///
/// Three internal Perlin generators, seeded `seed`, `seed + 1` and
/// `seed + 2`, provide the x, y and z offsets, each scaled by `power`.
/// `roughness` is their shared octave count.
#[derive(Debug, Clone)]
pub struct Turbulence {
    x_distort: Perlin,
    y_distort: Perlin,
    z_distort: Perlin,
    power: f64,
}

impl Default for Turbulence {
    fn default() -> Self {
        Self::from_checked_params(TurbulenceParams::default())
    }
}

impl Turbulence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parameter set, rejecting an out-of-range roughness.
    pub fn from_params(params: TurbulenceParams) -> NoiseResult<Self> {
        params.validate()?;
        Ok(Self::from_checked_params(params))
    }

    // `params` must already have passed `validate`
    fn from_checked_params(params: TurbulenceParams) -> Self {
        let distort = |seed: i32| {
            Perlin::from_checked_params(FractalParams {
                frequency: params.frequency,
                octave_count: params.roughness,
                seed,
                ..FractalParams::default()
            })
        };
        Self {
            x_distort: distort(params.seed),
            y_distort: distort(params.seed.wrapping_add(1)),
            z_distort: distort(params.seed.wrapping_add(2)),
            power: params.power,
        }
    }

    fn distorts_mut(&mut self) -> [&mut Perlin; 3] {
        [&mut self.x_distort, &mut self.y_distort, &mut self.z_distort]
    }

    pub fn frequency(&self) -> f64 {
        self.x_distort.frequency()
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn roughness(&self) -> u32 {
        self.x_distort.octave_count()
    }

    pub fn seed(&self) -> i32 {
        self.x_distort.seed()
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        for distort in self.distorts_mut() {
            distort.set_frequency(frequency);
        }
    }

    /// Scaling applied to each displacement.
    pub fn set_power(&mut self, power: f64) {
        self.power = power;
    }

    /// Fails unless `roughness` is a valid octave count, `[1, 30]`.
    pub fn set_roughness(&mut self, roughness: u32) -> NoiseResult<()> {
        for distort in self.distorts_mut() {
            distort.set_octave_count(roughness)?;
        }
        Ok(())
    }

    pub fn set_seed(&mut self, seed: i32) {
        self.x_distort.set_seed(seed);
        self.y_distort.set_seed(seed.wrapping_add(1));
        self.z_distort.set_seed(seed.wrapping_add(2));
    }
}

impl NoiseModule for Turbulence {
    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        let dx = x + self.x_distort.sample(x, y, z) * self.power;
        let dy = y + self.y_distort.sample(x, y, z) * self.power;
        let dz = z + self.z_distort.sample(x, y, z) * self.power;
        sources.get_value(0, dx, dy, dz)
    }
}
