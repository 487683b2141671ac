use crate::config::{FractalParams, RIDGED_OFFSET, check_octave_count};
use crate::error::NoiseResult;
use crate::graph::Sources;
use crate::noisegen::{NoiseQuality, make_int32_range, smooth_gradient_noise_3d};
use crate::NoiseModule;

// Shared octave loop: scale the point by the frequency, then for each octave
// hand the gradient noise signal to `visit` and step the point by the
// lacunarity. Octave k uses seed + k (mod 2^32).
#[inline]
fn for_each_octave(params: &FractalParams, x: f64, y: f64, z: f64, mut visit: impl FnMut(f64)) {
    let mut x = x * params.frequency;
    let mut y = y * params.frequency;
    let mut z = z * params.frequency;

    for octave in 0..params.octave_count {
        // Keep coordinates in i32 range so the lattice lookup stays portable
        let nx = make_int32_range(x);
        let ny = make_int32_range(y);
        let nz = make_int32_range(z);

        let seed = params.seed.wrapping_add(octave as i32);
        visit(smooth_gradient_noise_3d(nx, ny, nz, seed, params.quality));

        x *= params.lacunarity;
        y *= params.lacunarity;
        z *= params.lacunarity;
    }
}

// Getters and setters common to all fractal generators
macro_rules! fractal_accessors {
    ($name:ident) => {
        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    params: FractalParams::default(),
                }
            }

            /// Build from a parameter set, rejecting an out-of-range octave count.
            pub fn from_params(params: FractalParams) -> NoiseResult<Self> {
                params.validate()?;
                Ok(Self::from_checked_params(params))
            }

            // `params` must already have passed `validate`
            pub(crate) fn from_checked_params(params: FractalParams) -> Self {
                debug_assert!(params.validate().is_ok());
                Self { params }
            }

            pub fn params(&self) -> &FractalParams {
                &self.params
            }

            /// Frequency of the first octave.
            pub fn frequency(&self) -> f64 {
                self.params.frequency
            }

            /// Frequency multiplier between successive octaves.
            pub fn lacunarity(&self) -> f64 {
                self.params.lacunarity
            }

            pub fn octave_count(&self) -> u32 {
                self.params.octave_count
            }

            pub fn quality(&self) -> NoiseQuality {
                self.params.quality
            }

            pub fn seed(&self) -> i32 {
                self.params.seed
            }

            pub fn set_frequency(&mut self, frequency: f64) {
                self.params.frequency = frequency;
            }

            /// Values between 1.5 and 3.5 give the best results.
            pub fn set_lacunarity(&mut self, lacunarity: f64) {
                self.params.lacunarity = lacunarity;
            }

            /// Fails unless `octave_count` is in `[1, 30]`.
            pub fn set_octave_count(&mut self, octave_count: u32) -> NoiseResult<()> {
                check_octave_count(octave_count)?;
                self.params.octave_count = octave_count;
                Ok(())
            }

            pub fn set_quality(&mut self, quality: NoiseQuality) {
                self.params.quality = quality;
            }

            pub fn set_seed(&mut self, seed: i32) {
                self.params.seed = seed;
            }
        }
    };
}

/// Fractal sum of gradient noise octaves.
///
/// Octave k contributes `signal * persistence^k`. The sum is not normalised:
/// with the default persistence it mostly stays within [-1, 1] but can
/// exceed it.
#[derive(Debug, Clone)]
pub struct Perlin {
    params: FractalParams,
}

fractal_accessors!(Perlin);

impl Perlin {
    /// Amplitude multiplier between successive octaves.
    pub fn persistence(&self) -> f64 {
        self.params.persistence
    }

    pub fn set_persistence(&mut self, persistence: f64) {
        self.params.persistence = persistence;
    }

    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut value = 0.0;
        let mut amplitude = 1.0;
        for_each_octave(&self.params, x, y, z, |signal| {
            value += signal * amplitude;
            amplitude *= self.params.persistence;
        });
        value
    }
}

impl NoiseModule for Perlin {
    fn source_count(&self) -> usize {
        0
    }

    fn get_value(&self, _sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        self.sample(x, y, z)
    }
}

/// Perlin-style fractal sum where every octave is rectified to
/// `2|signal| - 1` first, giving rounded, cloud-like lumps.
#[derive(Debug, Clone)]
pub struct Billow {
    params: FractalParams,
}

fractal_accessors!(Billow);

impl Billow {
    pub fn persistence(&self) -> f64 {
        self.params.persistence
    }

    pub fn set_persistence(&mut self, persistence: f64) {
        self.params.persistence = persistence;
    }

    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut value = 0.0;
        let mut amplitude = 1.0;
        for_each_octave(&self.params, x, y, z, |signal| {
            value += (2.0 * signal.abs() - 1.0) * amplitude;
            amplitude *= self.params.persistence;
        });
        value
    }
}

impl NoiseModule for Billow {
    fn source_count(&self) -> usize {
        0
    }

    fn get_value(&self, _sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        self.sample(x, y, z)
    }
}

/// Ridged multifractal noise.
///
/// Each octave is `offset - |signal|`, weighted by the previous octave's
/// output clamped to [0, 1], so sharp ridges gain detail while valleys stay
/// smooth. The total is shifted down by 1 to centre it near zero.
/// `persistence` in the parameter set is not used.
#[derive(Debug, Clone)]
pub struct RidgedMulti {
    params: FractalParams,
}

fractal_accessors!(RidgedMulti);

impl RidgedMulti {
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut value = 0.0;
        let mut weight = 1.0;
        for_each_octave(&self.params, x, y, z, |signal| {
            let signal = (RIDGED_OFFSET - signal.abs()) * weight;
            value += signal;
            weight = signal.clamp(0.0, 1.0);
        });
        value - 1.0
    }
}

impl NoiseModule for RidgedMulti {
    fn source_count(&self) -> usize {
        0
    }

    fn get_value(&self, _sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        self.sample(x, y, z)
    }
}
