// Integer-lattice coherent noise kernel.
//
// All integer arithmetic is done with explicit wrapping so the same inputs
// produce the same bits on every platform.

use serde::{Deserialize, Serialize};

use crate::interp::{linear_interp, s_curve3, s_curve5};
use crate::vectors::RANDOM_VECTORS;

// Prime multipliers combining the lattice coordinates and the seed.
const X_NOISE_GEN: i32 = 1619;
const Y_NOISE_GEN: i32 = 31337;
const Z_NOISE_GEN: i32 = 6971;
const SEED_NOISE_GEN: i32 = 1013;
const SHIFT_NOISE_GEN: u32 = 8;

/// Scale that brings a gradient dot product into roughly [-1, 1].
const GRADIENT_SCALE: f64 = 2.12;

/// 2^30; half the span of a 32-bit signed integer.
const INT32_HALF_RANGE: f64 = 1_073_741_824.0;

/// Smoothing curve applied to the fractional lattice offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseQuality {
    /// Plain trilinear interpolation; visible creasing at cell borders.
    Fast,
    /// Cubic S-curve; continuous first derivative.
    #[default]
    Standard,
    /// Quintic S-curve; continuous first and second derivatives.
    Best,
}

impl NoiseQuality {
    /// Map a fractional lattice offset through this quality's curve.
    #[inline]
    pub fn curve(self, t: f64) -> f64 {
        match self {
            NoiseQuality::Fast => t,
            NoiseQuality::Standard => s_curve3(t),
            NoiseQuality::Best => s_curve5(t),
        }
    }
}

/// Which lattice function [`smooth_noise_3d`] interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseMode {
    Gradient,
    Value,
}

/// Weighted sum of the lattice coordinates and the seed, modulo 2^32.
#[inline]
fn lattice_sum(x: i32, y: i32, z: i32, seed: i32) -> i32 {
    X_NOISE_GEN
        .wrapping_mul(x)
        .wrapping_add(Y_NOISE_GEN.wrapping_mul(y))
        .wrapping_add(Z_NOISE_GEN.wrapping_mul(z))
        .wrapping_add(SEED_NOISE_GEN.wrapping_mul(seed))
}

/// Hash a lattice point and seed to an integer in `[0, 2^31)`.
pub fn int_value_noise_3d(x: i32, y: i32, z: i32, seed: i32) -> i32 {
    let mut n = lattice_sum(x, y, z, seed) & 0x7fff_ffff;
    n ^= n << 13;
    n.wrapping_mul(
        n.wrapping_mul(n)
            .wrapping_mul(60493)
            .wrapping_add(19_990_303),
    )
    .wrapping_add(1_376_312_589)
        & 0x7fff_ffff
}

/// Index into [`RANDOM_VECTORS`] for a lattice point.
#[inline]
fn gradient_index(ix: i32, iy: i32, iz: i32, seed: i32) -> usize {
    let h = int_value_noise_3d(ix, iy, iz, seed);
    ((h ^ (h >> SHIFT_NOISE_GEN)) & 0xff) as usize
}

/// Gradient noise contribution of lattice point `(ix, iy, iz)` at `(x, y, z)`.
///
/// `(x, y, z)` must lie within one unit of the lattice point on every axis.
/// The result is zero at the lattice point itself.
pub fn gradient_noise_3d(x: f64, y: f64, z: f64, ix: i32, iy: i32, iz: i32, seed: i32) -> f64 {
    let [xg, yg, zg] = RANDOM_VECTORS[gradient_index(ix, iy, iz, seed)];

    let xv = x - f64::from(ix);
    let yv = y - f64::from(iy);
    let zv = z - f64::from(iz);

    ((xg * xv) + (yg * yv) + (zg * zv)) * GRADIENT_SCALE
}

/// Value noise at a lattice point, in `(-1, 1]`.
pub fn value_noise_3d(x: i32, y: i32, z: i32, seed: i32) -> f64 {
    1.0 - (f64::from(int_value_noise_3d(x, y, z, seed)) / INT32_HALF_RANGE)
}

/// Coherent noise at `(x, y, z)`: the eight lattice values around the point
/// blended trilinearly with the offsets shaped by `quality`.
pub fn smooth_noise_3d(
    x: f64,
    y: f64,
    z: f64,
    seed: i32,
    quality: NoiseQuality,
    mode: NoiseMode,
) -> f64 {
    let xf = x.floor();
    let yf = y.floor();
    let zf = z.floor();
    let x0 = xf as i32;
    let y0 = yf as i32;
    let z0 = zf as i32;
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let xs = quality.curve(x - xf);
    let ys = quality.curve(y - yf);
    let zs = quality.curve(z - zf);

    let corner = |ix: i32, iy: i32, iz: i32| match mode {
        NoiseMode::Gradient => gradient_noise_3d(x, y, z, ix, iy, iz, seed),
        NoiseMode::Value => value_noise_3d(ix, iy, iz, seed),
    };

    let ix0 = linear_interp(corner(x0, y0, z0), corner(x1, y0, z0), xs);
    let ix1 = linear_interp(corner(x0, y1, z0), corner(x1, y1, z0), xs);
    let iy0 = linear_interp(ix0, ix1, ys);
    let ix0 = linear_interp(corner(x0, y0, z1), corner(x1, y0, z1), xs);
    let ix1 = linear_interp(corner(x0, y1, z1), corner(x1, y1, z1), xs);
    let iy1 = linear_interp(ix0, ix1, ys);

    linear_interp(iy0, iy1, zs)
}

/// [`smooth_noise_3d`] over gradient noise.
#[inline]
pub fn smooth_gradient_noise_3d(x: f64, y: f64, z: f64, seed: i32, quality: NoiseQuality) -> f64 {
    smooth_noise_3d(x, y, z, seed, quality, NoiseMode::Gradient)
}

/// [`smooth_noise_3d`] over value noise.
#[inline]
pub fn smooth_value_noise_3d(x: f64, y: f64, z: f64, seed: i32, quality: NoiseQuality) -> f64 {
    smooth_noise_3d(x, y, z, seed, quality, NoiseMode::Value)
}

/// Fold `n` into `[-2^30, 2^30]` so flooring it always fits an `i32`.
///
/// Inputs already inside the range pass through untouched.
#[inline]
pub fn make_int32_range(n: f64) -> f64 {
    if n >= INT32_HALF_RANGE {
        (2.0 * (n % INT32_HALF_RANGE)) - INT32_HALF_RANGE
    } else if n <= -INT32_HALF_RANGE {
        (2.0 * (n % INT32_HALF_RANGE)) + INT32_HALF_RANGE
    } else {
        n
    }
}
