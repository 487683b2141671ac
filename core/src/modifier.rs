// Modules that reshape the value of a single source module
use crate::config::{DEFAULT_BIAS, DEFAULT_EXPONENT, DEFAULT_SCALE};
use crate::error::{NoiseError, NoiseResult};
use crate::graph::Sources;
use crate::interp::linear_interp;
use crate::NoiseModule;

/// `source * scale + bias`.
#[derive(Debug, Clone)]
pub struct ScaleBias {
    scale: f64,
    bias: f64,
}

impl Default for ScaleBias {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            bias: DEFAULT_BIAS,
        }
    }
}

impl ScaleBias {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(scale: f64, bias: f64) -> Self {
        Self { scale, bias }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }
}

impl NoiseModule for ScaleBias {
    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        sources.get_value(0, x, y, z) * self.scale + self.bias
    }
}

/// Maps the source value onto an exponential curve.
///
/// The value is moved from [-1, 1] to [0, 1], raised to the exponent, and
/// moved back, so -1 and 1 are fixed points.
#[derive(Debug, Clone)]
pub struct Exponent {
    exponent: f64,
}

impl Default for Exponent {
    fn default() -> Self {
        Self::new(DEFAULT_EXPONENT)
    }
}

impl Exponent {
    pub fn new(exponent: f64) -> Self {
        Self { exponent }
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn set_exponent(&mut self, exponent: f64) {
        self.exponent = exponent;
    }
}

impl NoiseModule for Exponent {
    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        let value = sources.get_value(0, x, y, z);
        // abs keeps fractional exponents defined for values just below -1
        ((value + 1.0) / 2.0).abs().powf(self.exponent) * 2.0 - 1.0
    }
}

/// Maps the source value onto a terrace-forming curve.
///
/// Between two neighbouring terrace points the curve starts flat and rises
/// quadratically; inverting flips each segment so it rises steeply and
/// flattens out. Values outside the outermost points are clamped to them.
/// At least two points are required before the module is evaluated.
#[derive(Debug, Clone, Default)]
pub struct Terrace {
    points: Vec<f64>,
    inverted: bool,
}

impl Terrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a terrace point, keeping the points sorted.
    /// Fails if the point already exists or is NaN.
    pub fn add_terrace_point(&mut self, value: f64) -> NoiseResult<()> {
        if value.is_nan() {
            return Err(NoiseError::invalid("terrace point must not be NaN"));
        }
        let pos = match self.points.binary_search_by(|p| p.total_cmp(&value)) {
            Ok(_) => {
                return Err(NoiseError::invalid(format!(
                    "terrace point {value} already exists"
                )));
            }
            Err(pos) => pos,
        };
        // -0.0 and 0.0 order apart but compare equal
        if self.points.get(pos) == Some(&value) || (pos > 0 && self.points[pos - 1] == value) {
            return Err(NoiseError::invalid(format!(
                "terrace point {value} already exists"
            )));
        }
        self.points
            .try_reserve(1)
            .map_err(|_| NoiseError::OutOfMemory)?;
        self.points.insert(pos, value);
        Ok(())
    }

    pub fn clear_all_terrace_points(&mut self) {
        self.points.clear();
    }

    /// Replace the points with `count` points evenly spaced over [-1, 1].
    pub fn make_terrace_points(&mut self, count: usize) -> NoiseResult<()> {
        if count < 2 {
            return Err(NoiseError::invalid(format!(
                "at least 2 terrace points are needed, got {count}"
            )));
        }
        self.clear_all_terrace_points();
        let last = (count - 1) as f64;
        for i in 0..count {
            // Computed per point so both ends land exactly on -1 and 1
            self.add_terrace_point(-1.0 + 2.0 * i as f64 / last)?;
        }
        log::debug!("terrace rebuilt with {count} evenly spaced points");
        Ok(())
    }

    /// Terrace points in ascending order.
    pub fn terrace_points(&self) -> &[f64] {
        &self.points
    }

    pub fn invert_terraces(&mut self, invert: bool) {
        self.inverted = invert;
    }

    pub fn is_terraces_inverted(&self) -> bool {
        self.inverted
    }
}

impl NoiseModule for Terrace {
    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        debug_assert!(self.points.len() >= 2, "terrace needs at least 2 points");

        let value = sources.get_value(0, x, y, z);
        let last = self.points.len() - 1;

        // First point strictly above the value
        let pos = self.points.partition_point(|&p| p <= value);
        let index0 = pos.saturating_sub(1).min(last);
        let index1 = pos.min(last);

        // Outside the point range; clamp to the nearest end point
        if index0 == index1 {
            return self.points[index1];
        }

        let mut value0 = self.points[index0];
        let mut value1 = self.points[index1];
        let mut alpha = (value - value0) / (value1 - value0);
        if self.inverted {
            alpha = 1.0 - alpha;
            std::mem::swap(&mut value0, &mut value1);
        }

        // Squaring gives the flat-then-rising terrace shape
        alpha *= alpha;

        linear_interp(value0, value1, alpha)
    }

    fn validate(&self) -> NoiseResult<()> {
        if self.points.len() < 2 {
            return Err(NoiseError::invalid(format!(
                "terrace has {} point(s), at least 2 are needed",
                self.points.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Const, NodeId, NoiseGraph, Perlin};
    use approx::assert_abs_diff_eq;

    fn wired<M: NoiseModule>(module: M, input: f64) -> (NoiseGraph, NodeId) {
        let mut graph = NoiseGraph::new();
        let c = graph.add(Const::new(input));
        let m = graph.add(module);
        graph.set_source(m, 0, c).unwrap();
        (graph, m)
    }

    fn terrace_over(points: &[f64], input: f64, inverted: bool) -> f64 {
        let mut terrace = Terrace::new();
        for &p in points {
            terrace.add_terrace_point(p).unwrap();
        }
        terrace.invert_terraces(inverted);
        let (graph, t) = wired(terrace, input);
        graph.get_value(t, 0.0, 0.0, 0.0)
    }

    #[test]
    fn scale_bias_matches_formula() {
        let mut graph = NoiseGraph::new();
        let perlin = graph.add(Perlin::new());
        let sb = graph.add(ScaleBias::with(0.5, 0.25));
        graph.set_source(sb, 0, perlin).unwrap();
        for &(x, y, z) in &[(0.1, 0.2, 0.3), (5.5, -1.25, 9.0)] {
            let raw = graph.get_value(perlin, x, y, z);
            assert_eq!(graph.get_value(sb, x, y, z), raw * 0.5 + 0.25);
        }
        let defaults = ScaleBias::new();
        assert_eq!((defaults.scale(), defaults.bias()), (1.0, 0.0));
    }

    #[test]
    fn exponent_fixes_range_ends() {
        for input in [-1.0, 1.0] {
            let (graph, e) = wired(Exponent::new(3.0), input);
            assert_eq!(graph.get_value(e, 0.0, 0.0, 0.0), input);
        }
        let (graph, e) = wired(Exponent::new(2.0), 0.0);
        // (0.5)^2 * 2 - 1
        assert_abs_diff_eq!(graph.get_value(e, 0.0, 0.0, 0.0), -0.5, epsilon = 1e-12);
    }

    #[test]
    fn exponent_of_one_is_identity() {
        let (graph, e) = wired(Exponent::default(), 0.3);
        assert_abs_diff_eq!(graph.get_value(e, 0.0, 0.0, 0.0), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn terrace_points_stay_sorted_and_unique() {
        let mut terrace = Terrace::new();
        for p in [0.5, -1.0, 0.0, 1.0, -0.25] {
            terrace.add_terrace_point(p).unwrap();
        }
        assert_eq!(terrace.terrace_points(), &[-1.0, -0.25, 0.0, 0.5, 1.0]);
        assert!(matches!(
            terrace.add_terrace_point(0.5),
            Err(NoiseError::InvalidParameter(_))
        ));
        assert!(terrace.add_terrace_point(-0.0).is_err());
        assert!(terrace.add_terrace_point(f64::NAN).is_err());
        assert_eq!(terrace.terrace_points().len(), 5);
    }

    #[test]
    fn duplicate_points_are_rejected() {
        let mut terrace = Terrace::new();
        terrace.add_terrace_point(0.0).unwrap();
        assert!(terrace.add_terrace_point(0.0).is_err());
    }

    #[test]
    fn make_terrace_points_spacing() {
        let mut terrace = Terrace::new();
        terrace.make_terrace_points(3).unwrap();
        assert_eq!(terrace.terrace_points(), &[-1.0, 0.0, 1.0]);
        terrace.make_terrace_points(5).unwrap();
        assert_eq!(terrace.terrace_points(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert!(terrace.make_terrace_points(1).is_err());
        assert!(terrace.make_terrace_points(0).is_err());
    }

    #[test]
    fn make_terrace_points_hits_both_ends() {
        let mut terrace = Terrace::new();
        for count in [4, 6, 7, 11, 100] {
            terrace.make_terrace_points(count).unwrap();
            let points = terrace.terrace_points();
            assert_eq!(points.len(), count);
            assert_eq!(points[0], -1.0);
            assert_eq!(points[count - 1], 1.0);
            let step = 2.0 / (count - 1) as f64;
            for pair in points.windows(2) {
                assert_abs_diff_eq!(pair[1] - pair[0], step, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn terrace_clamps_outside_the_points() {
        assert_eq!(terrace_over(&[-1.0, 0.0, 1.0], 5.0, false), 1.0);
        assert_eq!(terrace_over(&[-1.0, 0.0, 1.0], -5.0, false), -1.0);
        assert_eq!(terrace_over(&[-1.0, 0.0, 1.0], 1.0, false), 1.0);
    }

    #[test]
    fn terrace_curve_inside_a_segment() {
        // alpha = 0.5 -> squared 0.25
        assert_abs_diff_eq!(terrace_over(&[0.0, 1.0], 0.5, false), 0.25, epsilon = 1e-12);
        // inverted: alpha = 0.5, ends swapped -> 1 - 0.25
        assert_abs_diff_eq!(terrace_over(&[0.0, 1.0], 0.5, true), 0.75, epsilon = 1e-12);
        // exactly on an interior point
        assert_eq!(terrace_over(&[-1.0, 0.0, 1.0], 0.0, false), 0.0);
    }

    #[test]
    fn terrace_validation_needs_two_points() {
        let mut terrace = Terrace::new();
        assert!(terrace.validate().is_err());
        terrace.add_terrace_point(0.0).unwrap();
        assert!(terrace.validate().is_err());
        terrace.add_terrace_point(1.0).unwrap();
        assert!(terrace.validate().is_ok());
        terrace.clear_all_terrace_points();
        assert!(terrace.terrace_points().is_empty());
    }
}
