// core of the coherent noise library: the lattice noise kernel and the
// module graph that composes noise generators, modifiers and transformers
pub mod cache;
pub mod combiner;
pub mod config;
pub mod error;
pub mod fractal;
pub mod generator;
pub mod graph;
pub mod interp;
pub mod modifier;
pub mod noisegen;
pub mod selector;
pub mod transformer;
pub mod vectors;

use std::any::Any;

pub use cache::Cache;
pub use combiner::Power;
pub use config::{FractalParams, SelectParams, TurbulenceParams};
pub use error::{NoiseError, NoiseResult};
pub use fractal::{Billow, Perlin, RidgedMulti};
pub use generator::{Const, Cylinders, Spheres};
pub use graph::{Evaluator, NodeId, NoiseGraph, Sources};
pub use modifier::{Exponent, ScaleBias, Terrace};
pub use noisegen::{NoiseMode, NoiseQuality};
pub use selector::{Blend, Select};
pub use transformer::{Displace, RotatePoint, ScalePoint, TranslatePoint, Turbulence};

// A node in a noise graph.
// Generators ignore `sources`; every other module pulls its inputs from it.
// `get_value` assumes every slot is connected (see `NoiseGraph::validate`).
// Modules are `Send + Sync` so a built graph can be moved to, or sampled
// from, other threads.
pub trait NoiseModule: AsAny + Send + Sync {
    /// Number of source slots this kind of module has.
    fn source_count(&self) -> usize;

    /// Output value at (x, y, z).
    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64;

    /// Parameter checks that can only be made on the module as a whole,
    /// run by graph validation before evaluation.
    fn validate(&self) -> NoiseResult<()> {
        Ok(())
    }

    /// Called after one of this module's source slots is rewired.
    fn source_changed(&mut self) {}
}

// Lets the graph hand back a module as its concrete type
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
