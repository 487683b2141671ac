use coherent_noise::{
    Billow, Cylinders, NodeId, NoiseGraph, NoiseQuality, Perlin, RidgedMulti, Spheres,
    Turbulence,
};
use image::{GrayImage, Luma};
use std::path::Path;

// Sample the z = 0 plane over [0, extent)² and write it as a grayscale
// image stretched to the observed value range
fn save_plane(graph: &NoiseGraph, root: NodeId, size: u32, extent: f64, filename: &str) {
    let eval = graph.evaluator(root).unwrap();
    let step = extent / f64::from(size);

    let mut data = Vec::with_capacity((size * size) as usize);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for y in 0..size {
        for x in 0..size {
            let v = eval.get_value(f64::from(x) * step, f64::from(y) * step, 0.0);
            data.push(v);
            min = min.min(v);
            max = max.max(v);
        }
    }

    let mut img = GrayImage::new(size, size);
    for (i, v) in data.into_iter().enumerate() {
        let norm = if (max - min).abs() < f64::EPSILON {
            0.5
        } else {
            (v - min) / (max - min)
        };
        let gray = (norm * 255.0).round() as u8;
        img.put_pixel(i as u32 % size, i as u32 / size, Luma([gray]));
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {} (range {:.3}..{:.3})", filename, min, max);
}

fn main() {
    let size = 256;
    let mut graph = NoiseGraph::new();

    let mut perlin = Perlin::new();
    perlin.set_seed(42);
    let perlin = graph.add(perlin);
    save_plane(&graph, perlin, size, 4.0, "perlin.png");

    let mut fast = Perlin::new();
    fast.set_seed(42);
    fast.set_quality(NoiseQuality::Fast);
    let fast = graph.add(fast);
    save_plane(&graph, fast, size, 4.0, "perlin_fast.png");

    let mut billow = Billow::new();
    billow.set_seed(42);
    let billow = graph.add(billow);
    save_plane(&graph, billow, size, 4.0, "billow.png");

    let mut ridged = RidgedMulti::new();
    ridged.set_seed(42);
    let ridged = graph.add(ridged);
    save_plane(&graph, ridged, size, 4.0, "ridged.png");

    // Analytic patterns, the second one warped by turbulence
    let spheres = graph.add(Spheres::new());
    save_plane(&graph, spheres, size, 8.0, "spheres.png");

    let cylinders = graph.add(Cylinders::new());
    let mut turbulence = Turbulence::new();
    turbulence.set_frequency(2.0);
    turbulence.set_power(0.25);
    let warped = graph.add(turbulence);
    graph.set_source(warped, 0, cylinders).unwrap();
    save_plane(&graph, warped, size, 8.0, "wood_rings.png");
}
