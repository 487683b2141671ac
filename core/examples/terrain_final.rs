use coherent_noise::{
    Billow, Cache, NodeId, NoiseGraph, Perlin, RidgedMulti, ScaleBias, Select, Terrace,
    Turbulence,
};
use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use std::path::Path;

type HeightMap = Vec<Vec<f32>>;

// Compute simple hillshade for a height-map
// `z_scale` adjusts vertical exaggeration
fn hillshade(map: &HeightMap, z_scale: f32) -> HeightMap {
    let h = map.len();
    let w = map[0].len();
    let mut shade = vec![vec![0.0; w]; h];
    let azimuth = std::f32::consts::PI / 4.0; // 45°
    let altitude = std::f32::consts::PI / 4.0; // 45°
    let (sin_alt, cos_alt) = altitude.sin_cos();
    let light = (azimuth.cos() * cos_alt, azimuth.sin() * cos_alt, sin_alt);

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let dzdx = ((map[y][x + 1] - map[y][x - 1]) / 2.0) * z_scale;
            let dzdy = ((map[y + 1][x] - map[y - 1][x]) / 2.0) * z_scale;
            let len = (dzdx * dzdx + dzdy * dzdy + 1.0).sqrt();
            // Lambertian dot with the surface normal (-dzdx, -dzdy, 1)
            let val = (-dzdx * light.0 - dzdy * light.1 + light.2) / len;
            shade[y][x] = val.max(0.0);
        }
    }
    shade
}

// Rugged mountains over gently rolling plains, picked by a low-frequency
// mask, with terraced slopes and a turbulent final warp
fn build_terrain(graph: &mut NoiseGraph, seed: i32) -> NodeId {
    let mut ridged = RidgedMulti::new();
    ridged.set_seed(seed);
    ridged.set_frequency(1.5);
    let mountains = graph.add(ridged);

    let mut billow = Billow::new();
    billow.set_seed(seed.wrapping_add(1));
    billow.set_frequency(2.0);
    let billow = graph.add(billow);
    let plains = graph.add(ScaleBias::with(0.125, -0.75));
    graph.set_source(plains, 0, billow).unwrap();

    let mut mask = Perlin::new();
    mask.set_seed(seed.wrapping_add(2));
    mask.set_frequency(0.5);
    mask.set_persistence(0.25);
    let mask = graph.add(mask);
    let cached_mask = graph.add(Cache::new());
    graph.set_source(cached_mask, 0, mask).unwrap();

    let mut select = Select::new();
    select.set_bounds(0.0, 1000.0).unwrap();
    select.set_edge_falloff(0.125).unwrap();
    let select = graph.add(select);
    graph
        .set_sources(select, &[plains, mountains, cached_mask])
        .unwrap();

    let mut terrace = Terrace::new();
    terrace.make_terrace_points(8).unwrap();
    let terrace = graph.add(terrace);
    graph.set_source(terrace, 0, select).unwrap();

    let mut turbulence = Turbulence::new();
    turbulence.set_seed(seed.wrapping_add(3));
    turbulence.set_frequency(4.0);
    turbulence.set_power(0.125);
    let root = graph.add(turbulence);
    graph.set_source(root, 0, terrace).unwrap();
    root
}

fn main() {
    let size = 513; // 2^9 + 1
    let extent = 4.0;
    let mut graph = NoiseGraph::new();
    let root = build_terrain(&mut graph, 2025);
    let eval = graph.evaluator(root).unwrap();

    let step = extent / (size - 1) as f64;
    let terrain: HeightMap = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| eval.get_value(x as f64 * step, 0.0, y as f64 * step) as f32)
                .collect()
        })
        .collect();

    // Compute hillshade
    let shade = hillshade(&terrain, 40.0);

    // Create a color gradient - deep water to beach to grass to rock to snow
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)), // deep blue
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)), // sand
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)), // green
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)), // rock
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)), // snow
    ]);

    // Terrace output stays in [-1, 1]
    let mut img = RgbImage::new(size as u32, size as u32);
    for y in 0..size {
        for x in 0..size {
            let norm = ((terrain[y][x] + 1.0) / 2.0).clamp(0.0, 1.0);
            let col: LinSrgb = gradient.get(norm);
            let rgb = col.into_format::<u8>();
            let light = (shade[y][x] * 0.5 + 0.5).clamp(0.0, 1.0);
            let pixel = Rgb([
                (rgb.red as f32 * light) as u8,
                (rgb.green as f32 * light) as u8,
                (rgb.blue as f32 * light) as u8,
            ]);
            img.put_pixel(x as u32, y as u32, pixel);
        }
    }

    let path = Path::new("terrain_final.png");
    img.save(path).unwrap();
    println!("Saved final terrain image to {:?}", path);
}
