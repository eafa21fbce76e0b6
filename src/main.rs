//WLD inspector: parses a Serious Engine 1 world file and prints what is
//inside; set RUST_LOG=debug (or info) to watch the reader narrate

use anyhow::{anyhow, Result};
use log::*;

use rust_se1::wld::World;
use rust_se1::wld_mesh::{MeshExtractor, WorldStats};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: rust_se1 <world.wld>"))?;

    info!("loading {}", path);
    let world = World::read_from_file(&path)
        .map_err(|e| anyhow!("failed to parse WLD file {}: {}", path, e))?;

    println!("world:       {}", display_text(&world.name));
    println!("description: {}", display_text(&world.description));
    println!("spawn flags: 0x{:08X}", world.spawn_flags);
    println!("background:  0x{:08X}", world.background_color);
    match (world.engine_build, &world.engine_version) {
        (Some(build), Some(version)) => {
            println!("engine:      build {} ({})", build, display_text(version))
        }
        (Some(build), None) => println!("engine:      build {}", build),
        _ => println!("engine:      unknown"),
    }

    let stats = WorldStats::from_world(&world);
    println!();
    println!("brushes:     {}", stats.brush_count);
    println!("mips:        {}", stats.mip_count);
    println!("sectors:     {}", stats.sector_count);
    println!("polygons:    {} ({} empty)", stats.polygon_count, stats.empty_polygon_count);
    println!("vertices:    {}", stats.vertex_count);
    println!("triangles:   {}", stats.triangle_count);

    let meshes = MeshExtractor::new(&world).extract_all();
    for mesh in &meshes {
        debug!(
            "brush {}: {} vertices, {} indices, bounds {:?}..{:?}",
            mesh.brush_id,
            mesh.vertices.len(),
            mesh.indices.len(),
            mesh.min_bounds,
            mesh.max_bounds
        );
    }

    Ok(())
}

/// Strings come out of the file with their trailing NUL intact; keep the
/// terminal output clean.
fn display_text(text: &str) -> &str {
    text.trim_end_matches('\0')
}
