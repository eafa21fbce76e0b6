//mesh conversion for Serious Engine 1 WLD worlds
//
//turns parsed brush geometry into flat vertex and index buffers a
//renderer can upload directly; polygons carrying strip elements are
//expanded, the rest are fan-triangulated

use crate::wld::{Polygon, Sector, Vector3, World};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// A vertex ready for rendering
#[derive(Clone, Copy, Debug)]
pub struct WldVertex {
    /// Position in 3D space
    pub pos: [f32; 3],
    /// RGBA color resolved from the polygon's ARGB value
    pub color: [f32; 4],
    /// Normal vector
    pub normal: [f32; 3],
}

impl WldVertex {
    pub fn new(pos: Vector3, color: u32, normal: Vector3) -> Self {
        // ARGB, high byte alpha
        let a = ((color >> 24) & 0xFF) as f32 / 255.0;
        let r = ((color >> 16) & 0xFF) as f32 / 255.0;
        let g = ((color >> 8) & 0xFF) as f32 / 255.0;
        let b = (color & 0xFF) as f32 / 255.0;
        Self {
            pos: [pos.x as f32, pos.y as f32, pos.z as f32],
            color: [r, g, b, a],
            normal: [normal.x as f32, normal.y as f32, normal.z as f32],
        }
    }
}

impl PartialEq for WldVertex {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.color == other.color && self.normal == other.normal
    }
}

impl Eq for WldVertex {}

impl Hash for WldVertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for v in self.pos.iter().chain(self.color.iter()).chain(self.normal.iter()) {
            v.to_bits().hash(state);
        }
    }
}

/// Mesh data extracted from one brush (its highest-detail mip).
#[derive(Debug, Default)]
pub struct BrushMesh {
    pub brush_id: u32,
    pub min_bounds: [f32; 3],
    pub max_bounds: [f32; 3],
    pub vertices: Vec<WldVertex>,
    pub indices: Vec<u32>,
}

/// Extracts renderable mesh data from a parsed world
pub struct MeshExtractor<'a> {
    world: &'a World,
    /// Scale factor applied to all positions
    pub scale: f32,
    /// Whether to flip the triangle winding order
    pub flip_winding: bool,
}

impl<'a> MeshExtractor<'a> {
    pub fn new(world: &'a World) -> Self {
        Self {
            world,
            scale: 1.0,
            flip_winding: false,
        }
    }

    /// Set the scale factor
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set whether to flip winding order
    pub fn with_flip_winding(mut self, flip: bool) -> Self {
        self.flip_winding = flip;
        self
    }

    /// Extract one mesh per brush. The lowest-index mip is the
    /// highest-detail one, so that is the mip that gets meshed.
    pub fn extract_all(&self) -> Vec<BrushMesh> {
        self.world
            .brushes
            .iter()
            .map(|brush| {
                let mut mesh = BrushMesh {
                    brush_id: brush.id,
                    ..Default::default()
                };
                let mut unique_vertices: HashMap<WldVertex, u32> = HashMap::new();
                if let Some(mip) = brush.mips.first() {
                    for sector in &mip.sectors {
                        self.mesh_sector(sector, &mut mesh, &mut unique_vertices);
                    }
                }
                self.compute_bounds(&mut mesh);
                mesh
            })
            .collect()
    }

    /// Extract the mesh of a single brush by archive id
    pub fn extract_brush(&self, brush_id: u32) -> Option<BrushMesh> {
        self.extract_all()
            .into_iter()
            .find(|mesh| mesh.brush_id == brush_id)
    }

    fn mesh_sector(
        &self,
        sector: &Sector,
        mesh: &mut BrushMesh,
        unique_vertices: &mut HashMap<WldVertex, u32>,
    ) {
        for polygon in &sector.polygons {
            if polygon.indices.is_empty() {
                self.fan_triangulate(polygon, mesh, unique_vertices);
            } else {
                self.expand_strip(sector, polygon, mesh, unique_vertices);
            }
        }
    }

    /// Fan triangulation from the first vertex, for polygons without
    /// precomputed elements.
    fn fan_triangulate(
        &self,
        polygon: &Polygon,
        mesh: &mut BrushMesh,
        unique_vertices: &mut HashMap<WldVertex, u32>,
    ) {
        if polygon.vertices.len() < 3 {
            return;
        }
        let normal = polygon_normal(&polygon.vertices);
        let v0 = polygon.vertices[0];
        for i in 1..polygon.vertices.len() - 1 {
            self.push_triangle(
                [v0, polygon.vertices[i], polygon.vertices[i + 1]],
                polygon.color,
                normal,
                mesh,
                unique_vertices,
            );
        }
    }

    /// Expand triangle-strip elements over the sector vertex pool.
    fn expand_strip(
        &self,
        sector: &Sector,
        polygon: &Polygon,
        mesh: &mut BrushMesh,
        unique_vertices: &mut HashMap<WldVertex, u32>,
    ) {
        if polygon.indices.len() < 3 {
            return;
        }
        let normal = polygon_normal(&polygon.vertices);
        for i in 0..polygon.indices.len() - 2 {
            let (a, b, c) = (
                polygon.indices[i] as usize,
                polygon.indices[i + 1] as usize,
                polygon.indices[i + 2] as usize,
            );
            // strip restarts show up as repeated elements
            if a == b || b == c || a == c {
                continue;
            }
            if a >= sector.vertices.len()
                || b >= sector.vertices.len()
                || c >= sector.vertices.len()
            {
                continue;
            }
            let mut corners = [
                sector.vertices[a],
                sector.vertices[b],
                sector.vertices[c],
            ];
            // every second strip triangle reverses
            if i % 2 == 1 {
                corners.swap(1, 2);
            }
            self.push_triangle(corners, polygon.color, normal, mesh, unique_vertices);
        }
    }

    fn push_triangle(
        &self,
        corners: [Vector3; 3],
        color: u32,
        normal: Vector3,
        mesh: &mut BrushMesh,
        unique_vertices: &mut HashMap<WldVertex, u32>,
    ) {
        let [a, b, c] = corners;
        let ordered = if self.flip_winding { [a, c, b] } else { [a, b, c] };
        for corner in ordered {
            let scaled = Vector3::new(
                corner.x * self.scale as f64,
                corner.y * self.scale as f64,
                corner.z * self.scale as f64,
            );
            let vertex = WldVertex::new(scaled, color, normal);
            if let Some(&existing) = unique_vertices.get(&vertex) {
                mesh.indices.push(existing);
            } else {
                let index = mesh.vertices.len() as u32;
                unique_vertices.insert(vertex, index);
                mesh.vertices.push(vertex);
                mesh.indices.push(index);
            }
        }
    }

    fn compute_bounds(&self, mesh: &mut BrushMesh) {
        if mesh.vertices.is_empty() {
            return;
        }
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for vertex in &mesh.vertices {
            for axis in 0..3 {
                min[axis] = min[axis].min(vertex.pos[axis]);
                max[axis] = max[axis].max(vertex.pos[axis]);
            }
        }
        mesh.min_bounds = min;
        mesh.max_bounds = max;
    }
}

/// Normal from the first three corners; degenerate polygons fall back to
/// +Z like everything else in the pipeline tolerates.
fn polygon_normal(vertices: &[Vector3]) -> Vector3 {
    if vertices.len() < 3 {
        return Vector3::new(0.0, 0.0, 1.0);
    }
    let edge1 = vertices[1].sub(&vertices[0]);
    let edge2 = vertices[2].sub(&vertices[0]);
    let normal = edge1.cross(&edge2).normalized();
    if normal == Vector3::default() {
        Vector3::new(0.0, 0.0, 1.0)
    } else {
        normal
    }
}

//
// Statistics
//

/// Aggregates over a parsed world, for an information sidebar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorldStats {
    pub brush_count: usize,
    pub mip_count: usize,
    pub sector_count: usize,
    pub polygon_count: usize,
    /// Polygons with neither resolved vertices nor elements (pre-v4
    /// records come out of the file this way)
    pub empty_polygon_count: usize,
    pub vertex_count: usize,
    pub triangle_count: usize,
}

impl WorldStats {
    pub fn from_world(world: &World) -> Self {
        let mut stats = Self {
            brush_count: world.brushes.len(),
            ..Self::default()
        };

        for brush in &world.brushes {
            stats.mip_count += brush.mips.len();
            for mip in &brush.mips {
                stats.sector_count += mip.sectors.len();
                for sector in &mip.sectors {
                    stats.vertex_count += sector.vertices.len();
                    stats.polygon_count += sector.polygons.len();
                    for polygon in &sector.polygons {
                        stats.triangle_count += triangle_estimate(polygon);
                        if polygon.vertices.is_empty() && polygon.indices.is_empty() {
                            stats.empty_polygon_count += 1;
                        }
                    }
                }
            }
        }
        stats
    }
}

fn triangle_estimate(polygon: &Polygon) -> usize {
    if polygon.indices.len() >= 3 {
        polygon.indices.len() - 2
    } else if polygon.vertices.len() >= 3 {
        polygon.vertices.len() - 2
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wld::{Brush, BrushMip};

    fn unit_square() -> Vec<Vector3> {
        vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ]
    }

    fn world_with_polygon(polygon: Polygon) -> World {
        World {
            brushes: vec![Brush {
                id: 0,
                mips: vec![BrushMip {
                    max_distance: 1000.0,
                    sectors: vec![Sector {
                        name: "s".to_string(),
                        vertices: unit_square(),
                        polygons: vec![polygon],
                        ..Default::default()
                    }],
                }],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_fan_triangulation() {
        // a quad without elements becomes two fan triangles
        let world = world_with_polygon(Polygon {
            vertices: unit_square(),
            indices: Vec::new(),
            color: 0xFF0000FF,
            flags: 0,
        });

        let meshes = MeshExtractor::new(&world).extract_all();
        assert_eq!(meshes.len(), 1);
        let mesh = &meshes[0];
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.vertices.len(), 4); // shared corners dedup'd
        assert_eq!(mesh.min_bounds, [0.0, 0.0, 0.0]);
        assert_eq!(mesh.max_bounds, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_strip_expansion() {
        let world = world_with_polygon(Polygon {
            vertices: unit_square(),
            indices: vec![0, 1, 3, 2],
            color: 0xFFFFFFFF,
            flags: 0,
        });

        let meshes = MeshExtractor::new(&world).extract_all();
        let mesh = &meshes[0];
        // two strip triangles, four unique corners
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.vertices.len(), 4);
    }

    #[test]
    fn test_strip_restart_skipped() {
        let world = world_with_polygon(Polygon {
            vertices: unit_square(),
            indices: vec![0, 1, 1, 2],
            color: 0xFFFFFFFF,
            flags: 0,
        });

        let meshes = MeshExtractor::new(&world).extract_all();
        // both windows contain a repeated element
        assert!(meshes[0].indices.is_empty());
    }

    #[test]
    fn test_scale_and_winding() {
        let world = world_with_polygon(Polygon {
            vertices: unit_square()[..3].to_vec(),
            indices: Vec::new(),
            color: 0xFFFFFFFF,
            flags: 0,
        });

        let plain = MeshExtractor::new(&world).extract_all();
        let flipped = MeshExtractor::new(&world)
            .with_scale(2.0)
            .with_flip_winding(true)
            .extract_all();

        assert_eq!(flipped[0].max_bounds, [2.0, 2.0, 0.0]);
        // winding flip swaps the second and third corners
        assert_eq!(plain[0].vertices[1].pos, [1.0, 0.0, 0.0]);
        assert_eq!(flipped[0].vertices[2].pos, [2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_extract_single_brush() {
        let world = world_with_polygon(Polygon {
            vertices: unit_square(),
            indices: Vec::new(),
            color: 0xFFFFFFFF,
            flags: 0,
        });

        let extractor = MeshExtractor::new(&world);
        let mesh = extractor.extract_brush(0).unwrap();
        assert_eq!(mesh.brush_id, 0);
        assert_eq!(mesh.indices.len(), 6);
        assert!(extractor.extract_brush(1).is_none());
    }

    #[test]
    fn test_world_stats() {
        let world = world_with_polygon(Polygon {
            vertices: unit_square(),
            indices: vec![0, 1, 3, 2],
            color: 0,
            flags: 0,
        });

        let stats = WorldStats::from_world(&world);
        assert_eq!(stats.brush_count, 1);
        assert_eq!(stats.mip_count, 1);
        assert_eq!(stats.sector_count, 1);
        assert_eq!(stats.polygon_count, 1);
        assert_eq!(stats.vertex_count, 4);
        assert_eq!(stats.triangle_count, 2);
        assert_eq!(stats.empty_polygon_count, 0);
    }

    #[test]
    fn test_empty_polygon_counted() {
        let world = world_with_polygon(Polygon::default());
        let stats = WorldStats::from_world(&world);
        assert_eq!(stats.empty_polygon_count, 1);
        assert_eq!(stats.triangle_count, 0);

        let meshes = MeshExtractor::new(&world).extract_all();
        assert!(meshes[0].vertices.is_empty());
    }
}
