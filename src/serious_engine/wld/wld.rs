//WLD file structures and parsing for Serious Engine 1 levels
//
//this module handles reading .WLD world files produced by the Serious
//Engine 1 editor (Serious Sam TFE/TSE era); geometry comes out as a tree
//of brushes, mips, sectors and polygons ready for meshing
//
//the container is FourCC-tagged, little-endian, loosely framed: optional
//chunks may be absent, the texture dictionary lives at a forward file
//offset announced by DPOS, and unknown regions are recovered from with a
//byte-wise scan for the WSTA state marker

use crate::cursor::{ByteCursor, Result, WldError};
use crate::sink::{LogLevel, LogSink, NullSink, StdLogSink};
use std::path::Path;

/// Mip switch distance used when a brush mip carries no BRMP header.
pub const DEFAULT_MIP_DISTANCE: f32 = 1_000_000.0;

// Size fields are only honored inside these envelopes; anything outside
// marks the chunk malformed and parsing realigns on the WSTA scan.
const MAX_SIZED_SKIP: i32 = 10_000_000;
const MAX_PORTAL_LINK_SKIP: i32 = 100_000_000;
const MAX_BSP_NODE_COUNT: i32 = 1_000_000;

/// Every chunk identifier the reader recognizes. BSC carries a literal
/// trailing space in the file.
pub mod fourcc {
    use crate::cursor::ChunkId;

    pub const BUIV: ChunkId = ChunkId(*b"BUIV");
    pub const VERC: ChunkId = ChunkId(*b"VERC");
    pub const WRLD: ChunkId = ChunkId(*b"WRLD");
    pub const WLIF: ChunkId = ChunkId(*b"WLIF");
    pub const DTRS: ChunkId = ChunkId(*b"DTRS");
    pub const DIMP: ChunkId = ChunkId(*b"DIMP");
    pub const DPOS: ChunkId = ChunkId(*b"DPOS");
    pub const DICT: ChunkId = ChunkId(*b"DICT");
    pub const DEND: ChunkId = ChunkId(*b"DEND");
    pub const BRAR: ChunkId = ChunkId(*b"BRAR");
    pub const BR3D: ChunkId = ChunkId(*b"BR3D");
    pub const BRMP: ChunkId = ChunkId(*b"BRMP");
    pub const BREN: ChunkId = ChunkId(*b"BREN");
    pub const BSC: ChunkId = ChunkId(*b"BSC ");
    pub const VTXS: ChunkId = ChunkId(*b"VTXs");
    pub const PLNS: ChunkId = ChunkId(*b"PLNs");
    pub const EDGS: ChunkId = ChunkId(*b"EDGs");
    pub const BPOS: ChunkId = ChunkId(*b"BPOs");
    pub const BSP0: ChunkId = ChunkId(*b"BSP0");
    pub const SHMP: ChunkId = ChunkId(*b"SHMP");
    pub const PSLS: ChunkId = ChunkId(*b"PSLS");
    pub const PSLE: ChunkId = ChunkId(*b"PSLE");
    pub const EOAR: ChunkId = ChunkId(*b"EOAR");
    pub const TRAR: ChunkId = ChunkId(*b"TRAR");
    pub const TRRN: ChunkId = ChunkId(*b"TRRN");
    pub const TREN: ChunkId = ChunkId(*b"TREN");
    pub const EOTA: ChunkId = ChunkId(*b"EOTA");
    pub const WSTA: ChunkId = ChunkId(*b"WSTA");
    pub const WEND: ChunkId = ChunkId(*b"WEND");
}

//
// Basic Types
//

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn sub(&self, other: &Vector3) -> Vector3 {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    pub fn normalized(&self) -> Vector3 {
        let len = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        if len > 0.0 {
            Vector3 {
                x: self.x / len,
                y: self.y / len,
                z: self.z / len,
            }
        } else {
            *self
        }
    }
}

//
// World Model
//

/// A polygon inside a sector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    /// Triangle vertices, resolved by copy from the sector vertex pool.
    pub vertices: Vec<Vector3>,
    /// Triangle-strip elements into the sector vertex pool. Empty means
    /// the polygon is fan-triangulated at render time.
    pub indices: Vec<u32>,
    /// ARGB polygon color
    pub color: u32,
    pub flags: u32,
}

/// A convex region of space: a shared vertex pool plus the polygons
/// indexing into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sector {
    pub name: String,
    pub color: u32,
    pub ambient: u32,
    pub flags: u32,
    /// Sector-local vertex positions (the format stores them as f64)
    pub vertices: Vec<Vector3>,
    pub polygons: Vec<Polygon>,
}

/// One level-of-detail representation of a brush.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushMip {
    /// Switch threshold; defaults to 1,000,000.0 when no BRMP header is
    /// present. The lowest-index mip is the highest-detail one.
    pub max_distance: f32,
    pub sectors: Vec<Sector>,
}

impl Default for BrushMip {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MIP_DISTANCE,
            sectors: Vec::new(),
        }
    }
}

/// A solid-geometry object composed of one or more LOD mips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Brush {
    /// Equal to the brush's index within the archive
    pub id: u32,
    pub mips: Vec<BrushMip>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placement {
    pub position: Vector3,
    pub rotation: Vector3,
}

/// An entity placed in the world. The entity archive is not decoded yet,
/// so worlds currently come out with no entities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    pub id: u32,
    pub class_name: String,
    pub placement: Placement,
}

/// A parsed world. Fields default to empty/zero when their source chunk
/// is absent from the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    pub name: String,
    pub description: String,
    /// ARGB; the high byte is the alpha channel
    pub background_color: u32,
    pub spawn_flags: u32,
    /// Engine build number from the BUIV header
    pub engine_build: Option<u32>,
    /// Version text from the VERC sub-chunk; only ever set together with
    /// `engine_build`
    pub engine_version: Option<String>,
    pub entities: Vec<Entity>,
    pub brushes: Vec<Brush>,
}

impl World {
    /// Parse a complete in-memory WLD file, narrating through `sink`.
    ///
    /// A missing WRLD root or WSTA state marker aborts the parse; any
    /// other damage is logged as a warning and the affected section is
    /// left at its defaults.
    pub fn read(data: &[u8], sink: &mut dyn LogSink) -> Result<World> {
        let mut reader = WldReader {
            cur: ByteCursor::new(data),
            sink,
        };
        match reader.read_world() {
            Ok(world) => Ok(world),
            Err(e) => {
                reader.error(&e.to_string());
                Err(e)
            }
        }
    }

    /// Parse with no console attached.
    pub fn read_silent(data: &[u8]) -> Result<World> {
        Self::read(data, &mut NullSink)
    }

    /// Read a world from disk, logging through the `log` facade.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<World> {
        let data = std::fs::read(path)?;
        Self::read(&data, &mut StdLogSink)
    }
}

//
// Reading Implementation
//

struct WldReader<'a, 's> {
    cur: ByteCursor<'a>,
    sink: &'s mut dyn LogSink,
}

impl WldReader<'_, '_> {
    fn read_world(&mut self) -> Result<World> {
        let mut world = World::default();

        if let Err(e) = self.read_engine_version(&mut world) {
            self.warn(&format!("engine version header unreadable: {}", e));
        }

        // everything hinges on the root chunk; its absence is fatal
        self.cur.expect_chunk_id(fourcc::WRLD)?;
        self.info("world root chunk found");

        self.read_brushes_section(&mut world)?;

        if let Err(e) = self.read_state_section(&mut world) {
            self.warn(&format!("world state section abandoned: {}", e));
        }

        self.read_end_marker();
        self.success(&format!(
            "world parsed: {} brush(es), {} entities",
            world.brushes.len(),
            world.entities.len()
        ));
        Ok(world)
    }

    /// Optional BUIV build header, optionally followed by VERC version
    /// text. Older worlds have neither.
    fn read_engine_version(&mut self, world: &mut World) -> Result<()> {
        if !self.cur.next_is(fourcc::BUIV) {
            return Ok(());
        }
        self.cur.read_chunk_id()?;
        let build = self.cur.read_u32()?;
        world.engine_build = Some(build);

        if self.cur.next_is(fourcc::VERC) {
            self.cur.read_chunk_id()?;
            let length = self.cur.read_i32()?;
            if length > 0 && length < 1000 {
                world.engine_version = Some(self.cur.read_string(length)?);
            }
        }

        match &world.engine_version {
            Some(version) => self.info(&format!("engine build {}, version {}", build, version)),
            None => self.info(&format!("engine build {}", build)),
        }
        Ok(())
    }

    /// The section between WRLD and WSTA: optional world info, the
    /// dictionary import/position pair, the brush archive and the terrain
    /// archive, in whatever subset the editor wrote.
    ///
    /// The DICT table lives at a file offset announced by DPOS, usually
    /// after the data that references it, so it is read through the
    /// forward pointer and sequential parsing resumes right after DPOS.
    /// A byte-wise scan for WSTA realigns afterwards; that scan also
    /// rescues the parse when a damaged sub-chunk strands the cursor.
    fn read_brushes_section(&mut self, world: &mut World) -> Result<()> {
        if self.cur.next_is(fourcc::WLIF) {
            if let Err(e) = self.read_world_info(world) {
                self.warn(&format!("world info unreadable: {}", e));
            }
        }

        let dictionary_end = self.read_dictionary_pair();

        if self.cur.next_is(fourcc::BRAR) {
            if let Err(e) = self.read_brush_archive(world) {
                self.warn(&format!("brush archive abandoned: {}", e));
            }
        }

        if self.cur.next_is(fourcc::TRAR) {
            if let Err(e) = self.skip_terrain_archive() {
                self.warn(&format!("terrain archive abandoned: {}", e));
            }
        }

        if let Some(end) = dictionary_end {
            self.cur.set_position(end);
        }

        match self.cur.find_chunk_in_file(fourcc::WSTA) {
            Some(position) => {
                self.info(&format!("world state marker at 0x{:08X}", position));
                Ok(())
            }
            None => Err(WldError::WstaNotFound),
        }
    }

    /// World state: a second dictionary pair may precede WSTA. Failures
    /// in here leave the defaults in place.
    fn read_state_section(&mut self, world: &mut World) -> Result<()> {
        let dictionary_end = self.read_dictionary_pair();

        self.cur.expect_chunk_id(fourcc::WSTA)?;
        let state_version = self.cur.read_i32()?;
        self.info(&format!("world state version {}", state_version));

        if self.cur.next_is(fourcc::WLIF) {
            self.read_world_info(world)?;
        }

        world.background_color = self.cur.read_u32()?;
        self.info(&format!("background color 0x{:08X}", world.background_color));

        if let Some(end) = dictionary_end {
            self.cur.set_position(end);
        }
        Ok(())
    }

    /// WLIF: world name, spawn flags, description. Out-of-range length
    /// prefixes mean the field is absent; no payload bytes are consumed
    /// for it.
    fn read_world_info(&mut self, world: &mut World) -> Result<()> {
        self.cur.expect_chunk_id(fourcc::WLIF)?;
        if self.cur.next_is(fourcc::DTRS) {
            // empty marker
            self.cur.read_chunk_id()?;
        }

        let name_length = self.cur.read_i32()?;
        if name_length > 0 && name_length < 1000 {
            world.name = self.cur.read_string(name_length)?;
        }

        world.spawn_flags = self.cur.read_u32()?;

        let description_length = self.cur.read_i32()?;
        if description_length > 0 && description_length < 10000 {
            world.description = self.cur.read_string(description_length)?;
        }

        self.info(&format!(
            "world '{}': spawn flags 0x{:08X}",
            world.name.trim_end_matches('\0'),
            world.spawn_flags
        ));
        Ok(())
    }

    /// Handle an optional DIMP sized skip followed by an optional DPOS
    /// forward pointer. Returns the position just past the dictionary's
    /// DEND so the caller can jump there once the section is done.
    fn read_dictionary_pair(&mut self) -> Option<usize> {
        if self.cur.next_is(fourcc::DIMP) {
            let _ = self.cur.read_chunk_id();
            if let Err(e) = self.skip_sized("dictionary import", MAX_SIZED_SKIP) {
                self.warn(&format!("dictionary import not skipped: {}", e));
            }
        }

        if !self.cur.next_is(fourcc::DPOS) {
            return None;
        }
        let _ = self.cur.read_chunk_id();
        let target = match self.cur.read_u32() {
            Ok(target) => target as usize,
            Err(e) => {
                self.warn(&format!("dictionary position unreadable: {}", e));
                return None;
            }
        };

        let resume = self.cur.position();
        let end = match self.read_dictionary(target) {
            Ok(end) => Some(end),
            Err(e) => {
                self.warn(&format!("dictionary at 0x{:08X} unreadable: {}", target, e));
                None
            }
        };
        self.cur.set_position(resume);
        end
    }

    /// Random-access hop to the DICT filename table.
    fn read_dictionary(&mut self, target: usize) -> Result<usize> {
        self.cur.set_position(target);
        self.cur.expect_chunk_id(fourcc::DICT)?;

        let file_count = self.cur.read_i32()?;
        if file_count < 0 {
            return Err(WldError::Malformed(format!(
                "dictionary file count {}",
                file_count
            )));
        }
        self.info(&format!("dictionary: {} file(s)", file_count));

        for index in 0..file_count {
            let length = self.cur.read_i32()?;
            let name = self.cur.read_string(length)?;
            if index < 3 {
                self.info(&format!(
                    "dictionary file {}: {}",
                    index,
                    name.trim_end_matches('\0')
                ));
            }
        }

        self.cur.expect_chunk_id(fourcc::DEND)?;
        Ok(self.cur.position())
    }

    //
    // Brush Archive
    //

    fn read_brush_archive(&mut self, world: &mut World) -> Result<()> {
        self.cur.expect_chunk_id(fourcc::BRAR)?;
        let brush_count = self.cur.read_i32()?;
        self.info(&format!("brush archive: {} brush(es)", brush_count));

        for index in 0..brush_count {
            let brush = self.read_brush(index as u32)?;
            world.brushes.push(brush);
        }
        self.success(&format!("read {} brush(es)", world.brushes.len()));

        if self.cur.next_is(fourcc::PSLS) {
            self.cur.read_chunk_id()?;
            let _version = self.cur.read_u32()?;
            self.skip_sized("portal-sector links", MAX_PORTAL_LINK_SKIP)?;
            self.cur.expect_chunk_id(fourcc::PSLE)?;
        }
        if self.cur.next_is(fourcc::EOAR) {
            self.cur.read_chunk_id()?;
        }
        Ok(())
    }

    fn read_brush(&mut self, id: u32) -> Result<Brush> {
        self.cur.expect_chunk_id(fourcc::BR3D)?;
        let version = self.cur.read_i32()?;
        let mip_count = self.cur.read_i32()?;
        self.info(&format!(
            "brush {}: version {}, {} mip(s)",
            id, version, mip_count
        ));

        let mut mips = Vec::new();
        for _ in 0..mip_count {
            mips.push(self.read_brush_mip()?);
        }

        self.cur.expect_chunk_id(fourcc::BREN)?;
        Ok(Brush { id, mips })
    }

    fn read_brush_mip(&mut self) -> Result<BrushMip> {
        let max_distance = if self.cur.next_is(fourcc::BRMP) {
            self.cur.read_chunk_id()?;
            self.cur.read_f32()?
        } else {
            DEFAULT_MIP_DISTANCE
        };

        let sector_count = self.cur.read_i32()?;
        let mut sectors = Vec::new();
        for _ in 0..sector_count {
            sectors.push(self.read_sector()?);
        }

        Ok(BrushMip {
            max_distance,
            sectors,
        })
    }

    /// BSC (trailing space) sector block. Field presence is gated on the
    /// embedded version integer; field order is fixed.
    fn read_sector(&mut self) -> Result<Sector> {
        self.cur.expect_chunk_id(fourcc::BSC)?;
        let version = self.cur.read_i32()?;

        let name = if version >= 1 {
            let length = self.cur.read_i32()?;
            self.cur.read_string(length)?
        } else {
            String::new()
        };

        let color = self.cur.read_u32()?;
        let ambient = self.cur.read_u32()?;
        let flags = self.cur.read_u32()?;
        if version >= 2 {
            let _flags2 = self.cur.read_u32()?;
        }
        if version >= 3 {
            let _vis_flags = self.cur.read_u32()?;
        }

        self.cur.expect_chunk_id(fourcc::VTXS)?;
        let vertex_count = self.cur.read_i32()?.max(0) as usize;
        self.cur.require(vertex_count, 24)?;
        let mut vertices = Vec::with_capacity(vertex_count);
        for _ in 0..vertex_count {
            vertices.push(Vector3::new(
                self.cur.read_f64()?,
                self.cur.read_f64()?,
                self.cur.read_f64()?,
            ));
        }

        // planes are 4 x f64 (normal + distance); only the count matters
        self.cur.expect_chunk_id(fourcc::PLNS)?;
        let plane_count = self.cur.read_i32()?.max(0) as usize;
        self.cur.require(plane_count, 32)?;
        self.cur.skip(plane_count * 32)?;

        // edges are two 32-bit vertex indices
        self.cur.expect_chunk_id(fourcc::EDGS)?;
        let edge_count = self.cur.read_i32()?.max(0) as usize;
        self.cur.require(edge_count, 8)?;
        self.cur.skip(edge_count * 8)?;

        self.cur.expect_chunk_id(fourcc::BPOS)?;
        let bpo_version = self.cur.read_i32()?;
        let polygon_count = self.cur.read_i32()?;
        let mut polygons = Vec::new();
        for _ in 0..polygon_count {
            polygons.push(self.read_polygon(bpo_version, &vertices)?);
        }

        if self.cur.next_is(fourcc::BSP0) {
            self.cur.read_chunk_id()?;
            let node_count = self.cur.read_i32()?;
            if node_count <= 0 || node_count >= MAX_BSP_NODE_COUNT {
                return Err(WldError::Malformed(format!(
                    "BSP node count {} outside sanity envelope",
                    node_count
                )));
            }
            self.cur.skip(node_count as usize * 48)?;
        }

        Ok(Sector {
            name,
            color,
            ambient,
            flags,
            vertices,
            polygons,
        })
    }

    /// One polygon record, layout gated by the BPOs version. Triangle
    /// vertex indices are resolved against the sector pool here; indices
    /// falling outside it are dropped without a warning, the volume would
    /// swamp the log.
    fn read_polygon(&mut self, bpo_version: i32, sector_vertices: &[Vector3]) -> Result<Polygon> {
        let _plane_index = self.cur.read_u32()?;

        let (color, flags) = if bpo_version >= 2 {
            let color = self.cur.read_u32()?;
            let flags = self.cur.read_u32()?;

            // three texture slots: filename, 6 x f32 mapping definition,
            // packed scroll/blend/flags byte quad, per-texture color
            for _ in 0..3 {
                let name_length = self.cur.read_i32()?;
                if name_length < 0 || name_length >= MAX_SIZED_SKIP {
                    return Err(WldError::Malformed(format!(
                        "texture name length {} outside sanity envelope",
                        name_length
                    )));
                }
                self.cur.skip(name_length as usize)?;
                self.cur.skip(24 + 4 + 4)?;
            }
            self.cur.skip(8)?; // polygon properties

            (color, flags)
        } else {
            (0xFFFF_FFFF, 0)
        };

        let edge_count = self.cur.read_i32()?.max(0) as usize;
        self.cur.require(edge_count, 4)?;
        self.cur.skip(edge_count * 4)?;

        let mut triangle_vertices = Vec::new();
        let mut triangle_elements = Vec::new();
        if bpo_version >= 4 {
            let vtx_count = self.cur.read_i32()?.max(0) as usize;
            self.cur.require(vtx_count, 4)?;
            triangle_vertices.reserve(vtx_count);
            for _ in 0..vtx_count {
                triangle_vertices.push(self.cur.read_u32()?);
            }

            let elem_count = self.cur.read_i32()?.max(0) as usize;
            self.cur.require(elem_count, 4)?;
            triangle_elements.reserve(elem_count);
            for _ in 0..elem_count {
                triangle_elements.push(self.cur.read_u32()?);
            }
        }

        self.skip_shadow_map()?;

        if bpo_version >= 2 {
            let _shadow_color = self.cur.read_u32()?;
        } else {
            let _legacy_dummy = self.cur.read_u8()?;
        }

        let mut vertices = Vec::with_capacity(triangle_vertices.len());
        for &index in &triangle_vertices {
            if let Some(v) = sector_vertices.get(index as usize) {
                vertices.push(*v);
            }
        }
        let indices = triangle_elements
            .into_iter()
            .filter(|&element| (element as usize) < sector_vertices.len())
            .collect();

        Ok(Polygon {
            vertices,
            indices,
            color,
            flags,
        })
    }

    fn skip_shadow_map(&mut self) -> Result<()> {
        if !self.cur.next_is(fourcc::SHMP) {
            return Ok(());
        }
        self.cur.read_chunk_id()?;
        self.skip_sized("shadow map", MAX_SIZED_SKIP)
    }

    //
    // Terrain Archive
    //

    /// Terrains are recognized only well enough to be skipped. Each TRRN
    /// entry ends in data of unknown width, so the reader byte-steps to
    /// the next identifier it knows.
    fn skip_terrain_archive(&mut self) -> Result<()> {
        self.cur.expect_chunk_id(fourcc::TRAR)?;
        let terrain_count = self.cur.read_i32()?;
        self.info(&format!(
            "terrain archive: {} terrain(s), skipping",
            terrain_count
        ));

        for _ in 0..terrain_count {
            self.cur.expect_chunk_id(fourcc::TRRN)?;
            let _version = self.cur.read_i32()?;
            let name_length = self.cur.read_i32()?;
            let _name = self.cur.read_string(name_length)?;
            self.cur.skip(8)?; // flags + pad

            let size_x = self.cur.read_u32()? as usize;
            let size_y = self.cur.read_u32()? as usize;
            let cells = size_x
                .checked_mul(size_y)
                .ok_or_else(|| WldError::Malformed("terrain grid size overflows".to_string()))?;
            self.cur.require(cells, 3)?;
            self.cur.skip(cells * 2)?; // heightmap, 16-bit per cell
            self.cur.skip(cells)?; // edge mask

            loop {
                match self.cur.peek_chunk_id() {
                    Ok(id)
                        if id == fourcc::TREN
                            || id == fourcc::TRRN
                            || id == fourcc::EOTA
                            || id == fourcc::DPOS =>
                    {
                        break
                    }
                    Ok(_) => self.cur.skip(1)?,
                    Err(_) => break, // EOF
                }
            }
            if self.cur.next_is(fourcc::TREN) {
                self.cur.read_chunk_id()?;
            }
        }

        if self.cur.next_is(fourcc::EOTA) {
            self.cur.read_chunk_id()?;
        }
        Ok(())
    }

    //
    // End Marker
    //

    fn read_end_marker(&mut self) {
        self.cur.skip_to_fourcc(fourcc::WEND);
        if self.cur.next_is(fourcc::WEND) {
            let _ = self.cur.read_chunk_id();
        } else {
            self.warn("end marker WEND not found");
        }
    }

    //
    // Helpers
    //

    /// Skip a chunk announcing its own payload size. Sizes outside
    /// (0, envelope) mark the chunk malformed; the cursor stays put and
    /// the caller's section is abandoned.
    fn skip_sized(&mut self, what: &str, envelope: i32) -> Result<()> {
        let size = self.cur.read_i32()?;
        if size <= 0 || size >= envelope {
            return Err(WldError::Malformed(format!(
                "{} size {} outside sanity envelope",
                what, size
            )));
        }
        self.cur.skip(size as usize)
    }

    fn info(&mut self, message: &str) {
        self.sink.log(LogLevel::Info, message);
    }

    fn warn(&mut self, message: &str) {
        self.sink.log(LogLevel::Warn, message);
    }

    fn error(&mut self, message: &str) {
        self.sink.log(LogLevel::Error, message);
    }

    fn success(&mut self, message: &str) {
        self.sink.log(LogLevel::Success, message);
    }
}
