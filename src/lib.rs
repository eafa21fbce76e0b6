// Manually mapping the folder structure to modules
#[path = "serious_engine/wld/cursor.rs"]
pub mod cursor;

#[path = "serious_engine/wld/wld.rs"]
pub mod wld;

#[path = "serious_engine/wld/wld_mesh.rs"]
pub mod wld_mesh;

#[path = "serious_engine/console/sink.rs"]
pub mod sink;
