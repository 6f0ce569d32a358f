// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits that define the core
// concepts of the advisor:
//
//   entity.rs   — a phrase tagged by the entity extractor
//   catalog.rs  — the three source tables and the joined row
//   request.rs  — one validated recommendation request
//   response.rs — the JSON envelope written to stdout
//   error.rs    — every failure the pipeline can report
//   traits.rs   — seams implemented by other layers
//
// Rules for this layer:
//   - NO file I/O or process spawning
//   - NO clap types
//   - Only plain data and the traits other layers implement

pub mod entity;
pub mod catalog;
pub mod request;
pub mod response;
pub mod error;
pub mod traits;
