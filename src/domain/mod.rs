//! Domain Layer
//!
//! Stack detection, scanning and planning, independent of concrete I/O.
//!
//! ## Structure
//!
//! - `entities/` - Detections and template data
//! - `value_objects/` - `StackKind` and its marker table
//! - `services/` - Detector, scanner (with dedup), file planner
//! - `ports/` - Interfaces for file system, templates and events

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
