//! Event construction and output
//!
//! - Clock - where event timestamps come from
//! - Render - pretty JSON / YAML serialization
//! - Emitter - builds the demo event and writes it out

pub mod clock;
pub mod emitter;
pub mod render;
