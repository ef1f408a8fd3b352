pub mod constants;
pub mod error;
pub mod language;
pub mod primitives;
