//! querytail Infrastructure Layer
pub mod tail;
