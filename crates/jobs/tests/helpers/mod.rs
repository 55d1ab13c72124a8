#![allow(dead_code)]

pub mod mock_line_source;

pub use mock_line_source::ScriptedLineSource;
