pub mod parse;
pub mod render;
