pub mod colors;
pub mod presets;
