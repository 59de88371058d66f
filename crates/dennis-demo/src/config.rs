use std::path::PathBuf;

use dennis_engine::paint::Rgba8;

/// Everything the demo needs to know up front. There are no command-line
/// arguments or config files; this is the single place to change behaviour.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Glyph atlas image, relative to the working directory.
    pub atlas_path: PathBuf,
    /// Bottom color of the full-window gradient.
    pub gradient_color: Rgba8,
    /// Draw the closing-iris animation and smoke-test captions over the
    /// gradient. Off by default: a plain run shows only the gradient.
    pub test_pattern: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            atlas_path: PathBuf::from("res/font.png"),
            gradient_color: Rgba8::opaque(0, 0, 255),
            test_pattern: false,
        }
    }
}
