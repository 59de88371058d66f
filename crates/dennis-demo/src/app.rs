use dennis_engine::anim::IrisAnimation;
use dennis_engine::core::{App, AppControl, FrameCtx};
use dennis_engine::paint::draw_gradient;
use dennis_engine::text::GlyphAtlas;

use crate::config::DemoConfig;

/// Per-frame drawing: gradient first, then the optional test pattern.
pub struct DemoApp {
    config: DemoConfig,
    atlas: Option<GlyphAtlas>,
    iris: Option<IrisAnimation>,
}

impl DemoApp {
    /// `atlas` is `None` when it failed to load; text is then skipped.
    pub fn new(config: DemoConfig, atlas: Option<GlyphAtlas>) -> Self {
        Self { config, atlas, iris: None }
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        draw_gradient(ctx.canvas, ctx.viewport.rect(), self.config.gradient_color);

        if self.config.test_pattern {
            let iris = self.iris.get_or_insert_with(IrisAnimation::new);
            iris.step(ctx.canvas, ctx.viewport);

            if let Some(atlas) = self.atlas.as_ref() {
                iris.draw_captions(ctx.canvas, atlas, ctx.viewport);
            }
        }

        AppControl::Continue
    }

    fn on_exit(&mut self) {
        log::info!("demo finished");
    }
}
