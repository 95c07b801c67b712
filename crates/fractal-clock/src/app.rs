use anyhow::{Context, Result};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use clock_engine::core::{App, AppControl, FrameCtx};
use clock_engine::render::SceneRenderer;
use clock_engine::scene::DrawList;
use clock_engine::text::{FontId, FontSystem};
use clock_engine::time::FrameRateMeter;
use clock_fractal::{ClockFractalRenderer, Size};

use crate::painter::Painter;

/// The fractal clock as an engine [`App`]: one full clock frame per redraw.
pub struct ClockApp {
    clock: ClockFractalRenderer,
    fonts: FontSystem,
    font: FontId,
    draw_list: DrawList,
    scene: SceneRenderer,
    fps: FrameRateMeter,
}

impl ClockApp {
    pub fn new(clock: ClockFractalRenderer, font_bytes: &[u8]) -> Result<Self> {
        let mut fonts = FontSystem::new();
        let font = fonts
            .load_font(font_bytes)
            .context("failed to parse numeral font")?;

        Ok(Self {
            clock,
            fonts,
            font,
            draw_list: DrawList::new(),
            scene: SceneRenderer::new(),
            fps: FrameRateMeter::default(),
        })
    }
}

impl App for ClockApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput {
                event: KeyEvent { state: ElementState::Pressed, logical_key, .. },
                ..
            } if is_exit_key(logical_key) => AppControl::Exit,
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let scale_factor = ctx.window.scale_factor();

        self.draw_list.clear();
        let clear = {
            let mut painter = Painter::new(&mut self.draw_list, &self.fonts, self.font, scale_factor);
            self.clock.render_frame(Size::new(w as f64, h as f64), &mut painter);
            painter.finish()
        };

        if let Some(fps) = self.fps.record(&ctx.time) {
            log::debug!("{fps:.1} fps, {} draw commands", self.draw_list.len());
        }

        let (scene, draw_list, fonts) = (&mut self.scene, &mut self.draw_list, &self.fonts);
        ctx.render(clear, |rctx, target| scene.render(rctx, target, draw_list, fonts))
    }
}

/// Escape or Q, as a screensaver would.
fn is_exit_key(key: &Key) -> bool {
    match key {
        Key::Named(NamedKey::Escape) => true,
        Key::Character(c) => c.eq_ignore_ascii_case("q"),
        _ => false,
    }
}
