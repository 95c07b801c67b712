use std::ops::Range;

use crate::render::shapes::line::{LineInstance, LineRenderer};
use crate::render::shapes::text::{GlyphInstance, TextRenderer};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawKind, DrawList};
use crate::text::FontSystem;

/// A run of consecutive same-kind commands, drawn with one instanced call.
///
/// `instances` indexes into that kind's instance buffer for the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub kind: DrawKind,
    pub instances: Range<u32>,
}

/// Merges per-command instance counts (in paint order) into batches.
///
/// Each kind has its own instance numbering; empty commands are dropped and do
/// not split a run.
pub fn plan_batches<I>(runs: I) -> Vec<Batch>
where
    I: IntoIterator<Item = (DrawKind, u32)>,
{
    let mut batches: Vec<Batch> = Vec::new();
    let mut next_line = 0u32;
    let mut next_text = 0u32;

    for (kind, count) in runs {
        if count == 0 {
            continue;
        }
        let cursor = match kind {
            DrawKind::Line => &mut next_line,
            DrawKind::Text => &mut next_text,
        };
        let start = *cursor;
        *cursor += count;

        match batches.last_mut() {
            Some(last) if last.kind == kind => last.instances.end = *cursor,
            _ => batches.push(Batch { kind, instances: start..*cursor }),
        }
    }
    batches
}

/// Draws a whole [`DrawList`] in one render pass, preserving paint order
/// across primitive kinds.
#[derive(Default)]
pub struct SceneRenderer {
    lines: LineRenderer,
    text: TextRenderer,

    line_instances: Vec<LineInstance>,
    glyph_instances: Vec<GlyphInstance>,
    runs: Vec<(DrawKind, u32)>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        font_system: &FontSystem,
    ) {
        self.line_instances.clear();
        self.glyph_instances.clear();
        self.runs.clear();

        if !ctx.viewport.is_valid() {
            return;
        }

        for item in draw_list.iter_in_paint_order() {
            let count = match &item.cmd {
                DrawCmd::Line(cmd) => match LineInstance::from_cmd(cmd) {
                    Some(instance) => {
                        self.line_instances.push(instance);
                        1
                    }
                    None => 0,
                },
                DrawCmd::Text(cmd) => {
                    self.text.layout_glyphs(ctx, cmd, font_system, &mut self.glyph_instances)
                }
            };
            self.runs.push((item.cmd.kind(), count));
        }

        let batches = plan_batches(self.runs.iter().copied());
        if batches.is_empty() {
            return;
        }

        // Uploads go through the queue and land before this encoder is submitted.
        self.lines.prepare(ctx, &self.line_instances);
        self.text.prepare(ctx, &self.glyph_instances);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("clock scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for batch in &batches {
            match batch.kind {
                DrawKind::Line => self.lines.draw(&mut rpass, batch.instances.clone()),
                DrawKind::Text => self.text.draw(&mut rpass, batch.instances.clone()),
            }
        }

        log::trace!(
            "scene: {} lines, {} glyphs, {} batches",
            self.line_instances.len(),
            self.glyph_instances.len(),
            batches.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DrawKind::{Line, Text};

    fn batch(kind: DrawKind, r: Range<u32>) -> Batch {
        Batch { kind, instances: r }
    }

    #[test]
    fn empty_input_has_no_batches() {
        assert!(plan_batches(Vec::new()).is_empty());
    }

    #[test]
    fn consecutive_lines_merge() {
        let b = plan_batches(vec![(Line, 1), (Line, 1), (Line, 1)]);
        assert_eq!(b, vec![batch(Line, 0..3)]);
    }

    #[test]
    fn clock_frame_shape() {
        // hour hand + tree, numerals, ticks
        let mut runs = vec![(Line, 1); 1 + 14];
        runs.extend([(Text, 2), (Text, 2), (Text, 1)]);
        runs.extend(vec![(Line, 1); 60]);

        let b = plan_batches(runs);
        assert_eq!(
            b,
            vec![batch(Line, 0..15), batch(Text, 0..5), batch(Line, 15..75)]
        );
    }

    #[test]
    fn empty_text_does_not_split_a_line_run() {
        let b = plan_batches(vec![(Line, 1), (Text, 0), (Line, 1)]);
        assert_eq!(b, vec![batch(Line, 0..2)]);
    }

    #[test]
    fn kinds_number_instances_independently() {
        let b = plan_batches(vec![(Text, 3), (Line, 1), (Text, 2), (Line, 1)]);
        assert_eq!(
            b,
            vec![
                batch(Text, 0..3),
                batch(Line, 0..1),
                batch(Text, 3..5),
                batch(Line, 1..2),
            ]
        );
    }
}
