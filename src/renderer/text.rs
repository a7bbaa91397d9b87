//! Text overlay
//!
//! Text runs collected during a frame are laid out by egui and painted by
//! `egui_wgpu` in a second pass on top of the shape geometry.

use glam::IVec2;

use super::surface::{Font, Typeface};
use super::vertex::Color;

/// A line of text queued for the overlay pass
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Top-left corner in window pixels
    pub origin: IVec2,
    pub font: Font,
    pub color: Color,
}

fn font_id(font: Font) -> egui::FontId {
    let family = match font.face {
        Typeface::Proportional => egui::FontFamily::Proportional,
        Typeface::Monospace => egui::FontFamily::Monospace,
    };
    egui::FontId::new(font.size as f32, family)
}

fn color32(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color;
    egui::Color32::from(egui::Rgba::from_rgba_unmultiplied(r, g, b, a))
}

/// Run one egui frame that paints `runs` onto a foreground layer covering a
/// window of `size` pixels, one point per pixel
pub fn layout(ctx: &egui::Context, runs: &[TextRun], size: (u32, u32)) -> egui::FullOutput {
    let mut raw_input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(size.0 as f32, size.1 as f32),
        )),
        ..Default::default()
    };
    raw_input
        .viewports
        .entry(egui::ViewportId::ROOT)
        .or_default()
        .native_pixels_per_point = Some(1.0);

    ctx.run(raw_input, |ctx| {
        let painter =
            ctx.layer_painter(egui::LayerId::new(egui::Order::Foreground, egui::Id::new("text")));
        for run in runs {
            painter.text(
                egui::pos2(run.origin.x as f32, run.origin.y as f32),
                egui::Align2::LEFT_TOP,
                &run.text,
                font_id(run.font),
                color32(run.color),
            );
        }
    })
}

/// egui context and GPU renderer for the text pass
pub struct TextPainter {
    ctx: egui::Context,
    renderer: egui_wgpu::Renderer,
}

impl TextPainter {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        Self {
            ctx: egui::Context::default(),
            renderer: egui_wgpu::Renderer::new(
                device,
                format,
                egui_wgpu::RendererOptions::default(),
            ),
        }
    }

    /// Lay out `runs` and record the overlay pass into `encoder`. The pass
    /// loads the existing frame, so shapes drawn earlier stay visible.
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        runs: &[TextRun],
        size: (u32, u32),
    ) -> Vec<wgpu::CommandBuffer> {
        let output = layout(&self.ctx, runs, size);
        let primitives = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.0, size.1],
            pixels_per_point: output.pixels_per_point,
        };

        for (id, delta) in &output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        let commands =
            self.renderer
                .update_buffers(device, queue, encoder, &primitives, &screen_descriptor);

        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("text_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.renderer
                .render(&mut pass, &primitives, &screen_descriptor);
        }

        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    fn run(text: &str, font: Font) -> TextRun {
        TextRun {
            text: text.to_string(),
            origin: IVec2::new(10, 10),
            font,
            color: colors::SCORE,
        }
    }

    #[test]
    fn test_layout_paints_each_run() {
        let ctx = egui::Context::default();
        let runs = [run("Score: 3", Font::HUD), run("Paused", Font::BANNER)];
        let output = layout(&ctx, &runs, (800, 600));

        assert_eq!(output.pixels_per_point, 1.0);
        assert!(output.shapes.len() >= runs.len());
        // First frame uploads the font atlas
        assert!(!output.textures_delta.set.is_empty());
    }

    #[test]
    fn test_layout_without_runs_paints_nothing() {
        let ctx = egui::Context::default();
        let output = layout(&ctx, &[], (800, 600));
        assert!(output.shapes.is_empty());
    }

    #[test]
    fn test_font_mapping() {
        assert_eq!(font_id(Font::HUD).family, egui::FontFamily::Monospace);
        assert_eq!(font_id(Font::BANNER).size, 36.0);
        assert_eq!(color32(colors::GAME_OVER), egui::Color32::RED);
    }
}
