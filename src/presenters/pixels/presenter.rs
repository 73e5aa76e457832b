use crate::controllers::interactive::ports::canvas_surface::CanvasSurfacePort;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use tracing::warn;
use winit::window::Window;

/// Shows committed frames in a `pixels` framebuffer with an egui overlay on
/// top.
pub struct PixelsPresenter {
    window: &'static Window,
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    size: CanvasSize,
}

impl CanvasSurfacePort for PixelsPresenter {
    fn size(&self) -> CanvasSize {
        self.size
    }

    fn commit(&mut self, buffer: PixelBuffer) {
        if buffer.size() != self.size {
            warn!(
                frame_width = buffer.size().width,
                frame_height = buffer.size().height,
                surface_width = self.size.width,
                surface_height = self.size.height,
                "dropping frame rendered for a stale canvas size"
            );
            return;
        }

        // Both sides are row-major RGBA8.
        self.pixels.frame_mut().copy_from_slice(buffer.buffer());
        self.window.request_redraw();
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let inner = window.inner_size();
        let surface_texture = SurfaceTexture::new(inner.width, inner.height, window);
        let pixels = Pixels::new(inner.width, inner.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            window,
            pixels,
            egui_renderer,
            size: CanvasSize::new(inner.width, inner.height),
        })
    }

    /// Resizes both the window surface and the framebuffer.
    ///
    /// The framebuffer keeps its old contents until the next commit.
    pub fn resize(&mut self, size: CanvasSize) -> Result<(), pixels::TextureError> {
        self.pixels.resize_surface(size.width, size.height)?;
        self.pixels.resize_buffer(size.width, size.height)?;
        self.size = size;

        Ok(())
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.size.is_empty() {
            return Ok(());
        }

        let size_in_pixels = [self.size.width, self.size.height];

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}
