//! Browser canvas implementation of `RenderSurface`

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{ColorStop, Font, RenderSurface, Rgba, TextAlign};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    background: Option<HtmlImageElement>,
}

impl CanvasSurface {
    /// Wrap a canvas; the background image starts loading immediately
    pub fn new(canvas: HtmlCanvasElement, background_src: &str) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let background = match HtmlImageElement::new() {
            Ok(img) => {
                img.set_src(background_src);
                Some(img)
            }
            Err(_) => {
                log::warn!("Could not create background image element");
                None
            }
        };

        Some(Self {
            canvas,
            ctx,
            background,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn resize(&mut self, size: Vec2) {
        self.canvas.set_width(size.x as u32);
        self.canvas.set_height(size.y as u32);
    }

    /// Top-left of the canvas in viewport coordinates
    pub fn origin(&self) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        Vec2::new(rect.left() as f32, rect.top() as f32)
    }

    pub fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        let _ = self.canvas.style().set_property("display", display);
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
    }
}

impl RenderSurface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn draw_background(&mut self) -> bool {
        let Some(img) = &self.background else {
            return false;
        };
        if !img.complete() || img.natural_width() == 0 {
            return false;
        }
        let size = self.size();
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                img,
                0.0,
                0.0,
                size.x as f64,
                size.y as f64,
            )
            .is_ok()
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        radius: f32,
        stops: &[ColorStop],
    ) {
        let Ok(gradient) = self.ctx.create_radial_gradient(
            center.x as f64,
            center.y as f64,
            inner_radius.max(0.0) as f64,
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
        ) else {
            return;
        };
        for stop in stops {
            let _ = gradient.add_color_stop(stop.offset, &stop.color.to_css());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: Font, align: TextAlign, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&font.to_css());
        self.ctx.set_text_align(align.as_str());
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}
