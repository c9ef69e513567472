use raylib::prelude::*;
use raylib::core::text::measure_text;
use crate::constants::*;
use crate::events::LightboxTarget;
use crate::lightbox::LightboxView;
use crate::render::card::draw_fitted;
use crate::render::layout::{contains, fit_into};

// Screen-space controls of the lightbox overlay.
pub struct OverlayRects {
    pub image: Rectangle,
    pub counter: Rectangle,
    pub close: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
}

impl OverlayRects {
    pub fn compute(screen_width: f32, screen_height: f32, tex_width: f32, tex_height: f32) -> Self {
        let bounds = Rectangle::new(
            screen_width * (1.0 - LIGHTBOX_MARGIN) * 0.5,
            screen_height * (1.0 - LIGHTBOX_MARGIN) * 0.5,
            screen_width * LIGHTBOX_MARGIN,
            screen_height * LIGHTBOX_MARGIN - LIGHTBOX_BUTTON,
        );
        let image = fit_into(&bounds, tex_width, tex_height);
        let mid_y = screen_height * 0.5 - LIGHTBOX_BUTTON * 0.5;

        Self {
            image,
            counter: Rectangle::new(
                screen_width * 0.5 - LIGHTBOX_BUTTON * 2.0,
                image.y + image.height + 8.0,
                LIGHTBOX_BUTTON * 4.0,
                LIGHTBOX_BUTTON * 0.6,
            ),
            close: Rectangle::new(screen_width - LIGHTBOX_BUTTON * 1.5, LIGHTBOX_BUTTON * 0.5, LIGHTBOX_BUTTON, LIGHTBOX_BUTTON),
            prev: Rectangle::new(LIGHTBOX_BUTTON * 0.5, mid_y, LIGHTBOX_BUTTON, LIGHTBOX_BUTTON),
            next: Rectangle::new(screen_width - LIGHTBOX_BUTTON * 1.5, mid_y, LIGHTBOX_BUTTON, LIGHTBOX_BUTTON),
        }
    }

    // Hidden navigation controls cannot be hit.
    pub fn hit_test(&self, point: Vector2, show_nav: bool) -> LightboxTarget {
        if contains(&self.close, point) {
            LightboxTarget::Close
        } else if show_nav && contains(&self.prev, point) {
            LightboxTarget::Prev
        } else if show_nav && contains(&self.next, point) {
            LightboxTarget::Next
        } else if contains(&self.image, point) || contains(&self.counter, point) {
            LightboxTarget::Content
        } else {
            LightboxTarget::Background
        }
    }
}

pub fn draw_overlay(d: &mut RaylibDrawHandle, view: &LightboxView, rects: &OverlayRects, textures: &[Texture2D]) {
    let screen_width = d.get_screen_width();
    let screen_height = d.get_screen_height();
    d.draw_rectangle(0, 0, screen_width, screen_height, Color::new(10, 10, 20, 235));

    if let Some(image) = view.image {
        draw_fitted(d, textures, image, &rects.image, 1.0);
    }

    let font_size = 20;
    let counter_width = measure_text(&view.counter, font_size);
    d.draw_text(
        &view.counter,
        (rects.counter.x + rects.counter.width * 0.5) as i32 - counter_width / 2,
        rects.counter.y as i32,
        font_size,
        Color::RAYWHITE,
    );

    // Close: an X
    let c = &rects.close;
    let inset = c.width * 0.25;
    d.draw_line_ex(
        Vector2::new(c.x + inset, c.y + inset),
        Vector2::new(c.x + c.width - inset, c.y + c.height - inset),
        3.0,
        Color::RAYWHITE,
    );
    d.draw_line_ex(
        Vector2::new(c.x + c.width - inset, c.y + inset),
        Vector2::new(c.x + inset, c.y + c.height - inset),
        3.0,
        Color::RAYWHITE,
    );

    if view.show_nav {
        draw_chevron(d, &rects.prev, -1.0);
        draw_chevron(d, &rects.next, 1.0);
    }
}

// direction: -1 points left, 1 points right
fn draw_chevron(d: &mut RaylibDrawHandle, rect: &Rectangle, direction: f32) {
    d.draw_rectangle_rec(*rect, Color::new(255, 255, 255, 40));
    let cx = rect.x + rect.width * 0.5;
    let cy = rect.y + rect.height * 0.5;
    let arm = rect.width * 0.2;
    let tip = Vector2::new(cx + arm * direction, cy);
    d.draw_line_ex(Vector2::new(cx - arm * direction, cy - arm * 1.5), tip, 3.0, Color::RAYWHITE);
    d.draw_line_ex(Vector2::new(cx - arm * direction, cy + arm * 1.5), tip, 3.0, Color::RAYWHITE);
}
