use raylib::prelude::*;
use crate::carousel::Carousel;
use crate::constants::*;
use crate::render::layout::{CardRects, fit_into};
use crate::slide::ImageId;

// Hands a slide change off to a cross-fade; the carousel itself never animates.
pub struct CardView {
    shown: ImageId,
    previous: Option<ImageId>,
    opacity: f32,
    fade_timer: f32,
    tween_fade: ease::Tween,
}

impl CardView {
    pub fn new(first: ImageId) -> Self {
        Self {
            shown: first,
            previous: None,
            opacity: 1.0,
            fade_timer: 0.0,
            tween_fade: ease::Tween::new(ease::cubic_out, 0.0, 1.0, FADE_DURATION),
        }
    }

    pub fn update(&mut self, dt: f32, current: ImageId) {
        if current != self.shown {
            self.previous = Some(self.shown);
            self.shown = current;
            self.opacity = 0.0;
            self.fade_timer = 0.0;
            self.tween_fade = ease::Tween::new(ease::cubic_out, 0.0, 1.0, FADE_DURATION);
        }

        if self.previous.is_none() {
            return;
        }

        self.opacity = self.tween_fade.apply(dt);
        self.fade_timer += dt;
        if self.fade_timer >= FADE_DURATION {
            self.previous = None;
            self.opacity = 1.0;
        }
    }

    pub fn draw(
        &self,
        d: &mut RaylibDrawHandle,
        rects: &CardRects,
        scroll: f32,
        title: &str,
        carousel: &Carousel,
        textures: &[Texture2D],
        hovered: bool,
    ) {
        let shift = |r: &Rectangle| Rectangle::new(r.x, r.y - scroll, r.width, r.height);
        let card = shift(&rects.card);
        let image_area = shift(&rects.image);

        let background = if hovered { Color::new(48, 44, 72, 255) } else { Color::new(30, 30, 48, 255) };
        d.draw_rectangle_rec(card, background);

        if let Some(previous) = self.previous {
            draw_fitted(d, textures, previous, &image_area, 1.0 - self.opacity);
        }
        draw_fitted(d, textures, self.shown, &image_area, self.opacity);

        for (indicator, center) in carousel.indicators().iter().zip(rects.indicators.iter()) {
            let center = Vector2::new(center.x, center.y - scroll);
            if indicator.active {
                d.draw_circle_v(center, INDICATOR_RADIUS, Color::new(184, 164, 212, 255));
            } else {
                d.draw_circle_v(center, INDICATOR_RADIUS * 0.7, Color::GRAY);
            }
        }

        d.draw_text(
            title,
            rects.title_pos.x as i32,
            (rects.title_pos.y - scroll) as i32,
            20,
            Color::RAYWHITE,
        );
    }
}

pub fn draw_fitted(d: &mut RaylibDrawHandle, textures: &[Texture2D], image: ImageId, bounds: &Rectangle, opacity: f32) {
    let Some(texture) = textures.get(image.0) else {
        return;
    };
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        fit_into(bounds, tex_width, tex_height),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE.fade(opacity.clamp(0.0, 1.0)),
    );
}
