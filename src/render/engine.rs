use anyhow::{Result, bail};
use raylib::prelude::*;
use crate::constants::*;
use crate::events::Key;
use crate::gallery::{CardSource, Gallery};
use crate::render::card::CardView;
use crate::render::layout::{CardClick, Layout};
use crate::render::overlay::{OverlayRects, draw_overlay};
use crate::slide::ImageId;
use crate::texture_loader::{CardPaths, load_texture_with_exif_rotation};

// raylib front-end: turns frame time, mouse and keys into gallery events
// and draws the resulting state.
pub struct GalleryEngine {
    title: String,
    interval: f32,
    textures: Vec<Texture2D>,
    gallery: Gallery,
    views: Vec<CardView>,
    hovered: Option<usize>,
}

impl GalleryEngine {
    pub fn new(title: String, interval: f32) -> Result<Self> {
        Ok(Self {
            title,
            interval,
            textures: Vec::new(),
            gallery: Gallery::new(Vec::new(), interval)?,
            views: Vec::new(),
            hovered: None,
        })
    }

    fn set_hovered(&mut self, hovered: Option<usize>) {
        if hovered == self.hovered {
            return;
        }
        if let Some(old) = self.hovered {
            self.gallery.hover_leave(old);
        }
        if let Some(new) = hovered {
            self.gallery.hover_enter(new);
        }
        self.hovered = hovered;
    }

    fn overlay_rects(&self, screen_width: f32, screen_height: f32) -> OverlayRects {
        let (tex_width, tex_height) = self
            .gallery
            .lightbox
            .view()
            .image
            .and_then(|id| self.textures.get(id.0))
            .map(|t| (t.width() as f32, t.height() as f32))
            .unwrap_or((1.0, 1.0));
        OverlayRects::compute(screen_width, screen_height, tex_width, tex_height)
    }

    fn handle_input(&mut self, rl: &mut RaylibHandle, layout: &Layout, overlay: &OverlayRects) {
        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            self.gallery.scroll_by(-wheel * SCROLL_SPEED);
        }

        let mouse = rl.get_mouse_position();
        let content_point = Vector2::new(mouse.x, mouse.y + self.gallery.scroll.offset());
        let over_grid = mouse.y > HEADER_HEIGHT;

        // The overlay covers the cards, so nothing underneath is hovered.
        let hovered = if self.gallery.lightbox.is_open() || !over_grid {
            None
        } else {
            layout.card_at(content_point)
        };
        self.set_hovered(hovered);

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if self.gallery.lightbox.is_open() {
                let target = overlay.hit_test(mouse, self.gallery.lightbox.view().show_nav);
                self.gallery.lightbox_click(target);
            } else if let Some(index) = hovered {
                match layout.cards[index].click_at(content_point) {
                    Some(CardClick::Indicator(indicator)) => self.gallery.indicator_click(index, indicator),
                    Some(CardClick::Open) => {
                        if let Err(e) = self.gallery.open_card(index) {
                            tracing::error!("could not open card {index}: {e}");
                        }
                    }
                    None => {}
                }
            }
        }

        while let Some(key) = rl.get_key_pressed() {
            let key = match key {
                KeyboardKey::KEY_ESCAPE => Key::Escape,
                KeyboardKey::KEY_LEFT => Key::ArrowLeft,
                KeyboardKey::KEY_RIGHT => Key::ArrowRight,
                _ => Key::Other,
            };
            self.gallery.key(key);
        }
    }
}

impl crate::engine::Engine for GalleryEngine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, cards: Vec<CardPaths>) -> Result<()> {
        let mut sources = Vec::new();

        for card in cards {
            let mut images = Vec::new();
            for path in &card.paths {
                match load_texture_with_exif_rotation(rl, thread, path) {
                    Ok(texture) => {
                        images.push(ImageId(self.textures.len()));
                        self.textures.push(texture);
                    }
                    Err(e) => tracing::warn!("skipping image: {e:#}"),
                }
            }

            if images.is_empty() {
                tracing::warn!("card '{}' has no loadable images, dropping it", card.title);
                continue;
            }
            sources.push(CardSource { title: card.title, images });
        }

        if sources.is_empty() {
            bail!("no images could be loaded");
        }

        self.gallery = Gallery::new(sources, self.interval)?;
        self.views = self
            .gallery
            .cards
            .iter()
            .map(|card| CardView::new(card.carousel.current_image()))
            .collect();
        self.hovered = None;

        tracing::info!(
            "gallery ready: {} cards, {} images",
            self.gallery.cards.len(),
            self.textures.len()
        );
        Ok(())
    }

    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;

        let slide_counts: Vec<usize> = self.gallery.cards.iter().map(|c| c.carousel.slide_count()).collect();
        let layout = Layout::compute(screen_width, &slide_counts);
        self.gallery.scroll.set_extent(layout.content_height, screen_height);

        let overlay = self.overlay_rects(screen_width, screen_height);
        self.handle_input(rl, &layout, &overlay);

        // --- Update Logic ---
        self.gallery.update(dt);
        for (view, card) in self.views.iter_mut().zip(self.gallery.cards.iter()) {
            view.update(dt, card.carousel.current_image());
        }

        // Session may have changed during input handling
        let overlay = self.overlay_rects(screen_width, screen_height);
        let scroll = self.gallery.scroll.offset();

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::new(15, 15, 30, 255));

        for (i, (view, card)) in self.views.iter().zip(self.gallery.cards.iter()).enumerate() {
            let rects = &layout.cards[i];
            // Skip cards scrolled fully out of view
            if rects.card.y + rects.card.height < scroll || rects.card.y > scroll + screen_height {
                continue;
            }
            view.draw(&mut d, rects, scroll, &card.title, &card.carousel, &self.textures, self.hovered == Some(i));
        }

        d.draw_rectangle(0, 0, screen_width as i32, HEADER_HEIGHT as i32, Color::new(15, 15, 30, 245));
        d.draw_text(&self.title, CARD_GUTTER as i32, 22, 30, Color::new(184, 164, 212, 255));

        if self.gallery.lightbox.is_open() {
            draw_overlay(&mut d, self.gallery.lightbox.view(), &overlay, &self.textures);
        }
    }
}
