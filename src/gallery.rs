use crate::carousel::Carousel;
use crate::error::GalleryError;
use crate::events::{Key, LightboxTarget};
use crate::lightbox::Lightbox;
use crate::scroll::ScrollRegion;
use crate::slide::ImageId;

pub struct CardSource {
    pub title: String,
    pub images: Vec<ImageId>,
}

pub struct Card {
    pub title: String,
    pub carousel: Carousel,
}

// Owns the page-wide lightbox and one carousel per card.
pub struct Gallery {
    pub cards: Vec<Card>,
    pub lightbox: Lightbox,
    pub scroll: ScrollRegion,
}

impl Gallery {
    pub fn new(sources: Vec<CardSource>, interval: f32) -> Result<Self, GalleryError> {
        let scroll = ScrollRegion::new();
        let lightbox = Lightbox::new(scroll.locker());

        let cards = sources
            .into_iter()
            .map(|source| {
                Ok(Card {
                    title: source.title,
                    carousel: Carousel::new(source.images, interval)?,
                })
            })
            .collect::<Result<Vec<_>, GalleryError>>()?;

        Ok(Self { cards, lightbox, scroll })
    }

    // Carousels keep running underneath an open lightbox.
    pub fn update(&mut self, dt: f32) {
        for card in self.cards.iter_mut() {
            card.carousel.on_tick(dt);
        }
    }

    /// Opens the lightbox on every image of the card, always from the first
    /// one, whatever slide the card's carousel is showing.
    pub fn open_card(&mut self, index: usize) -> Result<(), GalleryError> {
        let Some(card) = self.cards.get(index) else {
            return Ok(());
        };
        let images = card.carousel.images();
        tracing::debug!("opening card '{}' ({} images)", card.title, images.len());
        self.lightbox.open(images, 0)
    }

    pub fn hover_enter(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.carousel.on_hover_enter();
        }
    }

    pub fn hover_leave(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.carousel.on_hover_leave();
        }
    }

    pub fn indicator_click(&mut self, card: usize, indicator: usize) {
        if let Some(card) = self.cards.get_mut(card) {
            card.carousel.on_indicator_click(indicator);
        }
    }

    pub fn key(&mut self, key: Key) {
        self.lightbox.on_key(key);
    }

    pub fn lightbox_click(&mut self, target: LightboxTarget) {
        self.lightbox.on_click(target);
    }

    pub fn scroll_by(&mut self, delta: f32) -> bool {
        self.scroll.scroll_by(delta)
    }
}
