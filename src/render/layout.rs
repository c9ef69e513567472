use raylib::prelude::*;
use crate::constants::*;

// Card geometry in content coordinates (before the scroll offset is applied).
#[derive(Debug, Clone)]
pub struct CardRects {
    pub card: Rectangle,
    pub image: Rectangle,
    pub indicators: Vec<Vector2>,
    pub title_pos: Vector2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardClick {
    Indicator(usize),
    Open,
}

impl CardRects {
    // Anywhere on the card opens it, except on an indicator dot.
    pub fn click_at(&self, point: Vector2) -> Option<CardClick> {
        if let Some(index) = self.indicator_at(point) {
            Some(CardClick::Indicator(index))
        } else if contains(&self.card, point) {
            Some(CardClick::Open)
        } else {
            None
        }
    }

    pub fn indicator_at(&self, point: Vector2) -> Option<usize> {
        // Generous hit box, the dots themselves are small
        let reach = INDICATOR_SPACING * 0.5;
        self.indicators.iter().position(|center| {
            (center.x - point.x).abs() <= reach && (center.y - point.y).abs() <= INDICATOR_STRIP * 0.5
        })
    }
}

pub struct Layout {
    pub cards: Vec<CardRects>,
    pub content_height: f32,
}

impl Layout {
    pub fn compute(screen_width: f32, slide_counts: &[usize]) -> Layout {
        let usable = (screen_width - CARD_GUTTER).max(CARD_MIN_WIDTH);
        let columns = ((usable / (CARD_MIN_WIDTH + CARD_GUTTER)).floor() as usize).max(1);

        let card_width = ((screen_width - CARD_GUTTER * (columns as f32 + 1.0)) / columns as f32).max(1.0);
        let image_height = card_width * CARD_ASPECT;
        let card_height = image_height + INDICATOR_STRIP + TITLE_STRIP;

        let mut cards = Vec::with_capacity(slide_counts.len());
        for (i, &count) in slide_counts.iter().enumerate() {
            let column = i % columns;
            let row = i / columns;

            let x = CARD_GUTTER + column as f32 * (card_width + CARD_GUTTER);
            let y = HEADER_HEIGHT + CARD_GUTTER + row as f32 * (card_height + CARD_GUTTER);

            // Dots centred under the image
            let strip_y = y + image_height + INDICATOR_STRIP * 0.5;
            let span = count.saturating_sub(1) as f32 * INDICATOR_SPACING;
            let first_x = x + card_width * 0.5 - span * 0.5;
            let indicators = (0..count)
                .map(|k| Vector2::new(first_x + k as f32 * INDICATOR_SPACING, strip_y))
                .collect();

            cards.push(CardRects {
                card: Rectangle::new(x, y, card_width, card_height),
                image: Rectangle::new(x, y, card_width, image_height),
                indicators,
                title_pos: Vector2::new(x + 8.0, y + image_height + INDICATOR_STRIP + 6.0),
            });
        }

        let rows = slide_counts.len().div_ceil(columns);
        let content_height = HEADER_HEIGHT + CARD_GUTTER + rows as f32 * (card_height + CARD_GUTTER);

        Layout { cards, content_height }
    }

    pub fn card_at(&self, point: Vector2) -> Option<usize> {
        self.cards.iter().position(|rects| contains(&rects.card, point))
    }
}

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x && point.x <= rect.x + rect.width && point.y >= rect.y && point.y <= rect.y + rect.height
}

// Largest rectangle with the texture's aspect ratio that fits `bounds`, centred.
pub fn fit_into(bounds: &Rectangle, tex_width: f32, tex_height: f32) -> Rectangle {
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return *bounds;
    }
    let scale = (bounds.width / tex_width).min(bounds.height / tex_height);
    let width = tex_width * scale;
    let height = tex_height * scale;
    Rectangle::new(
        bounds.x + (bounds.width - width) * 0.5,
        bounds.y + (bounds.height - height) * 0.5,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_window_gets_single_column() {
        let layout = Layout::compute(300.0, &[2, 3]);
        assert_eq!(layout.cards.len(), 2);
        assert_eq!(layout.cards[0].card.x, layout.cards[1].card.x);
        assert!(layout.cards[1].card.y > layout.cards[0].card.y);
    }

    #[test]
    fn wide_window_packs_cards_in_rows() {
        let width = CARD_GUTTER + 3.0 * (CARD_MIN_WIDTH + CARD_GUTTER);
        let layout = Layout::compute(width, &[1, 1, 1, 1]);
        let ys: Vec<f32> = layout.cards.iter().map(|c| c.card.y).collect();
        assert_eq!(ys[0], ys[1]);
        assert_eq!(ys[1], ys[2]);
        assert!(ys[3] > ys[0]);
        assert!(layout.content_height >= layout.cards[3].card.y + layout.cards[3].card.height);
    }

    #[test]
    fn one_indicator_per_slide_centred_under_image() {
        let layout = Layout::compute(800.0, &[3]);
        let rects = &layout.cards[0];
        assert_eq!(rects.indicators.len(), 3);
        let middle = rects.indicators[1];
        assert!((middle.x - (rects.image.x + rects.image.width * 0.5)).abs() < 0.01);
        assert_eq!(rects.indicator_at(rects.indicators[2]), Some(2));
        assert_eq!(rects.indicator_at(Vector2::new(rects.image.x, middle.y)), None);
    }

    #[test]
    fn title_and_image_clicks_open_the_card() {
        let layout = Layout::compute(800.0, &[3]);
        let rects = &layout.cards[0];
        let on_title = Vector2::new(rects.title_pos.x + 4.0, rects.title_pos.y + 4.0);
        let on_image = Vector2::new(rects.image.x + 10.0, rects.image.y + 10.0);

        assert!(!contains(&rects.image, on_title));
        assert_eq!(rects.click_at(on_title), Some(CardClick::Open));
        assert_eq!(rects.click_at(on_image), Some(CardClick::Open));
        assert_eq!(rects.click_at(rects.indicators[1]), Some(CardClick::Indicator(1)));
        assert_eq!(rects.click_at(Vector2::new(rects.card.x - 5.0, rects.card.y)), None);
    }

    #[test]
    fn hit_tests_cards() {
        let layout = Layout::compute(800.0, &[1, 1]);
        let inside = Vector2::new(layout.cards[1].card.x + 5.0, layout.cards[1].card.y + 5.0);
        assert_eq!(layout.card_at(inside), Some(1));
        assert_eq!(layout.card_at(Vector2::new(1.0, 1.0)), None);
    }

    #[test]
    fn fit_keeps_aspect_and_centres() {
        let bounds = Rectangle::new(0.0, 0.0, 400.0, 300.0);
        let fitted = fit_into(&bounds, 800.0, 800.0);
        assert_eq!(fitted.width, 300.0);
        assert_eq!(fitted.height, 300.0);
        assert_eq!(fitted.x, 50.0);
        assert_eq!(fitted.y, 0.0);
    }
}
