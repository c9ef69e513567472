use crate::error::GalleryError;
use crate::slide::{ImageId, Indicator, Slide};
use crate::timer::RecurringTimer;

pub struct Carousel {
    slides: Vec<Slide>,
    indicators: Vec<Indicator>,
    current_slide: usize,
    is_paused: bool,
    timer: RecurringTimer,
}

impl Carousel {
    /// Builds a carousel over `images` with slide 0 active and the
    /// auto-advance timer already running.
    pub fn new(images: Vec<ImageId>, interval: f32) -> Result<Self, GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::EmptyCarousel);
        }

        let indicators = (0..images.len()).map(Indicator::new).collect();
        let slides = images.into_iter().map(Slide::new).collect();

        let mut carousel = Self {
            slides,
            indicators,
            current_slide: 0,
            is_paused: false,
            timer: RecurringTimer::new(interval),
        };
        carousel.set_active(0, true);
        carousel.start();
        Ok(carousel)
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn current_image(&self) -> ImageId {
        self.slides[self.current_slide].image
    }

    #[cfg(test)]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn images(&self) -> Vec<ImageId> {
        self.slides.iter().map(|slide| slide.image).collect()
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn go_to_slide(&mut self, index: usize) {
        debug_assert!(index < self.slides.len(), "slide {index} out of range");
        if index >= self.slides.len() {
            return;
        }

        self.set_active(self.current_slide, false);
        self.current_slide = index;
        self.set_active(self.current_slide, true);
    }

    pub fn next_slide(&mut self) {
        let next = (self.current_slide + 1) % self.slides.len();
        self.go_to_slide(next);
    }

    pub fn start(&mut self) {
        self.timer.start();
    }

    pub fn stop(&mut self) {
        self.timer.stop();
    }

    pub fn pause(&mut self) {
        self.is_paused = true;
    }

    pub fn resume(&mut self) {
        self.is_paused = false;
    }

    // --- Event handlers called by the platform adapter ---

    // The timer keeps its phase while paused; only the advance is suppressed.
    pub fn on_tick(&mut self, dt: f32) {
        for _ in 0..self.timer.update(dt) {
            if !self.is_paused {
                self.next_slide();
            }
        }
    }

    pub fn on_indicator_click(&mut self, index: usize) {
        if let Some(indicator) = self.indicators.get(index) {
            let slide = indicator.slide;
            self.go_to_slide(slide);
        }
    }

    pub fn on_hover_enter(&mut self) {
        self.pause();
    }

    pub fn on_hover_leave(&mut self) {
        self.resume();
    }

    fn set_active(&mut self, index: usize, active: bool) {
        self.slides[index].active = active;
        self.indicators[index].active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CAROUSEL_INTERVAL;

    fn carousel(n: usize) -> Carousel {
        Carousel::new((0..n).map(ImageId).collect(), CAROUSEL_INTERVAL).unwrap()
    }

    fn active_pairs(c: &Carousel) -> Vec<usize> {
        let slides: Vec<usize> = c.slides().iter().enumerate().filter(|(_, s)| s.active).map(|(i, _)| i).collect();
        let indicators: Vec<usize> = c.indicators().iter().enumerate().filter(|(_, s)| s.active).map(|(i, _)| i).collect();
        assert_eq!(slides, indicators, "slide and indicator must stay paired");
        slides
    }

    #[test]
    fn rejects_empty_slide_list() {
        assert_eq!(Carousel::new(Vec::new(), 1.0).err(), Some(GalleryError::EmptyCarousel));
    }

    #[test]
    fn starts_at_first_slide_with_timer_running() {
        let c = carousel(3);
        assert_eq!(c.current_slide(), 0);
        assert_eq!(active_pairs(&c), vec![0]);
        assert!(c.is_running());
        assert!(!c.is_paused());
    }

    #[test]
    fn next_slide_cycles_and_wraps() {
        for n in 1..=6 {
            let mut c = carousel(n);
            for step in 1..=n {
                c.next_slide();
                assert_eq!(c.current_slide(), step % n);
            }
            assert_eq!(c.current_slide(), 0, "wrapped after {n} calls");
        }
    }

    #[test]
    fn exactly_one_active_pair_after_any_jumps() {
        let mut c = carousel(5);
        for &index in &[4, 4, 0, 2, 1, 3, 3, 0] {
            c.go_to_slide(index);
            assert_eq!(active_pairs(&c), vec![index]);
            assert_eq!(c.current_image(), ImageId(index));
        }
    }

    #[test]
    fn indicator_click_jumps_to_bound_slide() {
        let mut c = carousel(4);
        c.on_indicator_click(2);
        assert_eq!(c.current_slide(), 2);
        c.on_indicator_click(9);
        assert_eq!(c.current_slide(), 2);
    }

    #[test]
    fn tick_advances_once_per_interval() {
        let mut c = carousel(3);
        c.on_tick(4.0);
        assert_eq!(c.current_slide(), 0);
        c.on_tick(0.5);
        assert_eq!(c.current_slide(), 1);
        c.on_tick(9.0);
        assert_eq!(c.current_slide(), 0);
    }

    #[test]
    fn paused_ticks_leave_slide_unchanged_until_resume() {
        let mut c = carousel(3);
        c.on_hover_enter();
        for _ in 0..10 {
            c.on_tick(CAROUSEL_INTERVAL);
        }
        assert_eq!(c.current_slide(), 0);
        assert!(c.is_running());

        c.on_hover_leave();
        c.on_tick(CAROUSEL_INTERVAL);
        assert_eq!(c.current_slide(), 1);
    }

    #[test]
    fn last_hover_event_wins() {
        let mut c = carousel(2);
        c.on_hover_enter();
        c.on_hover_leave();
        c.on_hover_enter();
        assert!(c.is_paused());
        c.on_hover_leave();
        assert!(!c.is_paused());
    }

    #[test]
    fn stop_freezes_auto_advance() {
        let mut c = carousel(3);
        c.stop();
        c.on_tick(100.0);
        assert_eq!(c.current_slide(), 0);
        c.next_slide();
        assert_eq!(c.current_slide(), 1);
    }
}
