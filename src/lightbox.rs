use crate::error::GalleryError;
use crate::events::{Key, LightboxTarget};
use crate::scroll::{ScrollLock, ScrollLocker};
use crate::slide::ImageId;
use crate::state::ModalState;

// What the overlay currently shows. Built once, rewritten by `show_image`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightboxView {
    pub image: Option<ImageId>,
    pub counter: String,
    pub show_nav: bool,
}

pub struct Lightbox {
    images: Vec<ImageId>,
    current_index: usize,
    state: ModalState,
    view: LightboxView,
    locker: ScrollLocker,
    scroll_lock: Option<ScrollLock>,
}

impl Lightbox {
    pub fn new(locker: ScrollLocker) -> Self {
        Self {
            images: Vec::new(),
            current_index: 0,
            state: ModalState::Closed,
            view: LightboxView::default(),
            locker,
            scroll_lock: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[cfg(test)]
    pub fn images(&self) -> &[ImageId] {
        &self.images
    }

    pub fn view(&self) -> &LightboxView {
        &self.view
    }

    /// Starts a browsing session, replacing any session already on screen.
    pub fn open(&mut self, images: Vec<ImageId>, start_index: usize) -> Result<(), GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::EmptySession);
        }
        if start_index >= images.len() {
            return Err(GalleryError::StartOutOfRange { index: start_index, len: images.len() });
        }

        self.images = images;
        self.current_index = start_index;
        self.show_image();
        self.state = ModalState::Open;
        if self.scroll_lock.is_none() {
            self.scroll_lock = Some(self.locker.acquire());
        }

        tracing::debug!("lightbox opened at {} of {}", start_index + 1, self.images.len());
        Ok(())
    }

    // Safe to call repeatedly: the lock can only be taken once.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        if self.scroll_lock.take().is_some() {
            tracing::debug!("lightbox closed");
        }
    }

    pub fn next(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.images.len();
        self.show_image();
    }

    pub fn prev(&mut self) {
        if self.images.is_empty() {
            return;
        }
        let len = self.images.len();
        self.current_index = (self.current_index + len - 1) % len;
        self.show_image();
    }

    fn show_image(&mut self) {
        self.view.image = self.images.get(self.current_index).copied();
        self.view.counter = format!("{} / {}", self.current_index + 1, self.images.len());
        self.view.show_nav = self.images.len() > 1;
    }

    // --- Event handlers called by the platform adapter ---

    pub fn on_key(&mut self, key: Key) {
        if !self.is_open() {
            return;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => {}
        }
    }

    pub fn on_click(&mut self, target: LightboxTarget) {
        if !self.is_open() {
            return;
        }
        match target {
            LightboxTarget::Background | LightboxTarget::Close => self.close(),
            LightboxTarget::Prev => self.prev(),
            LightboxTarget::Next => self.next(),
            LightboxTarget::Content => {}
        }
    }
}
