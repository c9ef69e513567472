use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GalleryError {
    #[error("a carousel needs at least one slide")]
    EmptyCarousel,
    #[error("cannot open the lightbox with an empty image list")]
    EmptySession,
    #[error("start index {index} is out of range for {len} images")]
    StartOutOfRange { index: usize, len: usize },
}
