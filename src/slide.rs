// Index into the texture store owned by the render engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub image: ImageId,
    pub active: bool,
}

impl Slide {
    pub fn new(image: ImageId) -> Self {
        Self { image, active: false }
    }
}

// Marker bound to the slide at the same position.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub slide: usize,
    pub active: bool,
}

impl Indicator {
    pub fn new(slide: usize) -> Self {
        Self { slide, active: false }
    }
}
