// Platform-neutral input delivered to the components by the render engine.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

// What a click inside the lightbox overlay landed on.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LightboxTarget {
    Background, // The dimmed area around the image
    Content,    // The image or counter
    Close,
    Prev,
    Next,
}
