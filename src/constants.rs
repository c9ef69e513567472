pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 800;           // Default window height
pub const FPS: u32 = 60;                      // Target frames per second

pub const CAROUSEL_INTERVAL: f32 = 4.5;       // Time between auto-advances (seconds)
pub const MIN_INTERVAL: f32 = 0.05;           // Shortest accepted auto-advance interval (seconds)
pub const MAX_TIMER_FIRES: u32 = 64;          // Fires reported for a single update at most
pub const FADE_DURATION: f32 = 0.6;           // Cross-fade between two slides (seconds)

pub const CARD_MIN_WIDTH: f32 = 320.0;        // Columns are added while cards stay at least this wide
pub const CARD_ASPECT: f32 = 0.75;            // Image area height / width
pub const CARD_GUTTER: f32 = 24.0;            // Space between cards and around the grid
pub const HEADER_HEIGHT: f32 = 72.0;          // Gallery title strip
pub const INDICATOR_STRIP: f32 = 28.0;        // Row of slide indicators below the image
pub const INDICATOR_RADIUS: f32 = 5.0;
pub const INDICATOR_SPACING: f32 = 18.0;
pub const TITLE_STRIP: f32 = 32.0;            // Card title below the indicators
pub const SCROLL_SPEED: f32 = 60.0;           // Pixels per wheel notch

pub const LIGHTBOX_MARGIN: f32 = 0.9;         // Share of the screen a lightbox image may fill
pub const LIGHTBOX_BUTTON: f32 = 48.0;        // Close/prev/next hit box size

pub const MANIFEST_NAME: &str = "gallery.toml";
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
