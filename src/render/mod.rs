pub mod card;
pub mod engine;
pub mod layout;
pub mod overlay;
