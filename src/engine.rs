use anyhow::Result;
use raylib::prelude::*;
use crate::texture_loader::CardPaths;

pub trait Engine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, cards: Vec<CardPaths>) -> Result<()>;
    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread);
}
