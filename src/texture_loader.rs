use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use rand::seq::SliceRandom;
use raylib::prelude::*;

use crate::config::GalleryConfig;
use crate::constants::IMAGE_EXTENSIONS;

// Image files backing one card, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPaths {
    pub title: String,
    pub paths: Vec<PathBuf>,
}

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn dir_title(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Gallery".to_string())
}

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && is_image_path(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

// --- One card per sub-directory, plus one for loose images in the root ---
pub fn scan_cards(root: &Path) -> Result<Vec<CardPaths>> {
    let mut cards = Vec::new();

    let loose = load_sorted_image_paths(root)?;
    if !loose.is_empty() {
        cards.push(CardPaths { title: dir_title(root), paths: loose });
    }

    let mut dirs: Vec<PathBuf> = fs::read_dir(root)
        .with_context(|| format!("failed to read directory {}", root.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    for dir in dirs {
        let paths = load_sorted_image_paths(&dir)?;
        if paths.is_empty() {
            tracing::debug!("skipping {}: no images", dir.display());
            continue;
        }
        cards.push(CardPaths { title: dir_title(&dir), paths });
    }

    tracing::info!("found {} cards under {}", cards.len(), root.display());
    Ok(cards)
}

// Manifest entries are relative to the manifest's own directory.
pub fn manifest_cards(config: &GalleryConfig, base: &Path) -> Vec<CardPaths> {
    config
        .cards
        .iter()
        .map(|card| CardPaths {
            title: card.title.clone(),
            paths: card.images.iter().map(|p| base.join(p)).collect(),
        })
        .collect()
}

pub fn shuffle_cards(cards: &mut [CardPaths]) {
    let mut rng = rand::rng();
    for card in cards.iter_mut() {
        card.paths.shuffle(&mut rng);
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read file {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only read reliably from JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(&file_bytes, image_path)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("failed to decode {}: {e}", image_path.display()))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Flipped orientations are left as-is.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if matches!(orientation, 3 | 6 | 8) {
        tracing::debug!("applied EXIF orientation {orientation} to {}", image_path.display());
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {e}", image_path.display()))?;

    Ok(texture)
}

fn read_orientation(file_bytes: &[u8], image_path: &Path) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            tracing::warn!("could not read EXIF data for {}: {e}", image_path.display());
            1
        }
    }
}
