use std::fs;
use std::path::PathBuf;

use image::RgbaImage;
use photocell_sim::render::SpriteId;
use photocell_sim::{Assets, SimError};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("photocell-sim-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_missing_directory_gives_empty_registry() {
    let assets = Assets::load(&PathBuf::from("no/such/asset/dir")).unwrap();
    assert!(assets.is_empty());
    assert!(assets.get(SpriteId::Electron).is_none());
}

#[test]
fn test_sprites_are_scaled_on_load() {
    let dir = scratch_dir("scaled");
    RgbaImage::new(64, 64)
        .save(dir.join(SpriteId::Electron.file_name()))
        .unwrap();

    let assets = Assets::load(&dir).unwrap();
    assert_eq!(assets.len(), 1);
    let electron = assets.get(SpriteId::Electron).unwrap();
    assert_eq!(electron.dimensions(), SpriteId::Electron.size());
    assert!(assets.get(SpriteId::SliderCursor).is_none());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_corrupt_sprite_is_an_error() {
    let dir = scratch_dir("corrupt");
    fs::write(dir.join(SpriteId::SliderCursor.file_name()), b"not a png").unwrap();

    let err = Assets::load(&dir).err().unwrap();
    assert!(matches!(err, SimError::Asset { .. }));

    fs::remove_dir_all(&dir).unwrap();
}
