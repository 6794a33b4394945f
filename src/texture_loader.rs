use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::debug;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Collect image files from a directory, sorted by file name so the cycle
/// order is stable. An empty result is not an error; the caller decides
/// whether an empty cycle is acceptable.
pub fn scan_image_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.context("failed to read directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|s| s.to_str())
            && IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str())
        {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// EXIF orientation tag of a JPEG byte stream. Defaults to 1 (no rotation)
/// when the tag is absent or the container cannot be parsed.
fn exif_orientation(bytes: &[u8]) -> u16 {
    let Ok(exif) = Reader::new().read_from_container(&mut Cursor::new(bytes)) else {
        return 1;
    };
    if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY)
        && let Value::Short(values) = &field.value
        && let Some(&value) = values.first()
    {
        return value;
    }
    1
}

/// Load an image file into a texture, baking in any EXIF rotation so the
/// cycler never has to care about orientation.
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

    // Orientation metadata is only reliable for JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("failed to decode {}: {}", image_path.display(), e))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; mirrored variants are rare
    // enough to ignore
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(
            path = %image_path.display(),
            orientation, "applied EXIF rotation"
        );
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", image_path.display(), e))?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "notes.txt", "c.JPEG"] {
            File::create(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("sub.png")).unwrap(); // directory, not a file

        let paths = scan_image_dir(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "c.JPEG"]);
    }

    #[test]
    fn test_scan_empty_dir_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_image_dir(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_dir_fails() {
        assert!(scan_image_dir(Path::new("/no/such/dir")).is_err());
    }

    #[test]
    fn test_orientation_defaults_to_upright() {
        assert_eq!(exif_orientation(b"not a jpeg at all"), 1);
        assert_eq!(exif_orientation(&[]), 1);
    }
}
