use std::path::Path;

use anyhow::{Context, Result};
use seekpoint_types::TrackInfo;

/// Load a track description from a TOML file.
pub fn load_track(path: &Path) -> Result<TrackInfo> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("read track {:?}", path))?;
    let track =
        toml::from_str::<TrackInfo>(&raw).with_context(|| format!("parse track {:?}", path))?;
    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_track(name: &str, contents: &str) -> std::path::PathBuf {
        let root = std::env::temp_dir().join(format!(
            "seekpoints-sim-track-{}-{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let _ = std::fs::create_dir_all(&root);
        let path = root.join("track.toml");
        let _ = std::fs::write(&path, contents);
        path
    }

    #[test]
    fn load_track_reads_bookmarks() {
        let path = temp_track(
            "marks",
            r#"
title = "Live at the Hall"
length_ms = 240000

[[bookmarks]]
name = "A"
time = 12

[[bookmarks]]
name = "B"
time = 200
"#,
        );

        let track = load_track(&path).unwrap();
        assert_eq!(track.title, "Live at the Hall");
        assert_eq!(track.length_ms, 240_000);
        let bookmarks = track.bookmarks.unwrap();
        assert_eq!(bookmarks.len(), 2);
        assert_eq!(bookmarks[1].name, "B");
        assert_eq!(bookmarks[1].time, 200);
    }

    #[test]
    fn load_track_without_bookmarks_has_no_support() {
        let path = temp_track("plain", "title = \"stream\"\nlength_ms = 1000\n");
        let track = load_track(&path).unwrap();
        assert!(track.bookmarks.is_none());
    }

    #[test]
    fn load_track_reports_missing_file() {
        let err = load_track(Path::new("/nonexistent/seekpoints/track.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("read track"));
    }
}
