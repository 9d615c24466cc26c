//! Directory walk, adapted from the teacher's `scanner::scan`.

use std::path::PathBuf;

use futures::stream::Stream;
use tokio::sync::mpsc;
use walkdir::WalkDir;

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "wav", "m4a"];

/// Recursively walk `root`, yielding every audio file found as a
/// `Stream` of paths. The walk runs on a blocking thread so it never
/// stalls the async runtime.
pub fn scan(root: PathBuf) -> impl Stream<Item = PathBuf> {
    let (tx, rx) = mpsc::channel(100);

    tokio::task::spawn_blocking(move || {
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let is_audio = path
                .extension()
                .and_then(|s| s.to_str())
                .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
                .unwrap_or(false);
            if is_audio && tx.blocking_send(path.to_path_buf()).is_err() {
                break;
            }
        }
    });

    futures::stream::unfold(rx, |mut rx| async move { rx.recv().await.map(|path| (path, rx)) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::fs::File;
    use tempfile::tempdir;

    #[tokio::test]
    async fn scan_finds_audio_files_case_insensitively_and_recursively() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        File::create(root.join("song.mp3")).unwrap();
        File::create(root.join("notes.txt")).unwrap();
        File::create(root.join("UPPERCASE.OGG")).unwrap();

        let subdir = root.join("subdir");
        std::fs::create_dir(&subdir).unwrap();
        File::create(subdir.join("track.wav")).unwrap();

        let paths: Vec<PathBuf> = scan(root.to_path_buf()).collect().await;
        assert_eq!(paths.len(), 3);

        let names: Vec<String> = paths
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect();
        assert!(names.contains(&"song.mp3".to_string()));
        assert!(names.contains(&"UPPERCASE.OGG".to_string()));
        assert!(names.contains(&"track.wav".to_string()));
        assert!(!names.contains(&"notes.txt".to_string()));
    }
}
