use std::path::Path;

use tracing::debug;

use crate::core::skiplist::SkipList;
use crate::error::{Result, TagfillError};
use crate::models::AudioFile;

/// 처리 대상으로 인식하는 확장자. `aiff`는 `aif`의 별칭이다.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "m4a", "aif", "aiff", "wav"];

/// 디렉토리 바로 아래의 오디오 파일을 나열한다 (하위 디렉토리는 보지 않는다).
/// 건너뛰기 목록에 들어 있는 파일은 제외한다. 순서는 파일시스템이 돌려준 그대로다.
pub fn scan_directory(dir: &Path, skip: &SkipList) -> Result<Vec<AudioFile>> {
    if !dir.is_dir() {
        return Err(TagfillError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() || !is_audio(&path) {
            continue;
        }

        let file = AudioFile::new(path);
        if skip.contains(file.filename()) {
            debug!("건너뛰기 목록에 있음: {}", file.filename());
            continue;
        }
        files.push(file);
    }

    Ok(files)
}

/// 확장자가 인식 대상인지 확인한다 (대소문자 무시).
pub fn is_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn names(files: &[AudioFile]) -> Vec<String> {
        let mut names: Vec<String> = files.iter().map(|f| f.filename().to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_is_audio() {
        assert!(is_audio(&PathBuf::from("a.mp3")));
        assert!(is_audio(&PathBuf::from("a.FLAC")));
        assert!(is_audio(&PathBuf::from("a.m4a")));
        assert!(is_audio(&PathBuf::from("a.aif")));
        assert!(is_audio(&PathBuf::from("a.wav")));
        assert!(!is_audio(&PathBuf::from("a.ogg")));
        assert!(!is_audio(&PathBuf::from("cover.jpg")));
        assert!(!is_audio(&PathBuf::from("mp3")));
    }

    #[test]
    fn test_scan_filters_extensions_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["one.mp3", "two.flac", "three.wav", "notes.txt", "gone.mp3"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.mp3")).unwrap();

        let skip = SkipList::from_content(dir.path().join("skipped.txt"), "\ngone.mp3");
        let files = scan_directory(dir.path(), &skip).unwrap();
        assert_eq!(names(&files), vec!["one.mp3", "three.wav", "two.flac"]);
    }

    #[test]
    fn test_substring_skip_is_reproduced() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("song.mp3"), b"x").unwrap();

        // "song.mp3"는 "long song.mp3"의 부분 문자열이므로 함께 걸러진다.
        let skip = SkipList::from_content(dir.path().join("skipped.txt"), "\nlong song.mp3");
        let files = scan_directory(dir.path(), &skip).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.mp3");
        std::fs::write(&file, b"x").unwrap();
        let skip = SkipList::from_content(dir.path().join("skipped.txt"), "");
        assert!(matches!(
            scan_directory(&file, &skip),
            Err(TagfillError::NotADirectory(_))
        ));
    }
}
