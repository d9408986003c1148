use std::path::{Path, PathBuf};

use id3::{Tag, TagLike, Version};
use tracing::warn;

use crate::error::{Result, TagfillError};
use crate::models::FileTags;

/// 태그 쓰기 단계에서 기록할 값.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagUpdate {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub track_number: u32,
    pub year: Option<i32>,
    pub cover: Option<PathBuf>,
}

/// ID3 태그가 파일 안 어디에 들어 있는지.
/// WAV/AIFF는 청크 안에, 나머지는 파일 앞부분에 기록된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Leading,
    Wav,
    Aiff,
}

fn container(path: &Path) -> Container {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("wav") => Container::Wav,
        Some("aif") | Some("aiff") => Container::Aiff,
        _ => Container::Leading,
    }
}

fn read_tag(path: &Path) -> id3::Result<Tag> {
    match container(path) {
        Container::Leading => Tag::read_from_path(path),
        Container::Wav => Tag::read_from_wav_path(path),
        Container::Aiff => Tag::read_from_aiff_path(path),
    }
}

fn write_tag(tag: &Tag, path: &Path) -> id3::Result<()> {
    match container(path) {
        Container::Leading => tag.write_to_path(path, Version::Id3v24),
        Container::Wav => tag.write_to_wav_path(path, Version::Id3v24),
        Container::Aiff => tag.write_to_aiff_path(path, Version::Id3v24),
    }
}

fn is_no_tag(err: &id3::Error) -> bool {
    matches!(err.kind, id3::ErrorKind::NoTag)
}

/// 파일의 ID3 태그를 읽는다. 태그가 없으면 모든 필드가 빈 FileTags를 돌려준다.
pub fn read_tags(path: &Path) -> Result<FileTags> {
    let tag = match read_tag(path) {
        Ok(tag) => tag,
        Err(e) if is_no_tag(&e) => return Ok(FileTags::default()),
        Err(e) => return Err(TagfillError::tag(path, e)),
    };

    let tags = FileTags {
        title: tag.title().map(|s| s.to_string()),
        artist: tag.artist().map(|s| s.to_string()),
        album: tag.album().map(|s| s.to_string()),
        year: tag
            .year()
            .or_else(|| tag.date_recorded().map(|ts| ts.year)),
        track_number: tag.track(),
        has_image: tag.pictures().next().is_some(),
    };
    Ok(tags)
}

/// 기존 태그 위에 새 값을 덮어써서 ID3v2.4로 기록한다.
/// 커버 파일이 없으면 이미지는 건드리지 않고 나머지만 기록한다.
/// 기존 태그를 읽을 수 없으면 덮어쓰지 않고 에러를 돌려준다.
pub fn write_tags(path: &Path, update: &TagUpdate) -> Result<()> {
    let mut tag = match read_tag(path) {
        Ok(tag) => tag,
        Err(e) if is_no_tag(&e) => Tag::new(),
        Err(e) => return Err(TagfillError::tag(path, e)),
    };

    tag.set_title(&update.title);
    tag.set_artist(&update.artist);
    tag.set_album(&update.album);
    tag.set_track(update.track_number);
    if let Some(year) = update.year {
        tag.set_year(year);
    }

    if let Some(ref cover) = update.cover {
        if cover.is_file() {
            let data = std::fs::read(cover)?;
            tag.remove_all_pictures();
            tag.add_frame(id3::frame::Picture {
                mime_type: detect_mime_type(&data),
                picture_type: id3::frame::PictureType::CoverFront,
                description: String::new(),
                data,
            });
        } else {
            warn!("커버 이미지 파일이 없습니다: {}", cover.display());
        }
    }

    write_tag(&tag, path).map_err(|e| TagfillError::tag(path, e))
}

/// 파일의 ID3 태그를 모두 지운다. 지울 태그가 있었으면 true.
/// WAV/AIFF는 ID3 청크를 빈 태그로 다시 쓴다.
pub fn remove_tags(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Err(TagfillError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("파일을 찾을 수 없습니다: {}", path.display()),
        )));
    }

    match container(path) {
        Container::Leading => Tag::remove_from_path(path).map_err(|e| TagfillError::tag(path, e)),
        Container::Wav | Container::Aiff => match read_tag(path) {
            Ok(_) => {
                write_tag(&Tag::new(), path).map_err(|e| TagfillError::tag(path, e))?;
                Ok(true)
            }
            Err(e) if is_no_tag(&e) => Ok(false),
            Err(e) => Err(TagfillError::tag(path, e)),
        },
    }
}

/// 이미지 바이너리의 매직 바이트로 MIME 타입을 판별한다.
fn detect_mime_type(data: &[u8]) -> String {
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        "image/png".to_string()
    } else {
        "image/jpeg".to_string()
    }
}
