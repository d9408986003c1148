use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Result, TagfillError};
use crate::models::CatalogTrack;
use crate::sources::CatalogSource;

/// 파일명에 쓸 수 없는 문자 `\ / : * ? " < > |`를 모두 `_`로 치환한다.
pub fn sanitize_component(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect()
}

/// `"{앨범 대표 아티스트} - {앨범}.jpg"` 형식의 썸네일 파일명.
/// 앨범 아티스트가 비어 있으면 트랙의 첫 아티스트를 쓴다.
pub fn cover_filename(track: &CatalogTrack) -> Result<String> {
    let artist = track
        .album
        .artists
        .first()
        .or_else(|| track.artists.first())
        .ok_or_else(|| TagfillError::NoCoverName {
            album: track.album.name.clone(),
        })?;

    Ok(format!(
        "{} - {}.jpg",
        sanitize_component(artist),
        sanitize_component(&track.album.name)
    ))
}

/// 앨범 단위로 커버 이미지를 보관하는 썸네일 디렉토리.
/// 같은 파일명이 이미 있으면 네트워크에 접근하지 않는다.
#[derive(Debug, Clone)]
pub struct CoverCache {
    dir: PathBuf,
}

impl CoverCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 트랙 앨범의 커버 경로를 돌려준다. 캐시에 없으면 첫 번째 이미지 URL에서 받아 저장한다.
    ///
    /// 다운로드나 저장에 실패하거나 이미지가 없으면 경고만 남기고 같은 경로를 돌려준다.
    /// 이 경우 반환된 경로에는 파일이 없다.
    pub fn ensure(&self, track: &CatalogTrack, source: &dyn CatalogSource) -> Result<PathBuf> {
        let name = cover_filename(track)?;
        let path = self.dir.join(&name);

        if path.exists() {
            info!("기존 썸네일 사용: {}", name);
            return Ok(path);
        }

        let Some(url) = track.album.image_urls.first() else {
            warn!("앨범에 커버 이미지가 없습니다: {}", track.album.name);
            return Ok(path);
        };

        info!("다운로드 중: {}", name);
        match source.fetch_cover(url) {
            Ok(data) => match self.store(&path, &data) {
                Ok(()) => info!("저장 완료: {}", name),
                Err(e) => warn!("썸네일 저장 실패 ({}): {}", path.display(), e),
            },
            Err(e) => warn!("커버 다운로드 실패 ({}): {:#}", name, e),
        }

        Ok(path)
    }

    fn store(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(path, data)
    }
}
