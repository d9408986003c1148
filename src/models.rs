use std::path::{Path, PathBuf};

/// 오디오 파일에 이미 기록된 태그 중 관심 있는 필드.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<i32>,
    pub track_number: Option<u32>,
    pub has_image: bool,
}

impl FileTags {
    /// 제목, 아티스트, 앨범, 연도, 트랙 번호, 커버 이미지가 모두 채워져 있는지 확인한다.
    pub fn is_complete(&self) -> bool {
        fn filled(s: &Option<String>) -> bool {
            s.as_deref().is_some_and(|s| !s.trim().is_empty())
        }

        filled(&self.title)
            && filled(&self.artist)
            && filled(&self.album)
            && self.year.is_some_and(|y| y != 0)
            && self.track_number.is_some_and(|n| n != 0)
            && self.has_image
    }

    pub fn display(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or("-")
    }
}

/// 카탈로그 검색 결과로 받은 트랙 후보. 읽기 전용.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogTrack {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub album: CatalogAlbum,
    pub track_number: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogAlbum {
    pub name: String,
    pub release_date: Option<String>,
    pub artists: Vec<String>,
    pub image_urls: Vec<String>,
}

impl CatalogTrack {
    /// 모든 아티스트를 `", "`로 연결한다.
    pub fn joined_artists(&self) -> String {
        self.artists.join(", ")
    }

    /// 선택 목록에 함께 표시할 `"아티스트 - 앨범"` 힌트.
    pub fn hint(&self) -> String {
        format!("{} - {}", self.joined_artists(), self.album.name)
    }
}

impl CatalogAlbum {
    /// 발매일 앞부분의 네 자리 연도. `YYYY`, `YYYY-MM`, `YYYY-MM-DD` 모두 처리한다.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_ref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.trim().parse().ok())
    }
}

#[derive(Debug, Clone)]
pub struct AudioFile {
    pub path: PathBuf,
}

impl AudioFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn filename(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("알 수 없음")
    }
}
