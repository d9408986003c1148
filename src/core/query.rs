use lazy_static::lazy_static;
use regex::Regex;

use crate::models::FileTags;

lazy_static! {
    static ref TRACK_URL_REGEX: Regex =
        Regex::new(r"https://open\.spotify\.com/track/([a-zA-Z0-9]+)(\?[^#]*)?")
            .expect("valid track url regex");
    static ref VOCAL_MARKER_REGEX: Regex =
        Regex::new(r"(?i)instrumental|offvocal").expect("valid vocal marker regex");
}

/// 파일에 이미 있는 태그로 미리 채울 검색어를 만든다.
///
/// 제목과 아티스트가 모두 있을 때만 만든다. 제목의 "instrumental", "offvocal" 표기는
/// 대소문자 구분 없이 지운다.
pub fn initial_query(tags: &FileTags) -> Option<String> {
    let title = tags.title.as_deref().filter(|s| !s.is_empty())?;
    let artist = tags.artist.as_deref().filter(|s| !s.is_empty())?;
    let cleaned = VOCAL_MARKER_REGEX.replace_all(title, "");
    Some(format!("{} {}", cleaned, artist))
}

/// 입력 어딘가에 있는 `open.spotify.com/track/<id>` URL에서 트랙 ID를 꺼낸다.
pub fn parse_track_url(query: &str) -> Option<&str> {
    TRACK_URL_REGEX
        .captures(query)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
