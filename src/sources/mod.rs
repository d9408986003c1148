pub mod spotify;

use anyhow::Result;

use crate::models::CatalogTrack;

/// 음악 카탈로그 트레이트.
/// 실제 Spotify API와 테스트용 가짜 구현을 이 트레이트로 추상화한다.
pub trait CatalogSource {
    /// 쿼리 문자열로 트랙을 검색한다. 최대 `limit`개.
    fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<CatalogTrack>>;
    /// ID로 트랙 하나를 가져온다.
    fn get_track(&self, id: &str) -> Result<CatalogTrack>;
    /// 앨범 커버 이미지를 다운로드한다.
    fn fetch_cover(&self, url: &str) -> Result<Vec<u8>>;
}
