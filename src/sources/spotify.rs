use std::cell::RefCell;

use anyhow::{Context, Result};
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use crate::config::Settings;
use crate::models::{CatalogAlbum, CatalogTrack};
use crate::sources::CatalogSource;

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const API_URL: &str = "https://api.spotify.com/v1";

/// Spotify Web API 클라이언트.
/// 첫 API 요청 때 client credentials 방식으로 인증하고, 받은 토큰을 실행 내내 재사용한다.
pub struct SpotifyClient {
    client: reqwest::blocking::Client,
    client_id: String,
    client_secret: String,
    access_token: RefCell<Option<String>>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    tracks: TracksResult,
}

#[derive(Deserialize)]
struct TracksResult {
    items: Vec<SpotifyTrack>,
}

#[derive(Deserialize)]
struct SpotifyTrack {
    id: String,
    name: String,
    artists: Vec<SpotifyArtist>,
    album: SpotifyAlbum,
    track_number: u32,
}

#[derive(Deserialize)]
struct SpotifyArtist {
    name: String,
}

#[derive(Deserialize)]
struct SpotifyAlbum {
    name: String,
    release_date: Option<String>,
    #[serde(default)]
    artists: Vec<SpotifyArtist>,
    #[serde(default)]
    images: Vec<SpotifyImage>,
}

#[derive(Deserialize)]
struct SpotifyImage {
    url: String,
}

impl SpotifyClient {
    /// 네트워크에는 접근하지 않는다. 인증은 첫 검색/조회 때 일어난다.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .context("Spotify HTTP 클라이언트 생성에 실패했습니다")?;

        Ok(Self {
            client,
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
            access_token: RefCell::new(None),
        })
    }

    fn token(&self) -> Result<String> {
        if let Some(token) = self.access_token.borrow().as_ref() {
            return Ok(token.clone());
        }

        let token = Self::authenticate(&self.client, &self.client_id, &self.client_secret)?;
        debug!("Spotify 인증 완료");
        *self.access_token.borrow_mut() = Some(token.clone());
        Ok(token)
    }

    #[cfg(test)]
    fn is_authenticated(&self) -> bool {
        self.access_token.borrow().is_some()
    }

    fn authenticate(
        client: &reqwest::blocking::Client,
        client_id: &str,
        client_secret: &str,
    ) -> Result<String> {
        let credentials = format!("{}:{}", client_id, client_secret);
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);

        let resp: TokenResponse = client
            .post(TOKEN_URL)
            .header("Authorization", format!("Basic {}", encoded))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .context("Spotify 연결에 실패했습니다")?
            .error_for_status()
            .context("Spotify 인증에 실패했습니다. client_id와 client_secret를 확인하세요.")?
            .json()
            .context("Spotify 토큰 응답 파싱에 실패했습니다")?;

        Ok(resp.access_token)
    }

    fn convert_track(track: SpotifyTrack) -> CatalogTrack {
        CatalogTrack {
            id: track.id,
            name: track.name,
            artists: track.artists.into_iter().map(|a| a.name).collect(),
            album: CatalogAlbum {
                name: track.album.name,
                release_date: track.album.release_date,
                artists: track.album.artists.into_iter().map(|a| a.name).collect(),
                image_urls: track.album.images.into_iter().map(|img| img.url).collect(),
            },
            track_number: track.track_number,
        }
    }
}

impl CatalogSource for SpotifyClient {
    fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<CatalogTrack>> {
        let token = self.token()?;
        let limit = limit.to_string();
        let resp: SearchResponse = self
            .client
            .get(format!("{}/search", API_URL))
            .bearer_auth(&token)
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .send()
            .context("Spotify 검색에 실패했습니다")?
            .error_for_status()
            .context("Spotify 검색 요청이 실패했습니다")?
            .json()
            .context("Spotify 검색 응답 파싱에 실패했습니다")?;

        debug!("검색 결과 {}개: {}", resp.tracks.items.len(), query);
        Ok(resp
            .tracks
            .items
            .into_iter()
            .map(Self::convert_track)
            .collect())
    }

    fn get_track(&self, id: &str) -> Result<CatalogTrack> {
        let token = self.token()?;
        let track: SpotifyTrack = self
            .client
            .get(format!("{}/tracks/{}", API_URL, id))
            .bearer_auth(&token)
            .send()
            .context("Spotify 트랙 조회에 실패했습니다")?
            .error_for_status()
            .with_context(|| format!("Spotify 트랙을 찾을 수 없습니다: {}", id))?
            .json()
            .context("Spotify 트랙 응답 파싱에 실패했습니다")?;

        Ok(Self::convert_track(track))
    }

    fn fetch_cover(&self, url: &str) -> Result<Vec<u8>> {
        let data = self
            .client
            .get(url)
            .send()
            .context("앨범 아트 다운로드에 실패했습니다")?
            .error_for_status()?
            .bytes()?
            .to_vec();

        Ok(data)
    }
}
