//! tagfill - Spotify 카탈로그로 로컬 오디오 파일의 빠진 ID3 태그를 채우는 도구.
//!
//! - `tagfill <DIRECTORY> [--instrumental]`: 디렉토리의 태그 없는 파일을 대화식으로 채운다
//! - `tagclear <FILE>`: 파일의 ID3 태그를 모두 지운다

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod filler;
pub mod models;
pub mod prompt;
pub mod sources;

pub use error::{Result, TagfillError};
