//! 태그 작업 공통 에러 타입.
//!
//! - 시작 단계 에러(설정 누락, 잘못된 디렉토리): 치명적, 실행 중단
//! - 파일 단위 에러(선택한 트랙 없음, 태그 읽기/쓰기 실패): 보고 후 다음 파일로 진행
//! - 입력 불가, 디스크 쓰기 실패: 치명적

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagfillError {
    #[error("{0} 환경 변수가 설정되지 않았습니다")]
    MissingConfig(&'static str),

    #[error("설정 파일을 읽을 수 없습니다 ({path}): {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("{0}은(는) 디렉토리가 아닙니다")]
    NotADirectory(PathBuf),

    #[error("선택한 트랙({id})을 검색 결과에서 찾을 수 없습니다")]
    TrackNotInResults { id: String },

    #[error("앨범 아티스트가 없어 썸네일 파일명을 만들 수 없습니다: {album}")]
    NoCoverName { album: String },

    #[error("ID3 태그 처리에 실패했습니다 ({path}): {source}")]
    Tag {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },

    #[error("입력을 받을 수 없습니다: {0}")]
    Prompt(String),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),
}

impl TagfillError {
    /// 파일 하나만 포기하고 실행을 계속할 수 있는 에러인지 여부.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TagfillError::TrackNotInResults { .. }
                | TagfillError::NoCoverName { .. }
                | TagfillError::Tag { .. }
        )
    }

    pub fn tag(path: impl Into<PathBuf>, source: id3::Error) -> Self {
        TagfillError::Tag {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TagfillError>;
