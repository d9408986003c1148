//! 디렉토리 단위 태그 채우기.
//!
//! 파일 하나씩 순서대로 처리한다. 태그가 모두 있는 파일은 건드리지 않고,
//! 빠진 필드가 있으면 검색어 입력 → (트랙 선택) → 커버 확보 → 태그 기록 순서로 진행한다.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, error, info};

use crate::core::cover::CoverCache;
use crate::core::skiplist::SkipList;
use crate::core::tagger::{self, TagUpdate};
use crate::core::{query, scanner};
use crate::error::TagfillError;
use crate::models::{AudioFile, CatalogTrack};
use crate::prompt::{self, Choice, Prompter};
use crate::sources::CatalogSource;

/// 검색 결과 최대 개수.
pub const SEARCH_LIMIT: u32 = 10;
/// 선택 목록의 "건너뛰기" 항목 ID.
pub const SKIP_CHOICE: &str = "skip";

const QUERY_PROMPT: &str = "태그가 없습니다. Spotify 검색어 또는 트랙 URL을 입력하세요 (비워 두면 건너뜀)";
const SELECT_PROMPT: &str = "트랙을 선택하세요 (또는 건너뛰기)";

/// 파일 하나의 처리 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 필요한 태그가 이미 모두 있음
    AlreadyTagged,
    /// 작업자가 건너뜀. 건너뛰기 목록에 기록됨
    Skipped,
    /// 카탈로그 정보로 태그를 기록함
    Tagged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub tagged: usize,
    pub skipped: usize,
    pub complete: usize,
    pub failed: usize,
}

pub struct Filler<'a> {
    source: &'a dyn CatalogSource,
    prompter: &'a dyn Prompter,
    covers: CoverCache,
    skip: SkipList,
    instrumental: bool,
}

impl<'a> Filler<'a> {
    pub fn new(
        source: &'a dyn CatalogSource,
        prompter: &'a dyn Prompter,
        covers: CoverCache,
        skip: SkipList,
        instrumental: bool,
    ) -> Self {
        Self {
            source,
            prompter,
            covers,
            skip,
            instrumental,
        }
    }

    /// 디렉토리의 모든 대상 파일을 처리한다.
    /// 파일 단위 에러는 기록만 하고 다음 파일로 넘어간다. 입력 불가나 디스크 에러는 중단한다.
    pub fn run(&mut self, dir: &Path) -> Result<RunSummary> {
        let files = scanner::scan_directory(dir, &self.skip)?;
        info!("대상 파일 {}개: {}", files.len(), dir.display());

        let mut summary = RunSummary {
            total: files.len(),
            ..Default::default()
        };

        for file in &files {
            match self.process_file(file) {
                Ok(Outcome::Tagged) => summary.tagged += 1,
                Ok(Outcome::Skipped) => summary.skipped += 1,
                Ok(Outcome::AlreadyTagged) => summary.complete += 1,
                Err(e) if is_fatal(&e) => return Err(e),
                Err(e) => {
                    error!("{}: {:#}", file.filename(), e);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    pub fn process_file(&mut self, file: &AudioFile) -> Result<Outcome> {
        let tags = tagger::read_tags(file.path())?;

        if tags.is_complete() {
            info!("이미 태그가 있는 파일: {}", file.filename());
            return Ok(Outcome::AlreadyTagged);
        }

        println!("{}", prompt::tags_table(file.filename(), &tags));

        let initial = query::initial_query(&tags);
        let query = self.prompter.ask_text(QUERY_PROMPT, initial.as_deref())?;
        if query.is_empty() {
            return self.mark_skipped(file);
        }

        let Some(track) = self.resolve(&query)? else {
            return self.mark_skipped(file);
        };
        debug!("선택한 트랙: {:?}", track);

        let cover = self.covers.ensure(&track, self.source)?;
        let update = build_update(&track, cover, self.instrumental);
        tagger::write_tags(file.path(), &update)?;

        info!("태그 기록 완료: {}", file.filename());
        Ok(Outcome::Tagged)
    }

    /// 검색어를 트랙 하나로 확정한다. 작업자가 건너뛰면 None.
    fn resolve(&self, query: &str) -> Result<Option<CatalogTrack>> {
        if let Some(id) = query::parse_track_url(query) {
            debug!("트랙 URL에서 ID 추출: {}", id);
            return self.source.get_track(id).map(Some);
        }

        let results = self.source.search_tracks(query, SEARCH_LIMIT)?;

        let mut choices: Vec<Choice> = results
            .iter()
            .map(|t| Choice::new(&t.id, &t.name).with_hint(t.hint()))
            .collect();
        choices.push(Choice::new(SKIP_CHOICE, "건너뛰기"));

        let selected = self.prompter.ask_choice(SELECT_PROMPT, &choices)?;
        if selected == SKIP_CHOICE {
            return Ok(None);
        }

        match results.into_iter().find(|t| t.id == selected) {
            Some(track) => Ok(Some(track)),
            None => Err(TagfillError::TrackNotInResults { id: selected }.into()),
        }
    }

    fn mark_skipped(&mut self, file: &AudioFile) -> Result<Outcome> {
        info!("건너뜀: {}", file.filename());
        self.skip.add(file.filename())?;
        Ok(Outcome::Skipped)
    }
}

/// 확정된 트랙에서 기록할 태그 값을 만든다.
pub fn build_update(track: &CatalogTrack, cover: PathBuf, instrumental: bool) -> TagUpdate {
    let title = if instrumental {
        format!("{} - Instrumental", track.name)
    } else {
        track.name.clone()
    };

    TagUpdate {
        title,
        artist: track.joined_artists(),
        album: track.album.name.clone(),
        track_number: track.track_number,
        year: track.album.release_year(),
        cover: Some(cover),
    }
}

fn is_fatal(err: &anyhow::Error) -> bool {
    err.downcast_ref::<TagfillError>()
        .is_some_and(|e| !e.is_recoverable())
}
