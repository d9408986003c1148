use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config;
use crate::core::cover::CoverCache;
use crate::core::skiplist::SkipList;
use crate::core::tagger;
use crate::filler::{Filler, RunSummary};
use crate::prompt::TerminalPrompter;
use crate::sources::spotify::SpotifyClient;

/// 건너뛰기 목록 기본 위치 (작업 디렉토리 기준).
pub const DEFAULT_SKIP_LIST: &str = "skipped.txt";

#[derive(Parser, Debug)]
#[command(name = "tagfill", version, about = "Spotify 연동 ID3 태그 채우기")]
pub struct FillCli {
    /// 처리할 음악 디렉토리
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// 제목 뒤에 " - Instrumental"을 붙여 기록
    #[arg(long)]
    pub instrumental: bool,

    /// 건너뛰기 목록 파일
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SKIP_LIST)]
    pub skip_list: PathBuf,

    /// 설정 파일 (기본: ~/.config/tagfill/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 자세한 로그 (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// 경고와 에러만 출력
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
#[command(name = "tagclear", version, about = "파일의 ID3 태그를 모두 지운다")]
pub struct ClearCli {
    /// 태그를 지울 파일
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// 자세한 로그 (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// `RUST_LOG`가 있으면 그대로 쓰고, 없으면 -v/-q 플래그로 레벨을 정한다.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .without_time()
        .try_init();
}

pub fn run_fill(cli: FillCli) -> Result<RunSummary> {
    let settings = config::load_settings(cli.config.as_deref())?;
    let skip = SkipList::load(&cli.skip_list)
        .with_context(|| format!("건너뛰기 목록을 읽을 수 없습니다: {}", cli.skip_list.display()))?;

    let client = SpotifyClient::new(&settings)?;
    let prompter = TerminalPrompter;
    let covers = CoverCache::new(&settings.thumbnails_dir);

    let mut filler = Filler::new(&client, &prompter, covers, skip, cli.instrumental);
    let summary = filler.run(&cli.directory)?;

    println!(
        "\n완료: 태그 기록 {}, 건너뜀 {}, 이미 완료 {}, 실패 {} (총 {})",
        summary.tagged, summary.skipped, summary.complete, summary.failed, summary.total
    );
    Ok(summary)
}

pub fn run_clear(cli: ClearCli) -> Result<()> {
    let removed = tagger::remove_tags(&cli.file)?;
    if removed {
        info!("태그를 지웠습니다: {}", cli.file.display());
    } else {
        info!("지울 태그가 없습니다: {}", cli.file.display());
    }
    Ok(())
}
