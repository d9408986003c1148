use std::path::PathBuf;

use crate::error::Result;

/// 사용자가 건너뛴 파일명 목록 (`skipped.txt`).
///
/// 줄 단위로 추가만 되고 지워지거나 중복 제거되지 않는다.
/// 포함 여부는 전체 내용에 대한 부분 문자열 검사라서, 다른 항목의 일부인 파일명도 걸린다.
#[derive(Debug, Clone)]
pub struct SkipList {
    path: PathBuf,
    content: String,
}

impl SkipList {
    /// 파일을 읽는다. 파일이 없으면 빈 목록으로 시작한다.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, content })
    }

    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.content.contains(filename)
    }

    /// 파일명을 한 줄 추가하고 즉시 디스크에 기록한다.
    pub fn add(&mut self, filename: &str) -> Result<()> {
        self.content.push('\n');
        self.content.push_str(filename);
        std::fs::write(&self.path, &self.content)?;
        Ok(())
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
