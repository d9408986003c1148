use anyhow::Result;
use comfy_table::{Cell, Table};
use dialoguer::{Input, Select};

use crate::error::TagfillError;
use crate::models::FileTags;

/// 선택 목록의 항목. 선택 결과로는 `id`가 돌아온다.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub id: String,
    pub label: String,
    pub hint: Option<String>,
}

impl Choice {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    fn display(&self) -> String {
        match &self.hint {
            Some(hint) => format!("{}  ({})", self.label, hint),
            None => self.label.clone(),
        }
    }
}

/// 작업자에게 묻는 입력 창구. 테스트에서는 미리 정해진 답을 돌려주는 구현으로 바꾼다.
pub trait Prompter {
    /// 자유 텍스트 입력. `initial`이 있으면 미리 채워 둔다. 빈 문자열도 허용하고, 입력을 다듬지 않고 그대로 돌려준다.
    fn ask_text(&self, prompt: &str, initial: Option<&str>) -> Result<String>;
    /// 목록에서 하나를 고르고 그 항목의 `id`를 돌려준다.
    fn ask_choice(&self, prompt: &str, choices: &[Choice]) -> Result<String>;
}

/// dialoguer 기반 터미널 입력.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask_text(&self, prompt: &str, initial: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(text) = initial {
            input = input.with_initial_text(text);
        }
        let answer = input
            .interact_text()
            .map_err(|e| TagfillError::Prompt(e.to_string()))?;
        Ok(answer)
    }

    fn ask_choice(&self, prompt: &str, choices: &[Choice]) -> Result<String> {
        if choices.is_empty() {
            anyhow::bail!("선택할 항목이 없습니다");
        }
        let items: Vec<String> = choices.iter().map(Choice::display).collect();
        let selection = Select::new()
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| TagfillError::Prompt(e.to_string()))?;
        Ok(choices[selection].id.clone())
    }
}

/// 프롬프트 전에 보여줄 현재 태그 표.
pub fn tags_table(filename: &str, tags: &FileTags) -> Table {
    let year = tags.year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string());
    let track = tags
        .track_number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    let image = if tags.has_image { "있음" } else { "없음" };

    let mut table = Table::new();
    table.set_header(vec!["파일", "제목", "아티스트", "앨범", "연도", "트랙", "커버"]);
    table.add_row(vec![
        Cell::new(filename),
        Cell::new(FileTags::display(&tags.title)),
        Cell::new(FileTags::display(&tags.artist)),
        Cell::new(FileTags::display(&tags.album)),
        Cell::new(&year),
        Cell::new(&track),
        Cell::new(image),
    ]);
    table
}
