//! Story scripts: file list parsing and content formatting.

use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// A story file name split into its group and two-character part suffix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryEntry {
    pub filename: String,
    pub group: String,
    pub part: String,
}

impl StoryEntry {
    /// Parse `main_01_02.txt` into group `main_01_` and part `02`.
    pub fn parse(filename: &str) -> Self {
        let base = filename.replacen(".txt", "", 1);
        let split = base
            .char_indices()
            .rev()
            .nth(1)
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        Self {
            filename: filename.to_string(),
            group: base[..split].to_string(),
            part: base[split..].to_string(),
        }
    }

    /// Numeric value of the part; non-numeric parts sort first
    pub fn part_number(&self) -> Option<u32> {
        self.part.parse().ok()
    }
}

/// Parse and order story file names: by group, then by numeric part.
pub fn sort_stories<S: AsRef<str>>(filenames: &[S]) -> Vec<StoryEntry> {
    let mut stories: Vec<StoryEntry> = filenames
        .iter()
        .map(|f| StoryEntry::parse(f.as_ref()))
        .collect();
    stories.sort_by(compare_stories);
    stories
}

fn compare_stories(a: &StoryEntry, b: &StoryEntry) -> Ordering {
    a.group
        .cmp(&b.group)
        .then_with(|| a.part_number().cmp(&b.part_number()))
}

/// One line of story content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoryLine {
    Dialogue { speaker: String, text: String },
    Narration { text: String },
    Blank,
}

/// Story content: a title line followed by dialogue and narration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryDocument {
    pub title: String,
    pub lines: Vec<StoryLine>,
}

/// `Speaker: text`
static DIALOGUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+):(.*)").expect("valid dialogue regex"));

impl StoryDocument {
    pub fn parse(content: &str) -> Self {
        let mut lines = content.split('\n');
        let title = lines.next().unwrap_or_default().to_string();

        let lines = lines
            .map(|line| {
                if let Some(caps) = DIALOGUE_REGEX.captures(line) {
                    StoryLine::Dialogue {
                        speaker: caps[1].to_string(),
                        text: caps[2].trim().to_string(),
                    }
                } else if !line.trim().is_empty() {
                    StoryLine::Narration {
                        text: line.to_string(),
                    }
                } else {
                    StoryLine::Blank
                }
            })
            .collect();

        Self { title, lines }
    }

    pub fn dialogue_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, StoryLine::Dialogue { .. }))
            .count()
    }
}
