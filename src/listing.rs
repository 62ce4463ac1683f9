use std::cmp::Ordering;
use std::path::Path;

use serde::Serialize;

use crate::config::SortOrder;

/// Full-width punctuation that sorts with the ASCII group.
const WIDE_PUNCTUATION: &[char] = &[
    '！', '￥', '…', '（', '）', '—', '【', '】', '‘', '’', '“', '”', '；', '：', '。', '，', '、',
    '？',
];

/// One matched file as handed to a host: the path plus its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedFile {
    pub path: String,
    pub name: String,
}

impl MatchedFile {
    pub fn new(path: String) -> Self {
        let name = file_name_of(&path).to_string();
        Self { path, name }
    }
}

pub fn to_listing(paths: Vec<String>) -> Vec<MatchedFile> {
    paths.into_iter().map(MatchedFile::new).collect()
}

/// Final path component, or the whole string when there is none.
pub fn file_name_of(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

pub fn sort_paths(paths: &mut [String], order: SortOrder) {
    match order {
        SortOrder::Discovery => {}
        SortOrder::NameAscending => paths.sort_by(|a, b| compare_paths(a, b)),
        SortOrder::NameDescending => paths.sort_by(|a, b| compare_paths(b, a)),
    }
}

fn compare_paths(a: &str, b: &str) -> Ordering {
    compare_names(file_name_of(a), file_name_of(b)).then_with(|| a.cmp(b))
}

/// Ascending name order: names starting with an ASCII letter, digit or a
/// punctuation mark come first and compare case-insensitively; everything
/// else follows in plain string order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    match (starts_plain(a), starts_plain(b)) {
        (true, true) => cmp_ignore_ascii_case(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

fn starts_plain(name: &str) -> bool {
    name.chars().next().is_some_and(|c| {
        c.is_ascii_alphanumeric() || c.is_ascii_punctuation() || WIDE_PUNCTUATION.contains(&c)
    })
}

fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.chars().map(|c| c.to_ascii_lowercase()))
}
