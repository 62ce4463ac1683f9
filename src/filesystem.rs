use std::collections::HashSet;
use std::fs::{self, DirEntry, ReadDir};
use std::path::{MAIN_SEPARATOR, PathBuf};

use crate::config::ScanOptions;
use crate::error::ScanError;
use crate::matcher::SuffixMatcher;

const HIDDEN_MARKER: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl EntryKind {
    fn of(entry: &DirEntry) -> Self {
        match entry.file_type() {
            Ok(ft) if ft.is_file() => EntryKind::File,
            Ok(ft) if ft.is_dir() => EntryKind::Directory,
            Ok(ft) if ft.is_symlink() => EntryKind::Symlink,
            _ => EntryKind::Other,
        }
    }
}

/// Summary of one walk. Matched paths themselves go through the sink.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Sink calls that accepted the path
    pub matched: usize,
    /// Sink calls that refused the path
    pub rejected: usize,
    /// Directories that could not be opened, root included
    pub unreadable: Vec<ScanError>,
    pub root_readable: bool,
}

impl ScanOutcome {
    pub fn is_complete(&self) -> bool {
        self.root_readable && self.unreadable.is_empty()
    }
}

/// A directory waiting to be read.
struct Pending {
    path: String,
    depth: usize,
}

/// Depth-first directory walker that feeds suffix matches to a sink.
///
/// Entries are visited in whatever order the platform's directory read
/// yields them, so the result order is some valid depth-first order and
/// differs across file systems. Compare results as sets.
///
/// Each directory is read to the end and its handle closed before any of
/// its subdirectories is opened. Pending subdirectories wait on an explicit
/// stack of paths, so neither the thread stack nor the number of open
/// descriptors grows with tree depth.
///
/// Entries whose names are not valid UTF-8 are skipped, directories
/// included: every path below such a directory would be non UTF-8 too and
/// could not be reported as a string.
#[derive(Debug, Clone, Default)]
pub struct Walker {
    max_depth: Option<usize>,
    follow_symlinks: bool,
}

impl Walker {
    pub fn new(options: &ScanOptions) -> Self {
        Self {
            max_depth: options.max_depth,
            follow_symlinks: options.follow_symlinks,
        }
    }

    /// Walks `root` and calls `sink` with the full path of every regular file
    /// whose name `matcher` accepts.
    ///
    /// Hidden entries (leading `.`) are dropped before the matcher sees them.
    /// Directories that fail to open are recorded in the outcome and skipped;
    /// this never returns early because of one.
    pub fn scan<F>(&self, root: &str, matcher: &SuffixMatcher, mut sink: F) -> ScanOutcome
    where
        F: FnMut(String) -> bool,
    {
        let mut outcome = ScanOutcome::default();
        let mut visited = HashSet::new();
        let mut stack = vec![Pending {
            path: root.to_string(),
            depth: 0,
        }];

        while let Some(dir) = stack.pop() {
            let Some(entries) = self.open(&dir.path, &mut visited, &mut outcome) else {
                continue;
            };
            if dir.depth == 0 {
                outcome.root_readable = true;
            }

            let mut subdirs = Vec::new();
            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        tracing::debug!("Skipping unreadable entry in {}: {}", dir.path, err);
                        continue;
                    }
                };

                let file_name = entry.file_name();
                let Some(name) = file_name.to_str() else {
                    tracing::debug!("Skipping non UTF-8 name {:?} in {}", file_name, dir.path);
                    continue;
                };
                if is_hidden(name) {
                    continue;
                }

                let path = join_path(&dir.path, name);
                match self.classify(&entry, &path) {
                    EntryKind::File => {
                        if !matcher.matches(name) {
                            continue;
                        }
                        if sink(path) {
                            outcome.matched += 1;
                        } else {
                            outcome.rejected += 1;
                        }
                    }
                    EntryKind::Directory => {
                        let depth = dir.depth + 1;
                        if self.max_depth.is_some_and(|max| depth > max) {
                            tracing::debug!("Not descending into {}: depth {} over limit", path, depth);
                            continue;
                        }
                        subdirs.push(Pending { path, depth });
                    }
                    EntryKind::Symlink | EntryKind::Other => {
                        tracing::trace!("Ignoring {}", path);
                    }
                }
            }

            // the handle is closed here; first-seen subdirectory is walked next
            stack.extend(subdirs.into_iter().rev());
        }

        outcome
    }

    /// Convenience wrapper that buffers every match.
    pub fn scan_to_vec(&self, root: &str, matcher: &SuffixMatcher) -> (Vec<String>, ScanOutcome) {
        let mut found = Vec::new();
        let outcome = self.scan(root, matcher, |path| {
            found.push(path);
            true
        });
        (found, outcome)
    }

    fn classify(&self, entry: &DirEntry, path: &str) -> EntryKind {
        let kind = EntryKind::of(entry);
        if kind != EntryKind::Symlink || !self.follow_symlinks {
            return kind;
        }

        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(meta) if meta.is_dir() => EntryKind::Directory,
            Ok(_) => EntryKind::Other,
            Err(err) => {
                tracing::debug!("Ignoring broken symlink {}: {}", path, err);
                EntryKind::Other
            }
        }
    }

    fn open(
        &self,
        path: &str,
        visited: &mut HashSet<PathBuf>,
        outcome: &mut ScanOutcome,
    ) -> Option<ReadDir> {
        // only links can revisit a directory
        if self.follow_symlinks {
            if let Ok(real) = fs::canonicalize(path) {
                if !visited.insert(real) {
                    tracing::debug!("Skipping already visited directory {}", path);
                    return None;
                }
            }
        }

        match fs::read_dir(path) {
            Ok(entries) => Some(entries),
            Err(source) => {
                tracing::warn!("Open dir error: {}: {}", path, source);
                outcome.unreadable.push(ScanError::UnreadableDirectory {
                    path: path.to_string(),
                    source,
                });
                None
            }
        }
    }
}

fn is_hidden(name: &str) -> bool {
    name == "." || name == ".." || name.starts_with(HIDDEN_MARKER)
}

fn join_path(base: &str, name: &str) -> String {
    let mut path = String::with_capacity(base.len() + name.len() + 1);
    path.push_str(base);
    if !base.ends_with(MAIN_SEPARATOR) && !base.ends_with('/') {
        path.push(MAIN_SEPARATOR);
    }
    path.push_str(name);
    path
}
