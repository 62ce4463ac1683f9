use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::ScanOptions;
use crate::error::ScanError;
use crate::filesystem::Walker;
use crate::listing::sort_paths;
use crate::matcher::SuffixMatcher;

/// Paths under `root` whose extension is one of `suffixes`, in discovery order.
///
/// Empty `suffixes`, an empty `root`, or a root that cannot be opened all
/// yield an empty list rather than an error.
pub fn collect_matching_files<S: AsRef<str>>(root: &str, suffixes: &[S]) -> Vec<String> {
    collect_with_options(root, suffixes, &ScanOptions::default())
}

pub fn collect_with_options<S: AsRef<str>>(
    root: &str,
    suffixes: &[S],
    options: &ScanOptions,
) -> Vec<String> {
    let Some(matcher) = build_matcher(suffixes) else {
        return Vec::new();
    };

    let mut found = collect_root(root, &matcher, &Walker::new(options));
    sort_paths(&mut found, options.order);
    found
}

/// Scans every root on the blocking pool, at most `options.workers` at once.
///
/// Results are concatenated in the order `roots` were given, then ordered
/// by `options.order`. A root that cannot be opened contributes nothing.
pub async fn collect_from_roots<S: AsRef<str>>(
    roots: Vec<String>,
    suffixes: &[S],
    options: &ScanOptions,
) -> Vec<String> {
    let Some(matcher) = build_matcher(suffixes) else {
        return Vec::new();
    };

    let matcher = Arc::new(matcher);
    let walker = Walker::new(options);
    let permits = Arc::new(Semaphore::new(options.workers.max(1)));

    let mut handles = Vec::with_capacity(roots.len());
    for root in roots {
        let permit = match Arc::clone(&permits).acquire_owned().await {
            Ok(permit) => permit,
            Err(err) => {
                tracing::error!("Worker pool closed: {}", err);
                break;
            }
        };
        let matcher = Arc::clone(&matcher);
        let walker = walker.clone();

        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            collect_root(&root, &matcher, &walker)
        }));
    }

    let mut found = Vec::new();
    for handle in handles {
        match handle.await {
            Ok(paths) => found.extend(paths),
            Err(err) => tracing::error!("Scan worker panicked: {}", err),
        }
    }

    sort_paths(&mut found, options.order);
    found
}

fn build_matcher<S: AsRef<str>>(suffixes: &[S]) -> Option<SuffixMatcher> {
    if suffixes.is_empty() {
        tracing::debug!("No suffix filters given; nothing can match");
        return None;
    }

    let matcher = SuffixMatcher::from_suffixes(suffixes);
    if matcher.is_empty() {
        tracing::warn!("All suffix filters were rejected; nothing can match");
        return None;
    }
    Some(matcher)
}

fn collect_root(root: &str, matcher: &SuffixMatcher, walker: &Walker) -> Vec<String> {
    if root.is_empty() {
        let err = ScanError::MalformedInput("empty root path".to_string());
        tracing::warn!("{}", err);
        return Vec::new();
    }

    let (found, outcome) = walker.scan_to_vec(root, matcher);
    tracing::info!(
        "Scanned {}: {} matches, {} unreadable directories",
        root,
        outcome.matched,
        outcome.unreadable.len()
    );
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_suffixes_yield_nothing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.md"), b"").unwrap();

        let none: [&str; 0] = [];
        let found = collect_matching_files(temp_dir.path().to_str().unwrap(), &none[..]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_rejected_suffixes_yield_nothing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.configuration"), b"").unwrap();

        let found =
            collect_matching_files(temp_dir.path().to_str().unwrap(), &["configuration", ""]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_empty_root_yields_nothing() {
        assert!(collect_matching_files("", &["md"]).is_empty());
    }
}
