use crate::error::ScanError;

/// Longest accepted suffix in bytes, separator included (fits `.sqlite3`).
pub const MAX_SUFFIX_LEN: usize = 9;

pub const SUFFIX_SEPARATOR: char = '.';

/// The set of accepted file extensions for one scan.
///
/// Entries are stored as `.` followed by the ASCII-lowercased suffix, in the
/// order they were configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixMatcher {
    suffixes: Vec<String>,
}

impl SuffixMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a matcher from raw suffixes, skipping the ones `configure` rejects.
    pub fn from_suffixes<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matcher = Self::new();
        for suffix in raw {
            if let Err(err) = matcher.configure(suffix.as_ref()) {
                tracing::warn!("Ignoring suffix filter: {}", err);
            }
        }
        matcher
    }

    /// Adds one accepted suffix, e.g. `"md"` or `"PDF"`.
    pub fn configure(&mut self, raw: &str) -> Result<(), ScanError> {
        let trimmed = raw.strip_prefix(SUFFIX_SEPARATOR).unwrap_or(raw);
        if trimmed.is_empty() {
            return Err(ScanError::MalformedInput(format!(
                "empty suffix filter {:?}",
                raw
            )));
        }

        let mut normalized = String::with_capacity(trimmed.len() + 1);
        normalized.push(SUFFIX_SEPARATOR);
        normalized.push_str(&trimmed.to_ascii_lowercase());

        if normalized.len() > MAX_SUFFIX_LEN {
            return Err(ScanError::OversizedSuffix {
                suffix: normalized,
                max: MAX_SUFFIX_LEN,
            });
        }

        if !self.suffixes.contains(&normalized) {
            tracing::debug!("Accepting suffix {}", normalized);
            self.suffixes.push(normalized);
        }
        Ok(())
    }

    /// Whether the final `.ext` of `file_name` is one of the accepted suffixes.
    pub fn matches(&self, file_name: &str) -> bool {
        let Some(dot) = file_name.rfind(SUFFIX_SEPARATOR) else {
            return false;
        };
        // `.ext` alone has no base name
        if dot == 0 {
            return false;
        }

        let candidate = &file_name[dot..];
        if candidate.len() > MAX_SUFFIX_LEN {
            return false;
        }

        self.suffixes
            .iter()
            .any(|suffix| suffix.eq_ignore_ascii_case(candidate))
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}
