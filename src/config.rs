use clap::ValueEnum;

/// Suffixes used when a host asks for images without naming any.
pub const DEFAULT_IMAGE_SUFFIXES: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

pub const DEFAULT_WORKERS: usize = 4;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum SortOrder {
    /// Keep the order the walk produced
    #[default]
    Discovery,
    #[value(name = "name")]
    NameAscending,
    #[value(name = "name-desc")]
    NameDescending,
}

/// Knobs for a walk and for batch collection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanOptions {
    /// Directories deeper than this below the root are not opened.
    pub max_depth: Option<usize>,
    /// Resolve symlinks instead of ignoring them.
    pub follow_symlinks: bool,
    /// Upper bound on roots scanned at once by `collect_from_roots`.
    pub workers: usize,
    pub order: SortOrder,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            follow_symlinks: false,
            workers: DEFAULT_WORKERS,
            order: SortOrder::Discovery,
        }
    }
}

impl ScanOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}
