// Pagination Window

use super::error::{QueueError, Result};

/// Bounded contiguous range of the queue used by paginated reads.
///
/// Follows slice semantics: an offset at or past the end yields nothing and
/// a limit past the end yields a short window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    pub offset: usize,
    pub limit: Option<usize>,
}

impl Window {
    /// The whole queue
    pub fn all() -> Self {
        Self::default()
    }

    pub fn bounded(offset: usize, limit: usize) -> Self {
        Self {
            offset,
            limit: Some(limit),
        }
    }

    /// Validate caller-supplied bounds.
    ///
    /// A missing offset starts at the head, a missing limit reads to the end.
    /// Negative values are rejected with `InvalidArgument`.
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Result<Self> {
        let offset = match offset {
            Some(o) => non_negative("offset", o)?,
            None => 0,
        };
        let limit = limit.map(|l| non_negative("limit", l)).transpose()?;
        Ok(Self { offset, limit })
    }

    /// Index range this window covers in a sequence of `len` elements
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        let end = match self.limit {
            Some(limit) => start.saturating_add(limit).min(len),
            None => len,
        };
        start..end
    }
}

fn non_negative(name: &str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        QueueError::InvalidArgument(format!("{} must be >= 0, got {}", name, value))
    })
}
