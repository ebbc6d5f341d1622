//! Offset/limit parameters for list operations.

pub const DEFAULT_LIMIT: u64 = 100;

/// Largest offset/limit the SQL backends bind (`BIGINT`).
pub const MAX_ROWS: u64 = i64::MAX as u64;

/// `skip` rows are passed over, at most `limit` are returned.
/// Out-of-range offsets yield an empty page, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListParams {
    pub skip: u64,
    pub limit: u64,
}

impl ListParams {
    pub fn new(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self { skip: skip.unwrap_or(0).min(MAX_ROWS), limit: limit.unwrap_or(DEFAULT_LIMIT).min(MAX_ROWS) }
    }

    /// `skip`, clamped to what the database accepts as `OFFSET`.
    pub fn offset(&self) -> u64 { self.skip.min(MAX_ROWS) }

    /// `limit`, clamped to what the database accepts as `LIMIT`.
    pub fn row_limit(&self) -> u64 { self.limit.min(MAX_ROWS) }
}

impl Default for ListParams {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}
