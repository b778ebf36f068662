use serde::Deserialize;

const DEFAULT_SKIP: u32 = 0;
const DEFAULT_LIMIT: u32 = 100;

/// Offset paging for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Page {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    pub(crate) fn bounds(&self) -> (i64, i64) {
        (i64::from(self.skip), i64::from(self.limit))
    }
}
