/// One transcript line with the views the scanners match against.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    pub raw: &'a str,
    pub trimmed: &'a str,
    pub lower: String,
}

impl<'a> Line<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            trimmed: raw.trim(),
            lower: raw.to_lowercase(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }

    /// Case-insensitive substring test; markers must be lower case.
    pub fn mentions_any(&self, markers: &[&str]) -> bool {
        markers.iter().any(|marker| self.lower.contains(marker))
    }
}
