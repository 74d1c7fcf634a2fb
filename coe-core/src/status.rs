//! Fetch lifecycle shared by every page.

/// Where a page's most recent fetch cycle stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request succeeded and its payload is current.
    Ok,
    /// The latest request failed; previously loaded data is kept.
    Error(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn error_detail(&self) -> Option<&str> {
        match self {
            FetchStatus::Error(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Ok => "ok",
            FetchStatus::Error(_) => "error",
        }
    }
}

/// Monotonic request counter. Only a response to the latest issued number may
/// be applied.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next sequence number, superseding every earlier one.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_supersedes_older_requests() {
        let mut seq = RequestSequence::new();
        assert!(!seq.is_latest(0));
        let first = seq.issue();
        assert!(seq.is_latest(first));
        let second = seq.issue();
        assert!(second > first);
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn status_accessors() {
        assert!(FetchStatus::Loading.is_loading());
        assert_eq!(FetchStatus::Ok.error_detail(), None);
        assert_eq!(
            FetchStatus::Error("boom".to_string()).error_detail(),
            Some("boom")
        );
        assert_eq!(FetchStatus::default().as_str(), "idle");
    }
}
