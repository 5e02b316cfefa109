//! Upload progress reporting

use std::fmt;
use std::sync::Arc;

/// Receives whole percentages (0-100)
pub type ProgressCallback = Arc<dyn Fn(u8) + Send + Sync>;

/// `round(loaded * 100 / total)`, or `None` when the total is unknown or zero.
///
/// Halves round up. The result is capped at 100.
#[must_use]
pub fn percent_complete(loaded: u64, total: Option<u64>) -> Option<u8> {
    let total = u128::from(total.filter(|total| *total > 0)?);
    let rounded = (u128::from(loaded) * 200 + total) / (total * 2);
    Some(u8::try_from(rounded.min(100)).unwrap_or(100))
}

/// Tracks bytes handed to the transport and reports progress ticks
pub struct UploadProgress {
    total: Option<u64>,
    loaded: u64,
    callback: ProgressCallback,
}

impl UploadProgress {
    #[must_use]
    pub fn new(total: Option<u64>, callback: ProgressCallback) -> Self {
        Self { total, loaded: 0, callback }
    }

    /// Record `bytes` more sent. Invokes the callback only when the total is
    /// known.
    pub fn advance(&mut self, bytes: u64) {
        self.loaded = self.loaded.saturating_add(bytes);
        if let Some(percent) = percent_complete(self.loaded, self.total) {
            (self.callback)(percent);
        }
    }

    #[must_use]
    pub fn loaded(&self) -> u64 {
        self.loaded
    }
}

impl fmt::Debug for UploadProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadProgress")
            .field("total", &self.total)
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    fn recorder() -> (ProgressCallback, Arc<Mutex<Vec<u8>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (Arc::new(move |percent| sink.lock().push(percent)), seen)
    }

    #[test]
    fn quarter_ticks_of_a_thousand_bytes() {
        let (callback, seen) = recorder();
        let mut progress = UploadProgress::new(Some(1000), callback);
        progress.advance(250);
        progress.advance(250);
        progress.advance(500);
        assert_eq!(*seen.lock(), vec![25, 50, 100]);
        assert_eq!(progress.loaded(), 1000);
    }

    #[test]
    fn unknown_total_never_reports() {
        let (callback, seen) = recorder();
        let mut progress = UploadProgress::new(None, callback);
        progress.advance(250);
        progress.advance(750);
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(percent_complete(1, Some(3)), Some(33));
        assert_eq!(percent_complete(2, Some(3)), Some(67));
        assert_eq!(percent_complete(1, Some(8)), Some(13));
        assert_eq!(percent_complete(0, Some(8)), Some(0));
        assert_eq!(percent_complete(5, Some(0)), None);
        assert_eq!(percent_complete(2000, Some(1000)), Some(100));
    }
}
