//! Application settings service - sidebar, loading indicator, theme

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use labelprint_domain::constants::THEME_STORAGE_KEY;
use labelprint_domain::{AppInfo, Result, Theme};
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::gateway::ports::LoadingSink;
use crate::session::ports::KeyValueStore;

/// UI-level settings shared by every view
pub struct AppSettingsService {
    store: Arc<dyn KeyValueStore>,
    info: AppInfo,
    api_base_url: String,
    sidebar_collapsed: AtomicBool,
    loading: AtomicUsize,
    theme: RwLock<Theme>,
}

impl AppSettingsService {
    #[must_use]
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        info: AppInfo,
        api_base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            info,
            api_base_url: api_base_url.into(),
            sidebar_collapsed: AtomicBool::new(false),
            loading: AtomicUsize::new(0),
            theme: RwLock::new(Theme::default()),
        }
    }

    /// Restore the persisted theme. Unknown stored values are ignored.
    pub fn initialize(&self) -> Theme {
        if let Some(saved) = self.store.get(THEME_STORAGE_KEY) {
            match saved.parse::<Theme>() {
                Ok(theme) => *self.theme.write() = theme,
                Err(err) => warn!(error = %err, "ignoring stored theme"),
            }
        }
        let theme = self.theme();
        debug!(%theme, "application settings initialized");
        theme
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    /// Switch between light and dark and persist the choice.
    ///
    /// # Errors
    /// Propagates storage failures; the in-memory theme is switched anyway.
    pub fn toggle_theme(&self) -> Result<Theme> {
        let theme = {
            let mut current = self.theme.write();
            *current = current.toggled();
            *current
        };
        self.store.set(THEME_STORAGE_KEY, &theme.to_string())?;
        Ok(theme)
    }

    /// Returns the new collapsed state.
    pub fn toggle_sidebar(&self) -> bool {
        !self.sidebar_collapsed.fetch_xor(true, Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed.load(Ordering::SeqCst)
    }

    /// `true` while at least one loading call is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst) > 0
    }

    #[must_use]
    pub fn info(&self) -> &AppInfo {
        &self.info
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl LoadingSink for AppSettingsService {
    fn begin(&self) {
        self.loading.fetch_add(1, Ordering::SeqCst);
    }

    fn end(&self) {
        // Unbalanced `end` calls must not wrap the counter.
        let _ = self
            .loading
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| count.checked_sub(1));
    }
}
