//! Light/dark theme state, persisted under the `theme` key.

use anyhow::Result;
use log::{info, warn};
use shared::ThemeMode;

use crate::backend::storage::DashboardStore;

pub const DARK_MODE_LABEL: &str = "🌙 Dark Mode";
pub const LIGHT_MODE_LABEL: &str = "☀️ Light Mode";

pub struct ThemeService {
    store: DashboardStore,
    mode: ThemeMode,
}

impl ThemeService {
    /// Read the saved theme once at startup. Anything other than a stored
    /// `"dark"` starts in light mode.
    pub fn init(store: DashboardStore) -> Self {
        let mode = match store.load_theme() {
            Ok(saved) => saved.unwrap_or_default(),
            Err(e) => {
                warn!("THEME: could not read saved theme, using light: {}", e);
                ThemeMode::Light
            }
        };
        info!("THEME: starting in {} mode", mode);

        Self { store, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Persist `mode` and apply it. A failed save keeps the current mode.
    pub fn set_theme(&mut self, mode: ThemeMode) -> Result<()> {
        self.store.save_theme(mode)?;
        self.mode = mode;
        info!("THEME: switched to {} mode", mode);
        Ok(())
    }

    /// Flip between light and dark, returning the new mode
    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let next = self.mode.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Text for the toggle button, naming the mode a click switches to
    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark() {
            LIGHT_MODE_LABEL
        } else {
            DARK_MODE_LABEL
        }
    }
}
