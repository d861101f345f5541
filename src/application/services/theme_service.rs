use std::sync::Arc;
use crate::application::errors::StorageError;
use crate::domain::entities::Theme;
use crate::domain::traits::Store;

/// Store key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// Service for the persisted light/dark preference
pub struct ThemeService {
    store: Arc<dyn Store>,
}

impl ThemeService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Stored theme; missing or unreadable values mean light
    pub async fn current(&self) -> Result<Theme, StorageError> {
        let stored = self.store.get(THEME_KEY).await?;
        Ok(match stored {
            Some(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                Theme::default()
            }),
            None => Theme::default(),
        })
    }

    pub async fn set(&self, theme: Theme) -> Result<Theme, StorageError> {
        self.store.set(THEME_KEY, theme.as_str()).await?;
        tracing::info!("Theme set to {}", theme);
        Ok(theme)
    }

    pub async fn toggle(&self) -> Result<Theme, StorageError> {
        let next = self.current().await?.toggled();
        self.set(next).await
    }
}
