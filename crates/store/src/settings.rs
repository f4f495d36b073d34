//! Application settings management
//!
//! This module provides settings persistence, loading, and updating for the
//! dashboard application.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    /// General application settings
    pub general: GeneralSettings,
    /// Workspace behavior settings
    pub workspace: WorkspaceSettings,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// Application theme
    pub theme: Theme,
    /// Clock widget display format
    pub clock_format: ClockFormat,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            clock_format: ClockFormat::TwelveHour,
        }
    }
}

/// Workspace behavior settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkspaceSettings {
    /// Whether released drags snap widgets to the fine grid
    pub snap_to_grid: bool,
    /// Whether leaving with unsaved layout changes prompts a warning
    pub warn_on_unsaved_changes: bool,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            snap_to_grid: true,
            warn_on_unsaved_changes: true,
        }
    }
}

/// Application theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Self::System
    }
}

/// Clock widget display format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClockFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Settings manager for loading, saving, and updating application settings
pub struct SettingsManager {
    /// Path to the settings file
    settings_path: PathBuf,
    /// Current settings (cached)
    current: AppSettings,
}

impl SettingsManager {
    /// Create a new settings manager with the given app data directory
    pub fn new(app_data_dir: PathBuf) -> Self {
        let settings_path = app_data_dir.join("settings.json");
        Self {
            settings_path,
            current: AppSettings::default(),
        }
    }

    /// Get the path to the settings file
    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub async fn load(&mut self) -> Result<&AppSettings> {
        if self.settings_path.exists() {
            let content = tokio::fs::read_to_string(&self.settings_path).await?;
            self.current = Self::parse_or_default(&content);
        } else {
            self.current = AppSettings::default();
        }
        Ok(&self.current)
    }

    /// Load settings synchronously (for use during app startup)
    pub fn load_sync(&mut self) -> Result<&AppSettings> {
        if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            self.current = Self::parse_or_default(&content);
        } else {
            self.current = AppSettings::default();
        }
        Ok(&self.current)
    }

    fn parse_or_default(content: &str) -> AppSettings {
        match serde_json::from_str::<AppSettings>(content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                AppSettings::default()
            }
        }
    }

    /// Save current settings to disk
    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        tokio::fs::write(&self.settings_path, content).await?;
        Ok(())
    }

    /// Save settings synchronously
    pub fn save_sync(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    /// Get current settings
    pub fn get(&self) -> &AppSettings {
        &self.current
    }

    /// Update settings and save to disk
    pub async fn update(&mut self, settings: AppSettings) -> Result<()> {
        self.current = settings;
        self.save().await
    }

    /// Update settings synchronously
    pub fn update_sync(&mut self, settings: AppSettings) -> Result<()> {
        self.current = settings;
        self.save_sync()
    }

    /// Reset settings to defaults and save
    pub async fn reset(&mut self) -> Result<&AppSettings> {
        self.current = AppSettings::default();
        self.save().await?;
        Ok(&self.current)
    }

    /// Update only general settings
    pub async fn update_general(&mut self, general: GeneralSettings) -> Result<()> {
        self.current.general = general;
        self.save().await
    }

    /// Update only workspace settings
    pub async fn update_workspace(&mut self, workspace: WorkspaceSettings) -> Result<()> {
        self.current.workspace = workspace;
        self.save().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();

        assert_eq!(settings.general.theme, Theme::System);
        assert_eq!(settings.general.clock_format, ClockFormat::TwelveHour);
        assert!(settings.workspace.snap_to_grid);
        assert!(settings.workspace.warn_on_unsaved_changes);
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = AppSettings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, parsed);
    }

    #[test]
    fn test_theme_and_clock_format_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::to_string(&ClockFormat::TwentyFourHour).unwrap(),
            "\"24h\""
        );
    }

    #[test]
    fn test_settings_manager_load_save_sync() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());

        // load returns defaults when no file exists
        let settings = manager.load_sync().unwrap();
        assert_eq!(settings, &AppSettings::default());

        let mut new_settings = AppSettings::default();
        new_settings.general.theme = Theme::Dark;
        new_settings.workspace.snap_to_grid = false;
        manager.update_sync(new_settings).unwrap();

        let mut manager2 = SettingsManager::new(temp_dir.path().to_path_buf());
        let loaded = manager2.load_sync().unwrap();
        assert_eq!(loaded.general.theme, Theme::Dark);
        assert!(!loaded.workspace.snap_to_grid);
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{broken").unwrap();

        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());
        let settings = manager.load_sync().unwrap();
        assert_eq!(settings, &AppSettings::default());
    }

    #[tokio::test]
    async fn test_settings_manager_async() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());

        manager.load().await.unwrap();

        let mut new_settings = AppSettings::default();
        new_settings.general.clock_format = ClockFormat::TwentyFourHour;
        manager.update(new_settings).await.unwrap();

        let mut manager2 = SettingsManager::new(temp_dir.path().to_path_buf());
        let loaded = manager2.load().await.unwrap();
        assert_eq!(loaded.general.clock_format, ClockFormat::TwentyFourHour);
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());

        let mut changed = AppSettings::default();
        changed.general.theme = Theme::Light;
        manager.update(changed).await.unwrap();

        let settings = manager.reset().await.unwrap();
        assert_eq!(settings.general.theme, Theme::System);
    }
}
