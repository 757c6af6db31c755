use std::{collections::HashMap, env, fs};

use anyhow::Context;

use shared::domain::ViewMode;

/// Runtime settings for the dashboard.
///
/// Precedence, lowest to highest: built-in defaults, a flat string table in
/// `dashboard.toml`, then `APP__*` environment variables. Mode-valued
/// settings go through the `shared` label parsers and fail loading on an
/// unknown label instead of silently falling back.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub telemetry_interval_ms: u64,
    pub command_queue_capacity: usize,
    pub telemetry_seed: Option<u64>,
    pub initial_view: ViewMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            telemetry_interval_ms: 1000,
            command_queue_capacity: 256,
            telemetry_seed: None,
            initial_view: ViewMode::Camera,
        }
    }
}

const SETTING_KEYS: [&str; 4] = [
    "telemetry_interval_ms",
    "command_queue_capacity",
    "telemetry_seed",
    "initial_view",
];

pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("dashboard.toml") {
        let file_cfg: HashMap<String, String> =
            toml::from_str(&raw).context("dashboard.toml is not a flat table of strings")?;
        for (key, value) in &file_cfg {
            apply_override(&mut settings, key, value)?;
        }
    }

    for key in SETTING_KEYS {
        if let Ok(value) = env::var(format!("APP__{}", key.to_ascii_uppercase())) {
            apply_override(&mut settings, key, &value)?;
        }
    }

    Ok(settings)
}

fn apply_override(settings: &mut Settings, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "telemetry_interval_ms" => {
            settings.telemetry_interval_ms = value
                .parse()
                .with_context(|| format!("invalid telemetry_interval_ms '{value}'"))?;
        }
        "command_queue_capacity" => {
            settings.command_queue_capacity = value
                .parse()
                .with_context(|| format!("invalid command_queue_capacity '{value}'"))?;
        }
        "telemetry_seed" => {
            settings.telemetry_seed = Some(
                value
                    .parse()
                    .with_context(|| format!("invalid telemetry_seed '{value}'"))?,
            );
        }
        "initial_view" => {
            settings.initial_view = value
                .parse()
                .with_context(|| format!("invalid initial_view '{value}'"))?;
        }
        _ => tracing::debug!(key, "ignoring unknown setting"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_in_order_with_last_writer_winning() {
        let mut settings = Settings::default();
        apply_override(&mut settings, "telemetry_interval_ms", "500").expect("file value");
        apply_override(&mut settings, "telemetry_interval_ms", "250").expect("env value");
        assert_eq!(settings.telemetry_interval_ms, 250);
    }

    #[test]
    fn initial_view_parses_through_the_shared_labels() {
        let mut settings = Settings::default();
        apply_override(&mut settings, "initial_view", "2D Map").expect("known label");
        assert_eq!(settings.initial_view, ViewMode::Map2d);
    }

    #[test]
    fn unknown_view_label_fails_loading_instead_of_defaulting() {
        let mut settings = Settings::default();
        let err = apply_override(&mut settings, "initial_view", "Thermal").unwrap_err();
        assert!(err.to_string().contains("initial_view"));
        // The bad value must not have half-applied.
        assert_eq!(settings.initial_view, ViewMode::Camera);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut settings = Settings::default();
        apply_override(&mut settings, "window_opacity", "0.5").expect("ignored");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn seed_overrides_parse_as_integers() {
        let mut settings = Settings::default();
        apply_override(&mut settings, "telemetry_seed", "42").expect("seed");
        assert_eq!(settings.telemetry_seed, Some(42));
        assert!(apply_override(&mut settings, "telemetry_seed", "not-a-number").is_err());
    }
}
