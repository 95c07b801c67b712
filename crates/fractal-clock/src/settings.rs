use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clock_engine::window::{RuntimeConfig, WindowMode};
use clock_fractal::ClockConfig;

pub const FONT_VAR: &str = "FRACTAL_CLOCK_FONT";
pub const FULLSCREEN_VAR: &str = "FRACTAL_CLOCK_FULLSCREEN";
pub const DEPTH_VAR: &str = "FRACTAL_CLOCK_DEPTH";

/// Searched in order when no font path is configured.
const FONT_CANDIDATES: [&str; 7] = [
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Host settings read from the environment at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub font_path: Option<PathBuf>,
    pub mode: WindowMode,
    pub max_depth: Option<u32>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let font_path = lookup(FONT_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let fullscreen = match lookup(FULLSCREEN_VAR) {
            Some(v) => parse_flag(&v).with_context(|| format!("invalid {FULLSCREEN_VAR}"))?,
            None => false,
        };

        let max_depth = match lookup(DEPTH_VAR) {
            Some(v) => Some(
                v.trim()
                    .parse::<u32>()
                    .with_context(|| format!("invalid {DEPTH_VAR}: {v:?}"))?,
            ),
            None => None,
        };

        Ok(Self {
            font_path,
            mode: if fullscreen { WindowMode::Fullscreen } else { WindowMode::Windowed },
            max_depth,
        })
    }

    /// Default clock geometry with the depth override applied and validated.
    pub fn clock_config(&self) -> Result<ClockConfig> {
        let mut config = ClockConfig::default();
        if let Some(depth) = self.max_depth {
            config = config.with_max_depth(depth);
        }
        config
            .validate()
            .with_context(|| format!("invalid {DEPTH_VAR}"))?;
        Ok(config)
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: "Fractal Clock".to_string(),
            mode: self.mode,
            ..RuntimeConfig::default()
        }
    }

    /// Reads the numeral font: the configured path, else the first readable
    /// system candidate.
    pub fn load_font(&self) -> Result<Vec<u8>> {
        if let Some(path) = &self.font_path {
            return std::fs::read(path)
                .with_context(|| format!("failed to read font {}", path.display()));
        }

        FONT_CANDIDATES
            .iter()
            .find_map(|p| {
                let bytes = std::fs::read(p).ok()?;
                log::debug!("using system font {p}");
                Some(bytes)
            })
            .ok_or_else(|| anyhow!("no system font found; set {FONT_VAR} to a .ttf/.otf file"))
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected 1/true or 0/false, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|name| map.get(name).cloned())
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn empty_environment_gives_defaults() {
        let s = settings(&[]).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.clock_config().unwrap(), ClockConfig::default());
    }

    #[test]
    fn fullscreen_flag_values() {
        for v in ["1", "true", "TRUE", " yes "] {
            let s = settings(&[(FULLSCREEN_VAR, v)]).unwrap();
            assert_eq!(s.mode, WindowMode::Fullscreen, "{v:?}");
        }
        for v in ["0", "false", ""] {
            let s = settings(&[(FULLSCREEN_VAR, v)]).unwrap();
            assert_eq!(s.mode, WindowMode::Windowed, "{v:?}");
        }
        assert!(settings(&[(FULLSCREEN_VAR, "maybe")]).is_err());
    }

    #[test]
    fn font_path_is_taken_verbatim() {
        let s = settings(&[(FONT_VAR, "/tmp/clock.ttf")]).unwrap();
        assert_eq!(s.font_path, Some(PathBuf::from("/tmp/clock.ttf")));

        let blank = settings(&[(FONT_VAR, "  ")]).unwrap();
        assert_eq!(blank.font_path, None);
    }

    // ── depth ─────────────────────────────────────────────────────────────

    #[test]
    fn depth_override_reaches_the_clock_config() {
        let s = settings(&[(DEPTH_VAR, " 6 ")]).unwrap();
        assert_eq!(s.clock_config().unwrap().max_fractal_depth, 6);
    }

    #[test]
    fn non_numeric_depth_is_an_error() {
        let err = settings(&[(DEPTH_VAR, "deep")]).unwrap_err();
        assert!(format!("{err:#}").contains(DEPTH_VAR));
        assert!(settings(&[(DEPTH_VAR, "-1")]).is_err());
    }

    #[test]
    fn oversized_depth_fails_validation() {
        let s = settings(&[(DEPTH_VAR, "40")]).unwrap();
        let err = s.clock_config().unwrap_err();
        assert!(format!("{err:#}").contains("exceeds"));
    }

    // ── derived configs ───────────────────────────────────────────────────

    #[test]
    fn runtime_config_carries_the_mode() {
        let s = settings(&[(FULLSCREEN_VAR, "1")]).unwrap();
        let rc = s.runtime_config();
        assert_eq!(rc.mode, WindowMode::Fullscreen);
        assert_eq!(rc.min_frame_interval, RuntimeConfig::default().min_frame_interval);
    }

    #[test]
    fn missing_configured_font_names_the_path() {
        let s = Settings {
            font_path: Some(PathBuf::from("/nonexistent/clock-font.ttf")),
            ..Settings::default()
        };
        let err = s.load_font().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/clock-font.ttf"));
    }
}
