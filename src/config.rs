//! App identity resolved once at startup.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

pub const APP_NAME: &str = "RustySound";
pub const DEFAULT_PACKAGE_NAME: &str = "app.adarcher.rustysound";

#[cfg(not(target_arch = "wasm32"))]
const PACKAGE_ENV: &str = "RUSTYSOUND_PACKAGE";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Name shown to the user in notices.
    pub app_name: String,
    /// Android package name, used for `package:` intent data and
    /// battery-optimization lookups.
    pub package_name: String,
    #[cfg(not(target_arch = "wasm32"))]
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let package_name = resolve_package_name();

        Self {
            app_name: APP_NAME.to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            data_dir: resolve_data_dir(&package_name),
            package_name,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("rustysound.db")
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_package_name() -> String {
    if let Ok(name) = std::env::var(PACKAGE_ENV) {
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }

    // App processes on Android are named after their package.
    #[cfg(target_os = "android")]
    {
        if let Some(name) = std::fs::read("/proc/self/cmdline")
            .ok()
            .and_then(|raw| package_from_cmdline(&raw))
        {
            return name;
        }
    }

    DEFAULT_PACKAGE_NAME.to_string()
}

#[cfg(target_arch = "wasm32")]
fn resolve_package_name() -> String {
    DEFAULT_PACKAGE_NAME.to_string()
}

/// Extracts the package from a NUL separated process command line,
/// dropping any `:service` process suffix.
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
fn package_from_cmdline(raw: &[u8]) -> Option<String> {
    let first = raw.split(|&b| b == 0).next()?;
    let name = String::from_utf8_lossy(first);
    let name = name.split(':').next().unwrap_or_default().trim();
    if name.contains('.') && !name.contains('/') {
        Some(name.to_string())
    } else {
        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_data_dir(package_name: &str) -> PathBuf {
    #[cfg(target_os = "android")]
    let data_dir = PathBuf::from("/data/data").join(package_name).join("files");

    #[cfg(not(target_os = "android"))]
    let data_dir = {
        let _ = package_name;
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rustysound")
    };

    if let Err(err) = std::fs::create_dir_all(&data_dir) {
        tracing::warn!("Failed to create data directory {}: {err}", data_dir.display());
    }
    data_dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_from_cmdline_takes_first_argument() {
        let raw = b"app.adarcher.rustysound\0--flag\0";
        assert_eq!(
            package_from_cmdline(raw).as_deref(),
            Some("app.adarcher.rustysound")
        );
    }

    #[test]
    fn package_from_cmdline_strips_process_suffix() {
        let raw = b"app.adarcher.rustysound:playback\0";
        assert_eq!(
            package_from_cmdline(raw).as_deref(),
            Some("app.adarcher.rustysound")
        );
    }

    #[test]
    fn package_from_cmdline_rejects_paths() {
        assert_eq!(package_from_cmdline(b"/system/bin/app_process\0"), None);
        assert_eq!(package_from_cmdline(b""), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn database_lives_in_data_dir() {
        let config = AppConfig {
            app_name: APP_NAME.to_string(),
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            data_dir: PathBuf::from("/tmp/rustysound"),
        };
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/rustysound/rustysound.db")
        );
    }
}
