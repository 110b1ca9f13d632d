//! Operating system hooks used by the service lifetime settings.

use std::rc::Rc;

use crate::config::AppConfig;

#[cfg(target_os = "android")]
mod android;
mod unsupported;

#[cfg(target_os = "android")]
pub use android::AndroidSystemSettings;
pub use unsupported::UnsupportedSystemSettings;

pub const ACTION_REQUEST_IGNORE_BATTERY_OPTIMIZATIONS: &str =
    "android.settings.REQUEST_IGNORE_BATTERY_OPTIMIZATIONS";
pub const ACTION_IGNORE_BATTERY_OPTIMIZATION_SETTINGS: &str =
    "android.settings.IGNORE_BATTERY_OPTIMIZATION_SETTINGS";

/// Battery optimizations exist from Android 6 (M).
pub const SDK_BATTERY_OPTIMIZATIONS: u32 = 23;
/// From Android 12 (S) a paused foreground service survives only when the
/// app is exempt from battery optimizations.
pub const SDK_INVINCIBILITY_REQUIRES_EXEMPTION: u32 = 31;

/// A system settings screen the app can ask the OS to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsIntent {
    /// Per-app exemption dialog.
    RequestIgnoreBatteryOptimizations { package: String },
    /// System-wide battery optimization list.
    IgnoreBatteryOptimizationSettings,
}

impl SettingsIntent {
    pub fn action(&self) -> &'static str {
        match self {
            SettingsIntent::RequestIgnoreBatteryOptimizations { .. } => {
                ACTION_REQUEST_IGNORE_BATTERY_OPTIMIZATIONS
            }
            SettingsIntent::IgnoreBatteryOptimizationSettings => {
                ACTION_IGNORE_BATTERY_OPTIMIZATION_SETTINGS
            }
        }
    }

    pub fn data(&self) -> Option<String> {
        match self {
            SettingsIntent::RequestIgnoreBatteryOptimizations { package } => {
                Some(format!("package:{package}"))
            }
            SettingsIntent::IgnoreBatteryOptimizationSettings => None,
        }
    }
}

/// Platform features that change what the screen offers. Resolved once at
/// startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformCapabilities {
    pub battery_optimizations: bool,
    pub invincibility_requires_exemption: bool,
}

impl PlatformCapabilities {
    pub fn for_sdk(sdk: u32) -> Self {
        Self {
            battery_optimizations: sdk >= SDK_BATTERY_OPTIMIZATIONS,
            invincibility_requires_exemption: sdk >= SDK_INVINCIBILITY_REQUIRES_EXEMPTION,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("{0} is not available on this platform")]
    Unsupported(&'static str),
    #[cfg(target_os = "android")]
    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),
    #[error("could not start {action}: {message}")]
    LaunchFailed {
        action: &'static str,
        message: String,
    },
}

/// The OS services the settings screen depends on.
pub trait SystemSettings {
    fn capabilities(&self) -> PlatformCapabilities;

    /// Whether the app is currently exempt from battery optimizations.
    fn is_ignoring_battery_optimizations(&self) -> bool;

    /// Whether some activity on the device handles `intent`.
    fn can_resolve(&self, intent: &SettingsIntent) -> bool;

    /// Starts the activity for `intent`. Returns as soon as the OS accepted
    /// it; the return to the app is observed by the UI.
    fn launch(&self, intent: &SettingsIntent) -> Result<(), PlatformError>;
}

/// Shared handle provided through the component context.
#[derive(Clone)]
pub struct SystemSettingsHandle(pub Rc<dyn SystemSettings>);

impl std::ops::Deref for SystemSettingsHandle {
    type Target = dyn SystemSettings;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Picks the backend for the running platform.
pub fn detect(config: &AppConfig) -> SystemSettingsHandle {
    #[cfg(target_os = "android")]
    {
        let settings = AndroidSystemSettings::detect(config.package_name.clone());
        tracing::info!(
            "Android SDK {} with capabilities {:?}",
            settings.sdk(),
            settings.capabilities()
        );
        SystemSettingsHandle(Rc::new(settings))
    }

    #[cfg(not(target_os = "android"))]
    {
        let _ = config;
        tracing::debug!("Battery optimizations are not managed on this platform");
        SystemSettingsHandle(Rc::new(UnsupportedSystemSettings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_intent_targets_package() {
        let intent = SettingsIntent::RequestIgnoreBatteryOptimizations {
            package: "app.adarcher.rustysound".to_string(),
        };
        assert_eq!(intent.action(), ACTION_REQUEST_IGNORE_BATTERY_OPTIMIZATIONS);
        assert_eq!(
            intent.data().as_deref(),
            Some("package:app.adarcher.rustysound")
        );
    }

    #[test]
    fn fallback_intent_has_no_data() {
        let intent = SettingsIntent::IgnoreBatteryOptimizationSettings;
        assert_eq!(intent.action(), ACTION_IGNORE_BATTERY_OPTIMIZATION_SETTINGS);
        assert_eq!(intent.data(), None);
    }

    #[test]
    fn capabilities_follow_sdk_level() {
        assert_eq!(PlatformCapabilities::for_sdk(22), PlatformCapabilities::default());

        let marshmallow = PlatformCapabilities::for_sdk(23);
        assert!(marshmallow.battery_optimizations);
        assert!(!marshmallow.invincibility_requires_exemption);

        let android_12 = PlatformCapabilities::for_sdk(31);
        assert!(android_12.battery_optimizations);
        assert!(android_12.invincibility_requires_exemption);
    }
}
