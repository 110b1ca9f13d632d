use super::{PlatformCapabilities, PlatformError, SettingsIntent, SystemSettings};

/// Desktop and web builds: nothing restricts background playback, so the
/// app reports itself as already unrestricted.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedSystemSettings;

impl SystemSettings for UnsupportedSystemSettings {
    fn capabilities(&self) -> PlatformCapabilities {
        PlatformCapabilities::default()
    }

    fn is_ignoring_battery_optimizations(&self) -> bool {
        true
    }

    fn can_resolve(&self, _intent: &SettingsIntent) -> bool {
        false
    }

    fn launch(&self, intent: &SettingsIntent) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported(intent.action()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_unrestricted_without_capabilities() {
        let settings = UnsupportedSystemSettings;
        assert!(settings.is_ignoring_battery_optimizations());
        assert!(!settings.capabilities().battery_optimizations);
        assert!(!settings.can_resolve(&SettingsIntent::IgnoreBatteryOptimizationSettings));
    }

    #[test]
    fn launch_is_rejected() {
        let result =
            UnsupportedSystemSettings.launch(&SettingsIntent::IgnoreBatteryOptimizationSettings);
        assert!(matches!(result, Err(PlatformError::Unsupported(_))));
    }
}
