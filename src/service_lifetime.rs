//! State behind the "Other" settings screen: battery optimization
//! exemption requests and the invincible service preference.

use crate::db::Preferences;
use crate::platform::{PlatformCapabilities, SettingsIntent, SystemSettings};

pub const ALREADY_UNRESTRICTED: &str = "Already unrestricted";
pub const DISABLE_RESTRICTIONS: &str = "Disable background restrictions";

pub fn missing_settings_notice(app_name: &str) -> String {
    format!("Couldn't find battery optimization settings, please whitelist {app_name} manually")
}

/// Where the exemption request currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    AwaitingExternalResult(SettingsIntent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Unsupported,
    AlreadyUnrestricted,
    AwaitingResult,
}

/// What the screen has to do after the battery row was activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Open this screen, then report back through
    /// [`ServiceLifetimeSettings::complete_external_result`].
    Launch(SettingsIntent),
    /// Nothing on the device can grant the exemption.
    NoSettingsScreen,
    Ignored(IgnoreReason),
}

/// What the view does after the battery row was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationStep {
    /// Show this text as a short toast.
    Notice(String),
    /// A settings screen is open; call
    /// [`ServiceLifetimeSettings::complete_external_result`] once the user
    /// is back.
    AwaitReturn,
    Nothing,
}

/// How the battery optimization row renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryRow {
    pub enabled: bool,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceLifetimeSettings {
    package: String,
    capabilities: PlatformCapabilities,
    battery_optimization_ignored: bool,
    invincibility_enabled: bool,
    state: FlowState,
}

impl ServiceLifetimeSettings {
    pub fn load(package: &str, platform: &dyn SystemSettings, prefs: &Preferences) -> Self {
        Self {
            package: package.to_string(),
            capabilities: platform.capabilities(),
            battery_optimization_ignored: platform.is_ignoring_battery_optimizations(),
            invincibility_enabled: prefs.is_invincibility_enabled(),
            state: FlowState::Idle,
        }
    }

    pub fn battery_row(&self) -> BatteryRow {
        if self.is_battery_optimization_ignored() {
            BatteryRow {
                enabled: false,
                text: ALREADY_UNRESTRICTED,
            }
        } else {
            BatteryRow {
                enabled: true,
                text: DISABLE_RESTRICTIONS,
            }
        }
    }

    pub fn is_battery_optimization_ignored(&self) -> bool {
        self.battery_optimization_ignored
    }

    pub fn is_invincibility_enabled(&self) -> bool {
        self.invincibility_enabled
    }

    pub fn capabilities(&self) -> PlatformCapabilities {
        self.capabilities
    }

    #[cfg(test)]
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Chooses the settings screen to open: the per-app dialog when the
    /// device has one, the system-wide list otherwise.
    pub fn request_exemption(&mut self, platform: &dyn SystemSettings) -> RequestOutcome {
        if !self.capabilities.battery_optimizations {
            return RequestOutcome::Ignored(IgnoreReason::Unsupported);
        }
        if self.battery_optimization_ignored {
            return RequestOutcome::Ignored(IgnoreReason::AlreadyUnrestricted);
        }
        if matches!(self.state, FlowState::AwaitingExternalResult(_)) {
            return RequestOutcome::Ignored(IgnoreReason::AwaitingResult);
        }

        let primary = SettingsIntent::RequestIgnoreBatteryOptimizations {
            package: self.package.clone(),
        };
        let fallback = SettingsIntent::IgnoreBatteryOptimizationSettings;

        let Some(intent) = [primary, fallback]
            .into_iter()
            .find(|intent| platform.can_resolve(intent))
        else {
            tracing::info!("No battery optimization settings screen on this device");
            return RequestOutcome::NoSettingsScreen;
        };

        tracing::debug!("Launching {}", intent.action());
        self.state = FlowState::AwaitingExternalResult(intent.clone());
        RequestOutcome::Launch(intent)
    }

    /// Handles a tap on the battery row: picks a screen, launches it, and
    /// maps every failure to the notice naming `app_name`.
    pub fn activate(&mut self, platform: &dyn SystemSettings, app_name: &str) -> ActivationStep {
        match self.request_exemption(platform) {
            RequestOutcome::Launch(intent) => match platform.launch(&intent) {
                Ok(()) => ActivationStep::AwaitReturn,
                Err(err) => {
                    tracing::warn!("Failed to open battery optimization settings: {err}");
                    self.complete_external_result(platform);
                    ActivationStep::Notice(missing_settings_notice(app_name))
                }
            },
            RequestOutcome::NoSettingsScreen => {
                ActivationStep::Notice(missing_settings_notice(app_name))
            }
            RequestOutcome::Ignored(reason) => {
                tracing::debug!("Battery row activation ignored: {reason:?}");
                ActivationStep::Nothing
            }
        }
    }

    /// Called when the user is back from the launched screen. Re-reads the
    /// exemption from the OS and returns it.
    pub fn complete_external_result(&mut self, platform: &dyn SystemSettings) -> bool {
        self.state = FlowState::Idle;
        self.battery_optimization_ignored = platform.is_ignoring_battery_optimizations();
        tracing::debug!(
            "Battery optimizations ignored after settings: {}",
            self.battery_optimization_ignored
        );
        self.battery_optimization_ignored
    }

    /// Stores the switch value as is. The switch keeps the new value even
    /// if persisting it fails.
    pub fn set_invincibility_enabled(&mut self, prefs: &Preferences, enabled: bool) {
        self.invincibility_enabled = enabled;
        if let Err(err) = prefs.set_invincibility_enabled(enabled) {
            tracing::warn!("Failed to persist invincible service preference: {err}");
        }
    }
}
