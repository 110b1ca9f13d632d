//! Android backend calling the framework through JNI.

use jni::objects::JObject;
use jni::{AttachGuard, JavaVM};

use super::{PlatformCapabilities, PlatformError, SettingsIntent, SystemSettings};

pub struct AndroidSystemSettings {
    package: String,
    sdk: u32,
    capabilities: PlatformCapabilities,
}

impl AndroidSystemSettings {
    pub fn detect(package: String) -> Self {
        let sdk = read_sdk_level().unwrap_or_else(|err| {
            tracing::warn!("Could not read SDK level, assuming pre-Marshmallow: {err}");
            0
        });

        Self {
            package,
            sdk,
            capabilities: PlatformCapabilities::for_sdk(sdk),
        }
    }

    pub fn sdk(&self) -> u32 {
        self.sdk
    }

    fn query_ignoring(&self) -> Result<bool, PlatformError> {
        with_context(|env, context| {
            let service = env.new_string("power")?;
            let power_manager = env
                .call_method(
                    context,
                    "getSystemService",
                    "(Ljava/lang/String;)Ljava/lang/Object;",
                    &[(&service).into()],
                )?
                .l()?;
            let package = env.new_string(&self.package)?;
            let ignoring = env
                .call_method(
                    &power_manager,
                    "isIgnoringBatteryOptimizations",
                    "(Ljava/lang/String;)Z",
                    &[(&package).into()],
                )?
                .z()?;
            Ok(ignoring)
        })
    }

    fn query_resolvable(&self, intent: &SettingsIntent) -> Result<bool, PlatformError> {
        with_context(|env, context| {
            let java_intent = new_intent(env, intent)?;
            let package_manager = env
                .call_method(
                    context,
                    "getPackageManager",
                    "()Landroid/content/pm/PackageManager;",
                    &[],
                )?
                .l()?;
            let component = env
                .call_method(
                    &java_intent,
                    "resolveActivity",
                    "(Landroid/content/pm/PackageManager;)Landroid/content/ComponentName;",
                    &[(&package_manager).into()],
                )?
                .l()?;
            Ok(!component.is_null())
        })
    }
}

impl SystemSettings for AndroidSystemSettings {
    fn capabilities(&self) -> PlatformCapabilities {
        self.capabilities
    }

    fn is_ignoring_battery_optimizations(&self) -> bool {
        if !self.capabilities.battery_optimizations {
            return true;
        }

        self.query_ignoring().unwrap_or_else(|err| {
            tracing::warn!("isIgnoringBatteryOptimizations failed: {err}");
            false
        })
    }

    fn can_resolve(&self, intent: &SettingsIntent) -> bool {
        self.query_resolvable(intent).unwrap_or_else(|err| {
            tracing::debug!("resolveActivity failed for {}: {err}", intent.action());
            false
        })
    }

    fn launch(&self, intent: &SettingsIntent) -> Result<(), PlatformError> {
        let action = intent.action();
        with_context(|env, context| {
            let java_intent = new_intent(env, intent)?;
            env.call_method(
                context,
                "startActivity",
                "(Landroid/content/Intent;)V",
                &[(&java_intent).into()],
            )?;
            Ok(())
        })
        .map_err(|err| match err {
            PlatformError::Jni(source) => PlatformError::LaunchFailed {
                action,
                message: source.to_string(),
            },
            other => other,
        })
    }
}

fn read_sdk_level() -> Result<u32, PlatformError> {
    with_context(|env, _context| {
        let sdk = env
            .get_static_field("android/os/Build$VERSION", "SDK_INT", "I")?
            .i()?;
        Ok(u32::try_from(sdk).unwrap_or_default())
    })
}

/// Builds `new Intent(action)` with the optional `package:` data uri.
fn new_intent<'local>(
    env: &mut AttachGuard<'local>,
    intent: &SettingsIntent,
) -> Result<JObject<'local>, PlatformError> {
    let action = env.new_string(intent.action())?;
    let java_intent = env.new_object(
        "android/content/Intent",
        "(Ljava/lang/String;)V",
        &[(&action).into()],
    )?;

    if let Some(data) = intent.data() {
        let data = env.new_string(data)?;
        let uri = env
            .call_static_method(
                "android/net/Uri",
                "parse",
                "(Ljava/lang/String;)Landroid/net/Uri;",
                &[(&data).into()],
            )?
            .l()?;
        env.call_method(
            &java_intent,
            "setData",
            "(Landroid/net/Uri;)Landroid/content/Intent;",
            &[(&uri).into()],
        )?;
    }

    Ok(java_intent)
}

/// Runs `f` with the attached JNI environment and the app's `Context`.
/// A pending Java exception is cleared and reported as an error.
fn with_context<T>(
    f: impl for<'local> FnOnce(&mut AttachGuard<'local>, &JObject<'local>) -> Result<T, PlatformError>,
) -> Result<T, PlatformError> {
    let ctx = ndk_context::android_context();
    // SAFETY: the pointers come from the activity that hosts the app and
    // stay valid for the lifetime of the process.
    let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }?;
    let mut env = vm.attach_current_thread()?;
    // The context is a global reference owned by the activity; wrapping it
    // does not take ownership.
    let context = unsafe { JObject::from_raw(ctx.context().cast()) };

    let result = f(&mut env, &context);
    if env.exception_check().unwrap_or(false) {
        let _ = env.exception_describe();
        let _ = env.exception_clear();
    }
    result
}
