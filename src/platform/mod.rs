//! Platform abstraction layer
//!
//! Maps the build target to a tuning [`Profile`]. Hosts may override the
//! detected platform (e.g. a desktop build running a phone-sized window).

use crate::tuning::Profile;

/// Where the game is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Desktop,
    Web,
}

impl Platform {
    /// Platform of the current build target
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Platform::Web
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Desktop
        }
    }

    /// Tuning preset for this platform (web plays like desktop)
    pub fn profile(&self) -> Profile {
        match self {
            Platform::Android => Profile::Android,
            Platform::Ios => Profile::Ios,
            Platform::Desktop | Platform::Web => Profile::Desktop,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Desktop => "Desktop",
            Platform::Web => "Web",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles() {
        assert_eq!(Platform::Android.profile(), Profile::Android);
        assert_eq!(Platform::Ios.profile(), Profile::Ios);
        assert_eq!(Platform::Web.profile(), Profile::Desktop);
    }

    #[cfg(all(not(target_arch = "wasm32"), not(target_os = "android"), not(target_os = "ios")))]
    #[test]
    fn test_current_is_desktop() {
        assert_eq!(Platform::current(), Platform::Desktop);
    }
}
