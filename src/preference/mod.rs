use std::{
    str::FromStr,
    sync::{Arc, RwLock},
};

use lazy_static::lazy_static;
use preferences::{AppInfo, Preferences, PreferencesMap};

const PREFS_PATH: &str = "tracker";
const APP_INFO: AppInfo = AppInfo {
    name: "solar-flight-clock",
    author: "solar-flight-clock",
};

// Preference constants
pub const ROUTE_SPACING_KM: &str = "Route.spacingKm";
pub const ROUTE_SPACING_TOLERANCE_KM: &str = "Route.spacingToleranceKm";
pub const REPORT_JSON: &str = "Report.json";

lazy_static! {
    static ref MANAGER: PreferenceManager = PreferenceManager {
        preferences: {
            match PreferencesMap::<String>::load(&APP_INFO, PREFS_PATH) {
                Ok(map) => Arc::new(RwLock::new(map)),
                Err(_) => Arc::new(RwLock::new(PreferencesMap::new())),
            }
        },
        path: PREFS_PATH,
    };
}

pub struct PreferenceManager {
    preferences: Arc<RwLock<PreferencesMap>>,
    path: &'static str,
}

impl PreferenceManager {
    pub fn get<T: FromStr>(&self, key: &str) -> Option<T> {
        match self.preferences.read().unwrap().get(key) {
            Some(s) => s.parse::<T>().ok(),
            None => None,
        }
    }

    pub fn put<T: ToString>(&self, key: &str, value: T) {
        {
            let mut prefs = self.preferences.write().unwrap();
            prefs.insert(key.to_string(), value.to_string());
        }
        self.store();
    }

    fn store(&self) {
        let prefs = self.preferences.read().unwrap();
        let _ = prefs.save(&APP_INFO, self.path);
    }
}

pub fn manager() -> &'static PreferenceManager {
    &MANAGER
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, RwLock};

    use preferences::PreferencesMap;

    use crate::preference;

    #[test]
    fn test_save_restore() {
        let manager = preference::PreferenceManager {
            preferences: Arc::new(RwLock::new(PreferencesMap::new())),
            path: "solar-clock-unit-test",
        };

        manager.put(preference::ROUTE_SPACING_KM, 12.5_f64);
        manager.put(preference::REPORT_JSON, true);

        assert_eq!(
            manager.get::<f64>(preference::ROUTE_SPACING_KM),
            Some(12.5)
        );
        assert_eq!(manager.get::<bool>(preference::REPORT_JSON), Some(true));
        assert_eq!(manager.get::<f64>("No such key"), None);
    }
}
