use std::path::PathBuf;

pub struct RatingSettings {
    pub baseline_rating: f64,
    pub k_factor: f64,
    pub logistic_scale: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            baseline_rating: 1000.0,
            k_factor: 32.0,
            logistic_scale: 400.0, // 400 points = 10:1 odds
        }
    }
}

pub struct CategorySettings {
    /// Players strictly younger than this are "u23"
    pub youth_age_limit: i32,
    /// Players at least this old are "ue30"
    pub veteran_min_age: i32,
}

impl Default for CategorySettings {
    fn default() -> Self {
        Self {
            youth_age_limit: 23,
            veteran_min_age: 30,
        }
    }
}

pub struct ServerSettings {
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ServerSettings {
    pub fn from_env() -> Self {
        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        Self {
            upload_dir: PathBuf::from(upload_dir),
            static_dir: PathBuf::from(static_dir),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

pub struct AppConfig {
    pub rating: RatingSettings,
    pub categories: CategorySettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            categories: CategorySettings::default(),
            server: ServerSettings::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_defaults() {
        let settings = RatingSettings::default();

        assert_eq!(settings.baseline_rating, 1000.0);
        assert_eq!(settings.k_factor, 32.0);
        assert_eq!(settings.logistic_scale, 400.0);
    }

    #[test]
    fn test_category_defaults() {
        let settings = CategorySettings::default();

        assert_eq!(settings.youth_age_limit, 23);
        assert_eq!(settings.veteran_min_age, 30);
    }
}
