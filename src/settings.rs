use std::time::Duration;

pub const API_BASE_ENV: &str = "MOVIE_API_BASE";
pub const DEFAULT_API_BASE: &str = "https://movie-recommendation-system-2fek.onrender.com";
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const CACHE_TTL: Duration = Duration::from_secs(30);
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

pub const SEARCH_RESULT_LIMIT: usize = 24;
pub const HOME_FEED_LIMIT: usize = 24;
pub const TFIDF_TOP_N: usize = 12;
pub const GENRE_LIMIT: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub api_base: String,
    pub image_base: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: String::from(DEFAULT_API_BASE),
            image_base: String::from(IMAGE_BASE),
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from_api_base(std::env::var(API_BASE_ENV).ok())
    }

    pub fn from_api_base(api_base: Option<String>) -> Self {
        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_API_BASE));
        Self {
            api_base,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_base_falls_back_to_default() {
        assert_eq!(AppSettings::from_api_base(None), AppSettings::default());
        assert_eq!(
            AppSettings::from_api_base(Some(String::from("   "))).api_base,
            DEFAULT_API_BASE
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let settings = AppSettings::from_api_base(Some(String::from("http://127.0.0.1:8000/")));
        assert_eq!(settings.api_base, "http://127.0.0.1:8000");
        assert_eq!(settings.image_base, IMAGE_BASE);
    }
}
