use std::collections::{HashMap, HashSet};

use iced::widget::image::Handle;
use iced::Color;
use serde::Deserialize;

use crate::session::PageContent;

pub const BACKGROUND_BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0);
pub const SURFACE_DARK_GRAY: Color = Color::from_rgb(0.078, 0.078, 0.078);
pub const ACCENT_RED: Color = Color::from_rgb(0.898, 0.035, 0.078);
pub const WARNING_AMBER: Color = Color::from_rgb(0.957, 0.702, 0.153);
pub const TEXT_WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
pub const TEXT_GRAY: Color = Color::from_rgb(0.702, 0.702, 0.702);

pub type MovieId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Trending,
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Trending,
        Category::Popular,
        Category::TopRated,
        Category::NowPlaying,
        Category::Upcoming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Trending => "trending",
            Category::Popular => "popular",
            Category::TopRated => "top_rated",
            Category::NowPlaying => "now_playing",
            Category::Upcoming => "upcoming",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Trending => write!(f, "Trending"),
            Category::Popular => write!(f, "Popular"),
            Category::TopRated => write!(f, "Top Rated"),
            Category::NowPlaying => write!(f, "Now Playing"),
            Category::Upcoming => write!(f, "Upcoming"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumns(u8);

impl GridColumns {
    pub const MIN: u8 = 4;
    pub const MAX: u8 = 8;

    pub fn new(columns: u8) -> Self {
        Self(columns.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for GridColumns {
    fn default() -> Self {
        Self(6)
    }
}

pub fn grid_rows(card_count: usize, columns: GridColumns) -> usize {
    card_count.div_ceil(columns.get() as usize)
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PosterCard {
    #[serde(rename = "tmdb_id", default)]
    pub id: Option<MovieId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: Option<MovieId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TfidfMovie {
    #[serde(default)]
    pub tmdb_id: Option<MovieId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TfidfRecommendation {
    #[serde(default)]
    pub tmdb: Option<TfidfMovie>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationBundle {
    #[serde(default)]
    pub tfidf_recommendations: Vec<TfidfRecommendation>,
    #[serde(default)]
    pub genre_recommendations: Vec<PosterCard>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub backdrop_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("{body}")]
    Backend {
        status: u16,
        body: serde_json::Value,
    },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("empty response")]
    Empty,
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    cache: HashMap<String, Handle>,
    pending: HashSet<String>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<&Handle> {
        self.cache.get(url)
    }

    pub fn insert(&mut self, url: String, handle: Handle) {
        self.pending.remove(&url);
        self.cache.insert(url, handle);
    }

    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }

    pub fn mark_pending(&mut self, url: String) {
        self.pending.insert(url);
    }

    pub fn clear_pending(&mut self, url: &str) {
        self.pending.remove(url);
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    GoHome,
    OpenMovie(MovieId),
    CategorySelected(Category),
    GridColumnsChanged(u8),
    SearchQueryChanged(String),
    SearchSubmit,
    SearchDebounced(u64),
    PageLoaded(u64, PageContent),
    LoadImage(String),
    ImageLoaded(String, Result<Handle, String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_names_and_labels() {
        let wire: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        assert_eq!(
            wire,
            ["trending", "popular", "top_rated", "now_playing", "upcoming"]
        );
        assert_eq!(Category::TopRated.to_string(), "Top Rated");
        assert_eq!(Category::NowPlaying.to_string(), "Now Playing");
        assert_eq!(Category::default(), Category::Trending);
    }

    #[test]
    fn grid_columns_are_clamped() {
        assert_eq!(GridColumns::default().get(), 6);
        assert_eq!(GridColumns::new(2).get(), 4);
        assert_eq!(GridColumns::new(12).get(), 8);
        assert_eq!(GridColumns::new(5).get(), 5);
    }

    #[test]
    fn ten_cards_fill_ceil_rows() {
        assert_eq!(grid_rows(10, GridColumns::new(4)), 3);
        assert_eq!(grid_rows(10, GridColumns::new(5)), 2);
        assert_eq!(grid_rows(10, GridColumns::new(6)), 2);
        assert_eq!(grid_rows(10, GridColumns::new(8)), 2);
        assert_eq!(grid_rows(0, GridColumns::default()), 0);
    }

    #[test]
    fn feed_items_deserialize_as_cards() {
        let card: PosterCard = serde_json::from_value(serde_json::json!({
            "tmdb_id": 155,
            "title": "The Dark Knight",
            "poster_url": "https://image.tmdb.org/t/p/w500/qJ2tW6WMUDux911r6m7haRef0WH.jpg"
        }))
        .unwrap();
        assert_eq!(card.id, Some(155));
        assert_eq!(card.title.as_deref(), Some("The Dark Knight"));

        let bare: PosterCard = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(bare, PosterCard::default());
    }

    #[test]
    fn backend_error_displays_body_verbatim() {
        let err = ApiError::Backend {
            status: 404,
            body: serde_json::json!({"detail": "Movie not found"}),
        };
        assert_eq!(err.to_string(), r#"{"detail":"Movie not found"}"#);
        assert_eq!(
            ApiError::Transport(String::from("connection refused")).to_string(),
            "connection refused"
        );
    }

    #[test]
    fn image_cache_clears_pending_on_insert() {
        let mut cache = ImageCache::new();
        let url = String::from("https://image.tmdb.org/t/p/w500/a.jpg");
        cache.mark_pending(url.clone());
        assert!(cache.is_pending(&url));
        cache.insert(url.clone(), Handle::from_bytes(vec![0u8; 4]));
        assert!(!cache.is_pending(&url));
        assert!(cache.get(&url).is_some());
    }
}
