use crate::media::{PosterCard, SearchResult, TfidfMovie, TfidfRecommendation};
use crate::settings::SEARCH_RESULT_LIMIT;

#[derive(Debug, Clone)]
pub enum CardSource {
    Search(Vec<SearchResult>),
    HomeFeed(Vec<PosterCard>),
    Tfidf(Vec<TfidfRecommendation>),
    Genre(Vec<PosterCard>),
}

impl CardSource {
    pub fn into_cards(self, image_base: &str) -> Vec<PosterCard> {
        match self {
            CardSource::Search(results) => results
                .into_iter()
                .take(SEARCH_RESULT_LIMIT)
                .map(|item| from_search_result(item, image_base))
                .collect(),
            CardSource::HomeFeed(cards) | CardSource::Genre(cards) => cards,
            CardSource::Tfidf(items) => items.into_iter().filter_map(from_tfidf).collect(),
        }
    }
}

fn from_search_result(item: SearchResult, image_base: &str) -> PosterCard {
    PosterCard {
        id: item.id,
        title: item.title,
        poster_url: item
            .poster_path
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", image_base, path)),
    }
}

fn from_tfidf(item: TfidfRecommendation) -> Option<PosterCard> {
    let movie = item.tmdb.filter(|m| m != &TfidfMovie::default())?;
    Some(PosterCard {
        id: movie.tmdb_id,
        title: movie.title,
        poster_url: movie.poster_url,
    })
}
