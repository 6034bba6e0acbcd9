use tracing::info;

use crate::api::ApiClient;
use crate::media::{Category, GridColumns, MovieDetails, MovieId, PosterCard};
use crate::normalize::CardSource;
use crate::settings::{GENRE_LIMIT, HOME_FEED_LIMIT, TFIDF_TOP_N};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Details,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    view: View,
    selected_movie_id: Option<MovieId>,
}

impl ViewState {
    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_movie_id(&self) -> Option<MovieId> {
        self.selected_movie_id
    }

    pub fn goto_home(&mut self) {
        self.view = View::Home;
        self.selected_movie_id = None;
    }

    pub fn goto_details(&mut self, id: MovieId) {
        self.view = View::Details;
        self.selected_movie_id = Some(id);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub view_state: ViewState,
    pub search_query: String,
    pub category: Category,
    pub grid_columns: GridColumns,
}

impl Session {
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            view: self.view_state.view(),
            selected_movie_id: self.view_state.selected_movie_id(),
            search_query: self.search_query.clone(),
            category: self.category,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub view: View,
    pub selected_movie_id: Option<MovieId>,
    pub search_query: String,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsPage {
    pub details: MovieDetails,
    pub tfidf_cards: Vec<PosterCard>,
    pub genre_cards: Vec<PosterCard>,
}

fn card_urls(cards: &[PosterCard]) -> Vec<String> {
    cards
        .iter()
        .filter_map(|c| c.poster_url.clone())
        .filter(|url| !url.is_empty())
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    Loading,
    Search {
        query: String,
        cards: Vec<PosterCard>,
    },
    Feed {
        category: Category,
        cards: Vec<PosterCard>,
    },
    Details(Box<DetailsPage>),
    Warning(String),
    Error(String),
}

impl PageContent {
    pub fn image_urls(&self) -> Vec<String> {
        match self {
            PageContent::Search { cards, .. } | PageContent::Feed { cards, .. } => {
                card_urls(cards)
            }
            PageContent::Details(page) => page
                .details
                .poster_url
                .iter()
                .chain(page.details.backdrop_url.iter())
                .cloned()
                .chain(card_urls(&page.tfidf_cards))
                .chain(card_urls(&page.genre_cards))
                .collect(),
            PageContent::Loading | PageContent::Warning(_) | PageContent::Error(_) => Vec::new(),
        }
    }
}

pub async fn load_page(client: ApiClient, request: RenderRequest) -> PageContent {
    info!(view = ?request.view, movie_id = ?request.selected_movie_id, "render pass");
    match request.view {
        View::Home => load_home(&client, &request).await,
        View::Details => match request.selected_movie_id {
            Some(id) => load_details(&client, id).await,
            None => PageContent::Warning(String::from("No movie selected.")),
        },
    }
}

async fn load_home(client: &ApiClient, request: &RenderRequest) -> PageContent {
    let query = request.search_query.trim();
    if !query.is_empty() {
        return match client.search_titles(query).await {
            Ok(response) => PageContent::Search {
                query: query.to_string(),
                cards: CardSource::Search(response.results).into_cards(client.image_base_url()),
            },
            Err(e) => PageContent::Error(format!("Search failed: {}", e)),
        };
    }

    match client.home_feed(request.category, HOME_FEED_LIMIT).await {
        Ok(items) => PageContent::Feed {
            category: request.category,
            cards: CardSource::HomeFeed(items).into_cards(client.image_base_url()),
        },
        Err(e) => PageContent::Error(format!("Failed to load movies: {}", e)),
    }
}

async fn load_details(client: &ApiClient, id: MovieId) -> PageContent {
    let details = match client.movie_details(id).await {
        Ok(details) => details,
        Err(e) => return PageContent::Error(format!("Failed to load movie details: {}", e)),
    };

    let title = details.title.clone().unwrap_or_default();
    let bundle = match client.recommendations(&title, TFIDF_TOP_N, GENRE_LIMIT).await {
        Ok(bundle) => bundle,
        Err(e) => return PageContent::Error(format!("Failed to load recommendations: {}", e)),
    };

    let image_base = client.image_base_url();
    PageContent::Details(Box::new(DetailsPage {
        details,
        tfidf_cards: CardSource::Tfidf(bundle.tfidf_recommendations).into_cards(image_base),
        genre_cards: CardSource::Genre(bundle.genre_recommendations).into_cards(image_base),
    }))
}
