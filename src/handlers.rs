use iced::Task;
use tracing::{debug, info, warn};

use crate::api::fetch_image_bytes;
use crate::media::{Category, GridColumns, Message, MovieId};
use crate::session::{PageContent, View};
use crate::settings::SEARCH_DEBOUNCE;
use crate::Recommender;

pub fn handle_message(app: &mut Recommender, message: Message) -> Task<Message> {
    match message {
        Message::GoHome => handle_go_home(app),
        Message::OpenMovie(id) => handle_open_movie(app, id),
        Message::CategorySelected(category) => handle_category_selected(app, category),
        Message::GridColumnsChanged(columns) => {
            app.session.grid_columns = GridColumns::new(columns);
            Task::none()
        }
        Message::SearchQueryChanged(query) => handle_search_query_changed(app, query),
        Message::SearchSubmit => handle_search_submit(app),
        Message::SearchDebounced(generation) => handle_search_debounced(app, generation),
        Message::PageLoaded(generation, content) => handle_page_loaded(app, generation, content),
        Message::LoadImage(url) => handle_load_image(app, url),
        Message::ImageLoaded(url, result) => handle_image_loaded(app, url, result),
    }
}

fn handle_go_home(app: &mut Recommender) -> Task<Message> {
    info!("navigate home");
    app.session.view_state.goto_home();
    app.refresh()
}

fn handle_open_movie(app: &mut Recommender, id: MovieId) -> Task<Message> {
    info!(movie_id = id, "open movie details");
    app.session.view_state.goto_details(id);
    app.refresh()
}

fn handle_category_selected(app: &mut Recommender, category: Category) -> Task<Message> {
    app.session.category = category;
    if app.session.view_state.view() != View::Home {
        return Task::none();
    }
    app.refresh()
}

fn handle_search_query_changed(app: &mut Recommender, query: String) -> Task<Message> {
    app.session.search_query = query;
    app.search_generation += 1;
    let generation = app.search_generation;
    Task::perform(
        async {
            tokio::time::sleep(SEARCH_DEBOUNCE).await;
        },
        move |_| Message::SearchDebounced(generation),
    )
}

fn handle_search_submit(app: &mut Recommender) -> Task<Message> {
    app.search_generation += 1;
    if app.session.view_state.view() != View::Home {
        return Task::none();
    }
    app.refresh()
}

fn handle_search_debounced(app: &mut Recommender, generation: u64) -> Task<Message> {
    if generation != app.search_generation || app.session.view_state.view() != View::Home {
        return Task::none();
    }
    app.refresh()
}

fn handle_page_loaded(
    app: &mut Recommender,
    generation: u64,
    content: PageContent,
) -> Task<Message> {
    if generation != app.render_generation {
        debug!(generation, current = app.render_generation, "dropping stale render pass");
        return Task::none();
    }
    let image_tasks: Vec<Task<Message>> = content
        .image_urls()
        .into_iter()
        .filter(|url| app.image_cache.get(url).is_none())
        .map(|url| Task::done(Message::LoadImage(url)))
        .collect();
    app.page_content = content;
    Task::batch(image_tasks)
}

fn handle_load_image(app: &mut Recommender, url: String) -> Task<Message> {
    if app.image_cache.get(&url).is_some() || app.image_cache.is_pending(&url) {
        return Task::none();
    }
    app.image_cache.mark_pending(url.clone());
    let image_url = url.clone();

    Task::perform(fetch_image_bytes(image_url), move |result| {
        let handle = result.map(|bytes| iced::widget::image::Handle::from_bytes(bytes));
        Message::ImageLoaded(url, handle)
    })
}

fn handle_image_loaded(
    app: &mut Recommender,
    url: String,
    result: Result<iced::widget::image::Handle, String>,
) -> Task<Message> {
    match result {
        Ok(handle) => app.image_cache.insert(url, handle),
        Err(error) => {
            warn!(url = %url, error = %error, "image download failed");
            app.image_cache.clear_pending(&url);
        }
    }
    Task::none()
}
