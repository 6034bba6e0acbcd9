mod api;
mod cache;
mod cards;
mod components;
mod detail_sections;
mod handlers;
mod media;
mod normalize;
mod session;
mod settings;
#[cfg(test)]
mod test_support;

use iced::widget::{container, row};
use iced::{Element, Font, Length, Size, Task, Theme};
use tracing::info;

use api::ApiClient;
use media::{ImageCache, Message, BACKGROUND_BLACK};
use session::{load_page, PageContent, Session};
use settings::AppSettings;

pub struct Recommender {
    pub session: Session,
    pub page_content: PageContent,
    pub render_generation: u64,
    pub search_generation: u64,
    pub api_client: ApiClient,
    pub image_cache: ImageCache,
}

impl Recommender {
    fn new() -> (Self, Task<Message>) {
        let settings = AppSettings::load();
        info!(api_base = %settings.api_base, "starting movie recommender");

        let mut app = Self {
            session: Session::default(),
            page_content: PageContent::Loading,
            render_generation: 0,
            search_generation: 0,
            api_client: ApiClient::from_settings(&settings),
            image_cache: ImageCache::new(),
        };
        let task = app.refresh();
        (app, task)
    }

    pub fn refresh(&mut self) -> Task<Message> {
        self.render_generation += 1;
        self.page_content = PageContent::Loading;

        let generation = self.render_generation;
        let request = self.session.render_request();
        let client = self.api_client.clone();
        Task::perform(load_page(client, request), move |content| {
            Message::PageLoaded(generation, content)
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        handlers::handle_message(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        let layout = row![self.view_sidebar(), self.view_main_content()]
            .width(Length::Fill)
            .height(Length::Fill);

        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(BACKGROUND_BLACK)),
                ..Default::default()
            })
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    iced::application(Recommender::new, Recommender::update, Recommender::view)
        .title("Movie Recommender")
        .theme(Recommender::theme)
        .window_size(Size::new(1280.0, 800.0))
        .font(iced_fonts::BOOTSTRAP_FONT_BYTES)
        .default_font(Font::DEFAULT)
        .run()
}
