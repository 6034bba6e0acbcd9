use iced::widget::{button, column, row, text, Space};
use iced::{Element, Length, Padding};

use crate::components::{
    bold_text, divider, flat_button_style, icon, view_error, view_warning, ICON_ARROW_LEFT,
};
use crate::media::{Message, MovieDetails, TEXT_GRAY, TEXT_WHITE};
use crate::session::{DetailsPage, PageContent};
use crate::Recommender;

const DETAIL_POSTER_HEIGHT: f32 = 420.0;
const BACKDROP_HEIGHT: f32 = 360.0;

impl Recommender {
    pub fn view_details(&self) -> Element<'_, Message> {
        match &self.page_content {
            PageContent::Details(page) => self.view_details_page(page),
            PageContent::Warning(message) => view_warning(message),
            PageContent::Error(message) => view_error(message),
            PageContent::Loading => self.view_skeleton_grid(),
            PageContent::Search { .. } | PageContent::Feed { .. } => Space::new().into(),
        }
    }

    fn view_details_page<'a>(&'a self, page: &'a DetailsPage) -> Element<'a, Message> {
        let back_button = button(
            row![
                icon(ICON_ARROW_LEFT).size(14).color(TEXT_WHITE),
                text("Back to Home").size(14).color(TEXT_WHITE)
            ]
            .spacing(8)
            .align_y(iced::Alignment::Center),
        )
        .padding(Padding::new(8.0).left(14.0).right(14.0))
        .style(flat_button_style)
        .on_press(Message::GoHome);

        let mut sections =
            column![back_button, self.view_details_summary(&page.details)].spacing(32);

        if let Some(backdrop_url) = page.details.backdrop_url.as_deref() {
            sections = sections.push(
                column![
                    bold_text("Backdrop", 20, TEXT_WHITE),
                    self.view_poster_image(Some(backdrop_url), BACKDROP_HEIGHT)
                ]
                .spacing(12),
            );
        }

        sections
            .push(divider())
            .push(
                column![
                    bold_text("Similar Movies (TF-IDF)", 20, TEXT_WHITE),
                    self.view_poster_grid(&page.tfidf_cards)
                ]
                .spacing(16),
            )
            .push(
                column![
                    bold_text("More Like This (Genre)", 20, TEXT_WHITE),
                    self.view_poster_grid(&page.genre_cards)
                ]
                .spacing(16),
            )
            .width(Length::Fill)
            .into()
    }

    fn view_details_summary<'a>(&'a self, details: &'a MovieDetails) -> Element<'a, Message> {
        let poster_url = details.poster_url.as_deref();
        let poster = column![self.view_poster_image(poster_url, DETAIL_POSTER_HEIGHT)]
            .width(Length::FillPortion(2));

        let overview = details
            .overview
            .clone()
            .unwrap_or_else(|| String::from("No overview available."));
        let info = column![
            bold_text(details.title.clone().unwrap_or_default(), 30, TEXT_WHITE),
            text(overview)
                .size(16)
                .color(TEXT_GRAY)
                .wrapping(text::Wrapping::Word)
        ]
        .spacing(16)
        .width(Length::FillPortion(5));

        row![poster, info].spacing(32).into()
    }
}
