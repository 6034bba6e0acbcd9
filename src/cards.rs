use iced::widget::{button, column, container, text, Column, Row, Space};
use iced::{Border, Color, Element, Length, Shadow};

use crate::components::{flat_button_style, icon, ICON_FILM};
use crate::media::{grid_rows, Message, PosterCard, SURFACE_DARK_GRAY, TEXT_GRAY, TEXT_WHITE};
use crate::Recommender;

const POSTER_HEIGHT: f32 = 240.0;
const TITLE_HEIGHT: f32 = 36.0;

impl Recommender {
    pub fn view_poster_grid<'a>(&'a self, cards: &'a [PosterCard]) -> Element<'a, Message> {
        if cards.is_empty() {
            return container(text("No movies found.").size(14).color(TEXT_GRAY))
                .padding(16)
                .into();
        }

        let columns = self.session.grid_columns;
        let per_row = columns.get() as usize;
        let mut rows: Vec<Element<Message>> = Vec::with_capacity(grid_rows(cards.len(), columns));

        for chunk in cards.chunks(per_row) {
            let mut cells: Vec<Element<Message>> =
                chunk.iter().map(|card| self.view_poster_card(card)).collect();
            while cells.len() < per_row {
                cells.push(Space::new().width(Length::FillPortion(1)).into());
            }
            rows.push(
                Row::with_children(cells)
                    .spacing(16)
                    .align_y(iced::Alignment::Start)
                    .into(),
            );
        }

        Column::with_children(rows)
            .spacing(24)
            .width(Length::Fill)
            .into()
    }

    fn view_poster_card<'a>(&'a self, card: &'a PosterCard) -> Element<'a, Message> {
        let poster = self.view_poster_image(card.poster_url.as_deref(), POSTER_HEIGHT);

        let open: Element<Message> = match card.id {
            Some(id) => button(text("Open").size(13).color(TEXT_WHITE))
                .width(Length::Fill)
                .style(flat_button_style)
                .on_press(Message::OpenMovie(id))
                .into(),
            None => Space::new().height(0).into(),
        };

        let title = container(
            text(card.title.clone().unwrap_or_default())
                .size(14)
                .color(TEXT_WHITE)
                .wrapping(text::Wrapping::Word),
        )
        .height(Length::Fixed(TITLE_HEIGHT))
        .clip(true);

        column![poster, open, title]
            .spacing(8)
            .width(Length::FillPortion(1))
            .into()
    }

    pub fn view_poster_image<'a>(&'a self, url: Option<&str>, height: f32) -> Element<'a, Message> {
        match url.and_then(|url| self.image_cache.get(url)) {
            Some(h) => container(
                iced::widget::image(h.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(height))
                    .content_fit(iced::ContentFit::Cover),
            )
            .style(|_theme| container::Style {
                border: Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 8.0,
                },
                ..Default::default()
            })
            .into(),
            None => view_poster_placeholder(height),
        }
    }
}

pub fn view_poster_placeholder<'a>(height: f32) -> Element<'a, Message> {
    container(
        column![
            icon(ICON_FILM).size(36).color(TEXT_GRAY),
            text("No poster").size(12).color(TEXT_GRAY)
        ]
        .spacing(6)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(height))
    .style(|_theme| container::Style {
        background: Some(iced::Background::Color(SURFACE_DARK_GRAY)),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
