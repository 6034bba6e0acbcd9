use iced::widget::{
    button, column, container, pick_list, row, scrollable, slider, text, text_input, Column, Row,
    Space,
};
use iced::{Border, Color, Element, Length, Padding, Shadow};

use crate::media::{
    Category, GridColumns, Message, ACCENT_RED, SURFACE_DARK_GRAY, TEXT_GRAY, TEXT_WHITE,
    WARNING_AMBER,
};
use crate::session::{PageContent, View};
use crate::Recommender;

pub const ICON_FILM: char = '\u{F3A9}';
pub const ICON_SEARCH: char = '\u{F52A}';
pub const ICON_HOUSE_FILL: char = '\u{F424}';
pub const ICON_ARROW_LEFT: char = '\u{F12F}';

const SIDEBAR_WIDTH: f32 = 260.0;

pub fn icon(icon_char: char) -> iced::widget::Text<'static> {
    text(icon_char.to_string()).font(iced::Font {
        family: iced::font::Family::Name("bootstrap-icons"),
        ..Default::default()
    })
}

pub fn bold_text(s: impl ToString, size: u32, color: Color) -> iced::widget::Text<'static> {
    text(s.to_string()).size(size).color(color).font(iced::Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    })
}

pub fn divider<'a>() -> Element<'a, Message> {
    container(Space::new().width(Length::Fill).height(1))
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.15))),
            ..Default::default()
        })
        .into()
}

pub fn flat_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let background_color = match status {
        button::Status::Hovered => Color::from_rgba(1.0, 1.0, 1.0, 0.15),
        _ => Color::from_rgba(1.0, 1.0, 1.0, 0.08),
    };
    button::Style {
        background: Some(iced::Background::Color(background_color)),
        text_color: TEXT_WHITE,
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.2),
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn hidden_vertical_scrollbar_style(
    _theme: &iced::Theme,
    _status: scrollable::Status,
) -> scrollable::Style {
    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: iced::Background::Color(Color::TRANSPARENT),
                border: Border::default(),
            },
        },
        horizontal_rail: scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: iced::Background::Color(Color::TRANSPARENT),
                border: Border::default(),
            },
        },
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: iced::Background::Color(Color::TRANSPARENT),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: Color::TRANSPARENT,
        },
    }
}

impl Recommender {
    pub fn view_sidebar(&self) -> Element<'_, Message> {
        let title = row![
            icon(ICON_FILM).size(22).color(ACCENT_RED),
            bold_text("Menu", 22, TEXT_WHITE)
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center);

        let home_button = button(
            row![
                icon(ICON_HOUSE_FILL).size(14).color(TEXT_WHITE),
                text("Home").size(14).color(TEXT_WHITE)
            ]
            .spacing(8)
            .align_y(iced::Alignment::Center),
        )
        .padding(Padding::new(10.0).left(14.0).right(14.0))
        .width(Length::Fill)
        .style(flat_button_style)
        .on_press(Message::GoHome);

        let category_label = text("Home Category").size(14).color(TEXT_GRAY);
        let category_picker = pick_list(
            Category::ALL,
            Some(self.session.category),
            Message::CategorySelected,
        )
        .text_size(14)
        .width(Length::Fill)
        .padding(Padding::new(8.0).left(12.0).right(12.0));

        let columns = self.session.grid_columns.get();
        let columns_label = text(format!("Grid Columns: {}", columns))
            .size(14)
            .color(TEXT_GRAY);
        let columns_slider = slider(
            GridColumns::MIN..=GridColumns::MAX,
            columns,
            Message::GridColumnsChanged,
        )
        .step(1u8)
        .width(Length::Fill);

        let content = column![
            title,
            home_button,
            divider(),
            category_label,
            category_picker,
            columns_label,
            columns_slider,
        ]
        .spacing(16)
        .padding(24);

        container(content)
            .width(Length::Fixed(SIDEBAR_WIDTH))
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(SURFACE_DARK_GRAY)),
                ..Default::default()
            })
            .into()
    }

    pub fn view_search_bar(&self) -> Element<'_, Message> {
        let search_icon = icon(ICON_SEARCH).size(14).color(TEXT_GRAY);

        let search_input = text_input(
            "Type: Avengers, Batman, Interstellar...",
            &self.session.search_query,
        )
        .on_input(Message::SearchQueryChanged)
        .on_submit(Message::SearchSubmit)
        .padding(8)
        .width(Length::Fill)
        .style(|_theme, _status| text_input::Style {
            background: iced::Background::Color(Color::TRANSPARENT),
            border: Border::default(),
            icon: TEXT_GRAY,
            placeholder: TEXT_GRAY,
            value: TEXT_WHITE,
            selection: ACCENT_RED,
        });

        let search_content = row![search_icon, search_input]
            .spacing(8)
            .align_y(iced::Alignment::Center);

        container(search_content)
            .padding(Padding::new(4.0).left(12.0).right(8.0))
            .width(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(Color::from_rgba(
                    0.0, 0.0, 0.0, 0.7,
                ))),
                border: Border {
                    color: TEXT_GRAY,
                    width: 1.0,
                    radius: 24.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    pub fn view_main_content(&self) -> Element<'_, Message> {
        let header = row![
            icon(ICON_FILM).size(32).color(ACCENT_RED),
            bold_text("Movie Recommender", 32, TEXT_WHITE)
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center);

        let body = match self.session.view_state.view() {
            View::Home => self.view_home(),
            View::Details => self.view_details(),
        };

        let page = column![header, divider(), body]
            .spacing(24)
            .padding(Padding::new(32.0).left(48.0).right(48.0).bottom(48.0))
            .width(Length::Fill);

        scrollable(page)
            .direction(scrollable::Direction::Vertical(
                scrollable::Scrollbar::new().width(0).scroller_width(0),
            ))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(hidden_vertical_scrollbar_style)
            .into()
    }

    fn view_home(&self) -> Element<'_, Message> {
        let search_section = column![
            bold_text("Search Movies", 20, TEXT_WHITE),
            text("Search by movie title").size(14).color(TEXT_GRAY),
            self.view_search_bar()
        ]
        .spacing(8);

        let results: Element<Message> = match &self.page_content {
            PageContent::Search { cards, .. } => self.view_poster_grid(cards),
            PageContent::Feed { category, cards } => column![
                bold_text(format!("{} Movies", category), 20, TEXT_WHITE),
                self.view_poster_grid(cards)
            ]
            .spacing(16)
            .into(),
            PageContent::Loading => self.view_skeleton_grid(),
            PageContent::Warning(message) => view_warning(message),
            PageContent::Error(message) => view_error(message),
            PageContent::Details(_) => Space::new().into(),
        };

        column![search_section, results].spacing(32).into()
    }

    pub fn view_skeleton_grid(&self) -> Element<'_, Message> {
        let columns = self.session.grid_columns.get() as usize;
        let rows: Vec<Element<Message>> = (0..2)
            .map(|_| {
                let cards: Vec<Element<Message>> =
                    (0..columns).map(|_| view_skeleton_card()).collect();
                Row::with_children(cards).spacing(16).into()
            })
            .collect();

        Column::with_children(rows)
            .spacing(16)
            .width(Length::Fill)
            .into()
    }
}

fn view_skeleton_card<'a>() -> Element<'a, Message> {
    container(Space::new().width(Length::Fill).height(240.0))
        .width(Length::FillPortion(1))
        .style(|_theme| container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(
                0.2, 0.2, 0.2, 0.5,
            ))),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}

pub fn view_error(message: &str) -> Element<'_, Message> {
    view_banner(message, ACCENT_RED)
}

pub fn view_warning(message: &str) -> Element<'_, Message> {
    view_banner(message, WARNING_AMBER)
}

fn view_banner(message: &str, color: Color) -> Element<'_, Message> {
    container(text(message).size(16).color(color))
        .padding(16)
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(iced::Background::Color(Color { a: 0.12, ..color })),
            border: Border {
                color,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        })
        .into()
}
