//! Filter sidebar: category checkboxes, price range, clear-all
use iced::widget::{button, checkbox, column, row, text, text_input, Column};
use iced::{Element, Length};

use crate::Message;

use trade_catalog::api::ProductSource;
use trade_catalog::catalog::filter::FilterCriteria;
use trade_catalog::state::data::Category;

const PANEL_WIDTH: f32 = 240.0;

pub fn view<'a>(
    categories: &'a [Category],
    criteria: &FilterCriteria,
    min_input: &str,
    max_input: &str,
) -> Element<'a, Message> {
    let header = row![
        text("Filters").size(20).width(Length::Fill),
        button(text("Clear all").size(14))
            .on_press(Message::ClearFilters)
            .padding(4),
    ];

    let checkboxes = Column::with_children(categories.iter().map(|category| -> Element<'a, Message> {
        let id = category.category_id;
        checkbox(&category.category_name, criteria.categories.contains(&id))
            .on_toggle(move |_| Message::ToggleCategory(id))
            .into()
    }))
    .spacing(6);

    let price = column![
        text("Price").size(16),
        row![
            text_input("From", min_input)
                .on_input(Message::MinPriceChanged)
                .on_submit(Message::ApplyPriceRange),
            text_input("To", max_input)
                .on_input(Message::MaxPriceChanged)
                .on_submit(Message::ApplyPriceRange),
        ]
        .spacing(6),
        button(text("Apply").size(14))
            .on_press(Message::ApplyPriceRange)
            .padding(4),
    ]
    .spacing(6);

    // Browse links load a different product collection
    let all: Element<'a, Message> = button(text("All products").size(14))
        .on_press(Message::SourceSelected(ProductSource::All))
        .padding(2)
        .into();
    let browse = Column::with_children(
        std::iter::once(all).chain(categories.iter().map(|category| -> Element<'a, Message> {
            button(text(&category.category_name).size(14))
                .on_press(Message::SourceSelected(ProductSource::Category(category.category_id)))
                .padding(2)
                .into()
        })),
    )
    .spacing(2);

    column![
        header,
        text("Categories").size(16),
        checkboxes,
        price,
        text("Browse").size(16),
        browse,
    ]
    .spacing(16)
    .padding(12)
    .width(Length::Fixed(PANEL_WIDTH))
    .into()
}
