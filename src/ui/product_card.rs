//! Product card for the catalog grid and row for the list view
use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Length};

use crate::Message;

use trade_catalog::api::ProductSource;
use trade_catalog::state::data::Product;

const CARD_WIDTH: f32 = 220.0;

/// Group digits in threes: 1234567 -> "1,234,567"
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

fn actions(product: &Product) -> Element<'_, Message> {
    let add = button(text("Add to cart").size(14))
        .on_press_maybe(product.is_available().then_some(Message::AddToCart(product.product_id)))
        .padding(6);

    let company = product.company_id.map(|id| {
        button(text("More from seller").size(14))
            .on_press(Message::SourceSelected(ProductSource::Company(id)))
            .padding(6)
    });

    match company {
        Some(company) => row![add, company].spacing(6).into(),
        None => add.into(),
    }
}

pub fn card(product: &Product) -> Element<'_, Message> {
    let content = column![
        text(&product.product_name).size(16),
        text(format!("{} đ", format_price(product.unit_price))).size(18),
        text(format!("{} · {} in stock", product.status, product.stock_quantity)).size(12),
        actions(product),
    ]
    .spacing(8);

    container(content)
        .padding(12)
        .width(Length::Fixed(CARD_WIDTH))
        .style(container::rounded_box)
        .into()
}

pub fn list_row(product: &Product) -> Element<'_, Message> {
    let content = row![
        column![
            text(&product.product_name).size(16),
            text(&product.description).size(12),
        ]
        .spacing(4)
        .width(Length::Fill),
        text(format!("{} đ", format_price(product.unit_price))).size(16),
        Space::with_width(Length::Fixed(12.0)),
        actions(product),
    ]
    .spacing(8);

    container(content)
        .padding(10)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(950), "950");
        assert_eq!(format_price(45_000), "45,000");
        assert_eq!(format_price(1_000_000_000), "1,000,000,000");
    }
}
