use iced::widget::{button, text, Row};
use iced::Element;

use crate::Message;

/// Previous / numbered / next buttons. Renders nothing when there are no pages.
pub fn view<'a>(current: usize, total: usize) -> Element<'a, Message> {
    if total == 0 {
        return Row::new().into();
    }

    let previous = button(text("<"))
        .on_press_maybe((current > 1).then_some(Message::PreviousPage))
        .padding([4, 10]);

    let next = button(text(">"))
        .on_press_maybe((current < total).then_some(Message::NextPage))
        .padding([4, 10]);

    let mut buttons: Vec<Element<'a, Message>> = Vec::with_capacity(total + 2);
    buttons.push(previous.into());

    buttons.extend((1..=total).map(|page| -> Element<'a, Message> {
        let label = if page == current {
            format!("[{page}]")
        } else {
            page.to_string()
        };
        button(text(label))
            .on_press(Message::GoToPage(page))
            .padding([4, 10])
            .into()
    }));

    buttons.push(next.into());

    Row::with_children(buttons).spacing(6).into()
}
