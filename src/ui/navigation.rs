// file: src/ui/navigation.rs

use iced::widget::{button, container, row, text};
use iced::{Color, Element, Font, Length};

use crate::messages::Message;
use crate::models::SessionKind;
use crate::ui::styles::{NavBarStyle, SessionTabStyle};

/// Session selector: three mutually exclusive tabs. Selecting one only emits
/// `SessionSelected`; the app owns the current session.
pub fn view<'a>(selected: SessionKind, accent: Color, font: Font) -> Element<'a, Message> {
    let tabs = SessionKind::ALL.iter().map(|&session| -> Element<'a, Message> {
        button(
            text(session.label())
                .size(14)
                .font(font)
                .width(Length::Fill)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
        )
        .width(Length::Fixed(120.0))
        .padding([15, 8])
        .style(iced::theme::Button::Custom(Box::new(SessionTabStyle {
            selected: session == selected,
            accent,
        })))
        .on_press(Message::SessionSelected(session))
        .into()
    });

    container(row(tabs.collect::<Vec<_>>()).spacing(4))
        .padding(8)
        .style(iced::theme::Container::Custom(Box::new(NavBarStyle)))
        .into()
}
