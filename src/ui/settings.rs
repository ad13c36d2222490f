// file: src/ui/settings.rs

use iced::widget::{button, column, container, horizontal_rule, pick_list, row, text, text_input, Space};
use iced::{Alignment, Color, Element, Font, Length};

use crate::editor::SettingsDraft;
use crate::messages::Message;
use crate::models::{AlarmSound, FontSetting, SessionKind, ThemeColor};
use crate::ui::styles::{IconButtonStyle, ModalStyle, PrimaryButtonStyle, SwatchStyle};
use crate::ui::{font_for, palette, sub_heading, theme_color, theme_hover_color};

/// Settings editor. Every control edits the draft only; `Apply` is the one
/// control that touches the shared settings.
pub fn view<'a>(draft: &SettingsDraft, ui_font: Font) -> Element<'a, Message> {
    let accent = theme_color(draft.theme);

    let header = row![
        text("Settings").size(24).font(ui_font).style(palette::MIDNIGHT),
        Space::with_width(Length::Fill),
        icon_button("×", Message::CloseSettings),
    ]
    .align_items(Alignment::Center);

    let time_fields = row(SessionKind::ALL
        .iter()
        .map(|&session| minutes_field(session, draft.time.minutes(session), ui_font))
        .collect::<Vec<_>>())
    .spacing(16);

    let fonts = row(FontSetting::ALL
        .iter()
        .map(|&font| font_swatch(font, font == draft.font))
        .collect::<Vec<_>>())
    .spacing(12);

    let colors = row(ThemeColor::ALL
        .iter()
        .map(|&theme| color_swatch(theme, theme == draft.theme))
        .collect::<Vec<_>>())
    .spacing(12);

    let alarm = row![
        pick_list(AlarmSound::ALL.to_vec(), Some(draft.alarm), Message::DraftAlarm)
            .font(ui_font)
            .width(Length::Fixed(220.0)),
        button(text("Preview").size(13).font(ui_font))
            .padding([8, 14])
            .style(iced::theme::Button::Custom(Box::new(IconButtonStyle)))
            .on_press(Message::PreviewAlarm),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    let option_row = |label: &'static str, control: Element<'a, Message>| {
        row![sub_heading(label, ui_font), Space::with_width(Length::Fill), control]
            .align_items(Alignment::Center)
    };

    let apply = button(text("Apply").size(16).font(ui_font))
        .padding([16, 48])
        .style(iced::theme::Button::Custom(Box::new(PrimaryButtonStyle {
            accent,
            hover: theme_hover_color(draft.theme),
        })))
        .on_press(Message::ApplySettings);

    let body = column![
        header,
        horizontal_rule(1),
        sub_heading("Time (minutes)", ui_font),
        time_fields,
        horizontal_rule(1),
        option_row("Font", fonts.into()),
        horizontal_rule(1),
        option_row("Color", colors.into()),
        horizontal_rule(1),
        option_row("Alarm", alarm.into()),
        container(apply).width(Length::Fill).center_x(),
    ]
    .spacing(20)
    .padding(32)
    .max_width(540);

    container(body)
        .style(iced::theme::Container::Custom(Box::new(ModalStyle)))
        .into()
}

fn minutes_field<'a>(session: SessionKind, minutes: u32, font: Font) -> Element<'a, Message> {
    let arrows = column![
        icon_button("▲", Message::DraftIncrement(session)),
        icon_button("▼", Message::DraftDecrement(session)),
    ];

    column![
        text(session.label()).size(12).font(font).style(Color { a: 0.4, ..palette::DEEP_NAVY }),
        row![
            text_input("0", &minutes.to_string())
                .on_input(move |input| Message::DraftMinutesInput(session, input))
                .font(font)
                .padding(10)
                .width(Length::Fill),
            arrows,
        ]
        .spacing(4)
        .align_items(Alignment::Center),
    ]
    .spacing(8)
    .width(Length::FillPortion(1))
    .into()
}

fn font_swatch<'a>(font: FontSetting, selected: bool) -> Element<'a, Message> {
    let (background, text_color) = if selected {
        (palette::MIDNIGHT, palette::WHITE)
    } else {
        (palette::MISTY, palette::DEEP_NAVY)
    };

    button(
        text("Aa")
            .size(15)
            .font(font_for(font))
            .horizontal_alignment(iced::alignment::Horizontal::Center),
    )
    .width(Length::Fixed(40.0))
    .padding([10, 0])
    .style(iced::theme::Button::Custom(Box::new(SwatchStyle {
        background,
        text_color,
    })))
    .on_press(Message::DraftFont(font))
    .into()
}

fn color_swatch<'a>(theme: ThemeColor, selected: bool) -> Element<'a, Message> {
    button(
        text(if selected { "✓" } else { " " })
            .size(15)
            .horizontal_alignment(iced::alignment::Horizontal::Center),
    )
    .width(Length::Fixed(40.0))
    .padding([10, 0])
    .style(iced::theme::Button::Custom(Box::new(SwatchStyle {
        background: theme_color(theme),
        text_color: palette::MIDNIGHT,
    })))
    .on_press(Message::DraftTheme(theme))
    .into()
}

fn icon_button<'a>(label: &'static str, message: Message) -> Element<'a, Message> {
    button(text(label).size(14))
        .padding([2, 6])
        .style(iced::theme::Button::Custom(Box::new(IconButtonStyle)))
        .on_press(message)
        .into()
}
