// file: src/ui/dial.rs

use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::canvas::{self, path, Frame, Path, Stroke};
use iced::widget::{button, canvas as canvas_widget, column, row, text, Space};
use iced::{Color, Element, Font, Length, Pixels, Point, Radians, Rectangle, Renderer, Theme};

use crate::messages::Message;
use crate::timer::{RingGeometry, Timer};
use crate::ui::palette;
use crate::ui::styles::DialActionStyle;

/// Smallest and largest edge of the dial, in logical pixels
const MIN_DIAL_SIZE: f32 = 320.0;
const MAX_DIAL_SIZE: f32 = 410.0;

/// The ring occupies this share of the dial face
const RING_SCALE: f32 = 0.9;

pub fn dial_size(layout_width: f32) -> f32 {
    (layout_width * 0.7).clamp(MIN_DIAL_SIZE, MAX_DIAL_SIZE)
}

/// Canvas program drawing the dial face, the progress ring and the time.
pub struct DialFace {
    pub ring: RingGeometry,
    pub accent: Color,
    pub time: String,
    pub font: Font,
}

impl<Message> canvas::Program<Message> for DialFace {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let edge = bounds.width.min(bounds.height);

        frame.fill(&Path::circle(center, edge / 2.0), palette::MIDNIGHT);

        // The geometry is laid out in its own units; fit it to the face like a viewBox
        let scale = edge * RING_SCALE / (2.0 * self.ring.radius as f32);
        let ring_radius = self.ring.normalized_radius as f32 * scale;
        let sweep = self.ring.visible_sweep() as f32;

        if sweep > 0.0 && ring_radius > 0.0 {
            let start = -std::f32::consts::FRAC_PI_2;
            let progress = Path::new(|builder| {
                builder.arc(path::Arc {
                    center,
                    radius: ring_radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + sweep),
                });
            });
            frame.stroke(
                &progress,
                Stroke::default()
                    .with_width(self.ring.stroke_width as f32 * scale)
                    .with_color(self.accent)
                    .with_line_cap(canvas::LineCap::Round),
            );
        }

        frame.fill_text(canvas::Text {
            content: self.time.clone(),
            position: Point::new(center.x, center.y),
            color: palette::SOFT_INDIGO,
            size: Pixels(edge * 0.24),
            font: self.font,
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Center,
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}

pub fn view<'a>(timer: &Timer, layout_width: f32, accent: Color, font: Font) -> Element<'a, Message> {
    let size = dial_size(layout_width);
    let face = DialFace {
        ring: timer.ring(f64::from(layout_width)),
        accent,
        time: timer.formatted(),
        font,
    };

    let action = |label: &str, message: Message| {
        button(text(label.to_string()).size(16).font(font))
            .padding(8)
            .style(iced::theme::Button::Custom(Box::new(DialActionStyle { accent })))
            .on_press(message)
    };

    let controls: Element<'a, Message> = if timer.is_alarm_active() {
        action("STOP ALARM", Message::StopAlarm).into()
    } else {
        let reset: Element<'a, Message> = if timer.is_reset_visible() {
            action("RESET", Message::ResetTimer).into()
        } else {
            // Keep START/PAUSE from shifting when RESET is hidden
            Space::with_width(Length::Fixed(80.0)).into()
        };
        row![
            reset,
            action(if timer.is_running() { "PAUSE" } else { "START" }, Message::ToggleTimer),
        ]
        .spacing(24)
        .align_items(iced::Alignment::Center)
        .into()
    };

    column![
        canvas_widget(face)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size)),
        controls,
    ]
    .spacing(16)
    .align_items(iced::Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dial_size_is_clamped() {
        assert_eq!(dial_size(300.0), MIN_DIAL_SIZE);
        assert_eq!(dial_size(500.0), 350.0);
        assert_eq!(dial_size(1200.0), MAX_DIAL_SIZE);
    }
}
