use iced::widget::{button, center, column, container, mouse_area, opaque, stack, text};
use iced::{Color, Element, Length};

use super::summary;
use crate::state::{Roster, Summary};
use crate::Message;

/// A blocking message shown over the form
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Input was rejected; the form keeps its contents
    InputError(String),
    /// Plain information, e.g. a confirmation
    Notice { title: String, message: String },
    /// The summary report, computed when the dialog was opened
    Summary(Summary),
}

impl Dialog {
    pub fn title(&self) -> &str {
        match self {
            Dialog::InputError(_) => "Input Error",
            Dialog::Notice { title, .. } => title.as_str(),
            Dialog::Summary(_) => "Summary Report",
        }
    }

    /// Draw the dialog body
    pub fn view<'a>(
        &'a self,
        roster: &'a Roster<iced::widget::image::Handle>,
        display_size: u32,
    ) -> Element<'a, Message> {
        let body: Element<'a, Message> = match self {
            Dialog::InputError(message) | Dialog::Notice { message, .. } => text(message.as_str()).into(),
            Dialog::Summary(report) => summary::view(roster.records(), report, display_size),
        };

        let card = column![
            text(self.title()).size(16.0),
            body,
            button("OK").on_press(Message::DismissDialog).padding([4.0, 16.0]),
        ]
        .spacing(12);

        container(card)
            .padding(20)
            .max_width(460.0)
            .style(container::rounded_box)
            .into()
    }
}

/// Lay `content` over `base`, dimming and blocking everything underneath.
/// Clicking the backdrop sends `on_blur`.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).width(Length::Fill).height(Length::Fill).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.6,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
