use iced::widget::{column, image::Handle, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length};

use super::portrait_slot;
use crate::state::{StudentRecord, Summary};
use crate::Message;

/// Height of the scrollable report area
const REPORT_HEIGHT: f32 = 350.0;

/// One row per student (portrait + "name: grade"), then the three score lines
pub fn view<'a>(
    records: &'a [StudentRecord<Handle>],
    report: &'a Summary,
    display_size: u32,
) -> Element<'a, Message> {
    let rows = records.iter().map(|record| -> Element<'a, Message> {
        row![
            portrait_slot(record.portrait.as_ref(), display_size),
            text(record.to_string()).size(15.0),
        ]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
    });

    let listing = Column::with_children(rows).spacing(6);

    let content = column![
        listing,
        Space::with_height(Length::Fixed(10.0)),
        text(report.average_line()),
        text(report.highest_line()),
        text(report.lowest_line()),
    ]
    .spacing(4)
    .width(Length::Fill);

    scrollable(content)
        .height(Length::Fixed(REPORT_HEIGHT))
        .width(Length::Fill)
        .into()
}
