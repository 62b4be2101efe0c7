use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use super::portrait_slot;
use crate::portrait::Thumbnails;
use crate::Message;

/// Everything the input form needs to draw itself
pub struct FormView<'a> {
    pub name: &'a str,
    pub grade: &'a str,
    pub selected: Option<&'a Thumbnails>,
    pub preview_size: u32,
    pub status: &'a str,
    /// A picked portrait is still decoding
    pub loading: bool,
    pub dialog_open: bool,
}

const LABEL_SIZE: f32 = 13.0;
const FIELD_WIDTH: f32 = 150.0;

impl<'a> FormView<'a> {
    pub fn view(self) -> Element<'a, Message> {
        let name_row = row![
            text("Student Name:").size(LABEL_SIZE),
            text_input("", self.name)
                .on_input(Message::NameChanged)
                .size(LABEL_SIZE)
                .width(Length::Fixed(FIELD_WIDTH)),
        ]
        .spacing(5)
        .align_y(Alignment::Center);

        // Enter in the grade field submits the form, or closes an open dialog
        let submit = if self.dialog_open {
            Message::DismissDialog
        } else {
            Message::AddStudent
        };

        let grade_row = row![
            text("Student Grade:").size(LABEL_SIZE),
            text_input("", self.grade)
                .on_input(Message::GradeChanged)
                .on_submit(submit)
                .size(LABEL_SIZE)
                .width(Length::Fixed(FIELD_WIDTH)),
        ]
        .spacing(5)
        .align_y(Alignment::Center);

        let image_row = row![
            button("Upload Image").on_press(Message::UploadImage),
            portrait_slot(self.selected.map(|t| &t.preview), self.preview_size),
        ]
        .spacing(5)
        .align_y(Alignment::Center);

        let button_row = row![
            button("Add Student").on_press_maybe((!self.loading).then_some(Message::AddStudent)),
            button("Show Summary").on_press(Message::ShowSummary),
        ]
        .spacing(5);

        let content = column![
            name_row,
            grade_row,
            image_row,
            button_row,
            text(self.status).size(12.0),
        ]
        .spacing(8);

        container(content)
            .padding(10)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
