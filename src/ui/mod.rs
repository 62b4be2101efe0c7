/// User interface module
///
/// - `form.rs` - name/grade inputs, portrait picker and action buttons
/// - `dialog.rs` - modal message boxes drawn over the form
/// - `summary.rs` - the summary report shown inside a dialog

pub mod dialog;
pub mod form;
pub mod summary;

pub use dialog::Dialog;

use iced::widget::{container, image, Space};
use iced::{Element, Length};

use crate::Message;

/// A fixed square slot holding a portrait, or blank space of the same size
pub fn portrait_slot<'a>(handle: Option<&image::Handle>, size: u32) -> Element<'a, Message> {
    let edge = Length::Fixed(size as f32);

    match handle {
        Some(handle) => container(image(handle.clone()).width(edge).height(edge))
            .width(edge)
            .height(edge)
            .into(),
        None => Space::new(edge, edge).into(),
    }
}
