//! Drop target for images.
//! Shows the current status and opens the file picker on click.

use iced::widget::{container, mouse_area, text};
use iced::{alignment, Color, Element, Length};

use crate::Message;

/// What the drop zone is currently telling the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Waiting for an image
    #[default]
    Idle,
    /// A file is being dragged over the window
    Hovering,
    /// A submission is running in the background
    Working,
    /// The last submission finished
    Saved,
}

impl Status {
    /// Label shown inside the drop zone
    pub fn label(self) -> &'static str {
        match self {
            Status::Idle => "Drag Image Here\n(or click to select)",
            Status::Hovering => "Drop to save",
            Status::Working => "Processing...",
            Status::Saved => "✅ Saved!",
        }
    }

    /// Label color
    pub fn color(self) -> Color {
        match self {
            Status::Idle => Color::from_rgb8(0xaa, 0xaa, 0xaa),
            Status::Hovering => Color::from_rgb8(0x64, 0xb5, 0xf6),
            Status::Working => Color::from_rgb8(0xdd, 0xdd, 0xdd),
            Status::Saved => Color::from_rgb8(0x4c, 0xaf, 0x50),
        }
    }

    /// Drops and clicks are ignored while a submission runs
    pub fn accepts_input(self) -> bool {
        self != Status::Working
    }
}

/// Build the drop zone for the given status
pub fn view(status: Status) -> Element<'static, Message> {
    let label = text(status.label())
        .size(16)
        .color(status.color())
        .align_x(alignment::Horizontal::Center);

    let zone = container(label)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(container::bordered_box);

    let area = mouse_area(zone);
    if status.accepts_input() {
        area.on_press(Message::PickFile).into()
    } else {
        area.into()
    }
}
