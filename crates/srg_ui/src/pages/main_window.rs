//! Main window view.
//!
//! Pure projection of the application state: header, upload area, file
//! info, error and result panels, submit button. No logic lives here
//! beyond reading the model.

use iced::widget::{button, column, container, text, Space};
use iced::{Background, Border, Element, Length, Theme};

use srg_core::media::AudioFile;

use crate::app::{App, Message};
use crate::model::AppModel;
use crate::theme::{colors, font, spacing};

/// Build the main window view.
pub fn view(app: &App) -> Element<'_, Message> {
    let model = &app.model;

    let content = column![
        header_section(),
        Space::new().height(spacing::LG),
        upload_card(model),
    ]
    .max_width(620)
    .align_x(iced::Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::BACKGROUND)),
            ..Default::default()
        })
        .into()
}

/// Title and subtitle.
fn header_section<'a>() -> Element<'a, Message> {
    column![
        text("Source Mobile Recognition System")
            .size(font::HEADER)
            .color(colors::TEXT_PRIMARY),
        Space::new().height(spacing::XS),
        text("Upload an audio file to identify the device it was recorded on")
            .size(font::NORMAL)
            .color(colors::TEXT_SECONDARY),
    ]
    .align_x(iced::Alignment::Center)
    .into()
}

/// The white card holding the whole form.
fn upload_card(model: &AppModel) -> Element<'_, Message> {
    let mut content = column![drop_zone(model)];
    if let Some(e) = model.selected_file.as_ref().map(file_info_row) {
        content = content.push(e);
    }
    if let Some(e) = model.error_message.as_deref().map(error_panel) {
        content = content.push(e);
    }
    content = content.push(submit_button(model));
    if let Some(e) = model.is_uploading.then(uploading_note) {
        content = content.push(e);
    }
    if let Some(e) = model.predicted_device.as_deref().map(result_panel) {
        content = content.push(e);
    }
    let content = content.spacing(spacing::MD);

    container(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::CARD)),
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Upload area: drop target text plus the browse button.
fn drop_zone(model: &AppModel) -> Element<'_, Message> {
    let browse_enabled = !model.is_uploading;

    let content = column![
        text("Drop an audio file here")
            .size(font::MD)
            .color(colors::TEXT_PRIMARY),
        text("Audio files (MP3, WAV, M4A)")
            .size(font::SM)
            .color(colors::TEXT_SECONDARY),
        Space::new().height(spacing::SM),
        button(text("Browse...").size(font::NORMAL))
            .on_press_maybe(browse_enabled.then_some(Message::BrowseFile))
            .padding([spacing::SM, spacing::LG]),
    ]
    .spacing(spacing::XS)
    .align_x(iced::Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::DROP_ZONE)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}

/// Selected file name and size.
fn file_info_row(file: &AudioFile) -> Element<'_, Message> {
    let details = column![
        text(&file.file_name)
            .size(font::NORMAL)
            .color(colors::TEXT_PRIMARY),
        text(file.size_display())
            .size(font::SM)
            .color(colors::TEXT_SECONDARY),
    ]
    .spacing(spacing::XS);

    container(details)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::FILE_INFO)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Error panel with the fixed user-visible message.
fn error_panel(message: &str) -> Element<'_, Message> {
    container(text(message).size(font::NORMAL).color(colors::ERROR_TEXT))
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::ERROR_BG)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Full-width submit button; disabled without a file or while uploading.
fn submit_button(model: &AppModel) -> Element<'_, Message> {
    let label = if model.is_uploading {
        "Processing..."
    } else {
        "Analyze Audio"
    };

    button(
        text(label)
            .size(font::MD)
            .width(Length::Fill)
            .align_x(iced::Alignment::Center),
    )
    .on_press_maybe(model.can_submit().then_some(Message::Submit))
    .width(Length::Fill)
    .padding([spacing::MD, spacing::LG])
    .style(|_theme: &Theme, status| {
        let background = match status {
            button::Status::Disabled => colors::PRIMARY_DISABLED,
            button::Status::Hovered | button::Status::Pressed => colors::PRIMARY_HOVER,
            _ => colors::PRIMARY,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors::ON_PRIMARY,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .into()
}

/// Busy indicator shown under the button while the upload runs.
fn uploading_note<'a>() -> Element<'a, Message> {
    text("Uploading and analyzing...")
        .size(font::SM)
        .color(colors::TEXT_SECONDARY)
        .into()
}

/// Result panel with the predicted device.
fn result_panel(device: &str) -> Element<'_, Message> {
    let content = column![
        text("Analysis Result")
            .size(font::LG)
            .color(colors::TEXT_PRIMARY),
        Space::new().height(spacing::XS),
        text(format!("This audio was recorded on: {device}"))
            .size(font::NORMAL)
            .color(colors::SUCCESS_TEXT),
    ]
    .spacing(spacing::XS);

    container(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::SUCCESS_BG)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
