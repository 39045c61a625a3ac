//! Main application module for Source Recognition GUI.
//!
//! Holds the application state and the message enum, and dispatches
//! messages to the handler methods in `handlers/`.

use std::path::PathBuf;

use iced::{window, Element, Event, Subscription, Task, Theme};

use srg_core::client::{PredictResponse, PredictionClient};

use crate::model::AppModel;
use crate::pages;

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    // Main window actions
    BrowseFile,
    FileSelected(Option<PathBuf>),
    FileDropped(PathBuf),
    Submit,

    // Upload responses
    PredictionComplete(PredictResponse),
    PredictionFailed(String),
}

/// Main application state.
pub struct App {
    pub model: AppModel,
    pub client: PredictionClient,
}

impl App {
    pub fn new(client: PredictionClient) -> (Self, Task<Message>) {
        (
            Self {
                model: AppModel::new(),
                client,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "Source Mobile Recognition".to_string()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseFile => self.browse_audio_file(),
            Message::FileSelected(path) => {
                self.handle_file_selected(path);
                Task::none()
            }
            Message::FileDropped(path) => {
                self.handle_file_dropped(path);
                Task::none()
            }
            Message::Submit => self.start_prediction(),
            Message::PredictionComplete(response) => {
                self.handle_prediction_complete(response);
                Task::none()
            }
            Message::PredictionFailed(error) => {
                self.handle_prediction_failed(&error);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        pages::main_window::view(self)
    }

    /// Listen for files dropped onto the window.
    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }
}
