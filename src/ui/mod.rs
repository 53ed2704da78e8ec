//! The iced application shell.
//!
//! Thin event plumbing around [`Controller`]: messages carry completed
//! intake/analysis work back onto the update loop, and the view renders
//! purely from controller state.

pub mod feedback;
mod results;
mod style;
mod upload;

use crate::ai::{GeminiAnalysisClient, ImageAnalysisService};
use crate::controller::{AttemptId, Controller};
use crate::intake;
use crate::models::{AnalysisResult, Config, SelectedImage};
use self::feedback::{CopyFeedback, CopyTarget, COPY_FEEDBACK_WINDOW};
use iced::widget::{button, column, container, image as image_widget, scrollable, text};
use iced::{clipboard, event, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Message {
    OpenFilePicker,
    FileHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),
    ImageLoaded(Result<SelectedImage, String>),
    RemoveImage,
    Analyze,
    AnalysisFinished {
        attempt: AttemptId,
        outcome: Result<AnalysisResult, String>,
    },
    CopyPrompt,
    CopyFeedbackExpired(u64),
}

pub struct PromptLens {
    controller: Controller,
    analyzer: Arc<dyn ImageAnalysisService>,
    copy_feedback: CopyFeedback,
    preview: Option<image_widget::Handle>,
    intake_warning: Option<String>,
    drop_hover: bool,
}

impl PromptLens {
    pub fn new(config: Config, initial_image: Option<PathBuf>) -> (Self, Task<Message>) {
        let analyzer: Arc<dyn ImageAnalysisService> = Arc::new(GeminiAnalysisClient::new(
            config.gemini_api_key,
            config.analysis_model,
        ));

        let task = match initial_image {
            Some(path) => load_image_task(path),
            None => Task::none(),
        };

        (
            PromptLens {
                controller: Controller::new(),
                analyzer,
                copy_feedback: CopyFeedback::new(),
                preview: None,
                intake_warning: None,
                drop_hover: false,
            },
            task,
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFilePicker => {
                if self.controller.is_loading() {
                    return Task::none();
                }

                let file = FileDialog::new()
                    .set_title("Select an Image")
                    .add_filter("Images", &["jpg", "jpeg", "png", "webp", "gif", "bmp"])
                    .pick_file();

                match file {
                    Some(path) => load_image_task(path),
                    None => Task::none(),
                }
            }
            Message::FileHovered => {
                self.drop_hover = !self.controller.is_loading();
                Task::none()
            }
            Message::FilesHoveredLeft => {
                self.drop_hover = false;
                Task::none()
            }
            Message::FileDropped(path) => {
                self.drop_hover = false;
                if self.controller.is_loading() {
                    return Task::none();
                }
                load_image_task(path)
            }
            Message::ImageLoaded(Ok(image)) => {
                self.intake_warning = None;
                self.copy_feedback.reset();
                self.preview = Some(image_widget::Handle::from_bytes(image.bytes.to_vec()));
                self.controller.select_image(image);
                Task::none()
            }
            Message::ImageLoaded(Err(warning)) => {
                // Rejected file: warn, leave all other state untouched.
                self.intake_warning = Some(warning);
                Task::none()
            }
            Message::RemoveImage => {
                if self.controller.can_remove_image() {
                    self.controller.remove_image();
                    self.preview = None;
                    self.intake_warning = None;
                    self.copy_feedback.reset();
                }
                Task::none()
            }
            Message::Analyze => {
                let Some(request) = self.controller.begin_analysis() else {
                    return Task::none();
                };

                let analyzer = Arc::clone(&self.analyzer);
                let attempt = request.attempt;
                Task::perform(
                    async move {
                        analyzer
                            .analyze_image(&request.base64_data, &request.mime_type)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    move |outcome| Message::AnalysisFinished { attempt, outcome },
                )
            }
            Message::AnalysisFinished { attempt, outcome } => {
                self.controller.finish_analysis(attempt, outcome);
                Task::none()
            }
            Message::CopyPrompt => {
                let Some(result) = self.controller.result() else {
                    return Task::none();
                };

                let contents = result.prompt.clone();
                let token = self.copy_feedback.mark(CopyTarget::Prompt);
                Task::batch([
                    clipboard::write(contents),
                    Task::perform(tokio::time::sleep(COPY_FEEDBACK_WINDOW), move |_| {
                        Message::CopyFeedbackExpired(token)
                    }),
                ])
            }
            Message::CopyFeedbackExpired(token) => {
                self.copy_feedback.expire(token);
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("Photographer").size(32).color(style::indigo_bright()),
            text("Unlock the Prompt").size(22),
            text("Upload an image to reverse-engineer its style. Get a detailed prompt and artistic breakdown to recreate it with AI.")
                .size(15)
                .color(style::text_muted()),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let mut page = column![
            header,
            upload::view(
                self.controller.selected_image(),
                self.preview.as_ref(),
                self.controller.is_loading(),
                self.drop_hover,
            ),
        ]
        .spacing(28)
        .padding(32)
        .align_x(Alignment::Center)
        .width(Length::Fill);

        if let Some(warning) = &self.intake_warning {
            page = page.push(banner(warning, style::warning_banner));
        }

        if let Some(error) = self.controller.error_message() {
            page = page.push(banner(error, style::error_banner));
        }

        // Analyze trigger: offered once an image is selected, until a
        // result exists; disabled (not re-enterable) while in flight.
        if self.controller.selected_image().is_some() && self.controller.result().is_none() {
            let loading = self.controller.is_loading();
            let label = if loading {
                "Analyzing Image..."
            } else {
                "Generate Prompt"
            };
            page = page.push(
                button(text(label).size(18))
                    .padding([14, 32])
                    .style(style::primary_button)
                    .on_press_maybe((!loading).then_some(Message::Analyze)),
            );
        }

        if let Some(result) = self.controller.result() {
            page = page.push(results::view(
                result,
                self.copy_feedback.is_copied(CopyTarget::Prompt),
            ));
        }

        page = page.push(
            text("Powered by Google Gemini.")
                .size(13)
                .color(style::text_muted()),
        );

        container(scrollable(page).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::root)
            .into()
    }
}

fn load_image_task(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move { intake::load_image(&path).await.map_err(|e| e.to_string()) },
        Message::ImageLoaded,
    )
}

fn banner<'a>(
    message: &'a str,
    style_fn: fn(&Theme) -> container::Style,
) -> Element<'a, Message> {
    container(text(message).size(15))
        .padding(16)
        .max_width(560)
        .width(Length::Fill)
        .style(style_fn)
        .into()
}
