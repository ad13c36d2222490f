//! The iced application
//!
//! Wires the session selector, the countdown, the settings context and the
//! alarm audio together. All timer transitions go through [`Timer`]; this
//! module only turns the resulting [`TimerEvent`]s into alarm audio calls.

use std::sync::Arc;

use iced::futures::SinkExt;
use iced::widget::{button, column, container, text};
use iced::{event, window, Alignment, Application, Command, Element, Event, Length, Subscription, Theme};
use log::{debug, error, info, warn};

use crate::audio::AudioManager;
use crate::command_handlers::CommandHandlers;
use crate::context::SettingsContext;
use crate::messages::Message;
use crate::models::{SessionKind, Settings};
use crate::timer::{Timer, TimerEvent, TICK_INTERVAL};
use crate::ui::styles::{BackgroundStyle, DialActionStyle};
use crate::ui::{self, font_for, palette, theme_color};
use crate::ui_state::UiState;

pub struct PomodialApp {
    context: Arc<SettingsContext>,
    handlers: CommandHandlers,

    // Mirror of the shared settings, refreshed on every change
    settings: Settings,
    session: SessionKind,
    timer: Timer,

    ui_state: UiState,
}

impl PomodialApp {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> SessionKind {
        self.session
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    /// Carries out the side effects a timer transition asks for.
    fn handle_timer_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Completed => {
                info!("{} session complete", self.session.label());
                self.start_alarm();
            }
            TimerEvent::AlarmStopped | TimerEvent::Resynced { silenced_alarm: true } => {
                self.handlers.audio.stop_alarm();
            }
            _ => {}
        }
    }

    fn start_alarm(&mut self) {
        if let Err(e) = self.handlers.audio.start_alarm(self.settings.alarm_sound) {
            warn!("Alarm audio unavailable: {}", e);
            self.ui_state.status = "Could not play alarm sound.".to_string();
        }
    }

    fn synchronize_timer(&mut self) {
        if let Some(event) = self.timer.synchronize(self.session, &self.settings.time_settings) {
            self.handle_timer_event(event);
        }
    }

    /// Adopts a new settings aggregate: refreshes an open draft, resyncs the
    /// countdown and swaps the alarm loop if the sound changed mid-alarm.
    fn apply_shared_settings(&mut self, settings: Settings) {
        if settings == self.settings {
            return;
        }

        let previous_alarm = self.settings.alarm_sound;
        self.settings = settings;
        if let Some(draft) = self.ui_state.editor.as_mut() {
            draft.resync(&self.settings);
        }

        self.synchronize_timer();
        if self.timer.is_alarm_active() && previous_alarm != self.settings.alarm_sound {
            info!("Alarm sound changed while alarming, restarting loop");
            self.start_alarm();
        }
    }
}

impl Application for PomodialApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = (Arc<SettingsContext>, Arc<AudioManager>, f32);

    fn new((context, audio, layout_width): Self::Flags) -> (Self, Command<Message>) {
        let handlers = CommandHandlers::new(&context, &audio);
        let settings = context.get();
        let session = SessionKind::default();
        let timer = Timer::new(session, &settings.time_settings);

        let app = PomodialApp {
            context,
            handlers,
            settings,
            session,
            timer,
            ui_state: UiState::new(layout_width),
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        format!("{} - {} | Pomodial", self.timer.formatted(), self.session.label())
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::SessionSelected(session) => {
                self.session = session;
                self.synchronize_timer();
                Command::none()
            }
            Message::ToggleTimer => {
                if let Some(event) = self.timer.toggle() {
                    self.handle_timer_event(event);
                }
                Command::none()
            }
            Message::ResetTimer => {
                self.timer.reset();
                Command::none()
            }
            Message::StopAlarm => {
                if let Some(event) = self.timer.stop_alarm() {
                    self.handle_timer_event(event);
                }
                Command::none()
            }
            Message::Tick => {
                if let Some(event) = self.timer.tick() {
                    self.handle_timer_event(event);
                }
                Command::none()
            }
            Message::OpenSettings => {
                self.ui_state.open_editor(&self.settings);
                Command::none()
            }
            Message::CloseSettings => {
                self.ui_state.close_editor();
                Command::none()
            }
            Message::ApplySettings => {
                let Some(draft) = self.ui_state.close_editor() else {
                    return Command::none();
                };
                let settings = draft.apply();
                self.handlers.settings.apply(settings.clone());
                self.apply_shared_settings(settings);

                let handlers = self.handlers.settings.clone();
                Command::perform(
                    async move { handlers.persist().await.map_err(|e| e.to_string()) },
                    Message::SettingsSaved,
                )
            }
            Message::DraftIncrement(session) => {
                if let Some(draft) = self.ui_state.editor.as_mut() {
                    draft.increment(session);
                }
                Command::none()
            }
            Message::DraftDecrement(session) => {
                if let Some(draft) = self.ui_state.editor.as_mut() {
                    draft.decrement(session);
                }
                Command::none()
            }
            Message::DraftMinutesInput(session, input) => {
                if let Some(draft) = self.ui_state.editor.as_mut() {
                    draft.set_minutes_from_text(session, &input);
                }
                Command::none()
            }
            Message::DraftFont(font) => {
                if let Some(draft) = self.ui_state.editor.as_mut() {
                    draft.set_font(font);
                }
                Command::none()
            }
            Message::DraftTheme(theme) => {
                if let Some(draft) = self.ui_state.editor.as_mut() {
                    draft.set_theme(theme);
                }
                Command::none()
            }
            Message::DraftAlarm(alarm) => {
                if let Some(draft) = self.ui_state.editor.as_mut() {
                    draft.set_alarm(alarm);
                }
                Command::none()
            }
            Message::PreviewAlarm => {
                let Some(sound) = self.ui_state.editor.as_ref().map(|draft| draft.alarm) else {
                    return Command::none();
                };
                let audio = self.handlers.audio.clone();
                Command::perform(
                    async move { audio.preview(sound).await.map_err(|e| e.to_string()) },
                    Message::PreviewResult,
                )
            }
            Message::SettingsChanged(settings) => {
                // A notification queued before a later apply must not undo it
                if settings != self.context.get() {
                    debug!("Skipping outdated settings notification");
                    return Command::none();
                }
                self.apply_shared_settings(settings);
                Command::none()
            }
            Message::SettingsSaved(Ok(())) => {
                self.ui_state.status.clear();
                Command::none()
            }
            Message::SettingsSaved(Err(e)) => {
                error!("Settings were applied but not saved: {}", e);
                self.ui_state.status = "Settings could not be saved. They apply until you quit.".to_string();
                Command::none()
            }
            Message::PreviewResult(Err(e)) => {
                warn!("Alarm audio unavailable: {}", e);
                self.ui_state.status = "Could not play alarm sound.".to_string();
                Command::none()
            }
            Message::PreviewResult(Ok(())) => Command::none(),
            Message::LayoutResized(width) => {
                self.ui_state.layout_width = width;
                Command::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        struct SettingsWatcher;

        let tick = if self.timer.is_running() {
            iced::time::every(TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        };

        let context = self.context.clone();
        let settings = iced::subscription::channel(
            std::any::TypeId::of::<SettingsWatcher>(),
            16,
            move |mut output| async move {
                let mut receiver = context.subscribe();
                loop {
                    if receiver.changed().await.is_err() {
                        // Context dropped; nothing else will arrive
                        std::future::pending::<()>().await;
                    }
                    let settings = receiver.borrow_and_update().clone();
                    let _ = output.send(Message::SettingsChanged(settings)).await;
                }
            },
        );

        let resize = event::listen_with(|event, _status| match event {
            Event::Window(_, window::Event::Resized { width, .. }) => Some(Message::LayoutResized(width as f32)),
            _ => None,
        });

        Subscription::batch(vec![tick, settings, resize])
    }

    fn view(&self) -> Element<'_, Message> {
        let font = font_for(self.settings.font_setting);
        let accent = theme_color(self.settings.color_setting);

        let content: Element<'_, Message> = match &self.ui_state.editor {
            Some(draft) => ui::settings::view(draft, font),
            None => {
                let settings_button = button(text("⚙").size(28).font(font))
                    .padding(8)
                    .style(iced::theme::Button::Custom(Box::new(DialActionStyle { accent })))
                    .on_press(Message::OpenSettings);

                column![
                    text("pomodoro").size(32).font(font).style(palette::SOFT_INDIGO),
                    ui::navigation::view(self.session, accent, font),
                    ui::dial::view(&self.timer, self.ui_state.layout_width, accent, font),
                    settings_button,
                    text(&self.ui_state.status).size(13).font(font),
                ]
                .spacing(32)
                .align_items(Alignment::Center)
                .into()
            }
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(32)
            .center_x()
            .center_y()
            .style(iced::theme::Container::Custom(Box::new(BackgroundStyle)))
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
