// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the speech reader.
//!
//! The `App` struct wires together the session (selected year, speech state,
//! available years, location), localization and the toast manager, and
//! translates messages into side effects: archive requests, share intents and
//! clipboard access. Minimum window size and the archive fallback policy are
//! kept close to the main update loop so user-facing behavior is easy to
//! audit.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::location::Location;
use crate::application::port::{FetchError, SourceFuture, SpeechSource};
use crate::application::session::Session;
use crate::config::{self, Config};
use crate::domain::{ManifestEntry, Speech, Year};
use crate::i18n::I18n;
use crate::infrastructure::{HttpSpeechSource, SystemShareBackend};
use crate::share::ShareBackend;
use crate::ui::{notifications, year_form};
use chrono::Datelike;
use iced::{task, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: Session,
    year_form: year_form::State,
    notifications: notifications::Manager,
    source: Arc<dyn SpeechSource>,
    share_backend: Arc<dyn ShareBackend>,
    theme: Theme,
    window_width: f32,
    /// Handle of the speech request in flight, aborted when superseded.
    speech_task: Option<task::Handle>,
    loading_since: Option<Instant>,
    /// Current skeleton opacity.
    pulse: f32,
    /// Calendar year at startup, shown in the footer.
    calendar_year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("year", &self.session.year())
            .field("speech_state", self.session.speech_state())
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(config::MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires `Fn` for boot; flags are consumed exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, builds the archive client and starts the
    /// manifest and speech loads.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let source = build_source(flags.assets_url.as_deref(), &config);
        let location = Location::parse(flags.location.as_deref().unwrap_or(config.share.page_url()));
        let calendar_year = chrono::Local::now().year();

        let (mut app, task) = Self::with_services(
            &flags,
            &config,
            location,
            calendar_year,
            source,
            Arc::new(SystemShareBackend::new()),
        );

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, task)
    }

    /// Creates the application around the given services.
    pub(crate) fn with_services(
        flags: &Flags,
        config: &Config,
        location: Location,
        calendar_year: i32,
        source: Arc<dyn SpeechSource>,
        share_backend: Arc<dyn ShareBackend>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let mut session = Session::new(location, calendar_year);
        let year_form = year_form::State::new(session.year());
        let initial = session.start();

        tracing::info!(
            year = %session.year(),
            locale = %i18n.current_locale(),
            "starting reader"
        );

        let mut app = App {
            i18n,
            session,
            year_form,
            notifications: notifications::Manager::new(),
            source,
            share_backend,
            theme: config.general.theme_mode.theme(),
            window_width: config::DEFAULT_WINDOW_WIDTH,
            speech_task: None,
            loading_since: None,
            pulse: 1.0,
            calendar_year,
        };

        let manifest = update::load_manifest(&app.source);
        let speech = update::start_speech_load(&mut app.update_context(), initial);
        (app, Task::batch([manifest, speech]))
    }

    fn title(&self) -> String {
        format!("{} {}", self.i18n.tr("window-title"), self.session.year())
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.session.speech_state().is_loading(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            session: &mut self.session,
            year_form: &mut self.year_form,
            notifications: &mut self.notifications,
            source: &self.source,
            share_backend: &self.share_backend,
            speech_task: &mut self.speech_task,
            loading_since: &mut self.loading_since,
            pulse: &mut self.pulse,
            window_width: &mut self.window_width,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::YearForm(form_message) => {
                update::handle_year_form_message(&mut ctx, form_message)
            }
            Message::QuickYears(quick_message) => {
                update::handle_quick_years_message(&mut ctx, quick_message)
            }
            Message::Share(share_message) => update::handle_share_message(&mut ctx, share_message),
            Message::Footer(footer_message) => {
                update::handle_footer_message(&mut ctx, footer_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::ManifestLoaded(result) => update::handle_manifest_loaded(&mut ctx, result),
            Message::SpeechLoaded { ticket, result } => {
                update::handle_speech_loaded(&mut ctx, ticket, result)
            }
            Message::WindowResized(size) => {
                *ctx.window_width = size.width;
                Task::none()
            }
            Message::Tick(now) => {
                update::handle_tick(&mut ctx, now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            year_form: &self.year_form,
            notifications: &self.notifications,
            window_width: self.window_width,
            pulse: self.pulse,
            calendar_year: self.calendar_year,
        })
    }
}

/// Picks the first usable archive URL: CLI, then config, then the default.
fn build_source(cli_url: Option<&str>, config: &Config) -> Arc<dyn SpeechSource> {
    let candidates = cli_url
        .into_iter()
        .chain([config.source.assets_url(), config::DEFAULT_ASSETS_URL]);

    let mut last_error = String::new();
    for url in candidates {
        match HttpSpeechSource::from_str_url(url) {
            Ok(source) => {
                tracing::info!(url, "using speech archive");
                return Arc::new(source);
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "unusable archive URL");
                last_error = err.to_string();
            }
        }
    }
    Arc::new(UnavailableSource { reason: last_error })
}

/// Stand-in when no archive client could be built. Every request fails with
/// the reason, which the speech card then shows.
#[derive(Debug)]
struct UnavailableSource {
    reason: String,
}

impl SpeechSource for UnavailableSource {
    fn fetch_manifest(&self) -> SourceFuture<Vec<ManifestEntry>> {
        let err = FetchError::Network(self.reason.clone());
        Box::pin(async move { Err(err) })
    }

    fn fetch_speech(&self, _year: Year) -> SourceFuture<Speech> {
        let err = FetchError::Network(self.reason.clone());
        Box::pin(async move { Err(err) })
    }
}
