// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The session decides what to load; the handlers here turn its tickets into
//! archive requests and route component events to their side effects.

use super::Message;
use crate::application::port::{FetchError, SpeechSource};
use crate::application::session::{LoadTicket, Session};
use crate::domain::{ManifestEntry, Speech};
use crate::share::{self, InstagramOutcome, ShareBackend, ShareLinks};
use crate::ui::notifications::{self, Notification};
use crate::ui::speech_card::skeleton_alpha;
use crate::ui::{footer, quick_years, share_buttons, year_form};
use iced::{task, Task};
use std::sync::Arc;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub session: &'a mut Session,
    pub year_form: &'a mut year_form::State,
    pub notifications: &'a mut notifications::Manager,
    pub source: &'a Arc<dyn SpeechSource>,
    pub share_backend: &'a Arc<dyn ShareBackend>,
    pub speech_task: &'a mut Option<task::Handle>,
    pub loading_since: &'a mut Option<Instant>,
    pub pulse: &'a mut f32,
    pub window_width: &'a mut f32,
}

/// Requests the manifest of available years.
pub fn load_manifest(source: &Arc<dyn SpeechSource>) -> Task<Message> {
    tracing::debug!("requesting years manifest");
    Task::perform(source.fetch_manifest(), Message::ManifestLoaded)
}

/// Requests the speech for `ticket`, aborting the request it supersedes.
pub fn start_speech_load(ctx: &mut UpdateContext<'_>, ticket: LoadTicket) -> Task<Message> {
    if let Some(previous) = ctx.speech_task.take() {
        previous.abort();
    }

    tracing::debug!(year = %ticket.year(), generation = ticket.generation(), "requesting speech");
    let (task, handle) = Task::perform(ctx.source.fetch_speech(ticket.year()), move |result| {
        Message::SpeechLoaded { ticket, result }
    })
    .abortable();

    *ctx.speech_task = Some(handle);
    *ctx.loading_since = Some(Instant::now());
    *ctx.pulse = 1.0;
    task
}

fn load_if_changed(ctx: &mut UpdateContext<'_>, ticket: Option<LoadTicket>) -> Task<Message> {
    match ticket {
        Some(ticket) => start_speech_load(ctx, ticket),
        None => Task::none(),
    }
}

pub fn handle_year_form_message(
    ctx: &mut UpdateContext<'_>,
    message: year_form::Message,
) -> Task<Message> {
    match year_form::update(ctx.year_form, message) {
        year_form::Event::None => Task::none(),
        year_form::Event::Submitted(input) => {
            let ticket = ctx.session.submit_year(&input);
            load_if_changed(ctx, ticket)
        }
    }
}

pub fn handle_quick_years_message(
    ctx: &mut UpdateContext<'_>,
    message: quick_years::Message,
) -> Task<Message> {
    match quick_years::update(message) {
        quick_years::Event::YearSelected(year) => {
            let ticket = ctx.session.select_year(year);
            load_if_changed(ctx, ticket)
        }
    }
}

pub fn handle_share_message(
    ctx: &mut UpdateContext<'_>,
    message: share_buttons::Message,
) -> Task<Message> {
    let links = ShareLinks::new(
        ctx.session.location(),
        ctx.session.year(),
        ctx.session.speech_state().speech(),
    );

    match share_buttons::update(message, &links) {
        share_buttons::Event::OpenIntent(url) => open_link(ctx, &url),
        share_buttons::Event::ShareOnInstagram => {
            match share::share_on_instagram(&**ctx.share_backend, &links) {
                InstagramOutcome::SharedNatively => {}
                InstagramOutcome::CopiedLink => ctx
                    .notifications
                    .push(Notification::success("notification-link-copied")),
                InstagramOutcome::OpenedInBrowser => ctx
                    .notifications
                    .push(Notification::info("notification-link-opened")),
                InstagramOutcome::Failed => ctx
                    .notifications
                    .push(Notification::error("notification-share-failed")),
            }
        }
    }
    Task::none()
}

pub fn handle_footer_message(ctx: &mut UpdateContext<'_>, message: footer::Message) -> Task<Message> {
    match footer::update(message) {
        footer::Event::OpenUrl(url) => open_link(ctx, &url),
    }
    Task::none()
}

fn open_link(ctx: &mut UpdateContext<'_>, url: &str) {
    if let Err(err) = ctx.share_backend.open_in_browser(url) {
        tracing::warn!(url, error = %err, "could not open link");
        ctx.notifications
            .push(Notification::error("notification-open-link-failed").with_arg("url", url));
    }
}

pub fn handle_manifest_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<ManifestEntry>, FetchError>,
) -> Task<Message> {
    let ticket = ctx.session.apply_manifest(result);
    load_if_changed(ctx, ticket)
}

pub fn handle_speech_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: LoadTicket,
    result: Result<Speech, FetchError>,
) -> Task<Message> {
    if ctx.session.apply_speech(ticket, result) {
        *ctx.speech_task = None;
        *ctx.loading_since = None;
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    ctx.notifications.tick();
    if let Some(since) = *ctx.loading_since {
        *ctx.pulse = skeleton_alpha(now.saturating_duration_since(since));
    }
}
