//! Page runtime.
//!
//! A [`Page`] owns the document and processes two inboxes: configuration
//! snapshots from the host, and [`PageEvent`]s from user interaction and
//! timers. Every message is handled to completion before the next one, so
//! snapshots are applied strictly in delivery order.

use std::{sync::Arc, time::Duration};

use clinic_protocol::{
    EditPanelValues, MsgToPage, Revision,
    ipc::{PageRx, page_channel},
};
use config::{Configuration, default_config};
use tokio::{
    runtime::Handle,
    sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
    time,
};
use tracing::{debug, info, trace};

use crate::{
    bridge::{self, ConfigSink, HostHandle, HostSdk},
    capabilities::{Capabilities, map_to_capabilities},
    carousel::{ROTATION_INTERVAL, ReviewCarousel},
    contact::{ContactForm, RESET_AFTER, SENT_AFTER, SubmitState, WHATSAPP_NUMBER},
    document::Document,
    edit_panel::map_to_edit_panel_values,
    locale::Language,
    preferences::{LANGUAGE_KEY, Preferences, THEME_KEY},
    presentation::apply_config,
    theme::Theme,
    ticker::Ticker,
};

/// Ticker id for carousel auto-rotation.
const ROTATION_TICKER: &str = "review-rotation";

/// Sender half of a page's event inbox.
pub type EventTx = UnboundedSender<PageEvent>;

/// Runtime options for a [`Page`].
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Treat empty, zero and `false` values in host snapshots as unset.
    pub falsy_as_unset: bool,
    /// Carousel auto-rotation period; `None` disables rotation.
    pub rotation: Option<Duration>,
    /// WhatsApp number contact messages are addressed to.
    pub contact_number: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            falsy_as_unset: false,
            rotation: Some(ROTATION_INTERVAL),
            contact_number: WHATSAPP_NUMBER.to_string(),
        }
    }
}

/// Interaction and timer events.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Switch between light and dark.
    ToggleTheme,
    /// Switch between English and Arabic.
    ToggleLanguage,
    /// An indicator was clicked.
    ShowReview(usize),
    /// Advance the carousel by one slide.
    NextReview,
    /// Pointer entered (`true`) or left the carousel.
    CarouselHover(bool),
    /// Submit the contact form.
    SubmitContact(ContactForm),
    /// Submit button feedback step.
    ContactProgress(SubmitState),
    /// Stop the page.
    Shutdown,
}

/// The clinic page bound to a document and an optional host.
pub struct Page<D: Document> {
    /// The rendered document.
    doc: D,
    /// Persisted theme and language.
    prefs: Box<dyn Preferences>,
    /// Behaviour switches.
    options: PageOptions,
    /// Keeps the host alive; capability setters only hold weak references.
    sdk: Option<Arc<dyn HostSdk>>,
    /// Where capability setters send updates.
    host: HostHandle,
    /// Snapshots and shutdown from the host.
    host_rx: PageRx,
    /// Sender half of `events_rx`, handed to timers.
    events_tx: EventTx,
    /// Interaction and timer events.
    events_rx: UnboundedReceiver<PageEvent>,
    /// Last configuration applied, after parity filtering.
    current: Configuration,
    /// Revision of the applied snapshot, if any.
    revision: Option<Revision>,
    /// Active color theme.
    theme: Theme,
    /// Active language.
    language: Language,
    /// False while an unrecognized stored code is in effect; the first toggle
    /// then settles on English.
    language_recognized: bool,
    /// Review carousel state.
    carousel: ReviewCarousel,
    /// Contact button state.
    submit: SubmitState,
    /// WhatsApp link from the last submission.
    last_contact_url: Option<String>,
    /// Carousel rotation timer.
    ticker: Ticker,
}

impl<D: Document> Page<D> {
    /// Render the defaults into `doc` and register with `sdk` if present.
    ///
    /// Carousel rotation starts only when called inside a tokio runtime.
    pub fn start(
        mut doc: D,
        sdk: Option<Arc<dyn HostSdk>>,
        prefs: Box<dyn Preferences>,
        options: PageOptions,
    ) -> Self {
        let theme = Theme::from_preferences(&*prefs);
        theme.apply(&mut doc);

        let mut language_recognized = true;
        let language = match prefs.get(LANGUAGE_KEY) {
            Some(saved) if !saved.is_empty() => {
                let stored = Language::from_stored(&saved);
                language_recognized = stored.is_some();
                let lang = stored.unwrap_or_default();
                lang.apply(&mut doc);
                lang
            }
            _ => Language::default(),
        };

        apply_config(default_config(), &mut doc);

        let (page_tx, host_rx) = page_channel();
        let (events_tx, events_rx) = unbounded_channel();
        let host = bridge::attach(sdk.as_ref(), default_config(), ConfigSink::new(page_tx));
        info!(
            host = host.is_attached(),
            theme = theme.as_str(),
            language = language.code(),
            "page_started"
        );

        let page = Self {
            doc,
            prefs,
            options,
            sdk,
            host,
            host_rx,
            events_tx,
            events_rx,
            current: Configuration::new(),
            revision: None,
            theme,
            language,
            language_recognized,
            carousel: ReviewCarousel::default(),
            submit: SubmitState::Idle,
            last_contact_url: None,
            ticker: Ticker::new(),
        };
        page.start_rotation();
        page
    }

    /// Sender for injecting [`PageEvent`]s.
    pub fn controller(&self) -> EventTx {
        self.events_tx.clone()
    }

    /// The rendered document.
    pub fn document(&self) -> &D {
        &self.doc
    }

    /// Stop timers and release the document.
    pub fn into_document(self) -> D {
        self.ticker.clear();
        self.doc
    }

    /// Configuration most recently applied (empty before the first snapshot).
    pub fn config(&self) -> &Configuration {
        &self.current
    }

    /// Revision of the applied snapshot, if any.
    pub fn revision(&self) -> Option<Revision> {
        self.revision
    }

    /// Handle capability setters report to.
    pub fn host(&self) -> &HostHandle {
        &self.host
    }

    /// Active color theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Review carousel state.
    pub fn carousel(&self) -> &ReviewCarousel {
        &self.carousel
    }

    /// Contact button state.
    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    /// WhatsApp link built by the most recent contact submission.
    pub fn last_contact_url(&self) -> Option<&str> {
        self.last_contact_url.as_deref()
    }

    /// Capabilities for the current configuration.
    pub fn capabilities(&self) -> Capabilities {
        map_to_capabilities(&self.current, &self.host)
    }

    /// Edit-panel values for the current configuration.
    pub fn edit_panel_values(&self) -> EditPanelValues {
        map_to_edit_panel_values(&self.current)
    }

    /// Handle one host message. Returns `false` once the page should stop.
    pub fn handle_host(&mut self, msg: MsgToPage) -> bool {
        match msg {
            MsgToPage::ConfigChanged { revision, config } => {
                self.apply_snapshot(revision, config);
                true
            }
            MsgToPage::Shutdown => {
                self.shutdown();
                false
            }
            // Editor requests are answered by the host from the registered
            // surface and never need the document.
            other => {
                debug!(?other, "editor_request_ignored");
                true
            }
        }
    }

    /// Apply `config` and acknowledge `revision`.
    fn apply_snapshot(&mut self, revision: Revision, config: Configuration) {
        let config = if self.options.falsy_as_unset {
            config.without_falsy()
        } else {
            config
        };
        let report = apply_config(&config, &mut self.doc);
        info!(
            revision,
            fields = config.len(),
            nodes = report.nodes_written,
            "config_applied"
        );
        self.current = config;
        self.revision = Some(revision);
        if let Some(sdk) = &self.sdk {
            sdk.config_applied(revision);
        }
    }

    /// Handle one interaction event. Returns `false` once the page should stop.
    pub fn handle_event(&mut self, event: PageEvent) -> bool {
        trace!(?event, "page_event");
        match event {
            PageEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.theme.apply(&mut self.doc);
                self.prefs.set(THEME_KEY, self.theme.as_str());
            }
            PageEvent::ToggleLanguage => {
                self.language = if self.language_recognized {
                    self.language.toggled()
                } else {
                    Language::En
                };
                self.language_recognized = true;
                self.language.apply(&mut self.doc);
                self.prefs.set(LANGUAGE_KEY, self.language.code());
            }
            PageEvent::ShowReview(index) => {
                self.ticker.stop(ROTATION_TICKER);
                self.carousel.show(&mut self.doc, index);
                self.start_rotation();
            }
            PageEvent::NextReview => self.carousel.next(&mut self.doc),
            PageEvent::CarouselHover(true) => self.ticker.stop(ROTATION_TICKER),
            PageEvent::CarouselHover(false) => self.start_rotation(),
            PageEvent::SubmitContact(form) => self.submit_contact(&form),
            PageEvent::ContactProgress(state) => {
                self.submit = state;
                state.apply(&mut self.doc, self.language);
            }
            PageEvent::Shutdown => {
                self.shutdown();
                return false;
            }
        }
        true
    }

    /// Build the WhatsApp link and start the button cycle.
    fn submit_contact(&mut self, form: &ContactForm) {
        let url = form.whatsapp_url(&self.options.contact_number);
        info!(url = %url, "contact_submitted");
        self.last_contact_url = Some(url);
        self.submit = SubmitState::Sending;
        self.submit.apply(&mut self.doc, self.language);
        self.schedule(SENT_AFTER, PageEvent::ContactProgress(SubmitState::Sent));
        self.schedule(
            SENT_AFTER + RESET_AFTER,
            PageEvent::ContactProgress(SubmitState::Idle),
        );
    }

    /// Deliver `event` to this page after `delay`, if a runtime is available.
    fn schedule(&self, delay: Duration, event: PageEvent) {
        if Handle::try_current().is_err() {
            trace!(?event, "schedule_without_runtime");
            return;
        }
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            time::sleep(delay).await;
            if tx.send(event).is_err() {
                trace!("page_gone_before_scheduled_event");
            }
        });
    }

    /// Start auto-rotation unless disabled or no runtime is present.
    fn start_rotation(&self) {
        let Some(interval) = self.options.rotation else {
            return;
        };
        if Handle::try_current().is_err() {
            trace!("rotation_without_runtime");
            return;
        }
        let tx = self.events_tx.clone();
        self.ticker.start(ROTATION_TICKER, interval, move || {
            if tx.send(PageEvent::NextReview).is_err() {
                trace!("rotation_tick_dropped");
            }
        });
    }

    /// Stop every timer.
    fn shutdown(&self) {
        self.ticker.clear();
        debug!(revision = ?self.revision, "page_shutdown");
    }

    /// Process everything already queued without waiting. Host snapshots are
    /// drained before interaction events. Returns the number of messages
    /// handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.host_rx.try_recv() {
            handled += 1;
            if !self.handle_host(msg) {
                return handled;
            }
        }
        while let Ok(event) = self.events_rx.try_recv() {
            handled += 1;
            if !self.handle_event(event) {
                return handled;
            }
        }
        handled
    }

    /// Run until a shutdown message or event arrives, then return the
    /// document.
    pub async fn run(mut self) -> D {
        let mut host_open = true;
        loop {
            tokio::select! {
                biased;
                msg = self.host_rx.recv(), if host_open => match msg {
                    Some(msg) => {
                        if !self.handle_host(msg) {
                            break;
                        }
                    }
                    None => {
                        debug!("host_channel_closed");
                        host_open = false;
                    }
                },
                Some(event) = self.events_rx.recv() => {
                    if !self.handle_event(event) {
                        break;
                    }
                }
                else => break,
            }
        }
        self.into_document()
    }
}

#[cfg(test)]
mod tests {
    use config::Field;

    use super::*;
    use crate::{
        document::{MemoryDocument, Target},
        host::MemoryHost,
        preferences::MemoryPreferences,
    };

    fn options() -> PageOptions {
        PageOptions {
            rotation: None,
            ..PageOptions::default()
        }
    }

    fn detached(prefs: MemoryPreferences) -> Page<MemoryDocument> {
        Page::start(
            MemoryDocument::clinic_page(),
            None,
            Box::new(prefs),
            options(),
        )
    }

    #[test]
    fn saved_preferences_apply_at_start() {
        let prefs = MemoryPreferences::new()
            .with(THEME_KEY, "dark")
            .with(LANGUAGE_KEY, "ar");
        let page = detached(prefs);
        assert_eq!(page.theme(), Theme::Dark);
        assert_eq!(page.language(), Language::Ar);
        assert!(page.document().has_class(Target::Root, "dark"));
        assert_eq!(page.document().attribute(Target::Root, "dir"), Some("rtl"));
    }

    #[test]
    fn no_saved_language_leaves_markup_alone() {
        let page = detached(MemoryPreferences::new());
        assert_eq!(page.document().attribute(Target::Root, "lang"), None);
        assert!(page.document().has_class(Target::Body, "ltr"));
    }

    #[test]
    fn falsy_values_are_kept_unless_parity_mode() {
        let host = Arc::new(MemoryHost::with_store(
            Configuration::single(Field::ClinicPhone, "").with(Field::FontSize, 0),
        ));
        let mut page = Page::start(
            MemoryDocument::clinic_page(),
            Some(host.clone() as Arc<dyn HostSdk>),
            Box::new(MemoryPreferences::new()),
            options(),
        );
        page.pump();
        assert!(page.document().texts("clinic-phone").iter().all(|t| t.is_empty()));
        assert_eq!(page.document().style(Target::Body, "font-size"), Some("0px"));

        let mut parity = Page::start(
            MemoryDocument::clinic_page(),
            Some(host.clone() as Arc<dyn HostSdk>),
            Box::new(MemoryPreferences::new()),
            PageOptions {
                falsy_as_unset: true,
                ..options()
            },
        );
        parity.pump();
        assert!(
            parity
                .document()
                .texts("clinic-phone")
                .iter()
                .all(|t| *t == "+20 123 456 7890")
        );
        assert_eq!(
            parity.document().style(Target::Body, "font-size"),
            Some("16px")
        );
        assert!(parity.config().is_empty());
    }

    #[test]
    fn unknown_stored_language_toggles_to_english_first() {
        let mut page = detached(MemoryPreferences::new().with(LANGUAGE_KEY, "fr"));
        assert_eq!(page.language(), Language::En);
        assert_eq!(page.document().attribute(Target::Root, "lang"), Some("en"));

        page.handle_event(PageEvent::ToggleLanguage);
        assert_eq!(page.language(), Language::En);
        assert_eq!(page.prefs.get(LANGUAGE_KEY).as_deref(), Some("en"));

        page.handle_event(PageEvent::ToggleLanguage);
        assert_eq!(page.language(), Language::Ar);
        assert_eq!(page.prefs.get(LANGUAGE_KEY).as_deref(), Some("ar"));
    }

    #[test]
    fn toggles_persist_preferences() {
        let mut page = detached(MemoryPreferences::new());
        page.handle_event(PageEvent::ToggleTheme);
        page.handle_event(PageEvent::ToggleLanguage);
        assert_eq!(page.prefs.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(page.prefs.get(LANGUAGE_KEY).as_deref(), Some("ar"));
        page.handle_event(PageEvent::ToggleTheme);
        assert_eq!(page.prefs.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn submission_without_runtime_stays_sending() {
        let mut page = detached(MemoryPreferences::new());
        page.handle_event(PageEvent::SubmitContact(ContactForm::default()));
        assert_eq!(page.submit_state(), SubmitState::Sending);
        assert!(
            page.last_contact_url()
                .is_some_and(|u| u.starts_with("https://wa.me/+201000204565?text="))
        );
        assert_eq!(page.pump(), 0);
    }

    #[test]
    fn shutdown_stops_pump() {
        let mut page = detached(MemoryPreferences::new());
        let tx = page.controller();
        tx.send(PageEvent::NextReview).unwrap();
        tx.send(PageEvent::Shutdown).unwrap();
        tx.send(PageEvent::NextReview).unwrap();
        assert_eq!(page.pump(), 2);
        assert_eq!(page.carousel().current(), 1);
    }
}
