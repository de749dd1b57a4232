//! Clinic Engine
//!
//! Keeps the clinic page's rendered presentation in sync with a configuration
//! supplied by an optional editor host:
//! - resolves effective values and writes them into a [`Document`]
//! - derives capability descriptors and edit-panel values for the editor
//! - registers with the host and applies each delivered snapshot in order
//! - drives the page's own behaviours: theme, language, review carousel and
//!   the contact form
//!
//! The primary entry point is [`Page`]. The applier and mappers are plain
//! functions of a [`Configuration`] and can be used on their own.

/// Host seam and registration.
mod bridge;
/// Capability descriptors.
mod capabilities;
/// Review carousel.
mod carousel;
/// Contact form and submit button.
mod contact;
/// Document abstraction.
mod document;
/// Edit-panel values.
mod edit_panel;
/// Error types.
mod error;
/// Host implementations.
mod host;
/// Page language and direction.
mod locale;
/// Page runtime.
mod page;
/// Persisted preferences.
mod preferences;
/// Presentation applier.
mod presentation;
/// Color theme.
mod theme;
/// Named repeating timers.
mod ticker;

/// Helpers for tests that drive a page.
pub mod test_support;

pub use bridge::{
    ConfigSink, EditorSurface, HostHandle, HostSdk, Registration, SiteSurface, attach,
};
pub use capabilities::{Capabilities, Capability, map_to_capabilities};
pub use carousel::{REVIEW_COUNT, ROTATION_INTERVAL, ReviewCarousel};
pub use clinic_protocol::{CapabilityState, CapabilityValue, EditPanelValues};
pub use config::{Configuration, Field, Value};
pub use contact::{ContactForm, RESET_AFTER, SENT_AFTER, SubmitState, WHATSAPP_NUMBER};
pub use document::{Document, ElementId, MemoryDocument, Node, Target};
pub use edit_panel::map_to_edit_panel_values;
pub use error::{Error, Result};
pub use host::{ChannelHost, MemoryHost};
pub use locale::Language;
pub use page::{EventTx, Page, PageEvent, PageOptions};
pub use preferences::{LANGUAGE_KEY, MemoryPreferences, Preferences, THEME_KEY};
pub use presentation::{
    ApplyReport, FONT_STACK, Presentation, StyleBinding, TextBinding, apply_config,
};
pub use theme::Theme;
pub use ticker::Ticker;
