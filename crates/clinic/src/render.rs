use std::sync::Arc;

use clinic_engine::{
    CapabilityState, Configuration, EditPanelValues, HostHandle, HostSdk, LANGUAGE_KEY,
    Language, MemoryDocument, MemoryHost, MemoryPreferences, Page, PageOptions, Preferences,
    THEME_KEY, Theme, map_to_capabilities, map_to_edit_panel_values,
};
use serde::Serialize;

/// Editor-facing views of a configuration.
#[derive(Debug, Serialize)]
pub struct EditorViews {
    /// Values for the host's edit form.
    pub edit_panel: EditPanelValues,
    /// Current capability values.
    pub capabilities: CapabilityState,
}

impl EditorViews {
    /// Views for `config` with no host attached.
    pub fn of(config: &Configuration) -> Self {
        Self {
            edit_panel: map_to_edit_panel_values(config),
            capabilities: map_to_capabilities(config, &HostHandle::detached()).state(),
        }
    }
}

/// Options for [`render`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Treat falsy values as unset.
    pub falsy_as_unset: bool,
    /// Language stored in preferences before the page starts.
    pub language: Option<Language>,
    /// Theme stored in preferences before the page starts.
    pub theme: Option<Theme>,
}

/// Rendered page state.
#[derive(Debug, Serialize)]
pub struct Rendered {
    /// Editor views of the configuration the page applied.
    #[serde(flatten)]
    pub views: EditorViews,
    /// Full document state after rendering.
    pub document: MemoryDocument,
}

/// Render the clinic page with `config` delivered by an in-memory host.
pub fn render(config: Configuration, opts: RenderOptions) -> Rendered {
    let mut prefs = MemoryPreferences::new();
    if let Some(lang) = opts.language {
        prefs.set(LANGUAGE_KEY, lang.code());
    }
    if let Some(theme) = opts.theme {
        prefs.set(THEME_KEY, theme.as_str());
    }

    let host = Arc::new(MemoryHost::with_store(config));
    let sdk: Arc<dyn HostSdk> = host;
    let mut page = Page::start(
        MemoryDocument::clinic_page(),
        Some(sdk),
        Box::new(prefs),
        PageOptions {
            falsy_as_unset: opts.falsy_as_unset,
            rotation: None,
            ..PageOptions::default()
        },
    );
    page.pump();

    Rendered {
        views: EditorViews {
            edit_panel: page.edit_panel_values(),
            capabilities: page.capabilities().state(),
        },
        document: page.into_document(),
    }
}
