//! Test support utilities for clinic-engine integration/unit tests.
//! These helpers are public to avoid dead_code warnings and are lightweight.
//! They are intended for use by the test suite only.

use std::{sync::Arc, time::Duration};

use crate::{
    bridge::HostSdk,
    document::MemoryDocument,
    host::MemoryHost,
    page::{Page, PageOptions},
    preferences::MemoryPreferences,
};

/// Options with rotation disabled so tests control the carousel.
pub fn quiet_options() -> PageOptions {
    PageOptions {
        rotation: None,
        ..PageOptions::default()
    }
}

/// Start a page on the clinic skeleton with no host present.
pub fn detached_page() -> Page<MemoryDocument> {
    Page::start(
        MemoryDocument::clinic_page(),
        None,
        Box::new(MemoryPreferences::new()),
        quiet_options(),
    )
}

/// Start a page registered with `host`, and drain the initial delivery.
pub fn hosted_page(host: &Arc<MemoryHost>, options: PageOptions) -> Page<MemoryDocument> {
    let sdk: Arc<dyn HostSdk> = host.clone();
    let mut page = Page::start(
        MemoryDocument::clinic_page(),
        Some(sdk),
        Box::new(MemoryPreferences::new()),
        options,
    );
    page.pump();
    page
}

/// Poll `pred` on `page` after pumping, until it holds or `timeout_ms` passes.
pub async fn pump_until<F>(page: &mut Page<MemoryDocument>, timeout_ms: u64, mut pred: F) -> bool
where
    F: FnMut(&Page<MemoryDocument>) -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        page.pump();
        if pred(page) {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
