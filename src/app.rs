use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{ContentRepository, OverlayKey, ShowcaseState, SiteConfig};
use wasm_bindgen::JsCast;

use crate::context::{apply_modal_scroll, sync_scroll_lock, SharedRepository};
use crate::dom::WindowListener;
use crate::fetch::HttpFetcher;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The portfolio page; modal state is never reflected in the URL
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, site config, the content repository and the
/// showcase state, and routes Escape/arrow keys to the open overlay.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(SiteConfig::default);
    let repository: SharedRepository = use_context_provider(|| Signal::new(None));
    let showcase = use_context_provider(|| Signal::new(ShowcaseState::new(&config)));

    // Load the manifest on mount
    let manifest_config = config.clone();
    use_effect(move || {
        let config = manifest_config.clone();
        let mut repository = repository;
        spawn(async move {
            let mut repo = ContentRepository::new(HttpFetcher, &config);
            repo.load_manifest().await;
            repository.set(Some(Rc::new(repo)));
        });
    });

    use_hook(move || Rc::new(overlay_key_listener(showcase)));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

fn overlay_key_listener(mut showcase: Signal<ShowcaseState>) -> Option<WindowListener> {
    let listener = WindowListener::new("keydown", move |event| {
        let Some(key) = event
            .dyn_ref::<web_sys::KeyboardEvent>()
            .and_then(|e| OverlayKey::from_dom_key(&e.key()))
        else {
            return;
        };

        let modal_was_open = showcase.peek().modal.is_open();
        let handled = showcase.write().handle_key(key);
        if !handled {
            return;
        }
        sync_scroll_lock(showcase);
        if modal_was_open && !showcase.peek().modal.is_open() {
            apply_modal_scroll(showcase);
        }
    });

    match listener {
        Ok(listener) => Some(listener),
        Err(e) => {
            tracing::error!("Keyboard navigation unavailable: {}", e);
            None
        }
    }
}
