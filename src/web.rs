//! Browser entry point: bind like buttons on page load.
//!
//! The page may name its backend with `data-likes-env` and
//! `data-likes-base-url` on `<body>`; with neither, requests go to the page's
//! own origin.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::api::gloo::GlooLikeApi;
use crate::config::{Environment, LikesConfig};
use crate::handler::LikeToggleHandler;
use crate::page::browser::BrowserPage;

const ENV_ATTRIBUTE: &str = "data-likes-env";
const BASE_URL_ATTRIBUTE: &str = "data-likes-base-url";

type BrowserHandler = LikeToggleHandler<BrowserPage, GlooLikeApi>;

#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(page) = BrowserPage::from_window() else {
        tracing::warn!("no document; like buttons not bound");
        return;
    };
    let config = page_config(&page);
    tracing::debug!(base_url = %config.base_url, environment = %config.environment, "binding like buttons");

    let handler = LikeToggleHandler::initialize(GlooLikeApi::new(&config), page);
    for button in handler.bound_buttons() {
        attach_click(&handler, button);
    }
}

fn attach_click(handler: &BrowserHandler, button: &Element) {
    let handler = handler.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let handler = handler.clone();
        wasm_bindgen_futures::spawn_local(async move {
            // The handler logs every failure; the icon stays as it was.
            let _ = handler.handle_click(&target).await;
        });
    });
    if let Err(err) = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        tracing::warn!(?err, "failed to attach like click listener");
    }
    on_click.forget();
}

fn page_config(page: &BrowserPage) -> LikesConfig {
    let body = page.document().body();
    let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));

    let environment = attr(ENV_ATTRIBUTE).and_then(|raw| Environment::parse_or_warn(&raw));
    // An explicit environment keeps its own default URL; otherwise same-origin.
    let base_url = attr(BASE_URL_ATTRIBUTE).or_else(|| match environment {
        Some(_) => None,
        None => web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .filter(|origin| origin != "null"),
    });
    let environment = environment.unwrap_or_default();

    let config = LikesConfig::for_environment(environment);
    match base_url {
        Some(url) => config.with_base_url(&url),
        None => config,
    }
}
