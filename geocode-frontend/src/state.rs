use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use geocode_boundary::Geocoded;

use crate::{components::MapView, flow::Presenter};

/// Duration of the panel slide animation.
pub const SLIDE_DURATION_MS: u32 = 600;

pub const RESULT_ANCHOR_ID: &str = "result";
pub const RESULT_ERROR_ID: &str = "result_error";

/// Side effects outside of the reactive state.
#[async_trait(?Send)]
pub trait PageEffects {
    fn scroll_to(&self, id: &str);

    /// Wait until a slide animation has finished.
    async fn wait_for_slide(&self);
}

/// Effects on the browser document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomEffects;

#[async_trait(?Send)]
impl PageEffects for DomEffects {
    fn scroll_to(&self, id: &str) {
        let Some(element) = document().get_element_by_id(id) else {
            log::warn!("Unable to scroll: no element #{id}");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    async fn wait_for_slide(&self) {
        TimeoutFuture::new(SLIDE_DURATION_MS).await;
    }
}

/// Reactive state of the geocoding page.
#[derive(Clone, Copy)]
pub struct PageState<E = DomEffects> {
    pub loading: RwSignal<bool>,
    pub result_expanded: RwSignal<bool>,
    pub error_expanded: RwSignal<bool>,
    pub quality: RwSignal<String>,
    pub error_message: RwSignal<String>,
    pub map_view: RwSignal<MapView>,
    effects: E,
}

impl PageState {
    #[must_use]
    pub fn new() -> Self {
        Self::with_effects(DomEffects)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> PageState<E>
where
    E: PageEffects,
{
    #[must_use]
    pub fn with_effects(effects: E) -> Self {
        Self {
            loading: RwSignal::new(false),
            result_expanded: RwSignal::new(false),
            error_expanded: RwSignal::new(false),
            quality: RwSignal::new(String::new()),
            error_message: RwSignal::new(String::new()),
            map_view: RwSignal::new(MapView::empty()),
            effects,
        }
    }

    async fn collapse(&self, expanded: RwSignal<bool>) {
        if !expanded.get_untracked() {
            return;
        }
        expanded.set(false);
        self.effects.wait_for_slide().await;
    }
}

#[async_trait(?Send)]
impl<E> Presenter for PageState<E>
where
    E: PageEffects,
{
    fn show_loading(&self) {
        self.loading.set(true);
    }

    fn hide_loading(&self) {
        self.loading.set(false);
    }

    async fn collapse_result(&self) {
        self.collapse(self.result_expanded).await;
    }

    async fn collapse_error(&self) {
        self.collapse(self.error_expanded).await;
    }

    fn display_result(&self, geocoded: &Geocoded) {
        self.quality.set(geocoded.quality_text());
        self.result_expanded.set(true);
        self.map_view.set(MapView::located(geocoded));
        self.effects.scroll_to(RESULT_ANCHOR_ID);
    }

    fn display_error(&self, message: &str) {
        self.error_message.set(message.to_owned());
        self.error_expanded.set(true);
        self.effects.scroll_to(RESULT_ERROR_ID);
        self.map_view.set(MapView::empty());
    }
}
