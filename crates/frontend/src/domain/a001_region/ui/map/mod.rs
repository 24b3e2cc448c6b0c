pub mod dom_surface;
pub mod transform_layer;

use self::dom_surface::DomSurface;
use self::transform_layer::TransformLayer;
use super::interaction::MapInteraction;
use crate::domain::a001_region::api;
use crate::shared::icons::icon;
use contracts::domain::a001_region::Region;
use contracts::shared::region_map::loader::LoadState;
use contracts::shared::region_map::MapBinder;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const LOADING_TEXT: &str = "Loading map...";
pub const HINT_TEXT: &str = "Interactive Map: Hover, click, zoom, or drag.";

/// Loads the vector map, binds it to `regions` and repaints it on every
/// interaction change.
#[component]
pub fn RegionMap(regions: &'static [Region], interaction: MapInteraction) -> impl IntoView {
    let load_state = RwSignal::new(LoadState::Loading);
    let bind_error = RwSignal::new(None::<String>);
    let bind_warning = RwSignal::new(None::<&'static str>);
    let interactive = RwSignal::new(false);
    let ready = RwSignal::new(false);
    // Bumped after each injection so the transform layer re-measures
    let injections = RwSignal::new(0u32);
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let binder = StoredValue::new_local(None::<MapBinder<DomSurface>>);

    spawn_local(async move {
        let result = api::load_map_document().await;
        if let Err(e) = &result {
            log::error!("Error fetching SVG map: {}", e);
        }
        load_state.set(LoadState::from_result(result));
    });

    // Bind once the markup is loaded and the container is mounted
    Effect::new(move |_| {
        let Some(markup) = load_state.with(|s| s.text().map(str::to_string)) else {
            return;
        };
        let Some(container) = container_ref.get() else {
            return;
        };

        // Dropping the previous binder detaches its listeners
        binder.set_value(None);

        let surface = match DomSurface::inject(&container, &markup) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("{}", e);
                bind_error.set(Some(e.to_string()));
                interactive.set(false);
                ready.set(false);
                return;
            }
        };

        injections.update(|n| *n += 1);

        let mut map = MapBinder::new(surface);
        match map.bind(regions, interaction) {
            Ok(status) => {
                log::debug!("Map bound: {} regions", map.bindings().len());
                map.reconcile(&interaction.state.get_untracked());
                bind_warning.set(status.warning());
                bind_error.set(None);
                interactive.set(true);
                ready.set(status.is_ready());
            }
            Err(e) => {
                log::error!("{}", e);
                bind_error.set(Some(e.to_string()));
                interactive.set(false);
                ready.set(false);
            }
        }
        binder.set_value(Some(map));
    });

    // Repaint on every interaction change
    Effect::new(move |_| {
        let state = interaction.state.get();
        if !interactive.get() {
            return;
        }
        binder.update_value(|b| {
            if let Some(map) = b {
                map.reconcile(&state);
            }
        });
    });

    on_cleanup(move || binder.set_value(None));

    view! {
        <div class="region-map">
            {move || match load_state.get() {
                LoadState::Loading => view! {
                    <div class="region-map__status">
                        {icon("loader")}
                        <p>{LOADING_TEXT}</p>
                    </div>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <div class="region-map__status region-map__status--error">
                        <p>{message}</p>
                    </div>
                }.into_any(),
                LoadState::Loaded(_) => ().into_any(),
            }}

            <Show when=move || load_state.with(|s| s.text().is_some())>
                <TransformLayer refresh=injections>
                    <div class="region-map__svg" node_ref=container_ref></div>
                </TransformLayer>
            </Show>

            {move || bind_error.get().map(|message| view! {
                <div class="region-map__status region-map__status--error">
                    <p>{message}</p>
                </div>
            })}

            {move || bind_warning.get().map(|message| view! {
                <div class="region-map__warning">{message}</div>
            })}

            // Partial maps show the warning instead
            <Show when=move || ready.get()>
                <p class="region-map__hint">{HINT_TEXT}</p>
            </Show>
        </div>
    }
}
