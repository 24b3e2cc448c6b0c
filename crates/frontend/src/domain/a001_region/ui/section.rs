use super::info_panel::RegionInfoPanel;
use super::interaction::MapInteraction;
use super::map::RegionMap;
use contracts::domain::a001_region::dataset;
use contracts::shared::region_map::ReselectPolicy;
use leptos::prelude::*;

/// Map and info panel side by side, sharing one interaction controller.
#[component]
pub fn InteractiveMapSection() -> impl IntoView {
    let interaction = MapInteraction::new(ReselectPolicy::default());
    interaction.init_query_sync();

    view! {
        <section class="map-section">
            <header class="map-section__header">
                <h2>"Explore the Provinces of Indonesia"</h2>
                <p>"Select a province to discover its tourism, art and culture, and culinary highlights."</p>
            </header>
            <div class="map-section__body">
                <div class="map-section__map">
                    <RegionMap regions=dataset::all() interaction=interaction />
                </div>
                <div class="map-section__panel">
                    <RegionInfoPanel interaction=interaction />
                </div>
            </div>
        </section>
    }
}
