use crate::domain::a001_region::ui::InteractiveMapSection;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <InteractiveMapSection />
        </main>
    }
}
