use super::interaction::MapInteraction;
use crate::shared::api_utils::resource_url;
use crate::shared::icons::icon;
use contracts::domain::a001_region::CategoryDetail;
use contracts::shared::region_map::info_panel::{PanelView, IDLE_PROMPT, IDLE_TITLE};
use leptos::prelude::*;

/// Side panel: idle prompt, category overview of the selected region, or one
/// category's detail.
#[component]
pub fn RegionInfoPanel(interaction: MapInteraction) -> impl IntoView {
    // Hover changes don't alter the panel, the memo filters them out
    let panel = Memo::new(move |_| interaction.state.with(PanelView::from_state));

    view! {
        <aside class="region-panel">
            {move || match panel.get() {
                PanelView::Idle => view! {
                    <div class="region-panel__idle">
                        <span class="region-panel__idle-icon">{icon("map-pin")}</span>
                        <h3>{IDLE_TITLE}</h3>
                        <p>{IDLE_PROMPT}</p>
                    </div>
                }.into_any(),
                overview @ PanelView::Overview { .. } => view! {
                    <div class="region-panel__overview">
                        <h2>{overview.heading()}</h2>
                        <ul class="region-panel__categories">
                            {overview
                                .categories()
                                .into_iter()
                                .copied()
                                .map(|detail| category_entry(detail, interaction))
                                .collect_view()}
                        </ul>
                    </div>
                }.into_any(),
                detail_view @ PanelView::Detail { .. } => {
                    let back_label = detail_view.back_label().unwrap_or_default();
                    let heading = detail_view.heading();
                    let content = detail_view.detail().copied();
                    view! {
                        <div class="region-panel__detail">
                            <button class="region-panel__back" on:click=move |_| interaction.back_to_overview()>
                                {icon("arrow-left")}
                                <span>{back_label}</span>
                            </button>
                            {content.map(|detail| category_detail(detail, heading))}
                        </div>
                    }.into_any()
                }
            }}
        </aside>
    }
}

fn category_entry(detail: CategoryDetail, interaction: MapInteraction) -> impl IntoView {
    let theme = detail.kind.theme();
    let kind = detail.kind;
    view! {
        <li>
            <button
                class=format!("region-panel__category region-panel__category--{}", theme.accent)
                on:click=move |_| interaction.select_category(kind)
            >
                <span class="region-panel__category-icon">{icon(theme.icon)}</span>
                <span class="region-panel__category-text">
                    <strong>{detail.title}</strong>
                    <small>{detail.description}</small>
                </span>
                {icon("chevron-right")}
            </button>
        </li>
    }
}

fn category_detail(detail: CategoryDetail, heading: String) -> impl IntoView {
    let theme = detail.kind.theme();
    view! {
        <section class=format!("region-panel__content region-panel__content--{}", theme.accent)>
            <header>
                <span class="region-panel__category-icon">{icon(theme.icon)}</span>
                <h2>{heading}</h2>
            </header>
            <p class="region-panel__intro">{detail.introduction}</p>
            <div class="region-panel__items">
                {detail
                    .items
                    .iter()
                    .map(|item| view! {
                        <article class="region-panel__item">
                            <img src=resource_url(item.image) alt=item.name loading="lazy" />
                            <h4>{item.name}</h4>
                            <p>{item.description}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
