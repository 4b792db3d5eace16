//! Framework Card Component

use framework_catalog::FrameworkCard;
use leptos::prelude::*;

/// One framework: heading, then the card's labelled lines
#[component]
pub fn FrameworkCardView(card: FrameworkCard) -> impl IntoView {
    let lines = card.lines().map(|line| (line.label, line.value.to_string()));

    view! {
        <div class="framework-card">
            <h3>{card.heading}</h3>
            {lines
                .into_iter()
                .map(|(label, value)| view! { <p><strong>{label}</strong>" "{value}</p> })
                .collect_view()}
        </div>
    }
}
