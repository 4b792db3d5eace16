//! Framework List Component
//!
//! The display region container. Its children mirror the region signal
//! exactly; every render replaces them wholesale.

use framework_catalog::RegionNode;
use leptos::prelude::*;

use super::FrameworkCardView;

#[component]
pub fn FrameworkList(#[prop(into)] nodes: Signal<Vec<RegionNode>>) -> impl IntoView {
    view! {
        <div id="frameworks-container" class="frameworks-container">
            {move || {
                nodes
                    .get()
                    .into_iter()
                    .map(|node| match node {
                        RegionNode::Card(card) => view! { <FrameworkCardView card=card /> }.into_any(),
                        RegionNode::Message(message) => view! { <p class="error-message">{message}</p> }.into_any(),
                    })
                    .collect_view()
            }}
        </div>
    }
}
