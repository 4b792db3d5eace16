//! Framework Catalog App
//!
//! Page shell: resolves the endpoint, loads once on mount, hosts the region.

use framework_catalog::{load_frameworks, Fetcher, RegionNode, Renderer};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FrameworkList;
use crate::config::AppConfig;
use crate::region::SignalRegion;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::resolve();
    log::info!("[App] Data endpoint: {}", config.endpoint);

    // State
    let nodes = RwSignal::new(Vec::<RegionNode>::new());
    let (loading, set_loading) = signal(true);

    // Load on mount; no tracked signals, so this runs once
    Effect::new(move |_| {
        let endpoint = config.endpoint.clone();
        spawn_local(async move {
            let fetcher = Fetcher::new(endpoint);
            let mut renderer = Renderer::new(SignalRegion(nodes));
            if let Ok(count) = load_frameworks(&fetcher, &mut renderer).await {
                log::info!("[App] Rendered {} framework cards", count);
            }
            set_loading.set(false);
        });
    });

    view! {
        <main class="main-content">
            <h1>"Frameworks"</h1>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <FrameworkList nodes=nodes />
        </main>
    }
}
