use exodetect_core::{default_config, DashboardConfig};
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::api_status::ApiStatus;
use crate::components::header::Header;
use crate::pages::detector::DetectorPage;
use crate::pages::documentation::DocumentationPage;

/// Settings shared by every component, read once at startup.
#[derive(Clone)]
pub struct ConfigContext(pub DashboardConfig);

pub fn use_config() -> DashboardConfig {
    use_context::<ConfigContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(default_config)
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(ConfigContext(default_config()));

    view! {
        <Router>
            <div class="app-layout">
                <div class="star-field" aria-hidden="true"></div>
                <ApiStatus />
                <Header />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=DetectorPage />
                        <Route path=path!("/documentation") view=DocumentationPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
