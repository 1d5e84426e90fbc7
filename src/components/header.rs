use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="header-inner">
                <a href="/" class="brand">
                    <h2 class="brand-title">"ExoDetect AI"</h2>
                    <p class="brand-version">"v2.0.1"</p>
                </a>
                <nav class="nav-list">
                    <a href="/documentation" class="nav-link">"Documentation"</a>
                    <a href="/documentation?section=dataset" class="nav-link">"Dataset"</a>
                    <a href="/documentation?section=model" class="nav-link">"Model Info"</a>
                </nav>
            </div>
        </header>
    }
}
