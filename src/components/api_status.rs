use std::rc::Rc;

use exodetect_core::{HealthSnapshot, Poller};
use leptos::prelude::*;
use tracing::error;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::use_config;
use crate::components::status_badge::StatusBadge;
use crate::timer::BrowserInterval;

/// Floating badge showing whether the classification service answers its
/// health endpoint. Polls on mount and then on the configured interval.
#[component]
pub fn ApiStatus() -> impl IntoView {
    let config = use_config();
    let (snapshot, set_snapshot) = signal(HealthSnapshot::default());
    let poller = StoredValue::new_local(None::<Poller<BrowserInterval>>);

    Effect::new(move |_| {
        let monitor = match api::health_monitor(&config) {
            Ok(m) => Rc::new(m),
            Err(e) => {
                error!("Health monitor disabled: {}", e);
                return;
            }
        };

        let tick = move || {
            let Some(previous) = snapshot.try_get_untracked() else {
                return;
            };
            set_snapshot.set(previous.begin_check());
            let monitor = monitor.clone();
            spawn_local(async move {
                let next = monitor.check(previous).await;
                // The badge may have been unmounted while the request was in flight
                set_snapshot.try_set(next);
            });
        };

        let mut p = Poller::new(BrowserInterval, config.poll_interval());
        match p.start(tick) {
            Ok(()) => poller.set_value(Some(p)),
            Err(e) => error!("Failed to start health polling: {}", e),
        }
    });

    on_cleanup(move || {
        poller.try_update_value(|p| {
            if let Some(p) = p.as_mut() {
                p.stop();
            }
        });
    });

    view! {
        <div class="api-status">
            {move || {
                let s = snapshot.get();
                view! {
                    <StatusBadge
                        label=s.status.label()
                        status=s.status.into()
                        detail=s.last_check_label().map(|t| format!("({})", t))
                    />
                }
            }}
        </div>
    }
}
