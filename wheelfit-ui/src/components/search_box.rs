//! Debounced search input
//!
//! Keeps the typed text locally and reports it after the user pauses. Each
//! keystroke cancels the pending report and starts a new one, and the
//! `Debounced` gate drops any report a newer keystroke has superseded, so a
//! burst of typing produces a single `on_search` call.

use crate::components::icons::SearchIcon;
use crate::components::utils::sleep_ms;
use dioxus::prelude::*;
use wheelfit_common::Debounced;

#[component]
pub fn SearchBox(
    /// Value the text starts with
    initial: String,
    on_search: EventHandler<String>,
    delay_ms: u64,
    #[props(default)] placeholder: Option<&'static str>,
) -> Element {
    let mut text = use_signal(|| initial.clone());
    let mut pending: Signal<Option<Task>> = use_signal(|| None);
    let mut debounce = use_signal(Debounced::<String>::default);

    rsx! {
        div { class: "relative flex-1 min-w-[200px]",
            SearchIcon { class: "w-4 h-4 text-gray-500 absolute left-3 top-1/2 -translate-y-1/2" }
            input {
                r#type: "search",
                id: "discSearch",
                class: "w-full bg-gray-800/50 rounded-lg pl-9 pr-3 py-2 text-gray-200 placeholder-gray-500 focus:outline-none focus:ring-1 focus:ring-orange-500/50",
                value: "{text}",
                placeholder,
                oninput: move |e| {
                    let value = e.value();
                    text.set(value.clone());
                    let ticket = debounce.write().push(value);
                    if let Some(task) = pending.take() {
                        task.cancel();
                    }
                    let task = spawn(async move {
                        sleep_ms(delay_ms).await;
                        pending.set(None);
                        let settled = debounce.write().settle(ticket);
                        if let Some(value) = settled {
                            on_search.call(value);
                        }
                    });
                    pending.set(Some(task));
                },
            }
        }
    }
}
