use leptos::prelude::*;

/// Modal asking the user to confirm an action.
///
/// Clicking the backdrop counts as cancelling.
#[component]
pub fn ConfirmModal(
    title: &'static str,
    message: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 bg-black/50 flex items-center justify-center z-50"
            on:click=move |e| {
                if e.target() == e.current_target() {
                    on_cancel.run(());
                }
            }
        >
            <div class="bg-white dark:bg-neutral-900 border border-neutral-200 dark:border-neutral-700 rounded-lg p-5 w-80 shadow-xl">
                <h3 class="text-sm font-semibold mb-2">{title}</h3>
                <p class="text-xs text-neutral-500 mb-4">{message}</p>

                <div class="flex justify-end gap-2">
                    <button
                        class="text-xs px-4 py-1.5 rounded border border-neutral-300 dark:border-neutral-600 hover:bg-neutral-100 dark:hover:bg-neutral-800"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="text-xs px-4 py-1.5 rounded bg-sky-600 text-white hover:bg-sky-500"
                        on:click=move |_| on_confirm.run(())
                    >
                        "OK"
                    </button>
                </div>
            </div>
        </div>
    }
}
