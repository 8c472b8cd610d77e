//! Modal dialogs for the opportunity application flow: the input form
//! and the success confirmation.

use leptos::prelude::*;

/// Application form dialog. The parent owns the flow state; this only
/// renders the form and forwards submit/cancel.
#[component]
pub fn ApplicationDialog(
    cover_letter: RwSignal<String>,
    error: Signal<Option<String>>,
    submitting: Signal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Submit Application"</h2>
                <label class="dialog__label">
                    "Cover letter"
                    <textarea
                        class="dialog__input"
                        prop:value=move || cover_letter.get()
                        on:input=move |ev| {
                            cover_letter.set(event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                {move || {
                    error
                        .get()
                        .map(|msg| view! { <p class="dialog__error">{msg}</p> })
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting.get()
                        on:click=move |_| on_submit.run(())
                    >
                        {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation shown after a completed submit cycle.
#[component]
pub fn SuccessDialog(message: &'static str, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Application received"</h2>
                <p>{message}</p>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
