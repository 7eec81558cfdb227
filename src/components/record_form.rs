//! Record Form Component
//!
//! Add form generated from a record type's field list.

use leptos::prelude::*;

use crate::context::use_locale;
use crate::controller::RecordList;
use crate::models::Record;
use crate::store::use_toasts;

/// Draft inputs plus add/cancel for `list`
pub fn record_form<R: Record>(list: RwSignal<RecordList<R>>) -> impl IntoView {
    let locale = use_locale();
    let toasts = use_toasts();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut sink = toasts;
        list.update(|l| {
            let _ = l.submit_add(&mut sink);
        });
    };

    view! {
        <form class="record-form" on:submit=submit>
            <h3 class="record-form-title">{move || locale.t(R::DOMAIN.form_title_key())}</h3>
            <div class="form-grid">
                {R::FIELDS.iter().map(|field| {
                    let key = field.key;
                    let kind = field.kind;
                    view! {
                        <div class="form-field">
                            <label for=key>{move || locale.t(key)}</label>
                            <input
                                id=key
                                type=kind.input_type()
                                step={if kind.is_numeric() { Some("any") } else { None }}
                                prop:value=move || list.with(|l| l.draft().get(key).to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    list.update(|l| l.update_draft_field(key, value));
                                }
                            />
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="form-actions">
                <button type="submit" class="primary">{move || locale.t("add")}</button>
                <button type="button" class="outline" on:click=move |_| list.update(|l| l.cancel_add())>
                    {move || locale.t("cancel")}
                </button>
            </div>
        </form>
    }
}
