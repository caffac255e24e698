//! Create-backup form in a modal dialog.
//!
//! Messages shown inside the form stay until the form is closed or
//! submitted again; the fields reset whenever the modal closes.

use backup_console_app::ports::{Banner, BannerKind};
use backup_console_domain::backup::BackupDraft;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::BusyButton;

const KINDS: [(&str, &str); 3] = [
    ("full", "Full"),
    ("incremental", "Incremental"),
    ("differential", "Differential"),
];

const SCHEDULES: [(&str, &str); 4] = [
    ("manual", "Manual"),
    ("daily", "Daily"),
    ("weekly", "Weekly"),
    ("monthly", "Monthly"),
];

#[component]
pub fn CreateBackupModal(
    #[prop(into)] open: Signal<bool>,
    /// Success or error message of the last submission.
    #[prop(into)]
    message: Signal<Option<Banner>>,
    #[prop(into)] creating: Signal<bool>,
    #[prop(into)] on_submit: Callback<BackupDraft>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let path = RwSignal::new(String::new());
    let kind = RwSignal::new(String::new());
    let schedule = RwSignal::new(SCHEDULES[0].0.to_string());
    let description = RwSignal::new(String::new());

    Effect::new(move |_| {
        if !open.get() {
            name.set(String::new());
            path.set(String::new());
            kind.set(String::new());
            schedule.set(SCHEDULES[0].0.to_string());
            description.set(String::new());
        }
    });

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(BackupDraft {
            name: name.get_untracked(),
            path: path.get_untracked(),
            kind: kind.get_untracked(),
            schedule: schedule.get_untracked(),
            description: description.get_untracked(),
        });
    };

    let form_message = move || {
        message.get().map(|banner| {
            let class = match banner.kind {
                BannerKind::Success => "form-message success-message",
                BannerKind::Error => "form-message error-message",
            };
            view! { <div class=class>{banner.text}</div> }
        })
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal">
                <div class="modal-content">
                    <div class="modal-header">
                        <h2>"New Backup"</h2>
                        <button class="modal-close" on:click=move |_| on_close.run(())>
                            "\u{00D7}"
                        </button>
                    </div>
                    {form_message}
                    <form on:submit=submit>
                        <label>
                            "Name *"
                            <input type="text" bind:value=name/>
                        </label>
                        <label>
                            "Path *"
                            <input type="text" placeholder="/data/photos" bind:value=path/>
                        </label>
                        <label>
                            "Type *"
                            <select bind:value=kind>
                                <option value="">"Select a type"</option>
                                {KINDS
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label>
                            "Schedule"
                            <select bind:value=schedule>
                                {SCHEDULES
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label>
                            "Description"
                            <textarea bind:value=description></textarea>
                        </label>
                        <div class="modal-actions">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                on:click=move |_| on_close.run(())
                            >
                                "Cancel"
                            </button>
                            <BusyButton label="Create Backup" busy_label="Creating..." busy=creating/>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
