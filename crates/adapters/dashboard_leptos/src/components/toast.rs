//! Toast notifications for page-level banners.

use backup_console_app::ports::{Banner, BannerKind};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// A single toast message.
#[derive(Debug, Clone)]
pub struct ToastMessage {
    /// Unique id for keyed rendering.
    pub id: u32,
    pub kind: BannerKind,
    pub text: String,
}

impl ToastMessage {
    fn class(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => "toast toast-success",
            BannerKind::Error => "toast toast-error",
        }
    }
}

/// Reactive context providing toast mutation methods.
#[derive(Clone)]
pub struct ToastProvider {
    set_toasts: WriteSignal<Vec<ToastMessage>>,
    next_id: ReadSignal<u32>,
    set_next_id: WriteSignal<u32>,
    timeout_ms: u32,
}

impl ToastProvider {
    /// Show `banner`. It auto-dismisses after the configured timeout.
    pub fn push(&self, banner: Banner) {
        let id = self.next_id.get_untracked();
        self.set_next_id.set(id.wrapping_add(1));

        self.set_toasts.update(|list| {
            list.push(ToastMessage {
                id,
                kind: banner.kind,
                text: banner.text,
            });
        });

        let set_toasts = self.set_toasts;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
            set_toasts.update(|list| {
                list.retain(|t| t.id != id);
            });
        });
    }

    /// Dismiss a toast immediately by id.
    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|list| {
            list.retain(|t| t.id != id);
        });
    }
}

/// Access the toast provider from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`] ancestor.
pub fn use_toasts() -> ToastProvider {
    use_context::<ToastProvider>().expect("ToastProvider not found in context")
}

/// Container component that provides toast context and renders active toasts.
#[component]
pub fn ToastContainer(
    /// How long a toast stays visible.
    #[prop(default = 5000)]
    timeout_ms: u64,
    children: Children,
) -> impl IntoView {
    let (toasts, set_toasts) = signal(Vec::<ToastMessage>::new());
    let (next_id, set_next_id) = signal(0_u32);

    let provider = ToastProvider {
        set_toasts,
        next_id,
        set_next_id,
        timeout_ms: u32::try_from(timeout_ms).unwrap_or(u32::MAX),
    };

    provide_context(provider.clone());

    view! {
        {children()}
        <div class="toast-container">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = toast.class();
                        let p = provider.clone();
                        view! {
                            <div class=class role="status">
                                <button class="toast-dismiss" on:click=move |_| p.dismiss(id)>
                                    "\u{00D7}"
                                </button>
                                {toast.text}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
