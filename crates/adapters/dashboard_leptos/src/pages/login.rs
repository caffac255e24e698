//! Login page: the two-step sign-in wizard.

use std::rc::Rc;

use backup_console_app::ports::{LoginStep, LoginView};
use backup_console_app::services::AuthController;
use backup_console_domain::credentials::{Field, OTP_LENGTH, OtpCode};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::BusyButton;
use crate::platform::{self, BrowserPage, BrowserSessionStorage, FetchTransport};

type Controller = AuthController<FetchTransport, BrowserSessionStorage, BrowserPage, LoginSignals>;

/// [`LoginView`] backed by signals.
#[derive(Debug, Clone, Copy)]
struct LoginSignals {
    step: RwSignal<LoginStep>,
    error: RwSignal<Option<String>>,
    success: RwSignal<Option<String>>,
    invalid: RwSignal<Vec<Field>>,
    loading: RwSignal<bool>,
}

impl LoginSignals {
    fn new() -> Self {
        Self {
            step: RwSignal::new(LoginStep::Credentials),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
            invalid: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
        }
    }

    fn is_invalid(self, field: Field) -> impl Fn() -> bool + Copy + Send + Sync + 'static {
        move || self.invalid.with(|fields| fields.contains(&field))
    }
}

impl LoginView for LoginSignals {
    fn show_step(&self, step: LoginStep) {
        self.step.set(step);
    }

    fn show_error(&self, message: &str, fields: &[Field]) {
        self.success.set(None);
        self.error.set(Some(message.to_string()));
        self.invalid.set(fields.to_vec());
    }

    fn show_success(&self, message: &str) {
        self.error.set(None);
        self.success.set(Some(message.to_string()));
    }

    fn clear_messages(&self) {
        self.error.set(None);
        self.success.set(None);
        self.invalid.set(Vec::new());
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }
}

/// Login page component.
#[component]
pub fn Login() -> impl IntoView {
    let config = crate::use_config();
    let signals = LoginSignals::new();
    let controller: StoredValue<Rc<Controller>, LocalStorage> = StoredValue::new_local(Rc::new(
        AuthController::new(platform::api_client(&config), signals, config.timing.clone()),
    ));
    controller.with_value(|c| c.start());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());

    let submit_credentials = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.with_value(Rc::clone);
        let (email, password) = (email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            controller.submit_credentials(&email, &password).await;
        });
    };

    let submit_otp = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.with_value(Rc::clone);
        let code = otp.get_untracked();
        spawn_local(async move {
            controller.submit_otp(&code).await;
        });
    };

    let go_back = move |_| {
        otp.set(String::new());
        controller.with_value(|c| c.go_back());
    };

    let on_otp_input = move |ev: leptos::ev::Event| {
        otp.set(OtpCode::sanitize_input(&event_target_value(&ev)));
    };

    let error = move || {
        signals
            .error
            .get()
            .map(|text| view! { <div class="error-message">{text}</div> })
    };
    let success = move || {
        signals
            .success
            .get()
            .map(|text| view! { <div class="success-message">{text}</div> })
    };

    view! {
        <div class="login-container">
            <h1>"Backup Console"</h1>
            {error}
            {success}
            <Show
                when=move || signals.step.get() == LoginStep::Credentials
                fallback=move || {
                    view! {
                        <form class="login-step" on:submit=submit_otp>
                            <p>"Enter the 5-digit code we sent to your email."</p>
                            <input
                                type="text"
                                inputmode="numeric"
                                autocomplete="one-time-code"
                                maxlength=OTP_LENGTH.to_string()
                                placeholder="00000"
                                class:input-error=signals.is_invalid(Field::Otp)
                                prop:value=move || otp.get()
                                on:input=on_otp_input
                            />
                            <BusyButton label="Verify" busy_label="Verifying..." busy=signals.loading/>
                            <button type="button" class="btn btn-link" on:click=go_back>
                                "Back"
                            </button>
                        </form>
                    }
                }
            >
                <form class="login-step" on:submit=submit_credentials>
                    <input
                        type="email"
                        placeholder="Email"
                        autocomplete="username"
                        class:input-error=signals.is_invalid(Field::Email)
                        bind:value=email
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        class:input-error=signals.is_invalid(Field::Password)
                        bind:value=password
                    />
                    <BusyButton label="Sign In" busy_label="Signing in..." busy=signals.loading/>
                </form>
            </Show>
        </div>
    }
}
