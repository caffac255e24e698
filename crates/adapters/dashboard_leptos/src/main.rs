use backup_console_dashboard::{App, config, logging};
use leptos::prelude::*;

fn main() {
    let config = config::load();
    logging::init(&config.logging.filter);
    mount_to_body(move || view! { <App config/> });
}
