use leptos::prelude::*;
use roadmap_web::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("error initializing logger");
    log::info!("Java Backend Roadmap loaded");
    log::info!("Ready to start your learning journey");
    mount_to_body(App);
}
