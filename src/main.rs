use leptos::prelude::*;
use shareview::app::App;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    shareview::utils::logger::init();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    log::info!("{} v{} mounting", shareview::config::APP_NAME, shareview::config::APP_VERSION);
    mount_to(root, App).forget();
}
