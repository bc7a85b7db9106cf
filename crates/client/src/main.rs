//! Browser client entrypoint. Build and serve with `trunk serve`.

mod app;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
