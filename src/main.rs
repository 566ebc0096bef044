//! Browser entry point: install the panic hook, wire up console logging,
//! and mount the app. Does nothing when built without the `csr` feature
//! (the native build only exists to run the unit tests).

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(citadel::app::App);
    }
}
