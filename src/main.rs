#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(visa_trainer::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // The binary only exists for the wasm32/csr build; native builds are for
    // running the unit test suite.
}
