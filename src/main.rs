mod app;
mod components;
mod config;
mod error;
mod host;
mod pages;
mod schedule;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("portfolio starting");
    yew::Renderer::<App>::new().render();
}
