mod components;
mod model;
mod services;
mod state;
mod util;

use components::app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
