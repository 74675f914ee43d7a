use crate::app::App;

mod app;
mod card_grid;
mod components;
mod config;
mod logging;
mod markdown;
mod pages;
mod routes;
mod services;
mod storage;
mod tops_sheet;

fn main() {
    logging::init();
    components::feedback::install_unload_guard();
    yew::Renderer::<App>::new().render();
}
