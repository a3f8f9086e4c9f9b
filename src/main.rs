#[cfg(feature = "yew")]
mod app;
#[cfg(feature = "yew")]
mod config;

#[cfg(feature = "yew")]
fn main() {
    let config = config::Config::new();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    yew::Renderer::<app::App>::new().render();
}
#[cfg(not(feature = "yew"))]
fn main() {
    println!("Please enable the 'yew' feature to run the app.");
}
