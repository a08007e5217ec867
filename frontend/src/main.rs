fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting AI Future landing page");
    yew::Renderer::<ai_future::App>::new().render();
}
