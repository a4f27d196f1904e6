use carousel_viewer::{ViewerConfig, create_app};

fn main() {
    let config = ViewerConfig::load_or_default();
    let mut app = create_app(config);

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
