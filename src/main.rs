// The server only uses `BasePath`; the rest is browser code.
#[cfg_attr(not(any(target_arch = "wasm32", test)), allow(dead_code))]
mod assets;
mod logging;

#[cfg(any(target_arch = "wasm32", test))]
mod language;
#[cfg(any(target_arch = "wasm32", test))]
mod listeners;
#[cfg(any(target_arch = "wasm32", test))]
mod orbit;
#[cfg(any(target_arch = "wasm32", test))]
mod routes;
#[cfg(any(target_arch = "wasm32", test))]
mod slideshow;

#[cfg(not(target_arch = "wasm32"))]
mod backend;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
