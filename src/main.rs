// Page logic is shared by both targets; only the wasm build renders it.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod contact;
mod content;
mod motion;
mod particles;
mod projects;
mod tracker;

#[cfg(not(target_arch = "wasm32"))]
mod backend;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    if let Err(error) = backend::run().await {
        eprintln!("static host failed: {error}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
