use std::io;
use std::path::PathBuf;

use log::{error, info};
use vecplane::apps::{chain::chain_demo, triangle::triangle_demo};
use vecplane::config::RENDER_CONFIG;
use vecplane::render::RenderError;

fn main() {
    env_logger::init();

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("failed to read from stdin");

    let input = input.trim();
    match input.parse::<u32>() {
        Ok(0) => report(chain_demo(&RENDER_CONFIG)),
        Ok(1) => report(triangle_demo(&RENDER_CONFIG)),
        Ok(i) => println!("program idx not found: {i}"),
        Err(..) => println!("failed to parse: {}", input),
    };
}

fn report(result: Result<PathBuf, RenderError>) {
    match result {
        Ok(path) => info!("done: {}", path.display()),
        Err(e) => error!("{e}"),
    }
}
