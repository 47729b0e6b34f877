use std::{env, error::Error, fs};

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine as _};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<_> = env::args().collect();

    let filepath = args
        .get(1)
        .context("Expected a path to an image file as the first argument")?;
    let bytes = fs::read(filepath).context("Failed to read the image file")?;

    let body = serde_json::json!({ "data": STANDARD.encode(bytes) });
    println!("{body}");

    Ok(())
}
