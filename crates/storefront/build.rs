//! Build script for storefront crate.
//!
//! Hashes the stylesheet so pages can reference an immutable, cache-busted
//! copy under `static/css/derived/`.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

const SHORT_HASH_LEN: usize = 8;

fn main() {
    hash_css();
}

/// Hash main.css and copy it to the derived directory with the hash in its name.
///
/// Sets `CSS_HASH` for use with `env!("CSS_HASH")`. An empty hash means the
/// templates fall back to the unhashed file.
fn hash_css() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let content = match fs::read(&css_path) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read main.css: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
            return;
        }
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash: String = digest.chars().take(SHORT_HASH_LEN).collect();

    let derived_dir = Path::new(&manifest_dir).join("static/css/derived");
    let copied = fs::create_dir_all(&derived_dir)
        .and_then(|()| fs::copy(&css_path, derived_dir.join(format!("main.{short_hash}.css"))));

    match copied {
        Ok(_) => println!("cargo:rustc-env=CSS_HASH={short_hash}"),
        Err(e) => {
            println!("cargo:warning=Could not write hashed main.css: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
        }
    }
}
