use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUT_DIR: &str = "assets/dist";
const CSS_BUNDLE: &str = "assets/dist/bundle.css";

/// Resolve @imports from the entry file, minify, and write a single bundle
fn bundle_css(entry: &Path, output: &Path) -> Result<usize, String> {
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(entry)
        .map_err(|e| format!("bundling {}: {}", entry.display(), e))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minifying: {}", e))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("printing: {}", e))?;

    fs::write(output, &css.code).map_err(|e| format!("writing {}: {}", output.display(), e))?;
    Ok(css.code.len())
}

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    if let Err(e) = fs::create_dir_all(CSS_OUT_DIR) {
        panic!("Failed to create {}: {}", CSS_OUT_DIR, e);
    }

    match bundle_css(Path::new(CSS_ENTRY), Path::new(CSS_BUNDLE)) {
        Ok(bytes) => println!("CSS bundled: {} ({} bytes)", CSS_BUNDLE, bytes),
        Err(e) => panic!("CSS bundle failed: {}", e),
    }
}
