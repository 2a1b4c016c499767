use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::{Path, PathBuf};

const CSS_DIR: &str = "assets/css";
const ENTRY_SHEET: &str = "assets/css/main.css";
const BUNDLE: &str = "assets/dist/bundle.css";

/// Sheets pulled in by `@import "<name>";` lines of the entry sheet
fn imported_sheets(entry: &str) -> Vec<PathBuf> {
    entry
        .lines()
        .filter_map(|line| line.trim().strip_prefix("@import"))
        .filter_map(|rest| rest.split('"').nth(1))
        .map(|name| Path::new(CSS_DIR).join(name))
        .collect()
}

fn main() {
    let entry = fs::read_to_string(ENTRY_SHEET).expect("Failed to read assets/css/main.css");
    let sheets = imported_sheets(&entry);

    // Directory mtimes miss in-place edits, so watch every sheet
    println!("cargo:rerun-if-changed={}", ENTRY_SHEET);
    for sheet in &sheets {
        println!("cargo:rerun-if-changed={}", sheet.display());
        if !sheet.exists() {
            panic!("main.css imports missing sheet {}", sheet.display());
        }
    }

    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY_SHEET))
        .expect("Failed to bundle shell CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify shell CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate shell CSS");

    fs::write(BUNDLE, css.code).expect("Failed to write bundle.css");
}
