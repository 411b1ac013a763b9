use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let header = PathBuf::from(&crate_dir)
        .join("../../Vectorial.h")
        .display()
        .to_string();

    // Vectorial.h lands at the workspace root, next to Cargo.toml
    cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("VECTORIAL_H")
        .with_documentation(true)
        .with_pragma_once(false)
        .generate()
        .expect("cbindgen failed to generate Vectorial.h")
        .write_to_file(header);

    // The exported items live in these two files
    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=src/error.rs");
}
