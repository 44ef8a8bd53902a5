use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let header = PathBuf::from(&crate_dir).join("../../VecLibFFI.h");

    // C header for the veclib_* functions, written next to the workspace manifest
    cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("VECLIB_FFI_H")
        .with_header("/* Generated by cbindgen from crates/ffi. Do not edit. */")
        .with_documentation(true)
        .with_pragma_once(false)
        .generate()
        .expect("Unable to generate C bindings")
        .write_to_file(header);

    for source in ["src/lib.rs", "src/vector.rs", "src/error.rs"] {
        println!("cargo:rerun-if-changed={source}");
    }
}
