//! Reads the rounding-mode encodings from the target's `<fenv.h>`.
//!
//! The C preprocessor expands each `FE_*` macro and the results are written to
//! `$OUT_DIR/fenv_codes.rs`. Without a working C toolchain the crate falls back to its
//! built-in per-architecture table and a warning is printed.

use std::{env, fs, path::PathBuf};

#[path = "build/fenv_header.rs"]
mod fenv_header;

fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-changed=build/fenv_header.rs");
    println!("cargo::rustc-check-cfg=cfg(fenv_from_header)");

    match read_header() {
        Ok(()) => println!("cargo::rustc-cfg=fenv_from_header"),
        Err(reason) => println!("cargo::warning=using built-in FE_* table: {reason}"),
    }
}

fn read_header() -> Result<(), String> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").map_err(|e| e.to_string())?);
    let source = out_dir.join("fenv_codes.c");
    fs::write(&source, fenv_header::c_source()).map_err(|e| e.to_string())?;

    let expanded = cc::Build::new()
        .file(&source)
        .cargo_metadata(false)
        .try_expand()
        .map_err(|e| e.to_string())?;
    let codes = fenv_header::rust_source(&String::from_utf8_lossy(&expanded))?;

    fs::write(out_dir.join("fenv_codes.rs"), codes).map_err(|e| e.to_string())
}
