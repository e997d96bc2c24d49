// Regenerates the C header with `cbindgen` when the CLI is installed,
// otherwise copies the checked-in `include/realizr.h` to $OUT_DIR.

use std::{env, fs, path::PathBuf, process::Command};

fn main() {
    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=include/realizr.h");

    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let header_repo = crate_dir.join("include").join("realizr.h");
    let header_out = out_dir.join("realizr.h");

    let have_cbindgen = Command::new("cbindgen")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);

    if have_cbindgen {
        let generated = Command::new("cbindgen")
            .args(["--crate", "realizr-ffi", "--lang", "C", "--output"])
            .arg(&header_out)
            .current_dir(&crate_dir)
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
        if generated {
            let _ = fs::copy(&header_out, &header_repo);
            return;
        }
        println!("cargo:warning=realizr-ffi: cbindgen failed; using checked-in header");
    }

    fs::copy(&header_repo, &header_out).expect("failed to copy include/realizr.h to OUT_DIR");
}
