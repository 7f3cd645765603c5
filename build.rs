use gl_generator::{Api, Fallbacks, GlobalGenerator, Profile, Registry};
use std::env;
use std::fs::File;
use std::path::Path;

// glBegin/glEnd and the matrix stack only exist in the compatibility profile,
// which the `gl` crate does not generate.
fn main() {
    let dest = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let mut file = File::create(Path::new(&dest).join("gl_bindings.rs"))
        .expect("Failed to create gl bindings file!");

    Registry::new(Api::Gl, (2, 1), Profile::Compatibility, Fallbacks::All, [])
        .write_bindings(GlobalGenerator, &mut file)
        .expect("Failed to write gl bindings!");

    println!("cargo:rerun-if-changed=build.rs");
}
