//! Builds the gRPC client and server bindings for `proto/fretes.proto` using
//! `tonic-prost-build`.
//!
//! A file descriptor set is written to `OUT_DIR` alongside the generated
//! modules so the server can expose gRPC reflection. The generated code is
//! pulled into the crate via:
//!
//! ```rust,ignore
//! pub mod proto {
//!     tonic::include_proto!("fretes");
//! }
//! ```

use std::env;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let descriptor_path = out_dir.join("fretes_descriptor.bin");

    let mut config = tonic_prost_build::Config::new();
    config.file_descriptor_set_path(&descriptor_path);

    tonic_prost_build::configure()
        .compile_with_config(config, &["proto/fretes.proto"], &["proto"])
        .unwrap();
}
