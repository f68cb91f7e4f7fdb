//! Compiles Protocol Buffers into native Rust types.

use std::path::{Path, PathBuf};

type Error = Box<dyn std::error::Error>;
type Result<T, E = Error> = std::result::Result<T, E>;

fn main() -> Result<()> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("protos");

    generate_grpc_types(&root)?;

    Ok(())
}

/// Schema used with the node management gRPC API
///
/// Creates:
///
/// - `sonm.rs`
fn generate_grpc_types(root: &Path) -> Result<()> {
    let sonm_path = root.join("sonm");

    let proto_files = vec![
        sonm_path.join("bigint.proto"),
        sonm_path.join("deal.proto"),
        sonm_path.join("insonmnia.proto"),
        sonm_path.join("node.proto"),
    ];

    // Tell cargo to recompile if any of these proto files are changed
    for proto_file in &proto_files {
        println!("cargo:rerun-if-changed={}", proto_file.display());
    }

    let config = prost_build::Config::new();

    tonic_build::configure().compile_with_config(config, &proto_files, &[root])?;

    Ok(())
}
