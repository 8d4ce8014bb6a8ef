//! Commit hash and build date stamped in by the build script.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
