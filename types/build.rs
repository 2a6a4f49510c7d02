fn main() {
    println!("cargo:rerun-if-changed=proto/calculator.proto");
    tonic_prost_build::configure()
        .compile_protos(&["proto/calculator.proto"], &["proto/"])
        .expect("Failed to compile proto/calculator.proto");
}
