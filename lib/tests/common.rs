use rand::distributions::Alphanumeric;
use rand::Rng;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn init() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "moveit=debug".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn random_binary(size: usize) -> Vec<u8> {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .collect()
}

pub fn create_local_file(parent: &Path, name: &str, content: &[u8]) -> PathBuf {
    let child = parent.join(name);
    let mut file = std::fs::File::create(&child).unwrap();
    file.write_all(content).unwrap();
    child
}
