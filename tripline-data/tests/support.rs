use camino::Utf8PathBuf;

/// Path of a JSON fixture shipped with the crate's tests.
pub fn fixture_path(name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}
