/// Resolve a path relative to the crate root
#[macro_export]
macro_rules! relative_file {
    ($f : expr) => {{
        let base = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        base.join($f)
    }};
}

/// Read every file within a fixture directory, yielding sorted `(path, contents)` pairs
#[macro_export]
macro_rules! fixture_texts {
    ($dir : expr) => {{
        let mut texts = vec![];
        for entry in std::fs::read_dir($crate::relative_file!($dir)).unwrap() {
            let path = entry.unwrap().path();
            if path.is_file() {
                let text = std::fs::read_to_string(&path).unwrap();
                texts.push((path, text));
            }
        }
        texts.sort();
        texts
    }};
}
