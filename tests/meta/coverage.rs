#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};

    const LIBRARY_ROOT: &str = "src/lib.rs";
    const UNIT_HARNESS: &str = "tests/unit.rs";
    const UNIT_DIR: &str = "tests/unit";

    /// Names from `mod name;` and `pub mod name;` lines
    fn declared_modules(source: &str) -> BTreeSet<String> {
        source
            .lines()
            .map(str::trim)
            .filter_map(|line| line.strip_prefix("pub ").unwrap_or(line).strip_prefix("mod "))
            .filter_map(|rest| rest.strip_suffix(';'))
            .map(str::to_string)
            .collect()
    }

    /// Module files reachable from the library root, relative to `src/`
    fn library_modules() -> BTreeSet<PathBuf> {
        let mut found = BTreeSet::new();
        let mut pending = vec![(PathBuf::from(LIBRARY_ROOT), PathBuf::new())];

        while let Some((file, module_dir)) = pending.pop() {
            let source = fs::read_to_string(&file).unwrap();
            for name in declared_modules(&source) {
                let leaf = module_dir.join(format!("{name}.rs"));
                let nested = module_dir.join(&name).join("mod.rs");
                if Path::new("src").join(&leaf).is_file() {
                    pending.push((Path::new("src").join(&leaf), module_dir.join(&name)));
                    found.insert(leaf);
                } else {
                    assert!(
                        Path::new("src").join(&nested).is_file(),
                        "{} declares missing module '{name}'",
                        file.display()
                    );
                    pending.push((Path::new("src").join(&nested), module_dir.join(&name)));
                    found.insert(nested);
                }
            }
        }

        found
    }

    fn rust_files(dir: &Path, base: &Path, out: &mut BTreeSet<PathBuf>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                rust_files(&path, base, out);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                out.insert(path.strip_prefix(base).unwrap().to_path_buf());
            }
        }
    }

    fn is_module_index(path: &Path) -> bool {
        path.file_name().is_some_and(|name| name == "mod.rs")
    }

    // Tests every library module file has a unit test file at the same path
    // Verified by deleting tests/unit/io/raw.rs
    #[test]
    fn test_every_module_has_unit_tests() {
        let missing: Vec<_> = library_modules()
            .into_iter()
            .filter(|module| !is_module_index(module))
            .filter(|module| !Path::new(UNIT_DIR).join(module).is_file())
            .map(|module| format!("  - src/{0} -> {UNIT_DIR}/{0}", module.display()))
            .collect();

        assert!(
            missing.is_empty(),
            "Modules without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests unit test files only exist for real modules
    // Verified by adding tests/unit/io/unused.rs
    #[test]
    fn test_unit_tests_have_modules() {
        let modules = library_modules();
        let mut tests = BTreeSet::new();
        rust_files(Path::new(UNIT_DIR), Path::new(UNIT_DIR), &mut tests);

        let orphaned: Vec<_> = tests
            .iter()
            .filter(|test| !is_module_index(test) && !modules.contains(*test))
            .map(|test| format!("  - {UNIT_DIR}/{}", test.display()))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files with no module:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests src files outside the library tree are binary entry points
    // Verified by adding an undeclared src/spatial/extra.rs
    #[test]
    fn test_undeclared_sources_are_entry_points() {
        let modules = library_modules();
        let mut sources = BTreeSet::new();
        rust_files(Path::new("src"), Path::new("src"), &mut sources);

        let library_root = Path::new(LIBRARY_ROOT).strip_prefix("src").unwrap();
        for source in sources.iter().filter(|source| !modules.contains(*source)) {
            if source == library_root {
                continue;
            }
            let content = fs::read_to_string(Path::new("src").join(source)).unwrap();
            assert!(
                source.parent() == Some(Path::new("")) && content.contains("fn main()"),
                "src/{} is neither a declared module nor a binary entry point",
                source.display()
            );
        }
    }

    // Tests the unit harness and each test directory declare every test file
    // Verified by removing 'mod spatial;' from tests/unit.rs
    #[test]
    fn test_unit_tree_is_compiled() {
        let harness = fs::read_to_string(UNIT_HARNESS).unwrap();
        let library = fs::read_to_string(LIBRARY_ROOT).unwrap();
        assert_eq!(declared_modules(&harness), declared_modules(&library));

        let mut tests = BTreeSet::new();
        rust_files(Path::new(UNIT_DIR), Path::new(UNIT_DIR), &mut tests);
        for test in tests.iter().filter(|test| !is_module_index(test)) {
            let dir = test.parent().unwrap_or_else(|| Path::new(""));
            let index = Path::new(UNIT_DIR).join(dir).join("mod.rs");
            let declared = declared_modules(&fs::read_to_string(&index).unwrap());
            let stem = test.file_stem().unwrap().to_string_lossy().into_owned();
            assert!(
                declared.contains(&stem),
                "{} does not declare '{stem}'",
                index.display()
            );
        }
    }

    // Tests every unit test file contains at least one test
    // Verified by emptying tests/unit/spatial/grid.rs
    #[test]
    fn test_unit_files_contain_tests() {
        let mut tests = BTreeSet::new();
        rust_files(Path::new(UNIT_DIR), Path::new(UNIT_DIR), &mut tests);

        let empty: Vec<_> = tests
            .iter()
            .filter(|test| !is_module_index(test))
            .map(|test| Path::new(UNIT_DIR).join(test))
            .filter(|path| !fs::read_to_string(path).unwrap().contains("#[test]"))
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Unit test files without #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
