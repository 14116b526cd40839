use std::path::Path;

use ack_domain::{Error, SearchRequest};
use ignore::overrides::{Override, OverrideBuilder};
use ignore::types::{Types, TypesBuilder};

/// Decides which walked files below one search root get searched, from the
/// glob and file type options of a request.
///
/// Globs follow `ignore` override rules: they match against the path relative
/// to the root, a glob without a `/` matches the file name at any depth, and
/// a leading `!` excludes.
pub(crate) struct FileFilter {
    overrides: Override,
    types: Option<Types>,
}

impl FileFilter {
    pub(crate) fn new(request: &SearchRequest, root: &Path) -> ack_domain::Result<Self> {
        let mut builder = OverrideBuilder::new(root);
        for glob in request.globs.iter().filter(|g| !g.is_empty()) {
            builder
                .add(glob)
                .map_err(|e| Error::InvalidGlob { glob: glob.clone(), message: e.to_string() })?;
        }
        let overrides = builder.build().map_err(|e| Error::InvalidGlob {
            glob: request.globs.join(" "),
            message: e.to_string(),
        })?;

        // Empty strings are treated as "no type filter"
        let types = match request.file_type.as_deref().filter(|t| !t.is_empty()) {
            Some(file_type) => {
                let mut builder = TypesBuilder::new();
                builder.add_defaults();
                builder.select(file_type);
                Some(
                    builder
                        .build()
                        .map_err(|_| Error::UnknownFileType(file_type.to_string()))?,
                )
            }
            None => None,
        };

        Ok(Self { overrides, types })
    }

    pub(crate) fn matches(&self, path: &Path) -> bool {
        if self.overrides.matched(path, false).is_ignore() {
            return false;
        }

        match &self.types {
            Some(types) => types.matched(path, false).is_whitelist(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixture(request: SearchRequest) -> FileFilter {
        FileFilter::new(&request, Path::new("root")).unwrap()
    }

    #[test]
    fn test_no_filters_accepts_everything() {
        let fixture = fixture(SearchRequest::new("x"));
        assert!(fixture.matches(Path::new("root/a/b.txt")));
        assert!(fixture.matches(Path::new("root/Makefile")));
    }

    #[test]
    fn test_include_glob_matches_at_any_depth() {
        let fixture = fixture(SearchRequest::new("x").glob("*.rs"));
        assert!(fixture.matches(Path::new("root/src/lib.rs")));
        assert!(fixture.matches(Path::new("root/main.rs")));
        assert!(!fixture.matches(Path::new("root/src/lib.py")));
    }

    #[test]
    fn test_glob_with_directory_is_relative_to_root() {
        let fixture = fixture(SearchRequest::new("x").glob("sub/*.txt"));
        assert!(fixture.matches(Path::new("root/sub/a.txt")));
        assert!(!fixture.matches(Path::new("root/a.txt")));
        assert!(!fixture.matches(Path::new("root/sub/a.rs")));
    }

    #[test]
    fn test_glob_under_implicit_root() {
        let fixture =
            FileFilter::new(&SearchRequest::new("x").glob("sub/*.txt"), Path::new(".")).unwrap();
        assert!(fixture.matches(Path::new("./sub/a.txt")));
        assert!(!fixture.matches(Path::new("./a.txt")));
    }

    #[test]
    fn test_exclude_glob() {
        let fixture = fixture(SearchRequest::new("x").glob("!*.lock"));
        assert!(fixture.matches(Path::new("root/Cargo.toml")));
        assert!(!fixture.matches(Path::new("root/Cargo.lock")));
    }

    #[test]
    fn test_exclude_directory_glob() {
        let fixture = fixture(SearchRequest::new("x").glob("!target/**"));
        assert!(fixture.matches(Path::new("root/src/lib.rs")));
        assert!(!fixture.matches(Path::new("root/target/debug/build.rs")));
    }

    #[test]
    fn test_file_type() {
        let fixture = fixture(SearchRequest::new("x").file_type("rust"));
        assert!(fixture.matches(Path::new("root/main.rs")));
        assert!(!fixture.matches(Path::new("root/main.js")));
    }

    #[test]
    fn test_empty_file_type_is_ignored() {
        let fixture = fixture(SearchRequest::new("x").file_type(""));
        assert!(fixture.matches(Path::new("root/main.js")));
    }

    #[test]
    fn test_unknown_file_type() {
        let request = SearchRequest::new("x").file_type("no-such-type");
        let actual = FileFilter::new(&request, Path::new("."));
        assert!(matches!(actual, Err(Error::UnknownFileType(name)) if name == "no-such-type"));
    }

    #[test]
    fn test_invalid_glob() {
        let actual = FileFilter::new(&SearchRequest::new("x").glob("[abc"), Path::new("."));
        match actual {
            Err(Error::InvalidGlob { glob, .. }) => assert_eq!(glob, "[abc"),
            _ => panic!("Expected InvalidGlob"),
        }
    }
}
