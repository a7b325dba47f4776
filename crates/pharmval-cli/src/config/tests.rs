#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.store.backend, StoreBackend::File);
        assert_eq!(config.store.path, "./data/valuations");
        assert!(!config.valuation.strict);
        assert_eq!(config.logging.filter, "pharmval=debug,info");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("/nonexistent/pharmval.toml")).unwrap();
        assert!(config.sources.loe_records.is_none());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pharmval.toml");
        std::fs::write(
            &path,
            "[store]\nbackend = \"memory\"\n\n[valuation]\ncurrent_year = 2027\nstrict = true\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.path, default_store_path());
        assert_eq!(config.current_year(), 2027);
        assert!(config.valuation.strict);
    }

    #[test]
    fn test_only_file_backend_persists() {
        assert!(StoreBackend::File.is_persistent());
        assert!(!StoreBackend::Memory.is_persistent());
    }

    #[test]
    fn test_bad_backend_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pharmval.toml");
        std::fs::write(&path, "[store]\nbackend = \"postgres\"\n").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(Config::resolve_path(None), PathBuf::from("pharmval.toml"));
        assert_eq!(
            Config::resolve_path(Some(Path::new("/etc/pharmval.toml"))),
            PathBuf::from("/etc/pharmval.toml")
        );
    }
}
