//! `ConfigLoader::load` against the real working directory.
//!
//! The working directory is process-wide, so this binary holds a single test.

mod common;

use std::path::PathBuf;

use service_config::ConfigLoader;

const PARENT_ONLY: &str = "SERVICE_CONFIG_TEST_PARENT_ONLY";

/// Restores the working directory on drop, even if an assertion fails
struct WorkingDir(PathBuf);

impl WorkingDir {
    fn enter(dir: &std::path::Path) -> Self {
        let original = std::env::current_dir().expect("Failed to read working directory");
        std::env::set_current_dir(dir).expect("Failed to enter directory");
        Self(original)
    }
}

impl Drop for WorkingDir {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

#[test]
fn load_merges_dotenv_from_working_directory_only() {
    let parent = tempfile::tempdir().unwrap();
    let child = parent.path().join("service");
    std::fs::create_dir(&child).unwrap();
    let _cwd = WorkingDir::enter(&child);

    let mut vars = common::all_unset();
    vars.push((PARENT_ONLY, None));

    temp_env::with_vars(vars, || {
        // No env file anywhere nearby
        let config = ConfigLoader::load();
        assert_eq!(config.server_port, ":3000");
        assert_eq!(config.db_env.as_str(), "local");

        // A .env one level up is not picked up
        std::fs::write(
            parent.path().join(".env"),
            format!("PORT=6000\nDB_ENV=aura\n{PARENT_ONLY}=merged\n"),
        )
        .unwrap();
        let config = ConfigLoader::load();
        assert_eq!(config.server_port, ":3000");
        assert_eq!(config.db_env.as_str(), "local");
        assert!(std::env::var_os(PARENT_ONLY).is_none());

        // A .env in the working directory is merged
        std::fs::write(child.join(".env"), "PORT=7001\nDB_ENV=aura\n").unwrap();
        let config = ConfigLoader::load();
        assert_eq!(config.server_port, ":7001");
        assert!(config.db_env.is_aura());
        assert!(std::env::var_os(PARENT_ONLY).is_none());
    });
}
