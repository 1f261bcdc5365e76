//! Configuration Loader Tests

use subon_domain::error::Error;
use subon_domain::value_objects::ReactiveShape;
use subon_infrastructure::config::{ConfigBuilder, ConfigLoader, SchedulerConfig, SchedulerKind};
use subon_infrastructure::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_LOG_LEVEL};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("subon.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_config_loader_defaults_when_file_missing() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .with_env_prefix("SUBON_TEST_UNSET")
        .load()
        .unwrap();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.rewriter.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
    assert!(config.schedulers.is_empty());
    assert!(config.markers.is_empty());
}

#[test]
fn test_config_loader_reads_schedulers_and_markers() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[logging]
level = "debug"

[schedulers.ioScheduler]
worker_threads = 2
thread_name = "io"

[schedulers.main]
kind = "current"

[markers."NumberService::numbers"]
key = "ioScheduler"

[markers."NumberService::answer"]
key = "main"
shape = "single"

[rewriter]
channel_capacity = 4
"#,
    );

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config.logging.level, "debug");
    let io = &config.schedulers["ioScheduler"];
    assert_eq!(io.kind, SchedulerKind::ThreadPool);
    assert_eq!(io.worker_threads, Some(2));
    assert_eq!(io.thread_name.as_deref(), Some("io"));
    assert_eq!(config.schedulers["main"], SchedulerConfig::current());
    assert_eq!(config.markers["NumberService::numbers"].shape, ReactiveShape::Multi);
    assert_eq!(config.markers["NumberService::answer"].shape, ReactiveShape::Single);
    assert_eq!(config.rewriter.channel_capacity, 4);
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_scheduler("ioScheduler", SchedulerConfig::thread_pool(3))
        .with_marker("NumberService::numbers", "ioScheduler", ReactiveShape::Multi)
        .with_channel_capacity(8)
        .build();

    let loader = ConfigLoader::new();
    loader.save_to_file(&original, &config_path).unwrap();

    let loaded = ConfigLoader::new().with_config_path(&config_path).load().unwrap();

    assert_eq!(loaded.schedulers, original.schedulers);
    assert_eq!(loaded.markers, original.markers);
    assert_eq!(loaded.rewriter.channel_capacity, 8);
}

#[test]
fn test_config_rejects_zero_worker_threads() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[schedulers.io]\nworker_threads = 0\n");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();

    assert!(matches!(err, Error::Configuration { ref message, .. } if message.contains("'io'")));
}

#[test]
fn test_config_rejects_zero_channel_capacity() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[rewriter]\nchannel_capacity = 0\n");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_config_rejects_blank_marker_key() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[markers.\"Svc::m\"]\nkey = \"  \"\n");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();

    assert!(err.to_string().contains("Svc::m"));
}

#[test]
fn test_config_rejects_invalid_log_level() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[logging]\nlevel = \"loud\"\n");

    assert!(ConfigLoader::new().with_config_path(&path).load().is_err());
}

#[test]
fn test_config_rejects_unknown_scheduler_kind() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[schedulers.io]\nkind = \"fiber\"\n");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();

    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
}

#[test]
fn test_environment_overrides_default_config_file() {
    figment::Jail::expect_with(|jail| {
        // The jail runs in a fresh directory, where the default file is found
        jail.create_file(
            "subon.toml",
            "[schedulers.io]\nworker_threads = 2\n\n[rewriter]\nchannel_capacity = 4\n",
        )?;
        jail.set_env("SUBON_JAIL__REWRITER__CHANNEL_CAPACITY", "7");
        jail.set_env("SUBON_JAIL__SCHEDULERS__IO__WORKER_THREADS", "3");

        let config = ConfigLoader::new()
            .with_env_prefix("SUBON_JAIL")
            .load()
            .map_err(|err| err.to_string())?;

        assert_eq!(config.rewriter.channel_capacity, 7);
        assert_eq!(config.schedulers["io"].worker_threads, Some(3));
        Ok(())
    });
}
