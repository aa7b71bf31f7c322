//! Integration tests for invocation building.

use std::fs;

use tempfile::tempdir;
use terracmd_core::{command, Config, ConfigError, Invocation};

#[test]
fn test_full_destroy_invocation() {
    let config = Config::new()
        .parallelism(4)
        .target("module.network")
        .var("username", "someuser")
        .var("password", "1pass")
        .var_file("common.tfvars")
        .var_file("prod.tfvars");

    let invocation = command::destroy(&config);

    assert_eq!(invocation.program, "terraform");
    assert_eq!(
        invocation.args,
        vec![
            "destroy",
            "-parallelism=4",
            "-target=module.network",
            "-var",
            "password=1pass",
            "-var",
            "username=someuser",
            "-var-file=common.tfvars",
            "-var-file=prod.tfvars",
            "-force",
        ]
    );
}

#[test]
fn test_identical_configs_build_identical_invocations() {
    let build = || {
        let config = Config::new()
            .var("b", "2")
            .var("a", "1")
            .var("c", "3")
            .var_file("x.tfvars");
        command::plan(&config, false)
    };

    assert_eq!(build(), build());
}

#[test]
fn test_var_order_is_independent_of_insertion_order() {
    let forward = Config::new().var("alpha", "1").var("beta", "2").var("gamma", "3");
    let reverse = Config::new().var("gamma", "3").var("beta", "2").var("alpha", "1");

    assert_eq!(command::destroy(&forward), command::destroy(&reverse));
    assert_eq!(
        command::destroy(&forward).args,
        vec![
            "destroy",
            "-var",
            "alpha=1",
            "-var",
            "beta=2",
            "-var",
            "gamma=3",
            "-force",
        ]
    );
}

#[test]
fn test_plan_then_apply_share_the_plan_file() {
    let config = Config::new().var("region", "eu-west-1");

    let plan_args = command::plan(&config, false).args;
    let apply_args = command::apply(&config).args;

    assert!(plan_args.contains(&format!("-out={}", terracmd_core::PLAN_FILE)));
    assert_eq!(apply_args.last().unwrap(), terracmd_core::PLAN_FILE);
}

#[test]
fn test_import_full_flag_set_ordering() {
    let config = Config::new()
        .lock(false)
        .lock_timeout("30s")
        .var("region", "eu-west-1")
        .var_file("common.tfvars");

    let invocation = command::import(&config, "aws_instance.web", "i-abcd1234");

    assert_eq!(
        invocation.args,
        vec![
            "import",
            "-lock=false",
            "-lock-timeout=30s",
            "-var",
            "region=eu-west-1",
            "-var-file=common.tfvars",
            "aws_instance.web",
            "i-abcd1234",
        ]
    );
}

#[test]
fn test_yaml_descriptor_loading() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.yaml");
    fs::write(
        &path,
        r#"
parallelism: 2
targets:
  - target1
  - target2
vars:
  region: eu-west-1
var_files:
  - common.tfvars
init_options:
  lock: true
  lock_timeout: 30s
fmt_options:
  check: true
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.parallelism, 2);
    assert_eq!(config.targets, vec!["target1".to_string(), "target2".to_string()]);
    assert_eq!(config.vars.get("region"), Some(&"eu-west-1".to_string()));
    assert_eq!(config.init_options.lock, Some(true));
    assert_eq!(config.init_options.lock_timeout, Some("30s".to_string()));
    assert_eq!(config.fmt_options.check, Some(true));
    assert_eq!(config.fmt_options.list, None);
}

#[test]
fn test_json_descriptor_loading() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.json");
    fs::write(
        &path,
        r#"{"parallelism": 7, "vars": {"username": "someuser"}, "fmt_options": {"write": false}}"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.parallelism, 7);
    assert_eq!(config.vars.get("username"), Some(&"someuser".to_string()));
    assert_eq!(config.fmt_options.write, Some(false));
}

#[test]
fn test_unknown_descriptor_extension_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.toml");
    fs::write(&path, "parallelism = 2\n").unwrap();

    match Config::from_file(&path) {
        Err(ConfigError::UnsupportedFormat(ext)) => assert_eq!(ext, "toml"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn test_descriptor_drives_builder_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.yml");
    fs::write(&path, "vars:\n  password: 1pass\n  username: someuser\n").unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(
        command::destroy(&config),
        Invocation::terraform(vec![
            "destroy".to_string(),
            "-var".to_string(),
            "password=1pass".to_string(),
            "-var".to_string(),
            "username=someuser".to_string(),
            "-force".to_string(),
        ])
    );
}
