// tests/config_tests.rs
use std::fs;

use caesar_tool::config::{self, Config};
use caesar_tool::consts::CONFIG_ENV_VAR;
use caesar_tool::{CoreError, Mode, Shift};
use tempfile::tempdir;

#[test]
fn empty_config_uses_defaults() {
    let conf = Config::from_toml_str("").unwrap();
    assert_eq!(conf, Config::default());
    assert_eq!(conf.cipher.default_shift, Shift::DEFAULT);
    assert_eq!(conf.cipher.default_mode, Mode::Encrypt);
    assert_eq!(conf.batch.input_extension, "txt");
    assert_eq!(conf.batch.output_extension, "caesar");
    assert_eq!(conf.batch.manifest_name, "caesar-manifest.json");
}

#[test]
fn partial_config_keeps_other_defaults() {
    let conf = Config::from_toml_str(
        r#"
        [cipher]
        default_mode = "decrypt"

        [batch]
        output_extension = "rot"
        "#,
    )
    .unwrap();
    assert_eq!(conf.cipher.default_mode, Mode::Decrypt);
    assert_eq!(conf.cipher.default_shift, Shift::DEFAULT);
    assert_eq!(conf.batch.output_extension, "rot");
    assert_eq!(conf.batch.input_extension, "txt");

    let options = conf.batch_options();
    assert_eq!(options.mode, Mode::Decrypt);
    assert_eq!(options.output_extension, "rot");
}

#[test]
fn out_of_range_shift_is_rejected() {
    let err = Config::from_toml_str("[cipher]\ndefault_shift = 26\n").unwrap_err();
    assert!(matches!(err, CoreError::Config(_)));
}

#[test]
fn unknown_mode_is_rejected() {
    assert!(Config::from_toml_str("[cipher]\ndefault_mode = \"both\"\n").is_err());
}

#[test]
fn load_from_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("caesar-tool.toml");
    fs::write(&path, "[cipher]\ndefault_shift = 13\n").unwrap();

    let conf = config::load_from(&path).unwrap();
    assert_eq!(conf.cipher.default_shift.get(), 13);

    assert!(matches!(
        config::load_from(dir.path().join("missing.toml")),
        Err(CoreError::Io(_))
    ));
}

// The only test in this binary that touches the global config
#[test]
fn global_load_honours_env_override() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("env.toml");
    fs::write(&path, "[cipher]\ndefault_shift = 21\n").unwrap();
    std::env::set_var(CONFIG_ENV_VAR, &path);

    let first = config::load().unwrap();
    assert_eq!(first.cipher.default_shift.get(), 21);

    let second = config::load().unwrap();
    assert!(std::ptr::eq(first, second));
}
