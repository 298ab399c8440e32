//! Tests for configuration system

use mealwise::Config;
use mealwise::config::OutputFormat;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() -> anyhow::Result<()> {
    let config = Config::load(None)?;

    assert_eq!(config.observability.log_level, "info");
    assert!(config.shopping.ignore_water);
    assert!(config.catalog.extra_keywords.is_empty());
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_loads_explicit_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("mealwise.toml");
    std::fs::write(
        &path,
        r#"
[observability]
log_level = "debug"

[output]
format = "json"

[shopping]
ignore_water = false

[catalog.extra_keywords]
produce = ["kohlrabi"]

[catalog.densities]
"spelt flour" = 3.8
"#,
    )?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert_eq!(config.observability.log_level, "debug");
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.shopping.ignore_water);
    assert!(config.validate().is_ok());

    let catalog = config.catalog();
    assert_eq!(catalog.determine_category("Kohlrabi"), "Produce");
    assert_eq!(catalog.density_for("spelt flour"), Some(3.8));

    Ok(())
}

#[test]
fn test_missing_file_falls_back_to_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("absent.toml");

    let config = Config::load(Some(path.display().to_string()))?;

    assert_eq!(config.observability.log_level, "info");
    assert!(config.shopping.ignore_water);

    Ok(())
}

#[test]
fn test_invalid_values_fail_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("bad.toml");
    std::fs::write(
        &path,
        r#"
[observability]
log_level = "chatty"

[catalog.densities]
"spelt flour" = -2.0
"#,
    )?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert!(config.validate().is_err());

    Ok(())
}

#[test]
fn test_environment_overrides_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("mealwise.toml");
    std::fs::write(&path, "[observability]\njson = false\n")?;

    // Only this test touches MEALWISE__OBSERVABILITY__JSON
    unsafe { std::env::set_var("MEALWISE__OBSERVABILITY__JSON", "true") };
    let config = Config::load(Some(path.display().to_string()));
    unsafe { std::env::remove_var("MEALWISE__OBSERVABILITY__JSON") };

    assert!(config?.observability.json);

    Ok(())
}
