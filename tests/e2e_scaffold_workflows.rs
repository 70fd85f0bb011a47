//! End-to-end scaffolding workflows across the library and the CLI handlers

use std::{fs, sync::Arc};

use clap::Parser;
use mlchain_scaffold::{
    PluginCategory, PluginSpec, ScaffoldConfig, ScaffoldGenerator, TemplateCatalog,
};
use mlchain_scaffold_cli::{commands::NewCommand, Cli, Commands};
use mlchain_scaffold_integration_tests::write_overlay_entry;
use serial_test::serial;
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
#[serial]
fn test_config_drives_catalog_and_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let overlay = temp_dir.path().join("templates");
    write_overlay_entry(
        &overlay,
        "tool",
        "go",
        "resources:\n  - path: \"cmd/{{ name_kebab }}/main.go\"\n    body: \"// {{ name_pascal }} by {{ author }} v{{ version }}\\n\"\n",
    )
    .unwrap();

    let config_path = write_config(
        &temp_dir,
        &format!(
            "default_author = \"acme\"\ntemplate_dirs = [{:?}]\n\n[manifest]\nversion = \"2.0.0\"\n",
            overlay.to_str().unwrap()
        ),
    );

    let config = ScaffoldConfig::load(Some(&config_path)).unwrap();
    let catalog = Arc::new(TemplateCatalog::load(&config.template_dirs).unwrap());
    let generator = ScaffoldGenerator::with_config(catalog, &config);

    let out = temp_dir.path().join("out");
    let result = generator
        .generate(&PluginSpec::new("weather_api", PluginCategory::Tool, "go"), &out)
        .unwrap();

    assert!(result.is_complete());
    assert_eq!(
        fs::read_to_string(out.join("cmd/weather-api/main.go")).unwrap(),
        "// WeatherApi by acme v2.0.0\n"
    );

    let python = generator
        .generate(
            &PluginSpec::new("weather_api", PluginCategory::Tool, "python"),
            &temp_dir.path().join("py"),
        )
        .unwrap();
    assert!(python.is_complete());
    let manifest = fs::read_to_string(temp_dir.path().join("py/manifest.yaml")).unwrap();
    assert!(manifest.contains("version: \"2.0.0\""));
    assert!(manifest.contains("author: \"acme\""));
}

#[test]
#[serial]
fn test_config_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, "dry_run = true\n");

    let config = ScaffoldConfig::load(Some(&config_path)).unwrap();
    let generator =
        ScaffoldGenerator::with_config(Arc::new(TemplateCatalog::builtin()), &config);
    let out = temp_dir.path().join("out");

    let result = generator
        .generate(
            &PluginSpec::new("my_strategy", PluginCategory::AgentStrategy, "python"),
            &out,
        )
        .unwrap();

    assert!(result.dry_run);
    assert!(!out.exists());
}

#[tokio::test]
async fn test_batch_generation_through_cli() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().to_str().unwrap();
    let cli = Cli::try_parse_from([
        "mlchain-scaffold",
        "new",
        "first_provider",
        "second_provider",
        "--category",
        "tool-provider",
        "--output",
        output,
        "--json",
    ])
    .unwrap();
    let Commands::New(args) = cli.command else {
        panic!("expected new command");
    };
    let command = NewCommand::new(args);
    let generator = Arc::new(ScaffoldGenerator::new(Arc::new(TemplateCatalog::builtin())));

    let reports = command.execute(generator).await.unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&command.render(&reports, &Default::default()).unwrap()).unwrap();

    assert_eq!(json.as_array().unwrap().len(), 2);
    for name in ["first_provider", "second_provider"] {
        let provider = temp_dir.path().join(name).join("provider").join(format!("{name}.py"));
        assert!(provider.exists(), "{}", provider.display());
    }
}
