//! Integration tests for scaffold generation against the bundled catalog

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    thread,
};

use mlchain_scaffold::{
    FailureKind, PluginCategory, PluginSpec, ScaffoldError, ScaffoldGenerator, SkipReason,
    TemplateCatalog, TemplateResource,
};
use tempfile::TempDir;

fn builtin_generator() -> ScaffoldGenerator {
    ScaffoldGenerator::new(Arc::new(TemplateCatalog::builtin()))
}

fn yaml_files(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            found.extend(yaml_files(&path));
        } else if path.extension().is_some_and(|ext| ext == "yaml") {
            found.push(path);
        }
    }
    found
}

fn count_files(dir: &Path) -> usize {
    if !dir.exists() {
        return 0;
    }
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            if path.is_dir() {
                count_files(&path)
            } else {
                1
            }
        })
        .sum()
}

#[test]
fn test_every_bundled_category_renders_cleanly() {
    let generator = builtin_generator();

    for category in PluginCategory::ALL {
        let temp_dir = TempDir::new().unwrap();
        let spec = PluginSpec::new("my_plugin", category, "python");

        let result = generator.generate(&spec, temp_dir.path()).unwrap();

        assert!(result.is_complete(), "{category}: {:?}", result.failed);
        assert_eq!(result.written_files.len(), count_files(temp_dir.path()));
        assert!(result.written_files.contains(&PathBuf::from("manifest.yaml")));
        assert!(result.written_files.contains(&PathBuf::from("_assets/icon.svg")));
    }
}

#[test]
fn test_tool_scaffold_content() {
    let temp_dir = TempDir::new().unwrap();
    let spec = PluginSpec::new("my_plugin", PluginCategory::Tool, "python")
        .with_author("acme")
        .with_description("Does things");

    builtin_generator().generate(&spec, temp_dir.path()).unwrap();

    let tool = fs::read_to_string(temp_dir.path().join("tools/my_plugin.py")).unwrap();
    assert!(tool.contains("class MyPluginTool(Tool):"));

    let provider = fs::read_to_string(temp_dir.path().join("provider/my_plugin.py")).unwrap();
    assert!(provider.contains("class MyPluginProvider(ToolProvider):"));

    let manifest = fs::read_to_string(temp_dir.path().join("manifest.yaml")).unwrap();
    assert!(manifest.contains("author: \"acme\""));
    assert!(manifest.contains("en_US: \"Does things\""));
    assert!(manifest.contains("memory: 268435456"));
    assert!(manifest.contains("- provider/my_plugin.yaml"));
    assert!(!manifest.contains("{{"));
}

#[test]
fn test_generated_yaml_parses_with_punctuated_values() {
    let description = "Weather: current conditions # live";
    let author = "acme: labs";

    for category in PluginCategory::ALL {
        let temp_dir = TempDir::new().unwrap();
        let spec = PluginSpec::new("my_x_plugin", category, "python")
            .with_author(author)
            .with_description(description);

        let result = builtin_generator().generate(&spec, temp_dir.path()).unwrap();
        assert!(result.is_complete(), "{category}: {:?}", result.failed);

        let files = yaml_files(temp_dir.path());
        assert!(files.len() >= 2, "{category}: {files:?}");
        for path in files {
            let text = fs::read_to_string(&path).unwrap();
            let parsed: Result<serde_yaml::Value, _> = serde_yaml::from_str(&text);
            assert!(parsed.is_ok(), "{}: {:?}\n{text}", path.display(), parsed.err());
        }

        let manifest: serde_yaml::Value =
            serde_yaml::from_str(&fs::read_to_string(temp_dir.path().join("manifest.yaml")).unwrap())
                .unwrap();
        assert_eq!(manifest["author"].as_str(), Some(author));
        assert_eq!(manifest["name"].as_str(), Some("my_x_plugin"));
        assert_eq!(manifest["description"]["en_US"].as_str(), Some(description));
    }
}

#[test]
fn test_pascal_case_name_gets_snake_case_paths() {
    let temp_dir = TempDir::new().unwrap();
    let spec = PluginSpec::new("WeatherLookup", PluginCategory::AgentStrategy, "python");

    let result = builtin_generator().generate(&spec, temp_dir.path()).unwrap();

    assert!(result
        .written_files
        .contains(&PathBuf::from("strategies/weather_lookup.py")));
    let strategy =
        fs::read_to_string(temp_dir.path().join("strategies/weather_lookup.py")).unwrap();
    assert!(strategy.contains("class WeatherLookupAgentStrategy(AgentStrategy):"));
}

#[test]
fn test_second_run_skips_everything() {
    let temp_dir = TempDir::new().unwrap();
    let generator = builtin_generator();
    let spec = PluginSpec::new("my_plugin", PluginCategory::ModelProvider, "python");

    let first = generator.generate(&spec, temp_dir.path()).unwrap();
    let manifest_before = fs::read(temp_dir.path().join("manifest.yaml")).unwrap();
    let second = generator.generate(&spec, temp_dir.path()).unwrap();

    assert!(second.written_files.is_empty());
    assert_eq!(second.skipped.len(), first.written_files.len());
    assert!(second
        .skipped
        .iter()
        .all(|s| s.reason == SkipReason::AlreadyExists));
    assert_eq!(
        fs::read(temp_dir.path().join("manifest.yaml")).unwrap(),
        manifest_before
    );
}

#[test]
fn test_existing_user_file_is_preserved() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("README.md"), "hand written").unwrap();
    let spec = PluginSpec::new("my_plugin", PluginCategory::ToolProvider, "python");

    let result = builtin_generator().generate(&spec, temp_dir.path()).unwrap();

    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].path, PathBuf::from("README.md"));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("README.md")).unwrap(),
        "hand written"
    );
    assert!(temp_dir.path().join("main.py").exists());
}

#[test]
fn test_unsupported_combination_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("out");
    let spec = PluginSpec::new("my_plugin", PluginCategory::Tool, "cobol");

    let err = builtin_generator().generate(&spec, &root).unwrap_err();

    assert!(matches!(err, ScaffoldError::UnsupportedCombination { .. }));
    assert!(!root.exists());
}

#[test]
fn test_language_lookup_is_case_sensitive() {
    let temp_dir = TempDir::new().unwrap();
    let spec = PluginSpec::new("my_plugin", PluginCategory::Tool, "Python");

    let err = builtin_generator().generate(&spec, temp_dir.path()).unwrap_err();
    assert!(matches!(err, ScaffoldError::UnsupportedCombination { .. }));
}

#[test]
fn test_empty_and_whitespace_names_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    // Unsupported language proves validation runs before the catalog lookup
    for name in ["", "   ", "\t\n"] {
        let spec = PluginSpec::new(name, PluginCategory::Tool, "cobol");
        let err = builtin_generator().generate(&spec, temp_dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidIdentifier(_)), "{name:?}");
    }
    assert_eq!(count_files(temp_dir.path()), 0);
}

#[test]
fn test_per_file_failure_does_not_stop_generation() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = TemplateCatalog::builder()
        .register(
            PluginCategory::Tool,
            "python",
            vec![
                TemplateResource::new("first.txt", "{{ name }}"),
                TemplateResource::new("{{ nope }}.txt", "x"),
                TemplateResource::new("/abs.txt", "x"),
                TemplateResource::new("last.txt", "{{ name_kebab }}"),
            ],
        )
        .build();
    let generator = ScaffoldGenerator::new(Arc::new(catalog));

    let result = generator
        .generate(
            &PluginSpec::new("my_plugin", PluginCategory::Tool, "python"),
            temp_dir.path(),
        )
        .unwrap();

    assert_eq!(
        result.written_files,
        vec![PathBuf::from("first.txt"), PathBuf::from("last.txt")]
    );
    let kinds: Vec<FailureKind> = result.failed.iter().map(|f| f.kind).collect();
    assert_eq!(kinds, vec![FailureKind::Render, FailureKind::InvalidPath]);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("last.txt")).unwrap(),
        "my-plugin"
    );
}

#[test]
fn test_concurrent_generation_shares_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let generator = Arc::new(builtin_generator());

    let handles: Vec<_> = ["alpha_tool", "beta_tool", "gamma_tool", "delta_tool"]
        .into_iter()
        .map(|name| {
            let generator = Arc::clone(&generator);
            let root = temp_dir.path().join(name);
            thread::spawn(move || {
                let spec = PluginSpec::new(name, PluginCategory::Tool, "python");
                generator.generate(&spec, &root).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert!(result.is_complete());
    }
    assert!(temp_dir.path().join("gamma_tool/tools/gamma_tool.py").exists());
}

#[test]
fn test_dry_run_reports_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let generator = builtin_generator().dry_run(true);
    let spec = PluginSpec::new("my_plugin", PluginCategory::Tool, "python");

    let result = generator.generate(&spec, temp_dir.path()).unwrap();

    assert!(result.dry_run);
    assert!(!result.written_files.is_empty());
    assert_eq!(count_files(temp_dir.path()), 0);
}
