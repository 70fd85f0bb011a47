//! Templates bundled with the crate
//!
//! Every bundled scaffold shares the project files (manifest, docs, runner
//! entrypoint, assets) and adds the declaration and source stubs for its
//! category.

use crate::{
    catalog::CatalogBuilder,
    models::{PluginCategory, TemplateResource},
};

const PYTHON: &str = "python";

mod python {
    pub const MANIFEST_TOOL: &str = include_str!("../../templates/python/manifest_tool.yaml");
    pub const MANIFEST_MODEL: &str = include_str!("../../templates/python/manifest_model.yaml");
    pub const MANIFEST_AGENT_STRATEGY: &str =
        include_str!("../../templates/python/manifest_agent_strategy.yaml");
    pub const README: &str = include_str!("../../templates/python/README.md");
    pub const GUIDE: &str = include_str!("../../templates/python/GUIDE.md");
    pub const ENV_EXAMPLE: &str = include_str!("../../templates/python/env.example");
    pub const ICON: &str = include_str!("../../templates/python/icon.svg");
    pub const MAIN: &str = include_str!("../../templates/python/main.py");
    pub const REQUIREMENTS: &str = include_str!("../../templates/python/requirements.txt");
    pub const TOOL_PROVIDER_YAML: &str = include_str!("../../templates/python/tool_provider.yaml");
    pub const TOOL_PROVIDER_STANDALONE_YAML: &str =
        include_str!("../../templates/python/tool_provider_standalone.yaml");
    pub const TOOL_PROVIDER_PY: &str = include_str!("../../templates/python/tool_provider.py");
    pub const TOOL_YAML: &str = include_str!("../../templates/python/tool.yaml");
    pub const TOOL_PY: &str = include_str!("../../templates/python/tool.py");
    pub const MODEL_PROVIDER_YAML: &str = include_str!("../../templates/python/model_provider.yaml");
    pub const MODEL_PROVIDER_PY: &str = include_str!("../../templates/python/model_provider.py");
    pub const AGENT_STRATEGY_PROVIDER_YAML: &str =
        include_str!("../../templates/python/agent_strategy_provider.yaml");
    pub const AGENT_STRATEGY_YAML: &str = include_str!("../../templates/python/agent_strategy.yaml");
    pub const AGENT_STRATEGY_PY: &str = include_str!("../../templates/python/agent_strategy.py");
}

/// Register every bundled entry
pub fn register(builder: CatalogBuilder) -> CatalogBuilder {
    PluginCategory::ALL
        .into_iter()
        .fold(builder, |builder, category| {
            builder.register(category, PYTHON, python_resources(category))
        })
}

fn python_project(manifest: &str) -> Vec<TemplateResource> {
    vec![
        TemplateResource::new("manifest.yaml", manifest),
        TemplateResource::new("README.md", python::README),
        TemplateResource::new("GUIDE.md", python::GUIDE),
        TemplateResource::new(".env.example", python::ENV_EXAMPLE),
        TemplateResource::new("_assets/icon.svg", python::ICON),
        TemplateResource::new("main.py", python::MAIN),
        TemplateResource::new("requirements.txt", python::REQUIREMENTS),
    ]
}

fn python_resources(category: PluginCategory) -> Vec<TemplateResource> {
    const PROVIDER_YAML: &str = "provider/{{ name | SnakeCase }}.yaml";
    const PROVIDER_PY: &str = "provider/{{ name | SnakeCase }}.py";

    match category {
        PluginCategory::Tool => {
            let mut resources = python_project(python::MANIFEST_TOOL);
            resources.extend([
                TemplateResource::new(PROVIDER_YAML, python::TOOL_PROVIDER_YAML),
                TemplateResource::new(PROVIDER_PY, python::TOOL_PROVIDER_PY),
                TemplateResource::new("tools/{{ name | SnakeCase }}.yaml", python::TOOL_YAML),
                TemplateResource::new("tools/{{ name | SnakeCase }}.py", python::TOOL_PY),
            ]);
            resources
        }
        PluginCategory::ToolProvider => {
            let mut resources = python_project(python::MANIFEST_TOOL);
            resources.extend([
                TemplateResource::new(PROVIDER_YAML, python::TOOL_PROVIDER_STANDALONE_YAML),
                TemplateResource::new(PROVIDER_PY, python::TOOL_PROVIDER_PY),
            ]);
            resources
        }
        PluginCategory::ModelProvider => {
            let mut resources = python_project(python::MANIFEST_MODEL);
            resources.extend([
                TemplateResource::new(PROVIDER_YAML, python::MODEL_PROVIDER_YAML),
                TemplateResource::new(PROVIDER_PY, python::MODEL_PROVIDER_PY),
            ]);
            resources
        }
        PluginCategory::AgentStrategy => {
            let mut resources = python_project(python::MANIFEST_AGENT_STRATEGY);
            resources.extend([
                TemplateResource::new(PROVIDER_YAML, python::AGENT_STRATEGY_PROVIDER_YAML),
                TemplateResource::new(
                    "strategies/{{ name | SnakeCase }}.yaml",
                    python::AGENT_STRATEGY_YAML,
                ),
                TemplateResource::new("strategies/{{ name | SnakeCase }}.py", python::AGENT_STRATEGY_PY),
            ]);
            resources
        }
    }
}
