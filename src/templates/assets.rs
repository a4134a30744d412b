//! Template sources compiled into the binary.

/// `(identifier, source)` pairs. Identifiers are paths under `templates/`.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        ".agent/rules/ai_behavior_fullstack.md.j2",
        include_str!("../../templates/.agent/rules/ai_behavior_fullstack.md.j2"),
    ),
    (
        ".agent/rules/ai_behavior_fullstack_architect.md.j2",
        include_str!("../../templates/.agent/rules/ai_behavior_fullstack_architect.md.j2"),
    ),
    (
        ".agent/rules/ai_behavior_system.md.j2",
        include_str!("../../templates/.agent/rules/ai_behavior_system.md.j2"),
    ),
    (
        ".agent/rules/ai_behavior_system_architect.md.j2",
        include_str!("../../templates/.agent/rules/ai_behavior_system_architect.md.j2"),
    ),
    (
        ".agent/rules/ai_behavior_web.md.j2",
        include_str!("../../templates/.agent/rules/ai_behavior_web.md.j2"),
    ),
    (
        ".agent/rules/ai_behavior_web_architect.md.j2",
        include_str!("../../templates/.agent/rules/ai_behavior_web_architect.md.j2"),
    ),
    (
        ".aider.conf.yml.j2",
        include_str!("../../templates/.aider.conf.yml.j2"),
    ),
    (
        ".flake8.j2",
        include_str!("../../templates/.flake8.j2"),
    ),
    (
        ".github/workflows/docs.yml.j2",
        include_str!("../../templates/.github/workflows/docs.yml.j2"),
    ),
    (
        ".github/workflows/unittests.yml.j2",
        include_str!("../../templates/.github/workflows/unittests.yml.j2"),
    ),
    (
        ".gitignore.j2",
        include_str!("../../templates/.gitignore.j2"),
    ),
    (
        ".pre-commit-config.yaml.j2",
        include_str!("../../templates/.pre-commit-config.yaml.j2"),
    ),
    (
        "CONTEXT.md.j2",
        include_str!("../../templates/CONTEXT.md.j2"),
    ),
    (
        "Dockerfile.j2",
        include_str!("../../templates/Dockerfile.j2"),
    ),
    (
        "README.md.j2",
        include_str!("../../templates/README.md.j2"),
    ),
    (
        "docker-compose.yml.j2",
        include_str!("../../templates/docker-compose.yml.j2"),
    ),
    (
        "docs/feature_template.md.j2",
        include_str!("../../templates/docs/feature_template.md.j2"),
    ),
    (
        "docs/index.md.j2",
        include_str!("../../templates/docs/index.md.j2"),
    ),
    (
        "mkdocs.yml.j2",
        include_str!("../../templates/mkdocs.yml.j2"),
    ),
    (
        "pyproject.toml.j2",
        include_str!("../../templates/pyproject.toml.j2"),
    ),
    (
        "tests/test_initial.py.j2",
        include_str!("../../templates/tests/test_initial.py.j2"),
    ),
];
