#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `new` command.
//!
//! These tests run the full scaffold pipeline against isolated temporary
//! directories, verifying that:
//! - each profile produces its own layout and dependency lists
//! - fresh mode refuses a non-empty target and writes nothing
//! - update mode keeps existing files and restores missing ones
//! - force mode overwrites existing files
//! - stored settings and flags feed the render context
//! - dry-run leaves the filesystem untouched

mod common;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use common::{IntegrationTestContext, TestContextBuilder};
use forge_cli::cli::NewOpts;
use forge_cli::commands::new::ScaffoldRequest;
use forge_cli::tasks::ReconcileMode;

/// Every file under `root` with its bytes, keyed by relative path.
fn snapshot_tree(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Vec<u8>>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_path_buf();
                out.insert(rel, std::fs::read(&path).unwrap());
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[test]
fn fullstack_fresh_run_creates_layout() {
    let ctx = IntegrationTestContext::new();
    ctx.scaffold(&ctx.request(&[("project_name", "demo")]))
        .unwrap();

    for dir in ["data/raw", "data/processed", "src/models", "notebooks", ".agent/rules"] {
        assert!(ctx.is_dir(dir), "missing directory {dir}");
    }
    assert!(ctx.read("README.md").starts_with("# demo"));
    assert!(ctx.read(".agent/rules/ai_behavior.md").contains("Reference: Nebulus"));
    assert_eq!(ctx.read("requirements.txt"), "numpy\npandas\nscikit-learn");
    assert_eq!(ctx.read("src/__init__.py"), "");
    assert_eq!(ctx.read("docs/features/stub.txt"), "");
}

#[test]
fn web_profile_uses_backend_layout() {
    let ctx = IntegrationTestContext::new();
    ctx.scaffold(&ctx.request(&[("project_name", "site"), ("profile", "web")]))
        .unwrap();

    assert!(ctx.is_dir("src/backend/app/models"));
    assert!(ctx.is_dir("src/frontend/static/css"));
    assert!(!ctx.exists("src/models"));
    assert!(!ctx.exists("notebooks"));
    assert_eq!(ctx.read("requirements.txt"), "fastapi\nuvicorn\njinja2");
    assert!(ctx.read("requirements-dev.txt").contains("httpx"));
    assert!(ctx.read("src/frontend/templates/index.html").starts_with("<!DOCTYPE html>"));
    assert_eq!(ctx.read("src/backend/app/__init__.py"), "");
}

#[test]
fn system_profile_has_no_dependency_lists() {
    let ctx = IntegrationTestContext::new();
    ctx.scaffold(&ctx.request(&[("profile", "system")])).unwrap();

    assert!(ctx.is_dir("ansible/roles/common"));
    assert_eq!(ctx.read("ansible/site.yml"), "");
    assert!(ctx.exists("scripts/bootstrap.sh"));
    assert!(!ctx.exists("requirements.txt"));
    assert!(!ctx.exists("pyproject.toml"));
}

#[test]
fn unknown_profile_falls_back_to_default() {
    let ctx = IntegrationTestContext::new();
    ctx.scaffold(&ctx.request(&[("profile", "mobile")])).unwrap();

    assert!(ctx.is_dir("notebooks"));
    assert!(ctx.is_dir("src/models"));
    assert!(ctx.read(".agent/rules/ai_behavior.md").contains("Reference: Nebulus"));
}

// ---------------------------------------------------------------------------
// Reconcile modes
// ---------------------------------------------------------------------------

#[test]
fn fresh_run_rejects_non_empty_target() {
    let ctx = TestContextBuilder::new()
        .with_project_file("notes.txt", "keep me")
        .build();

    let err = ctx.scaffold(&ctx.request(&[])).unwrap_err();
    assert!(err.to_string().contains("not empty"), "{err}");
    assert!(err.to_string().contains("notes.txt"), "{err}");
    assert!(!ctx.exists("README.md"));
    assert!(!ctx.exists(".gitignore"));
    assert_eq!(ctx.read("notes.txt"), "keep me");
}

#[test]
fn fresh_run_ignores_existing_git_directory() {
    let ctx = IntegrationTestContext::new();
    std::fs::create_dir_all(ctx.path(".git")).unwrap();

    ctx.scaffold(&ctx.request(&[])).unwrap();
    assert!(ctx.exists("README.md"));
}

#[test]
fn update_keeps_existing_and_restores_missing() {
    let ctx = IntegrationTestContext::new();
    ctx.scaffold(&ctx.request(&[("project_name", "demo")]))
        .unwrap();

    common::write_file(&ctx.target(), "README.md", "# CUSTOM\n");
    std::fs::remove_file(ctx.path("Dockerfile")).unwrap();
    std::fs::remove_dir_all(ctx.path("notebooks")).unwrap();

    let mut request = ctx.request(&[("project_name", "demo")]);
    request.mode = ReconcileMode::Update;
    ctx.scaffold(&request).unwrap();

    assert_eq!(ctx.read("README.md"), "# CUSTOM\n");
    assert!(ctx.read("Dockerfile").starts_with("FROM python:3.11-slim"));
    assert!(ctx.is_dir("notebooks"));
}

#[test]
fn force_without_update_keeps_fresh_gate() {
    let ctx = TestContextBuilder::new()
        .with_project_file("README.md", "# MY OWN PROJECT\n")
        .build();

    let opts = NewOpts {
        target: Some(ctx.target()),
        force: true,
        no_git: true,
        no_venv: true,
        ..NewOpts::default()
    };
    let request = ScaffoldRequest::from_opts(&opts).unwrap();
    let err = ctx.scaffold(&request).unwrap_err();

    assert!(err.to_string().contains("not empty"), "{err}");
    assert_eq!(ctx.read("README.md"), "# MY OWN PROJECT\n");
}

#[test]
fn update_twice_is_idempotent() {
    let ctx = IntegrationTestContext::new();
    let mut request = ctx.request(&[("project_name", "demo")]);
    request.mode = ReconcileMode::Update;

    ctx.scaffold(&request).unwrap();
    common::write_file(&ctx.target(), "README.md", "# CUSTOM\n");
    let first = snapshot_tree(&ctx.target());

    ctx.scaffold(&request).unwrap();
    assert_eq!(snapshot_tree(&ctx.target()), first);
}

#[cfg(unix)]
#[test]
fn force_never_writes_through_symlinks() {
    let ctx = IntegrationTestContext::new();
    ctx.scaffold(&ctx.request(&[])).unwrap();

    let outside = ctx.root.path().join("outside.txt");
    std::fs::write(&outside, "SECRET").unwrap();
    std::fs::remove_file(ctx.path("README.md")).unwrap();
    std::os::unix::fs::symlink(&outside, ctx.path("README.md")).unwrap();

    let mut request = ctx.request(&[]);
    request.mode = ReconcileMode::Force;
    ctx.scaffold(&request).unwrap();

    assert_eq!(std::fs::read_to_string(&outside).unwrap(), "SECRET");
    assert!(std::fs::symlink_metadata(ctx.path("README.md"))
        .unwrap()
        .file_type()
        .is_symlink());
}

#[test]
fn force_overwrites_existing_files() {
    let ctx = TestContextBuilder::new()
        .with_project_file("README.md", "# CUSTOM\n")
        .with_project_file("extra.txt", "untouched")
        .build();

    let mut request = ctx.request(&[("project_name", "demo")]);
    request.mode = ReconcileMode::Force;
    ctx.scaffold(&request).unwrap();

    assert!(ctx.read("README.md").starts_with("# demo"));
    assert_eq!(ctx.read("extra.txt"), "untouched");
}

#[test]
fn ignore_rules_are_rewritten_in_update_mode() {
    let ctx = TestContextBuilder::new()
        .with_project_file(".gitignore", "custom\n")
        .build();

    let mut request = ctx.request(&[]);
    request.mode = ReconcileMode::Update;
    ctx.scaffold(&request).unwrap();

    let rules = ctx.read(".gitignore");
    assert!(rules.contains(".venv/"), "{rules}");
    assert!(!rules.starts_with("custom"));
}

#[test]
fn dry_run_creates_nothing() {
    let ctx = IntegrationTestContext::new();
    let mut request = ctx.request(&[]);
    request.dry_run = true;
    request.collaborators.init_repository = true;

    ctx.scaffold(&request).unwrap();
    assert!(!ctx.target().exists());
}

// ---------------------------------------------------------------------------
// Render context
// ---------------------------------------------------------------------------

#[test]
fn non_pip_manager_drops_dependency_lists() {
    let ctx = IntegrationTestContext::new();
    ctx.scaffold(&ctx.request(&[("package_manager", "poetry")]))
        .unwrap();

    assert!(!ctx.exists("requirements.txt"));
    assert!(!ctx.exists("requirements-dev.txt"));
    assert!(ctx.read("pyproject.toml").contains("poetry-core"));
}

#[test]
fn architect_persona_uses_strict_rules() {
    let ctx = IntegrationTestContext::new();
    ctx.scaffold(&ctx.request(&[("persona", "architect")]))
        .unwrap();

    assert!(ctx.read(".agent/rules/ai_behavior.md").contains("## Strict Compliance"));
}

#[test]
fn unknown_persona_fails_only_behavior_rules() {
    let ctx = IntegrationTestContext::new();
    let err = ctx
        .scaffold(&ctx.request(&[("persona", "pirate")]))
        .unwrap_err();

    assert!(err.to_string().contains("task(s) failed"), "{err}");
    assert!(!ctx.exists(".agent/rules/ai_behavior.md"));
    assert!(ctx.exists("README.md"));
    assert!(ctx.exists(".gitignore"));
}

#[test]
fn stored_settings_supply_defaults() {
    let ctx = TestContextBuilder::new()
        .with_settings("author_name = \"Ada\"\nlicense = \"Apache-2.0\"\n")
        .build();
    ctx.scaffold(&ctx.request(&[("project_name", "demo")]))
        .unwrap();

    let pyproject = ctx.read("pyproject.toml");
    assert!(pyproject.contains("name = \"Ada\""), "{pyproject}");
    assert!(pyproject.contains("text = \"Apache-2.0\""), "{pyproject}");
}

#[test]
fn flags_override_stored_settings() {
    let ctx = TestContextBuilder::new()
        .with_settings("author_name = \"Ada\"\n")
        .build();
    ctx.scaffold(&ctx.request(&[("author_name", "Grace"), ("python_version", "3.12")]))
        .unwrap();

    let pyproject = ctx.read("pyproject.toml");
    assert!(pyproject.contains("name = \"Grace\""), "{pyproject}");
    assert!(pyproject.contains(">=3.12"), "{pyproject}");
}

#[test]
fn malformed_settings_are_ignored() {
    let ctx = TestContextBuilder::new()
        .with_settings("author_name = [unterminated")
        .build();
    ctx.scaffold(&ctx.request(&[])).unwrap();

    assert!(ctx.read("pyproject.toml").contains("name = \"User\""));
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

#[test]
fn git_repository_ends_on_develop() {
    let ctx = IntegrationTestContext::new();
    let mut request = ctx.request(&[]);
    request.collaborators.init_repository = true;
    ctx.scaffold(&request).unwrap();

    let repo = git2::Repository::open(ctx.target()).unwrap();
    assert_eq!(repo.head().unwrap().shorthand(), Some("develop"));
    assert!(repo.find_branch("main", git2::BranchType::Local).is_ok());

    let head = repo.head().unwrap().peel_to_commit().unwrap();
    let tree = head.tree().unwrap();
    assert!(tree.get_path(std::path::Path::new("README.md")).is_ok());
    assert!(tree.get_path(std::path::Path::new(".gitignore")).is_ok());
}

#[test]
fn existing_repository_is_left_alone() {
    let ctx = IntegrationTestContext::new();
    let mut request = ctx.request(&[]);
    request.collaborators.init_repository = true;
    ctx.scaffold(&request).unwrap();

    request.mode = ReconcileMode::Update;
    ctx.scaffold(&request).unwrap();

    let repo = git2::Repository::open(ctx.target()).unwrap();
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.parent_count(), 0);
}
