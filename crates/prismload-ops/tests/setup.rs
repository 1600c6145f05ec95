use std::path::{Path, PathBuf};

use prismload_ops::ops_setup::{OpsContext, SetupOptions};
use prismload_ops::ops_tree::{render, TreeOptions};
use tempfile::TempDir;

const COMPONENTS: &str = r#"{"languages": {
    "cpp": {"title": "C++", "require": "c"},
    "c": {"title": "C", "require": "clike"},
    "clike": {"title": "C-like"}
}}"#;

/// Setup pinned to `dir` through an explicit config path.
fn pinned_setup(dir: &Path) -> OpsContext {
    let opts = SetupOptions {
        config: Some(dir.join("prismload.toml")),
        catalog: None,
    };
    OpsContext::setup(dir, &opts).unwrap()
}

#[test]
fn test_setup_discovers_config_and_catalog() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir_all(tmp.path().join("vendor")).unwrap();
    std::fs::write(tmp.path().join("vendor/components.json"), COMPONENTS).unwrap();
    std::fs::write(
        tmp.path().join("prismload.toml"),
        "[catalog]\npath = \"vendor/components.json\"\n",
    )
    .unwrap();
    let nested = tmp.path().join("templates");
    std::fs::create_dir_all(&nested).unwrap();

    let ctx = OpsContext::setup(&nested, &SetupOptions::default()).unwrap();
    assert_eq!(
        ctx.catalog_source(),
        Some(tmp.path().join("vendor/components.json").as_path())
    );
    assert!(ctx.catalog().contains("cpp"));
}

#[test]
fn test_setup_catalog_flag_wins() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("other.json"), COMPONENTS).unwrap();
    let opts = SetupOptions {
        config: None,
        catalog: Some(PathBuf::from("other.json")),
    };
    let ctx = OpsContext::setup(tmp.path(), &opts).unwrap();
    assert_eq!(ctx.catalog().len(), 3);
}

#[test]
fn test_setup_explicit_config_resolves_relative_to_it() {
    let tmp = TempDir::new().unwrap();
    let conf_dir = tmp.path().join("conf");
    std::fs::create_dir_all(&conf_dir).unwrap();
    std::fs::write(conf_dir.join("components.json"), COMPONENTS).unwrap();
    std::fs::write(conf_dir.join("site.toml"), "").unwrap();

    let opts = SetupOptions {
        config: Some(PathBuf::from("conf/site.toml")),
        catalog: None,
    };
    let ctx = OpsContext::setup(tmp.path(), &opts).unwrap();
    assert_eq!(
        ctx.catalog_source(),
        Some(conf_dir.join("components.json").as_path())
    );
    assert!(ctx.catalog().contains("clike"));
}

#[test]
fn test_missing_catalog_is_empty_but_strict_fails() {
    let tmp = TempDir::new().unwrap();
    let ctx = pinned_setup(tmp.path());
    assert!(ctx.catalog().is_empty());
    assert!(ctx.catalog_strict().is_err());
}

#[test]
fn test_invalid_config_fails_setup() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("prismload.toml"), "[assets\n").unwrap();
    assert!(OpsContext::setup(tmp.path(), &SetupOptions::default()).is_err());
}

#[test]
fn test_render_tree_from_disk_catalog() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("components.json"), COMPONENTS).unwrap();
    let ctx = pinned_setup(tmp.path());

    let tree = render(&ctx, "cpp", &TreeOptions::default());
    assert_eq!(tree, "cpp\n└── c\n    └── clike\n");

    let inverted = render(
        &ctx,
        "clike",
        &TreeOptions {
            depth: None,
            inverted: true,
        },
    );
    assert!(inverted.contains("c\n"));
    assert!(inverted.contains("cpp"));
}
