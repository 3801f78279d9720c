//! Integration tests for the render command flow over a real template directory.

use std::fs;

use tmpl_cli::{build_engine, parse_context, render, TemplatingConfig};

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("page.txt"),
        "{{ title }} at {{ request.path }}",
    )
    .unwrap();
    dir
}

#[tokio::test]
async fn test_render_uses_request_processor_and_local_context() {
    let dir = site();
    let engine = build_engine(TemplatingConfig {
        template_dir: format!("{}/**/*", dir.path().display()),
        ..TemplatingConfig::default()
    })
    .unwrap();

    let context = parse_context(Some(r#"{"title": "Docs"}"#)).unwrap();
    let response = render(&engine, "page.txt", "/docs", context, 200)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "Docs at /docs");
}

#[tokio::test]
async fn test_render_unknown_template_fails() {
    let dir = site();
    let engine = build_engine(TemplatingConfig {
        template_dir: format!("{}/**/*", dir.path().display()),
        ..TemplatingConfig::default()
    })
    .unwrap();

    let err = render(&engine, "missing.txt", "/", Default::default(), 200)
        .await
        .unwrap_err();
    assert!(format!("{:#}", err).contains("Template 'missing.txt' not found"));
}
