use crate::harness::TestContext;
use crate::harness::fixtures::GATEWAY;
use predicates::prelude::*;
use std::fs;

#[test]
fn missing_folder_is_reported() {
    let ctx = TestContext::new();
    ctx.write_app("gateway", GATEWAY);

    ctx.generate(&["--skip-checks", "--apps", "gateway,ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application folder not found"));
}

#[test]
fn folder_without_record_is_reported() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.apps_root().join("docs")).unwrap();

    ctx.generate(&["--skip-checks", "--apps", "docs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    assert!(!ctx.output_path("namespace.yml").exists());
}

#[test]
fn base_names_clashing_after_lowercasing_are_rejected() {
    let ctx = TestContext::new();
    ctx.write_app("store-a", r#"{"baseName": "Store", "applicationType": "microservice"}"#);
    ctx.write_app("store-b", r#"{"baseName": "store", "applicationType": "microservice"}"#);

    ctx.generate(&["--skip-checks", "--apps", "store-a,store-b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("clashes with another application's Kubernetes name"));
    assert!(!ctx.output_path("store-k8s").exists());
    assert!(!ctx.output_path("kubectl-apply.sh").exists());
}

#[test]
fn no_applications_is_reported() {
    let ctx = TestContext::new();

    ctx.generate(&["--skip-checks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No applications selected"));
}

#[test]
fn unknown_service_type_is_a_usage_error() {
    let ctx = TestContext::new();

    ctx.generate(&["--service-type", "Mesh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown service type 'Mesh'"));
}
