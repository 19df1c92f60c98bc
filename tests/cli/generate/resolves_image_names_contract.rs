use crate::harness::TestContext;
use crate::harness::fixtures::{SCENARIO_APPS, three_app_scenario};
use predicates::prelude::*;

#[test]
fn repository_prefix_produces_tag_and_push_commands() {
    let ctx = TestContext::new();
    three_app_scenario(&ctx);

    ctx.generate(&["--skip-checks", "--apps", SCENARIO_APPS, "--repository", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docker image tag gateway acme/gateway"))
        .stdout(predicate::str::contains("docker push acme/gateway"));

    assert!(ctx.read_output("gateway-k8s/gateway-deployment.yml").contains("image: acme/gateway"));
}

#[test]
fn image_tag_and_push_command_are_applied() {
    let ctx = TestContext::new();
    three_app_scenario(&ctx);

    ctx.generate(&[
        "--skip-checks",
        "--apps",
        SCENARIO_APPS,
        "--repository",
        "registry.example.com:5000/acme",
        "--image-tag",
        "1.0.0",
        "--push-command",
        "podman push",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("podman push registry.example.com:5000/acme/cart:1.0.0"));
}

#[test]
fn invalid_repository_name_is_rejected() {
    let ctx = TestContext::new();
    three_app_scenario(&ctx);

    ctx.generate(&["--skip-checks", "--apps", SCENARIO_APPS, "--repository", "Acme Corp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid repository name 'Acme Corp'"));
    assert!(!ctx.config_path().exists());
}
