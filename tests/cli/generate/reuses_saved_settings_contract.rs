use crate::harness::TestContext;
use crate::harness::fixtures::{SCENARIO_APPS, three_app_scenario};
use predicates::prelude::*;
use std::fs;

#[test]
fn saved_settings_apply_when_flags_are_absent() {
    let ctx = TestContext::new();
    three_app_scenario(&ctx);

    ctx.generate(&["--skip-checks", "--apps", SCENARIO_APPS, "--repository", "acme"])
        .assert()
        .success();

    fs::remove_dir_all(ctx.output_path("gateway-k8s")).unwrap();

    ctx.generate(&["--skip-checks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docker push acme/store"));
    assert!(ctx.output_path("gateway-k8s/gateway-deployment.yml").exists());
}

#[test]
fn unknown_config_keys_survive_a_run() {
    let ctx = TestContext::new();
    three_app_scenario(&ctx);
    fs::create_dir_all(ctx.output_path(".kubegen")).unwrap();
    fs::write(ctx.config_path(), "apps_folders = [\"gateway\"]\nowner = \"platform-team\"\n")
        .unwrap();

    ctx.generate(&["--skip-checks"]).assert().success();

    let saved = fs::read_to_string(ctx.config_path()).unwrap();
    assert!(saved.contains("owner = \"platform-team\""));
}
