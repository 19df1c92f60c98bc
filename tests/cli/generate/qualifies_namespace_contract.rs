use crate::harness::TestContext;
use crate::harness::fixtures::{SCENARIO_APPS, three_app_scenario};
use predicates::prelude::*;

#[test]
fn custom_namespace_is_appended_to_inspection_commands() {
    let ctx = TestContext::new();
    three_app_scenario(&ctx);

    ctx.generate(&["--skip-checks", "--apps", SCENARIO_APPS, "--namespace", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kubectl get svc gateway -n prod"));

    let script = ctx.read_output("kubectl-apply.sh");
    assert!(script.contains("kubectl apply -f namespace.yml\n"));
    assert!(script.contains("kubectl apply -f gateway-k8s/ -n prod"));
    assert!(ctx.read_output("namespace.yml").contains("name: prod"));
}

#[test]
fn invalid_namespace_is_rejected() {
    let ctx = TestContext::new();
    three_app_scenario(&ctx);

    ctx.generate(&["--skip-checks", "--apps", SCENARIO_APPS, "--namespace", "Prod_Env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
