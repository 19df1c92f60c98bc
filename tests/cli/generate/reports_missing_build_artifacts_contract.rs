use crate::harness::TestContext;
use crate::harness::fixtures::{CART, GATEWAY};
use predicates::prelude::*;

#[test]
fn generate_succeeds_with_remediation_when_jib_cache_is_missing() {
    let ctx = TestContext::new();
    ctx.write_app("gateway", GATEWAY);
    ctx.write_app("cart", CART);
    ctx.write_jib_cache("cart");

    ctx.generate(&["--apps", "gateway,cart", "--kubectl-timeout", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no Jib cache found"))
        .stdout(predicate::str::contains("./mvnw -ntp -Pprod verify jib:dockerBuild in ../gateway"))
        .stdout(predicate::str::contains("in ../cart").not())
        .stdout(predicate::str::contains("successfully generated").not());

    assert!(ctx.output_path("kubectl-apply.sh").exists());
}
