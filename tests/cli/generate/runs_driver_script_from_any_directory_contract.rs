use crate::harness::TestContext;
use crate::harness::fixtures::{SCENARIO_APPS, three_app_scenario};
use assert_cmd::Command;
use std::fs;

#[cfg(unix)]
#[test]
fn driver_script_resolves_paths_relative_to_itself() {
    use std::os::unix::fs::PermissionsExt;

    let ctx = TestContext::new();
    three_app_scenario(&ctx);
    ctx.generate(&["--skip-checks", "--apps", SCENARIO_APPS]).assert().success();

    // Stand-in kubectl: fails unless the `-f` target exists relative to the cwd.
    let bin = ctx.apps_root().join("bin");
    fs::create_dir_all(&bin).unwrap();
    let kubectl = bin.join("kubectl");
    fs::write(&kubectl, "#!/bin/sh\n[ -e \"$3\" ] || { echo \"missing $3\" >&2; exit 1; }\n").unwrap();
    fs::set_permissions(&kubectl, fs::Permissions::from_mode(0o755)).unwrap();

    let path = format!("{}:{}", bin.display(), std::env::var("PATH").unwrap_or_default());
    Command::new("bash")
        .arg(ctx.output_path("kubectl-apply.sh"))
        .current_dir(ctx.apps_root())
        .env("PATH", path)
        .assert()
        .success();
}
