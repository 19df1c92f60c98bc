use crate::harness::TestContext;
use crate::harness::fixtures::{SCENARIO_APPS, three_app_scenario};
use std::fs;
use std::path::{Path, PathBuf};
use yamllint_rs::{FileProcessor, ProcessingOptions, Severity};

fn collect_yaml_files(root: &Path, files: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(root).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_yaml_files(&path, files);
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("yml") {
            files.push(path);
        }
    }
}

fn assert_lints_clean(args: &[&str]) {
    let ctx = TestContext::new();
    three_app_scenario(&ctx);
    ctx.generate(args).assert().success();

    let mut files = Vec::new();
    collect_yaml_files(ctx.work_dir(), &mut files);
    assert!(!files.is_empty(), "no YAML generated for {:?}", args);

    let mut config = yamllint_rs::config::Config::new();
    config.set_rule_enabled("line-length", false);
    config.set_rule_enabled("indentation", false);
    config.set_rule_enabled("document-start", false);
    config.set_rule_enabled("truthy", false);
    config.set_rule_enabled("comments", false);

    let processor = FileProcessor::with_config(ProcessingOptions::default(), config);

    let mut errors = Vec::new();
    for file in files {
        match processor.process_file(&file) {
            Ok(result) => {
                for (issue, line) in result.issues.iter() {
                    if issue.severity == Severity::Error {
                        errors.push(format!(
                            "\n  {}: L{}: {} - {}",
                            file.display(),
                            issue.line,
                            issue.message,
                            line
                        ));
                    }
                }
            }
            Err(e) => errors.push(format!("\n  {}: failed to lint - {}", file.display(), e)),
        }
    }

    assert!(errors.is_empty(), "YAML lint errors for {:?}:{}", args, errors.join(""));
}

#[test]
fn default_manifests_lint_clean() {
    assert_lints_clean(&["--skip-checks", "--apps", SCENARIO_APPS]);
}

#[test]
fn ingress_istio_and_monitoring_manifests_lint_clean() {
    assert_lints_clean(&[
        "--skip-checks",
        "--apps",
        SCENARIO_APPS,
        "--istio",
        "--istio-route",
        "--ingress-domain",
        "example.com",
        "--monitoring",
        "prometheus",
        "--service-discovery",
        "consul",
    ]);
}

#[test]
fn ingress_manifests_lint_clean() {
    assert_lints_clean(&[
        "--skip-checks",
        "--apps",
        SCENARIO_APPS,
        "--service-type",
        "Ingress",
        "--ingress-domain",
        "example.com",
    ]);
}

#[test]
fn clustered_database_parses_as_headless_service_and_statefulset() {
    let ctx = TestContext::new();
    three_app_scenario(&ctx);
    ctx.generate(&["--skip-checks", "--apps", SCENARIO_APPS]).assert().success();

    let content = ctx.read_output("store-k8s/store-mongodb.yml");
    let documents: Vec<serde_yaml::Value> = serde_yaml::Deserializer::from_str(&content)
        .map(|document| serde::Deserialize::deserialize(document).unwrap())
        .collect();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["kind"].as_str(), Some("Service"));
    assert_eq!(documents[0]["spec"]["clusterIP"].as_str(), Some("None"));
    assert_eq!(documents[1]["kind"].as_str(), Some("StatefulSet"));
    assert_eq!(documents[1]["spec"]["replicas"].as_u64(), Some(3));
}
