//! Integration tests for full document assembly over the built-in
//! catalogs.

use regex::Regex;
use terrapress_config::ConfigSet;
use terrapress_render::{DocumentAssembler, MAIN_TF, TFVARS, VARIABLES_TF};

fn resolved_config() -> ConfigSet {
    let mut config = ConfigSet::defaults();
    config.insert("project_name", "acme".into());
    config.apply_derivations();
    config
}

#[test]
fn test_builtin_profiles_assemble_without_warnings() {
    let assembler = DocumentAssembler::new();
    let config = resolved_config();

    for profile in ["cost-efficient", "high-availability"] {
        let deployment = assembler.assemble(profile, &config).unwrap();
        assert!(
            deployment.warnings.is_empty(),
            "profile '{}' produced warnings: {:?}",
            profile,
            deployment.warnings
        );
        assert_eq!(deployment.documents.len(), 3);
    }
}

#[test]
fn test_no_resolvable_placeholder_survives() {
    // Every `{key}` token whose key exists in the configuration set
    // must be gone from all three documents.
    let assembler = DocumentAssembler::new();
    let config = resolved_config();
    let pattern = Regex::new(r"\{([a-z][a-z0-9_]*)\}").unwrap();

    for profile in ["cost-efficient", "high-availability"] {
        let deployment = assembler.assemble(profile, &config).unwrap();
        for (name, content) in deployment.documents.iter() {
            for caps in pattern.captures_iter(content) {
                assert!(
                    config.get(&caps[1]).is_none(),
                    "unsubstituted placeholder '{}' in {} for profile '{}'",
                    &caps[0],
                    name,
                    profile
                );
            }
        }
    }
}

#[test]
fn test_variables_document_reflects_config() {
    let assembler = DocumentAssembler::new();
    let deployment = assembler
        .assemble("cost-efficient", &resolved_config())
        .unwrap();

    let variables_tf = deployment.documents.get(VARIABLES_TF).unwrap();
    assert!(variables_tf.contains(r#"default     = "us-east-1""#));
    assert!(variables_tf.contains(r#"default     = "acme.example.com""#));
    assert!(variables_tf.contains(r#"default     = ["0.0.0.0/0"]"#));
    assert!(variables_tf.contains("default     = 20"));
    // No outputs step for the variables document.
    assert!(!variables_tf.contains("# Outputs"));
    assert!(!variables_tf.contains("output \""));
}

#[test]
fn test_component_order_matches_profile() {
    let assembler = DocumentAssembler::new();
    let deployment = assembler
        .assemble("cost-efficient", &resolved_config())
        .unwrap();

    let main_tf = deployment.documents.get(MAIN_TF).unwrap();
    let provider = main_tf.find(r#"provider "aws""#).unwrap();
    let vpc = main_tf.find(r#"resource "aws_vpc""#).unwrap();
    let instance = main_tf.find(r#"resource "aws_instance""#).unwrap();
    let lb = main_tf.find(r#"resource "aws_lb" "#).unwrap();
    assert!(provider < vpc && vpc < instance && instance < lb);
}

#[test]
fn test_high_availability_specific_content() {
    let assembler = DocumentAssembler::new();
    let config = resolved_config();

    let ha = assembler.assemble("high-availability", &config).unwrap();
    let main_tf = ha.documents.get(MAIN_TF).unwrap();
    assert!(main_tf.contains(r#"resource "aws_db_instance""#));
    assert!(main_tf.contains(r#"resource "aws_autoscaling_group""#));
    assert!(!main_tf.contains(r#"resource "aws_instance" "wordpress""#));

    let tfvars = ha.documents.get(TFVARS).unwrap();
    assert!(tfvars.contains("# High Availability Configuration"));

    let cost = assembler.assemble("cost-efficient", &config).unwrap();
    let cost_tfvars = cost.documents.get(TFVARS).unwrap();
    assert!(!cost_tfvars.contains("# High Availability Configuration"));
}
