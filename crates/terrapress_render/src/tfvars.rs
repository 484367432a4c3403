//! Direct emission of `terraform.tfvars`.
//!
//! This document is not fragment-driven: it is a fixed schema written
//! field by field from the configuration set. String and boolean
//! fields are quoted, integer and list fields are emitted bare, and
//! the high-availability profile gets one extra block.

use terrapress_catalog::{DeploymentProfile, HIGH_AVAILABILITY};
use terrapress_config::ConfigSet;

/// Column the `=` sign is aligned to.
const NAME_WIDTH: usize = 24;

pub(crate) fn emit(
    profile: &DeploymentProfile,
    values: &ConfigSet,
    title: &str,
    stamp: &str,
) -> String {
    let mut out = format!("# Terraform variable values for WordPress - {} Setup\n", title);
    out.push_str(&format!("# Generated on: {}\n", stamp));
    out.push_str("# These values are generated from your .env file\n\n");

    out.push_str("# AWS Configuration\n");
    push_quoted(&mut out, values, "aws_region");
    push_quoted_if_set(&mut out, values, "aws_access_key_id");
    push_quoted_if_set(&mut out, values, "aws_secret_access_key");

    out.push_str("\n# Project Configuration\n");
    push_quoted(&mut out, values, "project_name");
    push_quoted(&mut out, values, "environment");

    out.push_str("\n# Network Configuration\n");
    push_quoted(&mut out, values, "vpc_cidr");
    push_quoted(&mut out, values, "subnet_cidr");
    push_bare(&mut out, values, "allowed_ssh_ips");
    push_bare(&mut out, values, "allowed_http_ips");

    out.push_str("\n# EC2 Configuration\n");
    push_quoted(&mut out, values, "instance_type");
    push_quoted(&mut out, values, "instance_ami");
    push_bare(&mut out, values, "instance_volume_size");
    push_quoted_if_set(&mut out, values, "key_name");

    out.push_str("\n# WordPress Configuration\n");
    push_quoted(&mut out, values, "wordpress_domain");
    push_quoted(&mut out, values, "wordpress_db_name");
    push_quoted(&mut out, values, "wordpress_db_user");
    push_quoted(&mut out, values, "wordpress_db_password");
    push_quoted(&mut out, values, "wordpress_site_title");
    push_quoted(&mut out, values, "wordpress_admin_user");
    push_quoted(&mut out, values, "wordpress_admin_password");
    push_quoted(&mut out, values, "wordpress_admin_email");

    if profile.name == HIGH_AVAILABILITY {
        out.push_str("\n# High Availability Configuration\n");
        push_quoted(&mut out, values, "use_rds");
        push_quoted(&mut out, values, "rds_instance_class");
        push_bare(&mut out, values, "rds_storage_size");
        push_quoted(&mut out, values, "rds_multi_az");
        push_quoted(&mut out, values, "enable_auto_scaling");
        push_bare(&mut out, values, "min_instances");
        push_bare(&mut out, values, "max_instances");
        push_bare(&mut out, values, "scale_up_cpu_threshold");
        push_bare(&mut out, values, "scale_down_cpu_threshold");
    }

    out
}

fn push_quoted(out: &mut String, values: &ConfigSet, key: &str) {
    out.push_str(&format!(
        "{:<width$} = \"{}\"\n",
        key,
        values.render(key),
        width = NAME_WIDTH
    ));
}

/// Emit the line only when the value is present and non-empty. Used for
/// optional credentials and the SSH key name.
fn push_quoted_if_set(out: &mut String, values: &ConfigSet, key: &str) {
    if values.is_set(key) {
        push_quoted(out, values, key);
    }
}

fn push_bare(out: &mut String, values: &ConfigSet, key: &str) {
    out.push_str(&format!(
        "{:<width$} = {}\n",
        key,
        values.render(key),
        width = NAME_WIDTH
    ));
}
