//! Built-in output fragments: the result declarations of `main.tf`.

use crate::fragment::{FragmentCatalog, FragmentKind};

pub(crate) fn register(catalog: &mut FragmentCatalog) {
    let outputs: &[(&str, &str)] = &[
        ("load_balancer_dns", LOAD_BALANCER_DNS),
        ("instance_ip", INSTANCE_IP),
        ("rds_endpoint", RDS_ENDPOINT),
    ];
    for (name, body) in outputs {
        catalog.register(FragmentKind::Output, name, body);
    }
}

const LOAD_BALANCER_DNS: &str = r#"output "load_balancer_dns" {
  description = "Public DNS name of the load balancer"
  value       = aws_lb.wordpress_lb.dns_name
}"#;

const INSTANCE_IP: &str = r#"output "instance_ip" {
  description = "Public IP of the WordPress instance"
  value       = aws_instance.wordpress.public_ip
}"#;

const RDS_ENDPOINT: &str = r#"output "rds_endpoint" {
  description = "Connection endpoint of the WordPress database"
  value       = aws_db_instance.wordpress_db.endpoint
}"#;
