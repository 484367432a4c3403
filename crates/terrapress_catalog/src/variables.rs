//! Built-in variable-section fragments: the input declarations of
//! `variables.tf`. Defaults are filled in from the configuration set
//! through `{key}` placeholders.

use crate::fragment::{FragmentCatalog, FragmentKind};

pub(crate) fn register(catalog: &mut FragmentCatalog) {
    let sections: &[(&str, &str)] = &[
        ("aws", AWS),
        ("vpc", VPC),
        ("ec2", EC2),
        ("rds", RDS),
        ("auto_scaling", AUTO_SCALING),
        ("wordpress", WORDPRESS),
    ];
    for (name, body) in sections {
        catalog.register(FragmentKind::VariableSection, name, body);
    }
}

const AWS: &str = r#"variable "aws_region" {
  description = "AWS region"
  type        = string
  default     = "{aws_region}"
}

variable "aws_access_key_id" {
  description = "AWS access key"
  type        = string
  default     = "{aws_access_key_id}"
  sensitive   = true
}

variable "aws_secret_access_key" {
  description = "AWS secret key"
  type        = string
  default     = "{aws_secret_access_key}"
  sensitive   = true
}"#;

const VPC: &str = r#"variable "vpc_cidr" {
  description = "CIDR block for the VPC"
  type        = string
  default     = "{vpc_cidr}"
}

variable "public_subnet_cidr" {
  description = "CIDR block for the public subnet"
  type        = string
  default     = "{public_subnet_cidr}"
}

variable "private_subnet_cidr" {
  description = "CIDR block for the private subnet"
  type        = string
  default     = "{private_subnet_cidr}"
}

variable "allowed_ssh_ips" {
  description = "CIDR blocks allowed to reach SSH"
  type        = list(string)
  default     = {allowed_ssh_ips}
}

variable "allowed_http_ips" {
  description = "CIDR blocks allowed to reach HTTP/HTTPS"
  type        = list(string)
  default     = {allowed_http_ips}
}"#;

const EC2: &str = r#"variable "instance_type" {
  description = "EC2 instance type"
  type        = string
  default     = "{instance_type}"
}

variable "instance_ami" {
  description = "AMI for the WordPress instance"
  type        = string
  default     = "{instance_ami}"
}

variable "instance_volume_size" {
  description = "Root volume size in GB"
  type        = number
  default     = {instance_volume_size}
}

variable "key_name" {
  description = "Name of the SSH key pair"
  type        = string
  default     = "{key_name}"
}"#;

const RDS: &str = r#"variable "rds_instance_class" {
  description = "RDS instance class"
  type        = string
  default     = "{rds_instance_class}"
}

variable "rds_storage_size" {
  description = "RDS allocated storage in GB"
  type        = number
  default     = {rds_storage_size}
}

variable "rds_multi_az" {
  description = "Whether the RDS instance is multi-AZ"
  type        = bool
  default     = {rds_multi_az}
}"#;

const AUTO_SCALING: &str = r#"variable "min_instances" {
  description = "Minimum number of instances in the auto scaling group"
  type        = number
  default     = {min_instances}
}

variable "max_instances" {
  description = "Maximum number of instances in the auto scaling group"
  type        = number
  default     = {max_instances}
}

variable "scale_up_cpu_threshold" {
  description = "CPU percentage that triggers scaling up"
  type        = number
  default     = {scale_up_cpu_threshold}
}

variable "scale_down_cpu_threshold" {
  description = "CPU percentage that triggers scaling down"
  type        = number
  default     = {scale_down_cpu_threshold}
}"#;

const WORDPRESS: &str = r#"variable "wordpress_domain" {
  description = "Domain name for the WordPress site"
  type        = string
  default     = "{wordpress_domain}"
}

variable "wordpress_db_name" {
  description = "WordPress database name"
  type        = string
  default     = "{wordpress_db_name}"
}

variable "wordpress_db_user" {
  description = "WordPress database user"
  type        = string
  default     = "{wordpress_db_user}"
}

variable "wordpress_db_password" {
  description = "WordPress database password"
  type        = string
  default     = "{wordpress_db_password}"
  sensitive   = true
}

variable "wordpress_site_title" {
  description = "Title of the WordPress site"
  type        = string
  default     = "{wordpress_site_title}"
}

variable "wordpress_admin_user" {
  description = "WordPress administrator user"
  type        = string
  default     = "{wordpress_admin_user}"
}

variable "wordpress_admin_password" {
  description = "WordPress administrator password"
  type        = string
  default     = "{wordpress_admin_password}"
  sensitive   = true
}

variable "wordpress_admin_email" {
  description = "WordPress administrator email"
  type        = string
  default     = "{wordpress_admin_email}"
}

variable "wordpress_install_path" {
  description = "Filesystem path WordPress is installed to"
  type        = string
  default     = "{wordpress_install_path}"
}"#;
