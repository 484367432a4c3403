//! Built-in component fragments: the resource blocks of `main.tf`.
//!
//! Bodies are Terraform HCL. Terraform's own `${...}` interpolations
//! pass through substitution untouched because they never form a bare
//! lowercase `{key}` token.

use crate::fragment::{FragmentCatalog, FragmentKind};

pub(crate) fn register(catalog: &mut FragmentCatalog) {
    let components: &[(&str, &str)] = &[
        ("provider", PROVIDER),
        ("vpc", VPC),
        ("internet_gateway", INTERNET_GATEWAY),
        ("subnet", SUBNET),
        ("subnet_multi_az", SUBNET_MULTI_AZ),
        ("route_table", ROUTE_TABLE),
        ("security_group_instance", SECURITY_GROUP_INSTANCE),
        ("security_group_lb", SECURITY_GROUP_LB),
        ("security_group_rds", SECURITY_GROUP_RDS),
        ("ec2_instance", EC2_INSTANCE),
        ("rds_instance", RDS_INSTANCE),
        ("launch_template", LAUNCH_TEMPLATE),
        ("auto_scaling_group", AUTO_SCALING_GROUP),
        ("load_balancer", LOAD_BALANCER),
        ("target_group", TARGET_GROUP),
    ];
    for (name, body) in components {
        catalog.register(FragmentKind::Component, name, body);
    }
}

const PROVIDER: &str = r#"provider "aws" {
  region     = var.aws_region
  access_key = var.aws_access_key_id
  secret_key = var.aws_secret_access_key
}"#;

const VPC: &str = r#"# VPC Configuration
resource "aws_vpc" "wordpress_vpc" {
  cidr_block           = var.vpc_cidr
  enable_dns_support   = true
  enable_dns_hostnames = true

  tags = {
    Name = "${var.project_name}-vpc"
  }
}"#;

const INTERNET_GATEWAY: &str = r#"# Internet Gateway
resource "aws_internet_gateway" "wordpress_igw" {
  vpc_id = aws_vpc.wordpress_vpc.id

  tags = {
    Name = "${var.project_name}-igw"
  }
}"#;

const SUBNET: &str = r#"# Public Subnet
resource "aws_subnet" "wordpress_public_subnet" {
  vpc_id                  = aws_vpc.wordpress_vpc.id
  cidr_block              = var.public_subnet_cidr
  map_public_ip_on_launch = true

  tags = {
    Name = "${var.project_name}-public-subnet"
  }
}"#;

const SUBNET_MULTI_AZ: &str = r#"# Multi-AZ Subnets
data "aws_availability_zones" "available" {
  state = "available"
}

resource "aws_subnet" "wordpress_public_subnet" {
  count                   = 2
  vpc_id                  = aws_vpc.wordpress_vpc.id
  cidr_block              = cidrsubnet(var.vpc_cidr, 8, count.index)
  availability_zone       = data.aws_availability_zones.available.names[count.index]
  map_public_ip_on_launch = true

  tags = {
    Name = "${var.project_name}-public-subnet-${count.index + 1}"
  }
}

resource "aws_subnet" "wordpress_private_subnet" {
  count             = 2
  vpc_id            = aws_vpc.wordpress_vpc.id
  cidr_block        = cidrsubnet(var.vpc_cidr, 8, count.index + 10)
  availability_zone = data.aws_availability_zones.available.names[count.index]

  tags = {
    Name = "${var.project_name}-private-subnet-${count.index + 1}"
  }
}"#;

const ROUTE_TABLE: &str = r#"# Route Table for public traffic
resource "aws_route_table" "wordpress_public_rt" {
  vpc_id = aws_vpc.wordpress_vpc.id

  route {
    cidr_block = "0.0.0.0/0"
    gateway_id = aws_internet_gateway.wordpress_igw.id
  }

  tags = {
    Name = "${var.project_name}-public-rt"
  }
}

resource "aws_route_table_association" "wordpress_public_rta" {
  subnet_id      = aws_subnet.wordpress_public_subnet[*].id[0]
  route_table_id = aws_route_table.wordpress_public_rt.id
}"#;

const SECURITY_GROUP_INSTANCE: &str = r#"# Security Group for the WordPress instance
resource "aws_security_group" "wordpress_sg" {
  name        = "${var.project_name}-instance-sg"
  description = "Security group for the WordPress instance"
  vpc_id      = aws_vpc.wordpress_vpc.id

  ingress {
    description = "SSH"
    from_port   = 22
    to_port     = 22
    protocol    = "tcp"
    cidr_blocks = var.allowed_ssh_ips
  }

  ingress {
    description     = "HTTP from load balancer"
    from_port       = 80
    to_port         = 80
    protocol        = "tcp"
    security_groups = [aws_security_group.wordpress_lb_sg.id]
  }

  # Outbound traffic
  egress {
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }

  tags = {
    Name = "${var.project_name}-instance-sg"
  }
}"#;

const SECURITY_GROUP_LB: &str = r#"# Security Group for the load balancer
resource "aws_security_group" "wordpress_lb_sg" {
  name        = "${var.project_name}-lb-sg"
  description = "Security group for the load balancer"
  vpc_id      = aws_vpc.wordpress_vpc.id

  ingress {
    description = "HTTP"
    from_port   = 80
    to_port     = 80
    protocol    = "tcp"
    cidr_blocks = var.allowed_http_ips
  }

  ingress {
    description = "HTTPS"
    from_port   = 443
    to_port     = 443
    protocol    = "tcp"
    cidr_blocks = var.allowed_http_ips
  }

  # Outbound traffic
  egress {
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }

  tags = {
    Name = "${var.project_name}-lb-sg"
  }
}"#;

const SECURITY_GROUP_RDS: &str = r#"# Security Group for the RDS database
resource "aws_security_group" "wordpress_rds_sg" {
  name        = "${var.project_name}-rds-sg"
  description = "Security group for the RDS database"
  vpc_id      = aws_vpc.wordpress_vpc.id

  ingress {
    description     = "MySQL from the WordPress instances"
    from_port       = 3306
    to_port         = 3306
    protocol        = "tcp"
    security_groups = [aws_security_group.wordpress_sg.id]
  }

  egress {
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }

  tags = {
    Name = "${var.project_name}-rds-sg"
  }
}"#;

const EC2_INSTANCE: &str = r#"# EC2 Instance for WordPress
resource "aws_instance" "wordpress" {
  ami                    = var.instance_ami
  instance_type          = var.instance_type
  key_name               = var.key_name
  subnet_id              = aws_subnet.wordpress_public_subnet.id
  vpc_security_group_ids = [aws_security_group.wordpress_sg.id]

  root_block_device {
    volume_size = var.instance_volume_size
    volume_type = "gp3"
  }

  user_data = <<-EOF
    #!/bin/bash
    apt-get update
    apt-get install -y apache2 php php-mysql mysql-server
    wget -q https://wordpress.org/latest.tar.gz -O /tmp/wordpress.tar.gz
    tar -xzf /tmp/wordpress.tar.gz -C ${var.wordpress_install_path} --strip-components=1
    chown -R www-data:www-data ${var.wordpress_install_path}
    systemctl enable --now apache2
  EOF

  tags = {
    Name = "${var.project_name}-instance"
  }
}"#;

const RDS_INSTANCE: &str = r#"# RDS Database for WordPress
resource "aws_db_subnet_group" "wordpress_db_subnets" {
  name       = "${var.project_name}-db-subnets"
  subnet_ids = aws_subnet.wordpress_private_subnet[*].id

  tags = {
    Name = "${var.project_name}-db-subnets"
  }
}

resource "aws_db_instance" "wordpress_db" {
  identifier             = "${var.project_name}-db"
  engine                 = "mysql"
  engine_version         = "8.0"
  instance_class         = var.rds_instance_class
  allocated_storage      = var.rds_storage_size
  multi_az               = var.rds_multi_az
  db_name                = var.wordpress_db_name
  username               = var.wordpress_db_user
  password               = var.wordpress_db_password
  db_subnet_group_name   = aws_db_subnet_group.wordpress_db_subnets.name
  vpc_security_group_ids = [aws_security_group.wordpress_rds_sg.id]
  skip_final_snapshot    = true

  tags = {
    Name = "${var.project_name}-db"
  }
}"#;

const LAUNCH_TEMPLATE: &str = r#"# Launch Template for the auto scaling group
resource "aws_launch_template" "wordpress_lt" {
  name_prefix   = "${var.project_name}-lt-"
  image_id      = var.instance_ami
  instance_type = var.instance_type
  key_name      = var.key_name

  vpc_security_group_ids = [aws_security_group.wordpress_sg.id]

  block_device_mappings {
    device_name = "/dev/sda1"
    ebs {
      volume_size = var.instance_volume_size
      volume_type = "gp3"
    }
  }

  tag_specifications {
    resource_type = "instance"
    tags = {
      Name = "${var.project_name}-asg-instance"
    }
  }
}"#;

const AUTO_SCALING_GROUP: &str = r#"# Auto Scaling Group
resource "aws_autoscaling_group" "wordpress_asg" {
  name                = "${var.project_name}-asg"
  min_size            = var.min_instances
  max_size            = var.max_instances
  desired_capacity    = var.min_instances
  vpc_zone_identifier = aws_subnet.wordpress_public_subnet[*].id
  target_group_arns   = [aws_lb_target_group.wordpress_tg.arn]

  launch_template {
    id      = aws_launch_template.wordpress_lt.id
    version = "$Latest"
  }

  tag {
    key                 = "Name"
    value               = "${var.project_name}-asg"
    propagate_at_launch = true
  }
}

resource "aws_autoscaling_policy" "wordpress_scale_up" {
  name                   = "${var.project_name}-scale-up"
  autoscaling_group_name = aws_autoscaling_group.wordpress_asg.name
  adjustment_type        = "ChangeInCapacity"
  scaling_adjustment     = 1
  cooldown               = 300
}

resource "aws_cloudwatch_metric_alarm" "wordpress_cpu_high" {
  alarm_name          = "${var.project_name}-cpu-high"
  comparison_operator = "GreaterThanThreshold"
  evaluation_periods  = 2
  metric_name         = "CPUUtilization"
  namespace           = "AWS/EC2"
  period              = 120
  statistic           = "Average"
  threshold           = var.scale_up_cpu_threshold
  alarm_actions       = [aws_autoscaling_policy.wordpress_scale_up.arn]

  dimensions = {
    AutoScalingGroupName = aws_autoscaling_group.wordpress_asg.name
  }
}

resource "aws_autoscaling_policy" "wordpress_scale_down" {
  name                   = "${var.project_name}-scale-down"
  autoscaling_group_name = aws_autoscaling_group.wordpress_asg.name
  adjustment_type        = "ChangeInCapacity"
  scaling_adjustment     = -1
  cooldown               = 300
}

resource "aws_cloudwatch_metric_alarm" "wordpress_cpu_low" {
  alarm_name          = "${var.project_name}-cpu-low"
  comparison_operator = "LessThanThreshold"
  evaluation_periods  = 2
  metric_name         = "CPUUtilization"
  namespace           = "AWS/EC2"
  period              = 120
  statistic           = "Average"
  threshold           = var.scale_down_cpu_threshold
  alarm_actions       = [aws_autoscaling_policy.wordpress_scale_down.arn]

  dimensions = {
    AutoScalingGroupName = aws_autoscaling_group.wordpress_asg.name
  }
}"#;

const LOAD_BALANCER: &str = r#"# Application Load Balancer
resource "aws_lb" "wordpress_lb" {
  name               = "${var.project_name}-lb"
  internal           = false
  load_balancer_type = "application"
  security_groups    = [aws_security_group.wordpress_lb_sg.id]
  subnets            = aws_subnet.wordpress_public_subnet[*].id

  tags = {
    Name = "${var.project_name}-lb"
  }
}

resource "aws_lb_listener" "wordpress_http" {
  load_balancer_arn = aws_lb.wordpress_lb.arn
  port              = 80
  protocol          = "HTTP"

  default_action {
    type             = "forward"
    target_group_arn = aws_lb_target_group.wordpress_tg.arn
  }
}"#;

const TARGET_GROUP: &str = r#"# Target Group for the load balancer
resource "aws_lb_target_group" "wordpress_tg" {
  name     = "${var.project_name}-tg"
  port     = 80
  protocol = "HTTP"
  vpc_id   = aws_vpc.wordpress_vpc.id

  health_check {
    path                = "/"
    healthy_threshold   = 2
    unhealthy_threshold = 5
    timeout             = 5
    interval            = 30
  }

  tags = {
    Name = "${var.project_name}-tg"
  }
}"#;
