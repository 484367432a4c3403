//! The resolved configuration set and its coercion rules.

use std::collections::HashMap;

use tracing::debug;

use crate::value::ConfigValue;

/// Keys whose defaults only yield to a non-empty override, so that an
/// empty line in the `.env` file cannot blank out a secret-like field.
///
/// The membership lists match against the raw (conventionally uppercase)
/// key spelling from the file, not the lowercased storage key.
const GUARDED_STRING_KEYS: &[&str] = &[
    "EC2_AMI_ID",
    "WORDPRESS_ADMIN_PASSWORD",
    "WORDPRESS_DB_PASSWORD",
];

/// Keys coerced to booleans. Values other than `true`/`false` are
/// accepted as-is, stored lowercased.
const BOOL_KEYS: &[&str] = &[
    "USE_RDS",
    "ENABLE_AUTO_SCALING",
    "ENABLE_S3_MEDIA",
    "ENABLE_CLOUDFRONT",
];

/// Keys coerced to base-10 integers. An unparsable value retains the
/// default rather than failing the run.
const INT_KEYS: &[&str] = &[
    "RDS_STORAGE_SIZE",
    "MIN_INSTANCES",
    "MAX_INSTANCES",
    "SCALE_UP_CPU_THRESHOLD",
    "SCALE_DOWN_CPU_THRESHOLD",
    "INSTANCE_VOLUME_SIZE",
];

/// The resolved mapping from setting name to typed value for one run.
///
/// Built once from defaults plus `.env` overrides plus the derivation
/// rules, then treated as read-only by consumers. The map is open:
/// overrides for keys outside the default set are still inserted under
/// their lowercased name.
#[derive(Debug, Clone, Default)]
pub struct ConfigSet {
    values: HashMap<String, ConfigValue>,
}

impl ConfigSet {
    /// Create an empty configuration set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration set holding the built-in defaults.
    pub fn defaults() -> Self {
        let mut set = Self::new();

        set.insert("aws_region", "us-east-1".into());
        set.insert("aws_access_key_id", "".into());
        set.insert("aws_secret_access_key", "".into());
        set.insert("aws_session_token", "".into());

        set.insert("project_name", "wordpress-site".into());
        set.insert("environment", "dev".into());
        set.insert("vpc_cidr", "10.0.0.0/16".into());
        set.insert("subnet_cidr", "10.0.0.0/16".into());
        set.insert("public_subnet_cidr", "10.0.0.0/24".into());
        set.insert("private_subnet_cidr", "10.0.1.0/24".into());

        set.insert("allowed_ssh_ips", vec!["0.0.0.0/0"].into());
        set.insert("allowed_http_ips", vec!["0.0.0.0/0"].into());

        set.insert("instance_type", "t2.micro".into());
        set.insert("instance_ami", "ami-0eaf62527f5bb8940".into());
        set.insert("instance_volume_size", 20.into());
        set.insert("key_name", "".into());

        set.insert("wordpress_domain", "".into());
        set.insert("wordpress_db_name", "wordpress".into());
        set.insert("wordpress_db_user", "wordpress".into());
        set.insert("wordpress_db_password", "change-this-password".into());
        set.insert("wordpress_site_title", "My WordPress Site".into());
        set.insert("wordpress_admin_user", "admin".into());
        set.insert("wordpress_admin_password", "change-this-admin-password".into());
        set.insert("wordpress_admin_email", "admin@example.com".into());
        set.insert("wordpress_install_path", "/var/www/html".into());

        set.insert("enable_s3_media", false.into());
        set.insert("s3_bucket_name", "".into());
        set.insert("enable_cloudfront", false.into());
        set.insert("use_rds", false.into());
        set.insert("rds_instance_class", "db.t3.micro".into());
        set.insert("rds_storage_size", 20.into());
        set.insert("rds_multi_az", false.into());
        set.insert("enable_auto_scaling", false.into());
        set.insert("min_instances", 1.into());
        set.insert("max_instances", 3.into());
        set.insert("scale_up_cpu_threshold", 80.into());
        set.insert("scale_down_cpu_threshold", 30.into());

        set
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) {
        self.values.insert(key.into(), value);
    }

    /// Look up a value by its lowercase setting name.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Render the value under `key`, or the empty string when absent.
    pub fn render(&self, key: &str) -> String {
        self.values.get(key).map(ConfigValue::render).unwrap_or_default()
    }

    /// Whether `key` is present and not the empty string.
    pub fn is_set(&self, key: &str) -> bool {
        self.values.get(key).map(|v| !v.is_empty_str()).unwrap_or(false)
    }

    /// Whether `key` holds the boolean `true`.
    pub fn is_enabled(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(ConfigValue::Bool(true)))
    }

    /// Iterate over all (key, value) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Apply one raw `KEY=VALUE` override, classifying the key through
    /// the fixed coercion lists. The stored key is always lowercased.
    pub fn apply_override(&mut self, raw_key: &str, value: &str) {
        let key = raw_key.to_lowercase();

        if GUARDED_STRING_KEYS.contains(&raw_key) {
            if !value.is_empty() {
                self.values.insert(key, ConfigValue::Str(value.to_string()));
            }
        } else if BOOL_KEYS.contains(&raw_key) {
            let lowered = value.to_lowercase();
            let coerced = match lowered.as_str() {
                "true" => ConfigValue::Bool(true),
                "false" => ConfigValue::Bool(false),
                // No validation: anything else is kept verbatim, lowercased.
                _ => ConfigValue::Str(lowered),
            };
            self.values.insert(key, coerced);
        } else if INT_KEYS.contains(&raw_key) {
            match value.parse::<i64>() {
                Ok(n) => {
                    self.values.insert(key, ConfigValue::Int(n));
                }
                Err(_) => {
                    debug!("Ignoring non-numeric value for {}, keeping default", raw_key);
                }
            }
        } else {
            self.values.insert(key, ConfigValue::Str(value.to_string()));
        }
    }

    /// Apply the cross-field derivation rules, in order:
    /// 1. an empty admin password copies the database password;
    /// 2. an empty domain becomes `{project_name}.example.com`.
    pub fn apply_derivations(&mut self) {
        let admin_empty = self
            .values
            .get("wordpress_admin_password")
            .map(ConfigValue::is_empty_str)
            .unwrap_or(true);
        if admin_empty {
            if let Some(db_password) = self.values.get("wordpress_db_password").cloned() {
                self.values
                    .insert("wordpress_admin_password".to_string(), db_password);
            }
        }

        let domain_empty = self
            .values
            .get("wordpress_domain")
            .map(ConfigValue::is_empty_str)
            .unwrap_or(true);
        if domain_empty {
            let domain = format!("{}.example.com", self.render("project_name"));
            self.values
                .insert("wordpress_domain".to_string(), ConfigValue::Str(domain));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_core_settings() {
        let set = ConfigSet::defaults();
        assert_eq!(set.render("aws_region"), "us-east-1");
        assert_eq!(set.get("min_instances"), Some(&ConfigValue::Int(1)));
        assert_eq!(set.get("use_rds"), Some(&ConfigValue::Bool(false)));
        assert_eq!(set.render("allowed_ssh_ips"), r#"["0.0.0.0/0"]"#);
    }

    #[test]
    fn test_integer_override_parses() {
        let mut set = ConfigSet::defaults();
        set.apply_override("MIN_INSTANCES", "4");
        assert_eq!(set.get("min_instances"), Some(&ConfigValue::Int(4)));
    }

    #[test]
    fn test_non_numeric_integer_retains_default() {
        let mut set = ConfigSet::defaults();
        set.apply_override("MIN_INSTANCES", "notanumber");
        assert_eq!(set.get("min_instances"), Some(&ConfigValue::Int(1)));
    }

    #[test]
    fn test_boolean_override_coerces() {
        let mut set = ConfigSet::defaults();
        set.apply_override("USE_RDS", "TRUE");
        assert_eq!(set.get("use_rds"), Some(&ConfigValue::Bool(true)));
        assert!(set.is_enabled("use_rds"));
    }

    #[test]
    fn test_boolean_override_accepts_other_strings_lowercased() {
        let mut set = ConfigSet::defaults();
        set.apply_override("ENABLE_S3_MEDIA", "Maybe");
        assert_eq!(
            set.get("enable_s3_media"),
            Some(&ConfigValue::Str("maybe".to_string()))
        );
        assert!(!set.is_enabled("enable_s3_media"));
    }

    #[test]
    fn test_guarded_key_ignores_empty_value() {
        let mut set = ConfigSet::defaults();
        set.apply_override("WORDPRESS_DB_PASSWORD", "");
        assert_eq!(set.render("wordpress_db_password"), "change-this-password");

        set.apply_override("WORDPRESS_DB_PASSWORD", "s3cret");
        assert_eq!(set.render("wordpress_db_password"), "s3cret");
    }

    #[test]
    fn test_unknown_key_inserted_lowercased() {
        let mut set = ConfigSet::defaults();
        set.apply_override("CUSTOM_SETTING", "custom-value");
        assert_eq!(set.render("custom_setting"), "custom-value");
    }

    #[test]
    fn test_admin_password_falls_back_to_db_password() {
        let mut set = ConfigSet::defaults();
        set.insert("wordpress_admin_password", "".into());
        set.insert("wordpress_db_password", "secret123".into());
        set.apply_derivations();
        assert_eq!(set.render("wordpress_admin_password"), "secret123");
    }

    #[test]
    fn test_domain_synthesized_from_project_name() {
        let mut set = ConfigSet::defaults();
        set.insert("project_name", "acme".into());
        set.apply_derivations();
        assert_eq!(set.render("wordpress_domain"), "acme.example.com");
    }

    #[test]
    fn test_explicit_domain_not_overwritten() {
        let mut set = ConfigSet::defaults();
        set.insert("wordpress_domain", "blog.acme.io".into());
        set.apply_derivations();
        assert_eq!(set.render("wordpress_domain"), "blog.acme.io");
    }
}
