//! The deployment profile registry.

use crate::fragment::{FragmentCatalog, FragmentKind};

/// Name of the high-availability profile. The values document emits an
/// extra configuration block for this profile only.
pub const HIGH_AVAILABILITY: &str = "high-availability";

/// A named deployment shape: which fragments compose each document and
/// in what order.
///
/// Ordering is significant and preserved verbatim in the assembled
/// documents; downstream tooling may depend on declaration order.
/// Unknown or duplicate names are tolerated here and diagnosed at
/// assembly time.
#[derive(Debug, Clone, Copy)]
pub struct DeploymentProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub components: &'static [&'static str],
    pub variable_sections: &'static [&'static str],
    pub outputs: &'static [&'static str],
}

impl DeploymentProfile {
    /// The fragment names of this profile for one namespace.
    pub fn fragment_names(&self, kind: FragmentKind) -> &'static [&'static str] {
        match kind {
            FragmentKind::Component => self.components,
            FragmentKind::VariableSection => self.variable_sections,
            FragmentKind::Output => self.outputs,
        }
    }
}

/// Read-only registry of deployment profiles, enumerable in declaration
/// order (which drives the numbered menu).
#[derive(Debug, Default)]
pub struct ProfileCatalog {
    profiles: Vec<DeploymentProfile>,
}

impl ProfileCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog of built-in profiles.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(COST_EFFICIENT_PROFILE);
        catalog.register(HIGH_AVAILABILITY_PROFILE);
        catalog
    }

    /// Register a profile.
    pub fn register(&mut self, profile: DeploymentProfile) {
        self.profiles.push(profile);
    }

    /// Look up a profile by name.
    pub fn get(&self, name: &str) -> Option<&DeploymentProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Iterate over all profiles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &DeploymentProfile> {
        self.profiles.iter()
    }

    /// All profile names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.profiles.iter().map(|p| p.name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

const COST_EFFICIENT_PROFILE: DeploymentProfile = DeploymentProfile {
    name: "cost-efficient",
    description: "Cost-efficient setup with a single EC2 instance and a load balancer",
    components: &[
        "provider",
        "vpc",
        "internet_gateway",
        "subnet",
        "route_table",
        "security_group_instance",
        "security_group_lb",
        "ec2_instance",
        "load_balancer",
        "target_group",
    ],
    variable_sections: &["aws", "vpc", "ec2", "wordpress"],
    outputs: &["load_balancer_dns", "instance_ip"],
};

const HIGH_AVAILABILITY_PROFILE: DeploymentProfile = DeploymentProfile {
    name: HIGH_AVAILABILITY,
    description: "High-availability setup with multi-AZ subnets, RDS and auto scaling",
    components: &[
        "provider",
        "vpc",
        "internet_gateway",
        "subnet_multi_az",
        "route_table",
        "security_group_instance",
        "security_group_lb",
        "security_group_rds",
        "rds_instance",
        "auto_scaling_group",
        "launch_template",
        "load_balancer",
        "target_group",
    ],
    variable_sections: &["aws", "vpc", "ec2", "rds", "auto_scaling", "wordpress"],
    outputs: &["load_balancer_dns", "rds_endpoint"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles_in_declaration_order() {
        let catalog = ProfileCatalog::builtin();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["cost-efficient", "high-availability"]);
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = ProfileCatalog::builtin();
        let profile = catalog.get("cost-efficient").unwrap();
        assert_eq!(profile.components.first(), Some(&"provider"));
        assert!(catalog.get("nonexistent").is_none());
    }

    #[test]
    fn test_every_profile_reference_resolves() {
        // The built-in catalog is complete: no profile references a
        // fragment that does not exist.
        let fragments = FragmentCatalog::builtin();
        let profiles = ProfileCatalog::builtin();

        for profile in profiles.iter() {
            for kind in [
                FragmentKind::Component,
                FragmentKind::VariableSection,
                FragmentKind::Output,
            ] {
                for name in profile.fragment_names(kind) {
                    assert!(
                        fragments.get(kind, name).is_some(),
                        "profile '{}' references missing {} '{}'",
                        profile.name,
                        kind,
                        name
                    );
                }
            }
        }
    }

    #[test]
    fn test_high_availability_includes_rds_and_scaling() {
        let catalog = ProfileCatalog::builtin();
        let profile = catalog.get(HIGH_AVAILABILITY).unwrap();
        assert!(profile.components.contains(&"rds_instance"));
        assert!(profile.components.contains(&"auto_scaling_group"));
        assert!(profile.variable_sections.contains(&"auto_scaling"));
        assert!(profile.outputs.contains(&"rds_endpoint"));
    }
}
