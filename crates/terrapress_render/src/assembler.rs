//! Document assembly: the fragment pipeline and the document set.

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use terrapress_catalog::{DeploymentProfile, FragmentCatalog, FragmentKind, ProfileCatalog};
use terrapress_config::{ConfigSet, ConfigValue};

use crate::error::{RenderError, RenderResult};
use crate::substitute::Substitutor;
use crate::tfvars;
use crate::warning::RenderWarning;

pub const MAIN_TF: &str = "main.tf";
pub const VARIABLES_TF: &str = "variables.tf";
pub const TFVARS: &str = "terraform.tfvars";

/// The generated documents, in write order.
#[derive(Debug, Clone)]
pub struct DocumentSet {
    files: Vec<(&'static str, String)>,
}

impl DocumentSet {
    /// Iterate over (filename, content) pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.files.iter().map(|(name, content)| (*name, content.as_str()))
    }

    /// Content of one document by filename.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, content)| content.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Result of one assembly run: the documents plus the warnings
/// accumulated along the way.
#[derive(Debug)]
pub struct AssembledDeployment {
    pub documents: DocumentSet,
    pub warnings: Vec<RenderWarning>,
}

/// Assembles the three output documents for a deployment profile.
pub struct DocumentAssembler {
    fragments: FragmentCatalog,
    profiles: ProfileCatalog,
    substitutor: Substitutor,
    timestamp: Option<DateTime<Local>>,
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAssembler {
    /// Create an assembler over the built-in catalogs.
    pub fn new() -> Self {
        Self::with_catalogs(FragmentCatalog::builtin(), ProfileCatalog::builtin())
    }

    /// Create an assembler over custom catalogs.
    pub fn with_catalogs(fragments: FragmentCatalog, profiles: ProfileCatalog) -> Self {
        Self {
            fragments,
            profiles,
            substitutor: Substitutor::new(),
            timestamp: None,
        }
    }

    /// Pin the generation timestamp instead of using the wall clock.
    /// With a pinned timestamp, assembly is byte-for-byte reproducible.
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Assemble all three documents for `profile_name`.
    ///
    /// An unknown profile is the one fatal case; everything recoverable
    /// is returned as warnings on the [`AssembledDeployment`].
    pub fn assemble(
        &self,
        profile_name: &str,
        config: &ConfigSet,
    ) -> RenderResult<AssembledDeployment> {
        let profile = self
            .profiles
            .get(profile_name)
            .ok_or_else(|| RenderError::UnknownProfile(profile_name.to_string()))?;

        let stamp = self
            .timestamp
            .unwrap_or_else(Local::now)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        let title = title_case(profile.name);

        // The `date` entry is synthesized at formatting time so fragment
        // headers can reference it like any other setting.
        let mut values = config.clone();
        values.insert("date", ConfigValue::Str(stamp.clone()));

        let mut warnings = Vec::new();
        let main_tf = self.assemble_main(profile, &values, &title, &stamp, &mut warnings);
        let variables_tf = self.assemble_variables(profile, &values, &title, &stamp, &mut warnings);
        let tfvars = tfvars::emit(profile, &values, &title, &stamp);

        Ok(AssembledDeployment {
            documents: DocumentSet {
                files: vec![
                    (MAIN_TF, main_tf),
                    (VARIABLES_TF, variables_tf),
                    (TFVARS, tfvars),
                ],
            },
            warnings,
        })
    }

    /// Assemble `main.tf`: header, components in profile order, then
    /// the outputs section.
    fn assemble_main(
        &self,
        profile: &DeploymentProfile,
        values: &ConfigSet,
        title: &str,
        stamp: &str,
        warnings: &mut Vec<RenderWarning>,
    ) -> String {
        let mut content = format!("# Terraform configuration for WordPress - {} Setup\n", title);
        content.push_str(&format!("# Generated on: {}\n", stamp));
        content.push_str("# This file was assembled from modular components\n\n");

        for name in profile.components {
            match self.render_fragment(FragmentKind::Component, name, values, warnings) {
                Some(rendered) => {
                    content.push_str(&rendered);
                    content.push_str("\n\n");
                }
                None => continue,
            }
        }

        content.push_str("# Outputs\n");
        for name in profile.outputs {
            if let Some(rendered) =
                self.render_fragment(FragmentKind::Output, name, values, warnings)
            {
                content.push_str(&rendered);
                content.push('\n');
            }
        }

        content
    }

    /// Assemble `variables.tf`: header plus the profile's variable
    /// sections. No outputs step.
    fn assemble_variables(
        &self,
        profile: &DeploymentProfile,
        values: &ConfigSet,
        title: &str,
        stamp: &str,
        warnings: &mut Vec<RenderWarning>,
    ) -> String {
        let mut content = format!("# Variables for WordPress - {} Setup\n", title);
        content.push_str(&format!("# Generated on: {}\n\n", stamp));

        for name in profile.variable_sections {
            if let Some(rendered) =
                self.render_fragment(FragmentKind::VariableSection, name, values, warnings)
            {
                content.push_str(&rendered);
                content.push_str("\n\n");
            }
        }

        content
    }

    /// Look up and substitute one fragment. A catalog miss records a
    /// warning and drops the fragment.
    fn render_fragment(
        &self,
        kind: FragmentKind,
        name: &str,
        values: &ConfigSet,
        warnings: &mut Vec<RenderWarning>,
    ) -> Option<String> {
        match self.fragments.get(kind, name) {
            Some(fragment) => {
                debug!("Rendering {} '{}'", kind, name);
                Some(self.substitutor.substitute(fragment.body, values))
            }
            None => {
                warn!("{} '{}' not found in catalog, skipping", kind, name);
                warnings.push(RenderWarning::MissingFragment {
                    kind,
                    name: name.to_string(),
                });
                None
            }
        }
    }
}

/// Title-case a profile name: `cost-efficient` becomes `Cost Efficient`.
pub(crate) fn title_case(name: &str) -> String {
    name.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("cost-efficient"), "Cost Efficient");
        assert_eq!(title_case("high-availability"), "High Availability");
        assert_eq!(title_case("single"), "Single");
    }

    #[test]
    fn test_unknown_profile_is_fatal() {
        let assembler = DocumentAssembler::new();
        let config = ConfigSet::defaults();
        let err = assembler.assemble("does-not-exist", &config).unwrap_err();
        assert!(matches!(err, RenderError::UnknownProfile(name) if name == "does-not-exist"));
    }

    #[test]
    fn test_missing_fragment_skipped_with_warning() {
        let mut fragments = FragmentCatalog::new();
        fragments.register(FragmentKind::Component, "alpha", "alpha-block");
        fragments.register(FragmentKind::Component, "gamma", "gamma-block");

        let mut profiles = ProfileCatalog::new();
        profiles.register(DeploymentProfile {
            name: "minimal",
            description: "test profile",
            components: &["alpha", "beta", "gamma"],
            variable_sections: &[],
            outputs: &[],
        });

        let assembler = DocumentAssembler::with_catalogs(fragments, profiles);
        let deployment = assembler
            .assemble("minimal", &ConfigSet::defaults())
            .unwrap();

        let main_tf = deployment.documents.get(MAIN_TF).unwrap();
        let alpha = main_tf.find("alpha-block").expect("alpha rendered");
        let gamma = main_tf.find("gamma-block").expect("gamma rendered");
        assert!(alpha < gamma, "profile order preserved");
        assert!(!main_tf.contains("beta"));

        assert_eq!(deployment.warnings.len(), 1);
        assert_eq!(deployment.warnings[0].fragment_name(), "beta");
    }

    #[test]
    fn test_headers_carry_profile_title_and_date() {
        let stamp = Local::now();
        let assembler = DocumentAssembler::new().with_timestamp(stamp);
        let mut config = ConfigSet::defaults();
        config.apply_derivations();

        let deployment = assembler.assemble("cost-efficient", &config).unwrap();
        let main_tf = deployment.documents.get(MAIN_TF).unwrap();
        assert!(main_tf.starts_with(
            "# Terraform configuration for WordPress - Cost Efficient Setup\n"
        ));
        assert!(main_tf.contains(&format!(
            "# Generated on: {}\n",
            stamp.format("%Y-%m-%d %H:%M:%S")
        )));
    }

    #[test]
    fn test_outputs_follow_components() {
        let mut config = ConfigSet::defaults();
        config.apply_derivations();
        let deployment = DocumentAssembler::new()
            .assemble("cost-efficient", &config)
            .unwrap();

        let main_tf = deployment.documents.get(MAIN_TF).unwrap();
        let last_component = main_tf.find("aws_lb_target_group").unwrap();
        let outputs_header = main_tf.find("# Outputs\n").unwrap();
        assert!(last_component < outputs_header);
        assert!(main_tf[outputs_header..].contains(r#"output "instance_ip""#));
    }

    #[test]
    fn test_pinned_timestamp_is_idempotent() {
        let stamp = Local::now();
        let mut config = ConfigSet::defaults();
        config.apply_derivations();

        let first = DocumentAssembler::new()
            .with_timestamp(stamp)
            .assemble("high-availability", &config)
            .unwrap();
        let second = DocumentAssembler::new()
            .with_timestamp(stamp)
            .assemble("high-availability", &config)
            .unwrap();

        for (name, content) in first.documents.iter() {
            assert_eq!(Some(content), second.documents.get(name), "{} differs", name);
        }
    }
}
