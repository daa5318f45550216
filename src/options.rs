//! Camel K modeline option registry.
//!
//! Holds every option name a modeline (`// camel-k: trait=... dependency=...`)
//! accepts, with its description and deprecation status, and derives the
//! completion candidates offered while an option name is being typed.
//!
//! ## Queries
//! - [`OptionRegistry::list_all`] - every option as a completion candidate
//! - [`OptionRegistry::list_filtered`] - candidates whose label matches a partial name
//! - [`OptionRegistry::describe`] - description of an exact option name
//!
//! The process-wide table is built once, on first use, and never changes.
//! Use [`registry`] to reach it.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use thiserror::Error;
use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, CompletionItemTag, Documentation,
};

use crate::completion::matcher::CompletionFilter;

pub const OPTION_NAME_TRAIT: &str = "trait";
pub const OPTION_NAME_DEPENDENCY: &str = "dependency";
pub const OPTION_NAME_PROPERTY: &str = "property";
pub const OPTION_NAME_PROPERTY_FILE: &str = "property-file";
pub const OPTION_NAME_RESOURCE: &str = "resource";
pub const OPTION_NAME_OPEN_API: &str = "open-api";

const SINCE_COMMUNITY_1_5_PROD_1_4: &str =
    "Option is available since Community 1.5 and Red Hat productized 1.4";

/// One known modeline option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub name: String,
    pub description: String,
    pub deprecated: bool,
}

impl OptionDescriptor {
    fn completion_item(&self) -> CompletionItem {
        CompletionItem {
            label: self.name.clone(),
            kind: Some(CompletionItemKind::PROPERTY),
            documentation: Some(Documentation::String(self.description.clone())),
            tags: self.deprecated.then(|| vec![CompletionItemTag::DEPRECATED]),
            ..Default::default()
        }
    }
}

/// Integrity failures of an option table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate modeline option `{0}`")]
    DuplicateName(String),
    #[error("modeline option with an empty name")]
    EmptyName,
    #[error("modeline option `{0}` has no description")]
    EmptyDescription(String),
}

/// Immutable set of modeline options.
///
/// `options` is the only source of truth; `completion_items` is rendered from
/// it once, in the same order, so enumeration and lookup cannot disagree.
#[derive(Debug)]
pub struct OptionRegistry {
    options: BTreeMap<String, OptionDescriptor>,
    completion_items: Vec<CompletionItem>,
}

impl OptionRegistry {
    /// Builds a registry from `(name, description, deprecated)` rows.
    pub fn from_table<'a, I>(table: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str, bool)>,
    {
        let mut options = BTreeMap::new();

        for (name, description, deprecated) in table {
            if name.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if description.trim().is_empty() {
                return Err(RegistryError::EmptyDescription(name.to_string()));
            }

            let descriptor = OptionDescriptor {
                name: name.to_string(),
                description: description.to_string(),
                deprecated,
            };

            if options.insert(name.to_string(), descriptor).is_some() {
                return Err(RegistryError::DuplicateName(name.to_string()));
            }
        }

        let completion_items = options
            .values()
            .map(OptionDescriptor::completion_item)
            .collect();

        Ok(Self {
            options,
            completion_items,
        })
    }

    /// Every option as a completion candidate, in name order.
    pub fn list_all(&self) -> &[CompletionItem] {
        &self.completion_items
    }

    /// Candidates whose label starts with `prefix` (case-sensitive).
    ///
    /// An empty prefix matches every option.
    pub fn list_filtered(&self, prefix: &str) -> Vec<CompletionItem> {
        self.list_filtered_with(prefix, &CompletionFilter::default())
    }

    /// Like [`Self::list_filtered`] but with an explicit match policy.
    pub fn list_filtered_with(&self, filter: &str, policy: &CompletionFilter) -> Vec<CompletionItem> {
        self.completion_items
            .iter()
            .filter(|item| policy.matches(&item.label, filter))
            .cloned()
            .collect()
    }

    pub fn describe(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(|option| option.description.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&OptionDescriptor> {
        self.options.get(name)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.options.values()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

static MODELINE_OPTIONS: Lazy<OptionRegistry> = Lazy::new(|| {
    let build_property = format!(
        "Add a build time property or properties file (syntax: [my-key=my-value|file:/path/to/my-conf.properties]\n\n{SINCE_COMMUNITY_1_5_PROD_1_4}"
    );
    let config = format!(
        "Add a runtime configuration from a Configmap, Secret or file (syntax: [configmap|secret|file]:name[/key], \
         where name represents the local file path or the configmap/secret name and key optionally represents \
         the configmap/secret key to be filtered)\n\n{SINCE_COMMUNITY_1_5_PROD_1_4}"
    );

    let table = [
        ("build-property", build_property.as_str(), false),
        ("config", config.as_str(), false),
        (
            OPTION_NAME_DEPENDENCY,
            "An external library that should be included. E.g. for Maven dependencies \"dependency=mvn:org.my/app:1.0\"",
            false,
        ),
        (
            "env",
            "Set an environment variable in the integration container. E.g \"env=MY_VAR=my-value\"",
            false,
        ),
        ("label", "Add a label to the integration. E.g. \"label=my.company=hello\"", false),
        ("name", "The integration name", false),
        (OPTION_NAME_OPEN_API, "Add an OpenAPI v2 spec (file path)", false),
        ("profile", "Trait profile used for deployment", false),
        (OPTION_NAME_PROPERTY, "Add a camel property", false),
        (
            OPTION_NAME_PROPERTY_FILE,
            "Bind a property file to the integration. E.g. \"property-file=integration.properties\"\n\n\
             Deprecated since Community 1.5 and Red Hat productized 1.4. Replaced by property=file:integration.properties",
            true,
        ),
        (OPTION_NAME_RESOURCE, "Add a resource", false),
        (OPTION_NAME_TRAIT, "Configure a trait. E.g. \"trait=service.enabled=false\"", false),
    ];

    OptionRegistry::from_table(table)
        .unwrap_or_else(|err| panic!("invalid built-in modeline option table: {err}"))
});

/// The built-in Camel K modeline options.
pub fn registry() -> &'static OptionRegistry {
    &MODELINE_OPTIONS
}
