//! camelk-modeline: option completion for Camel K modelines
//!
//! A Camel K modeline is a comment in an integration source file that
//! carries build and deployment options:
//!
//! ```text
//! // camel-k: dependency=mvn:org.my/app:1.0 trait=service.enabled=false
//! ```
//!
//! # Overview
//!
//! - **Option registry**: the known option names with descriptions and
//!   deprecation status, as ready-made completion candidates
//! - **Autocomplete**: option names offered while typing in a modeline
//! - **Hover**: option descriptions when hovering a name
//!
//! # Architecture
//!
//! - [`options`]: the immutable option registry (`list_all`, `list_filtered`, `describe`)
//! - [`modeline`]: locating modelines and the option token under the cursor
//! - [`completion`]: completers and the label matching policy
//! - [`hover`]: hover provider
//! - [`config`]: settings loading
//!
//! The `camelk-modeline` binary serves these over LSP on stdio.
//!
//! ```ignore
//! use camelk_modeline::options::{registry, OPTION_NAME_PROPERTY};
//!
//! let items = registry().list_filtered("prop");
//! let description = registry().describe(OPTION_NAME_PROPERTY);
//! ```

pub mod options;

// LSP feature modules
pub mod completion;
pub mod hover;
pub mod modeline;

// Configuration
pub mod config;

// Test utilities (only available in test builds)
#[cfg(test)]
pub mod test_utils;
