//! Modeline Option Completer
//!
//! Provides autocomplete for Camel K modeline option names.
//!
//! ## Trigger Pattern
//! - `// camel-k: ` - suggests every option
//! - `// camel-k: trait=foo.enabled=true de` - filters to options matching "de"
//!
//! Nothing is offered while a value is typed (`dependency=mvn:|`).
//!
//! ## Completion Behavior
//! Selecting an option (e.g. "dependency") replaces the whole option token
//! around the cursor with `dependency=`, leaving the cursor where the value goes. Deprecated options
//! (`property-file`) keep their deprecation tag from the registry.

use tower_lsp::lsp_types::{CompletionItem, CompletionTextEdit, Position, Range, TextEdit};

use crate::modeline::option_name_prefix_at;
use crate::options::registry;

use super::matcher::CompletionFilter;
use super::util::select_line;
use super::{Completable, Completer, Context};

/// Completer for modeline option names.
pub struct ModelineOptionCompleter {
    /// The partial option name typed so far (may be empty)
    partial_option: String,
    filter: CompletionFilter,
    line: u32,
    /// Column where the option token starts
    option_start: u32,
    /// Column where the option token ends, at or after the cursor
    option_end: u32,
}

impl<'a> Completer<'a> for ModelineOptionCompleter {
    fn construct(context: Context<'a>, line: usize, character: usize) -> Option<Self>
    where
        Self: Sized + Completer<'a>,
    {
        if !context.settings.modeline_completions {
            return None;
        }

        let line_string = select_line(context.document, line)?;
        let prefix = option_name_prefix_at(&line_string, character)?;

        Some(Self {
            partial_option: prefix.partial,
            filter: context.settings.completion_filter(),
            line: line as u32,
            option_start: prefix.start as u32,
            option_end: prefix.end as u32,
        })
    }

    fn completions(&self) -> Vec<impl Completable<'a, Self>>
    where
        Self: Sized,
    {
        registry().list_filtered_with(&self.partial_option, &self.filter)
    }

    type FilterParams = &'a str;

    fn completion_filter_text(&self, params: Self::FilterParams) -> String {
        params.to_string()
    }
}

impl<'a> Completable<'a, ModelineOptionCompleter> for CompletionItem {
    fn completions(&self, completer: &ModelineOptionCompleter) -> Option<CompletionItem> {
        let filter_text = completer.completion_filter_text(&self.label);

        Some(CompletionItem {
            text_edit: Some(CompletionTextEdit::Edit(TextEdit {
                range: Range {
                    start: Position {
                        line: completer.line,
                        character: completer.option_start,
                    },
                    end: Position {
                        line: completer.line,
                        character: completer.option_end,
                    },
                },
                new_text: format!("{}=", self.label),
            })),
            filter_text: Some(filter_text),
            ..self.clone()
        })
    }
}
