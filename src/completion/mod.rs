use ropey::Rope;
use tower_lsp::lsp_types::{CompletionItem, CompletionList, CompletionParams, CompletionResponse};
use tracing::debug;

use crate::config::Settings;

use self::modeline_option_completer::ModelineOptionCompleter;

pub mod matcher;
mod modeline_option_completer;
mod util;

pub use util::select_line;

#[derive(Clone, Copy)]
pub struct Context<'a> {
    document: &'a Rope,
    settings: &'a Settings,
}

impl<'a> Context<'a> {
    pub fn new(document: &'a Rope, settings: &'a Settings) -> Self {
        Self { document, settings }
    }
}

pub trait Completer<'a>: Sized {
    fn construct(context: Context<'a>, line: usize, character: usize) -> Option<Self>
    where
        Self: Sized + Completer<'a>;

    fn completions(&self) -> Vec<impl Completable<'a, Self>>
    where
        Self: Sized;

    type FilterParams;
    /// Some clients filter on their own, so spell out the text they should filter on
    fn completion_filter_text(&self, params: Self::FilterParams) -> String;
}

pub trait Completable<'a, T: Completer<'a>>: Sized {
    fn completions(&self, completer: &T) -> Option<CompletionItem>;
}

pub fn get_completions(
    document: &Rope,
    params: &CompletionParams,
    settings: &Settings,
) -> Option<CompletionResponse> {
    let completion_context = Context::new(document, settings);

    // Only modeline option names for now; value completers would chain with `or_else`
    run_completer::<ModelineOptionCompleter>(
        completion_context,
        params.text_document_position.position.line,
        params.text_document_position.position.character,
    )
}

fn run_completer<'a, T: Completer<'a>>(
    context: Context<'a>,
    line: u32,
    character: u32,
) -> Option<CompletionResponse> {
    let completer = T::construct(context, line as usize, character as usize)?;
    let completions = completer.completions();

    let completions = completions
        .into_iter()
        .filter_map(|completable| completable.completions(&completer))
        .collect::<Vec<CompletionItem>>();

    debug!(line, character, count = completions.len(), "completion");

    Some(CompletionResponse::List(CompletionList {
        is_incomplete: false,
        items: completions,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::completion_params;

    fn labels(response: CompletionResponse) -> Vec<String> {
        match response {
            CompletionResponse::List(list) => list.items.into_iter().map(|item| item.label).collect(),
            CompletionResponse::Array(items) => items.into_iter().map(|item| item.label).collect(),
        }
    }

    #[test]
    fn test_completes_on_modeline() {
        let document = Rope::from_str("// camel-k: prop\nfrom('timer:tick')\n");
        let settings = Settings::default();

        let response = get_completions(&document, &completion_params(0, 16), &settings).unwrap();

        assert_eq!(labels(response), vec!["property", "property-file"]);
    }

    #[test]
    fn test_no_response_outside_modeline() {
        let document = Rope::from_str("// camel-k: prop\nfrom('timer:tick')\n");
        let settings = Settings::default();

        assert!(get_completions(&document, &completion_params(1, 5), &settings).is_none());
    }

    #[test]
    fn test_no_response_inside_existing_option() {
        let document = Rope::from_str("// camel-k: trait=x");
        let settings = Settings::default();

        assert!(get_completions(&document, &completion_params(0, 15), &settings).is_none());
    }

    #[test]
    fn test_no_response_past_end_of_document() {
        let document = Rope::from_str("// camel-k: ");
        let settings = Settings::default();

        assert!(get_completions(&document, &completion_params(3, 0), &settings).is_none());
    }

    #[test]
    fn test_list_is_complete() {
        let document = Rope::from_str("// camel-k: ");
        let settings = Settings::default();

        let Some(CompletionResponse::List(list)) =
            get_completions(&document, &completion_params(0, 12), &settings)
        else {
            panic!("expected a completion list");
        };
        assert!(!list.is_incomplete);
        assert_eq!(list.items.len(), 12);
    }
}
