//! Hover provider for Camel K modelines.
//!
//! Hovering an option name inside a modeline shows the option's description
//! from the [registry](crate::options::registry):
//!
//! ```text
//! // camel-k: dependency=mvn:org.my/app:1.0
//!             ^^^^^^^^^^ "An external library that should be included. ..."
//! ```
//!
//! Hover can be disabled via [`Settings::hover`].

use ropey::Rope;
use tower_lsp::lsp_types::{
    Hover, HoverContents, MarkupContent, MarkupKind, Position, Range,
};

use crate::{
    completion::select_line, config::Settings, modeline::option_name_at, options::registry,
};

/// Generate hover content for the modeline option at the cursor position.
///
/// Returns `None` if hover is disabled, the cursor is not on an option name
/// in a modeline, or the name is not a known option.
pub fn hover(document: &Rope, position: Position, settings: &Settings) -> Option<Hover> {
    if !settings.hover {
        return None;
    }

    let line = select_line(document, position.line as usize)?;
    let span = option_name_at(&line, position.character as usize)?;
    let option = registry().get(&span.name)?;

    let mut value = format!("**{}**\n\n{}", option.name, option.description);
    if option.deprecated {
        value.push_str("\n\n*Deprecated*");
    }

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value,
        }),
        range: Some(Range {
            start: Position {
                line: position.line,
                character: span.range.start as u32,
            },
            end: Position {
                line: position.line,
                character: span.range.end as u32,
            },
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markdown(hover: &Hover) -> &str {
        match &hover.contents {
            HoverContents::Markup(markup) => &markup.value,
            other => panic!("expected markup, got {other:?}"),
        }
    }

    #[test]
    fn test_describes_option_under_cursor() {
        let document = Rope::from_str("// camel-k: trait=service.enabled=false\n");
        let hover = hover(&document, Position::new(0, 14), &Settings::default()).unwrap();

        assert_eq!(
            markdown(&hover),
            "**trait**\n\nConfigure a trait. E.g. \"trait=service.enabled=false\""
        );
        assert_eq!(hover.range, Some(Range::new(Position::new(0, 12), Position::new(0, 17))));
    }

    #[test]
    fn test_range_counts_utf16_units() {
        let document = Rope::from_str("// camel-k: label=\u{1F600} trait=x");
        let hover = hover(&document, Position::new(0, 23), &Settings::default()).unwrap();

        assert_eq!(hover.range, Some(Range::new(Position::new(0, 21), Position::new(0, 26))));
    }

    #[test]
    fn test_marks_deprecated_option() {
        let document = Rope::from_str("# camel-k: property-file=app.properties");
        let hover = hover(&document, Position::new(0, 12), &Settings::default()).unwrap();

        assert!(markdown(&hover).ends_with("*Deprecated*"));
    }

    #[test]
    fn test_unknown_option() {
        let document = Rope::from_str("// camel-k: unknown=1");
        assert!(hover(&document, Position::new(0, 14), &Settings::default()).is_none());
    }

    #[test]
    fn test_value_part() {
        let document = Rope::from_str("// camel-k: name=trait");
        assert!(hover(&document, Position::new(0, 19), &Settings::default()).is_none());
    }

    #[test]
    fn test_disabled() {
        let document = Rope::from_str("// camel-k: trait=x");
        let settings = Settings {
            hover: false,
            ..Settings::default()
        };
        assert!(hover(&document, Position::new(0, 14), &settings).is_none());
    }
}
