//! Two-pass template renderer.
//!
//! Rendering runs two flat passes over the template text:
//!
//! 1. **Block expansion**: every `{{#each name}}...{{/each}}` span is replaced
//!    by one copy of its body per list item, with `{{this}}` standing for the
//!    item.
//! 2. **Scalar substitution**: every `{{key}}` whose key holds a text value is
//!    replaced by that value.
//!
//! List items inserted during the first pass are kept as opaque segments, so
//! the second pass never looks inside them. A list item containing `{{role}}`
//! therefore reaches the output verbatim.
//!
//! # Error Handling
//!
//! The renderer is total: any template and context produce a string.
//! Unknown scalar placeholders pass through untouched, unknown blocks expand
//! to nothing, and malformed block markers stay as literal text.
//!
//! # Limitations
//!
//! - Blocks do not nest. An inner `{{#each}}` is not resolved recursively;
//!   the outer block ends at the first `{{/each}}`.
//! - Scalar placeholders must not contain whitespace: `{{ role }}` is not
//!   the same placeholder as `{{role}}` and is left as is.
//! - Substituted scalar values are not rescanned. With `a = "{{b}}"` and
//!   `b = "B"`, `{{a}} {{b}}` renders as `{{b}} B`, not `B B`.

use super::context::{Context, Value};
use regex::Regex;
use std::sync::LazyLock;

/// Placeholder for the current list item inside a block body.
const ITEM_PLACEHOLDER: &str = "{{this}}";

static EACH_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{#each\s+([^}]+)\}\}(.*?)\{\{/each\}\}").expect("Invalid each-block regex")
});

/// A piece of the partially rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    /// Template text, still eligible for scalar substitution. Adjacent
    /// template pieces are joined, so a placeholder split by a block edge
    /// is whole again here.
    Template(String),
    /// A list item inserted by block expansion, emitted as is.
    Item(&'a str),
}

/// Collects segments, joining consecutive template text.
#[derive(Debug, Default)]
struct Segments<'a> {
    done: Vec<Segment<'a>>,
    pending: String,
}

impl<'a> Segments<'a> {
    fn push_text(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn push_item(&mut self, item: &'a str) {
        self.flush();
        self.done.push(Segment::Item(item));
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            self.done
                .push(Segment::Template(std::mem::take(&mut self.pending)));
        }
    }

    fn finish(mut self) -> Vec<Segment<'a>> {
        self.flush();
        self.done
    }
}

/// Render a template against a context.
///
/// # Arguments
///
/// * `template` - Template text with `{{name}}` and `{{#each name}}` placeholders
/// * `context` - Field values keyed by placeholder name
///
/// # Examples
///
/// ```text
/// render("{{role}}:{{#each skills}}{{this}};{{/each}}", ctx)
///   with role = "Expert", skills = ["a", "b"]
///   => "Expert:a;b;"
/// ```
pub fn render(template: &str, context: &Context) -> String {
    let segments = expand_blocks(template, context);
    substitute_scalars(&segments, context, template.len())
}

/// First pass: split the template into segments, expanding each-blocks.
fn expand_blocks<'a>(template: &str, context: &'a Context) -> Vec<Segment<'a>> {
    let mut segments = Segments::default();
    let mut last = 0;
    let mut blocks = 0usize;

    for caps in EACH_BLOCK_REGEX.captures_iter(template) {
        let (Some(whole), Some(name), Some(body)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        blocks += 1;

        segments.push_text(&template[last..whole.start()]);
        last = whole.end();

        let items: &[String] = match context.get(name.as_str().trim()) {
            Some(Value::List(items)) => items.as_slice(),
            _ => &[],
        };
        let body = body.as_str();

        for item in items {
            let mut pieces = body.split(ITEM_PLACEHOLDER);
            if let Some(first) = pieces.next() {
                segments.push_text(first);
            }
            for piece in pieces {
                segments.push_item(item);
                segments.push_text(piece);
            }
        }
    }

    segments.push_text(&template[last..]);
    let segments = segments.finish();

    tracing::trace!(
        blocks,
        fields = context.len(),
        empty_context = context.is_empty(),
        segments = segments.len(),
        "expanded each-blocks"
    );
    segments
}

/// Second pass: replace `{{key}}` with text values inside template segments.
fn substitute_scalars(segments: &[Segment<'_>], context: &Context, capacity: usize) -> String {
    let mut result = String::with_capacity(capacity);

    for segment in segments {
        match segment {
            Segment::Item(item) => result.push_str(item),
            Segment::Template(text) => substitute_into(&mut result, text, context),
        }
    }

    result
}

/// Copy `text` into `out`, replacing each known scalar placeholder once.
fn substitute_into(out: &mut String, text: &str, context: &Context) {
    let mut rest = text;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let replacement = after_open.find("}}").and_then(|close| {
            match context.get(&after_open[..close]) {
                Some(Value::Text(value)) => Some((value.as_str(), close)),
                _ => None,
            }
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after_open[close + 2..];
            }
            None => {
                // Not a known placeholder: keep one brace and rescan, so
                // `{{{{role}}` still finds the inner `{{role}}`.
                out.push('{');
                rest = &rest[open + 1..];
            }
        }
    }

    out.push_str(rest);
}
