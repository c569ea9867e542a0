//! Turning formatted fragments into the final template text

use crate::formatting::*;
use crate::language::*;

/// We do the template formatting in two passes. First we convert the tree
/// into a Vec of "fragments" (Syntax tag, String pairs). Then second we
/// apply the specified renderer to each pair and tidy the lines of the
/// resulting String.
pub fn render(renderer: &impl Render, nodes: &[Node], depth: usize, template: &Template) -> String {
    // Pass 1: Format tree to tagged fragments
    let fragments = format_with_renderer(nodes, depth, template);

    // Pass 2: Render tagged fragments to final output
    let result = render_to_string(renderer, fragments);

    normalize(&result)
}

/// Render the content of a template root, its children starting at
/// `depth`. The root's own tag is not part of the output.
pub fn render_template(root: &Element, depth: usize, template: &Template) -> String {
    render(&Identity, &root.children, depth, template)
}

/// Render a list of nodes, each starting at `depth`.
pub fn render_nodes(nodes: &[Node], depth: usize, template: &Template) -> String {
    render(&Identity, nodes, depth, template)
}

fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}

/// Strip trailing whitespace from every line, drop lines that are blank,
/// and join the rest with single newlines. No newline follows the last
/// line.
pub fn normalize(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
