#[cfg(test)]
mod verify {
    use pretty_assertions::assert_eq;

    use vuefmt::external::{CodeFormatter, FormatOptions, Language, Verbatim};
    use vuefmt::formatting::*;
    use vuefmt::language::*;
    use vuefmt::parsing;

    /// Accepts only input with balanced parentheses, and returns it trimmed.
    struct Strict;

    impl CodeFormatter for Strict {
        fn format(
            &self,
            source: &str,
            _language: Language,
            _options: &FormatOptions,
        ) -> Result<String, FormatterError> {
            let opened = source
                .matches('(')
                .count();
            let closed = source
                .matches(')')
                .count();
            if opened != closed {
                return Err(FormatterError::Rejected("unbalanced".to_string()));
            }
            Ok(format!("{}\n", source.trim()))
        }
    }

    fn template(formatter: &dyn CodeFormatter, comments: CommentPolicy) -> Template<'_> {
        Template {
            attributes: AttributeRenderer::new(
                formatter,
                FormatOptions::default(),
                &["v-".to_string(), ":".to_string()],
            ),
            settings: Settings {
                indent_width: 4,
                comments,
            },
        }
    }

    fn root(source: &str) -> Element {
        let document = parsing::parse(source).unwrap();
        document
            .find("template")
            .and_then(|section| section.node.as_element())
            .cloned()
            .unwrap()
    }

    fn format(source: &str) -> String {
        let verbatim = Verbatim;
        render_template(&root(source), 0, &template(&verbatim, CommentPolicy::Drop))
    }

    #[test]
    fn nested_element() {
        assert_eq!(
            format(r#"<template><div class="a"  ><span>Hi</span></div></template>"#),
            "<div class=\"a\">\n    <span>Hi</span>\n</div>"
        );
    }

    #[test]
    fn void_element_alone() {
        assert_eq!(
            format(r#"<template><br class="x"></template>"#),
            "<br class=\"x\">"
        );
    }

    #[test]
    fn starting_depth() {
        let verbatim = Verbatim;
        let result = render_template(
            &root("<template><ul><li>one</li></ul></template>"),
            1,
            &template(&verbatim, CommentPolicy::Drop),
        );
        assert_eq!(result, "    <ul>\n        <li>one</li>\n    </ul>");
    }

    #[test]
    fn void_elements_never_close() {
        let verbatim = Verbatim;
        let template = template(&verbatim, CommentPolicy::Drop);

        for name in VOID_ELEMENTS {
            let element = Element::new(name)
                .with_attribute("id", "v")
                .with_child(Node::Tag(Element::new("span")))
                .with_child(Node::Text("lost".to_string()));

            let result = render_nodes(&[Node::Tag(element)], 0, &template);

            assert_eq!(result, format!("<{} id=\"v\">", name));
        }
    }

    #[test]
    fn text_only_children_stay_on_one_line() {
        assert_eq!(
            format("<template><p>\n   some text\n</p></template>"),
            "<p>some text</p>"
        );
        assert_eq!(
            format("<template><p>   </p></template>"),
            "<p></p>"
        );
    }

    #[test]
    fn element_children_go_one_level_deeper() {
        assert_eq!(
            format("<template><div><p>a</p>loose<p>b</p></div></template>"),
            "<div>\n    <p>a</p>\n    loose\n    <p>b</p>\n</div>"
        );
    }

    #[test]
    fn comments_dropped() {
        let result = format("<template><div><!-- secret note --><p>x</p></div><!-- another --></template>");
        assert!(!result.contains("secret note"));
        assert!(!result.contains("another"));
        assert_eq!(result, "<div>\n    <p>x</p>\n</div>");
    }

    #[test]
    fn comments_kept_on_request() {
        let verbatim = Verbatim;
        let result = render_template(
            &root("<template><div>\n<!--\n  note\n-->\n<p>x</p></div></template>"),
            0,
            &template(&verbatim, CommentPolicy::Keep),
        );
        assert_eq!(result, "<div>\n    <!-- note -->\n    <p>x</p>\n</div>");

        let result = render_template(
            &root("<template><span>a<!-- b --></span></template>"),
            0,
            &template(&verbatim, CommentPolicy::Keep),
        );
        assert_eq!(result, "<span>\n    a\n    <!-- b -->\n</span>");
    }

    #[test]
    fn unparseable_binding_kept_raw() {
        let strict = Strict;
        let result = render_template(
            &root(r#"<template><a :title="open(  " v-on:click=" go( 1 ) ">x</a></template>"#),
            0,
            &template(&strict, CommentPolicy::Drop),
        );
        assert_eq!(result, "<a :title=\"open(  \" v-on:click=\"go( 1 )\">x</a>");
    }

    #[test]
    fn attribute_order_preserved() {
        assert_eq!(
            format(r#"<template><input zeta="1" alpha Beta='2' :c="d"></template>"#),
            "<input zeta=\"1\" alpha Beta=\"2\" :c=\"d\">"
        );
    }

    #[test]
    fn quotes_inside_values() {
        assert_eq!(
            format(r#"<template><p :title='say("hi")'>x</p></template>"#),
            "<p :title='say(\"hi\")'>x</p>"
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let source = r#"<template>
            <section id="main" :class="{on: active}">
                <h1 style="color: red">Title</h1>
                <ul>
                    <li v-for="item in items" :key="item.id">{{ item.name }}</li>
                </ul>
                <img src="a.png"><input disabled>
                <my-widget/>
                text after
            </section>
        </template>"#;

        let first = format(source);
        let second = format(&format!("<template>{}</template>", first));

        assert_eq!(first, second);
    }
}
