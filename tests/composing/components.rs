#[cfg(test)]
mod verify {
    use std::path::Path;
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use vuefmt::composing::Composer;
    use vuefmt::external::{CodeFormatter, FormatOptions, Language};
    use vuefmt::formatting::Settings;
    use vuefmt::language::*;

    /// Stands in for the external formatter: notes which language each
    /// call asked for and labels the output with it.
    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<Language>>,
    }

    impl Recording {
        fn languages(&self) -> Vec<Language> {
            self.calls
                .lock()
                .unwrap()
                .clone()
        }
    }

    impl CodeFormatter for Recording {
        fn format(
            &self,
            source: &str,
            language: Language,
            _options: &FormatOptions,
        ) -> Result<String, FormatterError> {
            self.calls
                .lock()
                .unwrap()
                .push(language);

            if source.contains("syntax error") {
                return Err(FormatterError::Rejected(format!(
                    "[error] {}: SyntaxError",
                    language.parser()
                )));
            }
            Ok(format!("// {}\n{}\n", language.parser(), source.trim()))
        }
    }

    fn composer(formatter: &Recording) -> Composer<'_> {
        Composer::new(
            formatter,
            FormatOptions::default(),
            Settings::default(),
            vec!["v-".to_string(), ":".to_string()],
        )
    }

    #[test]
    fn whole_component() {
        let recording = Recording::default();
        let source = r#"
<template>
      <div   id="app">
   <p   v-if="ok">Hello</p>
      </div>
</template>
<script lang="ts" setup>
const ok = true
</script>
<style lang="scss" scoped module="x">
.a { .b { color: red } }
</style>
"#;

        let result = composer(&recording)
            .compose(source)
            .unwrap();

        assert_eq!(
            result,
            r#"<template>
    <div id="app">
        <p v-if="// babelok">Hello</p>
    </div>
</template>

<script lang="ts" setup>
// typescript
const ok = true
</script>

<style lang="scss" scoped>
// scss
.a { .b { color: red } }
</style>
"#
        );

        assert_eq!(
            recording.languages(),
            vec![Language::JavaScript, Language::TypeScript, Language::Scss]
        );
    }

    #[test]
    fn several_scripts_and_styles_keep_their_order() {
        let recording = Recording::default();
        let source = "<style>b {}</style><script>two()</script><template><i>x</i></template><style>c {}</style><script>three()</script>";

        let result = composer(&recording)
            .compose(source)
            .unwrap();

        assert_eq!(
            result,
            "<template>\n    <i>x</i>\n</template>\n\n<script>\n// babel\ntwo()\n</script>\n\n<script>\n// babel\nthree()\n</script>\n\n<style>\n// css\nb {}\n</style>\n\n<style>\n// css\nc {}\n</style>\n"
        );
    }

    #[test]
    fn empty_script_omitted() {
        let recording = Recording::default();
        let result = composer(&recording)
            .compose("<template><br class=\"x\"></template>\n<script></script>\n")
            .unwrap();

        assert_eq!(result, "<template>\n    <br class=\"x\">\n</template>\n");
        assert!(recording
            .languages()
            .is_empty());
    }

    #[test]
    fn failing_style_fails_the_file() {
        let recording = Recording::default();
        let result = composer(&recording)
            .compose("<template><p>x</p></template><style>a { syntax error</style>");

        match result {
            Err(FormattingError::Formatter(block, FormatterError::Rejected(message))) => {
                assert_eq!(block, "style");
                assert_eq!(message, "[error] css: SyntaxError");
            }
            other => panic!("expected a style failure, got {:?}", other),
        }
    }

    #[test]
    fn failing_attribute_does_not_fail_the_file() {
        let recording = Recording::default();
        let result = composer(&recording)
            .compose("<template><p :a=\"syntax error\">x</p></template>")
            .unwrap();

        assert_eq!(result, "<template>\n    <p :a=\"syntax error\">x</p>\n</template>\n");
    }

    #[test]
    fn whole_files_by_extension() {
        let recording = Recording::default();
        let composer = composer(&recording);

        assert_eq!(
            composer
                .format_file(Path::new("src/store.ts"), "let a=1")
                .unwrap(),
            "// typescript\nlet a=1\n"
        );
        assert_eq!(
            composer
                .format_file(Path::new("theme.less"), "a{}")
                .unwrap(),
            "// less\na{}\n"
        );
        assert_eq!(
            composer
                .format_file(Path::new("Makefile"), "all:\n\ttrue\n")
                .unwrap(),
            "all:\n\ttrue\n"
        );
        assert_eq!(
            recording.languages(),
            vec![Language::TypeScript, Language::Less]
        );
    }
}
