#[cfg(test)]
mod verify {
    use std::fs;

    use vuefmt::composing::Composer;
    use vuefmt::external;
    use vuefmt::settings::{Backend, Loader};
    use vuefmt::workspace::{self, Mode, Outcome};

    const MESSY: &str = "<template><ul><!-- list --><li :key=\"i\">a</li></ul></template>\n<script>\n  run()   \n</script>\n";

    #[test]
    fn settings_reach_the_template() {
        let config = Loader::new()
            .set_override("external.backend", "verbatim")
            .unwrap()
            .set_override("template.indent_width", 2i64)
            .unwrap()
            .set_override("template.comments", "keep")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.external.backend, Backend::Verbatim);

        let formatter = external::select(&config.external).unwrap();
        let composer = Composer::from_config(formatter.as_ref(), &config);

        let result = composer
            .compose(MESSY)
            .unwrap();

        assert_eq!(
            result,
            "<template>\n  <ul>\n    <!-- list -->\n    <li :key=\"i\">a</li>\n  </ul>\n</template>\n\n<script>\n  run()\n</script>\n"
        );
    }

    #[test]
    fn batch_over_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir
            .path()
            .join("app");
        fs::create_dir_all(root.join("components")).unwrap();
        fs::write(root.join("App.vue"), MESSY).unwrap();
        fs::write(root.join("components/Broken.vue"), "<template><p>x</p>").unwrap();
        fs::write(root.join("components/notes.txt"), "leave me").unwrap();

        let config = Loader::new()
            .set_override("external.backend", "verbatim")
            .unwrap()
            .build()
            .unwrap();
        let formatter = external::select(&config.external).unwrap();
        let composer = Composer::from_config(formatter.as_ref(), &config);

        let mut files = workspace::discover(&[root.clone()], &config.files.extensions);
        files.sort();
        assert_eq!(
            files,
            vec![root.join("App.vue"), root.join("components/Broken.vue")]
        );

        let reports = workspace::process(&files, &composer, Mode::Write);
        let summary = workspace::summarize(&reports);
        assert_eq!(summary.changed, 1);
        assert_eq!(summary.failed, 1);
        assert!(matches!(reports[1].outcome, Outcome::Failed(_)));

        assert_eq!(
            fs::read_to_string(root.join("App.vue")).unwrap(),
            "<template>\n    <ul>\n        <li :key=\"i\">a</li>\n    </ul>\n</template>\n\n<script>\n  run()\n</script>\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("components/Broken.vue")).unwrap(),
            "<template><p>x</p>"
        );

        // formatting again finds nothing to do
        let reports = workspace::process(&files[..1], &composer, Mode::Check);
        assert!(matches!(reports[0].outcome, Outcome::Unchanged));
    }
}
