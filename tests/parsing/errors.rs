#[cfg(test)]
mod verify {
    use vuefmt::language::FormattingError;
    use vuefmt::parsing::{self, ParsingError};

    #[test]
    fn unterminated_comment() {
        let result = parsing::parse("<template>\n<!-- never closed\n</template>");
        assert_eq!(result, Err(ParsingError::UnterminatedComment(11)));
    }

    #[test]
    fn unterminated_value() {
        let result = parsing::parse("<template><p title=\"open>x</p></template>");
        assert_eq!(
            result,
            Err(ParsingError::UnterminatedValue(19, "title".to_string()))
        );
    }

    #[test]
    fn end_of_input_inside_tag() {
        let result = parsing::parse("<template><p class");
        assert_eq!(result, Err(ParsingError::UnexpectedEndOfInput(18)));
    }

    #[test]
    fn messages_carry_offsets() {
        let error = ParsingError::UnterminatedValue(19, "title".to_string());
        assert_eq!(
            error.to_string(),
            "value of attribute 'title' is missing its closing quote at offset 19"
        );

        let wrapped = FormattingError::from(error);
        assert_eq!(
            wrapped.to_string(),
            "parse error: value of attribute 'title' is missing its closing quote at offset 19"
        );
    }

    #[test]
    fn tolerated_input() {
        assert!(parsing::parse("").is_ok());
        assert!(parsing::parse("</stray> text < 3 <template></template>").is_ok());
        assert!(parsing::parse("<template><div><p>unclosed</template>").is_ok());
    }
}
