use super::*;

#[test]
fn default_config_is_valid() {
    let config = LexerConfig::default();
    assert!(!config.check_indentation_consistency);
    assert_eq!(config.tab_width, None);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn builder_sets_fields() {
    let config = LexerConfig::new()
        .with_indentation_check(true)
        .with_tab_width(4)
        .with_custom_keyword("macro");
    assert!(config.check_indentation_consistency);
    assert_eq!(config.tab_width, Some(4));
    assert!(config.is_custom_keyword("macro"));
    assert!(!config.is_custom_keyword("micro"));
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn zero_tab_width_is_rejected() {
    let config = LexerConfig::new().with_tab_width(0);
    assert_eq!(config.validate(), Err(ConfigError::ZeroTabWidth));
}

#[test]
fn custom_keyword_must_be_a_word() {
    for word in ["", "1abc", "a b", "dash-"] {
        let config = LexerConfig::new().with_custom_keyword(word);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidCustomKeyword(word.to_string())),
            "{word:?}"
        );
    }
    let kebab = LexerConfig::new().with_custom_keyword("on-change");
    assert_eq!(kebab.validate(), Ok(()));
}

#[test]
fn custom_keyword_cannot_shadow_builtins() {
    for word in ["fn", "and", "not"] {
        let config = LexerConfig::new().with_custom_keyword(word);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ShadowedKeyword(word.to_string()))
        );
    }
}

#[test]
fn errors_render() {
    assert_eq!(
        ConfigError::ShadowedKeyword("fn".into()).to_string(),
        "custom keyword `fn` shadows a built-in word"
    );
}
