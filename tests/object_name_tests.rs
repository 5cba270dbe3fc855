use std::collections::HashSet;

use mgmt_registrar::errors::RegistrarError;
use mgmt_registrar::management::ObjectName;

fn parse(raw: &str) -> Result<ObjectName, RegistrarError> {
    raw.parse()
}

fn assert_malformed(raw: &str) {
    match parse(raw) {
        Err(RegistrarError::MalformedName(_)) => {}
        other => panic!("expected {:?} to be malformed, got {:?}", raw, other),
    }
}

#[cfg(test)]
mod valid_names {
    use super::*;

    #[test]
    fn test_multiple_properties() {
        let name = parse("org.test:type=Thing,name=foo").unwrap();
        let props: Vec<_> = name.key_properties().collect();
        assert_eq!(props, vec![("type", "Thing"), ("name", "foo")]);
    }

    #[test]
    fn test_empty_domain() {
        let name = parse(":type=Default").unwrap();
        assert_eq!(name.domain(), "");
        assert_eq!(name.key_property("type"), Some("Default"));
    }

    #[test]
    fn test_quoted_value_with_separators() {
        let name = parse("app:path=\"/a,b=c:d\",type=Route").unwrap();
        assert_eq!(name.key_property("path"), Some("\"/a,b=c:d\""));
        assert_eq!(name.key_property("type"), Some("Route"));
    }

    #[test]
    fn test_quoted_value_with_escapes() {
        let name = parse(r#"app:label="say \"hi\" \* \? \\ \n""#).unwrap();
        assert!(name.key_property("label").is_some());
    }

    #[test]
    fn test_empty_quoted_value() {
        assert!(parse("app:name=\"\"").is_ok());
    }

    #[test]
    fn test_domain_may_contain_spaces_and_symbols() {
        let name = parse("my app!:type=Thing").unwrap();
        assert_eq!(name.domain(), "my app!");
    }

    #[test]
    fn test_new_matches_parse() {
        let built = ObjectName::new("org.test", &[("type", "Thing"), ("name", "foo")]).unwrap();
        assert_eq!(built, parse("org.test:type=Thing,name=foo").unwrap());
    }

    #[test]
    fn test_new_with_quoted_value() {
        let value = ObjectName::quote("a=b, c");
        let name = ObjectName::new("app", &[("label", value.as_str())]).unwrap();
        assert_eq!(name.key_property("label"), Some("\"a=b, c\""));
    }
}

#[cfg(test)]
mod malformed_names {
    use super::*;

    #[test]
    fn test_missing_colon() {
        assert_malformed("not a valid!!name[");
        assert_malformed("org.test");
    }

    #[test]
    fn test_empty_property_list() {
        assert_malformed("org.test:");
    }

    #[test]
    fn test_property_without_equals() {
        assert_malformed("org.test:type");
    }

    #[test]
    fn test_empty_key_or_value() {
        assert_malformed("org.test:=Thing");
        assert_malformed("org.test:type=");
    }

    #[test]
    fn test_trailing_comma() {
        assert_malformed("org.test:type=Thing,");
    }

    #[test]
    fn test_duplicate_key() {
        assert_malformed("org.test:type=Thing,type=Other");
    }

    #[test]
    fn test_wildcards_rejected() {
        assert_malformed("org.*:type=Thing");
        assert_malformed("org.test:type=Th?ng");
        assert_malformed("org.test:type=Thing,*");
    }

    #[test]
    fn test_forbidden_characters_in_value() {
        assert_malformed("org.test:type=a:b");
        assert_malformed("org.test:type=a=b");
        assert_malformed("org.test:type=a\"b");
        assert_malformed("org.test:type=a\nb");
    }

    #[test]
    fn test_newline_in_domain() {
        assert_malformed("org\ntest:type=Thing");
    }

    #[test]
    fn test_bad_quoted_values() {
        assert_malformed("org.test:type=\"unterminated");
        assert_malformed("org.test:type=\"bad \\t escape\"");
        assert_malformed("org.test:type=\"ok\"trailing");
        assert_malformed("org.test:type=\"raw\nnewline\"");
    }

    #[test]
    fn test_new_rejects_value_with_extra_properties() {
        let result = ObjectName::new("app", &[("name", "x,type=Injected")]);
        assert!(matches!(result, Err(RegistrarError::MalformedName(_))));
    }

    #[test]
    fn test_new_rejects_bad_parts() {
        let none: &[(&str, &str)] = &[];
        assert!(ObjectName::new("app", none).is_err());
        assert!(ObjectName::new("app:x", &[("type", "Thing")]).is_err());
        assert!(ObjectName::new("app", &[("ty=pe", "Thing")]).is_err());
        assert!(ObjectName::new("app", &[("type", "")]).is_err());
        assert!(ObjectName::new("app", &[("type", "a"), ("type", "b")]).is_err());
        assert!(ObjectName::new("app", &[("path", "\"a\",b=c")]).is_err());
        assert!(ObjectName::new("app", &[("path", "\"unterminated")]).is_err());
    }

    #[test]
    fn test_error_code() {
        let err = parse("nope").unwrap_err();
        assert_eq!(err.code(), "E001");
    }
}

#[cfg(test)]
mod equality {
    use super::*;

    #[test]
    fn test_property_order_is_irrelevant() {
        let a = parse("org.test:type=Thing,name=foo").unwrap();
        let b = parse("org.test:name=foo,type=Thing").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.canonical_name(), b.canonical_name());
        assert_ne!(a.to_string(), b.to_string());

        let set: HashSet<ObjectName> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_different_values_differ() {
        let a = parse("org.test:type=Thing,name=foo").unwrap();
        let b = parse("org.test:type=Thing,name=bar").unwrap();
        assert_ne!(a, b);
        assert!(b < a);
    }

    #[test]
    fn test_serializes_as_canonical_string() {
        let name = parse("org.test:type=Thing,name=foo").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"org.test:name=foo,type=Thing\"");
    }
}
