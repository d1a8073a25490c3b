use ssi_mobile_crypto::{
    KeyType,
    SignatureAlgorithm,
    is_supported_key_type,
    is_supported_signature_algorithm,
    list_supported_key_types,
    list_supported_signature_algorithms,
};

use proptest::prelude::*;

// Strategy for picking a catalog key type name
fn catalog_key_types() -> impl Strategy<Value = String> {
    prop::sample::select(list_supported_key_types())
}

// Strategy for picking a catalog signature algorithm name
fn catalog_signature_algorithms() -> impl Strategy<Value = String> {
    prop::sample::select(list_supported_signature_algorithms())
}

proptest! {
    #[test]
    fn test_key_type_predicate_matches_catalog(name in any::<String>()) {
        let in_catalog = list_supported_key_types().contains(&name);
        prop_assert_eq!(is_supported_key_type(&name), in_catalog);
    }

    #[test]
    fn test_signature_predicate_matches_catalog(name in any::<String>()) {
        let in_catalog = list_supported_signature_algorithms().contains(&name);
        prop_assert_eq!(is_supported_signature_algorithm(&name), in_catalog);
    }

    #[test]
    fn test_parse_agrees_with_predicate(name in "[A-Za-z0-9-]{0,12}") {
        prop_assert_eq!(name.parse::<KeyType>().is_ok(), is_supported_key_type(&name));
        prop_assert_eq!(name.parse::<SignatureAlgorithm>().is_ok(), is_supported_signature_algorithm(&name));
    }

    #[test]
    fn test_case_changes_break_membership(name in catalog_key_types()) {
        let lowered = name.to_lowercase();
        let uppered = name.to_uppercase();
        prop_assert_eq!(is_supported_key_type(&lowered), lowered == name);
        prop_assert_eq!(is_supported_key_type(&uppered), uppered == name);
    }

    #[test]
    fn test_padding_breaks_membership(name in catalog_signature_algorithms(), pad in "[ \t\n]{1,3}") {
        let padded_front = format!("{}{}", pad, name);
        let padded_back = format!("{}{}", name, pad);
        prop_assert!(!is_supported_signature_algorithm(&padded_front));
        prop_assert!(!is_supported_signature_algorithm(&padded_back));
    }
}
