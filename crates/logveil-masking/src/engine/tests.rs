use crate::dictionary::PiiKeywordDictionary;
use crate::engine::MaskingEngine;
use crate::masker::{PhoneMode, PhonePolicy};
use crate::policy::{ForbiddenKeyMode, ForbiddenKeyPolicy};
use crate::registry::MaskerRegistry;
use logveil_core::PIIType;

fn engine() -> MaskingEngine {
    MaskingEngine::with_defaults()
}

#[test]
fn masks_rrn_value() {
    assert_eq!(
        engine().mask("residentNo=950101-1234567"),
        "residentNo=950101-1******"
    );
}

#[test]
fn masks_phone_value() {
    assert_eq!(engine().mask("phone=010-1234-5678"), "phone=010-****-5678");
}

#[test]
fn masks_account_value() {
    assert_eq!(
        engine().mask("account=123-456-789012"),
        "account=123-***-***012"
    );
}

#[test]
fn masks_card_value() {
    assert_eq!(
        engine().mask("card=1234-5678-1234-5678"),
        "card=1234-56**-****-5678"
    );
}

#[test]
fn parses_colon_separator() {
    assert_eq!(
        engine().mask("mobile: 010-9999-8888"),
        "mobile: 010-****-8888"
    );
}

#[test]
fn key_matching_is_case_insensitive() {
    assert_eq!(
        engine().mask("RESIDENTNO=900101-2111111"),
        "RESIDENTNO=900101-2******"
    );
}

#[test]
fn forbidden_key_is_redacted() {
    assert_eq!(engine().mask("password=secret123"), "password=<REDACTED>");
}

#[test]
fn multiple_tokens_in_one_line() {
    assert_eq!(
        engine().mask("user=john pwd=abc123 role=admin"),
        "user=john pwd=<REDACTED> role=admin"
    );
}

#[test]
fn non_pii_keys_stay_unchanged() {
    assert_eq!(engine().mask("level=INFO msg=started"), "level=INFO msg=started");
}

#[test]
fn absent_line_stays_absent() {
    assert_eq!(engine().mask_opt(None), None);
    assert_eq!(
        engine().mask_opt(Some("phone=010-1234-5678")).as_deref(),
        Some("phone=010-****-5678")
    );
}

#[test]
fn lines_without_tokens_are_identical() {
    for line in ["", "plain prose without pairs", "2026-08-29 INFO started", "===="] {
        assert_eq!(engine().mask(line), line);
    }
}

#[test]
fn invalid_value_for_resolved_type_is_untouched() {
    // Keys resolve, values fail format validation
    assert_eq!(engine().mask("rrn=not-an-rrn"), "rrn=not-an-rrn");
    assert_eq!(engine().mask("card=1234567812345678"), "card=1234567812345678");
    assert_eq!(engine().mask("phone=hello"), "phone=hello");
}

#[test]
fn quoting_round_trips() {
    assert_eq!(
        engine().mask("phone=\"010-1234-5678\""),
        "phone=\"010-****-5678\""
    );
    assert_eq!(
        engine().mask("rrn='950101-1234567'"),
        "rrn='950101-1******'"
    );
}

#[test]
fn offsets_stay_correct_across_length_changing_replacements() {
    // <REDACTED> is longer than the original value; later spans must shift
    assert_eq!(
        engine().mask("pwd=x phone=010-1234-5678 card=1234-5678-1234-5678"),
        "pwd=<REDACTED> phone=010-****-5678 card=1234-56**-****-5678"
    );
    // Drop-value shrinks the line; later matches still land correctly
    let dropping = MaskingEngine::new(
        PiiKeywordDictionary::default_dictionary(),
        ForbiddenKeyPolicy::new(["pwd"], ForbiddenKeyMode::DropValue),
        MaskerRegistry::standard(),
    );
    assert_eq!(
        dropping.mask("pwd=verylongsecret phone=010-1234-5678"),
        "pwd= phone=010-****-5678"
    );
}

#[test]
fn drop_value_mode_empties_the_value() {
    let engine = MaskingEngine::new(
        PiiKeywordDictionary::default_dictionary(),
        ForbiddenKeyPolicy::new(["password"], ForbiddenKeyMode::DropValue),
        MaskerRegistry::standard(),
    );
    assert_eq!(engine.mask("password=secret"), "password=");
}

#[test]
fn pass_mode_leaves_forbidden_values_alone() {
    let engine = MaskingEngine::new(
        PiiKeywordDictionary::default_dictionary(),
        ForbiddenKeyPolicy::new(["password"], ForbiddenKeyMode::Pass),
        MaskerRegistry::standard(),
    );
    assert_eq!(engine.mask("password=secret"), "password=secret");
}

#[test]
fn forbidden_beats_pii_classification() {
    // "phone" resolves to a PII type, but as a forbidden key it is redacted
    let engine = MaskingEngine::new(
        PiiKeywordDictionary::default_dictionary(),
        ForbiddenKeyPolicy::new(["phone"], ForbiddenKeyMode::Redact),
        MaskerRegistry::standard(),
    );
    assert_eq!(engine.mask("phone=010-1234-5678"), "phone=<REDACTED>");
}

#[test]
fn unregistered_type_leaves_value_untouched() {
    let engine = MaskingEngine::new(
        PiiKeywordDictionary::default_dictionary(),
        ForbiddenKeyPolicy::default(),
        MaskerRegistry::new(vec![]),
    );
    assert_eq!(engine.mask("phone=010-1234-5678"), "phone=010-1234-5678");
}

#[test]
fn custom_phone_policy_flows_through() {
    let engine = MaskingEngine::new(
        PiiKeywordDictionary::default_dictionary(),
        ForbiddenKeyPolicy::default(),
        MaskerRegistry::with_phone_policy(PhonePolicy {
            mode: PhoneMode::Redact,
            ..PhonePolicy::default()
        }),
    );
    assert_eq!(
        engine.mask("phone=010-1234-5678"),
        "phone=[REDACTED_PHONE]"
    );
}

#[test]
fn adversarial_inputs_never_panic() {
    let engine = engine();
    for line in [
        "=====",
        "a=b=c=d",
        "key=\"unterminated",
        "phone=010-1234-5678card=x",
        "키=값 phone: 010-1234-5678",
        "::::",
        "x='",
        "phone=,,,",
    ] {
        let _ = engine.mask(line);
    }
}

#[test]
fn token_scan_edge_values_round_trip() {
    // Value regex stops at commas and closing brackets; surrounding text is preserved
    assert_eq!(
        engine().mask("call(phone=010-1234-5678, retry=3)"),
        "call(phone=010-****-5678, retry=3)"
    );
}

#[test]
fn dictionary_resolution_reaches_every_type() {
    let engine = engine();
    let cases = [
        ("jumin=950101-1234567", PIIType::RRN, "jumin=950101-1******"),
        ("msisdn=010-1234-5678", PIIType::Phone, "msisdn=010-****-5678"),
        ("acct=1234567", PIIType::Account, "acct=123*567"),
        ("pan=1234-5678-1234-5678", PIIType::Card, "pan=1234-56**-****-5678"),
    ];
    for (input, _ty, expected) in cases {
        assert_eq!(engine.mask(input), expected);
    }
}
