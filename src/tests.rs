use std::collections::HashMap;

use crate::builder::{
    Arg, AttributeBuilder, build_attributes, build_attributes_with_schema, normalize_boolean,
    normalize_integer,
};
use crate::errors::Error;
use crate::schema::{Schema, SchemaAttributeType, SchemaFlags, SchemaKind, validate};
use crate::value::Value;
use crate::{Attributes, CollectionAlias, SearchFlags, password};

fn example_schema() -> Schema {
    Schema::new(
        "org.example.Password",
        SchemaFlags::None,
        HashMap::from([
            ("username".to_string(), SchemaAttributeType::String),
            ("port".to_string(), SchemaAttributeType::Integer),
            ("ssl".to_string(), SchemaAttributeType::Boolean),
        ]),
    )
    .unwrap()
}

// ---- attribute container ----

#[test]
fn new_container_is_empty() {
    let attrs = Attributes::new();
    assert_eq!(attrs.len(), 0);
    assert!(attrs.is_empty());
    assert!(attrs.keys().is_empty());
}

#[test]
fn set_get_has_delete() {
    let mut attrs = Attributes::new();
    attrs.set("username", "john").unwrap();
    attrs.set("url", "https://example.com").unwrap();
    assert_eq!(attrs.get("username"), "john");
    assert!(attrs.has("url"));
    assert!(!attrs.has("missing"));
    assert_eq!(attrs.get("missing"), "");

    attrs.set("username", "jane").unwrap();
    assert_eq!(attrs.get("username"), "jane");
    assert_eq!(attrs.len(), 2);

    assert!(attrs.delete("url"));
    assert!(!attrs.delete("url"));
    assert_eq!(attrs.len(), 1);
}

#[test]
fn set_rejects_empty_key() {
    let mut attrs = Attributes::new();
    assert_eq!(attrs.set("", "value"), Err(Error::InvalidKey));
}

#[test]
fn set_allows_empty_value() {
    let mut attrs = Attributes::new();
    attrs.set("key", "").unwrap();
    assert!(attrs.has("key"));
    assert_eq!(attrs.get("key"), "");
}

#[test]
fn from_map_rejects_empty_map() {
    assert_eq!(
        Attributes::from_map(&HashMap::new()).unwrap_err(),
        Error::EmptyInput {
            what: "attributes map"
        }
    );
}

#[test]
fn from_map_rejects_empty_key() {
    let map = HashMap::from([("".to_string(), "value".to_string())]);
    assert_eq!(Attributes::from_map(&map).unwrap_err(), Error::InvalidKey);
}

#[test]
fn from_map_skips_empty_values() {
    let map = HashMap::from([
        ("username".to_string(), "john".to_string()),
        ("empty".to_string(), "".to_string()),
    ]);
    let attrs = Attributes::from_map(&map).unwrap();
    assert_eq!(attrs.len(), 1);
    assert!(!attrs.has("empty"));
}

#[test]
fn to_map_round_trips_modulo_empty_values() {
    let map = HashMap::from([
        ("username".to_string(), "john".to_string()),
        ("url".to_string(), "https://example.com".to_string()),
        ("port".to_string(), "8080".to_string()),
        ("dropped".to_string(), "".to_string()),
    ]);
    let attrs = Attributes::from_map(&map).unwrap();
    let mut expected = map.clone();
    expected.remove("dropped");
    assert_eq!(attrs.to_map(), expected);
}

#[test]
fn clone_is_independent() {
    let mut attrs = Attributes::new();
    attrs.set("key", "value").unwrap();
    let mut clone = attrs.try_clone().unwrap();
    assert!(attrs.equals(&clone));

    clone.set("extra", "1").unwrap();
    assert_eq!(attrs.len(), 1);
    assert_eq!(clone.len(), 2);

    attrs.set("key", "changed").unwrap();
    assert_eq!(clone.get("key"), "value");
}

#[test]
fn equals_compares_content() {
    let mut a = Attributes::new();
    a.set("k", "v").unwrap();
    let mut b = Attributes::new();
    b.set("k", "v").unwrap();
    assert!(a.equals(&b));

    b.set("k", "other").unwrap();
    assert!(!a.equals(&b));

    b.set("k", "v").unwrap();
    b.set("extra", "1").unwrap();
    assert!(!a.equals(&b));
}

#[test]
fn released_container_reads_as_empty() {
    let mut attrs = Attributes::new();
    attrs.set("k", "v").unwrap();
    attrs.release();
    attrs.release(); // idempotent

    assert_eq!(attrs.len(), 0);
    assert_eq!(attrs.get("k"), "");
    assert!(!attrs.has("k"));
    assert!(attrs.keys().is_empty());
    assert!(attrs.to_map().is_empty());

    assert_eq!(attrs.set("k", "v"), Err(Error::NotInitialized));
    assert_eq!(attrs.try_clone().unwrap_err(), Error::NotInitialized);
    assert!(attrs.equals(&Attributes::new()));
    assert!(!attrs.equals(&{
        let mut live = Attributes::new();
        live.set("k", "v").unwrap();
        live
    }));
}

#[test]
fn debug_output_hides_values() {
    let mut attrs = Attributes::new();
    attrs.set("username", "hunter2").unwrap();
    let debug = format!("{attrs:?}");
    assert!(debug.contains("username"));
    assert!(!debug.contains("hunter2"));
}

// ---- argument coercion ----

#[test]
fn build_coerces_mixed_types() {
    let attrs = build_attributes([
        Arg::from("username"),
        Arg::from("john"),
        Arg::from("port"),
        Arg::from(8080),
        Arg::from("ssl"),
        Arg::from(true),
    ])
    .unwrap();
    assert_eq!(attrs.len(), 3);
    assert_eq!(attrs.get("username"), "john");
    assert_eq!(attrs.get("port"), "8080");
    assert_eq!(attrs.get("ssl"), "true");
    validate(&example_schema(), &attrs).unwrap();
}

#[test]
fn build_renders_negative_and_unsigned_integers() {
    let attrs = build_attributes([
        Arg::from("offset"),
        Arg::from(-42i32),
        Arg::from("size"),
        Arg::from(u64::MAX),
        Arg::from("flag"),
        Arg::from(false),
    ])
    .unwrap();
    assert_eq!(attrs.get("offset"), "-42");
    assert_eq!(attrs.get("size"), u64::MAX.to_string());
    assert_eq!(attrs.get("flag"), "false");
}

#[test]
fn build_rejects_empty_args() {
    assert_eq!(
        build_attributes([]).unwrap_err(),
        Error::EmptyInput {
            what: "argument list"
        }
    );
}

#[test]
fn build_rejects_odd_args() {
    assert_eq!(
        build_attributes([Arg::from("key1")]).unwrap_err(),
        Error::OddArgumentCount { count: 1 }
    );
}

#[test]
fn lone_terminator_builds_empty_container() {
    let attrs = build_attributes([Arg::Terminator]).unwrap();
    assert!(attrs.is_empty());
}

#[test]
fn trailing_terminator_is_stripped() {
    let attrs = build_attributes([Arg::from("k"), Arg::from("v"), Arg::Terminator]).unwrap();
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs.get("k"), "v");
}

#[test]
fn terminator_at_key_position_truncates() {
    let attrs = build_attributes([
        Arg::from("a"),
        Arg::from("1"),
        Arg::Terminator,
        Arg::from("b"),
    ])
    .unwrap();
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs.get("a"), "1");
}

#[test]
fn build_rejects_non_string_key() {
    assert_eq!(
        build_attributes([Arg::from(8080), Arg::from("v")]).unwrap_err(),
        Error::KeyTypeMismatch { index: 0 }
    );
}

#[test]
fn build_rejects_terminator_value() {
    assert_eq!(
        build_attributes([
            Arg::from("k"),
            Arg::Terminator,
            Arg::from("x"),
            Arg::from("y"),
        ])
        .unwrap_err(),
        Error::UnsupportedType {
            key: "k".to_string()
        }
    );
}

#[test]
fn build_with_schema_requires_schema() {
    assert_eq!(
        build_attributes_with_schema(None, [Arg::from("k"), Arg::from("v")]).unwrap_err(),
        Error::MissingSchema
    );
}

#[test]
fn build_with_schema_validates() {
    let schema = example_schema();
    let attrs = build_attributes_with_schema(
        Some(&schema),
        [
            Arg::from("username"),
            Arg::from("john"),
            Arg::from("port"),
            Arg::from(8080),
            Arg::from("ssl"),
            Arg::from(true),
        ],
    )
    .unwrap();
    assert_eq!(attrs.len(), 3);

    let err = build_attributes_with_schema(
        Some(&schema),
        [
            Arg::from("username"),
            Arg::from("john"),
            Arg::from("port"),
            Arg::from("not-a-number"),
            Arg::from("ssl"),
            Arg::from(true),
        ],
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidAttributeValue {
            name: "port".to_string(),
            value: "not-a-number".to_string(),
            expected: SchemaAttributeType::Integer,
        }
    );
}

// ---- fluent builder ----

#[test]
fn builder_chains_and_builds() {
    let attrs = AttributeBuilder::new()
        .with_string("username", "john")
        .with_integer("port", 8080)
        .with_boolean("ssl", true)
        .build();
    assert_eq!(attrs.len(), 3);
    assert_eq!(attrs.get("port"), "8080");
    assert_eq!(attrs.get("ssl"), "true");
}

#[test]
fn builder_double_build_yields_empty() {
    let mut builder = AttributeBuilder::new();
    builder.with_string("k", "v");
    let first = builder.build();
    assert_eq!(first.len(), 1);

    let second = builder.build();
    assert!(second.is_empty());
}

#[test]
fn builder_discard_drops_accumulated_state() {
    let mut builder = AttributeBuilder::new();
    builder.with_string("k", "v");
    builder.discard();
    assert!(builder.build().is_empty());
}

#[test]
fn builder_skips_empty_keys() {
    let attrs = AttributeBuilder::new()
        .with_string("", "ignored")
        .with_string("k", "v")
        .build();
    assert_eq!(attrs.len(), 1);
}

// ---- normalization ----

#[test]
fn normalize_boolean_literals() {
    for truthy in ["true", "TRUE", "True", "tRuE", "1"] {
        assert_eq!(normalize_boolean(truthy).unwrap(), "true");
    }
    for falsy in ["false", "FALSE", "False", "0"] {
        assert_eq!(normalize_boolean(falsy).unwrap(), "false");
    }
    assert_eq!(normalize_boolean(true).unwrap(), "true");
    assert_eq!(normalize_boolean(false).unwrap(), "false");
    assert_eq!(normalize_boolean(0).unwrap(), "false");
    assert_eq!(normalize_boolean(7).unwrap(), "true");
    assert_eq!(normalize_boolean(-1).unwrap(), "true");
    assert_eq!(normalize_boolean(0u64).unwrap(), "false");

    assert_eq!(
        normalize_boolean("yes").unwrap_err(),
        Error::InvalidBooleanLiteral("yes".to_string())
    );
}

#[test]
fn normalize_boolean_is_idempotent() {
    let once = normalize_boolean("TRUE").unwrap();
    assert_eq!(normalize_boolean(once).unwrap(), once);
}

#[test]
fn normalize_integer_values() {
    assert_eq!(normalize_integer(42).unwrap(), "42");
    assert_eq!(normalize_integer(-42i64).unwrap(), "-42");
    assert_eq!(normalize_integer("-42").unwrap(), "-42");
    assert_eq!(normalize_integer(8080u16).unwrap(), "8080");

    assert_eq!(
        normalize_integer("").unwrap_err(),
        Error::InvalidIntegerLiteral(String::new())
    );
    assert_eq!(
        normalize_integer("abc").unwrap_err(),
        Error::InvalidIntegerLiteral("abc".to_string())
    );
    assert_eq!(
        normalize_integer("12abc").unwrap_err(),
        Error::InvalidIntegerLiteral("12abc".to_string())
    );
    assert!(normalize_integer(true).is_err());
}

// ---- schema ----

#[test]
fn schema_rejects_empty_name() {
    let attrs = HashMap::from([("key".to_string(), SchemaAttributeType::String)]);
    assert_eq!(
        Schema::new("", SchemaFlags::None, attrs).unwrap_err(),
        Error::EmptyName
    );
}

#[test]
fn schema_rejects_empty_attribute_set() {
    assert_eq!(
        Schema::new("org.example.Schema", SchemaFlags::None, HashMap::new()).unwrap_err(),
        Error::EmptyAttributeSet
    );
}

#[test]
fn schema_enforces_attribute_cap() {
    let build = |count: usize| {
        let attrs = (0..count)
            .map(|i| (format!("attr{i}"), SchemaAttributeType::String))
            .collect();
        Schema::new("org.example.Schema", SchemaFlags::None, attrs)
    };
    assert!(build(32).is_ok());
    assert_eq!(
        build(33).unwrap_err(),
        Error::TooManyAttributes { count: 33 }
    );
}

#[test]
fn schema_accessors() {
    let schema = example_schema();
    assert_eq!(schema.name(), "org.example.Password");
    assert_eq!(schema.flags(), SchemaFlags::None);
    assert_eq!(schema.attribute_types().len(), 3);
    assert_eq!(
        schema.attribute_types().get("port"),
        Some(&SchemaAttributeType::Integer)
    );
    assert!(!schema.is_borrowed());
}

#[test]
fn schema_retain_and_release() {
    let schema = example_schema();
    let retained = schema.retain();
    schema.release();
    assert_eq!(retained.name(), "org.example.Password");
}

#[test]
fn type_and_flag_display() {
    assert_eq!(SchemaAttributeType::String.to_string(), "STRING");
    assert_eq!(SchemaAttributeType::Integer.to_string(), "INTEGER");
    assert_eq!(SchemaAttributeType::Boolean.to_string(), "BOOLEAN");
    assert_eq!(SchemaFlags::None.to_string(), "NONE");
    assert_eq!(SchemaFlags::DontMatchName.to_string(), "DONT_MATCH_NAME");
}

#[test]
fn note_schema_is_borrowed_and_attribute_free() {
    let note = Schema::note();
    assert_eq!(note.name(), "org.gnome.keyring.Note");
    assert!(note.attribute_types().is_empty());
    assert!(note.is_borrowed());
    note.release(); // no-op on a borrowed schema

    let again = Schema::predefined(SchemaKind::Note);
    assert_eq!(again.name(), "org.gnome.keyring.Note");
}

#[test]
fn compat_network_schema_matches_legacy_layout() {
    let schema = Schema::compat_network();
    assert_eq!(schema.name(), "org.gnome.keyring.NetworkPassword");
    assert!(schema.is_borrowed());

    let types = schema.attribute_types();
    assert_eq!(types.len(), 7);
    assert_eq!(types.get("port"), Some(&SchemaAttributeType::Integer));
    for key in ["user", "domain", "object", "protocol", "server", "authtype"] {
        assert_eq!(types.get(key), Some(&SchemaAttributeType::String));
    }
}

// ---- validation ----

#[test]
fn validate_rejects_undeclared_attribute() {
    let mut attrs = Attributes::new();
    attrs.set("username", "john").unwrap();
    attrs.set("port", "8080").unwrap();
    attrs.set("ssl", "true").unwrap();
    attrs.set("extra", "x").unwrap();
    assert_eq!(
        validate(&example_schema(), &attrs).unwrap_err(),
        Error::UndeclaredAttribute {
            name: "extra".to_string()
        }
    );
}

#[test]
fn validate_rejects_missing_attribute() {
    let mut attrs = Attributes::new();
    attrs.set("username", "john").unwrap();
    attrs.set("ssl", "true").unwrap();
    assert_eq!(
        validate(&example_schema(), &attrs).unwrap_err(),
        Error::MissingRequiredAttribute {
            name: "port".to_string()
        }
    );
}

#[test]
fn validate_rejects_malformed_boolean() {
    let mut attrs = Attributes::new();
    attrs.set("username", "john").unwrap();
    attrs.set("port", "8080").unwrap();
    attrs.set("ssl", "yes").unwrap();
    assert_eq!(
        validate(&example_schema(), &attrs).unwrap_err(),
        Error::InvalidAttributeValue {
            name: "ssl".to_string(),
            value: "yes".to_string(),
            expected: SchemaAttributeType::Boolean,
        }
    );
}

#[test]
fn validate_rejects_malformed_integer() {
    let mut attrs = Attributes::new();
    attrs.set("username", "john").unwrap();
    attrs.set("port", "not-a-number").unwrap();
    attrs.set("ssl", "false").unwrap();
    assert_eq!(
        validate(&example_schema(), &attrs).unwrap_err(),
        Error::InvalidAttributeValue {
            name: "port".to_string(),
            value: "not-a-number".to_string(),
            expected: SchemaAttributeType::Integer,
        }
    );
}

#[test]
fn validate_integer_encodings() {
    let schema = Schema::new(
        "org.example.Int",
        SchemaFlags::None,
        HashMap::from([("n".to_string(), SchemaAttributeType::Integer)]),
    )
    .unwrap();
    for ok in ["0", "8080", "-42", "007"] {
        let mut attrs = Attributes::new();
        attrs.set("n", ok).unwrap();
        assert!(validate(&schema, &attrs).is_ok(), "{ok:?} should conform");
    }
    for bad in ["", "-", "4.2", " 42", "42 ", "0x10"] {
        let mut attrs = Attributes::new();
        attrs.set("n", bad).unwrap();
        assert!(validate(&schema, &attrs).is_err(), "{bad:?} should not conform");
    }
}

#[test]
fn validate_accepts_conforming_attributes() {
    let mut attrs = Attributes::new();
    attrs.set("username", "john").unwrap();
    attrs.set("port", "-8080").unwrap();
    attrs.set("ssl", "false").unwrap();
    validate(&example_schema(), &attrs).unwrap();
    attrs.validate(&example_schema()).unwrap();
}

#[test]
fn validate_note_schema() {
    let note = Schema::note();
    validate(&note, &Attributes::new()).unwrap();

    let mut attrs = Attributes::new();
    attrs.set("anything", "x").unwrap();
    assert_eq!(
        validate(&note, &attrs).unwrap_err(),
        Error::UndeclaredAttribute {
            name: "anything".to_string()
        }
    );
}

#[test]
fn validate_released_container() {
    let mut attrs = Attributes::new();
    attrs.release();
    assert_eq!(
        validate(&example_schema(), &attrs).unwrap_err(),
        Error::NotInitialized
    );
}

// ---- values ----

#[test]
fn value_from_text() {
    let value = Value::new("hunter2", "").unwrap();
    assert_eq!(value.content_type().unwrap(), "text/plain");
    assert_eq!(value.get().unwrap(), b"hunter2");
    assert_eq!(value.text().unwrap(), Some("hunter2"));
    assert_eq!(value.len(), 7);
}

#[test]
fn value_rejects_empty_payloads() {
    assert_eq!(
        Value::new("", "text/plain").unwrap_err(),
        Error::EmptyInput { what: "secret" }
    );
    assert_eq!(
        Value::from_bytes(&[], "").unwrap_err(),
        Error::EmptyInput {
            what: "secret data"
        }
    );
}

#[test]
fn binary_value_has_no_text() {
    let value = Value::from_bytes(&[0x01, 0x02, 0x03], "").unwrap();
    assert_eq!(value.content_type().unwrap(), "application/octet-stream");
    assert_eq!(value.text().unwrap(), None);
}

#[test]
fn text_value_with_invalid_utf8_has_no_text() {
    let value = Value::from_bytes(&[0xff, 0xfe], "text/plain").unwrap();
    assert_eq!(value.text().unwrap(), None);
}

#[test]
fn into_password_consumes_value() {
    let value = Value::new("hunter2", "text/plain").unwrap();
    assert_eq!(value.into_password(), "hunter2");

    let mut released = Value::new("hunter2", "").unwrap();
    released.release();
    assert_eq!(released.into_password(), "");
}

#[test]
fn released_value_reports_not_initialized() {
    let mut value = Value::new("hunter2", "").unwrap();
    let copy = value.retain();
    value.release();
    value.release(); // idempotent

    assert_eq!(value.get().unwrap_err(), Error::NotInitialized);
    assert_eq!(value.content_type().unwrap_err(), Error::NotInitialized);
    assert_eq!(value.text().unwrap_err(), Error::NotInitialized);
    assert_eq!(value.len(), 0);

    // the retained copy is independent of the released original
    assert_eq!(copy.get().unwrap(), b"hunter2");
}

#[test]
fn value_debug_hides_secret() {
    let value = Value::new("hunter2", "").unwrap();
    let debug = format!("{value:?}");
    assert!(debug.contains("text/plain"));
    assert!(!debug.contains("hunter2"));
}

// ---- live service round trips ----
//
// These exercise a real Secret Service daemon and are skipped by default;
// run them with `cargo test -- --ignored` on a desktop (or a CI box with
// an unlocked gnome-keyring).

fn unique_attrs(marker: u64) -> Attributes {
    build_attributes([
        Arg::from("username"),
        Arg::from(format!("user-{marker}")),
        Arg::from("port"),
        Arg::from(4433),
        Arg::from("ssl"),
        Arg::from(true),
    ])
    .unwrap()
}

#[test]
#[ignore = "requires a running Secret Service daemon"]
fn store_lookup_clear_round_trip() {
    let schema = example_schema();
    let attrs = unique_attrs(fastrand::u64(..));

    password::store(
        Some(&schema),
        &attrs,
        CollectionAlias::Default,
        "secret-password-store test",
        "correct horse battery staple",
    )
    .unwrap();

    let found = password::lookup(Some(&schema), &attrs).unwrap();
    assert_eq!(found.as_deref(), Some("correct horse battery staple"));

    assert!(password::clear(Some(&schema), &attrs).unwrap());
    assert_eq!(password::lookup(Some(&schema), &attrs).unwrap(), None);
    assert!(!password::clear(Some(&schema), &attrs).unwrap());
}

#[test]
#[ignore = "requires a running Secret Service daemon"]
fn search_returns_item_metadata() {
    let schema = example_schema();
    let attrs = unique_attrs(fastrand::u64(..));
    let label = format!("search test {}", fastrand::u64(..));

    password::store(
        Some(&schema),
        &attrs,
        CollectionAlias::Default,
        &label,
        "hunter2",
    )
    .unwrap();

    let items = password::search(Some(&schema), &attrs, SearchFlags::ALL).unwrap();
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.label(), label);
    assert_eq!(item.attributes().get("username"), Some(&attrs.get("username").to_string()));
    assert!(item.created() > 0);

    let secret = item.secret().unwrap();
    assert_eq!(secret.into_password(), "hunter2");

    assert!(password::clear(Some(&schema), &attrs).unwrap());
}

#[test]
#[ignore = "requires a running Secret Service daemon"]
fn store_binary_round_trip() {
    let schema = example_schema();
    let attrs = unique_attrs(fastrand::u64(..));
    let value = Value::from_bytes(&[0xde, 0xad, 0xbe, 0xef], "application/octet-stream").unwrap();

    password::store_binary(
        Some(&schema),
        &attrs,
        CollectionAlias::Default,
        "binary test",
        &value,
    )
    .unwrap();

    let items = password::search(
        Some(&schema),
        &attrs,
        SearchFlags {
            load_secrets: true,
            ..SearchFlags::ALL
        },
    )
    .unwrap();
    assert_eq!(items.len(), 1);
    let secret = items[0].secret().unwrap();
    assert_eq!(secret.get().unwrap(), &[0xde, 0xad, 0xbe, 0xef]);

    assert!(password::clear(Some(&schema), &attrs).unwrap());
}

// ---- operation argument checks (no daemon needed) ----

#[test]
fn store_rejects_empty_password_and_label() {
    let attrs = {
        let mut a = Attributes::new();
        a.set("k", "v").unwrap();
        a
    };
    assert_eq!(
        password::store(None, &attrs, CollectionAlias::Default, "label", ""),
        Err(Error::EmptyInput { what: "password" })
    );
    assert_eq!(
        password::store(None, &attrs, CollectionAlias::Default, "", "pw"),
        Err(Error::EmptyInput { what: "label" })
    );
}

#[test]
fn store_binary_rejects_released_value() {
    let attrs = {
        let mut a = Attributes::new();
        a.set("k", "v").unwrap();
        a
    };
    let mut value = Value::new("pw", "").unwrap();
    value.release();
    assert_eq!(
        password::store_binary(None, &attrs, CollectionAlias::Default, "label", &value),
        Err(Error::NotInitialized)
    );
}

#[test]
fn operations_reject_released_attributes() {
    let mut attrs = Attributes::new();
    attrs.release();
    assert_eq!(
        password::lookup(None, &attrs).unwrap_err(),
        Error::NotInitialized
    );
    assert_eq!(
        password::clear(None, &attrs).unwrap_err(),
        Error::NotInitialized
    );
}

#[test]
fn collection_alias_strings() {
    assert_eq!(CollectionAlias::Default.as_str(), "default");
    assert_eq!(CollectionAlias::Session.as_str(), "session");
    assert_eq!(CollectionAlias::default(), CollectionAlias::Default);
}
