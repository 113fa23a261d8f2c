use line_record::{field, Delimiter, Error, SeparatorCodec};

#[derive(Default, Debug, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

fn csv_codec() -> SeparatorCodec<Person> {
    let mut codec = SeparatorCodec::new(',');
    codec.define(field!(Person, name), 0).unwrap();
    codec
        .define(field!(Person, age), 1)
        .unwrap()
        .with_read_converter(|s| s.parse::<u32>());
    codec
}

#[test]
fn test_parse_csv_line() {
    let person = csv_codec().parse("John,25").unwrap();
    assert_eq!(person.name, "John");
    assert_eq!(person.age, 25);
}

#[test]
fn test_write_appends_trailing_separator() {
    let person = Person {
        name: "Ann".to_string(),
        age: 7,
    };
    assert_eq!(csv_codec().write(&person).unwrap(), "Ann,7,");
}

#[test]
fn test_written_line_parses_back() {
    let codec = csv_codec();
    let person = Person {
        name: "Ann".to_string(),
        age: 7,
    };
    let line = codec.write(&person).unwrap();
    assert_eq!(codec.parse(line.as_str()).unwrap(), person);
}

#[test]
fn test_absent_text() {
    assert!(matches!(
        csv_codec().parse(None::<&str>),
        Err(Error::Argument { name: "text" })
    ));
    assert!(matches!(
        csv_codec().write(None::<&Person>),
        Err(Error::Argument { name: "record" })
    ));
}

#[test]
fn test_index_beyond_parts() {
    let err = csv_codec().parse("John").unwrap_err();
    match err {
        Error::Value { field, value, .. } => {
            assert_eq!(field, "age");
            assert_eq!(value, "John");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_consecutive_separators_yield_empty_fields() {
    #[derive(Default, Debug, PartialEq)]
    struct Row {
        first: String,
        middle: Option<u32>,
        last: String,
    }

    let mut codec = SeparatorCodec::<Row>::new(Delimiter::Pipe);
    codec.define(field!(Row, first), 0).unwrap();
    codec.define(field!(Row, middle), 1).unwrap();
    codec.define(field!(Row, last), 2).unwrap();

    let row = codec.parse("a||c").unwrap();
    assert_eq!(
        row,
        Row {
            first: "a".to_string(),
            middle: None,
            last: "c".to_string(),
        }
    );
    assert_eq!(codec.write(&row).unwrap(), "a||c|");
}

#[test]
fn test_fields_in_any_column_order() {
    let mut codec = SeparatorCodec::<Person>::new(Delimiter::Tab);
    codec.define(field!(Person, age), 2).unwrap();
    codec.define(field!(Person, name), 0).unwrap();

    let person = codec.parse("Bob\tignored\t41").unwrap();
    assert_eq!(person.name, "Bob");
    assert_eq!(person.age, 41);

    // Written in declaration order, not column order.
    assert_eq!(codec.write(&person).unwrap(), "41\tBob\t");
}

#[test]
fn test_validator_and_write_converter() {
    let mut codec = SeparatorCodec::<Person>::new(';');
    codec
        .define(field!(Person, name), 0)
        .unwrap()
        .with_validator(|s| !s.is_empty())
        .with_write_converter(|name: &String| name.to_uppercase());
    codec.define(field!(Person, age), 1).unwrap();

    let err = codec.parse(";30").unwrap_err();
    assert_eq!(err.field(), Some("name"));

    let person = codec.parse("eve;30").unwrap();
    assert_eq!(codec.write(&person).unwrap(), "EVE;30;");
}

#[test]
fn test_failing_write_converter_aborts() {
    let mut codec = SeparatorCodec::<Person>::new(',');
    codec.define(field!(Person, name), 0).unwrap();
    codec
        .define(field!(Person, age), 1)
        .unwrap()
        .try_with_write_converter(|age: &u32| {
            if *age > 150 {
                Err(format!("implausible age {age}"))
            } else {
                Ok(age.to_string())
            }
        });

    let person = Person {
        name: "Old".to_string(),
        age: 200,
    };
    let err = codec.write(&person).unwrap_err();
    match err {
        Error::Value { field, value, .. } => {
            assert_eq!(field, "age");
            assert_eq!(value, "200");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unresolvable_accessor() {
    use line_record::Accessor;

    let mut codec = SeparatorCodec::<Person>::new(',');
    let bogus = Accessor::new("", |p: &Person| &p.name, |p, v| p.name = v);
    let err = codec.define(bogus, 0).err().unwrap();
    assert!(matches!(err, Error::Definition { .. }));
    assert!(codec.is_empty());
}
