//! Integration tests for the decode path: header parsing, row coercion,
//! and record binding.

use std::collections::BTreeMap;
use std::io::Cursor;

use arff::{ArffError, AttributeType, BindError, Decoder, Value, arff_record};

const IRIS_SAMPLE: &str = "\
% 1. Title: Iris Plants Database
% 2. Sources: R.A. Fisher
@RELATION iris

@ATTRIBUTE sepallength  NUMERIC
@ATTRIBUTE sepalwidth   NUMERIC
@ATTRIBUTE class        {Iris-setosa,Iris-versicolor,Iris-virginica}

@DATA
5.1,3.5,Iris-setosa
% a comment inside the data section
4.9,3.0,Iris-setosa

7.0,3.2,Iris-versicolor
";

fn decoder(input: &str) -> Decoder<Cursor<&str>> {
    Decoder::new(Cursor::new(input)).unwrap()
}

#[test]
fn test_header_parsing() {
    let dec = decoder(IRIS_SAMPLE);
    let header = dec.header();

    assert_eq!(header.relation, "iris");
    assert_eq!(
        header.comment,
        "1. Title: Iris Plants Database\n2. Sources: R.A. Fisher"
    );
    assert_eq!(header.attributes.len(), 3);
    assert_eq!(header.attributes[0].name, "sepallength");
    assert_eq!(header.attributes[0].attr_type, AttributeType::Numeric);
    assert_eq!(header.attributes[2].attr_type, AttributeType::Nominal);
    assert_eq!(
        header.attributes[2].values,
        vec!["Iris-setosa", "Iris-versicolor", "Iris-virginica"]
    );
}

#[test]
fn test_decode_into_maps() {
    let mut dec = decoder(IRIS_SAMPLE);
    let mut rows = Vec::new();
    loop {
        let mut record = BTreeMap::new();
        if !dec.decode(&mut record).unwrap() {
            break;
        }
        rows.push(record);
    }

    // comment and blank lines inside the data section are skipped
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["sepallength"], Value::Numeric(5.1));
    assert_eq!(rows[0]["class"], Value::Nominal("Iris-setosa".into()));
    assert_eq!(rows[2]["class"], Value::Nominal("Iris-versicolor".into()));
}

#[derive(Debug, Default)]
struct Iris {
    sepal_length: f64,
    sepal_width: f64,
    class: String,
}

arff_record!(Iris {
    sepal_length => "sepallength",
    sepal_width => "sepalwidth",
    class,
});

#[test]
fn test_decode_into_struct_with_aliases() {
    let mut dec = decoder(IRIS_SAMPLE);
    let mut iris = Iris::default();
    assert!(dec.decode(&mut iris).unwrap());
    assert_eq!(iris.sepal_length, 5.1);
    assert_eq!(iris.sepal_width, 3.5);
    assert_eq!(iris.class, "Iris-setosa");
}

#[test]
fn test_decode_unbound_field() {
    #[derive(Debug, Default)]
    struct Partial {
        sepal_length: f64,
    }
    arff_record!(Partial {
        sepal_length => "sepallength",
    });

    let mut dec = decoder(IRIS_SAMPLE);
    let mut partial = Partial::default();
    let err = dec.decode(&mut partial).unwrap_err();
    assert!(matches!(
        err,
        ArffError::Bind(BindError::UnboundAttribute { .. })
    ));
}

#[test]
fn test_exhaustion_is_not_an_error() {
    let mut dec = decoder(IRIS_SAMPLE);
    let mut record = BTreeMap::new();
    while dec.decode(&mut record).unwrap() {}
    // further calls keep signalling exhaustion
    assert!(!dec.decode(&mut record).unwrap());
    assert!(dec.decode_row().unwrap().is_none());
}

#[test]
fn test_scenario_rows() {
    let input = "\
@relation scenario
@attribute a numeric
@attribute b {x,y}
@data
1.5,x
?,z
2,x,extra
2.5,y
";
    let mut dec = decoder(input);

    let row = dec.decode_row().unwrap().unwrap();
    assert_eq!(row, vec![Value::Numeric(1.5), Value::Nominal("x".into())]);

    let err = dec.decode_row().unwrap_err();
    match err {
        ArffError::NominalViolation {
            attribute, value, ..
        } => {
            assert_eq!(attribute, "b");
            assert_eq!(value, "z");
        }
        other => panic!("expected NominalViolation, got {other}"),
    }

    let err = dec.decode_row().unwrap_err();
    assert!(matches!(
        err,
        ArffError::RowArity {
            expected: 2,
            actual: 3,
            ..
        }
    ));

    // a row-phase failure leaves the decoder usable for the next call
    let row = dec.decode_row().unwrap().unwrap();
    assert_eq!(row, vec![Value::Numeric(2.5), Value::Nominal("y".into())]);
    assert!(dec.decode_row().unwrap().is_none());
}

#[test]
fn test_missing_markers() {
    let input = "\
@relation missing
@attribute a numeric
@attribute b integer
@attribute c {x,y}
@data
?,?,?
1.0,2,x
";
    let mut dec = decoder(input);
    let row = dec.decode_row().unwrap().unwrap();
    assert_eq!(row, vec![Value::Missing, Value::Missing, Value::Missing]);

    // binding missing into a map keeps the marker
    let mut dec = decoder(input);
    let mut record = BTreeMap::new();
    assert!(dec.decode(&mut record).unwrap());
    assert!(record["a"].is_missing());
    assert!(record["b"].is_missing());

    // binding missing into optional fields yields None, into f64 yields NaN
    #[derive(Debug, Default)]
    struct Sparse {
        a: f64,
        b: Option<i64>,
        c: Option<String>,
    }
    arff_record!(Sparse { a, b, c });

    let mut dec = decoder(input);
    let mut sparse = Sparse::default();
    assert!(dec.decode(&mut sparse).unwrap());
    assert!(sparse.a.is_nan());
    assert_eq!(sparse.b, None);
    assert_eq!(sparse.c, None);

    assert!(dec.decode(&mut sparse).unwrap());
    assert_eq!(sparse.a, 1.0);
    assert_eq!(sparse.b, Some(2));
    assert_eq!(sparse.c.as_deref(), Some("x"));
}

#[test]
fn test_nominal_value_with_spaces() {
    let input = "\
@relation spaced
@attribute quality { very good , poor }
@data
very good
poor
";
    let mut dec = decoder(input);
    assert_eq!(dec.header().attributes[0].values, vec!["very good", "poor"]);
    let row = dec.decode_row().unwrap().unwrap();
    assert_eq!(row, vec![Value::Nominal("very good".into())]);
}

#[test]
fn test_duplicate_attribute_names_last_write_wins() {
    let input = "\
@relation dup
@attribute a numeric
@attribute a integer
@data
1.5,2
";
    let mut dec = decoder(input);
    assert_eq!(dec.header().attributes.len(), 2);

    let mut record = BTreeMap::new();
    assert!(dec.decode(&mut record).unwrap());
    // both positions bind under the same key; the later declaration wins
    assert_eq!(record.len(), 1);
    assert_eq!(record["a"], Value::Integer(2));
}

#[test]
fn test_malformed_attribute_line() {
    let input = "\
@relation broken
@attribute a
@data
";
    let err = Decoder::new(Cursor::new(input)).unwrap_err();
    match err {
        ArffError::HeaderParse { line, .. } => assert_eq!(line, 2),
        other => panic!("expected HeaderParse, got {other}"),
    }
}

#[test]
fn test_unresolvable_attribute_type() {
    let input = "\
@relation broken
@attribute when date
@data
";
    let err = Decoder::new(Cursor::new(input)).unwrap_err();
    assert!(matches!(
        err,
        ArffError::InvalidAttributeType { line: 2, .. }
    ));
}

#[test]
fn test_truncated_header() {
    let input = "\
@relation truncated
@attribute a numeric
";
    let err = Decoder::new(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, ArffError::HeaderParse { .. }));
}

#[test]
fn test_malformed_numeric_field() {
    let input = "\
@relation nums
@attribute a numeric
@data
not-a-number
";
    let mut dec = decoder(input);
    let err = dec.decode_row().unwrap_err();
    match err {
        ArffError::ValueParse {
            line,
            expected,
            field,
        } => {
            assert_eq!(line, 4);
            assert_eq!(expected, "numeric");
            assert_eq!(field, "not-a-number");
        }
        other => panic!("expected ValueParse, got {other}"),
    }
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.arff");
    let err = Decoder::open(&path).unwrap_err();
    assert!(matches!(err, ArffError::FileNotFound { .. }));
}

#[test]
fn test_open_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("iris.arff");
    std::fs::write(&path, IRIS_SAMPLE).unwrap();

    let mut dec = Decoder::open(&path).unwrap();
    assert_eq!(dec.header().relation, "iris");
    assert_eq!(dec.rows().count(), 3);
}
