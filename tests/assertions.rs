use std::{
    any::Any,
    collections::{BTreeMap, HashMap},
    io,
};

use indexmap::IndexMap;
use must::{Sentinel, catch};

fn not_found(path: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{path}: no such file"))
}

#[test]
fn test_must_passes_on_none() {
    must::must(None::<io::Error>);
    must::must_with_context(None::<io::Error>, format_args!("open({:?})", "a"));
    must::must!(Ok::<(), io::Error>(()).err(), "unused {}", 1);
}

#[test]
fn test_must_raises_given_error() {
    let failure = catch(|| must::must(Some(not_found("a.txt")))).unwrap_err();
    assert_eq!(failure.context(), "");
    assert_eq!(failure.sentinel(), None);
    let error = failure.downcast::<io::Error>().unwrap();
    assert_eq!(error.kind(), io::ErrorKind::NotFound);
}

#[test]
fn test_must_with_context() {
    let failure = catch(|| {
        let err = Some(not_found("a.txt"));
        must::must_with_context(err, format_args!("open({:?})", "a.txt"));
    })
    .unwrap_err();
    assert_eq!(failure.context(), "open(\"a.txt\")");
    assert!(
        failure
            .to_string()
            .ends_with("| failed with: a.txt: no such file")
    );

    let failure = catch(|| {
        must::must!(Some("plain message"), "step {}", 2);
    })
    .unwrap_err();
    assert_eq!(failure.context(), "step 2");
    assert_eq!(failure.underlying().to_string(), "plain message");
}

#[test]
fn test_hold() {
    must::hold(true);
    must::hold_with_context(true, format_args!("never shown"));
    must::hold!(1 < 2);

    let failure = catch(|| must::hold(false)).unwrap_err();
    assert!(failure.is(Sentinel::ConditionNotHeld));
    assert_eq!(failure.context(), "");
    assert_eq!(
        failure.underlying().to_string(),
        "condition did not hold true"
    );

    let limit = 3;
    let failure = catch(|| {
        must::hold!(limit > 5, "limit {limit} too small");
    })
    .unwrap_err();
    assert!(failure.is(Sentinel::ConditionNotHeld));
    assert_eq!(failure.context(), "limit 3 too small");
}

#[test]
fn test_hold_with_context_formats_only_on_failure() {
    struct Loud;

    impl std::fmt::Display for Loud {
        fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            panic!("formatted a context that was never needed")
        }
    }

    must::hold_with_context(true, format_args!("{}", Loud));
    must::hold!(true, "{}", Loud);
}

#[test]
fn test_get_returns_stored_value() {
    let std_map = HashMap::from([("a", 1), ("b", 2)]);
    assert_eq!(*must::get(&std_map, "b"), 2);

    let owned_keys: HashMap<String, i32> = HashMap::from([("key".to_owned(), 7)]);
    assert_eq!(*must::get(&owned_keys, "key"), 7);

    let btree = BTreeMap::from([(1_u8, "one")]);
    assert_eq!(*must::get(&btree, &1_u8), "one");

    let index: IndexMap<&str, f64> = IndexMap::from([("half", 0.5)]);
    assert_eq!(*must::get(&index, "half"), 0.5);

    let mut brown = hashbrown::HashMap::new();
    brown.insert(5_u32, 'x');
    assert_eq!(*must::get(&brown, &5_u32), 'x');

    let list = vec!["zero", "one"];
    assert_eq!(*must::get(&list, &1), "one");
    assert_eq!(*must::get(list.as_slice(), &0), "zero");
}

#[test]
fn test_get_missing_key_raises() {
    let map = HashMap::from([("1", 1)]);
    let failure = catch(|| {
        let value = must::get_with_context(&map, "2", format_args!("m[{:?}]", "2"));
        *value
    })
    .unwrap_err();
    assert!(failure.is(Sentinel::KeyNotFound));
    assert_eq!(failure.context(), "m[\"2\"]");

    let rendered = failure.to_string();
    assert!(rendered.starts_with("must(m[\"2\"]) |"));
    assert!(rendered.ends_with("| failed with: value is not in a map"));

    let empty: BTreeMap<i32, i32> = BTreeMap::new();
    let failure = catch(|| *must::get(&empty, &0)).unwrap_err();
    assert!(failure.is(Sentinel::KeyNotFound));
    assert_eq!(failure.context(), "");

    let list = vec![1, 2, 3];
    let failure = catch(|| *must::get(&list, &3)).unwrap_err();
    assert!(failure.is(Sentinel::KeyNotFound));
}

#[test]
fn test_cast() {
    let value: Box<dyn Any> = Box::new(42_i64);
    assert_eq!(must::cast::<i64>(value), 42);

    let sendable: Box<dyn Any + Send> = Box::new(String::from("text"));
    assert_eq!(must::cast::<String>(sendable), "text");

    let failure = catch(|| {
        let value: Box<dyn Any> = Box::new(42_i64);
        must::cast::<i32>(value)
    })
    .unwrap_err();
    assert!(failure.is(Sentinel::CastFailed));
    assert_eq!(failure.underlying().to_string(), "type assertion failed");

    let failure = catch(|| {
        let value: Box<dyn Any> = Box::new("hello");
        must::cast_with_context::<String>(value, format_args!("v.({})", "String"))
    })
    .unwrap_err();
    assert!(failure.is(Sentinel::CastFailed));
    assert_eq!(failure.context(), "v.(String)");
}

#[test]
fn test_cast_ref() {
    let value = 7_u16;
    assert_eq!(*must::cast_ref::<u16>(&value), 7);

    let boxed: Box<dyn Any + Send> = Box::new(vec![1, 2]);
    assert_eq!(must::cast_ref::<Vec<i32>>(&*boxed), &[1, 2]);

    let failure = catch(|| *must::cast_ref::<u32>(&value)).unwrap_err();
    assert!(failure.is(Sentinel::CastFailed));
    assert_eq!(failure.context(), "");

    let failure = catch(|| {
        let text = must::cast_ref_with_context::<String>(&value, format_args!("value"));
        text.len()
    })
    .unwrap_err();
    assert_eq!(failure.context(), "value");
}

#[test]
fn test_sentinels_are_distinct() {
    let failure = catch(|| must::hold(false)).unwrap_err();
    assert!(failure.is(Sentinel::ConditionNotHeld));
    assert!(!failure.is(Sentinel::KeyNotFound));
    assert!(!failure.is(Sentinel::CastFailed));
}
