use arrayvec::ArrayVec;

use crate::input::{ErrorKind, Input, Split, W};

#[test]
fn words_and_integers() {
    let mut input = Input::new(b"forward 5\ndown 8\n");

    let (W(word), n) = input.line::<(W<&str>, u32)>().unwrap();
    assert_eq!(word, "forward");
    assert_eq!(n, 5);

    let (W(word), n) = input.line::<(W<&str>, u32)>().unwrap();
    assert_eq!(word, "down");
    assert_eq!(n, 8);

    assert!(input.try_line::<(W<&str>, u32)>().unwrap().is_none());
}

#[test]
fn split() {
    let mut input = Input::new(b"3,4,3,1,2");
    let Split(values) = input.next::<Split<',', Vec<u32>>>().unwrap();
    assert_eq!(values, [3, 4, 3, 1, 2]);
}

#[test]
fn split_array() {
    let mut input = Input::new(b"498,4\n");
    let Split([x, y]) = input.line::<Split<',', [u32; 2]>>().unwrap();
    assert_eq!((x, y), (498, 4));
}

#[test]
fn arrays() {
    let mut input = Input::new(b"1 2 3 4 5");
    let values = input.next::<[u32; 5]>().unwrap();
    assert_eq!(values, [1, 2, 3, 4, 5]);
}

#[test]
fn array_too_long() {
    let mut input = Input::new(b"1 2 3");
    let error = input.next::<[u32; 2]>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::BadArray(2, 3)));
}

#[test]
fn array_vec() {
    let mut input = Input::new(b"1 2 3");
    let values = input.next::<ArrayVec<u32, 4>>().unwrap();
    assert_eq!(values.as_slice(), [1, 2, 3]);
}

#[test]
fn not_integer() {
    let mut input = Input::new(b"12 foo");
    assert_eq!(input.next::<u32>().unwrap(), 12);

    let error = input.next::<u32>().unwrap_err();
    assert_eq!(error.span(), 3..6);
    assert!(matches!(error.kind(), ErrorKind::NotInteger("foo")));
}

#[test]
fn ws_counts_lines() {
    let mut input = Input::new(b"1\n\n2");
    assert_eq!(input.next::<u32>().unwrap(), 1);
    assert_eq!(input.ws().unwrap(), 2);
    assert_eq!(input.next::<u32>().unwrap(), 2);
}

#[test]
fn optional_line() {
    let mut input = Input::new(b"1,2\n\n3,4\n");

    let Some(Split([x, y])) = input.try_line::<Option<Split<',', [u32; 2]>>>().unwrap().unwrap() else {
        panic!("expected value line");
    };

    assert_eq!((x, y), (1, 2));

    assert!(input
        .try_line::<Option<Split<',', [u32; 2]>>>()
        .unwrap()
        .unwrap()
        .is_none());
}

#[test]
fn take_rest_advances() {
    let mut input = Input::new(b"abc def");
    let rest = input.next::<&[u8]>().unwrap();
    assert_eq!(rest, b"abc def");
    assert_eq!(input.index(), 7);
    assert!(input.is_empty());
}

#[test]
fn iter() {
    let mut input = Input::new(b"199\n200\n208\n");
    let values = input.iter::<u32>().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(values, [199, 200, 208]);
}
