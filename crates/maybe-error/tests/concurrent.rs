use rayon::prelude::*;

use maybe_error::{Error, ErrorDomain, Maybe, define_error_domain};

define_error_domain! {
    enum NetError in "net_error" {
        success Ok = 0,
        Refused = 1 => "connection refused",
        TimedOut = 2 => "connection timed out",
        Reset = 3 => "connection reset",
    }
}

fn connect(attempt: i32) -> Maybe<i32> {
    match attempt % 4 {
        0 => Maybe::from_value(attempt),
        1 => NetError::Refused.into(),
        2 => NetError::TimedOut.into(),
        _ => NetError::Reset.into(),
    }
}

#[test]
fn categories_are_read_concurrently() {
    let messages: Vec<&'static str> = (0..10_000)
        .into_par_iter()
        .map(|code| Error::from_raw(code % 5, NetError::category()).message())
        .collect();

    for (code, message) in messages.iter().enumerate() {
        let expected = match code % 5 {
            0 => "",
            1 => "connection refused",
            2 => "connection timed out",
            3 => "connection reset",
            _ => "unknown error",
        };
        assert_eq!(*message, expected, "code {code}");
    }
}

#[test]
fn lookup_yields_one_instance_across_threads() {
    let addresses: Vec<usize> = (0..256)
        .into_par_iter()
        .map(|_| NetError::category() as *const dyn maybe_error::Category as *const () as usize)
        .collect();

    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn maybe_values_cross_threads() {
    let failures = (0..1_000)
        .into_par_iter()
        .map(connect)
        .filter(|result| result.is_error())
        .count();
    assert_eq!(failures, 750);

    let total: i64 = (0..1_000)
        .into_par_iter()
        .map(connect)
        .filter_map(|result| result.ok())
        .map(i64::from)
        .sum();
    assert_eq!(total, (0..1_000).step_by(4).map(i64::from).sum());
}
