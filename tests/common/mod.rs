use std::error::Error;

use ubag::{
    script::{run_script, ScriptError},
    ArrayBag, BagError, UndoableBag,
};

#[macro_export]
macro_rules! test {
    ($name: ident, capacity = $capacity: expr, $script: expr, $output: expr) => {
        #[test]
        fn $name() -> Result<(), Box<dyn std::error::Error>> {
            $crate::common::run_test(Some($capacity), $script, $output)
        }
    };
    ($name: ident, $script: expr, $output: expr) => {
        #[test]
        fn $name() -> Result<(), Box<dyn std::error::Error>> {
            $crate::common::run_test(None, $script, $output)
        }
    };
}

#[macro_export]
macro_rules! test_unsupported {
    ($name: ident, $script: expr, $output: expr, line = $line: expr) => {
        #[test]
        fn $name() -> Result<(), Box<dyn std::error::Error>> {
            $crate::common::run_unsupported_test($script, $output, $line)
        }
    };
}

fn new_bag(capacity: Option<usize>) -> UndoableBag<String> {
    UndoableBag::with_bag(capacity.map_or_else(ArrayBag::new, ArrayBag::bounded))
}

fn lines(s: &str) -> Vec<&str> {
    s.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}

fn check_output(out: Vec<u8>, output: &str) -> Result<(), Box<dyn Error>> {
    let actual = String::from_utf8(out)?;
    let expected = lines(output);
    let actual = lines(&actual);
    if expected != actual {
        eprintln!("{expected:?} {actual:?}");
    }
    assert_eq!(expected, actual);
    Ok(())
}

pub(crate) fn run_test(
    capacity: Option<usize>,
    script: &str,
    output: &str,
) -> Result<(), Box<dyn Error>> {
    let mut bag = new_bag(capacity);
    let mut out = vec![];
    run_script(&mut bag, script, &mut out)?;
    check_output(out, output)
}

pub(crate) fn run_unsupported_test(
    script: &str,
    output: &str,
    line: usize,
) -> Result<(), Box<dyn Error>> {
    let mut bag = new_bag(None);
    let mut out = vec![];
    match run_script(&mut bag, script, &mut out) {
        Err(ScriptError::Bag {
            line: failed_at,
            source: BagError::Unsupported(_),
        }) => assert_eq!(line, failed_at),
        other => panic!("expected an unsupported operation at line {line}, got {other:?}"),
    }
    check_output(out, output)
}
