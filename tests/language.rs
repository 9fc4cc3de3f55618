use std::{fs, path::Path};

use lemo::{
    InterpreterOptions,
    error::{Error, LexError, RuntimeError},
    interpreter::lexer::OpKind,
    read_source, run,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

fn output_of(src: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run(src, &InterpreterOptions::default(), &mut out)?;
    Ok(String::from_utf8(out).expect("output is always ASCII digits"))
}

fn assert_output(src: &str, expected: &str) {
    match output_of(src) {
        Ok(out) => assert_eq!(out, expected, "unexpected output for script:\n{src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match output_of(src) {
        Ok(out) => panic!("Script succeeded with output {out:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn program_files_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "lemo"))
    {
        let path = entry.path();
        let source = read_source(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Missing {expected_path:?}: {e}")
                                                         });

        count += 1;
        match output_of(&source) {
            Ok(out) => assert_eq!(out, expected, "program {path:?} printed the wrong output"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e:?}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

#[test]
fn push_and_dump() {
    assert_output("push 42 dump", "42\n");
    assert_output("push 0\ndump", "0\n");
}

#[test]
fn addition() {
    assert_output("push 3 push 4 add dump", "7\n");
    assert_output("push 1 push 2 push 3 add add dump", "6\n");
}

#[test]
fn duplicate_then_add() {
    assert_output("push 5 duplicate add dump", "10\n");
}

#[test]
fn shifts() {
    assert_output("push 8 lshift dump", "16\n");
    assert_output("push 8 rshift dump", "4\n");
    assert_output("push 1 rshift dump", "0\n");
}

#[test]
fn dump_pops_in_stack_order() {
    assert_output("push 1 push 2 push 3 dump dump dump", "3\n2\n1\n");
}

#[test]
fn addition_wraps_on_overflow() {
    assert_output("push 9223372036854775807 push 1 add dump",
                  "-9223372036854775808\n");
}

#[test]
fn left_shift_moves_into_sign_bit() {
    assert_output("push 4611686018427387904 lshift dump",
                  "-9223372036854775808\n");
    assert_output("push 9223372036854775807 lshift dump", "-2\n");
}

#[test]
fn right_shift_propagates_sign() {
    assert_output("push 9223372036854775807 push 1 add rshift dump",
                  "-4611686018427387904\n");
}

#[test]
fn oversized_literal_saturates() {
    assert_output("push 99999999999999999999 dump", "9223372036854775807\n");
}

#[test]
fn comments_are_ignored() {
    assert_output("// a whole line\npush 5 // trailing words dump\ndump", "5\n");
    assert_output("push 1 dump\n//", "1\n");
}

#[test]
fn empty_program_prints_nothing() {
    assert_output("", "");
    assert_output("  \n\n ", "");
    assert_output("// nothing here", "");
}

#[test]
fn output_before_an_error_is_kept() {
    let mut out = Vec::new();
    let result = run("push 1 dump dump", &InterpreterOptions::default(), &mut out);

    assert!(result.is_err());
    assert_eq!(out, b"1\n");
}

#[test]
fn invalid_word_is_error() {
    let err = assert_failure("push 1\npush 2\nmul");
    assert!(matches!(err,
                     Error::Lex(LexError::InvalidToken { ref token, line: 3 }) if token == "mul"));
}

#[test]
fn lex_errors_prevent_any_output() {
    let mut out = Vec::new();
    let result = run("push 1 dump 1x", &InterpreterOptions::default(), &mut out);

    assert!(matches!(result, Err(Error::Lex(_))));
    assert!(out.is_empty());
}

#[test]
fn dump_on_empty_stack_is_error() {
    let err = assert_failure("dump");
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::ArityViolation { op: OpKind::Dump,
                                                                   required: 1,
                                                                   available: 0 })));
}

#[test]
fn add_with_one_value_is_error() {
    let err = assert_failure("push 1 add");
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::ArityViolation { op: OpKind::Add,
                                                                   required: 2,
                                                                   available: 1 })));
}

#[test]
fn push_without_operand_is_error() {
    let err = assert_failure("push");
    assert!(matches!(err, Error::Runtime(RuntimeError::MissingOperand { position: 0 })));
}

#[test]
fn bare_literal_is_error() {
    let err = assert_failure("push 1 2 dump");
    assert!(matches!(err, Error::Runtime(RuntimeError::MissingOperand { position: 2 })));
}

#[test]
fn exceeding_stack_capacity_is_error() {
    let src = "push 1 ".repeat(101);
    let err = assert_failure(&src);
    assert!(matches!(err, Error::Runtime(RuntimeError::StackOverflow { capacity: 100 })));

    assert_output(&format!("{}dump", "push 1 ".repeat(100)), "1\n");
}

#[test]
fn custom_options_are_respected() {
    let options = InterpreterOptions { stack_capacity: 2,
                                       delimiters:     vec![',', '\n'], };

    let mut out = Vec::new();
    run("push,2,duplicate,add,dump", &options, &mut out).unwrap();
    assert_eq!(out, b"4\n");

    let mut out = Vec::new();
    let result = run("push,1,duplicate,duplicate", &options, &mut out);
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::StackOverflow { capacity: 2 }))));
}

#[test]
fn missing_file_is_io_error() {
    let path = Path::new("tests/programs/does-not-exist.lemo");
    assert!(matches!(read_source(path), Err(Error::Io { .. })));
}
