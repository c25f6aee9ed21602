use std::fs::{self};

use skit::{
    Syntax,
    error::{RuntimeError, ScriptError, SyntaxError},
    interpreter::io::Io,
    run_with_io,
};
use walkdir::WalkDir;

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "skit"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let syntax = if path.to_string_lossy().ends_with(".spaces.skit") {
            Syntax::Line
        } else {
            Syntax::Stream
        };

        count += 1;
        let mut io = Io::buffer();
        if let Err(e) = run_with_io(&source, syntax, &mut io) {
            panic!("Demo script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos");
}

fn run_stream(source: &str) -> Result<String, ScriptError> {
    let mut io = Io::buffer();
    run_with_io(source, Syntax::Stream, &mut io)?;
    Ok(io.output().to_string())
}

fn run_line(source: &str) -> Result<String, ScriptError> {
    let mut io = Io::buffer();
    run_with_io(source, Syntax::Line, &mut io)?;
    Ok(io.output().to_string())
}

fn stream_output(source: &str) -> String {
    run_stream(source).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn line_output(source: &str) -> String {
    run_line(source).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

#[test]
fn assignment_and_print() {
    assert_eq!(stream_output("x = 5; print x;"), "5.0\n");
    assert_eq!(line_output("x = 5\nprint x\n"), "5.0\n");
}

#[test]
fn whole_numbers_print_with_one_decimal() {
    assert_eq!(stream_output("print 3 + 4;"), "7.0\n");
    assert_eq!(stream_output("print 2.5;"), "2.5\n");
    assert_eq!(stream_output("print 10 / 4;"), "2.5\n");
    assert_eq!(stream_output("print 0 - 3;"), "-3.0\n");
}

#[test]
fn arithmetic_precedence_and_grouping() {
    assert_eq!(stream_output("print 1 + 2 * 3;"), "7.0\n");
    assert_eq!(stream_output("print (1 + 2) * 3;"), "9.0\n");
    assert_eq!(stream_output("print 8 - 2 - 1;"), "5.0\n");
    assert_eq!(stream_output("print 12 / 2 / 3;"), "2.0\n");
}

#[test]
fn unary_negation() {
    assert_eq!(stream_output("print -4 + 1;"), "-3.0\n");
    assert_eq!(stream_output("x = 2; print -x * 3;"), "-6.0\n");
    assert_eq!(stream_output("print --4;"), "4.0\n");
}

#[test]
fn text_concatenation_with_plus() {
    assert_eq!(stream_output("print \"a\" + 5;"), "a5.0\n");
    assert_eq!(stream_output("print 1 + \"a\";"), "1.0a\n");
    assert_eq!(stream_output("who = \"world\"; print \"hello \" + who;"), "hello world\n");
}

#[test]
fn comparisons_coerce_to_numbers() {
    assert_eq!(stream_output("print \"5\" < 6;"), "1.0\n");
    assert_eq!(stream_output("print \" 10 \" >= 10;"), "1.0\n");
    assert_eq!(stream_output("print 3 > 7;"), "0.0\n");
    assert_eq!(stream_output("print 2 <= 2;"), "1.0\n");
}

#[test]
fn equality_is_exact() {
    assert_eq!(stream_output("print 5 == 5;"), "1.0\n");
    assert_eq!(stream_output("print \"5\" == 5;"), "0.0\n");
    assert_eq!(stream_output("print \"a\" != \"b\";"), "1.0\n");
    assert_eq!(stream_output("print \"a\" == \"a\";"), "1.0\n");
}

#[test]
fn if_else_picks_the_true_branch() {
    let script = "x = 10; if x > 5 { print \"big\"; } else { print \"small\"; }";
    assert_eq!(stream_output(script), "big\n");

    let script = "x = 2; if x > 5 { print \"big\"; } else { print \"small\"; }";
    assert_eq!(stream_output(script), "small\n");

    let script = r#"
        x = 10
        if x > 5
            print "big"
        else
            print "small"
    "#;
    assert_eq!(line_output(script), "big\n");
}

#[test]
fn if_without_else_skips_quietly() {
    assert_eq!(stream_output("if 0 { print 1; } print 2;"), "2.0\n");
    assert_eq!(line_output("if 0\n    print 1\nprint 2\n"), "2.0\n");
}

#[test]
fn truthiness_of_values() {
    assert_eq!(stream_output("if 0 { print 1; } else { print 2; }"), "2.0\n");
    assert_eq!(stream_output("if 0.5 { print 1; } else { print 2; }"), "1.0\n");
    assert_eq!(stream_output("if \"\" { print 1; } else { print 2; }"), "2.0\n");
    assert_eq!(stream_output("if \"x\" { print 1; } else { print 2; }"), "1.0\n");
}

#[test]
fn while_loop_counts() {
    let script = "i = 0; while i < 3 { print i; i = i + 1; }";
    assert_eq!(stream_output(script), "0.0\n1.0\n2.0\n");

    let script = r#"
        i = 0
        while i < 3
            print i
            i = i + 1
    "#;
    assert_eq!(line_output(script), "0.0\n1.0\n2.0\n");
}

#[test]
fn while_with_false_condition_never_runs() {
    assert_eq!(stream_output("while 0 { print 1; } print 2;"), "2.0\n");
}

#[test]
fn while_rechecks_its_condition() {
    assert_eq!(stream_output("n = 3; while n > 0 { n = n - 1; } print n;"), "0.0\n");
}

#[test]
fn nested_blocks() {
    let script = "a = 0; if 1 { if 1 { if 1 { if 1 { if 1 { a = 9; } } } } } print a;";
    assert_eq!(stream_output(script), "9.0\n");

    let script = r#"
        total = 0; n = 0;
        while n < 5 {
            if n == 2 { total = total + 10; } else { total = total + 1; }
            n = n + 1;
        }
        print total;
    "#;
    assert_eq!(stream_output(script), "14.0\n");
}

#[test]
fn line_else_pairs_by_indentation_width() {
    let script = r#"
        x = 1
        if x == 1
            if 0
                print "inner"
            else
                print "inner-else"
        else
            print "outer-else"
    "#;
    assert_eq!(line_output(script), "inner-else\n");
}

#[test]
fn assignment_rebinds_any_type() {
    assert_eq!(stream_output("x = 1; x = \"a\"; print x;"), "a\n");
    assert_eq!(stream_output("x = 3; x = 3; print x;"), "3.0\n");
}

#[test]
fn assignment_sees_the_old_binding() {
    assert_eq!(stream_output("x = 1; x = x + 1; print x;"), "2.0\n");
    assert!(run_stream("y = missing + 1; print y;").is_err());
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_eq!(stream_output("# leading note\nx = 1; # tail note\n\nprint x;"), "1.0\n");

    let script = r#"
        x = 1
        # a note between statements

        print x
    "#;
    assert_eq!(line_output(script), "1.0\n");
}

#[test]
fn line_block_extents_ignore_comment_lines() {
    let script = r#"
        i = 0
        while i < 2
            # counting up

            i = i + 1
        print i
    "#;
    assert_eq!(line_output(script), "2.0\n");

    let script = r#"
        i = 0
        while i < 2
            i = i + 1
# dedented note
            i = i + 1
        print i
    "#;
    assert_eq!(line_output(script), "2.0\n");
}

#[test]
fn multi_line_statement_in_stream_syntax() {
    assert_eq!(stream_output("x =\n1 +\n2;\nprint x;"), "3.0\n");
}

#[test]
fn multi_line_strings_in_stream_syntax() {
    assert_eq!(stream_output("x = \"a\nb\"; print x;"), "a\nb\n");
}

#[test]
fn error_lines_count_through_newlines() {
    match run_stream("x = \"a\nb\";\nfoo;") {
        Err(ScriptError::Syntax(SyntaxError::UnknownStatement { name, line })) => {
            assert_eq!(name, "foo");
            assert_eq!(line, 3);
        },
        other => panic!("Expected an unknown statement error, got {other:?}"),
    }
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("note.txt");
    let script = format!("file_write \"hello\" to \"{0}\"; file_read \"{0}\" to data; print data;",
                         path.display());
    assert_eq!(stream_output(&script), "hello\n");
}

#[test]
fn file_round_trip_in_line_syntax() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("note.txt");
    let script = format!("file_write \"salut\" to \"{0}\"\nfile_read \"{0}\" to data\nprint data\n",
                         path.display());
    assert_eq!(line_output(&script), "salut\n");
}

#[test]
fn file_write_replaces_previous_contents() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("note.txt");
    let script = format!("file_write \"first\" to \"{0}\"; file_write \"second\" to \"{0}\"; \
                          file_read \"{0}\" to data; print data;",
                         path.display());
    assert_eq!(stream_output(&script), "second\n");
}

#[test]
fn file_write_computes_its_content() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("note.txt");
    let script =
        format!("n = 2; file_write \"n=\" + n * 3 to \"{0}\"; file_read \"{0}\" to v; print v;",
                path.display());
    assert_eq!(stream_output(&script), "n=6.0\n");
}

#[test]
fn separator_inside_text_does_not_split() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("note.txt");
    let script = format!("file_write \"keep to it\" to \"{0}\"; file_read \"{0}\" to v; print v;",
                         path.display());
    assert_eq!(stream_output(&script), "keep to it\n");
}

#[test]
fn reading_a_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.txt");
    let script = format!("file_read \"{}\" to data;", path.display());
    match run_stream(&script) {
        Err(ScriptError::Runtime(RuntimeError::FileRead { line, .. })) => assert_eq!(line, 1),
        other => panic!("Expected a file read error, got {other:?}"),
    }
}

#[test]
fn file_statements_require_their_separator() {
    assert!(matches!(run_stream("file_write \"x\" \"f.txt\";"),
                     Err(ScriptError::Syntax(SyntaxError::MissingSeparator { .. }))));
    assert!(matches!(run_stream("file_read \"f.txt\" data;"),
                     Err(ScriptError::Syntax(SyntaxError::MissingSeparator { .. }))));
    assert!(matches!(run_stream("file_read \"f.txt\" to 5;"),
                     Err(ScriptError::Syntax(SyntaxError::ExpectedIdentifier { .. }))));
}

#[test]
fn input_binds_a_text_line() {
    let mut io = Io::buffer_with_input(["world"]);
    run_with_io("input who; print \"hello \" + who;", Syntax::Stream, &mut io)
        .unwrap_or_else(|e| panic!("Script failed: {e}"));
    assert_eq!(io.output(), "hello world\n");
}

#[test]
fn input_feeds_comparisons_as_numbers() {
    let mut io = Io::buffer_with_input(["41"]);
    let script = "input n; if n < 100 { print \"small\"; } else { print \"big\"; }";
    run_with_io(script, Syntax::Stream, &mut io).unwrap_or_else(|e| panic!("Script failed: {e}"));
    assert_eq!(io.output(), "small\n");
}

#[test]
fn input_past_end_of_input_is_error() {
    assert!(matches!(run_stream("input x;"),
                     Err(ScriptError::Runtime(RuntimeError::EndOfInput { line: 1 }))));

    let mut io = Io::buffer_with_input(["only one"]);
    let result = run_with_io("input a; input b;", Syntax::Stream, &mut io);
    assert!(matches!(result, Err(ScriptError::Runtime(RuntimeError::EndOfInput { .. }))));
}

#[test]
fn unknown_statement_names_the_identifier() {
    match run_stream("foo;") {
        Err(ScriptError::Syntax(SyntaxError::UnknownStatement { name, line })) => {
            assert_eq!(name, "foo");
            assert_eq!(line, 1);
        },
        other => panic!("Expected an unknown statement error, got {other:?}"),
    }
    assert!(matches!(run_line("foo\n"),
                     Err(ScriptError::Syntax(SyntaxError::UnknownStatement { .. }))));
}

#[test]
fn else_without_if_is_error() {
    assert!(matches!(run_stream("else { print 1; }"),
                     Err(ScriptError::Syntax(SyntaxError::ElseWithoutIf { line: 1 }))));
    assert!(matches!(run_line("else\n"),
                     Err(ScriptError::Syntax(SyntaxError::ElseWithoutIf { line: 1 }))));
}

#[test]
fn unmatched_block_is_error() {
    assert!(matches!(run_stream("if 1 { print 1;"),
                     Err(ScriptError::Syntax(SyntaxError::UnmatchedBlock { line: 1 }))));
    assert!(matches!(run_stream("if 0 { print 1;"),
                     Err(ScriptError::Syntax(SyntaxError::UnmatchedBlock { line: 1 }))));
}

#[test]
fn statement_terminators_are_required_in_stream_syntax() {
    assert!(matches!(run_stream("x = 5"),
                     Err(ScriptError::Syntax(SyntaxError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(run_stream("if 1 { print 2 }"),
                     Err(ScriptError::Syntax(SyntaxError::ExpectedTerminator { .. }))));
}

#[test]
fn extra_expression_tokens_are_error() {
    assert!(matches!(run_stream("print 1 2;"),
                     Err(ScriptError::Syntax(SyntaxError::UnexpectedTrailingTokens { .. }))));
    assert!(matches!(run_stream("print 1 < 2 < 3;"),
                     Err(ScriptError::Syntax(SyntaxError::UnexpectedTrailingTokens { .. }))));
    assert!(matches!(run_line("x = 5;"),
                     Err(ScriptError::Syntax(SyntaxError::UnexpectedTrailingTokens { .. }))));
}

#[test]
fn line_else_carries_nothing_after_the_keyword() {
    let script = "if 1\n    print 1\nelse print 2\n";
    assert!(matches!(run_line(script),
                     Err(ScriptError::Syntax(SyntaxError::UnexpectedTrailingTokens { .. }))));
}

#[test]
fn undefined_variable_is_error() {
    match run_stream("print missing;") {
        Err(ScriptError::Runtime(RuntimeError::UnknownVariable { name, line })) => {
            assert_eq!(name, "missing");
            assert_eq!(line, 1);
        },
        other => panic!("Expected an unknown variable error, got {other:?}"),
    }
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(run_stream("print 1 / 0;"),
                     Err(ScriptError::Runtime(RuntimeError::DivisionByZero { line: 1 }))));
    assert!(matches!(run_stream("x = 0; print 3 / x;"),
                     Err(ScriptError::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn arithmetic_on_text_is_error() {
    assert!(matches!(run_stream("print \"a\" * 2;"),
                     Err(ScriptError::Runtime(RuntimeError::TypeError { .. }))));
    assert!(matches!(run_stream("print -\"a\";"),
                     Err(ScriptError::Runtime(RuntimeError::TypeError { .. }))));
}

#[test]
fn comparing_non_numeric_text_is_error() {
    assert!(matches!(run_stream("print \"abc\" < 5;"),
                     Err(ScriptError::Runtime(RuntimeError::ExpectedNumber { .. }))));
}

#[test]
fn reserved_names_cannot_be_bound() {
    assert!(matches!(run_stream("to = 5;"),
                     Err(ScriptError::Syntax(SyntaxError::IdentifierReserved { .. }))));
    assert!(matches!(run_stream("input to;"),
                     Err(ScriptError::Syntax(SyntaxError::IdentifierReserved { .. }))));
    assert!(matches!(run_stream("print to;"),
                     Err(ScriptError::Syntax(SyntaxError::IdentifierReserved { .. }))));
    assert!(matches!(run_stream("x = while;"),
                     Err(ScriptError::Syntax(SyntaxError::IdentifierReserved { .. }))));
}

#[test]
fn unrecognized_character_is_error() {
    match run_stream("x = 5 @ 2;") {
        Err(ScriptError::Syntax(SyntaxError::UnrecognizedCharacter { text, line })) => {
            assert_eq!(text, "@");
            assert_eq!(line, 1);
        },
        other => panic!("Expected an unrecognized character error, got {other:?}"),
    }
}

#[test]
fn lexing_happens_before_any_statement_runs() {
    let mut io = Io::buffer();
    assert!(run_with_io("print 1; $", Syntax::Stream, &mut io).is_err());
    assert_eq!(io.output(), "");

    let mut io = Io::buffer();
    assert!(run_with_io("print 1\n$\n", Syntax::Line, &mut io).is_err());
    assert_eq!(io.output(), "");
}

#[test]
fn empty_expressions_are_error() {
    assert!(matches!(run_stream("x = ;"),
                     Err(ScriptError::Syntax(SyntaxError::MissingExpression { .. }))));
    assert!(matches!(run_stream("print ;"),
                     Err(ScriptError::Syntax(SyntaxError::MissingExpression { .. }))));
    assert!(matches!(run_line("print\n"),
                     Err(ScriptError::Syntax(SyntaxError::MissingExpression { .. }))));
}

#[test]
fn unclosed_parenthesis_is_error() {
    assert!(matches!(run_stream("print (1 + 2;"),
                     Err(ScriptError::Syntax(SyntaxError::ExpectedClosingParen { .. }))));
}

#[test]
fn error_messages_carry_class_and_line() {
    let e = run_stream("x = 1;\nprint missing;").unwrap_err();
    assert_eq!(e.to_string(), "Runtime error on line 2: Unknown variable 'missing'.");

    let e = run_stream("foo;").unwrap_err();
    assert_eq!(e.to_string(), "Syntax error on line 1: Unknown statement 'foo'.");
}

#[test]
fn example_script_files_run() {
    let source = fs::read_to_string("tests/example.skit").expect("missing file");
    assert_eq!(stream_output(&source), "fizz\n1.0\n2.0\nfizz\n4.0\n");

    let source = fs::read_to_string("tests/example.spaces.skit").expect("missing file");
    assert_eq!(line_output(&source), "B\ndone\n");
}
