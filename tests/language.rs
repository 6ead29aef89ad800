use std::{fs, io};

use meth::{
    error::{Error, ParseError, RuntimeError},
    interpreter::value::core::Value,
    run, run_file,
};
use pretty_assertions::assert_eq;

fn eval(src: &str, args: &[&str]) -> (Result<Option<Value>, Error>, String) {
    let mut out = Vec::new();
    let args = args.iter().map(|arg| Value::from(*arg)).collect();
    let result = run(src, args, None, &mut out);

    (result, String::from_utf8(out).expect("output is not UTF-8"))
}

fn assert_result_with_args(src: &str, args: &[&str], expected: &str) {
    match eval(src, args).0 {
        Ok(Some(value)) => assert_eq!(value.to_string(), expected, "script: {src}"),
        Ok(None) => panic!("Script produced no result: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_result(src: &str, expected: &str) {
    assert_result_with_args(src, &[], expected);
}

fn assert_success(src: &str) -> Option<Value> {
    match eval(src, &[]).0 {
        Ok(value) => value,
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match eval(src, &[]).0 {
        Ok(_) => panic!("Script succeeded but was expected to fail: {src}"),
        Err(e) => e,
    }
}

#[test]
fn literal_forms_print_back() {
    assert_result("return |1,2,3|;", "|1,2,3|");
    assert_result("return 'abc';", "abc");
    assert_result("return 5;", "5");
    assert_result("return -2;", "-2");
    assert_result("return 0.25;", "0.25");
    assert_result("return t;", "t");
    assert_result("return f;", "f");
    assert_result("return null;", "null");
    assert_result("return {a: 1, b: 'x'};", r#"{"a":1,"b":"x"}"#);
    assert_result("return {};", "{}");
    assert_result("e = ||; return e;", "||");
    assert_result("return |'a', |t, null|, {k: f}|;", r#"|"a",|t,null|,{"k":f}|"#);
    assert_result("return < return 1; >;", "[Function]");
}

#[test]
fn assignment_and_return() {
    assert_result("x = 5; return x;", "5");
    assert_result("a = |1,2,3|; return a;", "|1,2,3|");
    assert_result(".x = 3; return ['x'];", "3");
    assert_result("['a'] = 1; return .a;", "1");
    assert_eq!(assert_success("x = 1;"), None);
}

#[test]
fn missing_values_are_null() {
    assert_result("return nope;", "null");
    assert_result("return nope.a.b;", "null");
    assert_result("return {a: 1}.b;", "null");
    assert_result("return |1|[4];", "null");
    assert_result("return parent;", "null");
}

#[test]
fn comments_and_stray_semicolons() {
    assert_result("// leading\nx = 1; ;; /* block\ncomment */ return x; // trailing", "1");
}

#[test]
fn block_comments_may_end_in_star_runs() {
    assert_result("/* doc **/ return 1;", "1");
    assert_result("/*** banner ***/ x = 2; /**/ return x;", "2");
    assert_result("/* a * b ** c */ return 3;", "3");
}

#[test]
fn placeholders_read_arguments() {
    assert_result_with_args("return _,0_;", &["7"], "7");
    assert_result_with_args("return |__, __|;", &["x", "y"], r#"|"x","y"|"#);
    assert_result_with_args("return |_1_, _0_|;", &["x", "y"], r#"|"y","x"|"#);
    assert_result("return _,'d'_;", "d");
    assert_result("return __;", "null");
}

#[test]
fn explicit_index_does_not_move_cursor() {
    assert_result_with_args("return |_1_, __, __|;", &["a", "b"], r#"|"b","a","b"|"#);
}

#[test]
fn placeholder_is_memoized_per_activation() {
    let src = "fun = < i = 0; out = ||; while i.lt(2): < out.push(__); i = i.add(1); >; return out; >;
               return fun('a', 'b');";
    assert_result(src, r#"|"a","a"|"#);

    let src = "fun = < return __; >; return |fun(1), fun(2)|;";
    assert_result(src, "|1,2|");
}

#[test]
fn conditional_and_loop_bodies_share_scope() {
    assert_result("x = 1; if t: < x = 2; >; return x;", "2");
    assert_result("x = 1; if 0: x = 2; return x;", "1");
    assert_result("x = 1; if t x = 3; return x;", "3");
    assert_result("i = 0; while i.lt(3): i = i.add(1); return i;", "3");
    assert_result("i = 0; while i.lt(3): < i = i.add(1); > return i;", "3");
}

#[test]
fn return_stops_nested_bodies() {
    let src = "fun = < i = 0; while t: < i = i.add(1); if i.equals(3): return i; >; >;
               return fun();";
    assert_result(src, "3");
    assert_result("if t: return 1; return 2;", "1");
}

#[test]
fn returning_sets_result_without_stopping() {
    assert_result("returning 5; x = 1;", "5");
    assert_result("fun = < returning 1; returning 2; >; return fun();", "2");
    assert_result("returning 1; return 2;", "2");
    assert_result("x = returning 4; return x.add(1);", "5");
}

#[test]
fn closures_see_defining_scope() {
    assert_result("x = 1; fun = < return parent.x; >; return fun();", "1");
    assert_result("g = < return parent.y; >; h = < y = 5; return g(); >; return h();", "null");
    assert_result("fun = < return x; >; x = 1; return fun();", "null");

    let src = "make = < count = 0; return < parent.count = parent.count.add(1); return parent.count; >; >;
               counter = make();
               counter();
               return counter();";
    assert_result(src, "2");
}

#[test]
fn function_without_return_yields_null() {
    assert_result("fun = < x = 1; >; return fun();", "null");
}

#[test]
fn function_style_calls_prepend_subject() {
    assert_result("fun = < return __.add(__); >; return 1@(fun, 2);", "3");
    assert_result("return 5@(< return __; >);", "5");
    assert_result("return 2@(< return __.times(10); >).add(1);", "21");
}

#[test]
fn equality_rules() {
    assert_result("return 5.equals('5');", "t");
    assert_result("return '5'.equals(5);", "t");
    assert_result("return 'a'.equals('a');", "t");
    assert_result("return t.equals(1);", "f");
    assert_result("return 5.equals(null);", "f");
    assert_result("a = |1|; b = |1|; return |a.equals(b), a.equals(a)|;", "|f,t|");
    assert_result("a = {}; b = {}; return |a.equals(b), a.equals(a)|;", "|f,t|");
}

#[test]
fn truthiness_table() {
    assert_result("return 0.asBool();", "f");
    assert_result("return -1.asBool();", "f");
    assert_result("return 1.asBool();", "t");
    assert_result("return ''.asBool();", "f");
    assert_result("return 'a'.asBool();", "t");
    assert_result("e = ||; return e.asBool();", "f");
    assert_result("return |0|.asBool();", "t");
    assert_result("return {}.asBool();", "f");
    assert_result("return {a: null}.asBool();", "t");
    assert_result("return < >.asBool();", "t");
    assert_result("return ''.not();", "t");
}

#[test]
fn number_methods() {
    assert_result("return 2.add(3);", "5");
    assert_result("return 2.plus(3);", "5");
    assert_result("return 10.minus(4);", "6");
    assert_result("return 3.times(4);", "12");
    assert_result("return 3.multiply(4);", "12");
    assert_result("return 10.divide(4);", "2.5");
    assert_result("return 1.divide(0);", "Infinity");
    assert_result("return |2.gt(1), 2.gte(2), 2.lt(1), 2.lte(1)|;", "|t,t,f,f|");
}

#[test]
fn numbers_print_like_javascript() {
    assert_result("return 1000000000000000000000;", "1e+21");
    assert_result("return 100000000000000000000;", "100000000000000000000");
    assert_result("return 0.0000001;", "1e-7");
    assert_result("return 0.000001;", "0.000001");
    assert_result("return 1000000000000000000000.equals('1e+21');", "t");
}

#[test]
fn string_methods() {
    assert_result("return 'ab'.add(1);", "ab1");
    assert_result("return 'ab'.add(|1|);", "ab|1|");
    assert_result("return 'hello'.slice(1, 3);", "el");
    assert_result("return 'hello'.slice(-3);", "llo");
    assert_result("return 'hello'.slice(3, 1);", "");
    assert_result("return 'hello'.length;", "5");
    assert_result("return 'hello'[1];", "e");
    assert_result("return '42px'.asNumber().add(1);", "43");
    assert_result("return 'px'.asNumber();", "null");
}

#[test]
fn boolean_methods() {
    assert_result("return t.and(f);", "f");
    assert_result("return f.or(1);", "t");
    assert_result("return t.not();", "f");
}

#[test]
fn array_methods() {
    assert_result("a = |1|; b = a.push(2); return |b.equals(a), a.length|;", "|t,2|");
    assert_result("return |1|.concat(|2, 3|);", "|1,2,3|");
    assert_result("a = |1|; c = a.concat(5); return |a.equals(c), a|;", "|t,|1,5||");
    assert_result("return |1, 2, 3|.map(< return __.times(2); >);", "|2,4,6|");
    assert_result("return |'a', 'b'|.map(< return _1_; >);", "|0,1|");
    assert_result("s = {total: 0}; |1, 2, 3|.each(< parent.s.total = parent.s.total.add(__); >); return s.total;",
                  "6");
    assert_result("return |1|.each(< >);", "null");
}

#[test]
fn object_methods() {
    assert_result("o = {a: 1}; o.set('b', 2); return o;", r#"{"a":1,"b":2}"#);
    assert_result("return {a: 1}.get('a');", "1");
    assert_result("return {a: 1, b: 2}.entries();", r#"||"a",1|,|"b",2||"#);
    assert_result("return {a: 1, b: 2}.map(< return _1_; >);", r#"|"a","b"|"#);
    assert_result("a = {x: 1, y: 2}; b = a.extend({y: 3, z: 4}); return |a, b|;",
                  r#"|{"x":1,"y":2},{"x":1,"y":3,"z":4}|"#);
    assert_result("a = {x: 1}; a.flush({y: 2}); return a;", r#"{"y":2}"#);
}

#[test]
fn object_keys_shadow_methods() {
    assert_result("o = {get: 5}; return o.get;", "5");
    assert_result("o = {if: 1, null: 2}; return o.if.add(o.null);", "3");
}

#[test]
fn serialization() {
    assert_result("return |1, 'a', t, null, {k: 1.5}|._toJSON();", r#"[1,"a",true,null,{"k":1.5}]"#);
    assert_result("return 1.divide(0)._toJSON();", "null");
    assert_result("return < >._toJSON();", r#""[Function]""#);
    assert_result("return 5._toString().add('!');", "5!");
    assert_result("o = {_hidden: 1}; return o._hidden;", "1");
}

#[test]
fn assignments_through_paths() {
    assert_result("= {a: 1, b: 2}; return a.add(b);", "3");
    assert_result("x = 1; = {y: 2}; return |x, y|;", "|null,2|");
    assert_result("o = {}; o.x = 1; o['y'] = 2; return o;", r#"{"x":1,"y":2}"#);
    assert_result("o = {in: {}}; o.in.deep = 1; return o;", r#"{"in":{"deep":1}}"#);
    assert_result("a = |1|; a[1] = 2; a[0] = 9; return a;", "|9,2|");
    assert_result("x = 1; fun = < parent.x = 2; >; fun(); return x;", "2");
}

#[test]
fn log_writes_before_result() {
    let (result, out) = eval("u = load 'utils'; u.log('a', 1, |t|); (load 'utils').log(); return 2;", &[]);

    assert_eq!(result.expect("script failed").map(|v| v.to_string()), Some("2".to_string()));
    assert_eq!(out, "a 1 |t|\n\n");
}

#[test]
fn output_before_error_is_kept() {
    let (result, out) = eval("u = load 'utils'; u.log('before'); x = 5; x();", &[]);

    assert!(result.is_err());
    assert_eq!(out, "before\n");
}

#[test]
fn sibling_module_is_loaded() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("lib.meth"), "y = 9;").expect("failed to write module");
    let main = dir.path().join("main.meth");
    fs::write(&main, "m = load 'lib'; n = load 'lib.meth'; return |m.y, n.y, m.equals(n)|;")
        .expect("failed to write script");

    let result = run_file(&main, Vec::new(), &mut io::sink()).expect("script failed");

    assert_eq!(result.map(|v| v.to_string()), Some("|9,9,f|".to_string()));
}

#[test]
fn modules_resolve_relative_to_their_own_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::create_dir(dir.path().join("sub")).expect("failed to create dir");
    fs::write(dir.path().join("sub").join("a.meth"), "b = load 'b'; value = b.value.add(1);")
        .expect("failed to write module");
    fs::write(dir.path().join("sub").join("b.meth"), "value = 41;").expect("failed to write module");
    let main = dir.path().join("main.meth");
    fs::write(&main, "return (load 'sub/a').value;").expect("failed to write script");

    let result = run_file(&main, Vec::new(), &mut io::sink()).expect("script failed");

    assert_eq!(result.map(|v| v.to_string()), Some("42".to_string()));
}

#[test]
fn module_errors() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("broken.meth"), "x = ;").expect("failed to write module");
    let main = dir.path().join("main.meth");

    fs::write(&main, "load 'broken';").expect("failed to write script");
    let err = run_file(&main, Vec::new(), &mut io::sink()).expect_err("script succeeded");
    assert!(matches!(err, Error::Runtime(RuntimeError::InvalidModule { .. })), "{err:?}");

    fs::write(&main, "load 'missing';").expect("failed to write script");
    let err = run_file(&main, Vec::new(), &mut io::sink()).expect_err("script succeeded");
    assert!(matches!(err, Error::Runtime(RuntimeError::ModuleNotFound { .. })), "{err:?}");
}

#[test]
fn unreadable_entry_file_is_error() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let err = run_file(&dir.path().join("nothing.meth"), Vec::new(), &mut io::sink()).expect_err("script succeeded");

    assert!(matches!(err, Error::Read { .. }));
}

#[test]
fn calling_non_functions_is_error() {
    assert!(matches!(assert_failure("x = 5; x();"),
                     Error::Runtime(RuntimeError::UnrecognisedCallable { found: "number", .. })));
    assert!(matches!(assert_failure("y@(5);"),
                     Error::Runtime(RuntimeError::UnrecognisedCallable { .. })));
    assert!(matches!(assert_failure("nope();"),
                     Error::Runtime(RuntimeError::UnrecognisedCallable { found: "null", .. })));
}

#[test]
fn builtin_misuse_is_error() {
    assert!(matches!(assert_failure("1.add();"),
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { name: "add", found: 0, .. })));
    assert!(matches!(assert_failure("1.add(1, 2);"),
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { .. })));
    assert!(matches!(assert_failure("1.add('a');"),
                     Error::Runtime(RuntimeError::ExpectedNumber { found: "string", .. })));
    assert!(matches!(assert_failure("= 5;"),
                     Error::Runtime(RuntimeError::ExpectedObject { .. })));
    assert!(matches!(assert_failure("{}.extend(1);"),
                     Error::Runtime(RuntimeError::ExpectedObject { .. })));
}

#[test]
fn invalid_assignments_are_errors() {
    assert!(matches!(assert_failure("a = |1|; a[5] = 1;"),
                     Error::Runtime(RuntimeError::InvalidAssignment { .. })));
    assert!(matches!(assert_failure("n = 5; n.x = 1;"),
                     Error::Runtime(RuntimeError::InvalidAssignment { found: "number", .. })));
    assert!(matches!(assert_failure("nope.x = 1;"),
                     Error::Runtime(RuntimeError::InvalidAssignment { found: "null", .. })));
    assert!(matches!(assert_failure("a = ||; a[a] = 1;"),
                     Error::Runtime(RuntimeError::InvalidAssignment { found: "array", .. })));
}

#[test]
fn containers_can_key_themselves() {
    assert_result("o = {}; o.set(o, 1); return o;", r#"{"{}":1}"#);
    assert_result("o = {}; o[o] = 1; return o;", r#"{"{}":1}"#);
    assert_result("o = {}; return o.get(o);", "null");
}

#[test]
fn assignment_resolves_target_before_value() {
    assert_result_with_args("o = {}; o[__] = __; return o;", &["k", "v"], r#"{"k":"v"}"#);
    assert_result_with_args("[__] = __; return k;", &["k", "v"], "v");
}

#[test]
fn parse_errors() {
    assert!(matches!(assert_failure("x = ;"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("return 1"), Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(assert_failure("x@();"), Error::Parse(ParseError::MissingCallee { .. })));
    assert!(matches!(assert_failure("parent = 1;"),
                     Error::Parse(ParseError::InvalidAssignmentTarget { .. })));
    assert!(matches!(assert_failure("x = 'abc;"), Error::Parse(ParseError::InvalidCharacter { .. })));
    assert!(matches!(assert_failure("x = 1 # 2;"), Error::Parse(ParseError::InvalidCharacter { .. })));
    assert!(matches!(assert_failure("return _-1_;"),
                     Error::Parse(ParseError::InvalidArgumentIndex { .. })));
    assert!(matches!(assert_failure("x = return 5;"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("fun = < x = 1;"), Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn parse_error_aborts_before_running() {
    let (result, out) = eval("(load 'utils').log('never'); x = ;", &[]);

    assert!(result.is_err());
    assert_eq!(out, "");
}

#[test]
fn errors_report_their_line() {
    let err = assert_failure("x = 1;\n\ny();");
    assert!(err.to_string().starts_with("Error on line 3:"), "{err}");

    let err = assert_failure("s = 'two\nlines';\nx = ;");
    assert!(err.to_string().starts_with("Error on line 3:"), "{err}");
}

#[test]
fn parse_keeps_program_shape() {
    let program = meth::parse("x = 5; if x: < y = 1; z = 2; >; return x;").expect("parse failed");

    assert_eq!(program.len(), 3);
    assert_eq!(program[1].line_number(), 1);
}
