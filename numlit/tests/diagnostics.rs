use numlit::report::Options;
use numlit::testing;
use numlit::Context;
use numlit::Report;

fn report(ctx: &Context) -> Report {
  ctx.new_report_with(Options {
    color: false,
    show_report_locations: false,
    ..Default::default()
  })
}

/// Runs every literal in `text` through a fresh report, and returns the
/// rendered diagnostics.
fn diagnose(text: &str) -> String {
  let ctx = Context::new();
  let report = report(&ctx);
  let _ = ctx.new_file("<input>", text).literals(&report);

  match report.fatal_or(()) {
    Ok(()) => String::new(),
    Err(fatal) => fatal.to_string(),
  }
}

#[test]
fn valid_literals_are_quiet() {
  let ctx = Context::new();
  let report = report(&ctx);
  let lits = ctx
    .new_file("<input>", "42 0x_ff 0600 .25 1e9i 0X_1FFFP-16")
    .literals(&report);

  assert_eq!(lits.len(), 6);
  testing::check_report_ok(&report);
  assert_eq!(report.error_count(), 0);
}

#[test]
fn one_error_per_invalid_literal() {
  let ctx = Context::new();
  let report = report(&ctx);
  let lits = ctx
    .new_file("<input>", "4__2 42 1_.5\n0o6_00 08")
    .literals(&report);

  let invalid = lits.iter().filter(|lit| lit.is_invalid()).count();
  assert_eq!(invalid, 4);
  assert_eq!(report.error_count(), 4);
}

#[test]
fn misplaced_separators() {
  for text in ["4__2", "42_", "1_.5", "1.5_e1"] {
    let out = diagnose(text);
    assert!(out.contains("invalid numeric literal"), "{text}: {out}");
    assert!(out.contains("unexpected digit separator"), "{text}: {out}");
    assert!(
      out.contains("digit separators may only appear between two digits"),
      "{text}: {out}"
    );
  }
}

#[test]
fn truncated_literals() {
  let out = diagnose("1e");
  assert!(out.contains("expected exponent digit after this"), "{out}");

  let out = diagnose("0x");
  assert!(out.contains("expected hexadecimal digit after this"), "{out}");
}

#[test]
fn unexpected_characters() {
  let out = diagnose("42ix");
  assert!(out.contains("unexpected `x` in decimal integer"), "{out}");

  let out = diagnose("0b102");
  assert!(out.contains("unexpected `2` in binary integer"), "{out}");

  let out = diagnose("z := 1i\u{e9}");
  assert!(out.contains("unexpected `\u{e9}` in decimal integer"), "{out}");
}

#[test]
fn unexplained() {
  let ctx = Context::new();
  let report = ctx.new_report_with(Options {
    color: false,
    show_report_locations: false,
    explain: false,
  });
  let _ = ctx.new_file("<input>", "4__2").literals(&report);

  let out = report.fatal_or(()).unwrap_err().to_string();
  assert!(out.contains("invalid numeric literal"), "{out}");
  assert!(!out.contains("unexpected digit separator"), "{out}");
  assert_eq!(report.error_count(), 1);
}

#[test]
fn non_ascii_source() {
  let out = diagnose("\u{e9} := 4__2");
  assert!(out.contains("1 | \u{e9} := 4__2\n"), "{out}");
  assert!(
    out.contains("  |      ^^^^ this is not a valid number\n"),
    "{out}"
  );
  assert!(
    out.contains("  |       - help: unexpected digit separator\n"),
    "{out}"
  );
}

#[test]
fn aborting() {
  let out = diagnose("4__2");
  assert!(out.contains("aborting due to 1 error"), "{out}");
  assert!(!out.contains("aborting due to 1 errors"), "{out}");

  let out = diagnose("4__2 1_.5");
  assert!(out.contains("aborting due to 2 errors"), "{out}");
}

#[test]
fn literal_at_reports() {
  let ctx = Context::new();
  let report = report(&ctx);
  let file = ctx.new_file("<input>", "x := 1.5e_1");

  assert!(file.literal_at(0, &report).is_none());
  testing::check_report_ok(&report);

  let lit = file.literal_at(5, &report).unwrap();
  assert!(lit.is_invalid());
  assert_eq!(report.error_count(), 1);
}

#[test]
fn open_missing_file() {
  let ctx = Context::new();
  let report = report(&ctx);
  let result = ctx.open_file("this/file/does/not/exist.go", &report);

  let Err(fatal) = result else { panic!("opened a file that does not exist") };
  let out = fatal.to_string();
  assert!(out.contains("could not open input file"), "{out}");
  assert_eq!(ctx.file_count(), 0);
}

#[test]
fn speculative_diagnostics() {
  let ctx = Context::new();
  let report = report(&ctx);
  let file = ctx.new_file("<input>", "4__2");

  let diagnostic = report.error("this may not happen").speculate();
  drop(diagnostic);
  testing::check_report_ok(&report);

  report
    .warn("this one does")
    .saying(file.span(0..4), "right here")
    .speculate()
    .commit();
  assert_eq!(report.error_count(), 0);
  assert!(report.fatal_or(()).is_ok());
}

#[test]
fn golden() {
  let ctx = Context::new();
  let report = report(&ctx);
  let _ = ctx
    .new_file(
      "<input>",
      "\
a := 4__2
b := 0x_ff + 1_.5
c := 0o6_00
d := 1e
e := 42ix
",
    )
    .literals(&report);

  testing::check_report(&report, "tests/goldens/invalid.stdout");
}
