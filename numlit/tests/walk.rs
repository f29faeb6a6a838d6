use numlit::rule::Radix;
use numlit::Context;
use numlit::Kind;
use numlit::Spanned;
use numlit::Tag;

#[test]
fn find_all() {
  let text = "x := 42 + y9 * 0x_ff\nz := .5e3i; w := 1__2\n";
  let found = numlit::find_all(text)
    .map(|tree| (tree.text(text), tree.kind()))
    .collect::<Vec<_>>();

  assert_eq!(
    found,
    [
      ("42", Kind::Int { radix: Radix::Decimal, imaginary: false }),
      ("0x_ff", Kind::Int { radix: Radix::Hexadecimal, imaginary: false }),
      (".5e3i", Kind::Float { radix: Radix::Decimal, imaginary: true }),
      ("1__2", Kind::Invalid),
    ]
  );
}

#[test]
fn word_boundaries() {
  let found = |text: &str| {
    numlit::find_all(text)
      .map(|tree| tree.text(text).to_string())
      .collect::<Vec<_>>()
  };

  assert!(found("x9 _9 é9 abc123").is_empty());
  assert_eq!(found("f(1, 2)"), ["1", "2"]);
  assert_eq!(found("1.5.6 .x"), ["1.5.6"]);
  assert_eq!(found("a.5"), ["5"]);
  assert_eq!(found("1e+5+1"), ["1e+5", "1"]);
}

#[test]
fn never_crosses_lines() {
  let text = "12\n34\r\n0x\n5";
  let found = numlit::find_all(text)
    .map(|tree| tree.text(text))
    .collect::<Vec<_>>();
  assert_eq!(found, ["12", "34", "0x", "5"]);

  for tree in numlit::find_all(text) {
    assert!(!tree.text(text).contains('\n'));
  }
}

#[test]
fn literals_in_file() {
  let ctx = Context::new();
  let report = ctx.new_report();
  let file = ctx.new_file("test.go", "const (\n  a = 0o17\n  b = 1.5e-3\n)\n");

  let lits = file.literals(&report);
  assert_eq!(lits.len(), 2);
  numlit::testing::check_report_ok(&report);

  assert_eq!(lits[0].text(), "0o17");
  assert_eq!(lits[0].start(), 14);
  let prefix = lits[0].part(Tag::Prefix(Radix::Octal)).unwrap();
  assert_eq!(prefix.text(), "0o");
  assert_eq!(prefix.start(), 14);

  assert_eq!(lits[1].text(), "1.5e-3");
  let texts = lits[1].parts().map(|p| p.text()).collect::<Vec<_>>();
  assert_eq!(texts, ["1", ".", "5", "e", "-", "3"]);

  let lit = file.literal_at(14, &report).unwrap();
  assert_eq!(lit.kind(), lits[0].kind());
  assert!(file.literal_at(15, &report).is_none());
  assert!(file.literal_at(0, &report).is_none());
}
