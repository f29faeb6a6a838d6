use numlit::rule::Form;
use numlit::rule::Radix::*;
use numlit::testing::Matcher;
use numlit::testing::Text;
use numlit::token::Sign;
use numlit::Kind;
use numlit::Tag;

#[track_caller]
fn check(text: &str, matcher: Matcher) {
  let tree = numlit::classify(text, 0..text.len());
  eprintln!("{}", tree.summary(Some(text)));
  matcher.assert_matches(text, &tree);
}

#[test]
fn decimal_int() {
  check(
    "42",
    Matcher::new(Kind::Int { radix: Decimal, imaginary: false })
      .then(Tag::Digits(Decimal), "42"),
  );

  check(
    "0",
    Matcher::new(Kind::Int { radix: Decimal, imaginary: false })
      .then(Tag::Digits(Decimal), "0"),
  );
}

#[test]
fn leading_zero_is_octal() {
  check(
    "0600",
    Matcher::new(Kind::Int { radix: Octal, imaginary: false })
      .then(Tag::Prefix(Octal), "0")
      .then(Tag::Digits(Octal), "600"),
  );

  check(
    "0_600",
    Matcher::new(Kind::Int { radix: Octal, imaginary: false })
      .then(Tag::Prefix(Octal), "0")
      .then(Tag::Separator, "_")
      .then(Tag::Digits(Octal), "600"),
  );

  check(
    "0o600",
    Matcher::new(Kind::Int { radix: Octal, imaginary: false })
      .then(Tag::Prefix(Octal), "0o")
      .then(Tag::Digits(Octal), "600"),
  );

  check("08", Matcher::invalid("08"));
  check("0_8", Matcher::invalid("0_8"));
}

// Octal digit groups take no interior separators, unlike every other radix.
// Because a decimal integer cannot have a leading zero, `06_00` is rejected
// too rather than read as decimal, which Go would accept.
#[test]
fn octal_separators_are_rejected() {
  check("0o6_00", Matcher::invalid("0o6_00"));
  check("06_00", Matcher::invalid("06_00"));

  check(
    "0x6_00",
    Matcher::new(Kind::Int { radix: Hexadecimal, imaginary: false })
      .then(Tag::Prefix(Hexadecimal), "0x")
      .then_nested(
        Matcher::node(Tag::Digits(Hexadecimal), "6_00")
          .then(Tag::Separator, Text::text_and_range("_", 3..4)),
      ),
  );

  check(
    "0b1_00",
    Matcher::new(Kind::Int { radix: Binary, imaginary: false })
      .then(Tag::Prefix(Binary), "0b")
      .then_nested(
        Matcher::node(Tag::Digits(Binary), "1_00")
          .then(Tag::Separator, "_"),
      ),
  );
}

#[test]
fn hex_int_with_separators() {
  let mut digits =
    Matcher::node(Tag::Digits(Hexadecimal), "67_7a_2f_cc_40_c6");
  for _ in 0..5 {
    digits = digits.then(Tag::Separator, "_");
  }

  check(
    "0x_67_7a_2f_cc_40_c6",
    Matcher::new(Kind::Int { radix: Hexadecimal, imaginary: false })
      .then(Tag::Prefix(Hexadecimal), Text::text_and_range("0x", 0..2))
      .then(Tag::Separator, Text::text_and_range("_", 2..3))
      .then_nested(digits),
  );
}

#[test]
fn hex_float() {
  check(
    "0x1.Fp+0",
    Matcher::new(Kind::Float { radix: Hexadecimal, imaginary: false })
      .then(Tag::Prefix(Hexadecimal), "0x")
      .then(Tag::Digits(Hexadecimal), "1")
      .then(Tag::Point(Hexadecimal), ".")
      .then(Tag::Digits(Hexadecimal), "F")
      .then(Tag::ExponentMarker(Hexadecimal), "p")
      .then(Tag::ExponentSign(Sign::Pos, Hexadecimal), "+")
      .then(Tag::ExponentDigits(Hexadecimal), "0"),
  );

  check(
    "0X_1FFFP-16",
    Matcher::new(Kind::Float { radix: Hexadecimal, imaginary: false })
      .then(Tag::Prefix(Hexadecimal), "0X")
      .then(Tag::Separator, "_")
      .then(Tag::Digits(Hexadecimal), "1FFF")
      .then(Tag::ExponentMarker(Hexadecimal), "P")
      .then(Tag::ExponentSign(Sign::Neg, Hexadecimal), "-")
      .then(Tag::ExponentDigits(Hexadecimal), "16"),
  );

  check(
    "0X.8p-0",
    Matcher::new(Kind::Float { radix: Hexadecimal, imaginary: false })
      .then(Tag::Prefix(Hexadecimal), "0X")
      .then(Tag::Point(Hexadecimal), ".")
      .then(Tag::Digits(Hexadecimal), "8")
      .then(Tag::ExponentMarker(Hexadecimal), "p")
      .then(Tag::ExponentSign(Sign::Neg, Hexadecimal), "-")
      .then(Tag::ExponentDigits(Hexadecimal), "0"),
  );
}

#[test]
fn decimal_float() {
  check(
    ".25",
    Matcher::new(Kind::Float { radix: Decimal, imaginary: false })
      .then(Tag::Point(Decimal), ".")
      .then(Tag::Digits(Decimal), "25"),
  );

  check(
    "6.67428e-11",
    Matcher::new(Kind::Float { radix: Decimal, imaginary: false })
      .then(Tag::Digits(Decimal), "6")
      .then(Tag::Point(Decimal), ".")
      .then(Tag::Digits(Decimal), "67428")
      .then(Tag::ExponentMarker(Decimal), "e")
      .then(Tag::ExponentSign(Sign::Neg, Decimal), "-")
      .then(Tag::ExponentDigits(Decimal), "11"),
  );

  check(
    "1_5.",
    Matcher::new(Kind::Float { radix: Decimal, imaginary: false })
      .then_nested(
        Matcher::node(Tag::Digits(Decimal), "1_5").then(Tag::Separator, "_"),
      )
      .then(Tag::Point(Decimal), "."),
  );

  check(
    "0.15e+0_2",
    Matcher::new(Kind::Float { radix: Decimal, imaginary: false })
      .then(Tag::Digits(Decimal), "0")
      .then(Tag::Point(Decimal), ".")
      .then(Tag::Digits(Decimal), "15")
      .then(Tag::ExponentMarker(Decimal), "e")
      .then(Tag::ExponentSign(Sign::Pos, Decimal), "+")
      .then_nested(
        Matcher::node(Tag::ExponentDigits(Decimal), "0_2")
          .then(Tag::Separator, "_"),
      ),
  );

  check(
    "9e9",
    Matcher::new(Kind::Float { radix: Decimal, imaginary: false })
      .then(Tag::Digits(Decimal), "9")
      .then(Tag::ExponentMarker(Decimal), "e")
      .then(Tag::ExponentDigits(Decimal), "9"),
  );
}

#[test]
fn imaginary() {
  check(
    "0i",
    Matcher::new(Kind::Int { radix: Decimal, imaginary: true })
      .then(Tag::Digits(Decimal), "0")
      .then(Tag::Imaginary, "i"),
  );

  check(
    "1_000.5e+10i",
    Matcher::new(Kind::Float { radix: Decimal, imaginary: true })
      .then_nested(
        Matcher::node(Tag::Digits(Decimal), "1_000")
          .then(Tag::Separator, "_"),
      )
      .then(Tag::Point(Decimal), ".")
      .then(Tag::Digits(Decimal), "5")
      .then(Tag::ExponentMarker(Decimal), "e")
      .then(Tag::ExponentSign(Sign::Pos, Decimal), "+")
      .then(Tag::ExponentDigits(Decimal), "10")
      .then(Tag::Imaginary, Text::range(11..12)),
  );

  check(
    "0xffi",
    Matcher::new(Kind::Int { radix: Hexadecimal, imaginary: true })
      .then(Tag::Prefix(Hexadecimal), "0x")
      .then(Tag::Digits(Hexadecimal), "ff")
      .then(Tag::Imaginary, "i"),
  );

  check("42ix", Matcher::invalid("42ix"));
  check("42i_", Matcher::invalid("42i_"));

  // The suffix must not run into a word character, even one the scanner
  // leaves out of the candidate.
  let text = "1i\u{e9} 2i\u{3b1}";
  for pos in [0, 5] {
    let tree = numlit::recognize(text, pos).unwrap();
    assert_eq!(tree.range().len(), 2);
    assert!(tree.is_invalid(), "{:?}", tree.text(text));
  }
  assert!(!numlit::recognize("2i+x", 0).unwrap().is_invalid());

  let tree = numlit::classify("0i", 0..2);
  assert!(tree.is_imaginary());
  assert_eq!(tree.kind().to_string(), "imaginary decimal integer");
}

#[test]
fn rejects() {
  for text in ["_42", "42_", "4__2", "0_xBadFace", "1_.5", "1.5e_1"] {
    check(text, Matcher::invalid(text.to_string()));
  }
}

#[test]
fn classify_as_single_form() {
  let text = "0600";
  assert!(numlit::classify_as(text, 0..4, Form::DecimalInt).is_none());
  assert!(numlit::classify_as(text, 0..4, Form::HexInt).is_none());

  let tree = numlit::classify_as(text, 0..4, Form::OctalInt).unwrap();
  assert_eq!(tree.form(), Some(Form::OctalInt));
  assert_eq!(tree.radix(), Some(Octal));

  // Only the whole range counts.
  let text = "0x1p-2";
  assert!(numlit::classify_as(text, 0..6, Form::HexFloat).is_some());
  assert!(numlit::classify_as(text, 0..6, Form::HexInt).is_none());
  assert!(numlit::classify_as(text, 0..3, Form::HexInt).is_some());
}

#[test]
fn recognize_in_context() {
  let text = "x := 0x_67_7a;";
  let tree = numlit::recognize(text, 5).unwrap();
  assert_eq!(tree.text(text), "0x_67_7a");
  assert_eq!(tree.range(), numlit::Range(5, 13));
  assert_eq!(
    tree.kind(),
    Kind::Int { radix: Hexadecimal, imaginary: false }
  );

  let root = tree.root();
  let prefix = root.child(Tag::Prefix(Hexadecimal)).unwrap();
  assert_eq!(prefix.text(text), "0x");
  let digits = root.child(Tag::Digits(Hexadecimal)).unwrap();
  assert_eq!(digits.text(text), "67_7a");
  assert!(!digits.is_leaf());

  assert!(numlit::recognize(text, 0).is_none());
  assert!(numlit::recognize(text, 6).is_none());
  assert!(numlit::recognize("x9", 1).is_none());
  assert!(numlit::recognize("a.5", 1).is_none());
}

#[test]
fn scopes() {
  assert_eq!(
    Tag::Literal(Kind::Invalid).scope(),
    Some("invalid.illegal.constant.numeric")
  );
  assert_eq!(
    Tag::Literal(Kind::Int { radix: Decimal, imaginary: false }).scope(),
    None
  );
  assert_eq!(
    Tag::Prefix(Binary).scope(),
    Some("keyword.other.unit.binary")
  );
  assert_eq!(
    Tag::Separator.scope(),
    Some("punctuation.separator.constant.numeric")
  );
  assert_eq!(
    Tag::Point(Decimal).scope(),
    Some("constant.numeric.decimal.point")
  );
  assert_eq!(
    Tag::ExponentSign(Sign::Neg, Hexadecimal).scope(),
    Some("keyword.operator.minus.exponent.hexadecimal")
  );
  assert_eq!(
    Tag::ExponentDigits(Decimal).scope(),
    Some("constant.numeric.exponent.decimal")
  );
  assert_eq!(Tag::Imaginary.scope(), Some("keyword.other.unit.imaginary"));
}

#[test]
fn summary() {
  let text = "0x1p-2";
  let tree = numlit::recognize(text, 0).unwrap();

  similar_asserts::assert_eq!(
    tree.summary(Some(text)),
    "\
Literal(hexadecimal float) 0..6 \"0x1p-2\"
  Prefix(Hexadecimal) 0..2 \"0x\" keyword.other.unit.hexadecimal
  Digits(Hexadecimal) 2..3 \"1\" constant.numeric.hexadecimal
  ExponentMarker(Hexadecimal) 3..4 \"p\" keyword.other.unit.exponent.hexadecimal
  ExponentSign(Neg, Hexadecimal) 4..5 \"-\" keyword.operator.minus.exponent.hexadecimal
  ExponentDigits(Hexadecimal) 5..6 \"2\" constant.numeric.exponent.hexadecimal
"
  );

  let bad = numlit::classify("4__2", 0..4);
  assert_eq!(
    format!("{bad:?}"),
    "Literal(invalid numeric literal) 0..4 invalid.illegal.constant.numeric\n"
  );
}

#[test]
fn walk_depths() {
  let text = "1_0.5";
  let tree = numlit::classify(text, 0..text.len());
  let walked = tree
    .walk()
    .map(|(depth, node)| (depth, node.tag(), node.text(text)))
    .collect::<Vec<_>>();

  assert_eq!(
    walked,
    [
      (0, Tag::Literal(Kind::Float { radix: Decimal, imaginary: false }), text),
      (1, Tag::Digits(Decimal), "1_0"),
      (2, Tag::Separator, "_"),
      (1, Tag::Point(Decimal), "."),
      (1, Tag::Digits(Decimal), "5"),
    ]
  );
}

#[test]
#[should_panic(expected = "not on char boundaries")]
fn classify_inside_char() {
  numlit::classify("\u{e9}", 0..1);
}
