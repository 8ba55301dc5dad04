use matchbox::{
    Error, MAX_GROUP_DEPTH,
    ast::{Anchor, AstNode, AstRoot, Quantifier, Symbol},
    parser::{Parser, parse_pattern},
};

#[track_caller]
fn parse_ok(pattern: &str) -> AstRoot {
    parse_pattern(pattern).unwrap_or_else(|err| panic!("Parser failed for pattern {pattern:?}: {err}"))
}

fn lit(c: char) -> AstNode {
    AstNode::Literal(Symbol::Char(c))
}

fn any() -> AstNode {
    AstNode::Literal(Symbol::Any)
}

fn cat(left: AstNode, right: AstNode) -> AstNode {
    AstNode::concat(left, right)
}

fn alt(left: AstNode, right: AstNode) -> AstNode {
    AstNode::alternation(left, right)
}

fn rep(item: AstNode, quantifier: Quantifier) -> AstNode {
    AstNode::repeat(item, quantifier)
}

const START: AstNode = AstNode::Anchor(Anchor::Start);
const END: AstNode = AstNode::Anchor(Anchor::End);

#[test]
fn test_simple_sequence_parser() {
    assert_eq!(parse_ok("a"), lit('a'));
    assert_eq!(parse_ok("abc"), cat(cat(lit('a'), lit('b')), lit('c')));
    assert_eq!(parse_ok("a.c"), cat(cat(lit('a'), any()), lit('c')));
}

#[test]
fn test_empty_pattern_parser() {
    let ast = parse_ok("");
    assert!(ast.is_empty());
    assert_eq!(ast.node(), None);
}

#[test]
fn test_anchors_parser() {
    assert_eq!(
        parse_ok("^abc$"),
        cat(cat(START, cat(cat(lit('a'), lit('b')), lit('c'))), END)
    );
    assert_eq!(parse_ok("^a"), cat(START, lit('a')));
    assert_eq!(parse_ok("a$"), cat(lit('a'), END));
    assert_eq!(parse_ok("^$"), cat(START, END));
}

#[test]
fn test_anchors_wrap_whole_expression() {
    assert_eq!(
        parse_ok("^a|b$"),
        cat(cat(START, alt(lit('a'), lit('b'))), END)
    );
}

#[test]
fn test_quantifiers_parser() {
    assert_eq!(parse_ok("a*"), rep(lit('a'), Quantifier::ZeroOrMore));
    assert_eq!(parse_ok("a+"), rep(lit('a'), Quantifier::OneOrMore));
    assert_eq!(parse_ok("a?"), rep(lit('a'), Quantifier::ZeroOrOne));
    assert_eq!(
        parse_ok("ab*"),
        cat(lit('a'), rep(lit('b'), Quantifier::ZeroOrMore))
    );
    assert_eq!(parse_ok(".+"), rep(any(), Quantifier::OneOrMore));
}

#[test]
fn test_alternation_precedence() {
    assert_eq!(
        parse_ok("a|b*"),
        alt(lit('a'), rep(lit('b'), Quantifier::ZeroOrMore))
    );
    assert_eq!(
        parse_ok("ab|cd"),
        alt(cat(lit('a'), lit('b')), cat(lit('c'), lit('d')))
    );
    assert_eq!(
        parse_ok("a|b|c"),
        alt(alt(lit('a'), lit('b')), lit('c'))
    );
}

#[test]
fn test_groups_parser() {
    assert_eq!(
        parse_ok("(ab)+c"),
        cat(
            rep(cat(lit('a'), lit('b')), Quantifier::OneOrMore),
            lit('c')
        )
    );
    assert_eq!(
        parse_ok("a(b|c)+d"),
        cat(
            cat(
                lit('a'),
                rep(alt(lit('b'), lit('c')), Quantifier::OneOrMore)
            ),
            lit('d')
        )
    );
    assert_eq!(parse_ok("((a))"), lit('a'));
    assert_eq!(
        parse_ok("(a*)*"),
        rep(rep(lit('a'), Quantifier::ZeroOrMore), Quantifier::ZeroOrMore)
    );
}

#[test]
fn test_parse_is_deterministic() {
    for pattern in ["a(b|c)+d", "^(ab)*$", "x|y?z", ".*", "((a|b)c)?d"] {
        assert_eq!(parse_ok(pattern), parse_ok(pattern));
        assert_eq!(Parser::new(pattern).parse(), parse_pattern(pattern));
    }
}

#[test]
fn test_display_reparses_to_same_tree() {
    for pattern in [
        "a",
        "abc",
        "a(bc)",
        "a(b|c)+d",
        "^(a|b)$",
        "(ab)*c?",
        "(a*)*",
        "a|(b|c)",
        "((a|b)c)?d",
        "^$",
        ".+x",
    ] {
        let ast = parse_ok(pattern);
        let rendered = ast.to_string();
        assert_eq!(parse_ok(&rendered), ast, "{pattern} rendered as {rendered}");
    }
    assert_eq!(parse_ok("(a)(b)").to_string(), "ab");
    assert_eq!(parse_ok("a(bc)").to_string(), "a(bc)");
}

#[test]
fn test_parser_errors() {
    assert_eq!(parse_pattern("()"), Err(Error::EmptyGroup { pos: 0 }));
    assert_eq!(parse_pattern("a(()b)"), Err(Error::EmptyGroup { pos: 2 }));

    assert_eq!(
        parse_pattern("*a"),
        Err(Error::LeadingQuantifier { pos: 0, lit: '*' })
    );
    assert_eq!(
        parse_pattern("(+a)"),
        Err(Error::LeadingQuantifier { pos: 1, lit: '+' })
    );
    assert_eq!(
        parse_pattern("|a"),
        Err(Error::LeadingQuantifier { pos: 0, lit: '|' })
    );
    assert_eq!(
        parse_pattern("a|?"),
        Err(Error::LeadingQuantifier { pos: 2, lit: '?' })
    );
    assert_eq!(
        parse_pattern("^*"),
        Err(Error::LeadingQuantifier { pos: 1, lit: '*' })
    );

    assert_eq!(
        parse_pattern("a|"),
        Err(Error::DanglingAlternation { pos: 1 })
    );
    assert_eq!(
        parse_pattern("(a|)"),
        Err(Error::DanglingAlternation { pos: 2 })
    );
    assert_eq!(
        parse_pattern("a|$"),
        Err(Error::DanglingAlternation { pos: 1 })
    );

    assert_eq!(
        parse_pattern("(a"),
        Err(Error::UnmatchedParen { pos: 0, lit: '(' })
    );
    assert_eq!(
        parse_pattern("ab("),
        Err(Error::UnmatchedParen { pos: 2, lit: '(' })
    );
    assert_eq!(
        parse_pattern("a)"),
        Err(Error::UnmatchedParen { pos: 1, lit: ')' })
    );
    assert_eq!(
        parse_pattern(")"),
        Err(Error::UnmatchedParen { pos: 0, lit: ')' })
    );
    assert_eq!(
        parse_pattern("(a))"),
        Err(Error::UnmatchedParen { pos: 3, lit: ')' })
    );

    assert_eq!(
        parse_pattern("a**"),
        Err(Error::DoubleQuantifier { pos: 2, lit: '*' })
    );
    assert_eq!(
        parse_pattern("(ab)+?"),
        Err(Error::DoubleQuantifier { pos: 5, lit: '?' })
    );

    assert_eq!(
        parse_pattern("^a^"),
        Err(Error::UnexpectedToken { pos: 2, lit: '^' })
    );
    assert_eq!(
        parse_pattern("a$b"),
        Err(Error::UnexpectedToken { pos: 1, lit: '$' })
    );
    assert_eq!(
        parse_pattern("(a$)"),
        Err(Error::UnexpectedToken { pos: 2, lit: '$' })
    );
    assert_eq!(
        parse_pattern("$$"),
        Err(Error::UnexpectedToken { pos: 0, lit: '$' })
    );

    assert_eq!(
        parse_pattern("^"),
        Err(Error::UnexpectedEndOfPattern { pos: 1 })
    );
    assert_eq!(
        parse_pattern("$"),
        Err(Error::UnexpectedEndOfPattern { pos: 0 })
    );
}

#[test]
fn test_stray_close_paren_is_unmatched_not_trailing() {
    for pattern in ["a)", ")", "(a))", "a|b)c", "^a)$"] {
        let err = parse_pattern(pattern).unwrap_err();
        assert!(
            matches!(err, Error::UnmatchedParen { lit: ')', .. }),
            "{pattern:?} gave {err:?}"
        );
    }
}

#[test]
fn test_group_nesting_limit() {
    let nested = |depth: usize| format!("{}a{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(parse_ok(&nested(MAX_GROUP_DEPTH)), lit('a'));
    assert_eq!(
        parse_pattern(&nested(MAX_GROUP_DEPTH + 1)),
        Err(Error::NestingTooDeep {
            pos: MAX_GROUP_DEPTH,
            limit: MAX_GROUP_DEPTH,
        })
    );
    assert_eq!(
        parse_pattern(&nested(50_000)).unwrap_err().pos(),
        MAX_GROUP_DEPTH
    );
}

#[test]
fn test_long_chains_clone_compare_and_drop() {
    let pattern = "a".repeat(100_000);
    let ast = parse_ok(&pattern);
    let copy = ast.clone();
    assert_eq!(ast, copy);
    assert_eq!(copy.to_string(), pattern);
    drop(ast);
    drop(copy);

    let pattern = format!("{}b", "a|".repeat(50_000));
    let ast = parse_ok(&pattern);
    assert_eq!(ast.to_string(), pattern);
    assert_ne!(ast, parse_ok(&format!("{}c", "a|".repeat(50_000))));

    let pattern = format!("{}b", "(a)*".repeat(30_000));
    let ast = parse_ok(&pattern);
    assert_eq!(ast.clone(), ast);
    assert_eq!(ast.to_string(), format!("{}b", "a*".repeat(30_000)));
}

#[test]
fn test_error_messages() {
    let err = parse_pattern("a**").unwrap_err();
    assert_eq!(err.to_string(), "multiple repeat '*' at 2");
    assert_eq!(err.pos(), 2);
    assert_eq!(
        parse_pattern("(a").unwrap_err().to_string(),
        "unmatched '(' at 0"
    );
    assert_eq!(
        parse_pattern(&"(".repeat(300)).unwrap_err().to_string(),
        format!("groups nested deeper than {MAX_GROUP_DEPTH} at {MAX_GROUP_DEPTH}")
    );
}
