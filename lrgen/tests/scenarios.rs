use lrgen::{generate, generate_with_fallback, CstNode, Token};

fn rule(lhs: &str, alts: Vec<Vec<&str>>) -> (String, Vec<Vec<String>>) {
    (
        lhs.to_string(),
        alts.into_iter()
            .map(|alt| alt.into_iter().map(str::to_string).collect())
            .collect(),
    )
}

/// S1: a simple left-recursive list grammar parses a run of items and
/// preserves their order in the resulting tree.
#[test]
fn s1_list_grammar_accepts_and_preserves_order() {
    let parser = generate(vec![
        rule("list", vec![vec!["item"], vec!["list", "item"]]),
        rule("item", vec![vec!["ID"]]),
    ])
    .unwrap();

    let id = parser.grammar.symbols().terminal_id("ID").unwrap();
    let tokens = vec![
        Token::with_lexeme(id, "x"),
        Token::with_lexeme(id, "y"),
    ];
    let cst = parser.parse(tokens).unwrap();
    let lexemes: Vec<_> = cst
        .leaves()
        .into_iter()
        .filter_map(|n| match n {
            CstNode::Leaf { lexeme, .. } => lexeme.clone(),
            _ => None,
        })
        .collect();
    assert_eq!(lexemes, vec!["x", "y"]);
}

/// S2: `E : E PLUS E | ID` is ambiguous; canonical LR(1) construction must
/// detect and report the conflict rather than silently picking a winner.
#[test]
fn s2_ambiguous_grammar_is_rejected_with_a_named_conflict() {
    let err = generate(vec![rule(
        "e",
        vec![vec!["e", "PLUS", "e"], vec!["ID"]],
    )])
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("conflict"), "message was: {message}");

    // The opt-in fallback path must resolve it and still report it.
    let (_parser, conflicts) = generate_with_fallback(vec![rule(
        "e",
        vec![vec!["e", "PLUS", "e"], vec!["ID"]],
    )])
    .unwrap();
    assert!(!conflicts.is_empty());
}

/// S3: a precedence-by-grammar-shape arithmetic grammar (no conflicts)
/// accepts nested expressions.
#[test]
fn s3_precedence_by_shape_accepts_nested_expressions() {
    let parser = generate(vec![
        rule("expr", vec![vec!["expr", "PLUS", "term"], vec!["term"]]),
        rule("term", vec![vec!["term", "STAR", "factor"], vec!["factor"]]),
        rule(
            "factor",
            vec![vec!["LPAREN", "expr", "RPAREN"], vec!["ID"]],
        ),
    ])
    .unwrap();

    let id = parser.grammar.symbols().terminal_id("ID").unwrap();
    let plus = parser.grammar.symbols().terminal_id("PLUS").unwrap();
    let star = parser.grammar.symbols().terminal_id("STAR").unwrap();
    let lparen = parser.grammar.symbols().terminal_id("LPAREN").unwrap();
    let rparen = parser.grammar.symbols().terminal_id("RPAREN").unwrap();

    // id + id * ( id + id )
    let tokens = vec![
        Token::new(id),
        Token::new(plus),
        Token::new(id),
        Token::new(star),
        Token::new(lparen),
        Token::new(id),
        Token::new(plus),
        Token::new(id),
        Token::new(rparen),
    ];
    let cst = parser.parse(tokens).unwrap();
    assert!(matches!(cst, CstNode::Internal { .. }));
}

/// S4: an ε-alternative is accepted and reduces with zero children.
#[test]
fn s4_epsilon_alternative_reduces_with_no_children() {
    let parser = generate(vec![
        rule("stmt", vec![vec!["IF", "expr", "opt_else"]]),
        rule("expr", vec![vec!["ID"]]),
        rule("opt_else", vec![vec!["ELSE", "ID"], vec![]]),
    ])
    .unwrap();

    let if_t = parser.grammar.symbols().terminal_id("IF").unwrap();
    let id = parser.grammar.symbols().terminal_id("ID").unwrap();
    let cst = parser
        .parse(vec![Token::new(if_t), Token::new(id)])
        .unwrap();

    assert_eq!(cst.leaves().len(), 2);
    let opt_else = parser.grammar.symbols().nonterminal_id("opt_else").unwrap();
    let stmt_children = match &cst {
        CstNode::Internal { children, .. } => children,
        CstNode::Leaf { .. } => panic!("expected the stmt node"),
    };
    let opt_else_node = stmt_children
        .iter()
        .find(|n| matches!(n, CstNode::Internal { nonterminal, .. } if *nonterminal == opt_else))
        .expect("opt_else node present among stmt's children");
    assert_eq!(opt_else_node.children().len(), 0);
}

/// S5: end-of-input discipline. a truncated input (missing its final
/// token) is rejected at the implicit `$`, not silently accepted.
#[test]
fn s5_truncated_input_is_rejected_at_end_of_input() {
    let parser = generate(vec![
        rule("pair", vec![vec!["ID", "ID"]]),
    ])
    .unwrap();
    let id = parser.grammar.symbols().terminal_id("ID").unwrap();
    let err = parser.parse(vec![Token::new(id)]).unwrap_err();
    let _ = err; // ParseError at $, any Err is the right outcome here.
}

/// S6: generating tables for the same grammar twice yields byte-identical
/// emitted output.
#[test]
fn s6_construction_is_deterministic_across_runs() {
    let rules = || {
        vec![
            rule("list", vec![vec!["item"], vec!["list", "item"]]),
            rule("item", vec![vec!["ID"]]),
        ]
    };
    let a = generate(rules()).unwrap().emit().to_json_pretty().unwrap();
    let b = generate(rules()).unwrap().emit().to_json_pretty().unwrap();
    assert_eq!(a, b);
}
