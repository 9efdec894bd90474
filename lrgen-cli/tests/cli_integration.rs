use lrgen_cli::meta;

#[test]
fn meta_front_end_feeds_a_working_generator() {
    let source = "list : item | list item ;\nitem : ID ;\n";
    let raw_rules = meta::read_grammar(source).unwrap();
    let parser = lrgen::generate(raw_rules).unwrap();

    let id = parser.grammar.symbols().terminal_id("ID").unwrap();
    let cst = parser
        .parse(vec![lrgen::Token::new(id), lrgen::Token::new(id)])
        .unwrap();
    assert_eq!(cst.leaves().len(), 2);
}

#[test]
fn malformed_grammar_is_rejected_with_position_information() {
    let err = meta::read_grammar("list : item \n").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("line"), "message was: {message}");
}
