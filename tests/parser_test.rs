use pretty_assertions::assert_eq;
use trust_modal::{
    analyzer::ParseError,
    config::EngineConfig,
    parse, parse_with_config,
    tokenizer::{
        symbol::Operator,
        token::{tokenize, Token, TokenizerError},
    },
    Error, Expression,
};

fn var(name: &str) -> Expression {
    Expression::variable(name)
}

#[test]
fn it_tokenizes_every_symbol() {
    let tokens: Vec<Token> = tokenize("~ [] <> & | -> -< (p)")
        .unwrap()
        .into_iter()
        .map(|t| t.token)
        .collect();
    assert_eq!(tokens.len(), 11);
    assert_eq!(tokens[0], Token::Operator(Operator::Negation));
    assert_eq!(tokens[6], Token::Operator(Operator::Coimplication));
    assert_eq!(tokens[8], Token::Variable("p".to_string()));
    assert_eq!(tokens[10], Token::Eof);
}

#[test]
fn it_rejects_incomplete_symbols() {
    for input in ["-x", "[x", "<x", "a -", "[", "<"] {
        match tokenize(input) {
            Err(TokenizerError::IncompleteSymbol { .. }) => {}
            other => panic!("{}: unexpected result {:?}", input, other),
        }
    }
    assert!(matches!(
        tokenize("@"),
        Err(TokenizerError::InvalidCharacter { found: '@', .. })
    ));
}

#[test]
fn it_parses_box_over_conjunction() {
    assert_eq!(
        parse("[] a & b").unwrap(),
        Expression::box_modality(Expression::conjunction(var("a"), var("b")))
    );
}

#[test]
fn it_nests_binary_chains_right() {
    assert_eq!(
        parse("a & b | c").unwrap(),
        Expression::conjunction(var("a"), Expression::disjunction(var("b"), var("c")))
    );
}

#[test]
fn it_splits_multi_letter_names() {
    // `ab` is two variables, so the second one is trailing input
    assert!(matches!(
        parse("ab"),
        Err(Error::Parse {
            source: ParseError::UnexpectedToken { position: 1, .. },
            ..
        })
    ));
}

#[test]
fn it_reports_unmatched_parenthesis() {
    let error = parse("(a -> b").unwrap_err();
    assert!(matches!(
        error,
        Error::Parse {
            source: ParseError::UnexpectedToken { .. },
            ..
        }
    ));
    let span = error.span().unwrap();
    assert_eq!((span.line, span.column), (1, 8));
}

#[test]
fn it_reports_position_on_later_lines() {
    let error = parse("a &\n  &").unwrap_err();
    let span = error.span().unwrap();
    assert_eq!((span.line, span.column), (2, 3));
}

#[test]
fn it_limits_nesting_depth() {
    let formula = format!("{}p", "~".repeat(100));
    assert!(parse(&formula).is_ok());

    let config = EngineConfig::default().with_max_formula_depth(50);
    assert!(matches!(
        parse_with_config(&formula, &config),
        Err(Error::Parse {
            source: ParseError::DepthLimitExceeded { max_depth: 50, .. },
            ..
        })
    ));
}

#[test]
fn it_round_trips_through_display() {
    for input in [
        "p",
        "~p",
        "[] a & b",
        "<> (a -> b) ",
        "a & b | c -> d -< e",
        "~[]<>(p | (q))",
    ] {
        let expression = parse(input).unwrap();
        assert_eq!(parse(&expression.to_string()).unwrap(), expression);
    }
}
