//! Property-based tests for the lexer and parser.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::ast::{BinaryOp, Expr};
    use crate::parser::parse;
    use crate::token::tokenize;
    use tessera_num::Number;

    fn lit(n: i64) -> Expr {
        Expr::Literal(Number::from(n))
    }

    proptest! {
        #[test]
        fn lexer_never_panics(input in "\\PC{0,64}") {
            let _ = tokenize(&input);
        }

        #[test]
        fn parser_never_panics(input in "\\PC{0,64}") {
            let _ = parse(&input);
        }

        #[test]
        fn parser_never_panics_on_grammar_soup(input in "[-+*/()%<>&|^~,.0-9a-z'\" ]{0,48}") {
            let _ = parse(&input);
        }

        #[test]
        fn rendered_binary_expressions_reparse(a in 0i64..1000, b in 0i64..1000) {
            for op in BinaryOp::ALL {
                let text = format!("{a} {} {b}", op.symbol());
                let parsed = parse(&text);
                prop_assert_eq!(parsed, Ok(Expr::binary(op, lit(a), lit(b))), "input {}", text);
            }
        }
    }
}
