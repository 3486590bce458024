//! Converting a fully parenthesized expression must not change its value.

use proptest::prelude::*;
use stackcalc::syntax::{infix_to_postfix, infix_to_prefix, Notation};

#[derive(Debug, Clone)]
enum Expr {
    Lit(i64),
    Bin(Box<Expr>, &'static str, Box<Expr>),
}

impl Expr {
    fn infix(&self) -> String {
        match self {
            Expr::Lit(n) => n.to_string(),
            Expr::Bin(l, op, r) => format!("({} {} {})", l.infix(), op, r.infix()),
        }
    }

    fn leaves(&self) -> usize {
        match self {
            Expr::Lit(_) => 1,
            Expr::Bin(l, _, r) => l.leaves() + r.leaves(),
        }
    }

    fn eval(&self) -> i64 {
        match self {
            Expr::Lit(n) => *n,
            Expr::Bin(l, op, r) => apply(op, l.eval(), r.eval()),
        }
    }
}

fn apply(op: &str, a: i64, b: i64) -> i64 {
    match op {
        "+" => a.wrapping_add(b),
        "-" => a.wrapping_sub(b),
        "*" => a.wrapping_mul(b),
        _ => panic!("unexpected operator {}", op),
    }
}

fn words(notation: &Notation<'_>) -> Vec<String> {
    notation.iter().map(ToString::to_string).collect()
}

fn eval_postfix(words: &[String]) -> i64 {
    let mut stack = vec![];
    for word in words {
        match word.parse::<i64>() {
            Ok(n) => stack.push(n),
            Err(_) => {
                let b = stack.pop().unwrap();
                let a = stack.pop().unwrap();
                stack.push(apply(word, a, b));
            }
        }
    }
    assert_eq!(stack.len(), 1);
    stack[0]
}

fn eval_prefix(words: &[String]) -> i64 {
    let mut stack = vec![];
    for word in words.iter().rev() {
        match word.parse::<i64>() {
            Ok(n) => stack.push(n),
            Err(_) => {
                let a = stack.pop().unwrap();
                let b = stack.pop().unwrap();
                stack.push(apply(word, a, b));
            }
        }
    }
    assert_eq!(stack.len(), 1);
    stack[0]
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = (0i64..1000).prop_map(Expr::Lit);
    leaf.prop_recursive(6, 64, 2, |inner| {
        (inner.clone(), prop::sample::select(vec!["+", "-", "*"]), inner)
            .prop_map(|(l, op, r)| Expr::Bin(Box::new(l), op, Box::new(r)))
    })
}

proptest! {
    #[test]
    fn postfix_preserves_value(e in expr()) {
        let source = e.infix();
        let postfix = infix_to_postfix(&source).unwrap();
        prop_assert_eq!(eval_postfix(&words(&postfix)), e.eval());
    }

    #[test]
    fn prefix_preserves_value(e in expr()) {
        let source = e.infix();
        let prefix = infix_to_prefix(&source).unwrap();
        prop_assert_eq!(eval_prefix(&words(&prefix)), e.eval());
    }

    #[test]
    fn both_notations_keep_operand_order(e in expr()) {
        let source = e.infix();
        let operands = |words: Vec<String>| -> Vec<String> {
            words.into_iter().filter(|w| w.parse::<i64>().is_ok()).collect()
        };
        let postfix = operands(words(&infix_to_postfix(&source).unwrap()));
        let prefix = operands(words(&infix_to_prefix(&source).unwrap()));
        prop_assert_eq!(&postfix, &prefix);
        prop_assert_eq!(postfix.len(), e.leaves());
    }
}

#[test]
fn unparenthesized_left_assoc_chains() {
    let source = "100 - 7 - 3 * 2 - 1";
    let expected = 100 - 7 - 3 * 2 - 1;
    let postfix = infix_to_postfix(source).unwrap();
    let prefix = infix_to_prefix(source).unwrap();
    assert_eq!(eval_postfix(&words(&postfix)), expected);
    assert_eq!(eval_prefix(&words(&prefix)), expected);
}
