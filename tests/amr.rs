//! Abstract Meaning Representation graphs, built into caller-defined types
//!
//! For "Did the girl find the boy?":
//!
//! ```text
//! (f / find-01
//!    :ARG0 (g / girl)
//!    :ARG1 (b / boy)
//!    :mode interrogative)
//! ```

use pegre::{
    Grammar, GrammarError, Nonterminal, Peg, Valued, Value, ValueError, ValueExt, bounded,
    choice, nonterminal, regex, sequence, zero_or_more,
};

#[derive(Debug)]
struct AmrNode {
    identifier: String,
    relations: Vec<(String, Value)>,
}

fn string(value: Value) -> Result<String, ValueError> {
    match value {
        Value::Str(s) => Ok(s),
        other => Err(ValueError::custom(format!("expected string, found {}", other.kind()))),
    }
}

fn node_def() -> Valued<Nonterminal> {
    nonterminal("NODEDEF").try_map(|value| {
        let mut parts = value.into_list()?.into_iter();
        let identifier = string(parts.next().unwrap_or(Value::Nil))?;
        let relations = parts
            .next()
            .unwrap_or(Value::List(vec![]))
            .into_list()?
            .into_iter()
            .map(|relation| {
                let mut pair = relation.into_list()?.into_iter();
                let role = string(pair.next().unwrap_or(Value::Nil))?;
                let target = pair.next().unwrap_or(Value::Nil);
                Ok((role, target))
            })
            .collect::<Result<Vec<_>, ValueError>>()?;
        Ok(Value::opaque(AmrNode {
            identifier,
            relations,
        }))
    })
}

fn instance() -> Valued<Nonterminal> {
    nonterminal("INSTANCE").try_map(|value| {
        let concept = pegre::value::nth(1)(value)?;
        Ok(Value::List(vec![Value::from(":instance-of"), concept]))
    })
}

fn amr() -> Result<Peg, GrammarError> {
    let space = || regex(r"\s*").map(ValueExt::ignore);
    let grammar = Grammar::new()
        .rule("start", nonterminal("NODE"))
        .rule(
            "NODE",
            bounded(regex(r"\(\s*")?, node_def(), regex(r"\s*\)")?),
        )
        .rule(
            "NODEDEF",
            sequence![
                nonterminal("VAR"),
                zero_or_more(choice![nonterminal("RELATION"), instance()]),
            ],
        )
        .rule(
            "INSTANCE",
            sequence![regex(r"\s*/\s*")?, regex(r"[^\s()]+")?],
        )
        .rule(
            "RELATION",
            sequence![space()?, regex(r":[^\s()/]+")?, space()?, nonterminal("VALUE")],
        )
        .rule("VALUE", choice![nonterminal("NODE"), nonterminal("VAR")])
        .rule("VAR", regex(r"\w+")?);
    Ok(Peg::new(grammar))
}

#[test]
fn test_amr_builds_nodes() {
    let text = "(f / find-01\n   :ARG0 (g / girl)\n   :ARG1 (b / boy)\n   :mode interrogative)";
    let value = amr().unwrap().require_full_match(true).parse(text).unwrap();

    let top = value.downcast_ref::<AmrNode>().unwrap();
    assert_eq!(top.identifier, "f");

    let roles: Vec<&str> = top.relations.iter().map(|(role, _)| role.as_str()).collect();
    assert_eq!(roles, vec![":instance-of", ":ARG0", ":ARG1", ":mode"]);
    assert_eq!(top.relations[0].1, Value::from("find-01"));
    assert_eq!(top.relations[3].1, Value::from("interrogative"));

    let girl = top.relations[1].1.downcast_ref::<AmrNode>().unwrap();
    assert_eq!(girl.identifier, "g");
    assert_eq!(
        girl.relations[0],
        (":instance-of".to_string(), Value::from("girl"))
    );
}

#[test]
fn test_amr_reentrant_variable() {
    let text = "(w / want-01 :ARG0 (b / boy) :ARG1 (g / go-01 :ARG0 b))";
    let value = amr().unwrap().parse(text).unwrap();
    let want = value.downcast_ref::<AmrNode>().unwrap();
    let go = want.relations[2].1.downcast_ref::<AmrNode>().unwrap();
    assert_eq!(go.identifier, "g");
    assert_eq!(go.relations[1], (":ARG0".to_string(), Value::from("b")));
}

#[test]
fn test_amr_unclosed_node() {
    assert!(amr().unwrap().parse("(f / find-01 :ARG0 (g / girl)").is_err());
}
