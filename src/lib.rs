//! # Pegre - Parsing Expression Grammar Combinators
//!
//! Pegre builds PEG parsers out of small functions instead of a grammar file.
//! A grammar is a mapping from rule names to parsers; parsers refer to other
//! rules by name through [`nonterminal`], so rules can be recursive and can be
//! written in any order.
//!
//! Every parser takes the remaining input and the grammar, and either matches a
//! prefix of the input, producing a [`Value`], or does not match and consumes
//! nothing. The library emphasizes:
//!
//! - **Ordered choice**: the first matching alternative wins, no ambiguity
//! - **Value interpretation**: any parser can turn its raw match into the value
//!   you want with [`ValueExt`], or drop out of lists with [`ValueExt::ignore`]
//! - **Loud grammar bugs**: a reference to a missing rule is a [`GrammarError`],
//!   never a silent backtrack
//! - **Zero panics**: all errors are handled through `Result` types
//!
//! There is no memoization and no support for left recursion: a rule that
//! calls itself without consuming input first will not terminate.

pub mod between;
pub mod choice;
pub mod end;
pub mod error;
pub mod grammar;
pub mod literal;
pub mod lookahead;
pub mod many;
pub mod nonterminal;
pub mod optional;
pub mod parser;
pub mod pattern;
pub mod peg;
pub mod sequence;
pub mod some;
pub mod value;
pub mod valued;

pub use between::{Bounded, bounded};
pub use choice::{Choice, choice};
pub use end::{EndOfInput, end_of_input};
pub use error::{GrammarError, Location, ParseError, PegError, ValueError};
pub use grammar::Grammar;
pub use literal::{Literal, literal};
pub use lookahead::{AndNext, NotNext, and_next, not_next};
pub use many::{ZeroOrMore, zero_or_more};
pub use nonterminal::{Nonterminal, nonterminal};
pub use optional::{Optional, optional};
pub use parser::{Match, ParseResult, Parser, Rule, boxed};
pub use pattern::{Pattern, regex};
pub use peg::{DEFAULT_START, Peg, PegOptions};
pub use sequence::{Sequence, sequence};
pub use some::{OneOrMore, one_or_more};
pub use value::{IGNORE, Value};
pub use valued::{ValueExt, ValueSpec, Valued};
