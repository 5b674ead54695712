//! Grammar layer: the static table of allowed elements.
//!
//! A [`GrammarTable`] maps element names to [`GrammarRule`]s describing the
//! element's classification tag, attributes, and allowed parents and
//! children. [`ecschema_3_2`] is the built-in table for ECSchema 3.2.

mod classification;
mod ecschema;
mod rule;

pub use classification::{TokenModifiers, TokenType};
pub use ecschema::ecschema_3_2;
pub use rule::{AttributeRule, ChildRule, GrammarError, GrammarRule, GrammarTable, ValueType};
