//! Grammar rules, split by statement and expression levels.

mod expr;
mod stmt;
