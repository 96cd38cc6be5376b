//! Fixed keyword table.

use nbl_ir::TokenKind;

/// Look up an identifier lexeme in the keyword table.
///
/// A match on length first would buy nothing here; the table is small
/// enough that a direct string match compiles to a jump table.
pub(crate) fn keyword_kind(lexeme: &str) -> Option<TokenKind> {
    let kind = match lexeme {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "fun" => TokenKind::Fun,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}
