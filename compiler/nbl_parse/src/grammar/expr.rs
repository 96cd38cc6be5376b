//! Expression-level grammar: the precedence ladder.
//!
//! Lowest to highest: assignment, `or`, `and`, equality, comparison,
//! term, factor, unary, call, primary. Binary levels left-associate by
//! folding; assignment right-associates by recursing.

use std::rc::Rc;

use nbl_ir::{Expr, FunctionDecl, Literal, TokenKind};

use crate::error::{ParseError, ParseResult};
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.or()?;

        if self.cursor.match_kind(TokenKind::Equal) {
            let equals = self.cursor.previous().clone();
            let value = self.assignment()?;

            return match expr {
                Expr::Variable { name } => Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                }),
                // Report without unwinding: the right-hand side parsed
                // fine, so there is no need to synchronize.
                other => {
                    self.diagnostics
                        .push(ParseError::new(&equals, "Invalid assignment target").into_diagnostic());
                    Ok(other)
                }
            };
        }

        Ok(expr)
    }

    fn or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.and()?;
        while self.cursor.match_kind(TokenKind::Or) {
            let op = self.cursor.previous().clone();
            let right = self.and()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.equality()?;
        while self.cursor.match_kind(TokenKind::And) {
            let op = self.cursor.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        let mut expr = self.comparison()?;
        while self
            .cursor
            .match_any(&[TokenKind::BangEqual, TokenKind::EqualEqual])
        {
            let op = self.cursor.previous().clone();
            let right = self.comparison()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr = self.term()?;
        while self.cursor.match_any(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let op = self.cursor.previous().clone();
            let right = self.term()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.factor()?;
        while self.cursor.match_any(&[TokenKind::Minus, TokenKind::Plus]) {
            let op = self.cursor.previous().clone();
            let right = self.factor()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;
        while self.cursor.match_any(&[TokenKind::Slash, TokenKind::Star]) {
            let op = self.cursor.previous().clone();
            let right = self.unary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        if self.cursor.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let op = self.cursor.previous().clone();
            let operand = self.unary()?;
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
            });
        }
        self.call()
    }

    /// Postfix call chains: `f()`, `f()()`, `f(a)(b)(c)`.
    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;
        while self.cursor.match_kind(TokenKind::LeftParen) {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                args.push(self.expression()?);
                if !self.cursor.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        // Arity is checked at call time, not here; the closing paren
        // is kept for call-site error locations.
        let paren = self
            .cursor
            .consume(TokenKind::RightParen, "Expect ')' after arguments")?
            .clone();
        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            args,
        })
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        if self.cursor.match_kind(TokenKind::False) {
            return Ok(Expr::Literal {
                value: Literal::Bool(false),
            });
        }
        if self.cursor.match_kind(TokenKind::True) {
            return Ok(Expr::Literal {
                value: Literal::Bool(true),
            });
        }
        if self.cursor.match_kind(TokenKind::Nil) {
            return Ok(Expr::Literal {
                value: Literal::Nil,
            });
        }

        if self
            .cursor
            .match_any(&[TokenKind::Number, TokenKind::String])
        {
            let token = self.cursor.previous();
            return match &token.literal {
                Some(literal) => Ok(Expr::Literal {
                    value: literal.clone(),
                }),
                None => Err(ParseError::new(token, "Literal token missing its value")),
            };
        }

        if self.cursor.match_kind(TokenKind::Identifier) {
            return Ok(Expr::Variable {
                name: self.cursor.previous().clone(),
            });
        }

        if self.cursor.match_kind(TokenKind::LeftParen) {
            let expr = self.expression()?;
            self.cursor
                .consume(TokenKind::RightParen, "Expect ')' after expression")?;
            return Ok(Expr::Grouping {
                expr: Box::new(expr),
            });
        }

        if self.cursor.match_kind(TokenKind::Fun) {
            let (params, body) = self.function_parts("Expect '(' after 'fun'")?;
            return Ok(Expr::Function {
                decl: Rc::new(FunctionDecl {
                    name: None,
                    params,
                    body,
                }),
            });
        }

        Err(self.error("Expect expression"))
    }
}
