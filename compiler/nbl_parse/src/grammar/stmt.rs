//! Statement-level grammar.
//!
//! ```text
//! declaration -> funDecl | varDecl | statement
//! statement   -> printStmt | ifStmt | whileStmt | returnStmt
//!              | block | exprStmt
//! ```

use std::rc::Rc;

use nbl_ir::{FunctionDecl, Stmt, Token, TokenKind};

use crate::error::ParseResult;
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn declaration(&mut self) -> ParseResult<Stmt> {
        // `fun` followed by a name is a declaration; a bare `fun` is
        // an anonymous function literal and falls through to the
        // expression grammar.
        if self.cursor.check(TokenKind::Fun) && self.cursor.check_next(TokenKind::Identifier) {
            self.cursor.advance();
            return self.function_declaration();
        }
        if self.cursor.match_kind(TokenKind::Var) {
            return self.var_declaration();
        }
        self.statement()
    }

    fn function_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self
            .cursor
            .consume(TokenKind::Identifier, "Expect function name")?
            .clone();
        let (params, body) = self.function_parts("Expect '(' after function name")?;
        Ok(Stmt::Function {
            decl: Rc::new(FunctionDecl {
                name: Some(name),
                params,
                body,
            }),
        })
    }

    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self
            .cursor
            .consume(TokenKind::Identifier, "Expect variable name")?
            .clone();

        let initializer = if self.cursor.match_kind(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        self.cursor.consume(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration",
        )?;
        Ok(Stmt::Var { name, initializer })
    }

    fn statement(&mut self) -> ParseResult<Stmt> {
        if self.cursor.match_kind(TokenKind::Print) {
            return self.print_statement();
        }
        if self.cursor.match_kind(TokenKind::If) {
            return self.if_statement();
        }
        if self.cursor.match_kind(TokenKind::While) {
            return self.while_statement();
        }
        if self.cursor.match_kind(TokenKind::Return) {
            return self.return_statement();
        }
        if self.cursor.match_kind(TokenKind::LeftBrace) {
            return Ok(Stmt::Block {
                statements: self.block()?,
            });
        }
        self.expression_statement()
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.cursor
            .consume(TokenKind::Semicolon, "Expect ';' after value")?;
        Ok(Stmt::Print { expr })
    }

    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.cursor
            .consume(TokenKind::LeftParen, "Expect '(' after 'if'")?;
        let condition = self.expression()?;
        self.cursor
            .consume(TokenKind::RightParen, "Expect ')' after if condition")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.cursor.match_kind(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.cursor
            .consume(TokenKind::LeftParen, "Expect '(' after 'while'")?;
        let condition = self.expression()?;
        self.cursor
            .consume(TokenKind::RightParen, "Expect ')' after while condition")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { condition, body })
    }

    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.cursor.previous().clone();
        let value = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor
            .consume(TokenKind::Semicolon, "Expect ';' after return value")?;
        Ok(Stmt::Return { keyword, value })
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.cursor
            .consume(TokenKind::Semicolon, "Expect ';' after expression")?;
        Ok(Stmt::Expression { expr })
    }

    /// Statements up to the closing `}` of a block.
    pub(crate) fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            statements.push(self.declaration()?);
        }
        self.cursor
            .consume(TokenKind::RightBrace, "Expect '}' after block")?;
        Ok(statements)
    }

    /// Shared tail of function declarations and anonymous function
    /// literals: `( params ) { body }`.
    pub(crate) fn function_parts(
        &mut self,
        open_paren_message: &str,
    ) -> ParseResult<(Vec<Token>, Vec<Stmt>)> {
        self.cursor
            .consume(TokenKind::LeftParen, open_paren_message)?;

        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                let param = self
                    .cursor
                    .consume(TokenKind::Identifier, "Expect parameter name")?
                    .clone();
                params.push(param);
                if !self.cursor.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.cursor
            .consume(TokenKind::RightParen, "Expect ')' after parameters")?;
        self.cursor
            .consume(TokenKind::LeftBrace, "Expect '{' before function body")?;
        let body = self.block()?;
        Ok((params, body))
    }
}
