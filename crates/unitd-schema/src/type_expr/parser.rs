//! Recursive-descent parser for type expressions.

use super::ast::TypeExpr;
use super::error::TypeExprError;
use super::lexer::{Token, lex, token_text};
use super::syntax_kind::SyntaxKind;

struct Parser<'src> {
    source: &'src str,
    tokens: &'src [Token],
    pos: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, tokens: &'src [Token]) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<SyntaxKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    fn advance(&mut self) -> Option<&'src Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Offset of the current token, or end of input.
    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.source.len(), Token::offset)
    }

    fn parse_type(&mut self) -> Result<TypeExpr, TypeExprError> {
        let offset = self.offset();
        let base = match self.advance() {
            Some(token) if token.kind == SyntaxKind::Ident => token_text(self.source, token),
            _ => {
                return Err(TypeExprError::ExpectedIdent {
                    input: self.source.to_string(),
                    offset,
                });
            }
        };

        if self.peek() != Some(SyntaxKind::BracketOpen) {
            return Ok(TypeExpr::leaf(base));
        }
        self.advance();

        let expr = if self.peek() == Some(SyntaxKind::Ellipsis) {
            self.advance();
            TypeExpr::repeated(base)
        } else {
            TypeExpr::nested(base, self.parse_type()?)
        };

        if self.peek() != Some(SyntaxKind::BracketClose) {
            return Err(TypeExprError::MissingCloseBracket {
                input: self.source.to_string(),
                offset: self.offset(),
            });
        }
        self.advance();

        Ok(expr)
    }
}

/// Parses one type from the front of `tokens`, returning it with the number
/// of tokens consumed. Tokens after the type are left alone.
pub fn parse_prefix(source: &str, tokens: &[Token]) -> Result<(TypeExpr, usize), TypeExprError> {
    let mut parser = Parser::new(source, tokens);
    let expr = parser.parse_type()?;
    Ok((expr, parser.pos))
}

/// Parses a complete type expression.
pub fn parse_type_expr(input: &str) -> Result<TypeExpr, TypeExprError> {
    let tokens = lex(input);

    if let Some(garbage) = tokens.iter().find(|t| t.kind == SyntaxKind::Garbage) {
        return Err(TypeExprError::UnexpectedCharacter {
            input: input.to_string(),
            offset: garbage.offset(),
            found: token_text(input, garbage).to_string(),
        });
    }

    if tokens.is_empty() {
        return Err(TypeExprError::Empty {
            input: input.to_string(),
        });
    }

    let (expr, consumed) = parse_prefix(input, &tokens)?;
    if let Some(extra) = tokens.get(consumed) {
        return Err(TypeExprError::TrailingTokens {
            input: input.to_string(),
            offset: extra.offset(),
        });
    }

    Ok(expr)
}
