//! Expressions are parsed in two steps: the string is split into a flat list of tokens,
//! and the tokens are then consumed by a recursive descent parser with one method per
//! priority level.

use super::BooleanExpression;
use crate::CecError;
use std::iter::Peekable;
use std::str::Chars;

/// **(internal)** Characters that cannot appear in a variable name.
const NOT_IN_VAR_NAME: [char; 9] = ['!', '&', '|', '^', '=', '<', '>', '(', ')'];

/// **(internal)** Tokens that can appear in a Boolean expression.
#[derive(Clone, Debug, Eq, PartialEq)]
enum ExprToken {
    Not,        // '!'
    And,        // '&'
    Or,         // '|'
    Xor,        // '^'
    Imp,        // '=>'
    Iff,        // '<=>'
    Open,       // '('
    Close,      // ')'
    Id(String), // 'variable'
}

/// Takes a string and turns it into a `BooleanExpression`, or `CecError::InvalidExpression`
/// if the string is not a valid formula.
pub fn parse_boolean_expression(from: &str) -> Result<BooleanExpression, CecError> {
    let tokens = tokenize(from)?;
    let mut parser = ExprParser {
        tokens: &tokens,
        position: 0,
    };
    let expression = parser.iff()?;
    match parser.peek() {
        None => Ok(expression),
        Some(token) => Err(invalid(format!("Unexpected {:?} after formula.", token))),
    }
}

/// **(internal)** Make an `InvalidExpression` error.
fn invalid(message: String) -> CecError {
    CecError::InvalidExpression(message)
}

/// **(internal)** Split the string into tokens. Whitespace only separates tokens.
fn tokenize(from: &str) -> Result<Vec<ExprToken>, CecError> {
    let mut data = from.chars().peekable();
    let mut output = Vec::new();
    while let Some(c) = data.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '!' => ExprToken::Not,
            '&' => ExprToken::And,
            '|' => ExprToken::Or,
            '^' => ExprToken::Xor,
            '(' => ExprToken::Open,
            ')' => ExprToken::Close,
            '=' => {
                expect_char(&mut data, '>')?;
                ExprToken::Imp
            }
            '<' => {
                expect_char(&mut data, '=')?;
                expect_char(&mut data, '>')?;
                ExprToken::Iff
            }
            '>' => return Err(invalid("Unexpected '>'.".to_string())),
            c => {
                let mut name = String::new();
                name.push(c);
                while let Some(c) = data.peek() {
                    if c.is_whitespace() || NOT_IN_VAR_NAME.contains(c) {
                        break;
                    }
                    name.push(*c);
                    data.next();
                }
                ExprToken::Id(name)
            }
        };
        output.push(token);
    }
    Ok(output)
}

/// **(internal)** Consume the `expected` character, or fail.
fn expect_char(data: &mut Peekable<Chars>, expected: char) -> Result<(), CecError> {
    match data.next() {
        Some(c) if c == expected => Ok(()),
        Some(c) => Err(invalid(format!("Expected '{}', found '{}'.", expected, c))),
        None => Err(invalid(format!("Expected '{}', found end of input.", expected))),
    }
}

/// **(internal)** Recursive descent parser over a token list.
struct ExprParser<'a> {
    tokens: &'a [ExprToken],
    position: usize,
}

type ParseResult = Result<BooleanExpression, CecError>;

impl<'a> ExprParser<'a> {
    fn peek(&self) -> Option<&'a ExprToken> {
        self.tokens.get(self.position)
    }

    fn next(&mut self) -> Option<&'a ExprToken> {
        let token = self.tokens.get(self.position);
        self.position += 1;
        token
    }

    /// Consume the next token if it is equal to `token`.
    fn accept(&mut self, token: &ExprToken) -> bool {
        if self.peek() == Some(token) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Parse a right-associative chain of `operand op operand op ...`.
    fn binary(
        &mut self,
        op: ExprToken,
        operand: fn(&mut Self) -> ParseResult,
        make: fn(Box<BooleanExpression>, Box<BooleanExpression>) -> BooleanExpression,
    ) -> ParseResult {
        let left = operand(self)?;
        if self.accept(&op) {
            let right = self.binary(op, operand, make)?;
            Ok(make(Box::new(left), Box::new(right)))
        } else {
            Ok(left)
        }
    }

    fn iff(&mut self) -> ParseResult {
        self.binary(ExprToken::Iff, Self::imp, BooleanExpression::Iff)
    }

    fn imp(&mut self) -> ParseResult {
        self.binary(ExprToken::Imp, Self::or, BooleanExpression::Imp)
    }

    fn or(&mut self) -> ParseResult {
        self.binary(ExprToken::Or, Self::and, BooleanExpression::Or)
    }

    fn and(&mut self) -> ParseResult {
        self.binary(ExprToken::And, Self::xor, BooleanExpression::And)
    }

    fn xor(&mut self) -> ParseResult {
        self.binary(ExprToken::Xor, Self::terminal, BooleanExpression::Xor)
    }

    /// Negations, parenthesized formulas, constants and variables.
    fn terminal(&mut self) -> ParseResult {
        match self.next() {
            None => Err(invalid("Expected formula, found nothing.".to_string())),
            Some(ExprToken::Not) => Ok(BooleanExpression::Not(Box::new(self.terminal()?))),
            Some(ExprToken::Open) => {
                let inner = self.iff()?;
                if self.accept(&ExprToken::Close) {
                    Ok(inner)
                } else {
                    Err(invalid("Expected ')'.".to_string()))
                }
            }
            Some(ExprToken::Id(name)) => Ok(match name.as_str() {
                "true" => BooleanExpression::Const(true),
                "false" => BooleanExpression::Const(false),
                _ => BooleanExpression::Variable(name.clone()),
            }),
            Some(token) => Err(invalid(format!(
                "Expected variable name or (...), found {:?}.",
                token
            ))),
        }
    }
}
