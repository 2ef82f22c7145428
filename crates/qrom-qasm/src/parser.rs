//! Assembler for `OpenQASM` 2.0.
//!
//! Statements are lowered directly into flat [`GateRecord`]s while parsing.
//! Registers are flattened to global indices in declaration order, so
//! `qreg a[2]; qreg b[3];` places `b[0]` at global qubit 2.

use rustc_hash::FxHashMap;

use qrom_ir::{GateRecord, Program};

use crate::error::{ParseError, ParseResult};
use crate::lexer::{SpannedToken, Token, tokenize};

/// Assemble an `OpenQASM` 2.0 source string into a flat [`Program`].
///
/// Gate names are passed through lower-cased and unvalidated; deciding
/// whether a name is meaningful is left to the consumer.
pub fn parse(source: &str) -> ParseResult<Program> {
    let mut parser = Parser::new(source)?;
    parser.parse_program()?;
    Ok(parser.finish())
}

/// A resolved operand: either a single global index or a whole register.
#[derive(Debug, Clone)]
enum Operand {
    Single(u32),
    Register { start: u32, size: u32 },
}

impl Operand {
    fn width(&self) -> Option<usize> {
        match self {
            Operand::Single(_) => None,
            Operand::Register { size, .. } => Some(*size as usize),
        }
    }

    fn at(&self, i: usize) -> u32 {
        match self {
            Operand::Single(idx) => *idx,
            Operand::Register { start, .. } => start + i as u32,
        }
    }

    fn all(&self) -> Vec<u32> {
        match self {
            Operand::Single(idx) => vec![*idx],
            Operand::Register { start, size, .. } => (*start..start + size).collect(),
        }
    }
}

/// Parser state.
struct Parser {
    tokens: Vec<SpannedToken>,
    line_starts: Vec<usize>,
    pos: usize,
    /// Quantum registers: name -> (`start`, `size`).
    qregs: FxHashMap<String, (u32, u32)>,
    /// Classical registers: name -> (`start`, `size`).
    cregs: FxHashMap<String, (u32, u32)>,
    program: Program,
}

#[allow(clippy::cast_possible_truncation)]
impl Parser {
    /// Create a new parser from source.
    fn new(source: &str) -> ParseResult<Self> {
        let mut tokens = Vec::new();
        for result in tokenize(source) {
            match result {
                Ok(t) => tokens.push(t),
                Err((span, msg)) => {
                    return Err(ParseError::LexerError {
                        position: span.start,
                        message: msg,
                    });
                }
            }
        }

        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Ok(Self {
            tokens,
            line_starts,
            pos: 0,
            qregs: FxHashMap::default(),
            cregs: FxHashMap::default(),
            program: Program::default(),
        })
    }

    fn finish(self) -> Program {
        self.program
    }

    /// 1-based source line of the current token.
    fn line(&self) -> usize {
        let offset = self
            .tokens
            .get(self.pos.min(self.tokens.len().saturating_sub(1)))
            .map_or(0, |t| t.span.start);
        self.line_starts.partition_point(|&start| start <= offset)
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn advance(&mut self) -> Option<Token> {
        if self.is_eof() {
            return None;
        }
        let token = self.tokens[self.pos].token.clone();
        self.pos += 1;
        Some(token)
    }

    fn unexpected(&self, expected: &str, found: &Token) -> ParseError {
        ParseError::UnexpectedToken {
            line: self.line(),
            expected: expected.into(),
            found: found.to_string(),
        }
    }

    #[allow(clippy::needless_pass_by_value)]
    fn expect(&mut self, expected: Token) -> ParseResult<()> {
        let line = self.line();
        let found = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof(format!("expected {expected}")))?;

        if std::mem::discriminant(&found) != std::mem::discriminant(&expected) {
            return Err(ParseError::UnexpectedToken {
                line,
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        self.peek()
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(token))
    }

    fn consume(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn parse_program(&mut self) -> ParseResult<()> {
        self.expect(Token::OpenQasm)?;
        self.parse_version()?;
        self.expect(Token::Semicolon)?;

        while !self.is_eof() {
            self.parse_statement()?;
        }
        Ok(())
    }

    fn parse_version(&mut self) -> ParseResult<()> {
        match self.advance() {
            Some(Token::FloatLiteral(v)) if v.trunc() == 2.0 => Ok(()),
            Some(Token::IntLiteral(2)) => Ok(()),
            Some(other) => Err(ParseError::InvalidVersion(other.to_string())),
            None => Err(ParseError::UnexpectedEof("version".into())),
        }
    }

    fn parse_statement(&mut self) -> ParseResult<()> {
        let token = self
            .peek()
            .cloned()
            .ok_or_else(|| ParseError::UnexpectedEof("statement".into()))?;

        match token {
            Token::Include => {
                self.advance();
                match self.advance() {
                    Some(Token::StringLiteral(_)) => {}
                    Some(other) => return Err(self.unexpected("file name", &other)),
                    None => return Err(ParseError::UnexpectedEof("file name".into())),
                }
                self.expect(Token::Semicolon)
            }
            Token::Qreg => {
                self.advance();
                self.parse_register_decl(true)
            }
            Token::Creg => {
                self.advance();
                self.parse_register_decl(false)
            }
            Token::Gate => {
                self.advance();
                self.skip_gate_definition()
            }
            Token::Opaque => {
                self.advance();
                self.skip_past(&Token::Semicolon)
            }
            Token::Measure => {
                self.advance();
                self.parse_measure()
            }
            Token::Reset => {
                self.advance();
                self.parse_reset()
            }
            Token::Barrier => {
                self.advance();
                self.parse_barrier()
            }
            Token::If => Err(ParseError::Generic(format!(
                "classically controlled operations are not supported (line {})",
                self.line()
            ))),
            Token::Identifier(name) => {
                self.advance();
                self.parse_gate_call(&name)
            }
            other => Err(self.unexpected("statement", &other)),
        }
    }

    fn parse_register_decl(&mut self, quantum: bool) -> ParseResult<()> {
        let name = self.parse_identifier()?;
        self.expect(Token::LBracket)?;
        let size = self.parse_int_literal()? as u32;
        self.expect(Token::RBracket)?;
        self.expect(Token::Semicolon)?;

        if self.qregs.contains_key(&name) || self.cregs.contains_key(&name) {
            return Err(ParseError::DuplicateDeclaration(name));
        }

        if quantum {
            self.qregs.insert(name, (self.program.num_qubits, size));
            self.program.num_qubits += size;
        } else {
            self.cregs.insert(name, (self.program.num_clbits, size));
            self.program.num_clbits += size;
        }
        Ok(())
    }

    fn skip_gate_definition(&mut self) -> ParseResult<()> {
        self.skip_past(&Token::LBrace)?;
        let mut depth = 1usize;
        while depth > 0 {
            match self.advance() {
                Some(Token::LBrace) => depth += 1,
                Some(Token::RBrace) => depth -= 1,
                Some(_) => {}
                None => return Err(ParseError::UnexpectedEof("'}' closing gate body".into())),
            }
        }
        Ok(())
    }

    fn skip_past(&mut self, token: &Token) -> ParseResult<()> {
        loop {
            match self.advance() {
                Some(t) if std::mem::discriminant(&t) == std::mem::discriminant(token) => {
                    return Ok(());
                }
                Some(_) => {}
                None => return Err(ParseError::UnexpectedEof(format!("expected {token}"))),
            }
        }
    }

    fn parse_measure(&mut self) -> ParseResult<()> {
        let qubit = self.parse_operand(true)?;
        self.expect(Token::Arrow)?;
        let clbit = self.parse_operand(false)?;
        self.expect(Token::Semicolon)?;

        let width = broadcast_width("measure", &[&qubit, &clbit])?;
        for i in 0..width {
            self.program.push(GateRecord {
                name: "measure".into(),
                qubits: vec![qubit.at(i)],
                params: vec![],
                clbits: vec![clbit.at(i)],
            });
        }
        Ok(())
    }

    fn parse_reset(&mut self) -> ParseResult<()> {
        let operand = self.parse_operand(true)?;
        self.expect(Token::Semicolon)?;
        for q in operand.all() {
            self.program
                .push(GateRecord::new("reset", vec![q], vec![]));
        }
        Ok(())
    }

    fn parse_barrier(&mut self) -> ParseResult<()> {
        let mut qubits = Vec::new();
        if !self.check(&Token::Semicolon) {
            for operand in self.parse_operand_list()? {
                qubits.extend(operand.all());
            }
        }
        self.expect(Token::Semicolon)?;

        if qubits.is_empty() {
            qubits = (0..self.program.num_qubits).collect();
        }
        self.program
            .push(GateRecord::new("barrier", qubits, vec![]));
        Ok(())
    }

    fn parse_gate_call(&mut self, name: &str) -> ParseResult<()> {
        let name = name.to_lowercase();

        let mut params = Vec::new();
        if self.consume(&Token::LParen) {
            if !self.check(&Token::RParen) {
                params.push(self.parse_expression()?);
                while self.consume(&Token::Comma) {
                    params.push(self.parse_expression()?);
                }
            }
            self.expect(Token::RParen)?;
        }

        let operands = self.parse_operand_list()?;
        self.expect(Token::Semicolon)?;

        let refs: Vec<&Operand> = operands.iter().collect();
        let width = broadcast_width(&name, &refs)?;
        for i in 0..width {
            let qubits = operands.iter().map(|op| op.at(i)).collect();
            self.program
                .push(GateRecord::new(name.clone(), qubits, params.clone()));
        }
        Ok(())
    }

    fn parse_operand_list(&mut self) -> ParseResult<Vec<Operand>> {
        let mut operands = vec![self.parse_operand(true)?];
        while self.consume(&Token::Comma) {
            operands.push(self.parse_operand(true)?);
        }
        Ok(operands)
    }

    /// Parse `name` or `name[index]` against the quantum or classical table.
    fn parse_operand(&mut self, quantum: bool) -> ParseResult<Operand> {
        let name = self.parse_identifier()?;
        let table = if quantum { &self.qregs } else { &self.cregs };
        let (start, size) = *table
            .get(&name)
            .ok_or_else(|| ParseError::UndefinedIdentifier(name.clone()))?;

        if self.consume(&Token::LBracket) {
            let index = self.parse_int_literal()? as usize;
            self.expect(Token::RBracket)?;
            if index >= size as usize {
                return Err(ParseError::IndexOutOfBounds {
                    register: name,
                    index,
                    size: size as usize,
                });
            }
            Ok(Operand::Single(start + index as u32))
        } else {
            Ok(Operand::Register { start, size })
        }
    }

    // =========================================================================
    // Parameter expressions
    // =========================================================================

    fn parse_expression(&mut self) -> ParseResult<f64> {
        self.parse_binary_expr(0)
    }

    /// Precedence climbing over `+ -`, `* /` and right-associative `^`.
    fn parse_binary_expr(&mut self, min_prec: u8) -> ParseResult<f64> {
        let mut left = self.parse_unary_expr()?;

        while let Some((prec, right_assoc)) = self.peek().and_then(op_precedence) {
            if prec < min_prec {
                break;
            }
            let op = self
                .advance()
                .ok_or_else(|| ParseError::UnexpectedEof("operator".into()))?;
            let next_min = if right_assoc { prec } else { prec + 1 };
            let right = self.parse_binary_expr(next_min)?;

            left = match op {
                Token::Plus => left + right,
                Token::Minus => left - right,
                Token::Star => left * right,
                Token::Slash => {
                    if right == 0.0 {
                        return Err(ParseError::InvalidExpression("division by zero".into()));
                    }
                    left / right
                }
                Token::Caret => left.powf(right),
                other => return Err(self.unexpected("operator", &other)),
            };
        }

        Ok(left)
    }

    fn parse_unary_expr(&mut self) -> ParseResult<f64> {
        if self.consume(&Token::Minus) {
            return Ok(-self.parse_unary_expr()?);
        }
        if self.consume(&Token::Plus) {
            return self.parse_unary_expr();
        }
        self.parse_primary_expr()
    }

    #[allow(clippy::cast_precision_loss)]
    fn parse_primary_expr(&mut self) -> ParseResult<f64> {
        let token = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expression".into()))?;

        match token {
            Token::IntLiteral(v) => Ok(v as f64),
            Token::FloatLiteral(v) => Ok(v),
            Token::Pi => Ok(std::f64::consts::PI),
            Token::LParen => {
                let value = self.parse_expression()?;
                self.expect(Token::RParen)?;
                Ok(value)
            }
            Token::Identifier(name) => {
                let func: fn(f64) -> f64 = match name.as_str() {
                    "sin" => f64::sin,
                    "cos" => f64::cos,
                    "tan" => f64::tan,
                    "exp" => f64::exp,
                    "ln" => f64::ln,
                    "sqrt" => f64::sqrt,
                    _ => return Err(ParseError::UndefinedIdentifier(name)),
                };
                self.expect(Token::LParen)?;
                let arg = self.parse_expression()?;
                self.expect(Token::RParen)?;
                Ok(func(arg))
            }
            other => Err(self.unexpected("expression", &other)),
        }
    }

    fn parse_identifier(&mut self) -> ParseResult<String> {
        match self.advance() {
            Some(Token::Identifier(s)) => Ok(s),
            Some(other) => Err(self.unexpected("identifier", &other)),
            None => Err(ParseError::UnexpectedEof("identifier".into())),
        }
    }

    fn parse_int_literal(&mut self) -> ParseResult<u64> {
        match self.advance() {
            Some(Token::IntLiteral(v)) => Ok(v),
            Some(other) => Err(self.unexpected("integer", &other)),
            None => Err(ParseError::UnexpectedEof("integer".into())),
        }
    }
}

/// Binding power of a binary operator and whether it is right-associative.
fn op_precedence(token: &Token) -> Option<(u8, bool)> {
    match token {
        Token::Plus | Token::Minus => Some((1, false)),
        Token::Star | Token::Slash => Some((2, false)),
        Token::Caret => Some((3, true)),
        _ => None,
    }
}

/// Number of records a statement expands to.
///
/// Indexed operands repeat; whole-register operands must agree in size.
fn broadcast_width(statement: &str, operands: &[&Operand]) -> ParseResult<usize> {
    let mut width: Option<usize> = None;
    for w in operands.iter().filter_map(|op| op.width()) {
        match width {
            None => width = Some(w),
            Some(prev) if prev != w => {
                return Err(ParseError::BroadcastMismatch {
                    statement: statement.to_string(),
                    left: prev,
                    right: w,
                });
            }
            Some(_) => {}
        }
    }
    Ok(width.unwrap_or(1))
}
