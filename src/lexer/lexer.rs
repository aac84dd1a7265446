use crate::lexer::token::{Token, TokenKind};
use tracing::{debug, debug_span, trace};

/// 超出源码末尾时 `lookahead` 返回的哨兵字符。
///
/// 它不满足任何字符分类谓词，所以各个扫描循环走到末尾会自然停下。
const SENTINEL: char = '\0';

/// 词法分析入口：把源代码切成一串 Token（最后一个总是 eof）。
pub fn tokenize(src: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(src);
    lexer.tokenize_all();
    lexer.into_tokens()
}

/// 词法分析器的内部状态（扫描指针 + 已产出的 Token）。
///
/// `next_pos` / `lexeme_start` 都是 byte offset（UTF-8），
/// 始终满足 `next_pos >= lexeme_start`。
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    line: usize,
    next_pos: usize,
    lexeme_start: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            line: 1,
            next_pos: 0,
            lexeme_start: 0,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// 扫描整个输入，直到 EOF，然后追加 eof Token。
    ///
    /// 每个 Lexer 只应调用一次：再次调用会从当前指针（已在末尾）继续，
    /// 结果是多出一个 eof。
    pub fn tokenize_all(&mut self) {
        let span = debug_span!(target: "rblex::lexer", "tokenize_all", len = self.source.len());
        let _guard = span.enter();

        while !self.is_eof() {
            if let Some(token) = self.scan_token() {
                trace!(
                    target: "rblex::lexer",
                    kind = %token.kind(),
                    lexeme = token.lexeme(),
                    line = token.line(),
                    "token"
                );
                self.tokens.push(token);
            }
        }

        self.tokens.push(Token::new(TokenKind::Eof, "", self.line));

        let errors = self.tokens.iter().filter(|t| t.is_error()).count();
        debug!(
            target: "rblex::lexer",
            tokens = self.tokens.len(),
            errors,
            lines = self.line,
            "tokenize finished"
        );
    }

    /// 扫描一个词法单元。空白、注释、换行不产出 Token。
    fn scan_token(&mut self) -> Option<Token> {
        self.lexeme_start = self.next_pos;
        let start_line = self.line;

        let c = self.consume();
        let kind = match c {
            ' ' | '\r' | '\t' => return None,
            '#' => {
                self.skip_comment();
                return None;
            }
            '\n' => {
                self.line += 1;
                return None;
            }
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            '/' => TokenKind::Slash,
            '*' => TokenKind::Star,
            // 匹配 `!=` 或 `!`，其余三个同理
            '!' => self.one_or_two(TokenKind::Not, TokenKind::NotEq),
            '=' => self.one_or_two(TokenKind::Eq, TokenKind::EqEq),
            '>' => self.one_or_two(TokenKind::Gt, TokenKind::GtEq),
            '<' => self.one_or_two(TokenKind::Lt, TokenKind::LtEq),
            '"' => self.scan_string(),
            c if is_digit(c) => self.scan_number(),
            c if is_alpha(c) || c == '@' => self.scan_identifier(),
            // 其它字符：lexeme 就是这一个字符
            _ => TokenKind::Error,
        };

        let lexeme = self.current_lexeme();
        if kind == TokenKind::Error {
            debug!(target: "rblex::lexer", line = start_line, lexeme, "malformed lexeme");
        }
        Some(Token::new(kind, lexeme, start_line))
    }

    /// 下一个字符是 `=` 就吞掉它并返回两字符的 kind。
    fn one_or_two(&mut self, single: TokenKind, with_eq: TokenKind) -> TokenKind {
        if self.lookahead(1) == '=' {
            self.consume();
            with_eq
        } else {
            single
        }
    }

    /// `#` 到行尾（不含换行符本身，换行交给主循环计行号）。
    fn skip_comment(&mut self) {
        while self.lookahead(1) != '\n' && !self.is_eof() {
            self.consume();
        }
    }

    /// 读取双引号字符串：`"..."`，lexeme 保留两侧引号和原始转义。
    ///
    /// `\` 会连带吞掉后一个字符，所以 `\"` 不会结束字符串。
    /// 到 EOF 还没闭合则返回 Error，lexeme 为从开引号到末尾的全部内容。
    fn scan_string(&mut self) -> TokenKind {
        while self.lookahead(1) != '"' && !self.is_eof() {
            let c = self.consume();
            if c == '\n' {
                self.line += 1;
            } else if c == '\\' && !self.is_eof() && self.consume() == '\n' {
                self.line += 1;
            }
        }

        if self.is_eof() {
            return TokenKind::Error;
        }

        // 消费结尾的 `"`
        self.consume();
        TokenKind::String
    }

    /// 数字：一串数字，后面紧跟 `.` 和数字时再带上小数部分。
    ///
    /// `3.` 不会吞掉点号：得到 number `3` 和单独的 `.`。
    fn scan_number(&mut self) -> TokenKind {
        self.consume_digits();

        if self.lookahead(1) == '.' && is_digit(self.lookahead(2)) {
            self.consume();
            self.consume_digits();
        }

        TokenKind::Number
    }

    /// 读取标识符，并在此处做“关键字识别”（整词匹配）。
    fn scan_identifier(&mut self) -> TokenKind {
        while is_alphanumeric(self.lookahead(1)) || self.lookahead(1) == '@' {
            self.consume();
        }

        TokenKind::keyword(self.current_lexeme()).unwrap_or(TokenKind::Identifier)
    }

    fn consume_digits(&mut self) {
        while is_digit(self.lookahead(1)) {
            self.consume();
        }
    }

    /// 消费一个字符并前移指针；已在末尾时返回哨兵且不移动。
    fn consume(&mut self) -> char {
        let c = self.lookahead(1);
        if !self.is_eof() {
            self.next_pos += c.len_utf8();
        }
        c
    }

    /// 查看第 `n` 个未消费的字符（`n = 1` 即下一个），越界返回哨兵。
    fn lookahead(&self, n: usize) -> char {
        self.source[self.next_pos..]
            .chars()
            .nth(n.saturating_sub(1))
            .unwrap_or(SENTINEL)
    }

    fn current_lexeme(&self) -> &'a str {
        &self.source[self.lexeme_start..self.next_pos]
    }

    /// 是否到达输入末尾。
    fn is_eof(&self) -> bool {
        self.next_pos >= self.source.len()
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// 字母规则：ASCII 字母或 `_`。
fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}
