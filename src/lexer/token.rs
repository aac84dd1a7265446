use std::fmt;

/// 一个 Token = 词法分析后的最小“语法积木”。
///
/// 例子：`def add(a, b)`
/// 会被切成：def, identifier("add"), (, identifier("a"), ",", identifier("b"), )
///
/// Token 创建后不可变；相等比较同时比较 kind / lexeme / line。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    /// Token 的类别
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// 产生该 Token 的源码原文（eof 为空串）
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Token 首字符所在行（从 1 开始）
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 输出文件里每行一个：{lexeme, kind, line}
        write!(f, "{{{}, {}, {}}}", self.lexeme, self.kind, self.line)
    }
}

/// Token 的种类枚举（封闭集合）。
///
/// 注意：这里只负责“把字符切成 Token”，不负责语法结构。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ---------- 单字符符号 ----------
    LParen,
    RParen,
    Colon,
    Comma,
    Dot,
    Minus,
    Plus,
    Slash,
    Star,

    // ---------- 一或两个字符的运算符 ----------
    Not,
    NotEq,
    Eq,
    EqEq,
    Gt,
    GtEq,
    Lt,
    LtEq,

    // ---------- 字面量 / 标识符 ----------
    /// 字符串字面量，lexeme 含两侧引号
    String,
    /// 数字字面量：整数或 `1.5` 这种带小数部分的
    Number,
    /// 标识符：例如 `abc`、`x1`、`_tmp`、`@name`
    Identifier,

    // ---------- 关键字 ----------
    /// `BEGIN`
    KwBeginBlock,
    /// `END`
    KwEndBlock,
    KwAlias,
    KwAnd,
    KwBegin,
    KwBreak,
    KwCase,
    KwClass,
    KwDef,
    KwDefined,
    KwDo,
    KwElse,
    KwElsif,
    KwEnd,
    KwEnsure,
    KwFalse,
    KwFor,
    KwIf,
    KwIn,
    KwModule,
    KwNext,
    KwNil,
    KwNot,
    KwOr,
    KwRedo,
    KwRescue,
    KwRetry,
    KwReturn,
    KwSelf,
    KwSuper,
    KwThen,
    KwTrue,
    KwUndef,
    KwUnless,
    KwUntil,
    KwWhen,
    KwWhile,
    KwYield,

    // ---------- 特殊 ----------
    /// 输入结束，永远是最后一个 Token
    Eof,
    /// 无法识别的字符，或没有闭合的字符串
    Error,
}

impl TokenKind {
    /// 关键字查表（区分大小写，必须整词匹配）。
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "BEGIN" => TokenKind::KwBeginBlock,
            "END" => TokenKind::KwEndBlock,
            "alias" => TokenKind::KwAlias,
            "and" => TokenKind::KwAnd,
            "begin" => TokenKind::KwBegin,
            "break" => TokenKind::KwBreak,
            "case" => TokenKind::KwCase,
            "class" => TokenKind::KwClass,
            "def" => TokenKind::KwDef,
            "defined" => TokenKind::KwDefined,
            "do" => TokenKind::KwDo,
            "else" => TokenKind::KwElse,
            "elsif" => TokenKind::KwElsif,
            "end" => TokenKind::KwEnd,
            "ensure" => TokenKind::KwEnsure,
            "false" => TokenKind::KwFalse,
            "for" => TokenKind::KwFor,
            "if" => TokenKind::KwIf,
            "in" => TokenKind::KwIn,
            "module" => TokenKind::KwModule,
            "next" => TokenKind::KwNext,
            "nil" => TokenKind::KwNil,
            "not" => TokenKind::KwNot,
            "or" => TokenKind::KwOr,
            "redo" => TokenKind::KwRedo,
            "rescue" => TokenKind::KwRescue,
            "retry" => TokenKind::KwRetry,
            "return" => TokenKind::KwReturn,
            "self" => TokenKind::KwSelf,
            "super" => TokenKind::KwSuper,
            "then" => TokenKind::KwThen,
            "true" => TokenKind::KwTrue,
            "undef" => TokenKind::KwUndef,
            "unless" => TokenKind::KwUnless,
            "until" => TokenKind::KwUntil,
            "when" => TokenKind::KwWhen,
            "while" => TokenKind::KwWhile,
            "yield" => TokenKind::KwYield,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_keyword(self) -> bool {
        TokenKind::keyword(self.as_str()) == Some(self)
    }

    /// 对外显示的名字：符号本身、关键字原文，或 `string` / `number` 等类别名。
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Not => "!",
            TokenKind::NotEq => "!=",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::KwBeginBlock => "BEGIN",
            TokenKind::KwEndBlock => "END",
            TokenKind::KwAlias => "alias",
            TokenKind::KwAnd => "and",
            TokenKind::KwBegin => "begin",
            TokenKind::KwBreak => "break",
            TokenKind::KwCase => "case",
            TokenKind::KwClass => "class",
            TokenKind::KwDef => "def",
            TokenKind::KwDefined => "defined",
            TokenKind::KwDo => "do",
            TokenKind::KwElse => "else",
            TokenKind::KwElsif => "elsif",
            TokenKind::KwEnd => "end",
            TokenKind::KwEnsure => "ensure",
            TokenKind::KwFalse => "false",
            TokenKind::KwFor => "for",
            TokenKind::KwIf => "if",
            TokenKind::KwIn => "in",
            TokenKind::KwModule => "module",
            TokenKind::KwNext => "next",
            TokenKind::KwNil => "nil",
            TokenKind::KwNot => "not",
            TokenKind::KwOr => "or",
            TokenKind::KwRedo => "redo",
            TokenKind::KwRescue => "rescue",
            TokenKind::KwRetry => "retry",
            TokenKind::KwReturn => "return",
            TokenKind::KwSelf => "self",
            TokenKind::KwSuper => "super",
            TokenKind::KwThen => "then",
            TokenKind::KwTrue => "true",
            TokenKind::KwUndef => "undef",
            TokenKind::KwUnless => "unless",
            TokenKind::KwUntil => "until",
            TokenKind::KwWhen => "when",
            TokenKind::KwWhile => "while",
            TokenKind::KwYield => "yield",
            TokenKind::Eof => "eof",
            TokenKind::Error => "error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
