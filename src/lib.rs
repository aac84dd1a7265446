pub mod error;
pub mod io;
pub mod lexer;

// 对外公开的核心类型/函数（给 CLI、测试、以及下游的 Parser 使用）。
pub use error::{Error, Result};
pub use io::render_tokens;
pub use lexer::{tokenize, Lexer, Token, TokenKind};
