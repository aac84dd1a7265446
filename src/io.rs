//! 边界 I/O：读入全部源码、按行写出 Token。
//!
//! 这一层只是薄薄的转发，核心逻辑都在 `lexer` 里。

use crate::error::{Error, Result};
use crate::lexer::{tokenize, Token};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// 输出路径为 `-` 时写到 stdout。
pub const STDOUT_PATH: &str = "-";

/// 读取整个源码文件。
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// 每个 Token 一行：`{lexeme, kind, line}`。
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

/// 把渲染好的文本全部写出。
pub fn write_rendered(path: impl AsRef<Path>, rendered: &str) -> Result<()> {
    let path = path.as_ref();
    let result = if path == Path::new(STDOUT_PATH) {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .and_then(|()| stdout.flush())
    } else {
        fs::write(path, rendered)
    };

    result.map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// 读入 -> 切词 -> 渲染 -> 写出，返回 Token 供调用方统计。
pub fn run(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Vec<Token>> {
    let input = input.as_ref();
    let output = output.as_ref();

    let source = read_source(input)?;
    let tokens = tokenize(&source);
    write_rendered(output, &render_tokens(&tokens))?;

    info!(
        target: "rblex::io",
        input = %input.display(),
        output = %output.display(),
        tokens = tokens.len(),
        "wrote tokens"
    );
    Ok(tokens)
}
