use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 统一错误类型。
///
/// 只覆盖边界 I/O：扫描本身从不失败，非法输入会变成 `error` Token。
#[derive(Error, Debug)]
pub enum Error {
    /// 读取源码文件失败
    #[error("failed to read input file {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 写出 Token 失败（`-` 表示 stdout）
    #[error("failed to write output {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
