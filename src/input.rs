use std::io::Read;

/// 一次性读取全部输入文本。
///
/// 非法 UTF-8 字节替换为 U+FFFD，不作为错误返回。
pub fn read_debug_text<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    tracing::trace!("读取输入 {} 字节", bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
