//! Async API for non-blocking document conversion.
//!
//! Enable the `async` feature to use these APIs:
//!
//! ```toml
//! [dependencies]
//! rubify = { version = "0.1", features = ["async"] }
//! ```

use crate::error::{Error, Result};
use crate::render::ConvertOptions;
use std::path::Path;
use tokio::fs;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Asynchronously reads a UTF-8 source document.
pub async fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let data = fs::read(path).await?;
    Ok(String::from_utf8(data)?)
}

/// Asynchronously reads a UTF-8 source document from an async reader.
pub async fn read_source_from<R: AsyncRead + Unpin>(mut reader: R) -> Result<String> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).await?;
    Ok(String::from_utf8(data)?)
}

/// Renders source text to HTML on the blocking thread pool.
pub async fn render_html(text: String, options: &ConvertOptions) -> Result<String> {
    let options = options.clone();
    tokio::task::spawn_blocking(move || crate::render::render_html(&text, &options))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))
}

/// Asynchronously converts a source file to an HTML file.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> rubify::Result<()> {
/// rubify::async_api::convert_file("b1.txt", "b1_furigana.html").await?;
/// # Ok(())
/// # }
/// ```
pub async fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    convert_file_with_options(input, output, &ConvertOptions::default()).await
}

/// Asynchronously converts a source file to an HTML file with custom options.
pub async fn convert_file_with_options(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<()> {
    let text = read_source(input).await?;
    let html = render_html(text, options).await?;
    fs::write(output, html).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_async_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("b1.txt");
        let output = dir.path().join("b1_furigana.html");
        std::fs::write(&input, "思\n（おも）いますか？").unwrap();

        convert_file(&input, &output).await.unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("<ruby>思<rt>おも</rt></ruby>いますか？"));
    }

    #[tokio::test]
    async fn test_async_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_source(dir.path().join("missing.txt")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn test_async_reader() {
        let text = read_source_from("漢字(かんじ)".as_bytes()).await.unwrap();
        assert_eq!(text, "漢字(かんじ)");
    }
}
