use crate::error::SnagError;
use crate::extractor::Extractor;
use crate::results::GameInfo;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Prompt shown before each URL is read
pub const PROMPT: &str = "Enter the Steam store URL: ";

/// How successful results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Name block followed by the comma-joined field list
    #[default]
    Text,
    /// Pretty-printed JSON record
    Json,
}

/// Runs the read-fetch-print loop until `input` is exhausted.
///
/// Every fetch failure is reported to `output` and the loop moves on to the
/// next line. Returns the number of URLs handled.
pub async fn run<R, W>(
    input: R,
    output: &mut W,
    extractor: &Extractor,
    format: OutputFormat,
) -> io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut handled = 0;

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            ::log::info!("Input closed after {} URLs", handled);
            break;
        };

        let url = line.trim();
        ::log::debug!("Fetching {}", url);

        let result = extractor.fetch_info(url).await;
        write_result(output, &result, format)?;
        handled += 1;
    }

    Ok(handled)
}

/// Writes one fetch outcome
pub fn write_result<W: Write>(
    output: &mut W,
    result: &Result<GameInfo, SnagError>,
    format: OutputFormat,
) -> io::Result<()> {
    match result {
        Ok(info) => write_info(output, info, format),
        Err(e @ (SnagError::Timeout(_) | SnagError::Fetch(_))) => {
            writeln!(output, "Error fetching the page: {}", e)
        }
        Err(SnagError::Parse(e)) => writeln!(output, "Error parsing the page: {}", e),
        Err(SnagError::Unexpected(_)) => writeln!(output, "Failed to retrieve information."),
        Err(e @ SnagError::Config(_)) => writeln!(output, "An unexpected error occurred: {}", e),
    }
}

fn write_info<W: Write>(output: &mut W, info: &GameInfo, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(output, "Game:")?;
            writeln!(output, "{}", info.name)?;
            writeln!(output)?;
            writeln!(output, "Steam Game Information:")?;
            writeln!(output, "{}", info)
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *output, info)?;
            writeln!(output)
        }
    }
}
