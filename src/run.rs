use std::io::Write;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    check::{CheckResult, Checker},
    io::{create_file, write_to},
    report::{render_json, render_text},
};

/// Check every URL in order, one at a time.
///
/// In text mode each block goes to `console` as soon as its check finishes.
/// In JSON mode the whole array is written once all checks are done.
/// The output file, if any, is created before the first check so a bad path
/// fails the run up front. Failed checks are recorded in their result; only
/// I/O errors are returned.
pub async fn check_urls<W>(
    checker: &Checker,
    urls: &[String],
    console: &mut W,
) -> Result<Vec<CheckResult>>
where
    W: Write,
{
    let config = checker.config();
    let mut output_file = match &config.output {
        Some(output) => Some(
            create_file(output)
                .await
                .with_context(|| format!("creating output file `{}`", output.display()))?,
        ),
        None => None,
    };
    let mut results = Vec::with_capacity(urls.len());
    let mut text = String::new();
    for (index, url) in urls.iter().enumerate() {
        debug!("Checking {} of {}: {url}.", index + 1, urls.len());
        let result = checker.check(url).await;
        if !config.json_output {
            let block = render_text(&result, config.verbose);
            console.write_all(block.as_bytes())?;
            console.flush()?;
            text.push_str(&block);
        }
        results.push(result);
    }

    let failed = results.iter().filter(|result| !result.is_success()).count();
    info!("Checked {} URLs, {failed} failed.", results.len());

    let rendered = if config.json_output {
        let json = render_json(&results)?;
        writeln!(console, "{json}")?;
        console.flush()?;
        json
    } else {
        text
    };
    if let (Some(file), Some(output)) = (&mut output_file, &config.output) {
        write_to(file, rendered)
            .await
            .with_context(|| format!("writing results to `{}`", output.display()))?;
        info!("Results written to `{}`.", output.display());
    }
    Ok(results)
}
