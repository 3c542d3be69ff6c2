use anyhow::Context;
use grammar_utils::{StatementAnalysis, analyze_statement};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn from_env() -> anyhow::Result<Self> {
        match std::env::var("GRAMMAR_PROBE_FORMAT") {
            Ok(value) => match value.to_lowercase().as_str() {
                "text" | "" => Ok(OutputFormat::Text),
                "json" => Ok(OutputFormat::Json),
                other => anyhow::bail!("Unknown GRAMMAR_PROBE_FORMAT {other:?}, expected text or json"),
            },
            Err(std::env::VarError::NotPresent) => Ok(OutputFormat::Text),
            Err(e) => Err(e).context("Failed to read GRAMMAR_PROBE_FORMAT"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let format = OutputFormat::from_env()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let arguments: Vec<String> = std::env::args().skip(1).collect();
    if !arguments.is_empty() {
        for statement in &arguments {
            report(&mut out, statement, format)?;
        }
        return Ok(());
    }

    log::info!("Reading statements from stdin, one per line");
    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read statement from stdin")?;
        let statement = line.trim();
        if statement.is_empty() {
            continue;
        }
        report(&mut out, statement, format)?;
    }

    Ok(())
}

fn report(out: &mut impl Write, statement: &str, format: OutputFormat) -> anyhow::Result<()> {
    let analysis = analyze_statement(statement);
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string(&analysis).context("Failed to serialize analysis")?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Text => write_summary(out, &analysis)?,
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, analysis: &StatementAnalysis) -> std::io::Result<()> {
    let or_dash = |word: &Option<String>| word.clone().unwrap_or_else(|| "-".to_string());

    writeln!(out, "{}", analysis.statement)?;
    if analysis.expanded != analysis.statement {
        writeln!(out, "  expanded:        {}", analysis.expanded)?;
    }
    writeln!(out, "  question:        {}", analysis.is_question)?;
    writeln!(out, "  modal auxiliary: {}", or_dash(&analysis.modal_auxiliary))?;
    writeln!(out, "  question word:   {}", or_dash(&analysis.question_word))?;
    writeln!(out, "  subject pronoun: {}", or_dash(&analysis.subject_pronoun))?;
    writeln!(out, "  object pronoun:  {}", or_dash(&analysis.object_pronoun))?;
    writeln!(out, "  be verb:         {}", or_dash(&analysis.be_verb))?;
    match &analysis.inverted {
        Some(words) => writeln!(out, "  inverted:        {}", words.join(" "))?,
        None => writeln!(out, "  inverted:        (no single pivot verb)")?,
    }
    writeln!(out, "  reply:           {}", or_dash(&analysis.reply))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_summary() {
        let mut out = Vec::new();
        report(&mut out, "I'm happy", OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("I'm happy\n"));
        assert!(text.contains("expanded:        I am happy"));
        assert!(text.contains("inverted:        you are happy"));
        assert!(text.contains("reply:           Why are you happy?"));
    }

    #[test]
    fn test_json_line() {
        let mut out = Vec::new();
        report(&mut out, "Are you happy?", OutputFormat::Json).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["isQuestion"], true);
        assert_eq!(value["inverted"][1], "I");
        assert_eq!(value["reply"], "I don't know if I am happy.");
    }
}
