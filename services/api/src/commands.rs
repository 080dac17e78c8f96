use crate::infra::{access_gate, sample_answers};
use chrono::{Local, Utc};
use clap::Args;
use fangzai::assessment::router::ReportResponse;
use fangzai::assessment::{
    AnswerMap, AnswerSheetImporter, AssessmentReport, QuestionCatalog, QuizSession,
    RespondentAnswers, SubDimension,
};
use fangzai::config::AppConfig;
use fangzai::error::AppError;
use fangzai::telemetry;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct TakeArgs {
    /// Access code that unlocks the report when the gate is enabled
    #[arg(long)]
    pub(crate) access_code: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// JSON answer sheet such as {"1": "B", "10": "A"}. Defaults to a built-in sample.
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Long-format CSV with respondent,question,answer columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for question in catalog.questions() {
        writeln!(
            out,
            "{:>2}. [{}] {}",
            question.id,
            question.dimension.label(),
            question.text
        )?;
        for option in &question.options {
            writeln!(
                out,
                "    {}. {} ({})",
                option.token,
                option.label,
                option.sub_dimension.label()
            )?;
        }
    }

    Ok(())
}

pub(crate) fn run_take(args: TakeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    if config.access.required {
        let gate = access_gate(&config.access);
        if !args
            .access_code
            .as_deref()
            .is_some_and(|code| gate.verify(code))
        {
            return Err(AppError::AccessDenied);
        }
    }

    let catalog = QuestionCatalog::standard();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(answers) = walk_quiz(&catalog, stdin.lock(), &mut out)? else {
        writeln!(out, "Assessment abandoned; no report generated.")?;
        return Ok(());
    };

    let report = AssessmentReport::from_answers(&catalog, &answers);
    render_report(&mut out, &catalog, &report)?;
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let catalog = QuestionCatalog::standard();
    let answers = match args.answers {
        Some(path) => AnswerSheetImporter::json_from_path(path)?,
        None => sample_answers(&catalog),
    };
    let report = AssessmentReport::from_answers(&catalog, &answers);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        let document = ReportResponse {
            generated_at: Utc::now(),
            summary: report.summary(&catalog),
            narrative: report.narrative(),
            scores: report.scores,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
    } else {
        render_report(&mut out, &catalog, &report)?;
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let catalog = QuestionCatalog::standard();
    let batch = AnswerSheetImporter::batch_from_path(&args.csv)?;
    info!(respondents = batch.len(), path = %args.csv.display(), "scoring batch");

    let stdout = io::stdout();
    write_batch(&catalog, &batch, stdout.lock())
}

/// Drive a [`QuizSession`] from line input. Returns `None` when the input
/// ends or the respondent quits before the last question.
pub(crate) fn walk_quiz<R: BufRead, W: Write>(
    catalog: &QuestionCatalog,
    mut input: R,
    out: &mut W,
) -> Result<Option<AnswerMap>, AppError> {
    let mut session = QuizSession::new(catalog);
    session.start();
    writeln!(
        out,
        "Answer with an option letter; type 'back' to revisit or 'quit' to stop."
    )?;

    while let Some(question) = session.current_question() {
        writeln!(
            out,
            "\n[{}/{} | {}%] {}",
            session.index() + 1,
            catalog.len(),
            session.progress_pct(),
            question.text
        )?;
        for option in &question.options {
            writeln!(out, "  {}. {}", option.token, option.label)?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim() {
            "back" => session.back(),
            "quit" => return Ok(None),
            token => {
                if let Err(err) = session.answer(&token.to_ascii_uppercase()) {
                    writeln!(out, "{err}")?;
                }
            }
        }
    }

    Ok(Some(session.answers().clone()))
}

pub(crate) fn render_report<W: Write>(
    out: &mut W,
    catalog: &QuestionCatalog,
    report: &AssessmentReport,
) -> io::Result<()> {
    let summary = report.summary(catalog);
    let narrative = report.narrative();

    writeln!(out, "{}", narrative.heading)?;
    writeln!(out, "Generated {}", Local::now().format("%Y-%m-%d %H:%M"))?;
    writeln!(
        out,
        "\n{} | answered {} questions",
        summary.portrait_label, summary.answered
    )?;
    writeln!(out, "{}", narrative.tagline)?;

    println_section(out, "Score distribution")?;
    for dimension in &summary.dimensions {
        writeln!(out, "- {}", dimension.dimension_label)?;
        for entry in &dimension.entries {
            writeln!(
                out,
                "  - {}: {}/{} ({}%)",
                entry.label, entry.score, entry.max_score, entry.percentage
            )?;
        }
    }

    println_section(out, "Work structures")?;
    for entry in &narrative.work_types {
        writeln!(out, "- {}: {}", entry.label, entry.description)?;
    }

    for card in &narrative.dimension_cards {
        println_section(out, card.title)?;
        writeln!(out, "{}", card.subtitle)?;
        writeln!(out, "{}", card.summary)?;
        for entry in &card.distribution {
            writeln!(
                out,
                "  - {} {}%: {}",
                entry.label, entry.percentage, entry.description
            )?;
        }
        writeln!(out, "Application: {}", card.application_tip)?;
        writeln!(out, "Structure: {}", card.structure_hint)?;
    }

    if !narrative.fit_guidance.is_empty() {
        println_section(out, "Fit guidance")?;
        for line in &narrative.fit_guidance {
            writeln!(out, "- {}", line)?;
        }
    }

    if !narrative.risk_alerts.is_empty() {
        println_section(out, "Risk alerts")?;
        for line in &narrative.risk_alerts {
            writeln!(out, "- {}", line)?;
        }
    }

    writeln!(out, "\n{}", narrative.closing)?;

    if !narrative.references.is_empty() {
        println_section(out, "References")?;
        for reference in &narrative.references {
            writeln!(out, "- {}", reference)?;
        }
    }

    Ok(())
}

fn println_section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", title)
}

/// One CSV row per respondent: id, portrait, then every sub-dimension score.
pub(crate) fn write_batch<W: Write>(
    catalog: &QuestionCatalog,
    batch: &[RespondentAnswers],
    writer: W,
) -> Result<(), AppError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["respondent", "portrait"];
    header.extend(SubDimension::ordered().iter().map(|sub| sub.label()));
    csv_writer.write_record(&header).map_err(io::Error::from)?;

    for respondent in batch {
        let report = AssessmentReport::from_answers(catalog, &respondent.answers);
        let mut row = vec![
            respondent.respondent.clone(),
            report.portrait.label().to_string(),
        ];
        row.extend(
            SubDimension::ordered()
                .iter()
                .map(|sub| report.scores.get(*sub).to_string()),
        );
        csv_writer.write_record(&row).map_err(io::Error::from)?;
    }

    csv_writer.flush()?;
    Ok(())
}
