use crate::infra::{InMemoryAssessmentRepository, InMemoryResultPublisher};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use verifit::error::AppError;
use verifit::workflows::big5::{
    AnswerSheetImporter, AssessmentService, Point, QuestionBank, RadarChart, ScoringConfig,
    TraitDomain, FACETS_PER_DOMAIN,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional legacy answer-sheet CSV to hydrate the session instead of the
    /// scripted responses.
    #[arg(long)]
    pub(crate) answer_sheet: Option<PathBuf>,
    /// Raw score (1-5) used for every scripted response.
    #[arg(long, default_value_t = 4)]
    pub(crate) raw_score: u8,
    /// Score the sheet without inverting reverse-keyed items.
    #[arg(long)]
    pub(crate) raw_tally: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BankExportArgs {
    /// Write the inventory CSV to this path instead of stdout.
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        answer_sheet,
        raw_score,
        raw_tally,
    } = args;

    println!("Big Five assessment demo");

    let bank = QuestionBank::global();
    let config = ScoringConfig {
        invert_reverse_keyed: !raw_tally,
    };
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let publisher = Arc::new(InMemoryResultPublisher::default());
    let service = AssessmentService::new(repository, publisher.clone(), config);

    let record = match service.start() {
        Ok(record) => record,
        Err(err) => {
            println!("  Could not open a session: {err}");
            return Ok(());
        }
    };
    let id = record.assessment_id;
    println!("- Opened session {} ({} questions)", id.0, bank.len());

    if let Some(path) = answer_sheet {
        let sheet = AnswerSheetImporter::sheet_from_path(&path, bank)?;
        let (answered, expected) = sheet.progress(bank);
        println!(
            "- Imported {} of {} answers from {}",
            answered,
            expected,
            path.display()
        );
        for response in sheet.responses() {
            if let Err(err) = service.record_answer(&id, response.question_id, response.raw_score)
            {
                println!("  Answer rejected: {err}");
                return Ok(());
            }
        }
    } else {
        println!("- Scripting '{raw_score}' for every prompt, in display order");
        for question in bank.by_display_order() {
            if let Err(err) = service.record_answer(&id, question.id, raw_score) {
                println!("  Answer rejected: {err}");
                return Ok(());
            }
        }
    }

    let result = match service.finalize(&id) {
        Ok(result) => result,
        Err(err) => {
            println!("  Scoring unavailable: {err}");
            return Ok(());
        }
    };

    println!("\nTrait profile");
    for domain in TraitDomain::ALL {
        let report = match result.trait_report(domain) {
            Some(report) => report,
            None => continue,
        };
        println!(
            "- {:<17} {:>3} ({})  sum {} over {} items",
            domain.name(),
            report.score,
            report.band.label(),
            report.sum,
            report.count
        );
        println!("  {}", report.interpretation);
        let facets: Vec<String> = (1..=FACETS_PER_DOMAIN)
            .filter_map(|facet| {
                report
                    .facets
                    .get(&facet)
                    .map(|score| format!("{} {}", domain.facet_name(facet), score))
            })
            .collect();
        println!("  Facets: {}", facets.join(" | "));
    }

    if !result.anomalies.is_empty() {
        println!("\nScoring anomalies: {}", result.anomalies.len());
    }

    let scores = result.domain_scores();
    let chart = RadarChart::layout(&scores, Point { x: 160.0, y: 160.0 }, 120.0);
    println!("\nPentagon chart");
    println!(
        "- {} axes, {} reference rings",
        chart.axes.len(),
        chart.rings.len()
    );
    match chart.polygon {
        Some(markers) => {
            for marker in markers {
                println!(
                    "  - {} vertex at ({:.1}, {:.1})",
                    marker.domain.abbreviation(),
                    marker.point.x,
                    marker.point.y
                );
            }
        }
        None => println!("  - no data polygon (profile incomplete)"),
    }

    println!(
        "\nPublished {} result envelope(s) downstream",
        publisher.envelopes().len()
    );

    Ok(())
}

pub(crate) fn run_bank_export(args: BankExportArgs) -> Result<(), AppError> {
    let bank = QuestionBank::global();

    let writer: Box<dyn std::io::Write> = match args.output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Order", "Question", "Domain", "Facet", "Keying", "Text"])
        .map_err(csv_io_error)?;
    for question in bank.by_display_order() {
        csv_writer
            .write_record([
                question.order.to_string(),
                question.id.to_string(),
                question.domain.name().to_string(),
                question.domain.facet_name(question.facet).to_string(),
                format!("{:?}", question.polarity).to_lowercase(),
                question.text.to_string(),
            ])
            .map_err(csv_io_error)?;
    }
    csv_writer.flush()?;

    Ok(())
}

fn csv_io_error(err: csv::Error) -> AppError {
    AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
}
