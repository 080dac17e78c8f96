use fangzai::assessment::{
    AccessCodeGate, AnswerSheetImporter, AssessmentReport, Dimension, QuestionCatalog,
    QuizSession, QuizStep,
};
use std::io::Cursor;

#[test]
fn session_snapshot_matches_imported_sheet() {
    let catalog = QuestionCatalog::standard();
    let mut session = QuizSession::new(&catalog);
    session.start();

    while session.step() == QuizStep::Quiz {
        let token = if session.index() % 3 == 0 { "B" } else { "A" };
        session.answer(token).expect("every question offers A and B");
    }

    let json = serde_json::to_string(session.answers()).expect("answers serialize");
    let imported =
        AnswerSheetImporter::json_from_reader(Cursor::new(json)).expect("answers round-trip");
    assert_eq!(&imported, session.answers());

    let live = AssessmentReport::from_answers(&catalog, session.answers());
    let replayed = AssessmentReport::from_answers(&catalog, &imported);
    assert_eq!(live.scores, replayed.scores);
    assert_eq!(live.portrait, replayed.portrait);
    assert_eq!(live.scores.total(), 46);
}

#[test]
fn full_report_covers_every_dimension() {
    let catalog = QuestionCatalog::standard();
    let csv = "respondent,question,answer\n\
               r1,1,B\n\
               r1,10,A\n\
               r1,14,A\n\
               r1,37,A\n";
    let batch = AnswerSheetImporter::batch_from_reader(Cursor::new(csv)).expect("csv parses");
    assert_eq!(batch.len(), 1);

    let report = AssessmentReport::from_answers(&catalog, &batch[0].answers);
    let summary = report.summary(&catalog);
    let dimensions: Vec<Dimension> = summary.dimensions.iter().map(|d| d.dimension).collect();
    assert_eq!(dimensions, Dimension::ordered().to_vec());

    for group in &summary.dimensions {
        let total: u32 = group.entries.iter().map(|entry| entry.score).sum();
        if total == 0 {
            assert!(group.entries.iter().all(|entry| entry.percentage == 0));
        }
        for entry in &group.entries {
            assert!(entry.score <= entry.max_score);
            assert!(entry.percentage <= 100);
        }
    }

    let narrative = report.narrative();
    assert_eq!(narrative.portrait, report.portrait.label());
    assert_eq!(narrative.dimension_cards.len(), 5);
    assert!(!narrative.fit_guidance.is_empty());
    assert!(!narrative.risk_alerts.is_empty());
}

#[test]
fn gate_accepts_issued_and_configured_codes() {
    let gate = AccessCodeGate::new(vec!["PARTNER-01".to_string()]);
    assert!(gate.verify("PARTNER-01"));
    assert!(gate.verify("FZ2025"));
    assert!(gate.verify("A1B2C3D4"));
    assert!(!gate.verify("partner-01"));
}
