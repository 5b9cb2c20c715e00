//! Integration tests for practice sessions
//!
//! Tests: scenario → PracticeSession → summary → SessionStore

use convocoach::core::{Coach, PracticeSession, SessionStore};
use convocoach::error::SessionError;
use convocoach::types::Scenario;
use std::fs;

fn temp_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("convocoach_session_it_{}", name));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    dir.join("sessions.json")
}

/// Full run through the bundled scenario
#[test]
fn test_bundled_scenario_run() {
    let coach = Coach::with_defaults().unwrap();
    let scenario = Scenario::bundled().unwrap();
    let prompts: Vec<String> = scenario.bot_prompts().iter().map(|p| p.to_string()).collect();
    let mut session = PracticeSession::new(scenario);

    for (i, prompt) in prompts.iter().enumerate() {
        assert_eq!(session.current_prompt(), Some(prompt.as_str()));
        session
            .submit(&format!("Thanks! I have worked with Python for {} years. How about you?", i + 2), &coach)
            .unwrap();
    }

    assert!(session.is_finished());
    assert_eq!(session.log().len(), prompts.len());
    assert!(matches!(session.submit("one more", &coach), Err(SessionError::Finished)));

    let summary = session.summary().unwrap();
    assert_eq!(summary.turns, prompts.len());
    assert!(summary.engagement >= 4.0);
    assert!(summary.specificity >= 4.0);
}

/// Summary averages across mixed replies
#[test]
fn test_summary_averages() {
    let coach = Coach::with_defaults().unwrap();
    let scenario = Scenario::from_json(
        r#"{"scenario": "Two prompts", "dialogue": [{"bot": "First?"}, {"bot": "Second?"}]}"#,
    )
    .unwrap();
    let mut session = PracticeSession::new(scenario);

    let a = session.submit("", &coach).unwrap();
    let b = session
        .submit("We shipped 3 React dashboards for the Sales team last quarter. Which tools do you use?", &coach)
        .unwrap();

    let summary = session.summary().unwrap();
    let expected = (a.scores.engagement as f64 + b.scores.engagement as f64) / 2.0;
    assert_eq!(summary.engagement, (expected * 10.0).round() / 10.0);
    assert_eq!(a.scores.confidence, 0);
}

/// Saving twice appends two logs
#[test]
fn test_save_appends() {
    let coach = Coach::with_defaults().unwrap();
    let store = SessionStore::new(temp_path("append"));
    let mut session = PracticeSession::new(Scenario::bundled().unwrap());

    session.submit("Hi, nice to meet you!", &coach).unwrap();
    assert_eq!(store.append(session.log()).unwrap(), 1);

    session.restart();
    session.submit("Hello. I work on data tooling at Initech.", &coach).unwrap();
    session.submit("Mostly SQL and Kafka.", &coach).unwrap();
    assert_eq!(store.append(session.log()).unwrap(), 2);

    let saved = store.load_all().unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].len(), 1);
    assert_eq!(saved[1].len(), 2);
    assert_eq!(saved[1][1].user, "Mostly SQL and Kafka.");
}

/// Scenario files load from disk
#[test]
fn test_scenario_from_file() {
    let path = temp_path("scenario").with_file_name("scenario.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{"scenario": "Standup", "dialogue": [{"bot": "What did you do yesterday?"}], "end_note": "Bye"}"#,
    )
    .unwrap();

    let scenario = Scenario::load(&path).unwrap();
    assert_eq!(scenario.scenario, "Standup");
    assert_eq!(scenario.bot_prompts(), vec!["What did you do yesterday?"]);
    assert_eq!(scenario.end_note.as_deref(), Some("Bye"));
}
