//! Knowledge base behaviour through the programmatic entry point

use triage_engine::{run_triage_for_symptoms, RuleCatalog, Tier, TriageError, TriageReport};

fn triage(symptoms: &[&str]) -> TriageReport {
    run_triage_for_symptoms(symptoms).unwrap()
}

fn mentions(report: &TriageReport, words: &[&str]) -> bool {
    report.explanations.iter().any(|e| {
        let lower = e.to_lowercase();
        words.iter().any(|w| lower.contains(w))
    })
}

// Critical

#[test]
fn test_critical_chest_pain_and_breathing() {
    let report = triage(&["chest_pain", "shortness_of_breath"]);
    assert_eq!(report.level, Tier::Critical);
    assert!(mentions(&report, &["cardiac", "pulmonary"]));
}

#[test]
fn test_critical_chest_pain_and_arm_pain() {
    let report = triage(&["chest_pain", "left_arm_pain"]);
    assert_eq!(report.level, Tier::Critical);
    assert!(mentions(&report, &["myocardial"]));
}

#[test]
fn test_critical_unresponsive() {
    assert_eq!(triage(&["unresponsive"]).level, Tier::Critical);
}

#[test]
fn test_critical_severe_bleeding() {
    assert_eq!(triage(&["severe_bleeding"]).level, Tier::Critical);
}

#[test]
fn test_critical_seizure() {
    assert_eq!(triage(&["seizure"]).level, Tier::Critical);
}

#[test]
fn test_critical_stroke_signs() {
    let report = triage(&["sudden_numbness", "confusion", "severe_headache"]);
    assert_eq!(report.level, Tier::Critical);
    assert!(mentions(&report, &["stroke"]));
}

#[test]
fn test_stroke_needs_all_signs() {
    let report = triage(&["sudden_numbness", "confusion"]);
    assert_ne!(report.level, Tier::Critical);
}

// Urgent

#[test]
fn test_urgent_high_fever_vomiting() {
    assert_eq!(triage(&["high_fever", "persistent_vomiting"]).level, Tier::Urgent);
}

#[test]
fn test_urgent_high_fever_stiff_neck() {
    let report = triage(&["high_fever", "stiff_neck"]);
    assert_eq!(report.level, Tier::Urgent);
    assert!(mentions(&report, &["meningitis"]));
}

#[test]
fn test_urgent_severe_abdominal_pain() {
    assert_eq!(triage(&["severe_abdominal_pain"]).level, Tier::Urgent);
}

#[test]
fn test_urgent_chest_pain_alone() {
    let report = triage(&["chest_pain"]);
    assert_eq!(report.level, Tier::Urgent);
    assert!(!report.all_levels.contains_key(&Tier::Critical));
}

// Moderate

#[test]
fn test_moderate_fever_cough() {
    assert_eq!(triage(&["fever", "cough"]).level, Tier::Moderate);
}

#[test]
fn test_moderate_headache_dizziness() {
    assert_eq!(triage(&["headache", "dizziness"]).level, Tier::Moderate);
}

#[test]
fn test_moderate_fever_body_ache() {
    assert_eq!(triage(&["fever", "body_ache"]).level, Tier::Moderate);
}

#[test]
fn test_moderate_joint_pain_swelling() {
    assert_eq!(triage(&["joint_pain", "swelling"]).level, Tier::Moderate);
}

#[test]
fn test_moderate_persistent_vomiting_alone() {
    assert_eq!(triage(&["persistent_vomiting"]).level, Tier::Moderate);
}

// Low

#[test]
fn test_low_single_symptoms() {
    for symptom in ["headache", "runny_nose", "sore_throat", "fatigue", "fever", "cough"] {
        assert_eq!(triage(&[symptom]).level, Tier::Low, "{symptom}");
    }
}

// None

#[test]
fn test_none_no_symptoms() {
    let report = triage(&[]);
    assert_eq!(report.level, Tier::None);
    assert!(report.all_levels.is_empty());
    assert_eq!(report.explanations.len(), 1);
}

#[test]
fn test_none_when_no_rule_matches() {
    let report = triage(&["left_arm_pain"]);
    assert_eq!(report.level, Tier::None);
    assert!(report.all_levels.is_empty());
}

// Priority

#[test]
fn test_priority_critical_beats_urgent() {
    let report = triage(&["chest_pain", "shortness_of_breath"]);
    assert_eq!(report.level, Tier::Critical);
    assert!(report.all_levels.contains_key(&Tier::Urgent));
}

#[test]
fn test_priority_urgent_beats_moderate() {
    let report = triage(&["high_fever", "persistent_vomiting"]);
    assert_eq!(report.level, Tier::Urgent);
    assert!(report.all_levels.contains_key(&Tier::Moderate));
}

#[test]
fn test_priority_moderate_beats_low() {
    let report = triage(&["fever", "cough"]);
    assert_eq!(report.level, Tier::Moderate);
    assert_eq!(report.all_levels[&Tier::Low].len(), 2);
}

#[test]
fn test_complex_multi_symptom() {
    let report = triage(&["chest_pain", "shortness_of_breath", "fever", "cough", "headache"]);
    assert_eq!(report.level, Tier::Critical);
}

#[test]
fn test_all_levels_populated() {
    let report = triage(&[
        "chest_pain",
        "shortness_of_breath", // critical
        "high_fever",
        "persistent_vomiting", // urgent
        "fever",
        "cough",    // moderate
        "headache", // low
    ]);
    assert_eq!(report.level, Tier::Critical);
    for tier in Tier::RULE_TIERS {
        assert!(report.all_levels.contains_key(&tier), "{tier} missing");
    }
    assert!(!report.all_levels.contains_key(&Tier::None));
    assert_eq!(report.explanations, report.all_levels[&Tier::Critical]);
}

#[test]
fn test_symptoms_echoed() {
    let report = triage(&["fever", "cough", "fever"]);
    assert_eq!(report.symptoms, ["fever", "cough", "fever"]);
}

#[test]
fn test_unknown_symptom_is_error() {
    let err = run_triage_for_symptoms(&["fever", "glowing_skin"]).unwrap_err();
    assert_eq!(err, TriageError::UnknownSymptom("glowing_skin".to_string()));
}

// Vocabulary

#[test]
fn test_available_symptoms_populated() {
    let catalog = RuleCatalog::builtin().unwrap();
    let symptoms = catalog.all_symptoms();
    assert!(symptoms.len() > 20);

    let mut ids: Vec<_> = symptoms.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), symptoms.len());
}
