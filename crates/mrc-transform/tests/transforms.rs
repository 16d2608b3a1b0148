//! Stage-level tests for the cleaning transforms.

use mrc_model::{CellValue, Table};
use mrc_standards::DOCTOR_DIAGNOSIS;
use mrc_transform::{
    count_duplicate_rows, drop_duplicate_rows, expand_abbreviations, normalize_schema,
};
use mrc_transform::{age, doctor, expense};

fn test_table(columns: Vec<(&str, Vec<&str>)>) -> Table {
    let names: Vec<String> = columns.iter().map(|(name, _)| (*name).to_string()).collect();
    let height = columns.first().map_or(0, |(_, values)| values.len());
    let mut table = Table::new(names);
    for idx in 0..height {
        let row: Vec<CellValue> = columns
            .iter()
            .map(|(_, values)| CellValue::from_raw(values[idx]))
            .collect();
        table.push_row(row);
    }
    table
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn cell<'a>(table: &'a Table, column: &str, row: usize) -> &'a CellValue {
    let idx = table.column_index(column).expect("column exists");
    &table.rows[row][idx]
}

#[test]
fn schema_normalization_is_idempotent() {
    let mut table = test_table(vec![("id", vec!["1"]), ("extra", vec!["kept"])]);
    normalize_schema(&mut table);
    let columns_once = table.columns.clone();
    let rows_once = table.rows.clone();
    normalize_schema(&mut table);
    assert_eq!(table.columns, columns_once);
    assert_eq!(table.rows, rows_once);
    // Extra columns survive, required ones were appended.
    assert!(table.has_column("extra"));
    assert!(table.has_column("Doctor"));
    assert!(table.has_column("Clinical_Notes"));
    assert_eq!(*cell(&table, "extra", 0), text("kept"));
    assert!(cell(&table, "Doctor", 0).is_missing());
}

#[test]
fn anomalous_age_recomputed_from_dob() {
    let mut table = test_table(vec![
        ("age", vec!["150", "-1", "", "45"]),
        (
            "Date_of_Birth",
            vec!["1990-01-01", "2000-06-15", "1950-12-31", "1700-01-01"],
        ),
    ]);
    age::reconcile_age_dob(&mut table, 2024);
    assert_eq!(*cell(&table, "age", 0), text("34"));
    assert_eq!(*cell(&table, "age", 1), text("24"));
    assert_eq!(*cell(&table, "age", 2), text("74"));
    // A valid stored age is never touched, even when it disagrees with DOB.
    assert_eq!(*cell(&table, "age", 3), text("45"));
}

#[test]
fn anomalous_age_with_unparseable_dob_clears_to_missing() {
    let mut table = test_table(vec![
        ("age", vec!["150", "200"]),
        ("Date_of_Birth", vec!["not a date", ""]),
    ]);
    age::reconcile_age_dob(&mut table, 2024);
    assert!(cell(&table, "age", 0).is_missing());
    assert!(cell(&table, "age", 1).is_missing());
}

#[test]
fn missing_dob_synthesized_from_valid_age() {
    let mut table = test_table(vec![
        ("age", vec!["30", "30.7", "0", "110", ""]),
        ("Date_of_Birth", vec!["", "", "", "", ""]),
    ]);
    age::reconcile_age_dob(&mut table, 2024);
    assert_eq!(*cell(&table, "Date_of_Birth", 0), text("1994-01-01"));
    // Fractional ages are floored before subtracting.
    assert_eq!(*cell(&table, "Date_of_Birth", 1), text("1994-01-01"));
    // The valid range is exclusive on both ends.
    assert!(cell(&table, "Date_of_Birth", 2).is_missing());
    assert!(cell(&table, "Date_of_Birth", 3).is_missing());
    assert!(cell(&table, "Date_of_Birth", 4).is_missing());
}

#[test]
fn both_directions_use_the_original_pair() {
    // Age is anomalous and DOB missing: the age repaired to missing must not
    // block DOB synthesis retroactively, and the synthesized DOB must come
    // from the original (invalid) age, i.e. not at all.
    let mut table = test_table(vec![("age", vec!["150"]), ("Date_of_Birth", vec![""])]);
    age::reconcile_age_dob(&mut table, 2024);
    assert!(cell(&table, "age", 0).is_missing());
    assert!(cell(&table, "Date_of_Birth", 0).is_missing());

    // Unparseable but present DOB text is not replaced by synthesis.
    let mut table = test_table(vec![("age", vec!["40"]), ("Date_of_Birth", vec!["garbled"])]);
    age::reconcile_age_dob(&mut table, 2024);
    assert_eq!(*cell(&table, "Date_of_Birth", 0), text("garbled"));
    assert_eq!(*cell(&table, "age", 0), text("40"));
}

#[test]
fn doctor_diagnosis_round_trip_fills_gaps() {
    for (doctor_name, code) in DOCTOR_DIAGNOSIS {
        let mut table = test_table(vec![
            ("Doctor", vec![doctor_name, ""]),
            ("Diagnosis_Code", vec!["", code]),
        ]);
        doctor::fill_doctor_diagnosis(&mut table);
        assert_eq!(*cell(&table, "Diagnosis_Code", 0), text(code));
        assert_eq!(*cell(&table, "Doctor", 1), text(doctor_name));
    }
}

#[test]
fn doctor_mapping_never_overwrites_or_validates() {
    let mut table = test_table(vec![
        ("Doctor", vec!["Dr. Jane Doe (Cardiologist)", "Dr. Unknown", ""]),
        ("Diagnosis_Code", vec!["E11", "", "Z99"]),
    ]);
    doctor::fill_doctor_diagnosis(&mut table);
    // Mismatched but present pair left alone.
    assert_eq!(*cell(&table, "Diagnosis_Code", 0), text("E11"));
    // Unmapped doctor leaves the code missing.
    assert!(cell(&table, "Diagnosis_Code", 1).is_missing());
    // Unmapped code leaves the doctor missing.
    assert!(cell(&table, "Doctor", 2).is_missing());
}

#[test]
fn expenses_clipped_and_imputed_with_median() {
    let mut table = test_table(vec![(
        "Expense",
        vec!["-5", "100", "120", "140", "", "oops"],
    )]);
    expense::sanitize_expenses(&mut table);
    // Median over the valid values {100, 120, 140} is 120.
    assert_eq!(*cell(&table, "Expense", 0), text("120"));
    assert_eq!(*cell(&table, "Expense", 1), text("100"));
    assert_eq!(*cell(&table, "Expense", 4), text("120"));
    assert_eq!(*cell(&table, "Expense", 5), text("120"));
    let idx = table.column_index("Expense").expect("column exists");
    for row in &table.rows {
        let value: f64 = row[idx].as_text().expect("no missing left").parse().unwrap();
        assert!(value >= 0.0);
    }
}

#[test]
fn integral_median_imputes_without_digit_loss() {
    let mut table = test_table(vec![("Expense", vec!["-1", "500", "1000", "1500"])]);
    expense::sanitize_expenses(&mut table);
    // Median over {500, 1000, 1500} is 1000; its trailing zeros must survive
    // the numeric formatting.
    assert_eq!(*cell(&table, "Expense", 0), text("1000"));
}

#[test]
fn all_invalid_expenses_stay_missing() {
    let mut table = test_table(vec![("Expense", vec!["-1", "", "bad"])]);
    expense::sanitize_expenses(&mut table);
    for row in 0..3 {
        assert!(cell(&table, "Expense", row).is_missing());
    }
}

#[test]
fn expansion_rewrites_free_text_and_keeps_original_notes() {
    let mut table = test_table(vec![
        ("Symptoms", vec!["SOB and CP"]),
        ("Medical_History", vec!["Hx of CAD"]),
        ("Clinical_Notes", vec!["Pt has Hx of DM and BP issues"]),
    ]);
    expand_abbreviations(&mut table);
    assert_eq!(
        *cell(&table, "Symptoms", 0),
        text("Shortness of Breath and Chest Pain")
    );
    assert_eq!(
        *cell(&table, "Medical_History", 0),
        text("History of Coronary Artery Disease")
    );
    // Original notes stay for the scorer; the expansion lands in its own column.
    assert_eq!(
        *cell(&table, "Clinical_Notes", 0),
        text("Pt has Hx of DM and BP issues")
    );
    assert_eq!(
        *cell(&table, "Expanded_Clinical_Notes", 0),
        text("Patient has History of Diabetes Mellitus and Blood Pressure issues")
    );
}

#[test]
fn expansion_passes_missing_text_through() {
    let mut table = test_table(vec![
        ("Symptoms", vec![""]),
        ("Medical_History", vec![""]),
        ("Clinical_Notes", vec![""]),
    ]);
    expand_abbreviations(&mut table);
    assert!(cell(&table, "Symptoms", 0).is_missing());
    assert!(cell(&table, "Expanded_Clinical_Notes", 0).is_missing());
}

#[test]
fn expanded_text_contains_no_dictionary_keys() {
    let mut table = test_table(vec![(
        "Clinical_Notes",
        vec!["Pt with DM, HBP, CAD, BP, Rx, SOB, CP, Hx, Dx, CA, PPI, GERD, PRN"],
    )]);
    expand_abbreviations(&mut table);
    let expanded = cell(&table, "Expanded_Clinical_Notes", 0)
        .as_text()
        .expect("expanded text");
    for (regex, _) in mrc_standards::abbreviation_patterns() {
        assert!(!regex.is_match(expanded), "{regex:?} still matches {expanded:?}");
    }
}

#[test]
fn duplicate_count_and_removal_are_independent() {
    // The two rows differ only by abbreviation, so they are distinct before
    // expansion and identical afterwards.
    let mut table = test_table(vec![
        ("id", vec!["1", "1"]),
        ("Clinical_Notes", vec!["DM noted", "Diabetes Mellitus noted"]),
    ]);
    let counted = count_duplicate_rows(&table);
    assert_eq!(counted, 0);

    expand_abbreviations(&mut table);
    table.drop_column("Clinical_Notes");
    table.rename_column("Expanded_Clinical_Notes", "Clinical_Notes");
    let dropped = drop_duplicate_rows(&mut table);
    assert_eq!(dropped, 1);
    assert_ne!(counted, dropped);
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn drop_duplicates_keeps_first_occurrence() {
    let mut table = test_table(vec![("id", vec!["1", "2", "1", "1"])]);
    assert_eq!(count_duplicate_rows(&table), 2);
    assert_eq!(drop_duplicate_rows(&mut table), 2);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(*cell(&table, "id", 0), text("1"));
    assert_eq!(*cell(&table, "id", 1), text("2"));
}
