//! The fixed column schema of a healthcare record table.

pub const ID: &str = "id";
pub const GENDER: &str = "gender";
pub const AGE: &str = "age";
pub const HYPERTENSION: &str = "hypertension";
pub const HEART_DISEASE: &str = "heart_disease";
pub const EVER_MARRIED: &str = "ever_married";
pub const WORK_TYPE: &str = "work_type";
pub const RESIDENCE_TYPE: &str = "Residence_type";
pub const AVG_GLUCOSE_LEVEL: &str = "avg_glucose_level";
pub const BMI: &str = "bmi";
pub const SMOKING_STATUS: &str = "smoking_status";
pub const STROKE: &str = "stroke";
pub const DIAGNOSIS_CODE: &str = "Diagnosis_Code";
pub const DOCTOR: &str = "Doctor";
pub const DATE_OF_BIRTH: &str = "Date_of_Birth";
pub const EXPENSE: &str = "Expense";
pub const SYMPTOMS: &str = "Symptoms";
pub const MEDICAL_HISTORY: &str = "Medical_History";
pub const CLINICAL_NOTES: &str = "Clinical_Notes";

/// Working column holding the expanded clinical notes until finalization
/// renames it back to [`CLINICAL_NOTES`].
pub const EXPANDED_CLINICAL_NOTES: &str = "Expanded_Clinical_Notes";

/// Every column the pipeline expects; absent ones are appended with missing
/// cells during schema normalization.
pub const REQUIRED_COLUMNS: [&str; 19] = [
    ID,
    GENDER,
    AGE,
    HYPERTENSION,
    HEART_DISEASE,
    EVER_MARRIED,
    WORK_TYPE,
    RESIDENCE_TYPE,
    AVG_GLUCOSE_LEVEL,
    BMI,
    SMOKING_STATUS,
    STROKE,
    DIAGNOSIS_CODE,
    DOCTOR,
    DATE_OF_BIRTH,
    EXPENSE,
    SYMPTOMS,
    MEDICAL_HISTORY,
    CLINICAL_NOTES,
];

/// Free-text columns subject to abbreviation expansion.
pub const FREE_TEXT_COLUMNS: [&str; 3] = [SYMPTOMS, MEDICAL_HISTORY, CLINICAL_NOTES];

/// Semantic kind of each required column, for schema listings.
pub const COLUMN_KINDS: [(&str, &str); 19] = [
    (ID, "identifier"),
    (GENDER, "categorical"),
    (AGE, "integer, valid range [0, 110]"),
    (HYPERTENSION, "boolean-like"),
    (HEART_DISEASE, "boolean-like"),
    (EVER_MARRIED, "categorical"),
    (WORK_TYPE, "categorical"),
    (RESIDENCE_TYPE, "categorical"),
    (AVG_GLUCOSE_LEVEL, "float"),
    (BMI, "float"),
    (SMOKING_STATUS, "categorical"),
    (STROKE, "boolean-like"),
    (DIAGNOSIS_CODE, "diagnosis code"),
    (DOCTOR, "categorical, paired with Diagnosis_Code"),
    (DATE_OF_BIRTH, "date, YYYY-MM-DD"),
    (EXPENSE, "non-negative float"),
    (SYMPTOMS, "free text"),
    (MEDICAL_HISTORY, "free text"),
    (CLINICAL_NOTES, "free text"),
];
