//! End-to-end smoke tests for the splitmate binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn splitmate(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("splitmate").unwrap();
    cmd.env("SPLITMATE_DATA_DIR", dir.path());
    cmd
}

#[test]
fn init_add_and_balance() {
    let dir = TempDir::new().unwrap();

    splitmate(&dir)
        .args(["init", "--party-a", "Sam", "--party-b", "Riley"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Initialized ledger for Sam and Riley",
        ));

    splitmate(&dir)
        .args([
            "expense",
            "add",
            "Dinner",
            "$12.34",
            "--paid-by",
            "Sam",
            "--category",
            "food",
            "--date",
            "2025-01-02",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense"));

    splitmate(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Riley owes Sam $6.17"));
}

#[test]
fn settlement_clears_balance() {
    let dir = TempDir::new().unwrap();

    splitmate(&dir)
        .args(["init", "--party-a", "Sam", "--party-b", "Riley"])
        .assert()
        .success();

    splitmate(&dir)
        .args([
            "expense", "add", "Groceries", "50.00", "--paid-by", "Sam", "--date", "2025-01-02",
        ])
        .assert()
        .success();

    splitmate(&dir)
        .args(["settle", "add", "25.00", "--paid-by", "Riley"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Riley paid Sam"));

    splitmate(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("All settled up."));
}

#[test]
fn csv_import_round_trip() {
    let dir = TempDir::new().unwrap();

    splitmate(&dir).arg("init").assert().success();

    let csv_path = dir.path().join("bank-export.csv");
    std::fs::write(
        &csv_path,
        "description,amount,date\n\"Dinner\",\"$12.34\",\"2025-01-02\"\nBad row,abc,2025-01-03\n",
    )
    .unwrap();

    splitmate(&dir)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 created, 0 failed, 1 skipped"));

    splitmate(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dinner"));
}

#[test]
fn import_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();

    splitmate(&dir).arg("init").assert().success();

    let csv_path = dir.path().join("export.csv");
    std::fs::write(&csv_path, "description,amount,date\nLunch,7,2025-01-03\n").unwrap();

    splitmate(&dir)
        .args(["import", csv_path.to_str().unwrap(), "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing was imported"));

    splitmate(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn scan_extracts_receipt_fields() {
    let dir = TempDir::new().unwrap();

    splitmate(&dir).arg("init").assert().success();

    let scan_path = dir.path().join("receipt.json");
    std::fs::write(
        &scan_path,
        r#"{
            "ExpenseDocuments": [{
                "SummaryFields": [
                    {"Type": {"Text": "VENDOR_NAME", "Confidence": 92.0},
                     "ValueDetection": {"Text": "Trader Joe's", "Confidence": 92.0}},
                    {"Type": {"Text": "TOTAL", "Confidence": 88.0},
                     "ValueDetection": {"Text": "$23.45", "Confidence": 88.0}},
                    {"Type": {"Text": "INVOICE_RECEIPT_DATE", "Confidence": 90.0},
                     "ValueDetection": {"Text": "12/09/25", "Confidence": 90.0}}
                ],
                "LineItemGroups": []
            }]
        }"#,
    )
    .unwrap();

    splitmate(&dir)
        .args(["scan", scan_path.to_str().unwrap(), "--apply"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trader Joe's"))
        .stdout(predicate::str::contains("$23.45"))
        .stdout(predicate::str::contains("2025-12-09"))
        .stdout(predicate::str::contains("Created expense"));

    // the merchant hint table categorized the expense as groceries
    splitmate(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn fatal_parse_error_is_reported() {
    let dir = TempDir::new().unwrap();

    splitmate(&dir).arg("init").assert().success();

    let csv_path = dir.path().join("empty.csv");
    std::fs::write(&csv_path, "").unwrap();

    splitmate(&dir)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("header row"));
}
