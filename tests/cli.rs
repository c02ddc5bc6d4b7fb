use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const DATA_DIR_ENV: &str = "FINANCE_DASHBOARD_DIR";

fn findash(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("findash").unwrap();
    cmd.env(DATA_DIR_ENV, data_dir.path()).env_remove("RUST_LOG");
    cmd
}

fn write_sheet(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("extrato.csv");
    fs::write(
        &path,
        "Data;Categoria;Tipo;Valor;Descrição\n\
         05/01/2025;Lazer;Entrada;R$ 1.000,00;Salário\n\
         10/01/2025;Lazer;Saída;R$ 150,00;Cinema\n\
         12/01/2025;Alimentação;SAIDA;200,50;Mercado\n\
         ;Lazer;saida;99;sem data\n\
         03/02/2025;Transporte;saida;40;Ônibus\n",
    )
    .unwrap();
    path
}

#[test]
fn test_report_for_period() {
    let data_dir = TempDir::new().unwrap();
    let sheet = write_sheet(&data_dir);

    findash(&data_dir)
        .args(["report", sheet.to_str().unwrap(), "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Years with data: 2025"))
        .stdout(predicate::str::contains("Total available (all time): R$ 609,50"))
        .stdout(predicate::str::contains("Summary for Jan/2025"))
        .stdout(predicate::str::contains("Income:  R$ 1.000,00"))
        .stdout(predicate::str::contains("Expense: R$ 350,50"))
        .stdout(predicate::str::contains("Balance: R$ 649,50"))
        .stdout(predicate::str::contains("Mercado"))
        .stdout(predicate::str::contains("Ônibus").not());
}

#[test]
fn test_report_defaults_to_latest_month() {
    let data_dir = TempDir::new().unwrap();
    let sheet = write_sheet(&data_dir);

    findash(&data_dir)
        .args(["report", sheet.to_str().unwrap(), "--no-monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary for Feb/2025"))
        .stdout(predicate::str::contains("Monthly overview").not());
}

#[test]
fn test_report_exports_monthly_series() {
    let data_dir = TempDir::new().unwrap();
    let sheet = write_sheet(&data_dir);
    let output = data_dir.path().join("series.csv");

    findash(&data_dir)
        .args(["report", sheet.to_str().unwrap(), "--output"])
        .arg(&output)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("period,label,kind,total\n"));
    assert!(csv.contains("2025-01,Jan/2025,Expense,350.50"));
    assert!(csv.contains("2025-02,Feb/2025,Income,0.00"));
}

#[test]
fn test_report_missing_file_fails() {
    let data_dir = TempDir::new().unwrap();

    findash(&data_dir)
        .args(["report", "does-not-exist.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load spreadsheet"));
}

#[test]
fn test_report_rejects_narrow_table() {
    let data_dir = TempDir::new().unwrap();
    let sheet = data_dir.path().join("narrow.csv");
    fs::write(&sheet, "Data,Valor\n05/01/2025,10\n").unwrap();

    findash(&data_dir)
        .args(["report", sheet.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected at least 5 columns"));
}

#[test]
fn test_report_invalid_period_fails() {
    let data_dir = TempDir::new().unwrap();
    let sheet = write_sheet(&data_dir);

    findash(&data_dir)
        .args(["report", sheet.to_str().unwrap(), "--period", "2025-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period format"));
}

#[test]
fn test_goal_set_then_list() {
    let data_dir = TempDir::new().unwrap();

    findash(&data_dir)
        .args(["goal", "set", "alimentacao", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal for 'Alimentação' set to R$ 300,00"));

    findash(&data_dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alimentação"))
        .stdout(predicate::str::contains("R$ 300,00"));

    let stored = fs::read_to_string(data_dir.path().join("goals.json")).unwrap();
    assert!(stored.contains("\"Alimentação\": 300.0"));
}

#[test]
fn test_goal_set_accepts_decimal_comma() {
    let data_dir = TempDir::new().unwrap();

    findash(&data_dir)
        .args(["goal", "set", "Lazer", "300,50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal for 'Lazer' set to R$ 300,50"));

    findash(&data_dir)
        .args(["goal", "set", "Lazer", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid amount 'abc'"));
}

#[test]
fn test_goal_unknown_category_fails() {
    let data_dir = TempDir::new().unwrap();

    findash(&data_dir)
        .args(["goal", "set", "Viagem", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: Viagem"));
}

#[test]
fn test_goals_feed_report() {
    let data_dir = TempDir::new().unwrap();
    let sheet = write_sheet(&data_dir);

    findash(&data_dir)
        .args(["goal", "set", "Lazer", "100"])
        .assert()
        .success();

    findash(&data_dir)
        .args(["report", sheet.to_str().unwrap(), "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal exceeded for Lazer"));
}

#[test]
fn test_init_and_config() {
    let data_dir = TempDir::new().unwrap();

    findash(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clash of Clans"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("goals.json").exists());

    findash(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    true"))
        .stdout(predicate::str::contains("Income label:    entrada"));
}
