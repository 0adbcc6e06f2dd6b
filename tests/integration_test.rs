use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use anyhow::{anyhow, Result};
use chrono::Local;
use tempfile::tempdir;

fn run_cli(ledger_path: &Path, script: &str) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_budget-tracker");

    let mut child = Command::new(binary_path)
        .arg(ledger_path)
        .arg("error")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child.stdin.take()
        .ok_or_else(|| anyhow!("stdin was not captured"))?
        .write_all(script.as_bytes())?;

    Ok(child.wait_with_output()?)
}

#[test]
fn test_cli_persists_added_transactions() -> Result<()> {
    let directory = tempdir()?;
    let ledger_path = directory.path().join("transactions.txt");

    let output = run_cli(&ledger_path, "1\nAlice\nSalary\n50000\nJob\n2\nAlice\nLunch\n12.5\nFood\n13\n")?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let today = Local::now().date_naive();

    assert!(stdout.contains("No saved file found. Starting fresh."));
    assert!(stdout.contains("Exiting. Data saved. Thank you!"));

    let content = fs::read_to_string(&ledger_path)?;
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("Alice,INCOME,Job,Salary,50000.00,{today}"));
    assert_eq!(lines[1], format!("Alice,EXPENSE,Food,Lunch,12.50,{today}"));

    Ok(())
}

#[test]
fn test_cli_reports_from_existing_ledger() -> Result<()> {
    let directory = tempdir()?;
    let ledger_path = directory.path().join("transactions.txt");

    fs::write(&ledger_path, "Alice,INCOME,Job,Salary,50000.0,2025-03-10\n\
                             Alice,EXPENSE,Rent,March,12000.0,2025-03-15\n\
                             this line is not a record\n\
                             Bob,INCOME,Gift,Birthday,20000.0,2025-04-01\n")?;

    let output = run_cli(&ledger_path, "4\n8\n3\n2025\n9\n2025\n13\n")?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains(&format!("Transactions loaded from {}", ledger_path.display())));
    assert!(stdout.contains("==== Summary ====\nIncome  : ₹70000.00\nExpense : ₹12000.00\nBalance : ₹58000.00\n"));
    assert!(stdout.contains("==== Summary for 3/2025 ====\nIncome  : ₹50000.00\nExpense : ₹12000.00\nBalance : ₹38000.00\n"));
    assert!(stdout.contains("==== Summary for year 2025 ====\nIncome  : ₹70000.00"));

    let content = fs::read_to_string(&ledger_path)?;

    assert_eq!(content.lines().count(), 3);
    assert!(!content.contains("this line is not a record"));

    Ok(())
}

#[test]
fn test_cli_saves_when_stdin_closes() -> Result<()> {
    let directory = tempdir()?;
    let ledger_path = directory.path().join("ledger.csv");

    let output = run_cli(&ledger_path, "1\nBob\nBonus\n25000\nWork\n")?;

    assert!(output.status.success());

    let content = fs::read_to_string(&ledger_path)?;

    assert!(content.starts_with("Bob,INCOME,Work,Bonus,25000.00,"));

    Ok(())
}
