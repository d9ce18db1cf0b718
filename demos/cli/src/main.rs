use std::path::PathBuf;

use anyhow::{bail, Context};
use careboard_api::{parse_payload_str, DashboardPayload};
use careboard_client::Gateway;
use careboard_core::{build_summary, filter_roster, select_entry, EvaluatedVital, Indicator, Patient};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "careboard-cli",
    about = "Print the patient roster and vitals summaries from a dashboard payload."
)]
struct Args {
    /// Path to a payload JSON file; omit to fetch from the live demo endpoint.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Show the vitals summary for the first patient matching this name.
    #[arg(short, long)]
    patient: Option<String>,

    /// History entry to summarize (0 is the most recent).
    #[arg(short, long)]
    entry: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let payload = load_payload(&args).await?;

    match &args.patient {
        Some(term) => print_summary(&payload, term, args.entry)?,
        None => print_roster(&payload),
    }

    Ok(())
}

async fn load_payload(args: &Args) -> anyhow::Result<DashboardPayload> {
    match &args.input {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("could not read {path:?}"))?;
            parse_payload_str(&data).context("payload file did not parse")
        }
        None => Gateway::coalition_demo()
            .fetch_dashboard()
            .await
            .context("fetch from demo endpoint failed"),
    }
}

fn print_roster(payload: &DashboardPayload) {
    if payload.patients.is_empty() {
        println!("No patients found");
        return;
    }

    println!("Patients ({}):", payload.patients.len());
    for patient in &payload.patients {
        println!("  {}", roster_line(patient));
    }
}

fn roster_line(patient: &Patient) -> String {
    format!(
        "{} ({}, {} years) - {} history entries",
        patient.name,
        patient.gender,
        patient.age,
        patient.diagnosis_history.len()
    )
}

fn print_summary(
    payload: &DashboardPayload,
    term: &str,
    entry_index: Option<usize>,
) -> anyhow::Result<()> {
    let matches = filter_roster(&payload.patients, term);
    let Some(patient) = matches.first() else {
        bail!("no patient matches {term:?}");
    };

    println!("Diagnosis history for {}", patient.name);
    match select_entry(&patient.diagnosis_history, entry_index) {
        Ok(entry) => {
            let summary = build_summary(entry);
            println!("  Period: {}", summary.period);
            print_vital("Systolic Pressure", "mmHg", &summary.systolic);
            print_vital("Diastolic Pressure", "mmHg", &summary.diastolic);
            print_vital("Respiratory Rate", "BPM", &summary.respiratory_rate);
            print_vital("Temperature", "°F", &summary.temperature);
            print_vital("Heart Rate", "BPM", &summary.heart_rate);
        }
        Err(_) => println!("  No diagnosis history available"),
    }

    Ok(())
}

fn print_vital(name: &str, unit: &str, vital: &EvaluatedVital) {
    let arrow = match vital.classification.indicator() {
        Some(Indicator::Up) => "↑ ",
        Some(Indicator::Down) => "↓ ",
        None => "",
    };
    println!(
        "  {name}: {} {unit} ({arrow}{})",
        vital.value,
        vital.classification.label()
    );
}

#[cfg(test)]
mod tests {
    use super::roster_line;
    use careboard_core::Patient;

    fn patient(name: &str) -> Patient {
        Patient {
            name: name.to_string(),
            gender: "Female".to_string(),
            age: 30,
            profile_picture: String::new(),
            date_of_birth: String::new(),
            phone_number: String::new(),
            emergency_contact: String::new(),
            insurance_type: String::new(),
            diagnosis_history: Vec::new(),
            diagnostic_list: Vec::new(),
            lab_results: Vec::new(),
        }
    }

    #[test]
    fn roster_line_uses_plain_ascii_punctuation() {
        let line = roster_line(&patient("Jessica Taylor"));
        assert_eq!(line, "Jessica Taylor (Female, 30 years) - 0 history entries");
        assert!(line.is_ascii());
    }
}
