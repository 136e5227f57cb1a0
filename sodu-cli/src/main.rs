use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sodu_classify::{CategoryClassifier, FeatureExtractor, WeekendSource, read_statement, summarize};
use sodu_core::{Transaction, parse_timestamp, to_local};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sodu", version, about = "Expense categorizer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single transaction
    Classify {
        #[arg(long)]
        description: String,

        /// Amount in VND
        #[arg(long)]
        amount: f64,

        /// Timestamp (RFC3339, "YYYY-MM-DD HH:MM", or date-only)
        #[arg(long)]
        date: String,

        /// Take the weekend flag from the transaction's own date instead of
        /// today's
        #[arg(long)]
        weekend_from_date: bool,

        /// Emit JSON instead of a text line
        #[arg(long)]
        json: bool,
    },

    /// Classify every row of a statement CSV and print a spending summary
    Batch {
        /// Path to a CSV with columns: date, description, amount[, kind]
        #[arg(long)]
        csv: PathBuf,

        /// IANA timezone to convert statement timestamps into, treating them
        /// as UTC (e.g. Asia/Ho_Chi_Minh)
        #[arg(long)]
        tz: Option<String>,

        /// Limit number of per-transaction lines printed (default: 20)
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Take the weekend flag from each transaction's own date
        #[arg(long)]
        weekend_from_date: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the numeric feature vector for a transaction as JSON
    Features {
        #[arg(long)]
        description: String,

        #[arg(long)]
        amount: f64,

        #[arg(long)]
        date: String,
    },
}

#[derive(Debug, Serialize)]
struct PredictionRow {
    description: String,
    amount: f64,
    category: String,
    confidence: f64,
}

#[derive(Debug, Serialize)]
struct FeatureRow {
    name: String,
    value: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Classify {
            description,
            amount,
            date,
            weekend_from_date,
            json,
        } => {
            let txn = make_transaction(&description, amount, &date)?;
            let classifier = build_classifier(weekend_from_date);
            let prediction = classifier.predict(&txn);

            if json {
                let row = PredictionRow {
                    description: txn.description,
                    amount: txn.amount,
                    category: prediction.category.label().to_string(),
                    confidence: prediction.confidence,
                };
                println!("{}", serde_json::to_string_pretty(&row)?);
            } else {
                println!(
                    "[{}] confidence={:.2} | {}",
                    prediction.category, prediction.confidence, txn.description
                );
            }
        }

        Command::Batch {
            csv,
            tz,
            limit,
            weekend_from_date,
            json,
        } => {
            if !csv.exists() {
                bail!("CSV not found: {} (pass --csv <path>)", csv.display());
            }

            let mut txns = read_statement(&csv)
                .with_context(|| format!("parsing {}", csv.display()))?;

            if let Some(tz) = &tz {
                for txn in &mut txns {
                    let utc = DateTime::<Utc>::from_naive_utc_and_offset(txn.date, Utc);
                    txn.date = to_local(utc, tz)?;
                }
            }

            let classifier = build_classifier(weekend_from_date);
            let summary = summarize(&classifier, &txns);

            if json {
                let rows: Vec<PredictionRow> = txns
                    .iter()
                    .map(|txn| {
                        let prediction = classifier.predict(txn);
                        PredictionRow {
                            description: txn.description.clone(),
                            amount: txn.amount,
                            category: prediction.category.label().to_string(),
                            confidence: prediction.confidence,
                        }
                    })
                    .collect();
                let out = serde_json::json!({
                    "transactions": rows,
                    "summary": summary,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Classified {} transactions from {}\n", txns.len(), csv.display());

                for txn in txns.iter().take(limit) {
                    let prediction = classifier.predict(txn);
                    println!(
                        "[{}] confidence={:.2} | {:>12.0} | {}",
                        prediction.category, prediction.confidence, txn.amount, txn.description
                    );
                }
                if txns.len() > limit {
                    println!("... and {} more", txns.len() - limit);
                }

                println!();
                for row in &summary {
                    println!(
                        "{}: {} transactions, total {:.0} — mean confidence {:.2}",
                        row.category, row.transaction_count, row.total_amount, row.mean_confidence
                    );
                }
            }
        }

        Command::Features {
            description,
            amount,
            date,
        } => {
            let txn = make_transaction(&description, amount, &date)?;
            let extractor = FeatureExtractor::new()?;
            let rows: Vec<FeatureRow> = extractor
                .feature_names()
                .into_iter()
                .zip(extractor.extract(&txn))
                .map(|(name, value)| FeatureRow { name, value })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

fn make_transaction(description: &str, amount: f64, date: &str) -> Result<Transaction> {
    let date = parse_timestamp(date).with_context(|| format!("parsing --date '{date}'"))?;
    Ok(Transaction::new(description, amount, date))
}

fn build_classifier(weekend_from_date: bool) -> CategoryClassifier {
    let source = if weekend_from_date {
        WeekendSource::TransactionDate
    } else {
        WeekendSource::SystemClock
    };
    CategoryClassifier::new().weekend_from(source)
}
