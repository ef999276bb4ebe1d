//! One-shot subcommands
//!
//! API commands print the `ApiResult` as JSON on stdout and return whether the call
//! succeeded, which becomes the exit status.

use crate::{AppError, OutputFormat};
use wordcard::api::{ApiClient, ApiResult};
use wordcard::model::Record;
use wordcard::tokenizer::{normalize_word, tokenize as tokenize_text};

/// Handle the tokenize command
pub fn tokenize(text: &str, format: OutputFormat) -> Result<(), AppError> {
    let tokenized = tokenize_text(text);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tokenized)?),
        OutputFormat::Text => {
            println!("context: {:?}", tokenized.context);
            for token in &tokenized.tokens {
                println!("{:>3}  {:<20} {}", token.position, token.origin, token.text);
            }
        }
    }

    Ok(())
}

/// Handle the record command
pub async fn record(client: &ApiClient, word: &str, context: &str) -> Result<bool, AppError> {
    let normalized = normalize_word(word);
    if normalized.is_empty() {
        return Err(AppError::EmptyWord(word.to_string()));
    }

    // Same context rules as the interactive field
    let context = tokenize_text(context);
    let result = client
        .record_word(Record::new(normalized, context.record_context()))
        .await;
    print_result(&result)
}

pub async fn list(client: &ApiClient) -> Result<bool, AppError> {
    let result = client.list_words().await;
    print_result(&result)
}

pub async fn define(client: &ApiClient, word: &str, format: OutputFormat) -> Result<bool, AppError> {
    let result = client.get_definition(word).await;

    match format {
        OutputFormat::Json => print_result(&result),
        OutputFormat::Text => {
            if !result.success {
                eprintln!("{}", result.message_or("lookup failed"));
                return Ok(false);
            }
            print!("{}", result.entry()?);
            Ok(true)
        }
    }
}

pub async fn master(client: &ApiClient, word: &str) -> Result<bool, AppError> {
    let result = client.set_mastered(word).await;
    print_result(&result)
}

pub async fn delete(client: &ApiClient, word: &str) -> Result<bool, AppError> {
    let result = client.delete_word(word).await;
    print_result(&result)
}

/// Handle the dump command
///
/// Words are fetched one after the other; a word whose lookup fails is reported on
/// stderr and skipped.
pub async fn dump(client: &ApiClient) -> Result<bool, AppError> {
    let listing = client.list_words().await;
    if !listing.success {
        eprintln!("{}", listing.message_or("failed to list words"));
        return Ok(false);
    }

    let words = listing.words()?;
    let mut dumped = 0;
    for word in &words {
        let result = client.get_definition(word).await;
        if !result.success {
            eprintln!("{}: {}", word, result.message_or("lookup failed"));
            continue;
        }
        let entry = match result.entry() {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("{}: {}", word, err);
                continue;
            }
        };
        if dumped > 0 {
            println!();
        }
        print!("{}", entry);
        dumped += 1;
    }

    eprintln!("{} word(s) dumped", dumped);
    Ok(dumped == words.len())
}

fn print_result(result: &ApiResult) -> Result<bool, AppError> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(result.success)
}
