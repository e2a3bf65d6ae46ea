use anyhow::{bail, Result};

use crate::api::http::HttpSportsApi;
use crate::api::SportsApi;
use crate::app::empty_events_message;
use crate::config;
use crate::util::markdown;

/// Handle `matchday ask <question>`: one-shot chat without entering the TUI.
pub async fn handle_ask(args: &[String]) -> Result<()> {
    let question = parse_ask_args(args)?;

    let config = config::load_config()?;
    let api = HttpSportsApi::new(config.base_url());
    let reply = api.chat(&question).await?;

    println!("{}", markdown::to_plain(&reply));
    Ok(())
}

/// Handle `matchday events [--type <sport>]`: print the event list to stdout.
pub async fn handle_events(args: &[String]) -> Result<()> {
    let filter = parse_events_args(args)?;

    let config = config::load_config()?;
    let api = HttpSportsApi::new(config.base_url());
    let events = api.events(&filter).await?;

    if events.is_empty() {
        println!("{}", empty_events_message(&filter));
        return Ok(());
    }

    for event in events {
        let score = match (event.home_score, event.away_score) {
            (Some(h), Some(a)) => format!(" {h}-{a}"),
            _ => String::new(),
        };
        println!(
            "[{}] {} vs {}{} — {}, {} ({} at {})",
            event.status.label(),
            event.home_team,
            event.away_team,
            score,
            event.competition,
            event.location,
            event.formatted_date(),
            event.formatted_time(),
        );
    }
    Ok(())
}

pub fn parse_ask_args(args: &[String]) -> Result<String> {
    let question = args.join(" ").trim().to_string();
    if question.is_empty() {
        bail!("Usage: matchday ask <question>\n\nExamples:\n  matchday ask \"when is the next football match?\"\n  matchday ask show me the live scores");
    }
    Ok(question)
}

pub fn parse_events_args(args: &[String]) -> Result<String> {
    let mut filter = "all".to_string();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "-t" | "--type" => {
                i += 1;
                if i < args.len() {
                    filter = args[i].to_lowercase();
                } else {
                    bail!("Missing value for -t/--type flag");
                }
            }
            other => {
                bail!("Unknown argument: {other}\n\nUsage: matchday events [--type <sport>]");
            }
        }
        i += 1;
    }

    Ok(filter)
}

pub fn print_help() {
    println!("matchday — terminal dashboard for sports events and scores\n");
    println!("USAGE:");
    println!("  matchday                    Launch the dashboard");
    println!("  matchday ask <question>     Ask the assistant a question");
    println!("  matchday events [options]   List events");
    println!();
    println!("EVENTS OPTIONS:");
    println!("  -t, --type <sport>  Filter by sport (all, football, basketball, cricket)");
    println!();
    println!("EXAMPLES:");
    println!("  matchday ask \"when is the next football match?\"");
    println!("  matchday events --type cricket");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ask_joins_words_into_one_question() {
        let question = parse_ask_args(&args(&["when", "is", "the", "next", "match?"])).unwrap();
        assert_eq!(question, "when is the next match?");
    }

    #[test]
    fn ask_accepts_quoted_question() {
        let question = parse_ask_args(&args(&["when is the next match?"])).unwrap();
        assert_eq!(question, "when is the next match?");
    }

    #[test]
    fn ask_without_question_fails() {
        let result = parse_ask_args(&args(&[]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Usage"));
    }

    #[test]
    fn ask_whitespace_only_fails() {
        assert!(parse_ask_args(&args(&["  ", " "])).is_err());
    }

    #[test]
    fn events_defaults_to_all() {
        assert_eq!(parse_events_args(&args(&[])).unwrap(), "all");
    }

    #[test]
    fn events_type_short_flag() {
        assert_eq!(
            parse_events_args(&args(&["-t", "football"])).unwrap(),
            "football"
        );
    }

    #[test]
    fn events_type_long_flag_lowercases() {
        assert_eq!(
            parse_events_args(&args(&["--type", "Cricket"])).unwrap(),
            "cricket"
        );
    }

    #[test]
    fn events_missing_type_value_fails() {
        let result = parse_events_args(&args(&["--type"]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Missing value"));
    }

    #[test]
    fn events_unknown_argument_fails() {
        let result = parse_events_args(&args(&["--bogus"]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown argument"));
    }
}
