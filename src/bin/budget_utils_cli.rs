use std::{env, process};

use budget_utils::{
    calculate_monthly_value,
    config::{Config, ConfigManager},
    currency::{format_currency_with, format_percentage_with, FormatOptions, CURRENCY_FALLBACK},
    init,
    numeric::parse_float,
    summary::{summarize, BudgetEntry, EntryKind},
    utils::build_info,
    validation::{FormCheck, Rule},
    Frequency,
};
use colored::Colorize;

fn main() {
    init();

    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_usage();
        return Ok(1);
    };

    let manager = ConfigManager::default_location();

    match command.as_str() {
        "currency" => {
            let value = required(args.next())?;
            let config = manager.load()?;
            println!("{}", render_currency(&config, parse_float(&value)));
        }
        "percent" => {
            let value = required(args.next())?;
            let config = manager.load()?;
            println!(
                "{}",
                format_percentage_with(
                    parse_float(&value),
                    &config.locale,
                    config.percentage_precision
                )
            );
        }
        "monthly" => {
            let value = parse_float(&required(args.next())?);
            let config = manager.load()?;
            let frequency = args
                .next()
                .map(|tag| Frequency::from_tag(&tag))
                .unwrap_or(config.default_frequency);
            println!(
                "{} per month ({})",
                calculate_monthly_value(value, frequency),
                frequency.label()
            );
        }
        "check" => {
            let name = required(args.next())?;
            let rule = Rule::from_name(&name).ok_or_else(|| format!("unknown rule '{name}'"))?;
            let value = args.next().unwrap_or_default();
            let mut form = FormCheck::today();
            form.field("value", &value, &[rule]);
            return Ok(match form.finish() {
                Ok(()) => {
                    println!("{}", "valid".green());
                    0
                }
                Err(issues) => {
                    for issue in issues {
                        println!("{} {}", "invalid:".red(), issue.message);
                    }
                    1
                }
            });
        }
        "summary" => {
            let entries = args
                .map(|arg| parse_entry(&arg))
                .collect::<Result<Vec<_>, _>>()?;
            let config = manager.load()?;
            let lines = summarize(&entries).render(&config);
            println!("Income:       {}", lines.income);
            println!("Expenses:     {}", lines.expenses);
            println!("Net:          {}", lines.net);
            println!("Savings rate: {}", lines.savings_rate);
        }
        "config" => {
            let config = manager.load()?;
            println!("# {}", manager.config_path().display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        "version" => println!("{}", build_info()),
        _ => {
            print_usage();
            return Ok(1);
        }
    }

    Ok(0)
}

fn required(arg: Option<String>) -> Result<String, String> {
    arg.ok_or_else(|| "missing argument (run without arguments for usage)".to_string())
}

fn render_currency(config: &Config, amount: f64) -> String {
    if amount.is_nan() {
        return CURRENCY_FALLBACK.to_string();
    }
    let options = FormatOptions {
        negative_style: config.negative_style,
        ..FormatOptions::default()
    };
    format_currency_with(amount, &config.currency, &config.locale, &options)
}

/// Parses `income:2000:biweekly` style entries; the frequency defaults to monthly.
fn parse_entry(arg: &str) -> Result<BudgetEntry, String> {
    let mut parts = arg.splitn(3, ':');
    let kind = match parts.next() {
        Some("income") => EntryKind::Income,
        Some("expense") => EntryKind::Expense,
        _ => return Err(format!("entry '{arg}' must start with income: or expense:")),
    };
    let amount = parts.next().map(parse_float).unwrap_or(f64::NAN);
    if amount.is_nan() {
        return Err(format!("entry '{arg}' has no amount"));
    }
    let frequency = match parts.next() {
        Some(tag) => tag.parse::<Frequency>().map_err(|err| err.to_string())?,
        None => Frequency::Monthly,
    };
    Ok(BudgetEntry {
        label: arg.to_string(),
        amount,
        frequency,
        kind,
    })
}

fn print_usage() {
    eprintln!(
        "Usage: budget_utils_cli <command>\n\
         Commands:\n  \
         currency <value>\n  \
         percent <value>\n  \
         monthly <value> [weekly|biweekly|monthly|annually]\n  \
         check <required|number|non-negative|email|strong-password|future-date> <value>\n  \
         summary <income|expense>:<amount>[:<frequency>]...\n  \
         config\n  \
         version"
    );
}
