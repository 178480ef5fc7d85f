//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todolist_core` linkage.
//! - Parse dates from arguments and print their day counts.
//!
//! Usage: `todolist_cli [MDY|DMY|YMD] [DATE...]`

use todolist_core::{parse_default, DateFormat};

fn main() {
    println!("todolist_core ping={}", todolist_core::ping());
    println!("todolist_core version={}", todolist_core::core_version());

    let mut args = std::env::args().skip(1).peekable();
    let format = match args.peek().map(|arg| arg.parse::<DateFormat>()) {
        Some(Ok(format)) => {
            args.next();
            format
        }
        _ => DateFormat::default(),
    };

    for arg in args {
        match parse_default(&arg, format) {
            Some(date) => println!(
                "{arg} format={} day_count={} leap_year={}",
                format.code(),
                date.day_count(),
                todolist_core::is_leap_year(date.year())
            ),
            None => println!("{arg} format={} invalid", format.code()),
        }
    }
}
