use std::io::{BufRead, Write};

use log::info;
use math_expression::{extract, parse, Direction, ExtractOptions};

fn main() -> std::io::Result<()> {
    env_logger::init();

    let mut direction = Direction::Forward;
    let options = ExtractOptions::default();

    println!("math-expression REPL (:forward, :backward, :tokens <expr>, :extract <text>)");

    loop {
        print!("\x1b[0;36m > ");

        print!("\x1b[0;0m");

        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim_end_matches(['\n', '\r']);

        match line.trim() {
            ":forward" => {
                direction = Direction::Forward;
                info!("parsing forward");
                continue;
            }
            ":backward" => {
                direction = Direction::Backward;
                info!("parsing backward");
                continue;
            }
            _ => {}
        }

        if let Some(expr) = line.strip_prefix(":tokens ") {
            println!("{:?}", parse(expr, direction));
            continue;
        }

        if let Some(text) = line.strip_prefix(":extract ") {
            let span = extract(text, text.chars().count(), &options);
            match span {
                Some((start, end)) => {
                    let found: String = text.chars().skip(start).take(end - start).collect();
                    println!("{start}..{end} {found:?}");
                }
                None => println!("None"),
            }
            continue;
        }

        println!("{:?}", math_expression::evaluate(line, direction));
    }
}
