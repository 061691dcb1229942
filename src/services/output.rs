use crate::domain::models::{ErrBody, ErrOut, JsonOut};
use serde::Serialize;

fn emit_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return emit_json(data);
    }
    for d in data {
        println!("{}", row(d));
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return emit_json(data);
    }
    println!("{}", row(&data));
    Ok(())
}

/// Failure envelope. JSON goes to stdout so callers parse one stream;
/// text goes to stderr.
pub fn print_error(json: bool, code: &str, message: &str) {
    if !json {
        eprintln!("error: {message}");
        return;
    }
    let out = ErrOut {
        ok: false,
        error: ErrBody {
            code: code.to_string(),
            message: message.to_string(),
        },
    };
    match serde_json::to_string_pretty(&out) {
        Ok(rendered) => println!("{rendered}"),
        Err(_) => {
            println!(r#"{{"ok":false,"error":{{"code":"INTERNAL","message":"output failure"}}}}"#)
        }
    }
}
